//! Record commands: `coverdesk <kind> ls|create|delete`.
//!
//! Every command drives the same view-model controller as the TUI, so the
//! messages printed here are the ones the TUI would show.

use owo_colors::OwoColorize;

use super::{connect, print_collection, print_refreshed, prompt_yes_no, report_message};
use crate::error::{CoverdeskError, Result};
use crate::types::EntityKind;

/// List every record of `kind`
pub async fn cmd_ls(kind: EntityKind, json: bool, api_base: Option<&str>) -> Result<()> {
    let session = connect(api_base, kind)?;
    session.list(kind).await;
    report_message(&session)?;

    if json {
        let collection = session.read(|m| m.collection(kind));
        println!("{}", collection.to_json()?);
    } else {
        print_collection(&session, kind);
    }
    Ok(())
}

/// Create a record from `(field name, value)` pairs, then show the
/// refreshed list.
///
/// The server's reply is printed as soon as the record is accepted. A failed
/// refetch afterwards is only a warning; the record exists either way.
pub async fn cmd_create(
    kind: EntityKind,
    values: &[(&str, &str)],
    api_base: Option<&str>,
) -> Result<()> {
    let session = connect(api_base, kind)?;
    session.update(|m| -> Result<()> {
        let form = m.form_mut(kind);
        for (name, value) in values {
            form.set(name, *value)?;
        }
        Ok(())
    })?;

    let Some(form) = session.update(|m| m.begin_create(kind)) else {
        return report_message(&session);
    };
    let refetch = session.send_create(form).await;
    report_message(&session)?;
    if let Some(ticket) = refetch {
        print_refreshed(&session, ticket).await;
    }
    Ok(())
}

/// Delete a customer or policy after confirmation
pub async fn cmd_delete(kind: EntityKind, id: i64, yes: bool, api_base: Option<&str>) -> Result<()> {
    let session = connect(api_base, kind)?;
    let target = session.confirm_delete(kind, id, |prompt| {
        yes || prompt_yes_no(prompt).unwrap_or_else(|e| {
            tracing::warn!("could not read confirmation: {}", e);
            false
        })
    })?;
    let Some(target) = target else {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    };

    match session.send_delete(target).await {
        Some(ticket) => {
            report_message(&session)?;
            print_refreshed(&session, ticket).await;
            Ok(())
        }
        None => {
            report_message(&session)?;
            Err(CoverdeskError::Other(format!("failed to delete {} {}", kind, id)))
        }
    }
}
