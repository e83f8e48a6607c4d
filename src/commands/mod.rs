//! Command implementations for the `coverdesk` binary.

mod config;
mod records;
mod tui;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use records::{cmd_create, cmd_delete, cmd_ls};
pub use tui::cmd_tui;

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::api::{HttpApi, InsuranceApi};
use crate::config::Config;
use crate::controller::{ListTicket, MessageLevel, Session};
use crate::display::render_table;
use crate::error::{CoverdeskError, Result};
use crate::types::EntityKind;

/// Open a session against the configured backend
pub(crate) fn connect(api_base: Option<&str>, kind: EntityKind) -> Result<Session<HttpApi>> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config, api_base)?;
    Ok(Session::new(api, kind))
}

/// Print the session message. An error-level message becomes the command's
/// error so the process exits non-zero.
pub(crate) fn report_message<A: InsuranceApi>(session: &Session<A>) -> Result<()> {
    match session.read(|m| m.message().cloned()) {
        Some(message) if message.level == MessageLevel::Error => {
            Err(CoverdeskError::Other(message.text))
        }
        Some(message) => {
            println!("{}", message.text.green());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Print the current collection for `kind` as a table
pub(crate) fn print_collection<A: InsuranceApi>(session: &Session<A>, kind: EntityKind) {
    let collection = session.read(|m| m.collection(kind));
    match render_table(&collection) {
        Some(table) => {
            println!("{table}");
            println!("\n{} {}", collection.len(), kind.plural());
        }
        None => println!("No {} found.", kind.plural()),
    }
}

/// Run the refetch that follows a successful mutation and print the list.
/// A failed refetch is printed as a warning and does not fail the command.
pub(crate) async fn print_refreshed<A: InsuranceApi>(session: &Session<A>, ticket: ListTicket) {
    let kind = ticket.kind;
    session.run_list(ticket).await;
    match session.read(|m| m.message().cloned()) {
        Some(message) if message.level == MessageLevel::Error => {
            eprintln!("{} {}", "warning:".yellow().bold(), message.text);
        }
        _ => {
            println!();
            print_collection(session, kind);
        }
    }
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` means no
pub(crate) fn prompt_yes_no(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
