use clap::Parser;
use std::process::ExitCode;

use coverdesk::cli::{
    ClaimAction, Cli, Commands, ConfigAction, CustomerAction, PaymentAction, PolicyAction,
    generate_completions,
};
use coverdesk::commands::{
    cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_create, cmd_delete,
    cmd_ls, cmd_tui,
};
use coverdesk::logging::{self, LogTarget};
use coverdesk::types::EntityKind;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let api_base = cli.api_base.as_deref();

    // The TUI owns the terminal, so its logs go to a file
    let log_target = match cli.command {
        None | Some(Commands::Tui { .. }) => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(log_target) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        None => cmd_tui(None, api_base).await,
        Some(Commands::Tui { tab }) => cmd_tui(tab, api_base).await,

        Some(Commands::Customer { action }) => match action {
            CustomerAction::Ls { json } => cmd_ls(EntityKind::Customer, json, api_base).await,
            CustomerAction::Create { name, email, dob } => {
                cmd_create(
                    EntityKind::Customer,
                    &[
                        ("name", name.as_str()),
                        ("email", email.as_str()),
                        ("dob", dob.as_str()),
                    ],
                    api_base,
                )
                .await
            }
            CustomerAction::Delete { id, yes } => {
                cmd_delete(EntityKind::Customer, id, yes, api_base).await
            }
        },

        Some(Commands::Policy { action }) => match action {
            PolicyAction::Ls { json } => cmd_ls(EntityKind::Policy, json, api_base).await,
            PolicyAction::Create {
                customer_id,
                policy_type,
                premium,
            } => {
                cmd_create(
                    EntityKind::Policy,
                    &[
                        ("customerId", customer_id.as_str()),
                        ("policyType", policy_type.as_str()),
                        ("premium", premium.as_str()),
                    ],
                    api_base,
                )
                .await
            }
            PolicyAction::Delete { id, yes } => {
                cmd_delete(EntityKind::Policy, id, yes, api_base).await
            }
        },

        Some(Commands::Claim { action }) => match action {
            ClaimAction::Ls { json } => cmd_ls(EntityKind::Claim, json, api_base).await,
            ClaimAction::Create {
                policy_id,
                claim_amount,
                incident_date,
            } => {
                cmd_create(
                    EntityKind::Claim,
                    &[
                        ("policyId", policy_id.as_str()),
                        ("claimAmount", claim_amount.as_str()),
                        ("incidentDate", incident_date.as_str()),
                    ],
                    api_base,
                )
                .await
            }
        },

        Some(Commands::Payment { action }) => match action {
            PaymentAction::Ls { json } => cmd_ls(EntityKind::Payment, json, api_base).await,
            PaymentAction::Create {
                customer_id,
                amount,
                payment_method,
            } => {
                cmd_create(
                    EntityKind::Payment,
                    &[
                        ("customerId", customer_id.as_str()),
                        ("amount", amount.as_str()),
                        ("paymentMethod", payment_method.as_str()),
                    ],
                    api_base,
                )
                .await
            }
        },

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cmd_config_show(api_base),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Path => cmd_config_path(),
        },

        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
