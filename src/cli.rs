use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::config::normalize_api_base;
use crate::form::{PAYMENT_METHOD_OPTIONS, POLICY_TYPE_OPTIONS};
use crate::types::EntityKind;

#[derive(Parser)]
#[command(name = "coverdesk")]
#[command(about = "Manage insurance customers, policies, claims and payments")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides $COVERDESK_API_BASE and the config file)
    #[arg(long, global = true, value_parser = parse_api_base)]
    pub api_base: Option<String>,

    /// Defaults to the TUI when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive TUI
    Tui {
        /// Tab to open on (customers, policies, claims, payments)
        #[arg(long, value_parser = parse_kind)]
        tab: Option<EntityKind>,
    },

    /// List, create and delete customers
    #[command(visible_alias = "customers")]
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// List, create and delete policies
    #[command(visible_alias = "policies")]
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },

    /// List and submit claims
    #[command(visible_alias = "claims")]
    Claim {
        #[command(subcommand)]
        action: ClaimAction,
    },

    /// List and process payments
    #[command(visible_alias = "payments")]
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// List all customers
    Ls {
        /// Output the raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a customer
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
    },
    /// Delete a customer
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PolicyAction {
    /// List all policies
    Ls {
        #[arg(long)]
        json: bool,
    },
    /// Create a policy; the server computes its coverage limit
    Create {
        #[arg(long)]
        customer_id: String,
        /// HEALTH, AUTO, LIFE or HOME (case-insensitive)
        #[arg(long, value_parser = parse_policy_type)]
        policy_type: String,
        /// Premium amount
        #[arg(long)]
        premium: String,
    },
    /// Delete a policy
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ClaimAction {
    /// List all claims
    Ls {
        #[arg(long)]
        json: bool,
    },
    /// Submit a claim against a policy
    Create {
        #[arg(long)]
        policy_id: String,
        #[arg(long)]
        claim_amount: String,
        /// Date of the incident (YYYY-MM-DD)
        #[arg(long)]
        incident_date: String,
    },
}

#[derive(Subcommand)]
pub enum PaymentAction {
    /// List all payments
    Ls {
        #[arg(long)]
        json: bool,
    },
    /// Process a payment
    Create {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        amount: String,
        /// CREDIT_CARD, DEBIT_CARD, BANK_TRANSFER or UPI (case-insensitive)
        #[arg(long, value_parser = parse_payment_method)]
        payment_method: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one configuration value
    Get {
        /// api_base, request_timeout or initial_tab
        key: String,
    },
    /// Set one configuration value
    Set { key: String, value: String },
    /// Print the config file path
    Path,
}

fn parse_api_base(s: &str) -> Result<String, String> {
    normalize_api_base(s).map_err(|e| e.to_string())
}

fn parse_kind(s: &str) -> Result<EntityKind, String> {
    s.parse().map_err(|e: crate::error::CoverdeskError| e.to_string())
}

fn parse_option(s: &str, options: &[(&str, &str)]) -> Result<String, String> {
    let upper = s.trim().to_ascii_uppercase().replace('-', "_");
    options
        .iter()
        .find(|(value, _)| *value == upper)
        .map(|(value, _)| value.to_string())
        .ok_or_else(|| {
            let choices: Vec<&str> = options.iter().map(|(v, _)| *v).collect();
            format!("must be one of: {}", choices.join(", "))
        })
}

fn parse_policy_type(s: &str) -> Result<String, String> {
    parse_option(s, POLICY_TYPE_OPTIONS)
}

fn parse_payment_method(s: &str) -> Result<String, String> {
    parse_option(s, PAYMENT_METHOD_OPTIONS)
}

/// Write completions for `shell` to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "coverdesk", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["coverdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.api_base.is_none());
    }

    #[test]
    fn test_global_api_base_after_subcommand() {
        let cli = Cli::try_parse_from([
            "coverdesk",
            "claim",
            "ls",
            "--api-base",
            "http://127.0.0.1:8080/api/",
        ])
        .unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://127.0.0.1:8080/api"));
    }

    #[test]
    fn test_tab_accepts_plural() {
        let cli = Cli::try_parse_from(["coverdesk", "tui", "--tab", "payments"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Tui {
                tab: Some(EntityKind::Payment)
            })
        ));
    }

    #[test]
    fn test_payment_method_is_normalized() {
        let cli = Cli::try_parse_from([
            "coverdesk",
            "payment",
            "create",
            "--customer-id",
            "1",
            "--amount",
            "250",
            "--payment-method",
            "bank-transfer",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Payment {
                action: PaymentAction::Create { payment_method, .. },
            }) => assert_eq!(payment_method, "BANK_TRANSFER"),
            _ => panic!("expected payment create"),
        }
    }

    #[test]
    fn test_claims_have_no_delete() {
        assert!(Cli::try_parse_from(["coverdesk", "claim", "delete", "1"]).is_err());
        assert!(Cli::try_parse_from(["coverdesk", "payment", "delete", "1"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_policy_type() {
        assert!(
            Cli::try_parse_from([
                "coverdesk",
                "policy",
                "create",
                "--customer-id",
                "1",
                "--policy-type",
                "pet",
                "--premium",
                "10",
            ])
            .is_err()
        );
    }
}
