pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod tui;
pub mod types;

pub use api::{HttpApi, InsuranceApi};
pub use config::Config;
pub use controller::{DeleteOutcome, Message, MessageLevel, Session, ViewModel};
pub use error::{CoverdeskError, Result};
pub use form::FormBuffer;
pub use types::{
    Amount, Claim, Collection, Customer, EntityKind, Payment, PaymentMethod, Policy, PolicyType,
};
