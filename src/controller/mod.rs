//! View-model controller shared by the TUI and the CLI.

pub mod model;
pub mod session;

pub use model::{
    ListTicket, Message, MessageLevel, PendingDelete, ViewModel, confirm_prompt,
    create_error_message, delete_error_message, load_error_message,
};
pub use session::{DeleteOutcome, Session};
