//! Interactive insurance management TUI
//!
//! - `app` - the full-screen component tying the session to the views
//! - `handlers` / `keymap` - keyboard handling
//! - `components` - header, tabs, form pane, record list, dialogs

pub mod app;
pub mod components;
pub mod handlers;
pub mod keymap;
pub mod navigation;
pub mod theme;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::HttpApi;
use crate::controller::Session;
use crate::error::{CoverdeskError, Result};

pub use app::{InsuranceApp, InsuranceAppProps};
pub use theme::Theme;

/// Run the TUI until the user quits
pub async fn run(session: Arc<Session<HttpApi>>) -> Result<()> {
    element!(InsuranceApp(session: Some(session)))
        .fullscreen()
        .await
        .map_err(|e| CoverdeskError::Other(format!("TUI error: {}", e)))
}
