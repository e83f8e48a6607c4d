use std::sync::Arc;

use crate::api::HttpApi;
use crate::config::Config;
use crate::controller::Session;
use crate::error::Result;
use crate::types::EntityKind;

/// Launch the TUI on `tab`, or on the configured initial tab
pub async fn cmd_tui(tab: Option<EntityKind>, api_base: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config, api_base)?;
    tracing::info!("starting TUI against {}", api.base());

    let session = Arc::new(Session::new(api, tab.unwrap_or(config.initial_tab)));
    crate::tui::run(session).await
}
