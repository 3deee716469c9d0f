//! Application layer - state management and orchestration

pub mod handler;
pub mod message;
pub mod report;
pub mod signals;
pub mod state;

// Re-export handler types for event loop integration
pub use handler::{Task, UpdateAction, UpdateResult};

use crate::common::prelude::*;
use crate::config::Settings;
use crate::tui;

/// Main application entry point
pub async fn run(settings: Settings) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Crisis Ops Console starting");
    info!("Backend: {}", settings.backend.base_url);
    info!("═══════════════════════════════════════════════════════");

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Crisis Ops Console exiting");
    result
}
