//! Configuration file parsing for the Crisis Ops Console
//!
//! Supports `.crisisops/config.toml` next to the working directory.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::{BackendSettings, BehaviorSettings, FormSettings, Settings};
