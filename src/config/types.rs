//! Configuration types

use serde::Deserialize;

use crate::backend::DEFAULT_BASE_URL;

/// Complete application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the planning service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Initial form control values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSettings {
    /// City preselected at startup (must match a roster entry to apply)
    #[serde(default)]
    pub default_city: Option<String>,

    /// Email prefilled at startup
    #[serde(default)]
    pub default_email: String,
}

/// UI behavior toggles
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while a request is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}
