//! Settings parser for .crisisops/config.toml

use std::path::Path;

use crate::common::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CRISISOPS_DIR: &str = ".crisisops";

/// Load settings from .crisisops/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = base_dir.join(CRISISOPS_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in .crisisops/
pub fn init_config_dir(base_dir: &Path) -> Result<()> {
    let crisisops_dir = base_dir.join(CRISISOPS_DIR);

    if !crisisops_dir.exists() {
        std::fs::create_dir_all(&crisisops_dir)
            .map_err(|e| Error::config(format!("Failed to create .crisisops dir: {}", e)))?;
    }

    let config_path = crisisops_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Crisis Ops Console Configuration

[backend]
base_url = "http://localhost:5000"

[form]
# default_city = "Mumbai"
default_email = ""

[behavior]
confirm_quit = true     # Ask before quitting with a request in flight
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DEFAULT_BASE_URL;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.backend.base_url, DEFAULT_BASE_URL);
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let crisisops_dir = temp.path().join(".crisisops");
        std::fs::create_dir_all(&crisisops_dir).unwrap();

        let config = r#"
[backend]
base_url = "http://10.0.0.2:8080"

[behavior]
confirm_quit = false
"#;
        std::fs::write(crisisops_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.backend.base_url, "http://10.0.0.2:8080");
        assert!(!settings.behavior.confirm_quit);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let crisisops_dir = temp.path().join(".crisisops");
        std::fs::create_dir_all(&crisisops_dir).unwrap();
        std::fs::write(crisisops_dir.join("config.toml"), "not [ valid").unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_init_config_dir_creates_file_once() {
        let temp = tempdir().unwrap();
        init_config_dir(temp.path()).unwrap();

        let config_path = temp.path().join(".crisisops").join("config.toml");
        assert!(config_path.exists());

        let first = std::fs::read_to_string(&config_path).unwrap();
        init_config_dir(temp.path()).unwrap();
        let second = std::fs::read_to_string(&config_path).unwrap();
        assert_eq!(first, second);

        // And the generated file parses back to defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.backend.base_url, DEFAULT_BASE_URL);
    }
}
