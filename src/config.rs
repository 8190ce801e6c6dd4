/// Configuration module for the Mail Picker application.
///
/// This module provides functionality for managing the picker's window settings,
/// including:
/// - Window title, prompt text and window size
/// - Optional window icon and per-client icon images
/// - Persisting configuration to disk as JSON
/// - Determining the appropriate data directory for the application
///
/// The configuration is loaded from a `config.json` file located in the
/// platform-specific application data directory. The user's pick is never
/// stored here.
///
/// # Example
///
/// ```rust,no_run
/// use mail_picker::config::{load_config, save_config};
///
/// let mut config = load_config();
/// config.prompt = "Pick a mail app".to_string();
/// save_config(&config).expect("Failed to save config");
/// ```
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::selection::MailClient;

/// Window and content settings for the picker
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Title shown in the window's title bar
    pub window_title: String,
    /// Heading shown above the client list
    pub prompt: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Image used as the window/taskbar icon
    pub window_icon_path: Option<PathBuf>,
    /// Icon image shown next to each client's button
    pub client_icons: BTreeMap<MailClient, PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            window_title: "Demo App".to_string(),
            prompt: "Choose default email app".to_string(),
            window_width: 600.0,
            window_height: 400.0,
            window_icon_path: None,
            client_icons: BTreeMap::new(),
        }
    }
}

impl PickerConfig {
    pub fn icon_for(&self, client: MailClient) -> Option<&Path> {
        self.client_icons.get(&client).map(PathBuf::as_path)
    }
}

const APP_NAME: &str = "MailPicker";
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the application's data directory
/// Creates directory if it doesn't exist
pub fn get_data_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow!("Failed to determine user data directory"))?;

    let data_dir = project_dirs.data_dir();

    fs::create_dir_all(data_dir)
        .map_err(|e| anyhow!("Failed to create data directory: {}", e))?;

    Ok(data_dir.to_path_buf())
}

/// Parse a config document; missing fields take their defaults
pub fn parse_config(contents: &str) -> Result<PickerConfig> {
    serde_json::from_str(contents).map_err(|e| anyhow!("Failed to parse config: {}", e))
}

/// Load configuration from config.json
/// Returns default config if file doesn't exist or on error
pub fn load_config() -> PickerConfig {
    let Ok(data_dir) = get_data_directory() else {
        return PickerConfig::default();
    };

    load_config_from(&data_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from an explicit file path, falling back to defaults
pub fn load_config_from(config_path: &Path) -> PickerConfig {
    if !config_path.exists() {
        tracing::debug!("No config at {}, using defaults", config_path.display());
        return PickerConfig::default();
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}, using defaults", config_path.display(), e);
            return PickerConfig::default();
        }
    };

    parse_config(&contents).unwrap_or_else(|e| {
        tracing::warn!("{} in {}, using defaults", e, config_path.display());
        PickerConfig::default()
    })
}

/// Save configuration to config.json
pub fn save_config(config: &PickerConfig) -> Result<()> {
    let data_dir = get_data_directory()?;
    save_config_to(&data_dir.join(CONFIG_FILE_NAME), config)
}

/// Save configuration as pretty-printed JSON to an explicit file path
pub fn save_config_to(config_path: &Path, config: &PickerConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

    fs::write(config_path, json)
        .map_err(|e| anyhow!("Failed to write {}: {}", config_path.display(), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.window_title, "Demo App");
        assert_eq!(config.prompt, "Choose default email app");
        assert_eq!(config.window_width, 600.0);
        assert_eq!(config.window_height, 400.0);
        assert_eq!(config.window_icon_path, None);
        assert_eq!(config.icon_for(MailClient::AppleMail), None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"{ "prompt": "Pick one", "client_icons": { "outlook": "/tmp/outlook.png" } }"#,
        )
        .unwrap();

        assert_eq!(config.prompt, "Pick one");
        assert_eq!(config.window_title, "Demo App");
        assert_eq!(
            config.icon_for(MailClient::Outlook),
            Some(Path::new("/tmp/outlook.png"))
        );
        assert_eq!(config.icon_for(MailClient::AppleMail), None);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("{ not json").is_err());
        assert!(parse_config(r#"{ "client_icons": { "thunderbird": "/x.png" } }"#).is_err());
    }

    #[test]
    fn test_get_data_directory() {
        let result = get_data_directory();
        assert!(result.is_ok());

        let path = result.unwrap();
        let expected = ProjectDirs::from("", "", APP_NAME).unwrap();
        assert_eq!(path, expected.data_dir());
        assert!(path.is_dir());
    }

    #[test]
    fn test_save_then_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = PickerConfig::default();
        config.window_title = "Mail Picker".to_string();
        config.window_width = 640.0;
        config
            .client_icons
            .insert(MailClient::AppleMail, PathBuf::from("/tmp/mail.png"));

        save_config_to(&config_path, &config).unwrap();

        let written = fs::read_to_string(&config_path).unwrap();
        assert!(written.contains("\n  \"window_title\": \"Mail Picker\""));
        assert!(written.contains("\"apple_mail\""));

        assert_eq!(load_config_from(&config_path), config);
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_invalid_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "{ \"window_width\": \"wide\" ").unwrap();

        assert_eq!(load_config_from(&config_path), PickerConfig::default());
    }

    #[test]
    fn test_unreadable_config_gives_defaults() {
        // A directory at the config path exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(dir.path()), PickerConfig::default());
    }

    #[test]
    fn test_save_config_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("missing").join(CONFIG_FILE_NAME);
        assert!(save_config_to(&config_path, &PickerConfig::default()).is_err());
    }
}
