use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::format::{DEFAULT_RELEASE_SEPARATOR, FormatOptions};

/// Formatting configuration, usually read from a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    /// Fields to emit; unset keeps each version's own count
    pub field_count: Option<usize>,
    /// Force the release tag in or out; unset keeps each version's own state
    pub include_release: Option<bool>,
    pub release_separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            field_count: None,
            include_release: None,
            release_separator: DEFAULT_RELEASE_SEPARATOR.to_string(),
        }
    }
}

impl From<FormatConfig> for FormatOptions {
    fn from(config: FormatConfig) -> Self {
        FormatOptions {
            field_count: config.field_count,
            include_release: config.include_release,
            release_separator: config.release_separator,
        }
    }
}

impl FormatConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Returns the path to the data directory for dotver.
/// Uses $XDG_DATA_HOME/dotver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/dotver,
/// or ./dotver if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("dotver.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("dotver")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn format_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<FormatConfig>(json!({
            "fieldCount": 3
        }))
        .unwrap();

        assert_eq!(result.field_count, Some(3));
        assert_eq!(result.include_release, None);
        assert_eq!(result.release_separator, "_");
    }

    #[test]
    fn format_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<FormatConfig>(json!({
            "fieldCount": 5,
            "includeRelease": true,
            "releaseSeparator": "~"
        }))
        .unwrap();

        assert_eq!(
            result,
            FormatConfig {
                field_count: Some(5),
                include_release: Some(true),
                release_separator: "~".to_string(),
            }
        );
    }

    #[test]
    fn format_config_converts_into_options() {
        let options = FormatOptions::from(FormatConfig {
            field_count: Some(4),
            include_release: Some(false),
            release_separator: "-".to_string(),
        });

        assert_eq!(
            options,
            FormatOptions::new()
                .field_count(4)
                .include_release(false)
                .release_separator("-")
        );
    }

    #[test]
    fn format_config_default_matches_format_options_default() {
        assert_eq!(
            FormatOptions::from(FormatConfig::default()),
            FormatOptions::default()
        );
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"releaseSeparator": "+"}}"#).unwrap();

        let config = FormatConfig::load(file.path()).unwrap();

        assert_eq!(config.release_separator, "+");
        assert_eq!(config.field_count, None);
    }

    #[test]
    fn load_fails_on_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(FormatConfig::load(file.path()).is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/dotver"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/dotver"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./dotver"));
    }
}
