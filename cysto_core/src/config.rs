//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/cystoplan/config.toml`.
//! The core operations never read it; it exists for callers that write
//! export artifacts and want stable file naming.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}

/// Export artifact location and naming
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_report_filename")]
    pub report_filename: String,

    #[serde(default = "default_calendar_filename")]
    pub calendar_filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            report_filename: default_report_filename(),
            calendar_filename: default_calendar_filename(),
        }
    }
}

// Default value functions
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_report_filename() -> String {
    "bladder_treatment_plan.txt".into()
}

fn default_calendar_filename() -> String {
    "bladder_surveillance_schedule.ics".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });
        base.join("cystoplan").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.export.report_filename, "bladder_treatment_plan.txt");
        assert_eq!(
            config.export.calendar_filename,
            "bladder_surveillance_schedule.ics"
        );
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.export.report_filename, parsed.export.report_filename);
        assert_eq!(config.export.output_dir, parsed.export.output_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[export]
report_filename = "plan.txt"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.report_filename, "plan.txt");
        // untouched fields keep their defaults
        assert_eq!(
            config.export.calendar_filename,
            "bladder_surveillance_schedule.ics"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\noutput_dir = \"/tmp/exports\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/exports"));
    }
}
