// src/config/mod.rs
mod loader;
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{info, warn};

pub use loader::load_tasks;
pub use schema::{Settings, WorkloadSettings, ReportSettings};

use crate::error::{AnalyzerResult, AnalyzerError};

/// Centralized settings handling
impl Settings {
    /// Load settings from built-in defaults, an optional file and the environment
    pub fn load(settings_path: Option<&Path>) -> AnalyzerResult<Self> {
        info!("Loading settings");

        let mut config_builder = ConfigLoader::builder();

        // Default settings
        config_builder = config_builder.add_source(
            config::File::from_str(
                include_str!("../../config/default.toml"),
                FileFormat::Toml
            )
        );

        // User-provided settings
        if let Some(path) = settings_path {
            if path.exists() {
                config_builder = config_builder.add_source(config::File::from(path));
                info!("Loading user settings from: {}", path.display());
            } else {
                warn!("Specified settings file not found: {}", path.display());
            }
        } else {
            let default_path = Self::get_default_settings_path();
            if default_path.exists() {
                config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
                info!("Loading default settings from: {}", default_path.display());
            }
        }

        // Environment variables, e.g. LOGANALYZER_WORKLOAD__MAX_DELAY_MS
        config_builder = config_builder.add_source(
            config::Environment::with_prefix("LOGANALYZER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let settings: Settings = config_builder
            .build()
            .map_err(|e| AnalyzerError::Settings(format!("Failed to build settings: {}", e)))?
            .try_deserialize()
            .map_err(|e| AnalyzerError::Settings(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Get the default settings path
    pub fn get_default_settings_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".loganalyzer/settings.toml")
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.workload.min_delay_ms > self.workload.max_delay_ms {
            return Err(AnalyzerError::Settings(format!(
                "workload.min_delay_ms ({}) is greater than workload.max_delay_ms ({})",
                self.workload.min_delay_ms, self.workload.max_delay_ms
            )));
        }
        if self.report.timestamp_format.trim().is_empty() {
            return Err(AnalyzerError::Settings("report.timestamp_format must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_embedded_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let file = settings_file("[workload]\nmax_delay_ms = 20\nmin_delay_ms = 10\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.workload.min_delay_ms, 10);
        assert_eq!(settings.workload.max_delay_ms, 20);
        assert_eq!(settings.report.timestamp_format, "%y%m%d");
    }

    #[test]
    fn test_inverted_delay_bounds_rejected() {
        let file = settings_file("[workload]\nmin_delay_ms = 300\n");
        assert!(matches!(Settings::load(Some(file.path())), Err(AnalyzerError::Settings(_))));
    }
}
