//! Client configuration.
//!
//! Settings come from an optional `sonercore.toml` and are overridden by
//! command line flags. Defaults:
//! - `service_url`: `http://localhost:8081/api/analyze`
//! - `timeout_secs`: 120
//! - `color`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8081/api/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONFIG_FILE: &str = "sonercore.toml";

/// Raw `sonercore.toml` contents. Every key is optional.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct FileConfig {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub color: Option<bool>,
}

/// Fully-resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_url: String,
    pub timeout: Duration,
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            color: true,
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub service_url: Option<String>,
    pub no_color: bool,
}

impl ClientConfig {
    /// Load from `explicit` if given (must exist), else from
    /// `sonercore.toml` in the current directory when present.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let file = match explicit {
            Some(path) => Some(read_file_config(path)?),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(read_file_config(&default_path)?)
                } else {
                    None
                }
            }
        };
        Self::from_file_config(file.unwrap_or_default())
    }

    pub fn from_file_config(file: FileConfig) -> ConfigResult<Self> {
        let defaults = Self::default();
        let service_url = file.service_url.unwrap_or(defaults.service_url);
        if service_url.trim().is_empty() {
            return Err(ConfigError::Invalid("service_url must not be empty".to_string()));
        }
        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than zero".to_string()));
        }
        Ok(Self {
            service_url,
            timeout: Duration::from_secs(timeout_secs),
            color: file.color.unwrap_or(defaults.color),
        })
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(url) = &overrides.service_url {
            self.service_url = url.clone();
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }
}

fn read_file_config(path: &Path) -> ConfigResult<FileConfig> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::from_file_config(FileConfig::default()).unwrap();
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.service_url, "http://localhost:8081/api/analyze");
    }

    #[test]
    fn test_explicit_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_url = \"http://analysis.internal:9000/api/analyze\"").unwrap();
        writeln!(file, "timeout_secs = 30").unwrap();
        writeln!(file, "color = true").unwrap();

        let cfg = ClientConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.service_url, "http://analysis.internal:9000/api/analyze");
        assert_eq!(cfg.timeout, Duration::from_secs(30));

        let cfg = cfg.with_overrides(&ConfigOverrides {
            service_url: Some("http://127.0.0.1:1/api/analyze".to_string()),
            no_color: true,
        });
        assert_eq!(cfg.service_url, "http://127.0.0.1:1/api/analyze");
        assert!(!cfg.color);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = ClientConfig::load(Some(Path::new("/nonexistent/sonercore.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ClientConfig::from_file_config(FileConfig {
            timeout_secs: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"soon\"").unwrap();
        let err = ClientConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
