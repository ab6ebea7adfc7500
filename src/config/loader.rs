//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::{RawConfig, WatchdogConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<WatchdogConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let raw: RawConfig = serde_json::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(raw).map_err(ConfigError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_legacy_config() {
        let file = write_config(
            r#"{
                "ips": ["10.0.0.1", "10.0.0.2"],
                "ports": [80, 5432],
                "names": ["web", "db"],
                "https": [false, false],
                "smtp_server": "smtp.gmail.com",
                "smtp_port": "587",
                "username": "ops@example.com",
                "password": "secret",
                "timezone": "Europe/Amsterdam"
            }"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.endpoints[1].name, "db");
        assert_eq!(config.smtp.server, "smtp.gmail.com");
        assert_eq!(config.smtp.timezone, "Europe/Amsterdam");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/server_watchdog.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_config("{ not json");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_problem_is_validation_error() {
        let file = write_config(
            r#"{
                "ips": ["10.0.0.1"], "ports": [80, 81], "names": ["web"], "https": [false],
                "smtp_server": "smtp.example.com", "smtp_port": "587",
                "username": "ops@example.com", "password": "secret",
                "timezone": "UTC"
            }"#,
        );

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("not the same size"));
    }
}
