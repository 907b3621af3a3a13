//! Repository configuration file support.
//!
//! Backend selection and the remote endpoint are read from a TOML file,
//! with an environment override for the endpoint so deployments can point
//! the dashboard at a different API without editing files.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use super::repository::RepositoryError;

/// Environment variable overriding the configured GraphQL endpoint.
pub const ENDPOINT_ENV_VAR: &str = "FLEETDESK_GRAPHQL_URL";

/// Default configuration file name, searched in the current and parent
/// directories.
pub const CONFIG_FILE_NAME: &str = "fleetdesk.toml";

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub remote: RemoteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Remote endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080/graphql".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            repository: RepositorySettings {
                repo_type: "local".to_string(),
            },
            remote: RemoteSettings::default(),
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let mut config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `fleetdesk.toml` in the current directory, then the
    /// parent directory. Falls back to the default configuration (local
    /// repository) when no file is found.
    pub fn from_default_locations() -> Result<Self, RepositoryError> {
        for candidate in [
            Path::new(CONFIG_FILE_NAME).to_path_buf(),
            Path::new("..").join(CONFIG_FILE_NAME),
        ] {
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                self.remote.endpoint = endpoint;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[repository]\ntype = \"remote\"\n\n[remote]\nendpoint = \"https://fleet.example/graphql\""
        )
        .unwrap();

        let config = RepositoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.repository.repo_type, "remote");
        assert_eq!(config.remote.endpoint, "https://fleet.example/graphql");
    }

    #[test]
    fn test_remote_section_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[repository]\ntype = \"local\"").unwrap();

        let config = RepositoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.remote.endpoint, default_endpoint());
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = RepositoryConfig::from_file("/nonexistent/fleetdesk.toml");
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError(_))
        ));
    }
}
