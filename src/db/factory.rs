//! Factory for creating repository instances.

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repository::{FleetRepository, RepositoryError, RepositoryResult};

/// Available repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    Local,
    Remote,
}

impl FromStr for RepositoryType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(RepositoryType::Local),
            "remote" => Ok(RepositoryType::Remote),
            other => Err(RepositoryError::ConfigurationError(format!(
                "unknown repository type '{other}' (expected 'local' or 'remote')"
            ))),
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Arc<dyn FleetRepository> {
        Arc::new(super::repositories::LocalRepository::new())
    }

    /// Create a repository backed by the remote GraphQL API.
    #[cfg(feature = "remote-repo")]
    pub fn create_remote(endpoint: &str) -> Arc<dyn FleetRepository> {
        let client = crate::remote::GraphqlClient::new(endpoint);
        Arc::new(super::repositories::RemoteRepository::new(client))
    }

    /// Create the repository selected by the given configuration.
    pub fn create(config: &RepositoryConfig) -> RepositoryResult<Arc<dyn FleetRepository>> {
        match RepositoryType::from_str(&config.repository.repo_type)? {
            #[cfg(feature = "local-repo")]
            RepositoryType::Local => Ok(Self::create_local()),
            #[cfg(not(feature = "local-repo"))]
            RepositoryType::Local => Err(RepositoryError::ConfigurationError(
                "local repository support is not compiled in".to_string(),
            )),
            #[cfg(feature = "remote-repo")]
            RepositoryType::Remote => Ok(Self::create_remote(&config.remote.endpoint)),
            #[cfg(not(feature = "remote-repo"))]
            RepositoryType::Remote => Err(RepositoryError::ConfigurationError(
                "remote repository support is not compiled in".to_string(),
            )),
        }
    }
}
