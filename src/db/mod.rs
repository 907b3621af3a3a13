//! Data access for fleet records via the Repository pattern.
//!
//! The module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic              │
//! │  - Deletion integrity guard                              │
//! │  - Eligibility filtering, dashboard assembly             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ Remote Repository            │ Local Repository
//!     │ (GraphQL over HTTP)          │ (in-memory)
//!     └──────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: trait definition and error types
//! - `repositories::remote`: GraphQL-backed implementation
//! - `repositories::local`: in-memory implementation for unit testing and
//!   local development
//! - `factory`: factory for creating repository instances
//! - `repo_config`: TOML/env configuration for backend selection

#[cfg(not(any(feature = "remote-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
pub use repo_config::RepositoryConfig;
pub use repository::{FleetRepository, RepositoryError, RepositoryResult};

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::RemoteRepository;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Create the repository selected by the default configuration lookup
/// (`fleetdesk.toml`, then environment overrides).
pub fn init_default_repository() -> Result<Arc<dyn FleetRepository>> {
    let config = RepositoryConfig::from_default_locations()
        .context("Failed to load repository configuration")?;
    RepositoryFactory::create(&config).context("Failed to create repository backend")
}
