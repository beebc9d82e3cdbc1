//! Persistence layer for places.
//!
//! Storage goes through the Repository pattern so backends can be swapped
//! without touching callers:
//!
//! - `repository`: trait definition and error types
//! - `repositories::local`: in-memory implementation
//! - `factory`: creation from code, environment or `repository.toml`
//! - `services`: high-level operations used by the HTTP layer
//!
//! For application code, prefer the service functions:
//!
//! ```
//! use places_rust::db::{factory::RepositoryFactory, services};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RepositoryFactory::create_local();
//! let places = services::list_places(repo.as_ref()).await?;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{PlaceRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn PlaceRepository>> = OnceLock::new();

/// Initialize the global repository singleton for the configured backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = RepositoryFactory::from_env().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn PlaceRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
