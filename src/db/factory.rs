//! Repository factory for dependency injection.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{PlaceRepository, RepositoryError, RepositoryResult};

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable,
    /// defaulting to Local.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Centralized creation of repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn PlaceRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn PlaceRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from environment configuration.
    pub fn from_env() -> RepositoryResult<Arc<dyn PlaceRepository>> {
        Self::create(RepositoryType::from_env())
    }

    /// Create a repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn PlaceRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        Self::create(repo_type)
    }
}
