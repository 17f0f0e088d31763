//! Persistence seam for the domain map.

use async_trait::async_trait;

use crate::domain::entities::{DomainMap, MapError};

/// Errors surfaced by map store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] MapError),
}

/// Storage interface for the domain map.
///
/// The map is static configuration: loaded once per process, replaced as a
/// whole on regeneration, never mutated in place.
///
/// # Implementations
///
/// - [`crate::infrastructure::JsonMapStore`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MapStore: Send + Sync {
    /// Loads the full map, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the backing file is unreadable,
    /// [`StoreError::Parse`] for malformed documents, and
    /// [`StoreError::Invalid`] when an entry fails hostname validation.
    async fn load(&self) -> Result<DomainMap, StoreError>;

    /// Persists the map, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the backing file cannot be written.
    async fn save(&self, map: &DomainMap) -> Result<(), StoreError>;
}
