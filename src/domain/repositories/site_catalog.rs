//! Remote catalog seam for regenerating the domain map.

use async_trait::async_trait;

use crate::domain::entities::SitePair;

/// Errors surfaced by site catalog implementations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

/// Source of production / pre-release site pairings.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpSiteCatalog`] - the internal catalog API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteCatalog: Send + Sync {
    /// Fetches the current list of environment pairs, reduced to hostnames.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] on transport failures and
    /// [`CatalogError::Malformed`] when the response cannot be interpreted.
    async fn fetch_pairs(&self) -> Result<Vec<SitePair>, CatalogError>;
}
