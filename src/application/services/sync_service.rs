//! Domain map regeneration from the site catalog.

use std::sync::Arc;

use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use crate::domain::entities::DomainMap;
use crate::domain::repositories::{CatalogError, MapStore, SiteCatalog, StoreError};

/// Errors raised by a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("catalog returned no usable pairs; existing map left untouched")]
    EmptyCatalog,
}

/// Summary of a completed sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Pairs fetched from the catalog.
    pub pairs: usize,
    /// Entries written to the map (both directions of every kept pair).
    pub entries: usize,
    /// Pair sides skipped due to conflicts or malformed hostnames.
    pub skipped: usize,
}

/// Service regenerating the domain map from the remote site catalog.
///
/// Fetch → fold into a bidirectional map → persist. The catalog fetch is
/// retried with exponential backoff before giving up; an empty catalog
/// aborts the run so a transient upstream fault cannot blank the map file.
pub struct MapSyncService<C: SiteCatalog, S: MapStore> {
    catalog: Arc<C>,
    store: Arc<S>,
}

impl<C: SiteCatalog, S: MapStore> MapSyncService<C, S> {
    pub fn new(catalog: Arc<C>, store: Arc<S>) -> Self {
        Self { catalog, store }
    }

    /// Runs one full sync cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Catalog`] when the catalog stays unreachable
    /// after retries, [`SyncError::EmptyCatalog`] when it yields nothing,
    /// and [`SyncError::Store`] when persisting fails.
    pub async fn refresh(&self) -> Result<SyncReport, SyncError> {
        let strategy = ExponentialBackoff::from_millis(10).map(jitter).take(2);
        let pairs = Retry::spawn(strategy, || self.catalog.fetch_pairs()).await?;

        if pairs.is_empty() {
            return Err(SyncError::EmptyCatalog);
        }

        let pair_count = pairs.len();
        let (map, build) = DomainMap::from_pairs(pairs);

        if build.skipped > 0 {
            warn!("{} pair sides skipped while folding the catalog", build.skipped);
        }

        self.store.save(&map).await?;

        info!(
            "domain map regenerated: {} entries from {} pairs",
            build.entries, pair_count
        );

        Ok(SyncReport {
            pairs: pair_count,
            entries: build.entries,
            skipped: build.skipped,
        })
    }
}
