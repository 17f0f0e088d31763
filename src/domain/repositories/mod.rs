//! Seams between the pure core and the outside world.
//!
//! The rewrite engine itself never performs I/O. Everything that does - the
//! JSON map file, the remote site catalog - sits behind a trait defined here:
//!
//! - [`MapStore`] - loading and persisting the domain map
//! - [`SiteCatalog`] - fetching production/pre-release site pairs
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod map_store;
pub mod site_catalog;

pub use map_store::{MapStore, StoreError};
pub use site_catalog::{CatalogError, SiteCatalog};

#[cfg(test)]
pub use map_store::MockMapStore;
#[cfg(test)]
pub use site_catalog::MockSiteCatalog;
