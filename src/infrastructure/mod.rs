//! Infrastructure layer: implementations of the domain seams.
//!
//! - [`json_map_store`] - the JSON map file
//! - [`http_site_catalog`] - the remote site catalog API

pub mod http_site_catalog;
pub mod json_map_store;

pub use http_site_catalog::HttpSiteCatalog;
pub use json_map_store::{JsonMapStore, MapFile};
