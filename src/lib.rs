//! # clipnav
//!
//! Rewrites clipboard-derived URLs and paths into navigable links based on
//! the currently viewed page, substituting hostnames through a static
//! production↔staging domain map, and partitions the results for batch
//! opening.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core value types and the store/catalog traits
//! - **Application Layer** ([`application`]) - The rewrite engine and map sync
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON map file and catalog HTTP client
//!
//! The rewrite core is pure and synchronous; only the edges (map file, site
//! catalog) are async.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at the domain map (JSON, regenerated via `clipnav map sync`)
//! export CLIPNAV_MAP_FILE="domainmap.json"
//!
//! # Rewrite whatever is in the clipboard against the page you are on
//! wl-paste | clipnav rewrite --page "https://staging.example.com/dash"
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

pub mod config;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RewriteReport, RewriteService};
    pub use crate::domain::entities::{ClipToken, DomainMap, PageContext, Resolution, SitePair};
    pub use crate::infrastructure::JsonMapStore;
}
