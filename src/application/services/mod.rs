//! Application services.

pub mod rewrite_service;
pub mod sync_service;

pub use rewrite_service::{RewriteReport, RewriteService};
pub use sync_service::{MapSyncService, SyncError, SyncReport};
