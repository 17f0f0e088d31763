//! Core value types of the rewrite engine.
//!
//! All types here are plain data: construction validates, everything after
//! construction is immutable.

pub mod clip_token;
pub mod domain_map;
pub mod page_context;
pub mod resolution;
pub mod site_pair;

pub use clip_token::ClipToken;
pub use domain_map::{DomainMap, MapBuildReport, MapError};
pub use page_context::{PageContext, PageContextError};
pub use resolution::Resolution;
pub use site_pair::SitePair;
