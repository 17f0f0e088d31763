//! Shared fixtures for integration tests.

use std::sync::Arc;

use clipnav::prelude::*;

/// A small two-pair environment map.
pub fn test_map() -> Arc<DomainMap> {
    let (map, report) = DomainMap::from_pairs([
        SitePair::new("prod.example.com", "staging.example.com"),
        SitePair::new("shop.example.com", "shop.staging.example.com"),
    ]);
    assert_eq!(report.skipped, 0);
    Arc::new(map)
}

pub fn service() -> RewriteService {
    RewriteService::new(test_map())
}

pub fn page(url: &str) -> PageContext {
    PageContext::from_url(url, &test_map()).expect("test page URL must parse")
}
