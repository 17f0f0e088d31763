use std::sync::Arc;

use async_trait::async_trait;
use tempfile::tempdir;

use clipnav::application::services::{MapSyncService, SyncError};
use clipnav::domain::entities::SitePair;
use clipnav::domain::repositories::{CatalogError, MapStore, SiteCatalog};
use clipnav::infrastructure::JsonMapStore;

/// Catalog stub returning a fixed pair list.
struct FixedCatalog {
    pairs: Vec<SitePair>,
}

#[async_trait]
impl SiteCatalog for FixedCatalog {
    async fn fetch_pairs(&self) -> Result<Vec<SitePair>, CatalogError> {
        Ok(self.pairs.clone())
    }
}

#[tokio::test]
async fn test_sync_writes_loadable_bidirectional_map() {
    let dir = tempdir().unwrap();
    let store = Arc::new(JsonMapStore::new(dir.path().join("domainmap.json")));

    let catalog = Arc::new(FixedCatalog {
        pairs: vec![
            SitePair::new("prod.example.com", "staging.example.com"),
            SitePair::new("shop.example.com", "shop.staging.example.com"),
        ],
    });

    let report = MapSyncService::new(catalog, store.clone())
        .refresh()
        .await
        .unwrap();

    assert_eq!(report.pairs, 2);
    assert_eq!(report.entries, 4);
    assert_eq!(report.skipped, 0);

    // The written file must load back through the same store and resolve
    // both directions.
    let map = store.load().await.unwrap();
    assert_eq!(map.resolve("prod.example.com"), "staging.example.com");
    assert_eq!(map.resolve("shop.staging.example.com"), "shop.example.com");
}

#[tokio::test]
async fn test_sync_replaces_previous_map() {
    let dir = tempdir().unwrap();
    let store = Arc::new(JsonMapStore::new(dir.path().join("domainmap.json")));

    let first = Arc::new(FixedCatalog {
        pairs: vec![SitePair::new("old.example.com", "old.staging.example.com")],
    });
    MapSyncService::new(first, store.clone())
        .refresh()
        .await
        .unwrap();

    let second = Arc::new(FixedCatalog {
        pairs: vec![SitePair::new("new.example.com", "new.staging.example.com")],
    });
    MapSyncService::new(second, store.clone())
        .refresh()
        .await
        .unwrap();

    let map = store.load().await.unwrap();
    assert_eq!(map.len(), 2);
    assert!(!map.contains("old.example.com"));
    assert_eq!(map.resolve("new.example.com"), "new.staging.example.com");
}

#[tokio::test]
async fn test_sync_empty_catalog_leaves_existing_file_untouched() {
    let dir = tempdir().unwrap();
    let store = Arc::new(JsonMapStore::new(dir.path().join("domainmap.json")));

    let seeded = Arc::new(FixedCatalog {
        pairs: vec![SitePair::new("prod.example.com", "staging.example.com")],
    });
    MapSyncService::new(seeded, store.clone())
        .refresh()
        .await
        .unwrap();

    let empty = Arc::new(FixedCatalog { pairs: vec![] });
    let result = MapSyncService::new(empty, store.clone()).refresh().await;

    assert!(matches!(result, Err(SyncError::EmptyCatalog)));

    let map = store.load().await.unwrap();
    assert_eq!(map.len(), 2);
}
