//! JSON file implementation of the map store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::domain::entities::DomainMap;
use crate::domain::repositories::{MapStore, StoreError};

/// On-disk envelope for the domain map.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapFile {
    /// When the map was last regenerated.
    pub generated_at: DateTime<Utc>,
    /// Hostname→hostname entries, both directions of every pair.
    pub domains: HashMap<String, String>,
}

/// Map store over a single JSON file.
///
/// Hostname validation runs on load, so a hand-edited bad entry is reported
/// at startup rather than surfacing mid-rewrite.
pub struct JsonMapStore {
    path: PathBuf,
}

impl JsonMapStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file already exists.
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Reads the raw envelope, including the generation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file is unreadable and
    /// [`StoreError::Parse`] for malformed documents.
    pub async fn load_file(&self) -> Result<MapFile, StoreError> {
        let raw = fs::read_to_string(&self.path).await?;
        let file: MapFile = serde_json::from_str(&raw)?;
        debug!(
            "loaded {} map entries from {}",
            file.domains.len(),
            self.path.display()
        );
        Ok(file)
    }
}

#[async_trait]
impl MapStore for JsonMapStore {
    async fn load(&self) -> Result<DomainMap, StoreError> {
        let file = self.load_file().await?;
        Ok(DomainMap::from_entries(file.domains)?)
    }

    async fn save(&self, map: &DomainMap) -> Result<(), StoreError> {
        let file = MapFile {
            generated_at: Utc::now(),
            domains: map.entries().clone(),
        };

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json).await?;
        debug!(
            "wrote {} map entries to {}",
            file.domains.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SitePair;

    fn store_in(dir: &tempfile::TempDir) -> JsonMapStore {
        JsonMapStore::new(dir.path().join("domainmap.json"))
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let (map, _) =
            DomainMap::from_pairs([SitePair::new("prod.example.com", "staging.example.com")]);
        store.save(&map).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.resolve("prod.example.com"), "staging.example.com");
    }

    #[tokio::test]
    async fn test_save_writes_generation_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let before = Utc::now();
        let (map, _) =
            DomainMap::from_pairs([SitePair::new("prod.example.com", "staging.example.com")]);
        store.save(&map).await.unwrap();

        let file = store.load_file().await.unwrap();
        assert!(file.generated_at >= before);
        assert!(file.generated_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.load().await, Err(StoreError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domainmap.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonMapStore::new(path);
        assert!(matches!(store.load().await, Err(StoreError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_invalid_hostname_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domainmap.json");
        std::fs::write(
            &path,
            r#"{"generated_at":"2026-01-01T00:00:00Z","domains":{"bad host":"staging.example.com"}}"#,
        )
        .unwrap();

        let store = JsonMapStore::new(path);
        assert!(matches!(store.load().await, Err(StoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists().await);

        let (map, _) =
            DomainMap::from_pairs([SitePair::new("prod.example.com", "staging.example.com")]);
        store.save(&map).await.unwrap();

        assert!(store.exists().await);
    }
}
