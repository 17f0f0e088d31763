//! The production↔staging domain mapping.

use std::collections::HashMap;

use tracing::warn;

use super::SitePair;

/// Errors raised while constructing a [`DomainMap`].
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid hostname in domain map: '{0}'")]
    InvalidHostname(String),
}

/// Counts from folding catalog pairs into a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBuildReport {
    /// Entries present in the finished map.
    pub entries: usize,
    /// Pair sides dropped because of a conflict or a malformed hostname.
    pub skipped: usize,
}

/// Immutable hostname→hostname mapping between paired environments.
///
/// Loaded once at startup and shared read-only for the process lifetime.
/// Every key and value is a validated hostname. Lookups for hostnames not
/// present as keys fall back to identity: substitution is opportunistic,
/// never mandatory.
#[derive(Debug, Clone, Default)]
pub struct DomainMap {
    entries: HashMap<String, String>,
}

impl DomainMap {
    /// Builds a map from pre-collected entries, validating every hostname.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidHostname`] for the first key or value that
    /// is not a well-formed hostname.
    pub fn from_entries(entries: HashMap<String, String>) -> Result<Self, MapError> {
        for (key, value) in &entries {
            validate_hostname(key)?;
            validate_hostname(value)?;
        }
        Ok(Self { entries })
    }

    /// Folds catalog pairs into a bidirectional map.
    ///
    /// Each pair contributes both directions (`production→staging` and
    /// `staging→production`). First mapping wins: a hostname already mapped
    /// to a different value is skipped and counted, as is any side with a
    /// malformed hostname.
    pub fn from_pairs<I>(pairs: I) -> (Self, MapBuildReport)
    where
        I: IntoIterator<Item = SitePair>,
    {
        let mut entries: HashMap<String, String> = HashMap::new();
        let mut skipped = 0;

        for pair in pairs {
            for (from, to) in [
                (&pair.production, &pair.staging),
                (&pair.staging, &pair.production),
            ] {
                if validate_hostname(from).is_err() || validate_hostname(to).is_err() {
                    warn!("skipping malformed pair side: '{from}' -> '{to}'");
                    skipped += 1;
                    continue;
                }
                match entries.get(from.as_str()) {
                    Some(existing) if existing != to => {
                        warn!("'{from}' already maps to '{existing}', ignoring '{to}'");
                        skipped += 1;
                    }
                    Some(_) => {}
                    None => {
                        entries.insert(from.clone(), to.clone());
                    }
                }
            }
        }

        let report = MapBuildReport {
            entries: entries.len(),
            skipped,
        };
        (Self { entries }, report)
    }

    /// Resolves a hostname through the mapping.
    ///
    /// Returns the mapped counterpart when `domain` is a key, otherwise
    /// `domain` unchanged.
    pub fn resolve<'a>(&'a self, domain: &'a str) -> &'a str {
        self.entries.get(domain).map_or(domain, String::as_str)
    }

    /// Whether `domain` is a known (mapped) hostname.
    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(from, to)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Borrows the underlying entries, e.g. for serialization.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

/// Validates hostname format.
///
/// # Errors
///
/// Returns [`MapError::InvalidHostname`] if validation fails.
fn validate_hostname(hostname: &str) -> Result<(), MapError> {
    if hostname.is_empty() || hostname.len() > 255 {
        return Err(MapError::InvalidHostname(hostname.to_string()));
    }

    if !hostname.contains('.') {
        return Err(MapError::InvalidHostname(hostname.to_string()));
    }

    if !hostname
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(MapError::InvalidHostname(hostname.to_string()));
    }

    Ok(())
}
