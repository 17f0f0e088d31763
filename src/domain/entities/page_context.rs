//! Snapshot of the currently viewed page.

use url::Url;

use super::DomainMap;

/// Errors raised while building a [`PageContext`] from a page URL.
#[derive(Debug, thiserror::Error)]
pub enum PageContextError {
    #[error("invalid page URL: {0}")]
    InvalidUrl(String),

    #[error("page URL has no hostname")]
    MissingHost,
}

/// The current page at the moment the rewrite was triggered.
///
/// Captured once per invocation and immutable thereafter. `is_known` records
/// whether the domain is a key of the domain map, which decides the entire
/// left column of the rewrite decision table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Lowercased hostname of the viewed page.
    pub domain: String,
    /// Pathname + query + fragment of the viewed page; `/`-prefixed or empty.
    pub path: String,
    /// Whether `domain` is present in the domain map.
    pub is_known: bool,
}

impl PageContext {
    pub fn new(domain: impl Into<String>, path: impl Into<String>, is_known: bool) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
            is_known,
        }
    }

    /// Builds a context from the viewed page's URL, resolving known-domain
    /// membership against the map's key set.
    ///
    /// # Errors
    ///
    /// Returns [`PageContextError::InvalidUrl`] for unparseable URLs and
    /// [`PageContextError::MissingHost`] for URLs without an authority
    /// (e.g. `file:` or `about:` pages).
    pub fn from_url(page_url: &str, map: &DomainMap) -> Result<Self, PageContextError> {
        let url = Url::parse(page_url.trim())
            .map_err(|e| PageContextError::InvalidUrl(e.to_string()))?;

        let domain = url
            .host_str()
            .ok_or(PageContextError::MissingHost)?
            .to_ascii_lowercase();

        let mut path = url.path().to_string();
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            path.push('#');
            path.push_str(fragment);
        }

        let is_known = map.contains(&domain);

        Ok(Self {
            domain,
            path,
            is_known,
        })
    }
}
