//! Outcome of building a target URL from one clipboard token.

/// Result of applying the URL builder to a single token.
///
/// Building never fails hard: a combination the decision table cannot anchor
/// (for example a bare path pasted while viewing an unrecognized domain)
/// yields [`Resolution::Rejected`] and the caller routes the original token
/// to the unparseable listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A concrete `https:` target URL, ready to open.
    Target(String),
    /// No rule produced a target for this token.
    Rejected,
}

impl Resolution {
    /// Returns the target URL, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Target(url) => Some(url),
            Self::Rejected => None,
        }
    }
}
