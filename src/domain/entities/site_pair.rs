//! A production / staging hostname pair from the site catalog.

/// One environment pairing as listed by the site catalog.
///
/// The catalog publishes production and pre-release site URLs positionally;
/// by the time a pair reaches the domain layer both sides have been reduced
/// to hostnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePair {
    pub production: String,
    pub staging: String,
}

impl SitePair {
    pub fn new(production: impl Into<String>, staging: impl Into<String>) -> Self {
        Self {
            production: production.into(),
            staging: staging.into(),
        }
    }
}
