//! Clipboard rewrite engine.
//!
//! Hosts the URL builder (the known-domain × token-shape decision table) and
//! the batch processor that applies it across a whole clipboard paste.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{ClipToken, DomainMap, PageContext, Resolution};
use crate::utils::line_split::split_lines;

/// Partitioned outcome of one clipboard rewrite.
///
/// Both lists follow the input line order. `rejected` carries the original
/// token text of every line that was unparseable or unresolvable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub targets: Vec<String>,
    pub rejected: Vec<String>,
}

/// Service rewriting clipboard tokens into target URLs.
///
/// Holds the immutable domain map; everything else is per-call state, so a
/// single instance serves any number of concurrent invocations.
pub struct RewriteService {
    map: Arc<DomainMap>,
}

impl RewriteService {
    /// Creates a new rewrite service over a loaded domain map.
    pub fn new(map: Arc<DomainMap>) -> Self {
        Self { map }
    }

    /// Builds the target URL for one classified token.
    ///
    /// The decision table, keyed by `ctx.is_known` and token shape. All
    /// produced URLs use the `https:` scheme.
    ///
    /// On a known (mapped) page the intent is "stay in this environment,
    /// change the page": the current domain wins and only the clip path
    /// transfers. On an unrecognized page the clip domain wins, substituted
    /// through the map. A domain-only clip inherits the current path when
    /// there is one; a bare path with no known page to anchor to is rejected.
    ///
    /// Never fails: unresolvable combinations yield [`Resolution::Rejected`].
    pub fn build_target(&self, ctx: &PageContext, token: &ClipToken) -> Resolution {
        match (ctx.is_known, token) {
            // Known page, URL with a path: force the current domain.
            (true, ClipToken::FullUrl { path, .. }) if !path.is_empty() => {
                Resolution::Target(format!("https://{}{}", ctx.domain, path))
            }

            // Known page, bare path: apply it to the current domain.
            (true, ClipToken::BarePath { path }) => {
                Resolution::Target(format!("https://{}{}", ctx.domain, path))
            }

            // Known page, domain-only URL: carry the current path over, or
            // fall back to the mapped counterpart's root.
            (true, ClipToken::FullUrl { domain, .. }) => {
                if ctx.path != "/" {
                    Resolution::Target(format!("https://{}{}", domain, ctx.path))
                } else {
                    Resolution::Target(format!("https://{}/", self.map.resolve(domain)))
                }
            }

            // Unknown page, URL with a path: substitute the clip domain.
            (false, ClipToken::FullUrl { domain, path }) if !path.is_empty() => {
                Resolution::Target(format!("https://{}{}", self.map.resolve(domain), path))
            }

            // Unknown page, domain-only URL.
            (false, ClipToken::FullUrl { domain, .. }) => {
                Resolution::Target(format!("https://{}/", self.map.resolve(domain)))
            }

            // A bare path has no domain context to anchor to.
            (false, ClipToken::BarePath { .. }) => Resolution::Rejected,

            (_, ClipToken::Invalid) => Resolution::Rejected,
        }
    }

    /// Splits, classifies, and rewrites a whole clipboard paste.
    ///
    /// Tokens are independent; processing is sequential to keep both output
    /// lists in input order.
    pub fn process(&self, ctx: &PageContext, raw: &str) -> RewriteReport {
        let mut report = RewriteReport::default();

        for line in split_lines(raw) {
            let token = ClipToken::classify(&line);
            match self.build_target(ctx, &token) {
                Resolution::Target(url) => {
                    debug!("rewrote '{line}' -> {url}");
                    report.targets.push(url);
                }
                Resolution::Rejected => {
                    debug!("rejected '{line}'");
                    report.rejected.push(line);
                }
            }
        }

        report
    }
}
