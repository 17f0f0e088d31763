//! Classification of a single clipboard line.

use url::Url;

/// A classified clipboard token.
///
/// Every trimmed, non-empty line of clipboard text falls into exactly one of
/// three shapes:
///
/// - [`ClipToken::FullUrl`] - an absolute URL with a hostname. `path` holds
///   pathname + query + fragment, collapsed to the empty string for
///   domain-only URLs (bare `/` with no query or fragment).
/// - [`ClipToken::BarePath`] - an absolute path with no domain attached
///   (e.g. `/admin/users?page=2`).
/// - [`ClipToken::Invalid`] - everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipToken {
    FullUrl { domain: String, path: String },
    BarePath { path: String },
    Invalid,
}

impl ClipToken {
    /// Classifies a token. Total: never fails, never panics.
    ///
    /// A token qualifies as a full URL only when it carries an explicit
    /// `://` authority marker and parses with a hostname. Near-misses like
    /// `http:/example.com` are [`ClipToken::Invalid`], not silently repaired.
    ///
    /// A bare path must start with `/`, be longer than a lone slash, and
    /// contain neither `://` nor whitespace.
    pub fn classify(token: &str) -> Self {
        let token = token.trim();

        if token.contains("://") {
            if let Ok(url) = Url::parse(token)
                && let Some(host) = url.host_str()
            {
                return Self::FullUrl {
                    domain: host.to_string(),
                    path: collapse_path(&url),
                };
            }
            return Self::Invalid;
        }

        if token.starts_with('/') && token.len() > 1 && !token.chars().any(char::is_whitespace) {
            return Self::BarePath {
                path: token.to_string(),
            };
        }

        Self::Invalid
    }
}

/// Joins pathname, query, and fragment back into a single path string.
///
/// A root pathname with no query and no fragment collapses to `""` so that
/// domain-only URLs stay distinguishable from URLs with an explicit path.
fn collapse_path(url: &Url) -> String {
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        return String::new();
    }

    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        path.push('#');
        path.push_str(fragment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_full_url_with_path() {
        let token = ClipToken::classify("https://prod.example.com/foo/bar?x=1#top");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: "/foo/bar?x=1#top".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_domain_only_url() {
        let token = ClipToken::classify("https://prod.example.com");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: String::new(),
            }
        );
    }

    #[test]
    fn test_classify_domain_only_url_trailing_slash() {
        let token = ClipToken::classify("https://prod.example.com/");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: String::new(),
            }
        );
    }

    #[test]
    fn test_classify_root_path_with_query_is_not_domain_only() {
        let token = ClipToken::classify("https://prod.example.com/?utm=1");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: "/?utm=1".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_http_scheme() {
        let token = ClipToken::classify("http://prod.example.com/foo");
        assert!(matches!(token, ClipToken::FullUrl { .. }));
    }

    #[test]
    fn test_classify_lowercases_hostname() {
        let token = ClipToken::classify("https://PROD.Example.COM/foo");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: "/foo".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_bare_path() {
        let token = ClipToken::classify("/dashboard/users?page=2");
        assert_eq!(
            token,
            ClipToken::BarePath {
                path: "/dashboard/users?page=2".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_lone_slash_is_invalid() {
        assert_eq!(ClipToken::classify("/"), ClipToken::Invalid);
    }

    #[test]
    fn test_classify_path_with_whitespace_is_invalid() {
        assert_eq!(ClipToken::classify("/foo bar"), ClipToken::Invalid);
    }

    #[test]
    fn test_classify_missing_authority_slash_is_invalid() {
        // One slash short of an authority marker; strict parsing, no repair.
        assert_eq!(ClipToken::classify("http:/example.com"), ClipToken::Invalid);
    }

    #[test]
    fn test_classify_no_host_is_invalid() {
        assert_eq!(ClipToken::classify("file:///etc/hosts"), ClipToken::Invalid);
    }

    #[test]
    fn test_classify_plain_text_is_invalid() {
        assert_eq!(ClipToken::classify("hello world"), ClipToken::Invalid);
        assert_eq!(ClipToken::classify("example.com"), ClipToken::Invalid);
        assert_eq!(ClipToken::classify(""), ClipToken::Invalid);
    }

    #[test]
    fn test_classify_trims_surrounding_whitespace() {
        let token = ClipToken::classify("  https://prod.example.com/foo  ");
        assert_eq!(
            token,
            ClipToken::FullUrl {
                domain: "prod.example.com".to_string(),
                path: "/foo".to_string(),
            }
        );
    }
}
