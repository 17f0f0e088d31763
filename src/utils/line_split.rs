//! Clipboard text splitting.
//!
//! Clipboard pastes arrive with mixed line endings, and URLs copied from
//! spreadsheet cells or chat clients are often concatenated with no separator
//! at all. Splitting inserts a line break before every mid-line `http(s)://`
//! occurrence to recover those token boundaries without a full grammar.

use std::sync::OnceLock;

use regex::Regex;

static SCHEME_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn scheme_boundary() -> &'static Regex {
    SCHEME_BOUNDARY.get_or_init(|| Regex::new(r"([^\n])(https?://)").unwrap())
}

/// Splits raw clipboard text into trimmed, non-empty candidate tokens.
///
/// Pure function over its full input; order follows the input. Steps:
///
/// 1. Normalize `\r\n` and `\r` to `\n`.
/// 2. Insert `\n` before every scheme prefix not already at a line start.
/// 3. Drop a leading `\n` left over from step 2.
/// 4. Split on `\n`, trim, discard empty pieces.
pub fn split_lines(raw: &str) -> Vec<String> {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = scheme_boundary().replace_all(&text, "$1\n$2");
    let text = text.strip_prefix('\n').unwrap_or(text.as_ref());

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
