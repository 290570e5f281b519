//! Targeted edits of pagination parameters inside a request URL.
//!
//! The URL is handled as an opaque string: parameters are located with
//! literal substring checks and value-only pattern substitutions, so every
//! other part of the query string keeps its exact text and position.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "page[limit]";

/// Query parameter carrying the page start position.
pub const OFFSET_PARAM: &str = "page[offset]";

const PATTERN_SPECIAL_CHARS: &[char] = &[']', '^', '\\', '[', '.', '(', ')', '-'];

/// `page[limit]` reader/rewriter.
pub static LIMIT: LazyLock<PageParam> = LazyLock::new(|| PageParam::new(LIMIT_PARAM));

/// `page[offset]` reader/rewriter.
pub static OFFSET: LazyLock<PageParam> = LazyLock::new(|| PageParam::new(OFFSET_PARAM));

/// Escapes the pattern metacharacters that can occur in bracketed parameter
/// names so the name is matched literally.
#[must_use]
pub fn escape_param_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if PATTERN_SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Returns true if `name` is considered present in `url`.
///
/// This is a literal substring test, not a parsed-query lookup: any other
/// parameter whose text contains `name` also counts as present.
#[must_use]
pub fn contains_param(url: &str, name: &str) -> bool {
    url.contains(name)
}

/// Appends `name=value` as a new query parameter, opening the query string
/// with `?` when the URL has none yet.
pub fn append_param(url: &mut String, name: &str, value: impl std::fmt::Display) {
    let separator = if url.contains('?') { '&' } else { '?' };
    url.push(separator);
    url.push_str(&format!("{name}={value}"));
}

/// A numeric query parameter that can be read from and rewritten in a URL.
#[derive(Debug)]
pub struct PageParam {
    name: &'static str,
    digits: Regex,
    value: Regex,
}

impl PageParam {
    /// Compiles the extraction and substitution patterns for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` holds pattern syntax outside the escaped set that
    /// leaves the pattern invalid, such as a leading `*`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let escaped = escape_param_name(name);
        Self {
            name,
            digits: Regex::new(&format!("{escaped}=([0-9]+)"))
                .expect("page parameter digits pattern must compile"),
            value: Regex::new(&format!("{escaped}=[^&]+"))
                .expect("page parameter value pattern must compile"),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the digits following the first `name=` in `url`.
    ///
    /// Missing, non-numeric or out-of-range values read as 0.
    #[must_use]
    pub fn extract(&self, url: &str) -> u64 {
        self.digits
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    /// Returns a copy of `url` with every non-empty value of the parameter
    /// replaced by `value`. The key stays where it is.
    #[must_use]
    pub fn replace(&self, url: &str, value: u64) -> String {
        let replacement = format!("{}={value}", self.name);
        self.value
            .replace_all(url, NoExpand(&replacement))
            .into_owned()
    }
}
