//! Offset pagination links for list responses.
//!
//! [`OffsetPagination`] derives `first`, `prev`, `next` and `last` links from
//! the request URL by rewriting only `page[limit]` and `page[offset]`.

use crate::query::{self, LIMIT, LIMIT_PARAM, OFFSET, OFFSET_PARAM};
use crate::{LinkStyle, LinkValue, Links, Paginator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Navigation direction of a pagination link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PageLink {
    /// The first page.
    #[serde(rename = "first")]
    First,
    /// The page before the current one.
    #[serde(rename = "prev")]
    Previous,
    /// The page after the current one.
    #[serde(rename = "next")]
    Next,
    /// The last page.
    #[serde(rename = "last")]
    Last,
}

impl PageLink {
    /// All directions, in navigation order.
    pub const ALL: [Self; 4] = [Self::First, Self::Previous, Self::Next, Self::Last];

    /// Returns the member name used in a `links` object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

/// The pagination links generated for one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet(BTreeMap<PageLink, LinkValue>);

impl LinkSet {
    /// Creates an empty link set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the link for a direction.
    pub fn insert(&mut self, link: PageLink, value: LinkValue) {
        self.0.insert(link, value);
    }

    /// Returns the link for a direction.
    #[must_use]
    pub fn get(&self, link: PageLink) -> Option<&LinkValue> {
        self.0.get(&link)
    }

    /// Returns the URL of the link for a direction.
    #[must_use]
    pub fn href(&self, link: PageLink) -> Option<&str> {
        self.0.get(&link).map(LinkValue::href)
    }

    /// Returns the number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no direction applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over links in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (PageLink, &LinkValue)> {
        self.0.iter().map(|(link, value)| (*link, value))
    }
}

impl From<LinkSet> for Links {
    fn from(set: LinkSet) -> Self {
        set.0
            .into_iter()
            .map(|(link, value)| (link.as_str().to_string(), value))
            .collect()
    }
}

/// The effective page size and position a request is currently at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page size.
    pub limit: u64,
    /// Effective start position.
    pub offset: u64,
}

impl PageWindow {
    /// Reconciles the values carried by `url` with the configured limit.
    ///
    /// The URL may narrow the page size but never widen it; a missing or
    /// zero limit falls back to `configured_limit`.
    #[must_use]
    pub fn from_url(url: &str, configured_limit: u64) -> Self {
        let limit = match LIMIT.extract(url).min(configured_limit) {
            0 => configured_limit,
            limit => limit,
        };
        Self {
            limit,
            offset: OFFSET.extract(url),
        }
    }

    /// Offset of the first page, when not already on it.
    #[must_use]
    pub const fn first(&self) -> Option<u64> {
        if self.offset > 0 {
            Some(0)
        } else {
            None
        }
    }

    /// Offset of the previous page.
    ///
    /// Only offered once more than one page lies before the current position.
    #[must_use]
    pub const fn previous(&self) -> Option<u64> {
        if self.offset > self.limit {
            Some(self.offset - self.limit)
        } else {
            None
        }
    }

    /// Offset of the next page.
    ///
    /// Suppressed within one page of the end; `last` covers that window.
    #[must_use]
    pub const fn next(&self, total: u64) -> Option<u64> {
        let next = self.offset.saturating_add(self.limit);
        if next < total.saturating_sub(self.limit) {
            Some(next)
        } else {
            None
        }
    }

    /// Offset of the last page, keeping the current sub-page alignment.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0 while `total` exceeds `offset`.
    #[must_use]
    pub const fn last(&self, total: u64) -> Option<u64> {
        if self.offset.saturating_add(self.limit) >= total {
            return None;
        }
        let pages = total.div_ceil(self.limit);
        let mut last = (pages - 1) * self.limit + self.offset % self.limit;
        if last > total {
            last -= self.limit;
        }
        Some(last)
    }

    /// Target offsets of every direction that applies.
    #[must_use]
    pub fn targets(&self, total: u64) -> Vec<(PageLink, u64)> {
        PageLink::ALL
            .into_iter()
            .filter_map(|link| {
                let offset = match link {
                    PageLink::First => self.first(),
                    PageLink::Previous => self.previous(),
                    PageLink::Next => self.next(total),
                    PageLink::Last => self.last(total),
                }?;
                Some((link, offset))
            })
            .collect()
    }
}

/// Offset-based pagination for a single list request.
///
/// `limit` must be at least 1 whenever `total` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// The request URL the links are derived from.
    pub url: String,
    /// The configured page size.
    pub limit: u64,
    /// The total number of matching items.
    pub total: u64,
    /// Representation of the generated link values.
    #[serde(default)]
    pub link_style: LinkStyle,
}

impl OffsetPagination {
    /// Creates a pagination request emitting plain URL links.
    #[must_use]
    pub fn new(url: impl Into<String>, limit: u64, total: u64) -> Self {
        Self {
            url: url.into(),
            limit,
            total,
            link_style: LinkStyle::Plain,
        }
    }

    /// Sets the representation of the generated link values.
    #[must_use]
    pub const fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.link_style = link_style;
        self
    }

    /// Generates the pagination links, or `None` when the whole result set
    /// fits on one page.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0 while `total` is non-zero.
    #[must_use]
    pub fn generate(&self) -> Option<LinkSet> {
        if self.total < self.limit {
            debug!(total = self.total, limit = self.limit, "Result set fits on one page");
            return None;
        }

        let url = self.working_url();
        let window = PageWindow::from_url(&url, self.limit);
        let limited = LIMIT.replace(&url, window.limit);

        let mut links = LinkSet::new();
        for (link, offset) in window.targets(self.total) {
            let href = OFFSET.replace(&limited, offset);
            links.insert(link, self.link_style.render(href));
        }

        debug!(
            url = %self.url,
            limit = window.limit,
            offset = window.offset,
            total = self.total,
            links = links.len(),
            "Generated pagination links"
        );

        Some(links)
    }

    /// Copy of the request URL with both pagination parameters present.
    fn working_url(&self) -> String {
        let mut url = self.url.clone();
        if !query::contains_param(&url, LIMIT_PARAM) {
            query::append_param(&mut url, LIMIT_PARAM, self.limit);
        }
        if !query::contains_param(&url, OFFSET_PARAM) {
            query::append_param(&mut url, OFFSET_PARAM, 0);
        }
        url
    }
}

impl Paginator for OffsetPagination {
    fn generate_pagination(&self) -> Option<Links> {
        self.generate().map(Links::from)
    }
}
