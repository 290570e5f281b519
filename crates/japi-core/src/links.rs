//! `links` and `meta` members of a JSON:API document.
//!
//! See <http://jsonapi.org/format/#document-links> and
//! <http://jsonapi.org/format/#document-meta>.

use crate::JsonApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A `meta` object: free-form, non-standard meta-information.
pub type Meta = Map<String, Value>;

/// A link object with an `href` and optional `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The link's URL.
    pub href: String,
    /// Non-standard meta-information about the link.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Meta,
}

impl Link {
    /// Creates a link object without meta.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            meta: Meta::new(),
        }
    }

    /// Adds a meta member.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// A member of a `links` object: either a plain URL or a link object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    /// A string containing the link's URL.
    Url(String),
    /// A link object.
    Object(Link),
}

impl LinkValue {
    /// Returns the URL regardless of representation.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Object(link) => &link.href,
        }
    }
}

impl From<String> for LinkValue {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for LinkValue {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<Link> for LinkValue {
    fn from(link: Link) -> Self {
        Self::Object(link)
    }
}

/// How generated link values are represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Bare URL strings.
    #[default]
    Plain,
    /// `{ "href": ..., "meta": ... }` objects.
    Object,
}

impl LinkStyle {
    /// Wraps a URL in this representation.
    #[must_use]
    pub fn render(self, url: String) -> LinkValue {
        match self {
            Self::Plain => LinkValue::Url(url),
            Self::Object => LinkValue::Object(Link::new(url)),
        }
    }
}

/// A `links` object.
///
/// Deserialization validates every member; anything other than a string or
/// an object with a string `href` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Links(BTreeMap<String, LinkValue>);

impl Links {
    /// Creates an empty links object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<LinkValue>) -> Option<LinkValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the link with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LinkValue> {
        self.0.get(name)
    }

    /// Returns the URL of the link with the given name.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(LinkValue::href)
    }

    /// Returns true if a link with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over links by name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &LinkValue)> {
        self.0.iter()
    }

    /// Moves every link from `other` into `self`, replacing same-named ones.
    pub fn merge(&mut self, other: Links) {
        self.0.extend(other.0);
    }
}

impl TryFrom<Map<String, Value>> for Links {
    type Error = JsonApiError;

    fn try_from(members: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut links = BTreeMap::new();
        for (name, value) in members {
            let link = match value {
                Value::String(url) => LinkValue::Url(url),
                object @ Value::Object(_) => serde_json::from_value::<Link>(object)
                    .map(LinkValue::Object)
                    .map_err(|_| JsonApiError::invalid_link(name.as_str()))?,
                _ => return Err(JsonApiError::invalid_link(name)),
            };
            links.insert(name, link);
        }
        Ok(Self(links))
    }
}

impl FromIterator<(String, LinkValue)> for Links {
    fn from_iter<I: IntoIterator<Item = (String, LinkValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Links {
    type Item = (String, LinkValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, LinkValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
