//! Capabilities consumed by the document model.

use crate::{Links, Meta};

/// Produces pagination links for a list response.
///
/// `None` means the result set needs no pagination, which is distinct from
/// an empty set of links.
pub trait Paginator {
    /// Generates the pagination links.
    fn generate_pagination(&self) -> Option<Links>;
}

/// Includes document links in response data,
/// e.g. `{"self": "http://example.com/posts/1"}`.
pub trait Linkable {
    /// Returns the links for this resource.
    fn jsonapi_links(&self) -> Option<Links>;
}

/// Includes relationship links in response data,
/// e.g. `{"related": "http://example.com/posts/1/comments"}`.
pub trait RelationshipLinkable {
    /// Invoked for each relationship with its relation name (e.g. `comments`).
    fn jsonapi_relationship_links(&self, relation: &str) -> Option<Links>;
}

/// Includes document meta in response data, e.g. `{"foo": "bar"}`.
pub trait Metable {
    /// Returns the meta for this resource.
    fn jsonapi_meta(&self) -> Option<Meta>;
}

/// Includes relationship meta in response data.
pub trait RelationshipMetable {
    /// Invoked for each relationship with its relation name (e.g. `comments`).
    fn jsonapi_relationship_meta(&self, relation: &str) -> Option<Meta>;
}
