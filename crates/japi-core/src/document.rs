//! JSON:API document records.
//!
//! These are declarative records; the only behaviour is clearing `included`
//! data, attaching provider output and merging pagination links.

use crate::{
    Linkable, Links, Meta, Metable, Paginator, RelationshipLinkable, RelationshipMetable,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

/// Implemented by the single and many payload envelopes.
pub trait Payloader {
    /// Drops all `included` resources.
    fn clear_included(&mut self);

    /// Attaches pagination links produced by `paginator`.
    fn add_pagination(&mut self, paginator: &dyn Paginator);
}

/// A generic JSON:API resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// The resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The resource id; omitted when empty (e.g. client-side creation).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Resource attributes.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    /// Resource relationships.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub relationships: Map<String, Value>,
    /// Resource links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Resource meta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ResourceObject {
    /// Creates a resource with a type and id.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Replaces the resource links with those of `source`.
    pub fn attach_links(&mut self, source: &dyn Linkable) {
        self.links = source.jsonapi_links();
    }

    /// Replaces the resource meta with that of `source`.
    pub fn attach_meta(&mut self, source: &dyn Metable) {
        self.meta = source.jsonapi_meta();
    }
}

/// A resource whose attributes are kept as raw JSON so explicit `null`
/// values can be told apart from missing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NulledResourceObject {
    /// The resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The resource id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Raw attribute values.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl NulledResourceObject {
    /// Names of the attributes sent as an explicit `null`.
    #[must_use]
    pub fn null_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, value)| value.is_null())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// A payload used to inspect explicit nulls in the primary resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NulledPayload {
    /// The primary resource.
    pub data: NulledResourceObject,
}

/// A payload whose `data` is a single resource (or `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnePayload {
    /// The primary resource.
    pub data: Option<ResourceObject>,
    /// Related resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
    /// Top-level links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Top-level meta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Payloader for OnePayload {
    fn clear_included(&mut self) {
        self.included.clear();
    }

    fn add_pagination(&mut self, _paginator: &dyn Paginator) {
        trace!("Single resource payloads are not paginated");
    }
}

/// A payload whose `data` is an array of resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManyPayload {
    /// The primary resources.
    pub data: Vec<ResourceObject>,
    /// Related resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
    /// Top-level links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Top-level meta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Payloader for ManyPayload {
    fn clear_included(&mut self) {
        self.included.clear();
    }

    fn add_pagination(&mut self, paginator: &dyn Paginator) {
        if let Some(pagination) = paginator.generate_pagination() {
            self.links.get_or_insert_with(Links::new).merge(pagination);
        }
    }
}

/// A has-one relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipOneNode {
    /// The related resource, or `null`.
    pub data: Option<ResourceObject>,
    /// Relationship links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Relationship meta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl RelationshipOneNode {
    /// Sets the links `source` provides for `relation`.
    pub fn attach_links(&mut self, relation: &str, source: &dyn RelationshipLinkable) {
        self.links = source.jsonapi_relationship_links(relation);
    }

    /// Sets the meta `source` provides for `relation`.
    pub fn attach_meta(&mut self, relation: &str, source: &dyn RelationshipMetable) {
        self.meta = source.jsonapi_relationship_meta(relation);
    }
}

/// A has-many relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipManyNode {
    /// The related resources.
    pub data: Vec<ResourceObject>,
    /// Relationship links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Relationship meta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl RelationshipManyNode {
    /// Sets the links `source` provides for `relation`.
    pub fn attach_links(&mut self, relation: &str, source: &dyn RelationshipLinkable) {
        self.links = source.jsonapi_relationship_links(relation);
    }

    /// Sets the meta `source` provides for `relation`.
    pub fn attach_meta(&mut self, relation: &str, source: &dyn RelationshipMetable) {
        self.meta = source.jsonapi_relationship_meta(relation);
    }
}
