//! # Markup Model
//!
//! The parsed-markup record the tree builder hands to layout. A `Tag` is an
//! immutable value: a name, a single/paired classification, and an optional
//! attribute map. The tree builder constructs tags once at parse time; layout
//! and the host event hooks only ever read them.
//!
//! An absent attribute map and an empty one are indistinguishable through the
//! lookup API; the distinction exists only to avoid allocating a map for the
//! common attribute-less tag.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::GalleyError;

/// Attribute map of a markup element: attribute name to raw attribute value.
pub type AttributeMap = HashMap<String, String>;

/// An immutable parsed markup tag.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    name: String,
    is_single: bool,
    attributes: Option<AttributeMap>,
}

impl Tag {
    /// Build a tag from its parsed parts.
    ///
    /// `is_single` marks a tag with no separate closing tag, e.g. `<br>`.
    /// Fails when `name` is empty; the tree builder must supply valid data.
    pub fn new(
        name: impl Into<String>,
        is_single: bool,
        attributes: Option<AttributeMap>,
    ) -> Result<Self, GalleyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GalleyError::EmptyTagName);
        }
        Ok(Self {
            name,
            is_single,
            attributes,
        })
    }

    /// The tag name, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the tag is single placed (has no separate closing tag).
    pub fn is_single(&self) -> bool {
        self.is_single
    }

    /// The raw attribute map, if one was parsed.
    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_ref()
    }

    /// True iff the tag carries at least one attribute.
    pub fn has_attributes(&self) -> bool {
        self.attributes.as_ref().is_some_and(|map| !map.is_empty())
    }

    /// True iff the named attribute is present.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes
            .as_ref()
            .is_some_and(|map| map.contains_key(attribute))
    }

    /// The value of the named attribute, or `default` when absent.
    ///
    /// `default` may itself be `None`, signaling "no value" to the caller.
    pub fn try_get_attribute<'tag>(
        &'tag self,
        attribute: &str,
        default: Option<&'tag str>,
    ) -> Option<&'tag str> {
        match self
            .attributes
            .as_ref()
            .and_then(|map| map.get(attribute))
        {
            Some(value) => Some(value.as_str()),
            None => default,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}
