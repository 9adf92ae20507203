//! Property of a type, either an outgoing attribute or an incoming link.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::decode::RawProperty;

/// One attribute of a type as presented to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub simple_attribute_name: String,
    pub attribute: String,
    pub label: Option<String>,
    /// Types the value may point to. `None` means unconstrained, which is
    /// not the same as an empty list.
    pub can_be: Option<Vec<String>>,
    /// `Some(true)` for incoming links, `None` for outgoing attributes.
    pub reverse: Option<bool>,
}

impl Property {
    /// Build an outgoing property from its record.
    pub fn from_record(record: &RawProperty) -> Self {
        Self {
            simple_attribute_name: simple_attribute_name(&record.id),
            attribute: record.id.clone(),
            label: record.name.clone(),
            can_be: record.target_types.clone(),
            reverse: None,
        }
    }

    /// Build an incoming-link property.
    ///
    /// The label comes from `reverse_link_names` when the owning type declares
    /// a reverse name for this attribute, otherwise from the record itself.
    pub fn from_incoming_link_record(
        record: &RawProperty,
        reverse_link_names: &HashMap<String, String>,
    ) -> Self {
        let label = reverse_link_names
            .get(&record.id)
            .cloned()
            .or_else(|| record.name.clone());

        Self {
            simple_attribute_name: simple_attribute_name(&record.id),
            attribute: record.id.clone(),
            label,
            can_be: record.source_types.clone(),
            reverse: Some(true),
        }
    }

    /// Identity used when folding two descriptions of the same type.
    pub fn key(&self) -> (String, Option<bool>) {
        (self.attribute.clone(), self.reverse)
    }

    /// Fold the `can_be` list of `other` into this property.
    ///
    /// When both lists are present the result is their sorted, distinct
    /// union. When only `other` has one it is taken over as-is.
    pub fn merge(&mut self, other: &Property) {
        let Some(theirs) = &other.can_be else {
            return;
        };

        match &mut self.can_be {
            Some(mine) => {
                mine.extend(theirs.iter().cloned());
                mine.sort();
                mine.dedup();
            }
            None => self.can_be = Some(theirs.clone()),
        }
    }
}

/// Short local name of an attribute identifier.
///
/// `@`-prefixed keywords lose every `@`; anything else keeps its last
/// non-empty path segment.
pub fn simple_attribute_name(attribute: &str) -> String {
    if attribute.starts_with('@') {
        attribute.replace('@', "")
    } else {
        attribute
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}
