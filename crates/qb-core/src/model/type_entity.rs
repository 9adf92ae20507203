//! Graph type with its outgoing and incoming properties.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::property::Property;
use crate::decode::RawType;
use crate::error::QbResult;

/// A type of the knowledge graph, ready for the query builder UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntity {
    pub id: String,
    pub label: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    /// Outgoing properties first, then incoming links, each in source order.
    pub properties: Vec<Property>,
}

impl TypeEntity {
    /// Decode and build a type from a raw schema record.
    pub fn from_value(value: &Value) -> QbResult<Self> {
        Ok(Self::from_record(RawType::from_value(value)?))
    }

    /// Build a type from its decoded record.
    pub fn from_record(record: RawType) -> Self {
        let reverse_link_names: HashMap<String, String> = record
            .properties
            .iter()
            .filter_map(|p| {
                p.name_for_reverse_link
                    .as_ref()
                    .map(|name| (p.id.clone(), name.clone()))
            })
            .collect();

        let mut properties: Vec<Property> = record
            .properties
            .iter()
            .map(Property::from_record)
            .collect();

        properties.extend(
            record
                .incoming_links
                .iter()
                .map(|link| Property::from_incoming_link_record(link, &reverse_link_names)),
        );

        Self {
            id: record.id,
            label: record.name,
            color: record.color,
            description: record.description,
            properties,
        }
    }

    /// Fold another description of the same type into this one.
    ///
    /// Properties matching on `(attribute, reverse)` get their `can_be`
    /// merged. Properties of `other` are appended only when their attribute
    /// does not occur here at all, whatever its `reverse` flag: an incoming
    /// link of `other` sharing an attribute with an outgoing property of
    /// `self` is dropped. Display fields of `self` are kept.
    pub fn merge_with(&mut self, other: TypeEntity) {
        // Last one wins when `other` repeats a key.
        let by_key: HashMap<(String, Option<bool>), usize> = other
            .properties
            .iter()
            .enumerate()
            .map(|(index, p)| (p.key(), index))
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        for property in &mut self.properties {
            if let Some(&index) = by_key.get(&property.key()) {
                property.merge(&other.properties[index]);
            }
            seen.insert(property.attribute.clone());
        }

        self.properties.extend(
            other
                .properties
                .into_iter()
                .filter(|p| !seen.contains(&p.attribute)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::simple_attribute_name;
    use serde_json::json;

    fn property(attribute: &str, reverse: Option<bool>, can_be: &[&str]) -> Property {
        Property {
            simple_attribute_name: simple_attribute_name(attribute),
            attribute: attribute.to_string(),
            label: None,
            can_be: Some(can_be.iter().map(|t| t.to_string()).collect()),
            reverse,
        }
    }

    fn entity(id: &str, properties: Vec<Property>) -> TypeEntity {
        TypeEntity {
            id: id.to_string(),
            label: Some(id.to_string()),
            color: None,
            description: None,
            properties,
        }
    }

    #[test]
    fn test_from_value_single_outgoing_property() {
        let record = json!({
            "@id": "Type/A",
            "http://schema.org/name": "A",
            "https://core.kg.ebrains.eu/vocab/meta/properties": [
                {
                    "@id": "@rel1",
                    "http://schema.org/name": "Rel",
                    "https://core.kg.ebrains.eu/vocab/meta/targetTypes": [
                        { "https://core.kg.ebrains.eu/vocab/meta/type": "Type/B" }
                    ]
                }
            ],
            "https://core.kg.ebrains.eu/vocab/meta/incomingLinks": []
        });

        let t = TypeEntity::from_value(&record).unwrap();
        assert_eq!(t.id, "Type/A");
        assert_eq!(t.label.as_deref(), Some("A"));
        assert_eq!(t.color, None);
        assert_eq!(t.description, None);
        assert_eq!(t.properties.len(), 1);

        let p = &t.properties[0];
        assert_eq!(p.simple_attribute_name, "rel1");
        assert_eq!(p.attribute, "@rel1");
        assert_eq!(p.label.as_deref(), Some("Rel"));
        assert_eq!(p.can_be, Some(vec!["Type/B".to_string()]));
        assert_eq!(p.reverse, None);
    }

    #[test]
    fn test_from_value_appends_incoming_links_with_reverse_labels() {
        let record = json!({
            "@id": "https://openminds.ebrains.eu/core/Person",
            "https://core.kg.ebrains.eu/vocab/meta/properties": [
                "garbage",
                {
                    "@id": "https://openminds.ebrains.eu/vocab/familyName",
                    "http://schema.org/name": "familyName"
                },
                {
                    "@id": "https://openminds.ebrains.eu/vocab/author",
                    "http://schema.org/name": "author",
                    "https://core.kg.ebrains.eu/vocab/meta/nameForReverseLink": "authored"
                }
            ],
            "https://core.kg.ebrains.eu/vocab/meta/incomingLinks": [
                {
                    "@id": "https://openminds.ebrains.eu/vocab/author",
                    "http://schema.org/name": "author",
                    "https://core.kg.ebrains.eu/vocab/meta/sourceTypes": [
                        { "https://core.kg.ebrains.eu/vocab/meta/type": "https://openminds.ebrains.eu/core/Dataset" },
                        { "https://core.kg.ebrains.eu/vocab/meta/type": "https://openminds.ebrains.eu/core/Model" }
                    ]
                },
                {
                    "@id": "https://openminds.ebrains.eu/vocab/custodian",
                    "http://schema.org/name": "custodian"
                }
            ]
        });

        let t = TypeEntity::from_value(&record).unwrap();
        let summary: Vec<(&str, Option<&str>, Option<bool>)> = t
            .properties
            .iter()
            .map(|p| (p.simple_attribute_name.as_str(), p.label.as_deref(), p.reverse))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("familyName", Some("familyName"), None),
                ("author", Some("author"), None),
                ("author", Some("authored"), Some(true)),
                ("custodian", Some("custodian"), Some(true)),
            ]
        );
        assert_eq!(
            t.properties[2].can_be,
            Some(vec![
                "https://openminds.ebrains.eu/core/Dataset".to_string(),
                "https://openminds.ebrains.eu/core/Model".to_string(),
            ])
        );
        assert_eq!(t.properties[3].can_be, None);
    }

    #[test]
    fn test_constructor_keeps_duplicates() {
        let record = json!({
            "@id": "Type/A",
            "https://core.kg.ebrains.eu/vocab/meta/properties": [
                { "@id": "@dup" },
                { "@id": "@dup" }
            ]
        });

        let t = TypeEntity::from_value(&record).unwrap();
        assert_eq!(t.properties.len(), 2);
    }

    #[test]
    fn test_merge_disjoint_properties_appends_all() {
        let mut a = entity("T", vec![property("a1", None, &[]), property("a2", Some(true), &[])]);
        let b = entity(
            "T",
            vec![
                property("b1", None, &[]),
                property("b2", None, &[]),
                property("b3", Some(true), &[]),
            ],
        );

        a.merge_with(b);
        assert_eq!(a.properties.len(), 5);
        let attributes: Vec<&str> = a.properties.iter().map(|p| p.attribute.as_str()).collect();
        assert_eq!(attributes, vec!["a1", "a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_merge_matching_property_merges_can_be() {
        let mut a = entity("T", vec![property("x", None, &["T2", "T1"])]);
        let b = entity("T", vec![property("x", None, &["T1", "T3"])]);

        a.merge_with(b);
        assert_eq!(a.properties.len(), 1);
        assert_eq!(
            a.properties[0].can_be,
            Some(vec!["T1".to_string(), "T2".to_string(), "T3".to_string()])
        );
    }

    #[test]
    fn test_merge_drops_other_reverse_sharing_attribute() {
        let mut a = entity("T", vec![property("p1", None, &["A"])]);
        let b = entity(
            "T",
            vec![property("p1", None, &["B"]), property("p1", Some(true), &["C"])],
        );

        a.merge_with(b);

        // The incoming p1 is dropped: seen attributes ignore the reverse flag.
        assert_eq!(a.properties.len(), 1);
        assert_eq!(a.properties[0].reverse, None);
        assert_eq!(
            a.properties[0].can_be,
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_merge_does_not_cross_reverse_buckets() {
        let mut a = entity("T", vec![property("p1", None, &["A"])]);
        let b = entity("T", vec![property("p1", Some(true), &["C"])]);

        a.merge_with(b);
        assert_eq!(a.properties.len(), 1);
        assert_eq!(a.properties[0].can_be, Some(vec!["A".to_string()]));
    }

    #[test]
    fn test_merge_last_duplicate_in_other_wins() {
        let mut a = entity("T", vec![property("x", None, &["A"])]);
        let b = entity(
            "T",
            vec![property("x", None, &["B"]), property("x", None, &["C"])],
        );

        a.merge_with(b);
        assert_eq!(a.properties.len(), 1);
        assert_eq!(a.properties[0].can_be, Some(vec!["A".to_string(), "C".to_string()]));
    }

    #[test]
    fn test_merge_keeps_receiver_display_fields() {
        let mut a = entity("T", vec![]);
        a.color = Some("#111111".to_string());
        let mut b = entity("T", vec![]);
        b.label = Some("Other".to_string());
        b.color = Some("#222222".to_string());
        b.description = Some("from another space".to_string());

        a.merge_with(b);
        assert_eq!(a.label.as_deref(), Some("T"));
        assert_eq!(a.color.as_deref(), Some("#111111"));
        assert_eq!(a.description, None);
    }

    #[test]
    fn test_serializes_ui_shape() {
        let t = entity("Type/A", vec![property("@rel1", Some(true), &["Type/B"])]);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "Type/A",
                "label": "Type/A",
                "color": null,
                "description": null,
                "properties": [{
                    "simpleAttributeName": "rel1",
                    "attribute": "@rel1",
                    "label": null,
                    "canBe": ["Type/B"],
                    "reverse": true
                }]
            })
        );
    }
}
