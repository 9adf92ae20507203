//! Well-known field keys of the knowledge graph schema records.

pub const IDENTIFIER: &str = "@id";
pub const NAME: &str = "http://schema.org/name";
pub const DESCRIPTION: &str = "http://schema.org/description";

pub const META_COLOR: &str = "https://core.kg.ebrains.eu/vocab/meta/color";
pub const META_PROPERTIES: &str = "https://core.kg.ebrains.eu/vocab/meta/properties";
pub const META_INCOMING_LINKS: &str = "https://core.kg.ebrains.eu/vocab/meta/incomingLinks";
pub const META_TARGET_TYPES: &str = "https://core.kg.ebrains.eu/vocab/meta/targetTypes";
pub const META_SOURCE_TYPES: &str = "https://core.kg.ebrains.eu/vocab/meta/sourceTypes";
pub const META_TYPE: &str = "https://core.kg.ebrains.eu/vocab/meta/type";
pub const META_NAME_REVERSE_LINK: &str = "https://core.kg.ebrains.eu/vocab/meta/nameForReverseLink";
