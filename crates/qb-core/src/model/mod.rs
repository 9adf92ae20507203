//! Normalized type schema models.

pub mod property;
pub mod type_entity;

use serde::{Deserialize, Serialize};

pub use property::Property;
pub use type_entity::TypeEntity;

/// Single-payload response envelope used by the metadata service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
