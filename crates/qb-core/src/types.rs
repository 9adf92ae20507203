//! Normalization of the type list returned by the metadata service.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::model::TypeEntity;

/// Build one [`TypeEntity`] per distinct type id.
///
/// The metadata service may describe a type several times (once per space
/// it occurs in). Later descriptions are merged into the first one, and the
/// result keeps the order in which ids were first seen. Records that cannot
/// be decoded are skipped.
pub fn normalize_types<'a, I>(records: I) -> Vec<TypeEntity>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged: Vec<TypeEntity> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let entity = match TypeEntity::from_value(record) {
            Ok(entity) => entity,
            Err(e) => {
                warn!(error = %e, "Skipping undecodable type record");
                continue;
            }
        };

        match positions.get(&entity.id) {
            Some(&index) => {
                debug!(id = %entity.id, "Merging duplicate type description");
                merged[index].merge_with(entity);
            }
            None => {
                positions.insert(entity.id.clone(), merged.len());
                merged.push(entity);
            }
        }
    }

    merged
}
