//! Relationship-based ownership resolution.
//!
//! The authoritative record of which feature dataset owns a raster lives in
//! `GDB_ItemRelationships`: rows of (origin, dest, type) UUID triples. Rows
//! whose type matches the resolved `DatasetInFeatureDataset` id link a
//! feature dataset (origin, the parent) to a dataset it contains (dest, the
//! child). Only raster and mosaic children matter here; vector layers get
//! their grouping straight from layer enumeration.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{FieldMap, ItemCatalog};
use crate::container::VectorContainer;
use crate::inventory::ROOT_COMPONENT;

/// Build the raster-name → feature-dataset-name map from the relationship
/// catalog.
///
/// Short-circuits to an empty map when `relationship_type_id` is `None`
/// (the relationship channel is disabled; the relationship table is not even
/// queried). Rows are processed in table order; if two rows claim the same
/// child name the last one wins, deterministically.
pub fn build_child_to_parent_map(
    container: &dyn VectorContainer,
    relationship_type_id: Option<&str>,
    items: &ItemCatalog,
) -> HashMap<String, String> {
    let Some(type_id) = relationship_type_id else {
        return HashMap::new();
    };

    let Some(table) = container.read_system_table("GDB_ItemRelationships") else {
        debug!("GDB_ItemRelationships unavailable");
        return HashMap::new();
    };

    let fields = FieldMap::resolve(&table);
    let mut map = HashMap::new();

    for row in table.rows() {
        if fields.get(row, "RelationshipType") != Some(type_id) {
            continue;
        }

        let Some(child) = fields.get(row, "DestID").and_then(|id| items.get(id)) else {
            continue;
        };
        if !child.is_raster() || child.name.is_empty() {
            continue;
        }

        let parent = fields
            .get(row, "OriginID")
            .and_then(|id| items.get(id))
            .map(|item| item.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(ROOT_COMPONENT);

        map.insert(child.name.clone(), parent.to_string());
    }

    debug!(entries = map.len(), "relationship map built");
    map
}
