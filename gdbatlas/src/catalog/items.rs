//! Item catalog loading.
//!
//! `GDB_Items` enumerates every object stored in the geodatabase; each row
//! carries an opaque UUID, a name, a type string and a slash-separated path.
//! The catalog is loaded once per run into an id-keyed map and is read-only
//! afterward. An empty or missing table yields an empty catalog, never an
//! error.

use std::collections::btree_map;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::schema::FieldMap;
use crate::container::VectorContainer;

/// Name of the relationship type that records feature-dataset ownership.
pub const DATASET_IN_FEATURE_DATASET: &str = "DatasetInFeatureDataset";

/// One row of the item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Opaque unique identifier (UUID string).
    pub id: String,
    /// Object name; may be empty for some internal rows.
    pub name: String,
    /// Type string, e.g. `RasterDataset`, `MosaicDataset`, `FeatureDataset`.
    pub item_type: String,
    /// Slash-separated logical path, or empty.
    pub path: String,
}

impl CatalogItem {
    /// Whether this item is a raster or mosaic dataset.
    pub fn is_raster(&self) -> bool {
        matches!(self.item_type.as_str(), "RasterDataset" | "MosaicDataset")
    }
}

/// Id-keyed snapshot of the item catalog.
///
/// Backed by a `BTreeMap` so iteration order is deterministic, which keeps
/// catalog-derived output identical across runs of an unchanged container.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, CatalogItem>,
}

impl ItemCatalog {
    /// Look up an item by id. Absence means "unknown item", never an error.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    /// Iterate items in id order.
    pub fn iter(&self) -> btree_map::Values<'_, String, CatalogItem> {
        self.items.values()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn insert(&mut self, item: CatalogItem) {
        self.items.insert(item.id.clone(), item);
    }
}

/// Load the item catalog from `GDB_Items`.
///
/// Rows without a usable id are skipped; absent `Name`/`Type`/`Path` fields
/// read as empty strings.
pub fn load_items(container: &dyn VectorContainer) -> ItemCatalog {
    let mut catalog = ItemCatalog::default();

    let Some(table) = container.read_system_table("GDB_Items") else {
        warn!("GDB_Items unavailable, catalog channels disabled for this run");
        return catalog;
    };

    let fields = FieldMap::resolve(&table);
    for row in table.rows() {
        let Some(id) = fields.get(row, "UUID").filter(|id| !id.is_empty()) else {
            continue;
        };
        catalog.insert(CatalogItem {
            id: id.to_string(),
            name: fields.get(row, "Name").unwrap_or("").to_string(),
            item_type: fields.get(row, "Type").unwrap_or("").to_string(),
            path: fields.get(row, "Path").unwrap_or("").to_string(),
        });
    }

    debug!(items = catalog.len(), "item catalog loaded");
    catalog
}

/// Resolve the id of a relationship type by name, usually
/// [`DATASET_IN_FEATURE_DATASET`].
///
/// `None` disables the relationship channel for the run; raster grouping
/// then falls back to path hints.
pub fn load_relationship_type_id(container: &dyn VectorContainer, name: &str) -> Option<String> {
    let Some(table) = container.read_system_table("GDB_ItemRelationshipTypes") else {
        warn!("GDB_ItemRelationshipTypes unavailable, relationship channel disabled");
        return None;
    };

    let fields = FieldMap::resolve(&table);
    let id = table
        .rows()
        .iter()
        .find(|row| fields.get(row, "Name") == Some(name))
        .and_then(|row| fields.get(row, "UUID"))
        .map(str::to_string);

    if id.is_none() {
        debug!(relationship_type = name, "relationship type not found");
    }
    id
}
