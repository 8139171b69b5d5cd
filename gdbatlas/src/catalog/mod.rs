//! System catalog indexing.
//!
//! A File Geodatabase describes itself through internal `GDB_*` tables:
//! `GDB_Items` (every stored object), `GDB_ItemRelationshipTypes` (the
//! vocabulary of typed links) and `GDB_ItemRelationships` (the links
//! themselves). This module materializes those queries and builds the
//! id-keyed lookups the hierarchy resolver joins against.
//!
//! All loading is tolerant: missing tables, empty tables and missing fields
//! degrade the affected channel instead of failing the run.

mod items;
mod schema;
mod table;

pub use items::{
    load_items, load_relationship_type_id, CatalogItem, ItemCatalog, DATASET_IN_FEATURE_DATASET,
};
pub use schema::FieldMap;
pub use table::SystemTable;
