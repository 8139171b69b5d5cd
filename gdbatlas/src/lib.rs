//! GdbAtlas - File Geodatabase structure inventory
//!
//! This library inventories the logical structure of an Esri File
//! Geodatabase: every vector layer and raster dataset, annotated with its
//! owning feature dataset, geometry/raster type, spatial reference and basic
//! size metrics, assembled into one flat, deterministically ordered table.
//!
//! The hard part is raster ownership. The raster enumeration API reports
//! flat names or unreliable path hints, so the resolver reconciles three
//! sources in strict precedence: the component embedded in a subdataset
//! identifier, the `DatasetInFeatureDataset` joins in the system catalog,
//! and the catalog path fallback. Any source may be absent; the run degrades
//! instead of failing, and only a vector-mode open failure is fatal.
//!
//! Entry point: [`scan`] for an on-disk geodatabase, or [`scan_container`]
//! over custom [`container`] implementations.

pub mod catalog;
pub mod container;
pub mod hierarchy;
pub mod inventory;
pub mod scan;

pub use container::OpenError;
pub use inventory::{DataKind, InventoryRow, InventoryTable, ROOT_COMPONENT};
pub use scan::{scan, scan_container};
