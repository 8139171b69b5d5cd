//! Container access seams.
//!
//! Everything the resolution pipeline needs from a geodatabase goes through
//! these traits, so the pipeline can be exercised against in-memory fixtures
//! while production runs use the GDAL-backed implementations in
//! [`super::gdal`].
//!
//! # Design Principles
//!
//! - **Two handles**: vector mode and raster mode are separate opens because
//!   the driver fixes the mode at open time. Raster mode is optional; a
//!   missing raster handle degrades enumeration to catalog-only recovery.
//! - **Materialized queries**: system-table reads return a fully materialized
//!   [`SystemTable`] so joins are built once from a snapshot, never by
//!   re-querying per lookup.
//! - **Fault isolation**: only the vector-mode open is fatal. Every other
//!   operation reports absence (`Option`, empty `Vec`) or a per-item error
//!   the caller absorbs.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::SystemTable;

/// Fatal container-open failure. The only error that aborts a run.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The container could not be opened in vector mode.
    #[error("cannot open container {path} in vector mode: {reason}")]
    Vector {
        /// The path that was attempted.
        path: PathBuf,
        /// Driver-reported failure.
        reason: String,
    },
}

/// Failure to open or read one raster subdataset. Absorbed per subdataset;
/// never aborts enumeration of the others.
#[derive(Debug, Error)]
#[error("cannot read raster subdataset {identifier}: {reason}")]
pub struct RasterReadError {
    /// The subdataset identifier that was attempted.
    pub identifier: String,
    /// Driver-reported failure.
    pub reason: String,
}

/// A vector layer as enumerated from the container.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo {
    /// Layer name, without any group prefix.
    pub name: String,
    /// Geometry type name (e.g. `Polygon`).
    pub geom_type: String,
    /// Spatial reference as `authority:code`, empty if unresolvable.
    pub crs: String,
    /// Feature count, absent if the driver could not report one.
    pub feature_count: Option<u64>,
}

/// A raster subdataset entry: opaque identifier plus driver description.
#[derive(Debug, Clone, PartialEq)]
pub struct Subdataset {
    /// Opaque connection string addressing the subdataset.
    pub identifier: String,
    /// Human-readable description reported alongside the identifier.
    pub description: String,
}

/// Metadata read from one opened raster subdataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterMetadata {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Band count.
    pub bands: usize,
    /// Spatial reference as `authority:code`, empty if unresolvable.
    pub crs: String,
}

/// A node in the container's group hierarchy (a feature dataset, or the
/// root). Traversal is the caller's job; see [`super::groups::walk_layers`].
pub trait Group {
    /// Names of child groups, in driver order.
    fn group_names(&self) -> Vec<String>;

    /// Open a child group by name. `None` if it cannot be opened.
    fn open_group(&self, name: &str) -> Option<Box<dyn Group>>;

    /// Vector layers owned directly by this group.
    fn layers(&self) -> Vec<LayerInfo>;
}

/// A container opened in vector mode.
///
/// Also the door to the system catalog: relationship joins run against the
/// same handle via [`VectorContainer::read_system_table`].
pub trait VectorContainer {
    /// Root of the group hierarchy, if the driver exposes one.
    ///
    /// `None` switches layer enumeration to the flat fallback.
    fn root_group(&self) -> Option<Box<dyn Group>>;

    /// All layers as a flat list, used when no group hierarchy exists.
    fn flat_layers(&self) -> Vec<LayerInfo>;

    /// Materialize a system catalog table (e.g. `GDB_Items`).
    ///
    /// `None` when the table is missing or the query fails; both degrade
    /// the affected channel rather than aborting the run.
    fn read_system_table(&self, name: &str) -> Option<SystemTable>;
}

/// A container opened in raster mode.
pub trait RasterContainer {
    /// Enumerate raster subdatasets. Empty when the driver reports none.
    fn subdatasets(&self) -> Vec<Subdataset>;

    /// Open one subdataset and read its metadata. Failures are per-item.
    fn open_subdataset(&self, identifier: &str) -> Result<RasterMetadata, RasterReadError>;
}
