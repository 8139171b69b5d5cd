//! Raster ownership resolution and inventory assembly.
//!
//! A geodatabase's raster enumeration reports only flat names or unreliable
//! path hints, while the authoritative grouping lives in the relationship
//! catalog behind two UUID joins. This module reconciles the three sources
//! (identifier hints, relationship joins, catalog paths) under graceful
//! degradation and assembles the final ordered table.

mod assembler;
mod path_fallback;
mod relationships;

pub use assembler::{assemble, catalog_recovery_rows, raster_rows, vector_rows, ResolverMaps};
pub use path_fallback::build_path_map;
pub use relationships::build_child_to_parent_map;
