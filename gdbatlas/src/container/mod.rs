//! Geodatabase access: handles, traversal and subdataset parsing.
//!
//! The [`VectorContainer`] / [`RasterContainer`] traits are the seams between
//! the resolution pipeline and GDAL; [`GdalVectorContainer`] and
//! [`GdalRasterContainer`] are the production implementations.

pub mod gdal;
pub mod groups;
#[cfg(test)]
pub(crate) mod mock;
pub mod subdataset;
pub mod traits;

pub use gdal::{authority_code, GdalRasterContainer, GdalVectorContainer};
pub use groups::walk_layers;
pub use subdataset::{parse_identifier, ParsedSubdataset};
pub use traits::{
    Group, LayerInfo, OpenError, RasterContainer, RasterMetadata, RasterReadError, Subdataset,
    VectorContainer,
};
