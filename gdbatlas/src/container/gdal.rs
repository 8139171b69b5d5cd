//! GDAL-backed container implementations.
//!
//! A File Geodatabase is opened twice per run: once in vector mode (layers
//! plus system-catalog SQL, via `OpenFileGDB`/`FileGDB` with
//! `LIST_ALL_TABLES=YES`) and once in raster mode (subdataset enumeration,
//! `OpenFileGDB` only). Both handles are plain RAII wrappers around
//! [`Dataset`]; dropping them releases the container on every exit path.
//!
//! Only the vector-mode open is fatal. Raster-mode open failure, query
//! failures and per-subdataset read failures all degrade locally.

use std::path::Path;

use gdal::spatial_ref::SpatialRef;
use gdal::vector::sql::Dialect;
use gdal::vector::{geometry_type_to_name, Layer, LayerAccess};
use gdal::{Dataset, DatasetOptions, GdalOpenFlags, Metadata};
use tracing::{debug, warn};

use super::traits::{
    Group, LayerInfo, OpenError, RasterContainer, RasterMetadata, RasterReadError, Subdataset,
    VectorContainer,
};
use crate::catalog::SystemTable;

/// Drivers accepted for vector-mode opens. `FileGDB` is the licensed ESRI
/// SDK driver; `OpenFileGDB` is GDAL's built-in reader.
const VECTOR_DRIVERS: &[&str] = &["OpenFileGDB", "FileGDB"];

/// Only `OpenFileGDB` exposes geodatabase rasters as subdatasets.
const RASTER_DRIVERS: &[&str] = &["OpenFileGDB"];

/// Format a spatial reference as `authority:code`, or empty when no
/// authority can be identified.
pub fn authority_code(mut srs: SpatialRef) -> String {
    // Best effort; an unidentifiable CRS is reported as empty, not an error.
    let _ = srs.auto_identify_epsg();
    match (srs.auth_name(), srs.auth_code()) {
        (Some(name), Ok(code)) => format!("{}:{}", name, code),
        _ => String::new(),
    }
}

/// A geodatabase opened in vector mode.
#[derive(Debug)]
pub struct GdalVectorContainer {
    dataset: Dataset,
}

impl GdalVectorContainer {
    /// Open the container in vector mode. This is the run's only fatal
    /// failure point.
    pub fn open(path: &Path) -> Result<Self, OpenError> {
        let options = DatasetOptions {
            open_flags: GdalOpenFlags::GDAL_OF_VECTOR | GdalOpenFlags::GDAL_OF_READONLY,
            allowed_drivers: Some(VECTOR_DRIVERS),
            // Expose GDB_* system tables to SQL.
            open_options: Some(&["LIST_ALL_TABLES=YES"]),
            ..DatasetOptions::default()
        };
        let dataset = Dataset::open_ex(path, options).map_err(|e| OpenError::Vector {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { dataset })
    }
}

fn layer_info(layer: &Layer) -> LayerInfo {
    let geom_type = layer
        .defn()
        .geom_fields()
        .next()
        .map(|field| geometry_type_to_name(field.field_type()))
        .unwrap_or_else(|| "None".to_string());
    let crs = layer.spatial_ref().map(authority_code).unwrap_or_default();
    LayerInfo {
        name: layer.name(),
        geom_type,
        crs,
        feature_count: Some(layer.feature_count()),
    }
}

impl VectorContainer for GdalVectorContainer {
    fn root_group(&self) -> Option<Box<dyn Group>> {
        // The GDAL vector group API (GetRootGroup / OpenVectorLayer) has no
        // binding in the gdal crate; enumeration uses the flat listing.
        None
    }

    fn flat_layers(&self) -> Vec<LayerInfo> {
        self.dataset.layers().map(|layer| layer_info(&layer)).collect()
    }

    fn read_system_table(&self, name: &str) -> Option<SystemTable> {
        materialize_sql(&self.dataset, name)
    }
}

/// Materialize `SELECT * FROM <table>` into a [`SystemTable`] snapshot.
///
/// `None` covers both a missing table and a failed query; either way the
/// affected catalog channel degrades instead of aborting the run.
fn materialize_sql(dataset: &Dataset, name: &str) -> Option<SystemTable> {
    let sql = format!("SELECT * FROM {}", name);
    let mut result = match dataset.execute_sql(&sql, None, Dialect::DEFAULT) {
        Ok(Some(result)) => result,
        Ok(None) => {
            debug!(table = name, "system table query returned no result set");
            return None;
        }
        Err(e) => {
            warn!(table = name, error = %e, "system table query failed");
            return None;
        }
    };

    let fields: Vec<String> = result.defn().fields().map(|field| field.name()).collect();
    let width = fields.len();
    let mut table = SystemTable::new(fields);
    for feature in result.features() {
        let row = (0..width)
            .map(|index| feature.field_as_string(index).ok().flatten())
            .collect();
        table.push_row(row);
    }

    debug!(table = name, rows = table.len(), "system table materialized");
    Some(table)
}

/// A geodatabase opened in raster mode.
pub struct GdalRasterContainer {
    dataset: Dataset,
}

impl GdalRasterContainer {
    /// Open the container in raster mode. `None` degrades raster
    /// enumeration to catalog-only recovery.
    pub fn open(path: &Path) -> Option<Self> {
        let options = DatasetOptions {
            open_flags: GdalOpenFlags::GDAL_OF_RASTER | GdalOpenFlags::GDAL_OF_READONLY,
            allowed_drivers: Some(RASTER_DRIVERS),
            ..DatasetOptions::default()
        };
        match Dataset::open_ex(path, options) {
            Ok(dataset) => Some(Self { dataset }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "raster mode unavailable");
                None
            }
        }
    }
}

/// Parse the `SUBDATASETS` metadata domain into identifier/description
/// pairs. Entries come as `SUBDATASET_<n>_NAME=` / `SUBDATASET_<n>_DESC=`
/// lines, NAME first.
fn parse_subdataset_domain(entries: &[String]) -> Vec<Subdataset> {
    let mut out: Vec<Subdataset> = Vec::new();
    for entry in entries {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        if key.starts_with("SUBDATASET_") && key.ends_with("_NAME") {
            out.push(Subdataset {
                identifier: value.to_string(),
                description: String::new(),
            });
        } else if key.starts_with("SUBDATASET_") && key.ends_with("_DESC") {
            if let Some(last) = out.last_mut() {
                last.description = value.to_string();
            }
        }
    }
    out
}

impl RasterContainer for GdalRasterContainer {
    fn subdatasets(&self) -> Vec<Subdataset> {
        let entries = self
            .dataset
            .metadata_domain("SUBDATASETS")
            .unwrap_or_default();
        parse_subdataset_domain(&entries)
    }

    fn open_subdataset(&self, identifier: &str) -> Result<RasterMetadata, RasterReadError> {
        let dataset = Dataset::open(Path::new(identifier)).map_err(|e| RasterReadError {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })?;
        let (width, height) = dataset.raster_size();
        let bands = dataset.raster_count() as usize;
        let crs = dataset
            .spatial_ref()
            .map(authority_code)
            .unwrap_or_default();
        Ok(RasterMetadata { width, height, bands, crs })
    }
}
