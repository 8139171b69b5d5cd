//! Inventory row and table types.
//!
//! The inventory is a flat, sortable table with one row per vector layer or
//! raster dataset found in a geodatabase. Column names follow the reporting
//! convention of the audit spreadsheets this tool feeds (`TipoDato`, `Tema`,
//! `Componente`, ...), exposed through serde renames so serialized output
//! matches the spreadsheet headers exactly.

use std::fmt;

use serde::Serialize;

/// Component name assigned to datasets that live directly at the
/// geodatabase root, outside any feature dataset.
pub const ROOT_COMPONENT: &str = "[root]";

/// Kind of dataset an inventory row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataKind {
    /// A vector layer (feature class).
    #[serde(rename = "V")]
    Vector,
    /// A raster or mosaic dataset.
    #[serde(rename = "R")]
    Raster,
}

impl DataKind {
    /// Single-letter code used in rendered output.
    pub fn code(&self) -> &'static str {
        match self {
            DataKind::Vector => "V",
            DataKind::Raster => "R",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One dataset in the final inventory.
///
/// `component` is the owning feature dataset, or [`ROOT_COMPONENT`] when the
/// dataset sits at the geodatabase root. `feature_count` is populated for
/// vector rows only; `width`/`height`/`bands` for raster rows whose metadata
/// could be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    /// Dataset kind: vector or raster.
    #[serde(rename = "TipoDato")]
    pub kind: DataKind,

    /// Geodatabase name (directory basename).
    #[serde(rename = "Tema")]
    pub theme: String,

    /// Owning feature dataset, or `"[root]"`.
    #[serde(rename = "Componente")]
    pub component: String,

    /// Dataset name.
    #[serde(rename = "Nombre")]
    pub name: String,

    /// Geometry type name for vectors, `"Raster"` for rasters.
    #[serde(rename = "GeomType")]
    pub geom_type: String,

    /// Spatial reference as `authority:code`, or empty if unresolvable.
    #[serde(rename = "CRS")]
    pub crs: String,

    /// Feature count (vector rows only).
    #[serde(rename = "Conteo")]
    pub feature_count: Option<u64>,

    /// Raster width in pixels, absent when metadata could not be read.
    #[serde(rename = "Ancho_px")]
    pub width: Option<usize>,

    /// Raster height in pixels, absent when metadata could not be read.
    #[serde(rename = "Alto_px")]
    pub height: Option<usize>,

    /// Raster band count, absent when metadata could not be read.
    #[serde(rename = "Bandas")]
    pub bands: Option<usize>,
}

impl InventoryRow {
    /// Create a vector-layer row.
    pub fn vector(
        theme: impl Into<String>,
        component: impl Into<String>,
        name: impl Into<String>,
        geom_type: impl Into<String>,
        crs: impl Into<String>,
        feature_count: Option<u64>,
    ) -> Self {
        Self {
            kind: DataKind::Vector,
            theme: theme.into(),
            component: component.into(),
            name: name.into(),
            geom_type: geom_type.into(),
            crs: crs.into(),
            feature_count,
            width: None,
            height: None,
            bands: None,
        }
    }

    /// Create a raster row with whatever metadata could be read.
    pub fn raster(
        theme: impl Into<String>,
        component: impl Into<String>,
        name: impl Into<String>,
        crs: impl Into<String>,
        width: Option<usize>,
        height: Option<usize>,
        bands: Option<usize>,
    ) -> Self {
        Self {
            kind: DataKind::Raster,
            theme: theme.into(),
            component: component.into(),
            name: name.into(),
            geom_type: "Raster".to_string(),
            crs: crs.into(),
            feature_count: None,
            width,
            height,
            bands,
        }
    }

    /// Sort key for the final table ordering.
    pub fn sort_key(&self) -> (&str, &str) {
        (self.component.as_str(), self.name.as_str())
    }
}

/// The assembled inventory: rows in final display order.
///
/// Construction through [`InventoryTable::from_rows`] applies the table's
/// ordering contract: a stable sort by (component, name), so rows that
/// compare equal keep their first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryTable {
    rows: Vec<InventoryRow>,
}

impl InventoryTable {
    /// Build a table from unordered rows, applying the stable sort.
    pub fn from_rows(mut rows: Vec<InventoryRow>) -> Self {
        rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { rows }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, InventoryRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a InventoryTable {
    type Item = &'a InventoryRow;
    type IntoIter = std::slice::Iter<'a, InventoryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
