//! Inventory assembly.
//!
//! Each traversal phase produces its own immutable row vector; the assembler
//! concatenates them and applies the final ordering. No phase appends into a
//! shared accumulator, so each can be tested in isolation.
//!
//! Raster component resolution follows a strict precedence:
//!
//! 1. component embedded in the subdataset identifier (`FD/Name`),
//! 2. relationship map ([`super::build_child_to_parent_map`]),
//! 3. path map ([`super::build_path_map`]),
//! 4. [`ROOT_COMPONENT`].
//!
//! A seen-set of bare raster names guarantees that catalog recovery never
//! duplicates a raster already surfaced as a subdataset. Nothing else is
//! ever suppressed: once a row is emitted it reaches the final table.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::catalog::ItemCatalog;
use crate::container::{parse_identifier, LayerInfo, RasterContainer};
use crate::inventory::{InventoryRow, InventoryTable, ROOT_COMPONENT};

/// The two name → parent maps a raster falls back on, in precedence order.
#[derive(Debug, Clone, Copy)]
pub struct ResolverMaps<'a> {
    relationship: &'a HashMap<String, String>,
    path: &'a HashMap<String, String>,
}

impl<'a> ResolverMaps<'a> {
    pub fn new(relationship: &'a HashMap<String, String>, path: &'a HashMap<String, String>) -> Self {
        Self { relationship, path }
    }

    /// Resolve a raster's component: relationship map, then path map, then
    /// root.
    pub fn resolve(&self, name: &str) -> String {
        self.relationship
            .get(name)
            .or_else(|| self.path.get(name))
            .cloned()
            .unwrap_or_else(|| ROOT_COMPONENT.to_string())
    }
}

/// Phase 1: one row per enumerated vector layer.
///
/// `walked` pairs each layer with its component, as produced by
/// [`crate::container::walk_layers`].
pub fn vector_rows(theme: &str, walked: Vec<(String, LayerInfo)>) -> Vec<InventoryRow> {
    walked
        .into_iter()
        .map(|(component, layer)| {
            InventoryRow::vector(
                theme,
                component,
                layer.name,
                layer.geom_type,
                layer.crs,
                layer.feature_count,
            )
        })
        .collect()
}

/// Phase 2: one row per raster subdataset, with per-subdataset fault
/// isolation around the metadata read.
///
/// Returns the rows plus the set of bare raster names emitted, which gates
/// catalog recovery in [`catalog_recovery_rows`].
pub fn raster_rows(
    theme: &str,
    raster: Option<&dyn RasterContainer>,
    maps: &ResolverMaps<'_>,
) -> (Vec<InventoryRow>, HashSet<String>) {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    let Some(raster) = raster else {
        debug!("no raster handle, skipping subdataset enumeration");
        return (rows, seen);
    };

    for subdataset in raster.subdatasets() {
        let parsed = parse_identifier(&subdataset.identifier);
        if parsed.name.is_empty() {
            warn!(identifier = %subdataset.identifier, "subdataset without a name, skipping");
            continue;
        }

        let component = match parsed.component {
            Some(component) => component,
            None => maps.resolve(&parsed.name),
        };

        let row = match raster.open_subdataset(&subdataset.identifier) {
            Ok(metadata) => InventoryRow::raster(
                theme,
                component,
                parsed.name.clone(),
                metadata.crs,
                Some(metadata.width),
                Some(metadata.height),
                Some(metadata.bands),
            ),
            Err(e) => {
                // One unreadable raster must not abort the others.
                warn!(error = %e, "raster metadata unavailable");
                InventoryRow::raster(theme, component, parsed.name.clone(), "", None, None, None)
            }
        };

        rows.push(row);
        seen.insert(parsed.name);
    }

    (rows, seen)
}

/// Phase 3: recover rasters the subdataset API never surfaced.
///
/// Every `RasterDataset`/`MosaicDataset` catalog item whose name is not in
/// the seen-set yields a minimal row (no size, no CRS). Recovered names join
/// the seen-set so duplicate catalog entries cannot double-emit either.
pub fn catalog_recovery_rows(
    theme: &str,
    items: &ItemCatalog,
    seen: &mut HashSet<String>,
    maps: &ResolverMaps<'_>,
) -> Vec<InventoryRow> {
    let mut rows = Vec::new();

    for item in items.iter() {
        if !item.is_raster() || item.name.is_empty() || seen.contains(&item.name) {
            continue;
        }
        let component = maps.resolve(&item.name);
        rows.push(InventoryRow::raster(theme, component, item.name.clone(), "", None, None, None));
        seen.insert(item.name.clone());
    }

    if !rows.is_empty() {
        debug!(recovered = rows.len(), "rasters recovered from catalog only");
    }
    rows
}

/// Final step: concatenate the phase outputs and apply the table ordering.
pub fn assemble(
    vector_rows: Vec<InventoryRow>,
    raster_rows: Vec<InventoryRow>,
    recovered_rows: Vec<InventoryRow>,
) -> InventoryTable {
    let mut rows = vector_rows;
    rows.extend(raster_rows);
    rows.extend(recovered_rows);
    InventoryTable::from_rows(rows)
}
