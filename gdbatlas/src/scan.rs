//! Full-container scan orchestration.
//!
//! One scan is one independent run: open the container (vector mode, then
//! optionally raster mode), load the system catalog, build the ownership
//! maps, run the three traversal phases and assemble the table. Both handles
//! live in the scope of [`scan`] and are released when it returns, on every
//! path.

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{load_items, load_relationship_type_id, DATASET_IN_FEATURE_DATASET};
use crate::container::{
    walk_layers, GdalRasterContainer, GdalVectorContainer, OpenError, RasterContainer,
    VectorContainer,
};
use crate::hierarchy::{
    assemble, build_child_to_parent_map, build_path_map, catalog_recovery_rows, raster_rows,
    vector_rows, ResolverMaps,
};
use crate::inventory::InventoryTable;

/// Theme (container name) shown in every row: the directory basename, with
/// trailing separators ignored.
pub fn theme_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Inventory a geodatabase on disk.
///
/// The only fatal failure is the vector-mode open; everything else degrades
/// per channel or per item.
pub fn scan(path: &Path) -> Result<InventoryTable, OpenError> {
    let theme = theme_from_path(path);
    info!(container = %path.display(), "scanning container");

    let vector = GdalVectorContainer::open(path)?;
    let raster = GdalRasterContainer::open(path);

    let table = scan_container(
        &theme,
        &vector,
        raster.as_ref().map(|r| r as &dyn RasterContainer),
    );
    info!(rows = table.len(), "inventory assembled");
    Ok(table)
}

/// Run the scan pipeline over already-opened containers.
///
/// This is the whole algorithm; [`scan`] only adds the GDAL opens around it.
pub fn scan_container(
    theme: &str,
    vector: &dyn VectorContainer,
    raster: Option<&dyn RasterContainer>,
) -> InventoryTable {
    let walked = walk_layers(vector);
    debug!(layers = walked.len(), "vector layers enumerated");
    let vectors = vector_rows(theme, walked);

    let items = load_items(vector);
    let relationship_type_id = load_relationship_type_id(vector, DATASET_IN_FEATURE_DATASET);
    let relationship_map =
        build_child_to_parent_map(vector, relationship_type_id.as_deref(), &items);
    let path_map = build_path_map(&items);
    let maps = ResolverMaps::new(&relationship_map, &path_map);

    let (rasters, mut seen) = raster_rows(theme, raster, &maps);
    let recovered = catalog_recovery_rows(theme, &items, &mut seen, &maps);

    assemble(vectors, rasters, recovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SystemTable;
    use crate::container::mock::{MockGroup, MockRasterContainer, MockVectorContainer};
    use crate::container::{LayerInfo, RasterMetadata};
    use crate::inventory::{DataKind, ROOT_COMPONENT};

    fn items_table(rows: &[(&str, &str, &str, &str)]) -> SystemTable {
        let mut table = SystemTable::new(
            ["UUID", "Name", "Type", "Path"].iter().map(|s| s.to_string()).collect(),
        );
        for (id, name, item_type, path) in rows {
            table.push_row(vec![
                Some(id.to_string()),
                Some(name.to_string()),
                Some(item_type.to_string()),
                Some(path.to_string()),
            ]);
        }
        table
    }

    fn relationship_types_table() -> SystemTable {
        let mut table = SystemTable::new(vec!["UUID".to_string(), "Name".to_string()]);
        table.push_row(vec![
            Some("{difd}".to_string()),
            Some(DATASET_IN_FEATURE_DATASET.to_string()),
        ]);
        table
    }

    fn relationships_table(rows: &[(&str, &str)]) -> SystemTable {
        let mut table = SystemTable::new(
            ["OriginID", "DestID", "RelationshipType"].iter().map(|s| s.to_string()).collect(),
        );
        for (origin, dest) in rows {
            table.push_row(vec![
                Some(origin.to_string()),
                Some(dest.to_string()),
                Some("{difd}".to_string()),
            ]);
        }
        table
    }

    /// The reference scenario: feature dataset "Geology" with vector layer
    /// "Faults" and related raster "Slope".
    fn geology_container() -> (MockVectorContainer, MockRasterContainer) {
        let faults = LayerInfo {
            name: "Faults".to_string(),
            geom_type: "Polygon".to_string(),
            crs: "EPSG:4326".to_string(),
            feature_count: Some(120),
        };
        let root = MockGroup::new().with_group("Geology", MockGroup::new().with_layer(faults));

        let vector = MockVectorContainer::new()
            .with_root(root)
            .with_table(
                "GDB_Items",
                items_table(&[
                    ("{fd}", "Geology", "FeatureDataset", "/Geology"),
                    ("{slope}", "Slope", "RasterDataset", ""),
                ]),
            )
            .with_table("GDB_ItemRelationshipTypes", relationship_types_table())
            .with_table("GDB_ItemRelationships", relationships_table(&[("{fd}", "{slope}")]));

        let raster = MockRasterContainer::new()
            .with_subdataset("OpenFileGDB:\"/data/t.gdb\":Slope")
            .with_metadata(
                "OpenFileGDB:\"/data/t.gdb\":Slope",
                RasterMetadata { width: 500, height: 400, bands: 1, crs: "EPSG:4326".to_string() },
            );

        (vector, raster)
    }

    #[test]
    fn test_theme_from_path_takes_basename() {
        assert_eq!(theme_from_path(Path::new("/data/Susceptibilidad.gdb")), "Susceptibilidad.gdb");
        assert_eq!(theme_from_path(Path::new("/data/Susceptibilidad.gdb/")), "Susceptibilidad.gdb");
    }

    #[test]
    fn test_geology_scenario() {
        let (vector, raster) = geology_container();
        let table = scan_container("t.gdb", &vector, Some(&raster));

        assert_eq!(table.len(), 2);
        let faults = &table.rows()[0];
        let slope = &table.rows()[1];

        assert_eq!(faults.name, "Faults");
        assert_eq!(faults.component, "Geology");
        assert_eq!(faults.kind, DataKind::Vector);
        assert_eq!(faults.feature_count, Some(120));

        assert_eq!(slope.name, "Slope");
        assert_eq!(slope.component, "Geology");
        assert_eq!(slope.kind, DataKind::Raster);
        assert_eq!(slope.width, Some(500));
        assert_eq!(slope.height, Some(400));
        assert_eq!(slope.bands, Some(1));
        assert_eq!(slope.crs, "EPSG:4326");
    }

    #[test]
    fn test_orphan_dem_scenario() {
        let vector = MockVectorContainer::new().with_table(
            "GDB_Items",
            items_table(&[("{1}", "OrphanDEM", "RasterDataset", "")]),
        );
        let table = scan_container("t.gdb", &vector, None);

        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.name, "OrphanDEM");
        assert_eq!(row.component, ROOT_COMPONENT);
        assert_eq!(row.width, None);
        assert_eq!(row.height, None);
        assert_eq!(row.bands, None);
    }

    #[test]
    fn test_no_duplicate_raster_between_subdatasets_and_catalog() {
        let (vector, raster) = geology_container();
        let table = scan_container("t.gdb", &vector, Some(&raster));

        let slope_rows = table.iter().filter(|r| r.name == "Slope").count();
        assert_eq!(slope_rows, 1);
    }

    #[test]
    fn test_relationship_parent_beats_path_parent() {
        let vector = MockVectorContainer::new()
            .with_table(
                "GDB_Items",
                items_table(&[
                    ("{fd}", "Geology", "FeatureDataset", "/Geology"),
                    ("{dem}", "dem", "RasterDataset", "/WrongFD/dem"),
                ]),
            )
            .with_table("GDB_ItemRelationshipTypes", relationship_types_table())
            .with_table("GDB_ItemRelationships", relationships_table(&[("{fd}", "{dem}")]));
        let raster = MockRasterContainer::new().with_subdataset("OpenFileGDB:\"/x.gdb\":dem");

        let table = scan_container("t.gdb", &vector, Some(&raster));
        assert_eq!(table.rows()[0].component, "Geology");
    }

    #[test]
    fn test_missing_relationship_type_degrades_to_path_fallback() {
        let vector = MockVectorContainer::new().with_table(
            "GDB_Items",
            items_table(&[
                ("{fd}", "Hydro", "FeatureDataset", "/Hydro"),
                ("{dem}", "Depth", "RasterDataset", "/Hydro/Depth"),
            ]),
        );
        let raster = MockRasterContainer::new().with_subdataset("OpenFileGDB:\"/x.gdb\":Depth");

        let table = scan_container("t.gdb", &vector, Some(&raster));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].component, "Hydro");
    }

    #[test]
    fn test_scan_is_deterministic() {
        let (vector, raster) = geology_container();
        let a = scan_container("t.gdb", &vector, Some(&raster));
        let b = scan_container("t.gdb", &vector, Some(&raster));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_container_yields_empty_table() {
        let vector = MockVectorContainer::new();
        let table = scan_container("t.gdb", &vector, None);
        assert!(table.is_empty());
    }
}
