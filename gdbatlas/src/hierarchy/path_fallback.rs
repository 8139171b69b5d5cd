//! Path-derived ownership fallback.
//!
//! When a raster is not covered by the relationship catalog, its stored
//! catalog path still hints at ownership: the first segment of
//! `FeatureDataset/Name` is the owning group. A pure function of the
//! catalog snapshot; no I/O.

use std::collections::HashMap;

use crate::catalog::ItemCatalog;
use crate::inventory::ROOT_COMPONENT;

/// Build the item-name → first-path-segment map.
///
/// Paths are trimmed of leading/trailing slashes first. A path without a
/// separator (including the empty path) maps to [`ROOT_COMPONENT`]: a bare
/// single-segment path is the item's own name, not a parent.
pub fn build_path_map(items: &ItemCatalog) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for item in items.iter() {
        if item.name.is_empty() {
            continue;
        }
        let path = item.path.trim_matches('/');
        let component = match path.split_once('/') {
            Some((first, _)) => first.to_string(),
            None => ROOT_COMPONENT.to_string(),
        };
        map.insert(item.name.clone(), component);
    }
    map
}
