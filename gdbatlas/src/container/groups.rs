//! Group hierarchy traversal.
//!
//! Produces `(component, layer)` pairs for every vector layer in the
//! container. When the driver exposes a group hierarchy the walk is an
//! explicit worklist-stack depth-first traversal, so deeply nested feature
//! datasets cannot exhaust the call stack. Without a hierarchy, the flat
//! layer list is used and `FD/Layer` names are split into their parts.

use tracing::debug;

use super::traits::{Group, LayerInfo, VectorContainer};
use crate::inventory::ROOT_COMPONENT;

/// Internal `GDB_*` system tables surfaced by `LIST_ALL_TABLES` are not
/// datasets and never appear in the inventory.
fn is_system_table(name: &str) -> bool {
    name.starts_with("GDB_")
}

/// Enumerate every vector layer with its owning component.
///
/// Component is the `/`-joined group path, or [`ROOT_COMPONENT`] for layers
/// directly under the root.
pub fn walk_layers(container: &dyn VectorContainer) -> Vec<(String, LayerInfo)> {
    match container.root_group() {
        Some(root) => walk_group_tree(root),
        None => flat_fallback(container.flat_layers()),
    }
}

/// Depth-first walk over the group tree using an explicit stack.
fn walk_group_tree(root: Box<dyn Group>) -> Vec<(String, LayerInfo)> {
    let mut out = Vec::new();
    let mut stack: Vec<(String, Box<dyn Group>)> = vec![(String::new(), root)];

    while let Some((path, group)) = stack.pop() {
        for name in group.group_names() {
            let child_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", path, name)
            };
            match group.open_group(&name) {
                Some(child) => stack.push((child_path, child)),
                None => debug!(group = %child_path, "child group could not be opened, skipping"),
            }
        }

        let component = if path.is_empty() {
            ROOT_COMPONENT.to_string()
        } else {
            path.clone()
        };
        for layer in group.layers() {
            out.push((component.clone(), layer));
        }
    }

    out
}

/// Flat enumeration fallback: split `FD/Layer` names, assign everything
/// else to the root component, and drop internal system tables.
fn flat_fallback(layers: Vec<LayerInfo>) -> Vec<(String, LayerInfo)> {
    let mut out = Vec::new();
    for mut layer in layers {
        if is_system_table(&layer.name) {
            continue;
        }
        let split = layer
            .name
            .split_once('/')
            .map(|(component, bare)| (component.to_string(), bare.to_string()));
        match split {
            Some((component, bare)) => {
                layer.name = bare;
                out.push((component, layer));
            }
            None => out.push((ROOT_COMPONENT.to_string(), layer)),
        }
    }
    out
}
