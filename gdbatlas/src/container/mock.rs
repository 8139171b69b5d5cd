//! In-memory container fixtures for tests.

use std::collections::HashMap;

use super::traits::{
    Group, LayerInfo, RasterContainer, RasterMetadata, RasterReadError, Subdataset, VectorContainer,
};
use crate::catalog::SystemTable;

/// Owned group-tree node implementing [`Group`].
#[derive(Debug, Clone, Default)]
pub struct MockGroup {
    groups: Vec<(String, MockGroup)>,
    layers: Vec<LayerInfo>,
}

impl MockGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: impl Into<String>, group: MockGroup) -> Self {
        self.groups.push((name.into(), group));
        self
    }

    pub fn with_layer(mut self, layer: LayerInfo) -> Self {
        self.layers.push(layer);
        self
    }
}

impl Group for MockGroup {
    fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open_group(&self, name: &str) -> Option<Box<dyn Group>> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, group)| Box::new(group.clone()) as Box<dyn Group>)
    }

    fn layers(&self) -> Vec<LayerInfo> {
        self.layers.clone()
    }
}

/// Vector-mode container fixture: optional group tree, flat layer list and
/// named system tables.
#[derive(Debug, Clone, Default)]
pub struct MockVectorContainer {
    root: Option<MockGroup>,
    flat: Vec<LayerInfo>,
    tables: HashMap<String, SystemTable>,
}

impl MockVectorContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: MockGroup) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_flat_layers(mut self, layers: Vec<LayerInfo>) -> Self {
        self.flat = layers;
        self
    }

    pub fn with_table(mut self, name: impl Into<String>, table: SystemTable) -> Self {
        self.tables.insert(name.into(), table);
        self
    }
}

impl VectorContainer for MockVectorContainer {
    fn root_group(&self) -> Option<Box<dyn Group>> {
        self.root
            .as_ref()
            .map(|root| Box::new(root.clone()) as Box<dyn Group>)
    }

    fn flat_layers(&self) -> Vec<LayerInfo> {
        self.flat.clone()
    }

    fn read_system_table(&self, name: &str) -> Option<SystemTable> {
        self.tables.get(name).cloned()
    }
}

/// Raster-mode container fixture: subdataset listing plus per-identifier
/// metadata. Identifiers without metadata fail to open, which is how tests
/// exercise per-subdataset fault isolation.
#[derive(Debug, Clone, Default)]
pub struct MockRasterContainer {
    subdatasets: Vec<Subdataset>,
    metadata: HashMap<String, RasterMetadata>,
}

impl MockRasterContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subdataset(mut self, identifier: impl Into<String>) -> Self {
        self.subdatasets.push(Subdataset {
            identifier: identifier.into(),
            description: String::new(),
        });
        self
    }

    pub fn with_metadata(mut self, identifier: impl Into<String>, metadata: RasterMetadata) -> Self {
        self.metadata.insert(identifier.into(), metadata);
        self
    }
}

impl RasterContainer for MockRasterContainer {
    fn subdatasets(&self) -> Vec<Subdataset> {
        self.subdatasets.clone()
    }

    fn open_subdataset(&self, identifier: &str) -> Result<RasterMetadata, RasterReadError> {
        self.metadata
            .get(identifier)
            .cloned()
            .ok_or_else(|| RasterReadError {
                identifier: identifier.to_string(),
                reason: "no metadata registered".to_string(),
            })
    }
}
