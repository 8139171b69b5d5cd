//! Defensive field-name resolution for system tables.
//!
//! Geodatabase system-table schemas are not assumed fixed: fields are looked
//! up by name once per table, and a field that does not exist simply reads
//! as `None` on every row. Consumers route that through their own defaults
//! instead of scattering per-field presence checks through row loops.

use std::collections::HashMap;

use super::table::SystemTable;

/// Field-name → column-index map resolved once from a table's schema.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    indices: HashMap<String, usize>,
}

impl FieldMap {
    /// Resolve the schema of a materialized table.
    pub fn resolve(table: &SystemTable) -> Self {
        let indices = table
            .fields()
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        Self { indices }
    }

    /// Whether the schema contains a field with this name.
    pub fn has_field(&self, field: &str) -> bool {
        self.indices.contains_key(field)
    }

    /// Read a field from a row by name.
    ///
    /// `None` when the field is absent from the schema, the row is short,
    /// or the cell is null.
    pub fn get<'a>(&self, row: &'a [Option<String>], field: &str) -> Option<&'a str> {
        let index = *self.indices.get(field)?;
        row.get(index)?.as_deref()
    }
}
