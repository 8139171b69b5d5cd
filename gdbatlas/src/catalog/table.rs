//! Materialized system-table snapshots.

/// A fully materialized system catalog query result.
///
/// Rows are stored column-positionally; every cell is `Option<String>` so
/// null fields survive materialization. Field resolution by name is the job
/// of [`super::FieldMap`], built once per table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemTable {
    fields: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl SystemTable {
    /// Create an empty table with the given field names.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields, rows: Vec::new() }
    }

    /// Append one row. Short rows are allowed; missing cells read as `None`.
    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Field names in schema order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Rows in query order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
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
}
