//! Inventory rendering: aligned text table, CSV and JSON.
//!
//! Column order follows the report convention: TipoDato, Tema, Componente,
//! Nombre, GeomType, CRS, Conteo, Ancho_px, Alto_px, Bandas. Absent numeric
//! fields render as empty cells in text/CSV and `null` in JSON.

use gdbatlas::{InventoryRow, InventoryTable};

const HEADERS: [&str; 10] = [
    "TipoDato", "Tema", "Componente", "Nombre", "GeomType", "CRS", "Conteo", "Ancho_px",
    "Alto_px", "Bandas",
];

fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn row_cells(row: &InventoryRow) -> [String; 10] {
    [
        row.kind.code().to_string(),
        row.theme.clone(),
        row.component.clone(),
        row.name.clone(),
        row.geom_type.clone(),
        row.crs.clone(),
        opt_cell(&row.feature_count),
        opt_cell(&row.width),
        opt_cell(&row.height),
        opt_cell(&row.bands),
    ]
}

/// Render the table as aligned plain text.
pub fn render_text(table: &InventoryTable) -> String {
    let rows: Vec<[String; 10]> = table.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_line = |cells: &[String]| -> String {
        let joined: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", joined.join("  ").trim_end())
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = render_line(&header);
    out.push_str(&render_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
    ));
    for row in &rows {
        out.push_str(&render_line(row));
    }
    out
}

/// Quote a CSV cell when it contains a delimiter, quote or newline.
fn csv_escape(cell: &str) -> String {
    if cell.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Render the table as CSV with a header line.
pub fn render_csv(table: &InventoryTable) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');
    for row in table {
        let cells: Vec<String> = row_cells(row).iter().map(|c| csv_escape(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Render the table as a pretty-printed JSON array of row objects.
pub fn render_json(table: &InventoryTable) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(table.rows())?;
    out.push('\n');
    Ok(out)
}
