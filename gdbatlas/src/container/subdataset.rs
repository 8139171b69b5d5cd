//! Raster subdataset identifier parsing.
//!
//! Subdataset identifiers are driver connection strings of the form
//! `DRIVER:"/path/to/container.gdb":layer`, where the trailing layer part is
//! either a bare raster name or `FeatureDataset/RasterName`. The embedded
//! component, when present, is the most direct grouping hint and takes
//! precedence over every other resolution source.

/// The layer part of a subdataset identifier, split into its grouping hint
/// and bare raster name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubdataset {
    /// Feature dataset encoded in the identifier, if any.
    pub component: Option<String>,
    /// Bare raster name.
    pub name: String,
}

/// Parse a subdataset identifier.
///
/// The layer part is whatever follows the last `":` delimiter (the quoted
/// container path may itself contain `:`), with leading slashes stripped.
///
/// # Example
///
/// ```
/// use gdbatlas::container::parse_identifier;
///
/// let parsed = parse_identifier("OpenFileGDB:\"/data/x.gdb\":Geology/Slope");
/// assert_eq!(parsed.component.as_deref(), Some("Geology"));
/// assert_eq!(parsed.name, "Slope");
/// ```
pub fn parse_identifier(identifier: &str) -> ParsedSubdataset {
    let raw = identifier
        .rsplit("\":")
        .next()
        .unwrap_or(identifier)
        .trim_start_matches('/');

    match raw.split_once('/') {
        Some((component, name)) => ParsedSubdataset {
            component: Some(component.to_string()),
            name: name.to_string(),
        },
        None => ParsedSubdataset {
            component: None,
            name: raw.to_string(),
        },
    }
}
