//! GdbAtlas CLI - inventory an Esri File Geodatabase.
//!
//! Opens the geodatabase read-only, resolves the feature-dataset ownership
//! of every vector layer and raster dataset, and renders the inventory as a
//! text table, CSV or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

mod error;
mod output;

use error::CliError;

/// Inventory the logical structure of an Esri File Geodatabase.
#[derive(Debug, Parser)]
#[command(name = "gdbatlas", version, about)]
struct Cli {
    /// Path to the .gdb directory to inventory
    gdb: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the inventory to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Enable verbose logging (RUST_LOG overrides this)
    #[arg(long, short)]
    verbose: bool,
}

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Comma-separated values with a header line
    Csv,
    /// JSON array of row objects
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gdbatlas=debug" } else { "gdbatlas=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let table = gdbatlas::scan(&cli.gdb)?;

    let rendered = match cli.format {
        OutputFormat::Table => output::render_text(&table),
        OutputFormat::Csv => output::render_csv(&table),
        OutputFormat::Json => output::render_json(&table)?,
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .map_err(|e| CliError::Output(path.display().to_string(), e))?;
            tracing::info!(file = %path.display(), "inventory written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["gdbatlas", "/data/x.gdb"]);
        assert_eq!(cli.gdb, PathBuf::from("/data/x.gdb"));
        assert!(matches!(cli.format, OutputFormat::Table));
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_format_and_output() {
        let cli = Cli::parse_from(["gdbatlas", "x.gdb", "--format", "csv", "-o", "report.csv"]);
        assert!(matches!(cli.format, OutputFormat::Csv));
        assert_eq!(cli.output, Some(PathBuf::from("report.csv")));
    }
}
