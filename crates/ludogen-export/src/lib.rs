//! File-side persistence adapter: aligned table export plus an append-only
//! audit log. The generator core hands this crate finished in-memory tables
//! and never performs I/O itself.

pub mod audit;
pub mod errors;
pub mod table;

use std::path::Path;

use tracing::{info, warn};

use ludogen_core::Dataset;
use ludogen_generate::GenerationReport;

pub use audit::append_audit_event;
pub use errors::ExportError;
pub use table::write_pretty_table;

/// Summary of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub tables_written: usize,
    pub tables_skipped: usize,
    pub bytes_written: u64,
}

/// Write every dataset table to `output_dir` and append one audit record.
///
/// The directory is cleared first; a table with zero records is skipped with
/// a warning rather than failing the export.
pub fn export_dataset(
    output_dir: &Path,
    dataset: &Dataset,
    report: &GenerationReport,
) -> Result<ExportReport, ExportError> {
    if output_dir.exists() {
        std::fs::remove_dir_all(output_dir)?;
    }
    std::fs::create_dir_all(output_dir)?;

    let mut export = ExportReport::default();
    write_one(output_dir, "platforms", &dataset.platforms, &mut export)?;
    write_one(output_dir, "genres", &dataset.genres, &mut export)?;
    write_one(output_dir, "contributors", &dataset.contributors, &mut export)?;
    write_one(output_dir, "videogames", &dataset.videogames, &mut export)?;
    write_one(
        output_dir,
        "platform_releases",
        &dataset.platform_releases,
        &mut export,
    )?;
    write_one(output_dir, "users", &dataset.users, &mut export)?;
    write_one(output_dir, "owned", &dataset.owned, &mut export)?;
    write_one(output_dir, "plays", &dataset.plays, &mut export)?;
    write_one(output_dir, "ratings", &dataset.ratings, &mut export)?;
    write_one(output_dir, "access_times", &dataset.access_times, &mut export)?;
    write_one(output_dir, "follows", &dataset.follows, &mut export)?;
    write_one(output_dir, "collections", &dataset.collections, &mut export)?;

    append_audit_event(output_dir, "GENERATE", &report.summary())?;

    info!(
        dir = %output_dir.display(),
        tables = export.tables_written,
        skipped = export.tables_skipped,
        bytes = export.bytes_written,
        "dataset exported"
    );
    Ok(export)
}

fn write_one<T: serde::Serialize>(
    output_dir: &Path,
    name: &str,
    rows: &[T],
    export: &mut ExportReport,
) -> Result<(), ExportError> {
    if rows.is_empty() {
        warn!(table = name, "no records, skipping table export");
        export.tables_skipped += 1;
        return Ok(());
    }
    let path = output_dir.join(format!("{name}.csv"));
    export.bytes_written += write_pretty_table(&path, rows)?;
    export.tables_written += 1;
    Ok(())
}
