use std::fs::OpenOptions;
use std::path::Path;

use chrono::Utc;

use crate::errors::ExportError;

const AUDIT_FILE: &str = "audit_log.csv";
const AUDIT_HEADER: [&str; 3] = ["timestamp", "event", "details"];

/// Append one audit record (`timestamp,event,details`) to the run's audit
/// log, writing the header when the file is first created. Details carry
/// aggregate counts only, never PII.
pub fn append_audit_event(output_dir: &Path, event: &str, details: &str) -> Result<(), ExportError> {
    let path = output_dir.join(AUDIT_FILE);
    let fresh = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if fresh {
        writer.write_record(AUDIT_HEADER)?;
    }
    writer.write_record([Utc::now().to_rfc3339().as_str(), event, details])?;
    writer.flush()?;
    Ok(())
}
