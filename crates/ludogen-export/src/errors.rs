use thiserror::Error;

/// Errors emitted by the file-export adapter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Records must serialize to flat JSON objects to become table rows.
    #[error("record in table '{0}' did not serialize to an object")]
    NotTabular(String),
}
