use conch_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors from the report pipeline.
///
/// Everything here is fatal to its operation: load errors return no partial
/// raw data, and a catalog failure aborts the whole aggregation run.
/// Per-device lookup failures are not represented — those are skipped inside
/// `process()` and surface only through `ProcessStats`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse raw report: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to fetch raw report: {0}")]
    Fetch(#[source] ClientError),

    #[error("failed to fetch hardware product catalog: {0}")]
    Catalog(#[source] ClientError),

    #[error("CSV rendering failed: {0}")]
    Csv(String),
}
