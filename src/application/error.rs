use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown agent: {0} (expected 'a' or 'b')")]
    UnknownAgent(String),

    #[error("Unknown side: {0} (expected 'asset' or 'liability')")]
    UnknownSide(String),

    #[error("Invalid entry index: {0}")]
    InvalidIndex(String),

    #[error("Unsupported format '{format}' for {target}")]
    UnsupportedFormat { format: String, target: String },

    #[error("Unknown export type: {0} (expected entries, report or snapshot)")]
    UnknownExportType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
