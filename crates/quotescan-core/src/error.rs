use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("text content cannot be empty")]
    EmptyText,

    #[error("could not extract text from document")]
    NoTextExtracted,

    #[error("invalid processing options: {0}")]
    InvalidOptions(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("unsupported input file: {0}. Expected a .pdf or .txt file")]
    UnsupportedInput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
