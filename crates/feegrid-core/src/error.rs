#[derive(Debug, thiserror::Error)]
pub enum FeegridError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no extractable text content")]
    NoTextContent,

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("unsupported file extension '{0}'. Expected .pdf, .xls, .xlsx or .csv")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
