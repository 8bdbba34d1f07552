//! Error types for the fieldmatch-core library.

use thiserror::Error;

/// Boxed error produced by a page-feed collaborator.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the fieldmatch library.
#[derive(Error, Debug)]
pub enum FieldMatchError {
    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed page-feed dump.
    #[error("invalid document dump: {0}")]
    Dump(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The page feed failed; nothing is extracted for the document.
    #[error("failed to read page {page} of {document}")]
    DocumentRead {
        document: String,
        page: u32,
        #[source]
        source: SourceError,
    },
}

/// Errors related to configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for the fieldmatch library.
pub type Result<T> = std::result::Result<T, FieldMatchError>;
