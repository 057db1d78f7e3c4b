//! Unified error types for the storefront.
//!
//! Every fallible operation in the crate returns [`Result`]. The web layer turns
//! these into HTTP responses; the core layer never panics on user input.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description of the problem
        message: String,
    },

    /// Filesystem or process I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure (export side)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The startup catalog could not be read
    #[error("Catalog load error: {message}")]
    CatalogLoad {
        /// Cause reported by the reader or parser
        message: String,
    },

    /// A required admin form field was blank
    #[error("Missing required field: {field}")]
    MissingField {
        /// Form field name
        field: &'static str,
    },

    /// A form field carried a value that could not be interpreted
    #[error("Invalid value '{value}' for field {field}")]
    InvalidField {
        /// Form field name
        field: &'static str,
        /// The rejected raw value
        value: String,
    },

    /// A filter criterion was neither the "all" sentinel nor a valid value
    #[error("Invalid {criterion} filter: '{value}'")]
    InvalidFilter {
        /// Which criterion (capacity, solar, stock)
        criterion: &'static str,
        /// The rejected raw value
        value: String,
    },

    /// The uploaded catalog document was malformed; the catalog was left untouched
    #[error("Error importing JSON file: {message}")]
    Import {
        /// Parser message
        message: String,
    },

    /// A multipart upload was unreadable or carried no file
    #[error("Upload error: {message}")]
    Upload {
        /// What was wrong with the upload
        message: String,
    },

    /// A custom message was blank
    #[error("Please enter a message or use a template.")]
    EmptyMessage,

    /// The OCR engine failed to recognize the image
    #[error("Error processing image: {message}")]
    Ocr {
        /// Engine failure description
        message: String,
    },

    /// An OCR recognition is already running
    #[error("An image is already being processed")]
    OcrBusy,

    /// The configured listen address is not a socket address
    #[error("Invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
