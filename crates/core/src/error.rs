//! Error types for bench-plot-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for bench-plot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read report: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed benchmark report: {0}")]
    Parse(String),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Benchmark case '{0}' produced an empty group")]
    EmptyGroup(String),

    #[error("Sink rejected point '{label}': {message}")]
    Render { label: String, message: String },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl Error {
    /// Build a render error for a sink failure on the given label.
    pub fn render(label: impl Into<String>, message: impl ToString) -> Self {
        Error::Render {
            label: label.into(),
            message: message.to_string(),
        }
    }
}
