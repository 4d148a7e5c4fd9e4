//! Diagram export errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a diagram.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created
    #[error("Failed to create diagram file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the diagram text failed
    #[error("Failed to write diagram: {0}")]
    Write(#[from] std::io::Error),
}
