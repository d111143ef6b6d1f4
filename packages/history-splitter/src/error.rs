//! Error types for the history splitter.
//!
//! Every variant is fatal for the run: the splitter is a one-shot batch tool
//! and never retries or skips a failed section.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the history splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Input file is missing or cannot be read as UTF-8 text.
    #[error("Input file not found or unreadable: {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending a section to an archive file failed.
    #[error("Failed to append to {}: {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
