//! Unified infrastructure error types.
//!
//! Wraps every failure that can come back from the filesystem or the
//! plotting backend. None of these abort a session: the console reports
//! them and moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Unified infrastructure error for all external system failures.
#[derive(Debug, Error)]
pub enum InfraError {
    /// A file could not be created, written, or read.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed to draw or encode the chart.
    #[error("Histogram rendering failed: {0}")]
    Plot(String),

    /// An optional capability is not available in this build or runtime.
    #[error("Optional capability unavailable: {0}")]
    MissingCapability(String),

    /// An exported roll file did not have the expected shape.
    #[error("Malformed export at line {line}: {reason}")]
    MalformedExport { line: usize, reason: String },
}

impl InfraError {
    /// Create an I/O error tagged with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedExport {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
