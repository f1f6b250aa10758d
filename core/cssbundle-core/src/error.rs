//! Error types for cssbundle-core

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a bundle build.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The entry stylesheet contains no recognised `@import` directive.
    #[error("no @import statements found in {}", .entry.display())]
    NoImports { entry: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    /// True for filesystem failures (read or write), false for an empty entry.
    pub fn is_io(&self) -> bool {
        matches!(self, BundleError::Read { .. } | BundleError::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
