//! All error types for the transfmt crate.
//!
//! Only configuration and I/O failures are errors. Malformed lines and
//! conflicting translations are reported as [`Diagnostic`](crate::types::Diagnostic)s
//! and never abort a run.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input directory '{}' does not exist", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("cannot create output directory '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown eol style '{0}', known: unix|win|mac")]
    UnknownEolStyle(String),

    #[error("invalid wildcard pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path of the file it happened on.
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors detected while validating the configuration,
    /// before any file was touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InputDirNotFound(_)
                | Error::OutputDir { .. }
                | Error::UnknownEolStyle(_)
                | Error::Pattern { .. }
        )
    }
}
