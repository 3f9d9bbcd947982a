use std::path::{Path, PathBuf};

use crate::{eol::EolStyle, error::Error};

/// Everything a run needs to know, fixed before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    /// Defaults to [`dir`](Self::dir), in which case files are rewritten in place.
    pub output_dir: PathBuf,
    /// Wildcard patterns on file names. Empty means all regular files.
    pub includes: Vec<String>,
    /// Wildcard patterns on file names; they win over `includes`.
    pub excludes: Vec<String>,
    /// Write output files even when their content would not change.
    pub write_if_unchanged: bool,
    pub eol: EolStyle,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            output_dir: dir.clone(),
            dir,
            includes: Vec::new(),
            excludes: Vec::new(),
            write_if_unchanged: false,
            eol: EolStyle::native(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.includes.push(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    pub fn with_write_if_unchanged(mut self, write_if_unchanged: bool) -> Self {
        self.write_if_unchanged = write_if_unchanged;
        self
    }

    pub fn with_eol(mut self, eol: EolStyle) -> Self {
        self.eol = eol;
        self
    }

    /// Checks that the input directory exists and creates the output
    /// directory if needed.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.dir.is_dir() {
            return Err(Error::InputDirNotFound(self.dir.clone()));
        }
        ensure_dir(&self.output_dir)
    }
}

fn ensure_dir(path: &Path) -> Result<(), Error> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| Error::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}
