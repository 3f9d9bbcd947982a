/// This module provides the `Normalizer`, which applies the line normalization
/// to every selected file of a directory and either writes the results
/// (`Mode::Apply`) or only reports which files would change (`Mode::Check`).
///
/// Files are independent of each other, so they are processed in parallel.
/// Outcomes are collected in file name order, so the report and the order of
/// diagnostics do not depend on scheduling.
///
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::Error,
    file::TranslationFile,
    format::{normalize_lines, requires_formatting},
    select::FileSelector,
    traits::LineCodec,
    types::Diagnostic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Write normalized files.
    Apply,
    /// Write nothing, only report.
    Check,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub requires_formatting: bool,
    pub written: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a run, one entry per selected file in file name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub mode: Mode,
    pub files: Vec<FileReport>,
}

impl Report {
    /// Number of files whose content differs from the normalized form.
    pub fn requiring_formatting(&self) -> usize {
        self.files.iter().filter(|f| f.requires_formatting).count()
    }

    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }

    /// All diagnostics, grouped by file.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|f| f.diagnostics.iter())
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the normalization over a directory.
pub struct Normalizer {
    config: Config,
    selector: FileSelector,
}

impl Normalizer {
    /// Validates the configuration and compiles the file patterns.
    ///
    /// # Returns
    ///
    /// An `Error` if the input directory is missing, the output directory
    /// cannot be created or a pattern is invalid.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let selector = FileSelector::new(&config.includes, &config.excludes)?;
        Ok(Normalizer { config, selector })
    }

    /// Processes every selected file.
    ///
    /// # Returns
    ///
    /// The per-file `Report`, or the first I/O `Error` encountered.
    pub fn run(&self, mode: Mode) -> Result<Report, Error> {
        let paths = self.selector.select(&self.config.dir)?;
        let files = paths
            .par_iter()
            .map(|path| self.process_file(path, mode))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Report { mode, files })
    }

    fn process_file(&self, path: &Path, mode: Mode) -> Result<FileReport, Error> {
        debug!(file = %path.display(), "processing");
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let source = TranslationFile::read_from(path)?;
        let normalized = normalize_lines(&name, &source.lines);
        let conforming_eol = source.conforms_to(self.config.eol);
        if !conforming_eol {
            debug!(
                file = %path.display(),
                found = ?source.seen_terminators(),
                expected = %self.config.eol,
                "line terminators differ"
            );
        }
        let formatting_required =
            requires_formatting(&source.lines, &normalized.lines) || !conforming_eol;

        if formatting_required {
            match mode {
                Mode::Check => warn!(file = %path.display(), "requires proper formatting"),
                Mode::Apply => debug!(file = %path.display(), "formatted"),
            }
        }

        let written =
            mode == Mode::Apply && (formatting_required || self.config.write_if_unchanged);
        if written {
            let output = TranslationFile::new(normalized.lines, self.config.eol);
            output.write_to(self.config.output_dir.join(&name))?;
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            requires_formatting: formatting_required,
            written,
            diagnostics: normalized.diagnostics,
        })
    }
}

/// Convenience wrapper: builds a [`Normalizer`] and runs it once.
pub fn normalize_dir(config: Config, mode: Mode) -> Result<Report, Error> {
    Normalizer::new(config)?.run(mode)
}
