//! Selection of input files by include/exclude wildcard patterns.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::Error;

/// Matches file names against include and exclude patterns.
#[derive(Debug, Clone)]
pub struct FileSelector {
    includes: Option<GlobSet>,
    excludes: GlobSet,
}

impl FileSelector {
    /// Without includes every file name is included. Excludes always win.
    pub fn new(includes: &[String], excludes: &[String]) -> Result<Self, Error> {
        let includes = if includes.is_empty() {
            None
        } else {
            Some(build_set(includes)?)
        };
        Ok(FileSelector {
            includes,
            excludes: build_set(excludes)?,
        })
    }

    pub fn is_selected(&self, file_name: &str) -> bool {
        let included = self
            .includes
            .as_ref()
            .is_none_or(|set| set.is_match(file_name));
        included && !self.excludes.is_match(file_name)
    }

    /// Regular files directly inside `dir` whose names are selected, sorted by
    /// name.
    pub fn select(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut selected = Vec::new();
        for dent in std::fs::read_dir(dir).map_err(|e| Error::file(dir, e))? {
            let dent = dent.map_err(|e| Error::file(dir, e))?;
            let path = dent.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if self.is_selected(name) {
                selected.push(path);
            }
        }
        selected.sort();
        Ok(selected)
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet, Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| Error::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}
