#![forbid(unsafe_code)]
//! Normalizer for line-oriented key/value translation files.
//!
//! Translators edit files such as `Resources_de.properties` by hand, which
//! leaves them unsorted, with duplicate keys and with several competing
//! translations for the same key. `transfmt` rewrites them deterministically:
//!
//! - comments, blank lines and lines without a key are dropped,
//! - entries are sorted by key, ignoring case,
//! - exact duplicates collapse to one line,
//! - among conflicting translations of a key the best one survives
//!   (`[translate me]` < `[auto]` < manual translation),
//! - every line is terminated with the configured line ending.
//!
//! Every decision is reported as a [`Diagnostic`], so a human can review
//! what was dropped.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use transfmt::{Config, EolStyle, Mode, normalize_dir};
//!
//! let config = Config::new("resources/translations")
//!     .with_include("Resources_*.properties")
//!     .with_eol(EolStyle::Unix);
//! let report = normalize_dir(config, Mode::Check)?;
//! println!("{} files require formatting", report.requiring_formatting());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compare;
pub mod config;
pub mod eol;
pub mod error;
pub mod file;
pub mod format;
pub mod line;
pub mod merge;
pub mod normalizer;
pub mod quality;
pub mod select;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::Config,
    eol::EolStyle,
    error::Error,
    file::TranslationFile,
    format::{Normalized, normalize_lines, requires_formatting},
    normalizer::{FileReport, Mode, Normalizer, Report, normalize_dir},
    quality::Quality,
    types::{Diagnostic, Entry, Severity, Tag},
};
