//! The full normalization pass over the lines of one file.

use serde::Serialize;

use crate::{
    compare::sort_entries,
    line::{LineKind, classify, is_empty_translation},
    merge::merge_entries,
    types::{Diagnostic, Entry, Tag},
};

/// Result of normalizing the lines of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub lines: Vec<String>,
    /// Decisions in the order they were taken.
    pub diagnostics: Vec<Diagnostic>,
}

/// Drops comments, blanks and malformed lines, sorts the entries by key and
/// keeps the best translation of every key.
///
/// `file` is only used to label diagnostics.
///
/// ```
/// use transfmt::normalize_lines;
///
/// let input = ["b=2", "a=1 [translate me]", "a=1"].map(String::from);
/// let normalized = normalize_lines("Resources_de.properties", &input);
/// assert_eq!(normalized.lines, vec!["a=1", "b=2"]);
/// ```
pub fn normalize_lines(file: &str, lines: &[String]) -> Normalized {
    let mut diagnostics = Vec::new();
    let mut entries = Vec::with_capacity(lines.len());

    for line in lines {
        match classify(line) {
            LineKind::Comment | LineKind::Blank => {}
            LineKind::Malformed => {
                diagnostics.push(Diagnostic::new(file, Tag::NoKeyValue, line.as_str()));
            }
            LineKind::Entry { key, value } => {
                if is_empty_translation(value) {
                    diagnostics.push(Diagnostic::new(file, Tag::EmptyTranslation, line.as_str()));
                }
                entries.push(Entry::new(key, value));
            }
        }
    }

    // stable: equal keys keep their input order for the merge
    let entries = sort_entries(entries);

    let (merged, merge_diagnostics) = merge_entries(file, entries);
    diagnostics.extend(merge_diagnostics);

    Normalized {
        lines: merged.iter().map(Entry::to_line).collect(),
        diagnostics,
    }
}

/// Element-wise comparison of the input lines with the normalized ones.
pub fn requires_formatting(original: &[String], normalized: &[String]) -> bool {
    original != normalized
}
