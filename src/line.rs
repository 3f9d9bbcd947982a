//! Classification of raw lines into comments, blanks and key/value entries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Key is everything up to the first `=` not escaped by a backslash.
    static ref SEPARATOR_REGEX: Regex =
        Regex::new(r"^((?:[^\\=]|\\.)*?)\s*=\s*(.*)$").unwrap();
    static ref EMPTY_TRANSLATION_REGEX: Regex =
        Regex::new(r"^(?:\[auto\]|\[translate me\])?$").unwrap();
}

/// What a single raw line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    Blank,
    Entry { key: &'a str, value: &'a str },
    /// No separator, or nothing in front of it.
    Malformed,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim_start().starts_with('#') {
        return LineKind::Comment;
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    let Some(captures) = SEPARATOR_REGEX.captures(line) else {
        return LineKind::Malformed;
    };
    // Trailing unescaped whitespace is already part of the separator.
    let key = captures.get(1).map_or("", |m| m.as_str()).trim_start();
    let value = captures.get(2).map_or("", |m| m.as_str()).trim();
    if key.is_empty() {
        LineKind::Malformed
    } else {
        LineKind::Entry { key, value }
    }
}

/// An empty value, or one holding nothing but a quality marker.
pub fn is_empty_translation(value: &str) -> bool {
    EMPTY_TRANSLATION_REGEX.is_match(value)
}
