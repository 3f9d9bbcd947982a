//! Core types shared by the normalization passes.

use std::fmt::Display;

use serde::Serialize;

use crate::quality::Quality;

/// A parsed key/value pair from one input line.
///
/// The quality is derived from the value once, when the entry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub quality: Quality,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Entry {
            key: key.into(),
            quality: Quality::of(&value),
            value,
        }
    }

    /// The serialized form written to the output: `key=value`.
    pub fn to_line(&self) -> String {
        to_line(&self.key, &self.value)
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

pub(crate) fn to_line(key: &str, value: &str) -> String {
    format!("{}={}", key, value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
}

/// What a diagnostic reports about a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Line has no `=` separator or an empty key; it was dropped.
    NoKeyValue,
    /// Value is empty or only a quality marker; the entry is kept.
    EmptyTranslation,
    /// Line identical to an earlier one; it was dropped.
    DropDuplicate,
    /// A translation of lower quality than another one for the same key.
    Drop,
    /// Two different manual translations for one key: this one is kept.
    RevisitKeep,
    /// Two different manual translations for one key: this one is dropped.
    RevisitDrop,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::NoKeyValue => "no key/val",
            Tag::EmptyTranslation => "empty translation",
            Tag::DropDuplicate => "drop duplicate",
            Tag::Drop => "drop",
            Tag::RevisitKeep => "drop one of two of equal quality (revisit!):keep",
            Tag::RevisitDrop => "drop one of two of equal quality (revisit!):drop",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Tag::DropDuplicate | Tag::Drop => Severity::Info,
            Tag::NoKeyValue | Tag::EmptyTranslation | Tag::RevisitKeep | Tag::RevisitDrop => {
                Severity::Warn
            }
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single drop/keep decision or anomaly found while normalizing a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// File name (without directory) the line came from.
    pub file: String,
    pub tag: Tag,
    /// The affected line.
    pub detail: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, tag: Tag, detail: impl Into<String>) -> Self {
        Diagnostic {
            severity: tag.severity(),
            file: file.into(),
            tag,
            detail: detail.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.file, self.tag, self.detail)
    }
}
