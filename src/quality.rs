//! Translation quality derived from markers embedded in a value.

use serde::Serialize;

pub const TRANSLATE_ME_MARKER: &str = "[translate me]";
pub const AUTO_MARKER: &str = "[auto]";

/// How trustworthy a translation is, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Empty,
    NeedsTranslation,
    AutoTranslated,
    ManuallyTranslated,
}

impl Quality {
    /// Classifies a value.
    ///
    /// Markers only count when they appear after the first character: a value
    /// that *starts* with `[translate me]` or `[auto]` is treated as a manual
    /// translation.
    pub fn of(value: &str) -> Quality {
        if value.is_empty() {
            Quality::Empty
        } else if marker_after_start(value, TRANSLATE_ME_MARKER) {
            Quality::NeedsTranslation
        } else if marker_after_start(value, AUTO_MARKER) {
            Quality::AutoTranslated
        } else {
            Quality::ManuallyTranslated
        }
    }
}

fn marker_after_start(value: &str, marker: &str) -> bool {
    value.find(marker).is_some_and(|offset| offset > 0)
}
