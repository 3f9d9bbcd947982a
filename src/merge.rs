//! Reduction of all entries sharing a key to the single best one.

use crate::{
    compare::same_key,
    quality::Quality,
    types::{Diagnostic, Entry, Tag, to_line},
};

/// Collapses runs of entries with the same key, keeping the best translation.
///
/// Entries must be fed in sorted order (see [`crate::compare::compare_entries`]);
/// only adjacent entries with exactly equal keys are merged. Every drop or
/// keep decision is recorded as a [`Diagnostic`].
///
/// ```
/// use transfmt::{merge::DuplicateMerger, types::Entry};
///
/// let mut merger = DuplicateMerger::new("Resources_de.properties");
/// merger.push(Entry::new("a", "Datei [translate me]"));
/// merger.push(Entry::new("a", "Datei"));
/// merger.push(Entry::new("b", "Bearbeiten"));
/// let (entries, diagnostics) = merger.finish();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].value, "Datei");
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug)]
pub struct DuplicateMerger {
    file: String,
    retained: Option<Entry>,
    merged: Vec<Entry>,
    diagnostics: Vec<Diagnostic>,
}

impl DuplicateMerger {
    pub fn new(file: impl Into<String>) -> Self {
        DuplicateMerger {
            file: file.into(),
            retained: None,
            merged: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        let Some(retained) = self.retained.take() else {
            self.retained = Some(entry);
            return;
        };
        if !same_key(&entry.key, &retained.key) {
            self.merged.push(retained);
            self.retained = Some(entry);
            return;
        }

        let kept = if entry.quality < retained.quality {
            self.report(Tag::Drop, to_line(&retained.key, &entry.value));
            retained
        } else if entry.quality > retained.quality {
            self.report(Tag::Drop, retained.to_line());
            entry
        } else if entry.value == retained.value {
            self.report(Tag::DropDuplicate, to_line(&retained.key, &entry.value));
            retained
        } else if entry.quality == Quality::ManuallyTranslated {
            // First manual translation wins, but a human should look at both.
            self.report(Tag::RevisitKeep, retained.to_line());
            self.report(Tag::RevisitDrop, entry.to_line());
            retained
        } else {
            self.report(Tag::Drop, to_line(&retained.key, &entry.value));
            retained
        };
        self.retained = Some(kept);
    }

    /// Flushes the last retained entry and returns the survivors in sorted
    /// order together with the decisions taken.
    pub fn finish(mut self) -> (Vec<Entry>, Vec<Diagnostic>) {
        if let Some(retained) = self.retained.take() {
            self.merged.push(retained);
        }
        (self.merged, self.diagnostics)
    }

    fn report(&mut self, tag: Tag, detail: String) {
        self.diagnostics
            .push(Diagnostic::new(self.file.clone(), tag, detail));
    }
}

/// Runs a [`DuplicateMerger`] over already sorted entries.
pub fn merge_entries(
    file: &str,
    entries: impl IntoIterator<Item = Entry>,
) -> (Vec<Entry>, Vec<Diagnostic>) {
    let mut merger = DuplicateMerger::new(file);
    for entry in entries {
        merger.push(entry);
    }
    merger.finish()
}
