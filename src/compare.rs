//! Ordering of lines by their key portion.
//!
//! Sorting uses [`compare_keys`], which is case-insensitive and stops at the
//! end of the key. Merging uses [`same_key`], which is an exact comparison.
//! The two are kept apart on purpose: `Key` and `key` sort next to each other
//! but are never merged.

use std::cmp::Ordering;

use crate::types::Entry;

/// Orders two lines by the case-insensitive content of their keys.
///
/// A key ends at the first space, tab or `=`. Everything after it is ignored,
/// so lines with the same key compare equal regardless of their values.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    compare_key_chars(a.chars(), b.chars())
}

/// [`compare_keys`] applied to the `key=` form an entry is written as.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    compare_key_chars(
        a.key.chars().chain(Some('=')),
        b.key.chars().chain(Some('=')),
    )
}

/// Stable sort of entries by [`compare_entries`].
///
/// The two-step case comparison is not a total order for every script (`I`,
/// `ı` and `j` form a cycle), so this is a plain merge sort that never relies
/// on transitivity. Equal keys keep their input order.
pub fn sort_entries(entries: Vec<Entry>) -> Vec<Entry> {
    merge_sort_by(entries, &mut compare_entries)
}

/// Exact, case-sensitive key equality used when merging.
pub fn same_key(a: &str, b: &str) -> bool {
    a == b
}

fn merge_sort_by<T>(
    mut items: Vec<T>,
    compare: &mut impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties go left to keep the sort stable
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

fn compare_key_chars(
    mut a: impl Iterator<Item = char>,
    mut b: impl Iterator<Item = char>,
) -> Ordering {
    loop {
        let (c1, c2) = match (a.next(), b.next()) {
            (Some(c1), Some(c2)) => (c1, c2),
            // one side ran out before either key ended: the shorter line first
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        };
        match (is_terminator(c1), is_terminator(c2)) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let ordering = compare_chars_ignore_case(c1, c2);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '=')
}

// Upper case first, then lower case, for scripts where the two mappings are
// not symmetric.
fn compare_chars_ignore_case(c1: char, c2: char) -> Ordering {
    if c1 == c2 {
        return Ordering::Equal;
    }
    if simple_upper(c1) == simple_upper(c2) {
        return Ordering::Equal;
    }
    simple_lower(c1).cmp(&simple_lower(c2))
}

// Single-char case mappings; characters that expand (e.g. `ß` -> `SS`) map to
// themselves.
fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
