//! Translation files as sequences of lines plus their terminator convention.

use std::io::{BufRead, Write};

use crate::{eol::EolStyle, error::Error, traits::LineCodec};

/// The lines of one translation file.
///
/// Reading accepts `\n`, `\r\n` and `\r` terminators, even mixed, and
/// remembers which ones were seen. Writing terminates every line with
/// [`eol`](Self::eol).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub lines: Vec<String>,
    /// Terminator to use when writing.
    pub eol: EolStyle,
    seen_terminators: Vec<EolStyle>,
    unterminated_last_line: bool,
}

impl TranslationFile {
    pub fn new(lines: Vec<String>, eol: EolStyle) -> Self {
        TranslationFile {
            lines,
            eol,
            seen_terminators: Vec::new(),
            unterminated_last_line: false,
        }
    }

    /// Whether writing this file with `eol` reproduces its terminators
    /// byte for byte.
    pub fn conforms_to(&self, eol: EolStyle) -> bool {
        !self.unterminated_last_line && self.seen_terminators.iter().all(|seen| *seen == eol)
    }

    /// Distinct terminators found while reading, in order of first use.
    pub fn seen_terminators(&self) -> &[EolStyle] {
        &self.seen_terminators
    }
}

impl LineCodec for TranslationFile {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut lines = Vec::new();
        let mut seen_terminators = Vec::new();
        let mut unterminated_last_line = false;
        let mut rest = content.as_str();
        while !rest.is_empty() {
            let Some(end) = rest.find(['\r', '\n']) else {
                lines.push(rest.to_string());
                unterminated_last_line = true;
                break;
            };
            lines.push(rest[..end].to_string());
            let tail = &rest[end..];
            let style = if tail.starts_with("\r\n") {
                EolStyle::Win
            } else if tail.starts_with('\r') {
                EolStyle::Mac
            } else {
                EolStyle::Unix
            };
            if !seen_terminators.contains(&style) {
                seen_terminators.push(style);
            }
            rest = &tail[style.terminator().len()..];
        }

        Ok(TranslationFile {
            lines,
            eol: seen_terminators.first().copied().unwrap_or_default(),
            seen_terminators,
            unterminated_last_line,
        })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let terminator = self.eol.terminator();
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(terminator.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}
