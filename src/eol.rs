use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Line terminator convention used when writing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EolStyle {
    /// `\n`
    Unix,
    /// `\r\n`
    Win,
    /// `\r`
    Mac,
}

impl EolStyle {
    /// The style of the platform this binary runs on.
    pub fn native() -> Self {
        if cfg!(windows) {
            EolStyle::Win
        } else {
            EolStyle::Unix
        }
    }

    pub fn terminator(&self) -> &'static str {
        match self {
            EolStyle::Unix => "\n",
            EolStyle::Win => "\r\n",
            EolStyle::Mac => "\r",
        }
    }
}

impl Default for EolStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl FromStr for EolStyle {
    type Err = Error;

    /// Accepts any value starting with `unix`, `win` or `mac`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("unix") {
            Ok(EolStyle::Unix)
        } else if lower.starts_with("win") {
            Ok(EolStyle::Win)
        } else if lower.starts_with("mac") {
            Ok(EolStyle::Mac)
        } else {
            Err(Error::UnknownEolStyle(s.to_string()))
        }
    }
}

impl Display for EolStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EolStyle::Unix => "unix",
            EolStyle::Win => "win",
            EolStyle::Mac => "mac",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_styles() {
        assert_eq!("unix".parse::<EolStyle>().unwrap(), EolStyle::Unix);
        assert_eq!("WIN".parse::<EolStyle>().unwrap(), EolStyle::Win);
        assert_eq!("windows".parse::<EolStyle>().unwrap(), EolStyle::Win);
        assert_eq!("macos".parse::<EolStyle>().unwrap(), EolStyle::Mac);
    }

    #[test]
    fn test_parse_unknown_style() {
        let error = "dos".parse::<EolStyle>().unwrap_err();
        assert!(matches!(error, Error::UnknownEolStyle(ref s) if s == "dos"));
    }

    #[test]
    fn test_terminators() {
        assert_eq!(EolStyle::Unix.terminator(), "\n");
        assert_eq!(EolStyle::Win.terminator(), "\r\n");
        assert_eq!(EolStyle::Mac.terminator(), "\r");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for style in [EolStyle::Unix, EolStyle::Win, EolStyle::Mac] {
            assert_eq!(style.to_string().parse::<EolStyle>().unwrap(), style);
        }
    }
}
