//! File-name patterns used by asset rules.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A compiled file-name pattern.
///
/// Two patterns are equal when their source and flags are equal; the compiled
/// regex is derived data. Serializes as a regex literal, e.g. `/\.js$/` or
/// `/\.(gif|png)$/i`.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::build(source.into(), false)
    }

    pub fn case_insensitive(source: impl Into<String>) -> Result<Self> {
        Self::build(source.into(), true)
    }

    fn build(source: String, case_insensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| ConfigError::InvalidOptions {
                name: format!("pattern /{source}/"),
                message: e.to_string(),
            })?;
        Ok(Self {
            source,
            case_insensitive,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if self.case_insensitive {
            f.write_str("i")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_regex_literal() {
        let plain = Pattern::new(r"\.js$").unwrap();
        let folded = Pattern::case_insensitive(r"\.(gif|png|jpe?g|svg)$").unwrap();
        assert_eq!(plain.to_string(), r"/\.js$/");
        assert_eq!(folded.to_string(), r"/\.(gif|png|jpe?g|svg)$/i");
    }

    #[test]
    fn case_insensitive_flag_affects_matching() {
        let plain = Pattern::new(r"\.png$").unwrap();
        let folded = Pattern::case_insensitive(r"\.png$").unwrap();
        assert!(!plain.is_match("LOGO.PNG"));
        assert!(folded.is_match("LOGO.PNG"));
    }

    #[test]
    fn equality_ignores_compiled_state() {
        assert_eq!(Pattern::new("a+").unwrap(), Pattern::new("a+").unwrap());
        assert_ne!(
            Pattern::new("a+").unwrap(),
            Pattern::case_insensitive("a+").unwrap()
        );
    }

    #[test]
    fn invalid_source_is_rejected() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions { .. }));
    }
}
