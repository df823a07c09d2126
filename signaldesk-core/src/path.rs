//! Dotted field paths — addresses into nested records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A parsed dotted path such as `"indicators.adx"`.
///
/// Construction is the only fallible step; once parsed, resolution against
/// any record is total (missing fields resolve as absent, never panic).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("field path is empty")]
    Empty,
    #[error("field path {path:?} has an empty segment")]
    EmptySegment { path: String },
}

impl FieldPath {
    /// Parse a dotted path. Rejects empty paths and empty segments
    /// (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment {
                path: raw.to_string(),
            });
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_segment() {
        let path = FieldPath::parse("confidence").unwrap();
        assert_eq!(path.segments(), ["confidence"]);
    }

    #[test]
    fn parses_nested_segments() {
        let path = FieldPath::parse("indicators.adx").unwrap();
        assert_eq!(path.segments(), ["indicators", "adx"]);
        assert_eq!(path.to_string(), "indicators.adx");
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(FieldPath::parse("a..b").is_err());
        assert!(FieldPath::parse(".a").is_err());
        assert!(FieldPath::parse("a.").is_err());
    }

    #[test]
    fn from_str_round_trip() {
        let path: FieldPath = "indicators.channel_position".parse().unwrap();
        assert_eq!(path.to_string(), "indicators.channel_position");
    }
}
