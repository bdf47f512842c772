//! Error types for schemashift

use std::path::PathBuf;
use thiserror::Error;

use crate::dialect::Dialect;

/// Errors that can occur while translating DDL
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("could not parse CREATE TABLE statement for {dialect}: {fragment}")]
    ParseError { dialect: Dialect, fragment: String },

    #[error("unsupported SQL dialect: {name}")]
    UnsupportedDialect { name: String },

    #[error("failed to read input file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file: {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranslateError {
    /// Build a ParseError, keeping only the leading part of the offending
    /// input so error messages stay readable for multi-kilobyte statements.
    pub fn parse(dialect: Dialect, fragment: &str) -> Self {
        let trimmed = fragment.trim();
        let fragment = if trimmed.chars().count() > 120 {
            let mut head: String = trimmed.chars().take(120).collect();
            head.push_str("...");
            head
        } else {
            trimmed.to_string()
        };
        TranslateError::ParseError { dialect, fragment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_truncates_long_fragments() {
        let long = "x".repeat(500);
        let err = TranslateError::parse(Dialect::MySql, &long);
        match err {
            TranslateError::ParseError { fragment, .. } => {
                assert!(fragment.len() <= 124);
                assert!(fragment.ends_with("..."));
            }
            _ => panic!("expected ParseError"),
        }
    }

    #[test]
    fn test_parse_error_keeps_short_fragments() {
        let err = TranslateError::parse(Dialect::Postgres, "  SELECT 1  ");
        match err {
            TranslateError::ParseError { fragment, .. } => assert_eq!(fragment, "SELECT 1"),
            _ => panic!("expected ParseError"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = TranslateError::UnsupportedDialect {
            name: "oracle".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported SQL dialect: oracle");
    }
}
