//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::Error;

#[test]
fn test_lex_failed_name() {
    let error = Error::LexFailed;

    assert_eq!(error.name(), "LexFailed");
}

#[test]
fn test_lex_failed_display() {
    let error = Error::LexFailed;

    assert_eq!(error.to_string(), "lexing failed");
}

#[test]
fn test_metadata_error_name() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(json_error);

    assert_eq!(error.name(), "Metadata");
    assert!(error.to_string().starts_with("invalid module metadata:"));
}
