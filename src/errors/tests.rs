//! Unit tests for error handling.
//!
//! This module contains tests for the lexical error type and its
//! offset-derived reporting.

use crate::errors::errors::{Error, ErrorImpl};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnknownLexeme, 10);

    assert_eq!(error.get_error_name(), "UnknownLexeme");
    assert_eq!(error.get_offset(), 10);
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnknownLexeme, 6);

    assert_eq!(error.to_string(), "unknown lexeme at offset 6");
}

#[test]
fn test_unparsed_remainder() {
    let source = "Dim x @ 1";
    let error = Error::new(ErrorImpl::UnknownLexeme, 6);

    assert_eq!(error.unparsed_remainder(source), "@ 1");
}

#[test]
fn test_unparsed_remainder_at_last_character() {
    let source = "Dim x @";
    let error = Error::new(ErrorImpl::UnknownLexeme, 6);

    assert_eq!(error.unparsed_remainder(source), "@");
}
