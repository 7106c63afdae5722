use std::fmt::Display;

use thiserror::Error;

/// A lexical failure, positioned at the byte offset where recognition
/// stopped. Tokens gathered before the failure are kept by the `Lexer`
/// that produced them; this type only describes the failure itself.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    offset: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, offset: usize) -> Self {
        Error {
            internal_error: error_impl,
            offset,
        }
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownLexeme => "UnknownLexeme",
        }
    }

    /// Everything from the failing offset to the end of the source. The
    /// offset points at the first unconsumed character, so this is the
    /// part of the input the scan never classified.
    pub fn unparsed_remainder<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..]
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.offset)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unknown lexeme")]
    UnknownLexeme,
}
