//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_STATIC_DEF!` - Creates a static definition for the token catalog
//!
//! These macros reduce boilerplate in the catalog and matcher code.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's matched text
/// * `$offset` - The byte offset where the matched span starts
/// * `$length` - The length of the matched span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $offset:expr, $length:expr) => {
        Token {
            kind: $kind,
            text: $text,
            offset: $offset,
            length: $length,
        }
    };
}

/// Creates a static definition for the token catalog.
///
/// The literal to match is the kind's canonical representation. The
/// `keyword` marker form enables the trailing-boundary check.
///
/// # Example
///
/// ```ignore
/// MK_STATIC_DEF!(TokenKind::Dim, keyword)
/// MK_STATIC_DEF!(TokenKind::Plus)
/// ```
#[macro_export]
macro_rules! MK_STATIC_DEF {
    ($kind:expr, keyword) => {
        StaticDefinition::new($kind, true)
    };
    ($kind:expr) => {
        StaticDefinition::new($kind, false)
    };
}
