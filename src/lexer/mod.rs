//! Lexical analysis for the BASIC-like language.
//!
//! This module converts source text into a stream of classified tokens.
//! It handles:
//!
//! - An ordered catalog of static (literal) and dynamic (pattern) definitions
//! - Keyword-boundary disambiguation against identifier prefixes
//! - Token offset/length tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
