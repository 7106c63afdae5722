//! Error types for the lexical analyzer.
//!
//! This module defines the single failure the scan can produce. It
//! includes:
//!
//! - An error structure carrying the failing source offset
//! - Access to the unparsed remainder of the source
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
