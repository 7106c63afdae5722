use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Token, DYNAMIC_DEFINITIONS, STATIC_DEFINITIONS};

/// How a dynamic pattern hit relates to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// A pattern match must begin exactly at the cursor; anything else at
    /// the cursor is an unknown lexeme. This is the default.
    AtCursor,
    /// The nearest occurrence at or after the cursor is accepted, even when
    /// that silently skips characters in between, and the cursor advances
    /// by the match length rather than to the match end. Compatibility mode
    /// for callers relying on the skip-tolerant behavior.
    SearchForward,
}

/// A single left-to-right scan over one source buffer. Owns its cursor and
/// output sequence; tokens gathered before a failure stay accessible.
pub struct Lexer {
    source: String,
    pos: usize,
    tokens: Vec<Token>,
    anchoring: Anchoring,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer::with_anchoring(source, Anchoring::AtCursor)
    }

    pub fn with_anchoring(source: String, anchoring: Anchoring) -> Lexer {
        Lexer {
            source,
            pos: 0,
            tokens: vec![],
            anchoring,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Runs the scan loop to completion or to the first unknown lexeme.
    /// On failure the error carries the offset of the first unconsumed
    /// character; everything recognised so far remains in `tokens()`.
    pub fn run(&mut self) -> Result<(), Error> {
        while self.in_bounds() {
            self.skip_spaces();
            if !self.in_bounds() {
                break;
            }

            let token = self.process_static().or_else(|| self.process_dynamic());

            match token {
                Some(token) => self.tokens.push(token),
                None => return Err(Error::new(ErrorImpl::UnknownLexeme, self.pos)),
            }
        }

        Ok(())
    }

    fn in_bounds(&self) -> bool {
        self.pos < self.source.len()
    }

    fn skip_spaces(&mut self) {
        while self.in_bounds()
            && matches!(self.source.as_bytes()[self.pos], b' ' | b'\n' | b'\r' | b'\t')
        {
            self.pos += 1;
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Tries the static catalog in order: exact literal at the cursor,
    /// rejected for keywords when the next character is alphanumeric or
    /// `_` (so `Forecast` is never read as `For` + `ecast`). First fit
    /// wins; there is no maximal munch across the catalog.
    fn process_static(&mut self) -> Option<Token> {
        for def in STATIC_DEFINITIONS.iter() {
            let length = def.literal.len();
            let end = self.pos + length;

            if end > self.source.len()
                || &self.source.as_bytes()[self.pos..end] != def.literal.as_bytes()
            {
                continue;
            }

            if def.is_keyword && end < self.source.len() {
                let next = self.source.as_bytes()[end] as char;
                if next == '_' || next.is_ascii_alphanumeric() {
                    continue;
                }
            }

            let token = MK_TOKEN!(def.kind, String::from(def.literal), self.pos, length);
            self.advance_n(length);
            return Some(token);
        }

        None
    }

    /// Tries the dynamic catalog in order (identifier, then number). The
    /// token records the start offset of the matched span, not the cursor
    /// after advancing.
    fn process_dynamic(&mut self) -> Option<Token> {
        for def in DYNAMIC_DEFINITIONS.iter() {
            let m = match def.pattern.find_at(&self.source, self.pos) {
                Some(m) => m,
                None => continue,
            };

            if self.anchoring == Anchoring::AtCursor && m.start() != self.pos {
                continue;
            }

            let (start, length) = (m.start(), m.len());
            let token = MK_TOKEN!(def.kind, m.as_str().to_string(), start, length);
            self.advance_n(length);
            return Some(token);
        }

        None
    }
}

/// Tokenizes a whole source buffer, failing on the first unknown lexeme.
/// Use `Lexer` directly when the partial token sequence is wanted too.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    lexer.run()?;
    Ok(lexer.into_tokens())
}
