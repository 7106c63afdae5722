use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::MK_STATIC_DEF;

/// Pattern for identifier tokens.
pub const IDENTIFIER_PATTERN: &str = "[a-zA-Z_][a-zA-Z0-9_]*";
/// Pattern for integer literals. No leading zeros except the literal `0`
/// itself; no decimals, no signs (unary `+`/`-` are separate tokens).
pub const NUMBER_PATTERN: &str = "0|[1-9][0-9]*";

/// Every category the lexer can recognise. The set is closed; match arms
/// over it are expected to be exhaustive.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    Dim,
    Print,
    Const,
    Option,
    Explicit,
    Set,
    If,
    Else,
    Sub,
    End,
    For,
    Each,
    Next,

    // Arithmetical operators
    Plus,
    Minus,
    Multiply,
    Exponent,
    Divide,
    IntegerDivide,
    Mod,

    // Logical operators
    Not,
    And,
    Or,
    Xor,
    AndAlso,
    OrElse,

    // Other operators
    Assign,
    Semicolon,
    DoubleQuote,
    Dot,
    Comma,
    OpeningBracket,
    ClosingBracket,

    // Dynamic kinds
    Identifier,
    Number,
}

impl TokenKind {
    /// Canonical text of the kind: the literal to match for static kinds,
    /// the regex source for dynamic kinds.
    pub fn representation(&self) -> &'static str {
        match self {
            TokenKind::Dim => "Dim",
            TokenKind::Print => "Print",
            TokenKind::Const => "Const",
            TokenKind::Option => "Option",
            TokenKind::Explicit => "Explicit",
            TokenKind::Set => "Set",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Sub => "Sub",
            TokenKind::End => "End",
            TokenKind::For => "For",
            TokenKind::Each => "Each",
            TokenKind::Next => "Next",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Exponent => "^",
            TokenKind::Divide => "/",
            TokenKind::IntegerDivide => "\\",
            TokenKind::Mod => "Mod",
            TokenKind::Not => "Not",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Xor => "Xor",
            TokenKind::AndAlso => "AndAlso",
            TokenKind::OrElse => "OrElse",
            TokenKind::Assign => "=",
            TokenKind::Semicolon => ";",
            TokenKind::DoubleQuote => "\"",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::OpeningBracket => "(",
            TokenKind::ClosingBracket => ")",
            TokenKind::Identifier => IDENTIFIER_PATTERN,
            TokenKind::Number => NUMBER_PATTERN,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token kind matched by exact literal text. `is_keyword` enables the
/// trailing-boundary check: the character after the matched span must not
/// be alphanumeric or `_`, else the match is rejected.
pub struct StaticDefinition {
    pub kind: TokenKind,
    pub literal: &'static str,
    pub is_keyword: bool,
}

impl StaticDefinition {
    pub fn new(kind: TokenKind, is_keyword: bool) -> Self {
        StaticDefinition {
            kind,
            literal: kind.representation(),
            is_keyword,
        }
    }
}

/// A token kind matched by a compiled pattern instead of a literal.
pub struct DynamicDefinition {
    pub kind: TokenKind,
    pub pattern: Regex,
}

impl DynamicDefinition {
    pub fn new(kind: TokenKind) -> Self {
        DynamicDefinition {
            kind,
            pattern: Regex::new(kind.representation()).unwrap(),
        }
    }
}

lazy_static! {
    /// Ordered static catalog. Order is the match priority: keywords, then
    /// arithmetical, logical, and structural operators. First fit wins, so
    /// `AndAlso`/`OrElse` sit before their prefixes `And`/`Or`. Only the
    /// keywords carry the boundary check; word-shaped operators match bare.
    pub static ref STATIC_DEFINITIONS: Vec<StaticDefinition> = vec![
        // Keywords
        MK_STATIC_DEF!(TokenKind::Dim, keyword),
        MK_STATIC_DEF!(TokenKind::Print, keyword),
        MK_STATIC_DEF!(TokenKind::Const, keyword),
        MK_STATIC_DEF!(TokenKind::Option, keyword),
        MK_STATIC_DEF!(TokenKind::Explicit, keyword),
        MK_STATIC_DEF!(TokenKind::Set, keyword),
        MK_STATIC_DEF!(TokenKind::If, keyword),
        MK_STATIC_DEF!(TokenKind::Else, keyword),
        MK_STATIC_DEF!(TokenKind::Sub, keyword),
        MK_STATIC_DEF!(TokenKind::End, keyword),
        MK_STATIC_DEF!(TokenKind::For, keyword),
        MK_STATIC_DEF!(TokenKind::Each, keyword),
        MK_STATIC_DEF!(TokenKind::Next, keyword),
        // Arithmetical operators
        MK_STATIC_DEF!(TokenKind::Plus),
        MK_STATIC_DEF!(TokenKind::Minus),
        MK_STATIC_DEF!(TokenKind::Multiply),
        MK_STATIC_DEF!(TokenKind::Exponent),
        MK_STATIC_DEF!(TokenKind::Divide),
        MK_STATIC_DEF!(TokenKind::IntegerDivide),
        MK_STATIC_DEF!(TokenKind::Mod),
        // Logical operators
        MK_STATIC_DEF!(TokenKind::Not),
        MK_STATIC_DEF!(TokenKind::AndAlso),
        MK_STATIC_DEF!(TokenKind::OrElse),
        MK_STATIC_DEF!(TokenKind::And),
        MK_STATIC_DEF!(TokenKind::Or),
        MK_STATIC_DEF!(TokenKind::Xor),
        // Other operators
        MK_STATIC_DEF!(TokenKind::Assign),
        MK_STATIC_DEF!(TokenKind::Semicolon),
        MK_STATIC_DEF!(TokenKind::DoubleQuote),
        MK_STATIC_DEF!(TokenKind::Dot),
        MK_STATIC_DEF!(TokenKind::Comma),
        MK_STATIC_DEF!(TokenKind::OpeningBracket),
        MK_STATIC_DEF!(TokenKind::ClosingBracket),
    ];

    /// Ordered dynamic catalog: identifier before number.
    pub static ref DYNAMIC_DEFINITIONS: Vec<DynamicDefinition> = vec![
        DynamicDefinition::new(TokenKind::Identifier),
        DynamicDefinition::new(TokenKind::Number),
    ];
}

/// A classified, positioned substring of the source. Invariant:
/// `source[offset..offset + length] == text` for the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
    pub length: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![TokenKind::Identifier, TokenKind::Number]) {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
