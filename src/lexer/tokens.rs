// src/lexer/tokens.rs

use std::fmt;

/// Token kinds for the teaching language.
///
/// The parser keys its tables on the string tag (`as_str`), so every kind has
/// exactly one stable tag: keywords are their own spelling, punctuation is the
/// literal symbol, and the synthetic end-of-input marker is `"$"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // primary keywords (recognized by the word automaton)
    Kel,  // module
    Los,  // if
    Fod,  // while
    Fah,  // separator
    Fus,  // declaration
    Hon,  // input
    Jun,  // return/output
    Him,  // this/self
    Nust, // not
    Anrk, // and
    Aan,  // or
    Ko,   // in

    // secondary keywords (fallback set, not in the automaton vocabulary)
    AssignWord, // "assign"
    Print,      // "print"

    // operators / punctuation
    Assign, // ":="
    Semi,   // ";"
    Dot,    // "."
    LParen,
    RParen,
    Plus,
    Minus,

    // literals / identifiers
    Num,
    Ident,

    // synthetic end-of-input marker
    Eof,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Kel => "KEL",
            Los => "LOS",
            Fod => "FOD",
            Fah => "FAH",
            Fus => "FUS",
            Hon => "HON",
            Jun => "JUN",
            Him => "HIM",
            Nust => "NUST",
            Anrk => "ANRK",
            Aan => "AAN",
            Ko => "KO",
            AssignWord => "assign",
            Print => "print",
            Assign => ":=",
            Semi => ";",
            Dot => ".",
            LParen => "(",
            RParen => ")",
            Plus => "+",
            Minus => "-",
            Num => "num",
            Ident => "id",
            Eof => "$",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by a token: the parsed integer for `num`, the original
/// text for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Num(i64),
    Text(String),
}

/// One lexed word (or the end marker). Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: u32,
    /// Always 0 in this implementation; kept for wire-shape stability.
    pub column: u32,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            line,
            column: 0,
            value: TokenValue::Text(lexeme.to_string()),
        }
    }

    pub fn num(lexeme: &str, line: u32, value: i64) -> Self {
        Self {
            kind: TokenKind::Num,
            lexeme: lexeme.to_string(),
            line,
            column: 0,
            value: TokenValue::Num(value),
        }
    }

    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "$", line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?}) @ line {}", self.kind, self.lexeme, self.line)
    }
}
