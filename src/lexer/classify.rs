// src/lexer/classify.rs
// Maps a word recognizer outcome to exactly one token. Total: every word
// yields one token, never zero, never more than one.

use log::warn;

use super::{
    automaton::Recognition,
    tables::LexTables,
    tokens::{Token, TokenKind},
};
use crate::errors::{Error, Result};

/// Fixed operator / punctuation fallback set.
const OPERATORS: &[(&str, TokenKind)] = &[
    (":=", TokenKind::Assign),
    (";", TokenKind::Semi),
    (".", TokenKind::Dot),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
];

/// Secondary reserved words not covered by the automaton vocabulary.
const EXTRA_KEYWORDS: &[(&str, TokenKind)] = &[
    ("assign", TokenKind::AssignWord),
    ("print", TokenKind::Print),
];

/// Classifies one word given the recognizer's outcome.
///
/// Accepted configurations map through the kind table; an accepting
/// configuration missing from it is a table mismatch, recovered by defaulting
/// to `id` and surfacing a diagnostic. Rejected words go through the fallback
/// chain: numeric literal, operator set, secondary keywords, generic
/// identifier.
///
/// The only error is an all-digit word overflowing `i64`, which is a lexical
/// fault rather than a classification outcome.
pub fn classify(tables: &LexTables, word: &str, line: u32, outcome: Recognition) -> Result<Token> {
    if let Recognition::Accepted(cfg) = outcome {
        return Ok(match tables.kind_of(cfg) {
            Some(kind) => Token::new(kind, word, line),
            None => {
                warn!(
                    "line {line}: accepting configuration '{}' has no token kind; \
                     defaulting '{word}' to id",
                    tables.automaton.label(cfg)
                );
                Token::new(TokenKind::Ident, word, line)
            }
        });
    }

    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
        let value = word
            .parse::<i64>()
            .map_err(|_| Error::NumOverflow(word.to_string(), line))?;
        return Ok(Token::num(word, line, value));
    }

    for (sym, kind) in OPERATORS {
        if word == *sym {
            return Ok(Token::new(*kind, word, line));
        }
    }

    for (kw, kind) in EXTRA_KEYWORDS {
        if word == *kw {
            return Ok(Token::new(*kind, word, line));
        }
    }

    Ok(Token::new(TokenKind::Ident, word, line))
}
