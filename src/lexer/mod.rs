// src/lexer/mod.rs
// Lexical pipeline: '#'-delimited lines, whitespace-delimited words, one
// recognizer walk + classification per word, '$' end marker at the end.

pub mod automaton;
pub mod classify;
pub mod tables;
pub mod tokens;

use log::debug;

use self::{
    automaton::Recognition,
    classify::classify,
    tables::{LINE_DELIMITER, LexTables},
    tokens::Token,
};
use crate::errors::Result;

/// Per-word diagnostic record: what the recognizer saw and decided. An
/// observable side channel; downstream parsing never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrace {
    pub line: u32,
    pub lexeme: String,
    /// Final configuration label, or `None` when the recognizer rejected.
    pub config: Option<String>,
    pub accepted: bool,
}

/// Ordered token sequence plus the recognizer trace.
#[derive(Debug, Clone)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub trace: Vec<WordTrace>,
}

/// The lexer owns its (immutable) tables; tokenizing holds no mutable state,
/// so one instance serves any number of inputs.
pub struct Lexer {
    tables: LexTables,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            tables: LexTables::new(),
        }
    }

    pub fn with_tables(tables: LexTables) -> Self {
        Self { tables }
    }

    /// Tokenizes `source`. Every word yields exactly one token; the only
    /// fault is a numeric literal overflowing i64.
    pub fn tokenize(&self, source: &str) -> Result<LexOutput> {
        let mut tokens = Vec::new();
        let mut trace = Vec::new();
        let mut line: u32 = 1;

        // Each delimiter advances the line counter exactly once, empty
        // segments included.
        for segment in source.split(LINE_DELIMITER) {
            for word in segment.split_whitespace() {
                let outcome = self.tables.automaton.recognize(word);
                let (config, accepted) = match outcome {
                    Recognition::Accepted(c) => {
                        (Some(self.tables.automaton.label(c).to_string()), true)
                    }
                    Recognition::Rejected => (None, false),
                };
                let token = classify(&self.tables, word, line, outcome)?;
                debug!(
                    "line {line}: {word:?} -> {} ({})",
                    config.as_deref().unwrap_or("X"),
                    if accepted { "accepted" } else { "rejected" },
                );
                trace.push(WordTrace {
                    line,
                    lexeme: word.to_string(),
                    config,
                    accepted,
                });
                tokens.push(token);
            }
            line += 1;
        }

        tokens.push(Token::eof(line));
        Ok(LexOutput { tokens, trace })
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
