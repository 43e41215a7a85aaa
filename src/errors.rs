// src/errors.rs

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level errors. Syntax errors are not here: a rejected parse is a
/// verdict, not an error; only faults that prevent producing a verdict (or
/// point at broken tooling input) surface as `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// All-digit word whose value does not fit in an i64 (lexical-stage fault).
    NumOverflow(String, u32),
    /// Grammar artifact bytes failed to parse.
    BadTables(String),
    /// A state's item set holds more than one completed item, so no single
    /// reducible production can be derived for it.
    AmbiguousState(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NumOverflow(w, line) => {
                write!(f, "line {line}: numeric literal '{w}' overflows i64")
            }
            Error::BadTables(msg) => write!(f, "bad grammar tables: {msg}"),
            Error::AmbiguousState(s) => {
                write!(f, "state {s} holds more than one completed item")
            }
        }
    }
}

impl std::error::Error for Error {}
