// src/lib.rs

//! Recognizer for a small invented teaching language: a keyword stack
//! automaton classifies words, an SLR(1) engine checks structure over
//! precomputed tables, and a declaration checker rules on semantics. Each
//! stage records a step-by-step trace.

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod semantics;

pub use errors::{Error, Result};
pub use pipeline::Compiler;
