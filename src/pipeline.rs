// src/pipeline.rs
// Orchestrates lexing and analysis: raw text -> tokens -> verdict. Data flows
// strictly forward; the lexer is stateless between runs, so reset touches
// only the analyzer.

use log::error;

use crate::{
    errors::Error,
    lexer::{Lexer, WordTrace},
    parser::{SlrEngine, tables::thuum_grammar},
    semantics::{Analyzer, SemanticChecker},
};

/// End-to-end compiler for one teaching-language source. Reusable across
/// inputs via `reset`.
pub struct Compiler<A = SemanticChecker> {
    lexer: Lexer,
    analyzer: A,
    lex_trace: Vec<WordTrace>,
    fault: Option<Error>,
}

impl Compiler<SemanticChecker> {
    /// Builds the default pipeline over the shipped grammar tables.
    pub fn new() -> crate::errors::Result<Self> {
        let engine = SlrEngine::new(thuum_grammar()?);
        Ok(Self::with_analyzer(SemanticChecker::new(engine)))
    }
}

impl<A: Analyzer> Compiler<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Self {
            lexer: Lexer::new(),
            analyzer,
            lex_trace: Vec::new(),
            fault: None,
        }
    }

    /// Compiles `source` and returns the verdict. A lexical-stage fault fails
    /// the compilation without invoking the analyzer; it stays readable via
    /// `fault()`.
    pub fn compile(&mut self, source: &str) -> bool {
        self.fault = None;
        self.lex_trace.clear();
        let output = match self.lexer.tokenize(source) {
            Ok(out) => out,
            Err(e) => {
                error!("lexical fault: {e}");
                self.fault = Some(e);
                return false;
            }
        };
        self.lex_trace = output.trace;
        self.analyzer.parse(&output.tokens)
    }

    /// Resets the analyzer's mutable state. The lexical components hold none.
    pub fn reset(&mut self) {
        self.analyzer.reset();
    }

    pub fn report(&self) -> String {
        self.analyzer.report()
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Recognizer trace of the most recent compilation.
    pub fn lex_trace(&self) -> &[WordTrace] {
        &self.lex_trace
    }

    /// The lexical-stage fault of the most recent compilation, if any.
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }
}
