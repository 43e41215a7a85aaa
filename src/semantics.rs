// src/semantics.rs
// Declaration-before-use checking layered over the SLR engine. The pipeline
// talks to it only through the `Analyzer` seam, so other token-sequence
// consumers (or table variants under test) can slot in.

use std::fmt;

use hashbrown::HashSet;

use crate::{
    lexer::tokens::{Token, TokenKind},
    parser::SlrEngine,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub name: String,
    pub line: u32,
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "line {}: identifier '{}' used before declaration",
            self.line, self.name
        )
    }
}

/// Token-sequence consumer behind the pipeline. `parse` yields the combined
/// verdict; `errors` stays readable afterward so callers can tell "no errors"
/// from "accepted despite a recorded problem".
pub trait Analyzer {
    fn parse(&mut self, tokens: &[Token]) -> bool;
    fn reset(&mut self);
    fn report(&self) -> String;
    fn errors(&self) -> &[SemanticError];
}

/// The default analyzer: runs the SLR engine for the structural verdict and
/// tracks declared identifiers on the side. `FUS id` declares; every other
/// `id` occurrence must already be declared.
pub struct SemanticChecker {
    engine: SlrEngine,
    declared: HashSet<String>,
    errors: Vec<SemanticError>,
    last_accepted: Option<bool>,
}

impl SemanticChecker {
    pub fn new(engine: SlrEngine) -> Self {
        Self {
            engine,
            declared: HashSet::new(),
            errors: Vec::new(),
            last_accepted: None,
        }
    }

    pub fn engine(&self) -> &SlrEngine {
        &self.engine
    }

    pub fn declared(&self) -> &HashSet<String> {
        &self.declared
    }

    fn check_declarations(&mut self, tokens: &[Token]) {
        for (i, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Ident {
                continue;
            }
            let declares = i > 0 && tokens[i - 1].kind == TokenKind::Fus;
            if declares {
                self.declared.insert(token.lexeme.clone());
            } else if !self.declared.contains(&token.lexeme) {
                self.errors.push(SemanticError {
                    name: token.lexeme.clone(),
                    line: token.line,
                });
            }
        }
    }
}

impl Analyzer for SemanticChecker {
    fn parse(&mut self, tokens: &[Token]) -> bool {
        self.check_declarations(tokens);
        let syntax_ok = self.engine.parse(tokens);
        let verdict = syntax_ok && self.errors.is_empty();
        self.last_accepted = Some(verdict);
        verdict
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.declared.clear();
        self.errors.clear();
        self.last_accepted = None;
    }

    fn report(&self) -> String {
        let mut out = String::new();
        match self.last_accepted {
            Some(true) => out.push_str("verdict: accepted\n"),
            Some(false) => out.push_str("verdict: rejected\n"),
            None => out.push_str("verdict: not run\n"),
        }
        if let Some(failure) = self.engine.failure() {
            out.push_str(&format!("{failure}\n"));
        }
        let mut names: Vec<&String> = self.declared.iter().collect();
        names.sort();
        out.push_str(&format!(
            "declared identifiers: {}\n",
            if names.is_empty() {
                "(none)".to_string()
            } else {
                names
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));
        for err in &self.errors {
            out.push_str(&format!("semantic error: {err}\n"));
        }
        out
    }

    fn errors(&self) -> &[SemanticError] {
        &self.errors
    }
}
