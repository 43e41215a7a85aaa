// src/parser/mod.rs
// Bottom-up table-driven parser: a state stack and a parallel symbol stack,
// stepped by shift / empty-production goto / reduce decisions until the
// accepting state meets the end marker or no action applies.

pub mod grammar;
pub mod tables;

use std::fmt;

use log::debug;

use self::grammar::{END_MARKER, EPSILON, GrammarTables};
use crate::lexer::tokens::Token;

/// The decision taken at one step, with its destination state where there is
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Accept,
    Shift(u32),
    /// An empty production fired: nothing popped, goto pushed.
    EmptyGoto { nonterminal: String, to: u32 },
    Reduce { lhs: String, rhs: Vec<String>, to: u32 },
    Fail,
}

/// Snapshot of one engine step, taken before the action mutates the stacks.
/// `symbols.len() == stack.len() - 1` holds in every snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    pub stack: Vec<u32>,
    pub symbols: Vec<String>,
    pub state: u32,
    pub lookahead: String,
    pub action: StepAction,
}

/// Why a parse halted without accepting. GOTO-not-found points at an
/// inconsistent grammar table rather than at the source text, so it is kept
/// distinct from a plain syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    Syntax { state: u32, lookahead: String },
    GotoNotFound { state: u32, lhs: String },
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseFailure::Syntax { state, lookahead } => {
                write!(f, "syntax error: state {state}, lookahead '{lookahead}'")
            }
            ParseFailure::GotoNotFound { state, lhs } => {
                write!(f, "GOTO({state}, {lhs}) not found in the grammar tables")
            }
        }
    }
}

/// The SLR engine. Owns its grammar tables (injected, immutable) and the two
/// stacks. Not safe for concurrent use; `reset` restores the initial stacks
/// so one instance can serve repeated parses.
pub struct SlrEngine {
    tables: GrammarTables,
    stack: Vec<u32>,
    symbols: Vec<String>,
    trace: Vec<StepTrace>,
    failure: Option<ParseFailure>,
}

impl SlrEngine {
    pub fn new(tables: GrammarTables) -> Self {
        let start = tables.start_state;
        Self {
            tables,
            stack: vec![start],
            symbols: Vec::new(),
            trace: Vec::new(),
            failure: None,
        }
    }

    pub fn tables(&self) -> &GrammarTables {
        &self.tables
    }

    pub fn trace(&self) -> &[StepTrace] {
        &self.trace
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        self.failure.as_ref()
    }

    /// Restores the single-element initial stack and clears the symbol stack,
    /// trace, and failure, permitting reuse.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(self.tables.start_state);
        self.symbols.clear();
        self.trace.clear();
        self.failure = None;
    }

    fn record(&mut self, state: u32, lookahead: &str, action: StepAction) {
        debug!(
            "step {}: stack={:?} state={state} lookahead={lookahead} -> {action:?}",
            self.trace.len() + 1,
            self.stack,
        );
        self.trace.push(StepTrace {
            stack: self.stack.clone(),
            symbols: self.symbols.clone(),
            state,
            lookahead: lookahead.to_string(),
            action,
        });
    }

    /// Runs the step loop over `tokens` until acceptance or failure.
    ///
    /// Step order is a deliberate precedence policy: accept, then shift, then
    /// the exact empty-marker goto, then the FOLLOW-guarded empty goto, then
    /// ordinary reduce, then failure.
    pub fn parse(&mut self, tokens: &[Token]) -> bool {
        let mut pos = 0usize;

        loop {
            let state = *self.stack.last().expect("stack holds at least the start state");
            let lookahead = tokens
                .get(pos)
                .map(|t| t.kind.as_str())
                .unwrap_or(END_MARKER);

            // Accept.
            if state == self.tables.accept_state && lookahead == END_MARKER {
                self.record(state, lookahead, StepAction::Accept);
                return true;
            }

            // Shift wins over any reduce/empty handling at the same state.
            if let Some(next) = self.tables.transition(state, lookahead) {
                self.record(state, lookahead, StepAction::Shift(next));
                self.stack.push(next);
                self.symbols.push(lookahead.to_string());
                pos += 1;
                continue;
            }

            // Exact empty-marker entry: the table row names the completed
            // empty item; what gets pushed is the goto on the rule's
            // nonterminal, never the marker destination itself.
            if let Some(marker) = self.tables.transition(state, EPSILON) {
                let rule = self
                    .tables
                    .empty_rules
                    .iter()
                    .find(|r| r.marker_state == marker);
                if let Some(rule) = rule {
                    if let Some(to) = self.tables.transition(state, &rule.nonterminal) {
                        let nonterminal = rule.nonterminal.clone();
                        self.record(
                            state,
                            lookahead,
                            StepAction::EmptyGoto {
                                nonterminal: nonterminal.clone(),
                                to,
                            },
                        );
                        self.stack.push(to);
                        self.symbols.push(nonterminal);
                        continue;
                    }
                }
            }

            // FOLLOW-guarded fallback for empty-deriving nonterminals, tried
            // in rule order.
            let guarded = self.tables.empty_rules.iter().find_map(|rule| {
                let to = self.tables.transition(state, &rule.nonterminal)?;
                self.tables
                    .follow_contains(&rule.nonterminal, lookahead)
                    .then(|| (rule.nonterminal.clone(), to))
            });
            if let Some((nonterminal, to)) = guarded {
                self.record(
                    state,
                    lookahead,
                    StepAction::EmptyGoto {
                        nonterminal: nonterminal.clone(),
                        to,
                    },
                );
                self.stack.push(to);
                self.symbols.push(nonterminal);
                continue;
            }

            // Reduce by the state's production, guarded by FOLLOW(lhs).
            if let Some(prod) = self.tables.production(state) {
                if self.tables.follow_contains(&prod.lhs, lookahead) || lookahead == END_MARKER {
                    let prod = prod.clone();
                    let popped = if prod.is_empty() { 0 } else { prod.rhs.len() };
                    // A pop past the stack bottom means the tables are
                    // inconsistent with the input, same family of fault as a
                    // missing goto.
                    let Some(exposed_idx) = self.stack.len().checked_sub(popped + 1) else {
                        self.record(state, lookahead, StepAction::Fail);
                        self.failure = Some(ParseFailure::GotoNotFound {
                            state,
                            lhs: prod.lhs,
                        });
                        return false;
                    };
                    let exposed = self.stack[exposed_idx];
                    match self.tables.transition(exposed, &prod.lhs) {
                        Some(to) => {
                            self.record(
                                state,
                                lookahead,
                                StepAction::Reduce {
                                    lhs: prod.lhs.clone(),
                                    rhs: prod.rhs.clone(),
                                    to,
                                },
                            );
                            self.stack.truncate(self.stack.len() - popped);
                            self.symbols.truncate(self.symbols.len() - popped);
                            self.stack.push(to);
                            self.symbols.push(prod.lhs);
                            continue;
                        }
                        None => {
                            self.record(state, lookahead, StepAction::Fail);
                            self.failure = Some(ParseFailure::GotoNotFound {
                                state: exposed,
                                lhs: prod.lhs,
                            });
                            return false;
                        }
                    }
                }
            }

            // Nothing applies.
            self.record(state, lookahead, StepAction::Fail);
            self.failure = Some(ParseFailure::Syntax {
                state,
                lookahead: lookahead.to_string(),
            });
            return false;
        }
    }
}
