// src/lexer/automaton.rs
// Stack-automaton word recognizer. Word scanning never pushes or pops a
// non-empty stack symbol, so the walk degenerates to a DFA over interned
// configurations.

use hashbrown::{HashMap, HashSet};

/// Stack marker used by every word-scanning transition (the stack is never
/// touched mid-word).
pub const EMPTY_MARKER: char = 'ε';

/// An interned automaton configuration. The composite label (e.g. `"B1,Z"`)
/// is opaque: equality and final-set membership are the only operations the
/// recognizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config(pub u16);

/// Outcome of scanning one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognition {
    /// Ended in a declared final configuration.
    Accepted(Config),
    /// Character outside the alphabet, missing transition, or non-final end
    /// configuration. The first failure is final; there is no backtracking.
    Rejected,
}

/// A fully materialized word automaton: transition table keyed by
/// (configuration, input character, stack marker), loaded once and never
/// mutated.
pub struct WordAutomaton {
    labels: Vec<String>,
    start: Config,
    finals: HashSet<Config>,
    alphabet: HashSet<char>,
    delta: HashMap<(u16, char, char), u16>,
}

impl WordAutomaton {
    pub fn new(
        labels: Vec<String>,
        start: Config,
        finals: HashSet<Config>,
        alphabet: HashSet<char>,
        delta: HashMap<(u16, char, char), u16>,
    ) -> Self {
        debug_assert!((start.0 as usize) < labels.len());
        Self {
            labels,
            start,
            finals,
            alphabet,
            delta,
        }
    }

    pub fn label(&self, c: Config) -> &str {
        &self.labels[c.0 as usize]
    }

    pub fn is_final(&self, c: Config) -> bool {
        self.finals.contains(&c)
    }

    /// Walks the transition table over `word`, one character at a time.
    pub fn recognize(&self, word: &str) -> Recognition {
        let mut cur = self.start;
        for ch in word.chars() {
            if !self.alphabet.contains(&ch) {
                return Recognition::Rejected;
            }
            match self.delta.get(&(cur.0, ch, EMPTY_MARKER)) {
                Some(&next) => cur = Config(next),
                None => return Recognition::Rejected,
            }
        }
        if self.is_final(cur) {
            Recognition::Accepted(cur)
        } else {
            Recognition::Rejected
        }
    }
}
