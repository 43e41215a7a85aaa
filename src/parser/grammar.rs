// src/parser/grammar.rs
// Grammar artifacts consumed by the SLR engine: item sets (two accepted
// shapes), action/goto transitions, FOLLOW sets, and the empty-production
// rules. Supplied fully formed and normalized to one internal Production
// representation at load time; the engine only reads them.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// The empty-sequence marker used in item sets and productions.
pub const EPSILON: &str = "ε";
/// The reserved end-of-input symbol.
pub const END_MARKER: &str = "$";
/// The dot marker inside structured items.
pub const DOT: &str = ".";

/// One LR item in the structured shape: `rhs` contains grammar symbols with
/// the dot marker somewhere among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub lhs: String,
    pub rhs: Vec<String>,
}

/// A state's item set, in either accepted shape. Textual items look like
/// `"EXPR -> TERM EXPR' ."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSet {
    Structured(Vec<Item>),
    Textual(Vec<String>),
}

/// A production derived from a state's completed item. An empty production
/// has `rhs == [EPSILON]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: String,
    pub rhs: Vec<String>,
}

impl Production {
    pub fn is_empty(&self) -> bool {
        self.rhs.len() == 1 && self.rhs[0] == EPSILON
    }
}

/// One empty-deriving nonterminal and the table row holding its completed
/// empty item. The engine tries these in order, so grammars with several
/// nullable nonterminals need no special-casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRule {
    pub nonterminal: String,
    pub marker_state: u32,
}

/// The full artifact: immutable after construction. `productions` is derived
/// from the item sets once, here, so both item-set shapes feed the engine
/// identically.
#[derive(Debug)]
pub struct GrammarTables {
    pub closures: Vec<(u32, ItemSet)>,
    transitions: HashMap<u32, HashMap<String, u32>>,
    pub terminals: HashSet<String>,
    pub nonterminals: Vec<String>,
    follow: HashMap<String, HashSet<String>>,
    pub empty_rules: Vec<EmptyRule>,
    pub start_state: u32,
    pub accept_state: u32,
    productions: HashMap<u32, Production>,
}

impl GrammarTables {
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        closures: Vec<(u32, ItemSet)>,
        transitions: Vec<(u32, String, u32)>,
        terminals: Vec<String>,
        nonterminals: Vec<String>,
        follow: Vec<(String, Vec<String>)>,
        empty_rules: Vec<EmptyRule>,
        start_state: u32,
        accept_state: u32,
    ) -> Result<Self> {
        let productions = extract_productions(&closures)?;

        let mut trans: HashMap<u32, HashMap<String, u32>> = HashMap::new();
        for (state, symbol, next) in transitions {
            trans.entry(state).or_default().insert(symbol, next);
        }

        Ok(Self {
            closures,
            transitions: trans,
            terminals: terminals.into_iter().collect(),
            nonterminals,
            follow: follow
                .into_iter()
                .map(|(nt, set)| (nt, set.into_iter().collect()))
                .collect(),
            empty_rules,
            start_state,
            accept_state,
            productions,
        })
    }

    /// Shift and goto lookups share one table; the symbol decides which.
    pub fn transition(&self, state: u32, symbol: &str) -> Option<u32> {
        self.transitions.get(&state)?.get(symbol).copied()
    }

    /// The at-most-one reducible production associated with `state`.
    pub fn production(&self, state: u32) -> Option<&Production> {
        self.productions.get(&state)
    }

    pub fn follow_contains(&self, nonterminal: &str, symbol: &str) -> bool {
        self.follow
            .get(nonterminal)
            .is_some_and(|set| set.contains(symbol))
    }
}

/// Normalizes both item-set shapes into at most one completed production per
/// state. Two completed items in one state would make the reduce step
/// ambiguous, so that is rejected as a tooling-input fault.
fn extract_productions(closures: &[(u32, ItemSet)]) -> Result<HashMap<u32, Production>> {
    let mut prods: HashMap<u32, Production> = HashMap::new();
    for (state, items) in closures {
        let completed = match items {
            ItemSet::Structured(items) => items
                .iter()
                .filter(|item| item.rhs.last().map(String::as_str) == Some(DOT))
                .map(|item| {
                    let symbols: Vec<String> = item
                        .rhs
                        .iter()
                        .filter(|s| *s != DOT && *s != EPSILON)
                        .cloned()
                        .collect();
                    Production {
                        lhs: item.lhs.clone(),
                        rhs: if symbols.is_empty() {
                            vec![EPSILON.to_string()]
                        } else {
                            symbols
                        },
                    }
                })
                .collect::<Vec<_>>(),
            ItemSet::Textual(items) => items
                .iter()
                .filter_map(|item| {
                    let (lhs, rhs) = item.split_once("->")?;
                    let rhs = rhs.trim();
                    if !rhs.ends_with(DOT) {
                        return None;
                    }
                    let body = rhs.trim_end_matches(DOT).trim();
                    let symbols: Vec<String> = if body == EPSILON || body.is_empty() {
                        vec![EPSILON.to_string()]
                    } else {
                        body.split_whitespace().map(str::to_string).collect()
                    };
                    Some(Production {
                        lhs: lhs.trim().to_string(),
                        rhs: symbols,
                    })
                })
                .collect::<Vec<_>>(),
        };

        if completed.len() > 1 {
            return Err(Error::AmbiguousState(*state));
        }
        if let Some(p) = completed.into_iter().next() {
            prods.insert(*state, p);
        }
    }
    Ok(prods)
}

// -------------------- JSON (de)serialization --------------------
// Same disk-mirror pattern as the lexer table I/O: a serde-friendly struct,
// converted once at the boundary.

#[derive(Serialize, Deserialize)]
struct GrammarDisk {
    closures: Vec<(u32, ItemSet)>,
    transitions: Vec<(u32, String, u32)>,
    terminals: Vec<String>,
    nonterminals: Vec<String>,
    follow: Vec<(String, Vec<String>)>,
    empty_rules: Vec<EmptyRule>,
    start_state: u32,
    accept_state: u32,
}

impl From<&GrammarTables> for GrammarDisk {
    fn from(t: &GrammarTables) -> Self {
        let mut transitions: Vec<(u32, String, u32)> = t
            .transitions
            .iter()
            .flat_map(|(state, row)| {
                row.iter().map(move |(sym, next)| (*state, sym.clone(), *next))
            })
            .collect();
        transitions.sort();
        let mut follow: Vec<(String, Vec<String>)> = t
            .follow
            .iter()
            .map(|(nt, set)| {
                let mut syms: Vec<String> = set.iter().cloned().collect();
                syms.sort();
                (nt.clone(), syms)
            })
            .collect();
        follow.sort();
        let mut terminals: Vec<String> = t.terminals.iter().cloned().collect();
        terminals.sort();
        Self {
            closures: t.closures.clone(),
            transitions,
            terminals,
            nonterminals: t.nonterminals.clone(),
            follow,
            empty_rules: t.empty_rules.clone(),
            start_state: t.start_state,
            accept_state: t.accept_state,
        }
    }
}

impl GrammarTables {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&GrammarDisk::from(self))
            .map_err(|e| Error::BadTables(format!("serialize: {e}")))
    }

    pub fn from_json_bytes(data: &[u8]) -> Result<Self> {
        let disk: GrammarDisk = serde_json::from_slice(data)
            .map_err(|e| Error::BadTables(format!("parse grammar JSON: {e}")))?;
        Self::from_parts(
            disk.closures,
            disk.transitions,
            disk.terminals,
            disk.nonterminals,
            disk.follow,
            disk.empty_rules,
            disk.start_state,
            disk.accept_state,
        )
    }
}
