// src/lexer/tables.rs
// Hand-built tables for the keyword automaton: the reserved vocabulary, the
// declared alphabet, the trie-shaped transition table, and the mapping from
// final configurations to token kinds. Built once at construction, never
// mutated.

use hashbrown::{HashMap, HashSet};

use super::{
    automaton::{Config, EMPTY_MARKER, WordAutomaton},
    tokens::TokenKind,
};

/// Line delimiter of the source format ('#' is reserved; it never reaches the
/// word recognizer).
pub const LINE_DELIMITER: char = '#';

/// Primary keywords. The order fixes each keyword's numeric id inside the
/// composite configuration labels, matching the legacy table rows.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("KO", TokenKind::Ko),
    ("AAN", TokenKind::Aan),
    ("FAH", TokenKind::Fah),
    ("JUN", TokenKind::Jun),
    ("FUS", TokenKind::Fus),
    ("HIM", TokenKind::Him),
    ("NUST", TokenKind::Nust),
    ("ANRK", TokenKind::Anrk),
    ("HON", TokenKind::Hon),
    ("LOS", TokenKind::Los),
    ("KEL", TokenKind::Kel),
    ("FOD", TokenKind::Fod),
];

/// The automaton plus the final-configuration → token-kind table.
///
/// `kind_of` is deliberately separate data: an accepting configuration with no
/// entry here is a table mismatch the classifier recovers from, so tests can
/// poke holes in it.
pub struct LexTables {
    pub automaton: WordAutomaton,
    pub kind_of: HashMap<Config, TokenKind>,
}

impl LexTables {
    pub fn new() -> Self {
        build_keyword_tables()
    }

    pub fn kind_of(&self, c: Config) -> Option<TokenKind> {
        self.kind_of.get(&c).copied()
    }
}

impl Default for LexTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite label for the configuration reached after scanning `prefix`:
/// one `<depth-letter><keyword-id>` marker per keyword sharing the prefix,
/// comma-joined, with the `Z` stack-bottom marker appended.
fn label_for(prefix: &str) -> String {
    let letter = (b'A' + (prefix.len() as u8 - 1)) as char;
    let mut parts: Vec<String> = KEYWORDS
        .iter()
        .enumerate()
        .filter(|(_, (kw, _))| kw.starts_with(prefix))
        .map(|(i, _)| format!("{letter}{}", i + 1))
        .collect();
    parts.push("Z".to_string());
    parts.join(",")
}

fn build_keyword_tables() -> LexTables {
    // Every non-empty prefix of every keyword is a configuration.
    let mut prefixes: Vec<String> = Vec::new();
    for (kw, _) in KEYWORDS {
        for end in 1..=kw.len() {
            let p = kw[..end].to_string();
            if !prefixes.contains(&p) {
                prefixes.push(p);
            }
        }
    }
    // Stable ids: shortest first, then lexicographic.
    prefixes.sort_by(|a, b| (a.len(), a.as_str()).cmp(&(b.len(), b.as_str())));

    let mut labels = vec!["S".to_string()];
    let mut id_of: HashMap<&str, u16> = HashMap::new();
    for p in &prefixes {
        id_of.insert(p.as_str(), labels.len() as u16);
        labels.push(label_for(p));
    }

    let mut delta: HashMap<(u16, char, char), u16> = HashMap::new();
    for p in &prefixes {
        let to = id_of[p.as_str()];
        let from = if p.len() == 1 {
            0
        } else {
            id_of[&p[..p.len() - 1]]
        };
        let ch = p.chars().last().unwrap();
        delta.insert((from, ch, EMPTY_MARKER), to);
    }

    let mut finals = HashSet::new();
    let mut kind_of = HashMap::new();
    for (kw, kind) in KEYWORDS {
        let cfg = Config(id_of[*kw]);
        finals.insert(cfg);
        kind_of.insert(cfg, *kind);
    }

    // Declared alphabet: the letters of the vocabulary plus the reserved line
    // delimiter. Lowercase letters and digits are deliberately outside it.
    let mut alphabet: HashSet<char> = KEYWORDS.iter().flat_map(|(kw, _)| kw.chars()).collect();
    alphabet.insert(LINE_DELIMITER);

    LexTables {
        automaton: WordAutomaton::new(labels, Config(0), finals, alphabet, delta),
        kind_of,
    }
}
