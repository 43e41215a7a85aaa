// src/parser/tables.rs
// The concrete SLR(1) artifact for the teaching-language grammar:
//
//    0: S'    -> PROG            8: EXPR  -> TERM EXPR'
//    1: PROG  -> STMT            9: EXPR' -> + TERM EXPR'
//    2: PROG  -> STMT ; PROG    10: EXPR' -> - TERM EXPR'
//    3: STMT  -> FUS id := EXPR 11: EXPR' -> ε
//    4: STMT  -> assign id := EXPR  12: TERM -> num
//    5: STMT  -> JUN EXPR       13: TERM  -> id
//    6: STMT  -> print EXPR     14: TERM  -> ( EXPR )
//    7: STMT  -> HON id
//
// States are the canonical LR(0) collection (kernels listed below); state 1
// is the accepting state, state 32 holds the completed empty item for EXPR'.

use crate::{
    errors::Result,
    parser::grammar::{EmptyRule, GrammarTables, Item, ItemSet},
};

/// Kernel item sets per state, in the structured shape.
const KERNELS: &[(u32, &[(&str, &[&str])])] = &[
    (0, &[("S'", &[".", "PROG"])]),
    (1, &[("S'", &["PROG", "."])]),
    (2, &[("PROG", &["STMT", "."]), ("PROG", &["STMT", ".", ";", "PROG"])]),
    (3, &[("STMT", &["FUS", ".", "id", ":=", "EXPR"])]),
    (4, &[("STMT", &["assign", ".", "id", ":=", "EXPR"])]),
    (5, &[("STMT", &["JUN", ".", "EXPR"])]),
    (6, &[("STMT", &["print", ".", "EXPR"])]),
    (7, &[("STMT", &["HON", ".", "id"])]),
    (8, &[("PROG", &["STMT", ";", ".", "PROG"])]),
    (9, &[("STMT", &["FUS", "id", ".", ":=", "EXPR"])]),
    (10, &[("STMT", &["assign", "id", ".", ":=", "EXPR"])]),
    (11, &[("STMT", &["JUN", "EXPR", "."])]),
    (12, &[("EXPR", &["TERM", ".", "EXPR'"])]),
    (13, &[("TERM", &["num", "."])]),
    (14, &[("TERM", &["id", "."])]),
    (15, &[("TERM", &["(", ".", "EXPR", ")"])]),
    (16, &[("STMT", &["print", "EXPR", "."])]),
    (17, &[("STMT", &["HON", "id", "."])]),
    (18, &[("PROG", &["STMT", ";", "PROG", "."])]),
    (19, &[("STMT", &["FUS", "id", ":=", ".", "EXPR"])]),
    (20, &[("STMT", &["assign", "id", ":=", ".", "EXPR"])]),
    (21, &[("EXPR", &["TERM", "EXPR'", "."])]),
    (22, &[("EXPR'", &["+", ".", "TERM", "EXPR'"])]),
    (23, &[("EXPR'", &["-", ".", "TERM", "EXPR'"])]),
    (24, &[("TERM", &["(", "EXPR", ".", ")"])]),
    (25, &[("STMT", &["FUS", "id", ":=", "EXPR", "."])]),
    (26, &[("STMT", &["assign", "id", ":=", "EXPR", "."])]),
    (27, &[("EXPR'", &["+", "TERM", ".", "EXPR'"])]),
    (28, &[("EXPR'", &["-", "TERM", ".", "EXPR'"])]),
    (29, &[("TERM", &["(", "EXPR", ")", "."])]),
    (30, &[("EXPR'", &["+", "TERM", "EXPR'", "."])]),
    (31, &[("EXPR'", &["-", "TERM", "EXPR'", "."])]),
    (32, &[("EXPR'", &["ε", "."])]),
];

/// Shift and goto rows in one table; the `ε` rows at 12/27/28 mark where the
/// empty production applies.
const TRANSITIONS: &[(u32, &str, u32)] = &[
    (0, "FUS", 3),
    (0, "assign", 4),
    (0, "JUN", 5),
    (0, "print", 6),
    (0, "HON", 7),
    (0, "PROG", 1),
    (0, "STMT", 2),
    (2, ";", 8),
    (3, "id", 9),
    (4, "id", 10),
    (5, "num", 13),
    (5, "id", 14),
    (5, "(", 15),
    (5, "EXPR", 11),
    (5, "TERM", 12),
    (6, "num", 13),
    (6, "id", 14),
    (6, "(", 15),
    (6, "EXPR", 16),
    (6, "TERM", 12),
    (7, "id", 17),
    (8, "FUS", 3),
    (8, "assign", 4),
    (8, "JUN", 5),
    (8, "print", 6),
    (8, "HON", 7),
    (8, "PROG", 18),
    (8, "STMT", 2),
    (9, ":=", 19),
    (10, ":=", 20),
    (12, "+", 22),
    (12, "-", 23),
    (12, "EXPR'", 21),
    (12, "ε", 32),
    (15, "num", 13),
    (15, "id", 14),
    (15, "(", 15),
    (15, "EXPR", 24),
    (15, "TERM", 12),
    (19, "num", 13),
    (19, "id", 14),
    (19, "(", 15),
    (19, "EXPR", 25),
    (19, "TERM", 12),
    (20, "num", 13),
    (20, "id", 14),
    (20, "(", 15),
    (20, "EXPR", 26),
    (20, "TERM", 12),
    (22, "num", 13),
    (22, "id", 14),
    (22, "(", 15),
    (22, "TERM", 27),
    (23, "num", 13),
    (23, "id", 14),
    (23, "(", 15),
    (23, "TERM", 28),
    (24, ")", 29),
    (27, "+", 22),
    (27, "-", 23),
    (27, "EXPR'", 30),
    (27, "ε", 32),
    (28, "+", 22),
    (28, "-", 23),
    (28, "EXPR'", 31),
    (28, "ε", 32),
];

const TERMINALS: &[&str] = &[
    "FUS", "assign", "JUN", "print", "HON", "id", "num", ":=", ";", "+", "-", "(", ")",
];

const NONTERMINALS: &[&str] = &["S'", "PROG", "STMT", "EXPR", "EXPR'", "TERM"];

const FOLLOW: &[(&str, &[&str])] = &[
    ("S'", &["$"]),
    ("PROG", &["$"]),
    ("STMT", &[";", "$"]),
    ("EXPR", &[";", ")", "$"]),
    ("EXPR'", &[";", ")", "$"]),
    ("TERM", &["+", "-", ";", ")", "$"]),
];

/// Builds the teaching-language grammar artifact.
pub fn thuum_grammar() -> Result<GrammarTables> {
    let closures = KERNELS
        .iter()
        .map(|(state, items)| {
            let items = items
                .iter()
                .map(|(lhs, rhs)| Item {
                    lhs: lhs.to_string(),
                    rhs: rhs.iter().map(|s| s.to_string()).collect(),
                })
                .collect();
            (*state, ItemSet::Structured(items))
        })
        .collect();

    GrammarTables::from_parts(
        closures,
        TRANSITIONS
            .iter()
            .map(|(s, sym, n)| (*s, sym.to_string(), *n))
            .collect(),
        TERMINALS.iter().map(|s| s.to_string()).collect(),
        NONTERMINALS.iter().map(|s| s.to_string()).collect(),
        FOLLOW
            .iter()
            .map(|(nt, set)| (nt.to_string(), set.iter().map(|s| s.to_string()).collect()))
            .collect(),
        vec![EmptyRule {
            nonterminal: "EXPR'".to_string(),
            marker_state: 32,
        }],
        0,
        1,
    )
}
