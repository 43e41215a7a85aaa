//! SLR engine tests: the end-to-end scenarios, the stack invariant, reset
//! idempotence, and the two distinct failure conditions.

use thuumc::{
    lexer::{Lexer, tokens::Token},
    parser::{
        ParseFailure, SlrEngine, StepAction, StepTrace,
        grammar::{EmptyRule, GrammarTables, Item, ItemSet},
        tables::thuum_grammar,
    },
};

fn tokens_of(source: &str) -> Vec<Token> {
    Lexer::new()
        .tokenize(source)
        .expect("tokenize should not fault")
        .tokens
}

fn engine() -> SlrEngine {
    SlrEngine::new(thuum_grammar().expect("shipped tables are well-formed"))
}

#[test]
fn accepts_declaration_with_arithmetic() {
    let mut eng = engine();
    assert!(eng.parse(&tokens_of("FUS resultado := 10 + 20 - 5")));
    assert_eq!(eng.failure(), None);
    assert!(
        matches!(eng.trace().last().map(|s| &s.action), Some(StepAction::Accept)),
        "last step should be the acceptance"
    );
}

#[test]
fn accepts_statement_sequence() {
    let mut eng = engine();
    assert!(eng.parse(&tokens_of("FUS x := 15 ; JUN x")));
}

#[test]
fn accepts_parenthesized_expression() {
    let mut eng = engine();
    assert!(eng.parse(&tokens_of("JUN ( 1 + 2 ) - 3")));
}

#[test]
fn missing_assignment_marker_is_a_syntax_error() {
    let mut eng = engine();
    assert!(!eng.parse(&tokens_of("FUS x 10 + 5")));
    // The engine halts in the state expecting ':=' with the numeral as
    // lookahead.
    assert_eq!(
        eng.failure(),
        Some(&ParseFailure::Syntax {
            state: 9,
            lookahead: "num".to_string()
        })
    );
}

#[test]
fn unclosed_parenthesis_fails_at_end_marker() {
    let mut eng = engine();
    assert!(!eng.parse(&tokens_of("FUS calc := ( 5 + 3")));
    match eng.failure() {
        Some(ParseFailure::Syntax { lookahead, .. }) => {
            assert_eq!(lookahead, "$", "failure arrives with the end marker")
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn empty_production_fires_through_the_marker_row() {
    let mut eng = engine();
    assert!(eng.parse(&tokens_of("JUN 1")));
    assert!(
        eng.trace().iter().any(|s| matches!(
            &s.action,
            StepAction::EmptyGoto { nonterminal, .. } if nonterminal == "EXPR'"
        )),
        "EXPR' must be produced by empty reduction, never shifted"
    );
    assert!(
        !eng.trace().iter().any(|s| matches!(
            &s.action,
            StepAction::Shift(_) if s.lookahead == "EXPR'"
        )),
        "EXPR' is never a shifted lookahead"
    );
}

#[test]
fn stack_invariant_holds_at_every_step() {
    let mut eng = engine();
    eng.parse(&tokens_of("FUS resultado := ( 10 + 20 ) - 5"));
    for (i, step) in eng.trace().iter().enumerate() {
        assert_eq!(
            step.symbols.len(),
            step.stack.len() - 1,
            "symbol stack must trail the state stack by one at step {i}"
        );
    }
}

#[test]
fn reset_is_idempotent() {
    let toks = tokens_of("FUS x := 1 + 2");
    let mut eng = engine();
    let first = eng.parse(&toks);
    let first_trace: Vec<StepTrace> = eng.trace().to_vec();

    eng.reset();
    let second = eng.parse(&toks);
    assert_eq!(first, second, "verdict must not change across reset");
    assert_eq!(first_trace, eng.trace(), "trace must not change across reset");

    let mut fresh = engine();
    assert_eq!(fresh.parse(&toks), first, "fresh instance agrees too");
    assert_eq!(fresh.trace(), first_trace.as_slice());
}

#[test]
fn acceptance_is_deterministic() {
    let toks = tokens_of("FUS x := 15 ; JUN x");
    for _ in 0..3 {
        let mut eng = engine();
        assert!(eng.parse(&toks), "fixed tables + fixed tokens = fixed verdict");
    }
}

#[test]
fn missing_goto_is_reported_as_a_table_fault() {
    // A grammar whose reduce has nowhere to go: state 2 completes
    // `TERM -> num .` but no state carries a goto on TERM.
    let tables = GrammarTables::from_parts(
        vec![(2, ItemSet::Textual(vec!["TERM -> num .".to_string()]))],
        vec![(0, "num".to_string(), 2)],
        vec!["num".to_string()],
        vec!["TERM".to_string()],
        vec![("TERM".to_string(), vec!["$".to_string()])],
        vec![],
        0,
        1,
    )
    .expect("tables load");
    let mut eng = SlrEngine::new(tables);
    assert!(!eng.parse(&tokens_of("7")));
    assert_eq!(
        eng.failure(),
        Some(&ParseFailure::GotoNotFound {
            state: 0,
            lhs: "TERM".to_string()
        })
    );
}

#[test]
fn follow_guard_fires_when_no_marker_row_exists() {
    // Minimal grammar exercising the FOLLOW-guarded empty goto: OPT derives
    // the empty string, state 2 has a goto on OPT but no empty-marker row.
    let tables = GrammarTables::from_parts(
        vec![
            (1, ItemSet::Structured(vec![Item {
                lhs: "S'".to_string(),
                rhs: vec!["S".to_string(), ".".to_string()],
            }])),
            (3, ItemSet::Structured(vec![Item {
                lhs: "S".to_string(),
                rhs: vec!["num".to_string(), "OPT".to_string(), ".".to_string()],
            }])),
            (4, ItemSet::Structured(vec![Item {
                lhs: "OPT".to_string(),
                rhs: vec!["ε".to_string(), ".".to_string()],
            }])),
        ],
        vec![
            (0, "num".to_string(), 2),
            (0, "S".to_string(), 1),
            (2, "OPT".to_string(), 3),
        ],
        vec!["num".to_string()],
        vec!["S'".to_string(), "S".to_string(), "OPT".to_string()],
        vec![
            ("S".to_string(), vec!["$".to_string()]),
            ("OPT".to_string(), vec!["$".to_string()]),
        ],
        vec![EmptyRule {
            nonterminal: "OPT".to_string(),
            marker_state: 4,
        }],
        0,
        1,
    )
    .expect("tables load");

    let mut eng = SlrEngine::new(tables);
    assert!(eng.parse(&tokens_of("7")));
    assert!(
        eng.trace().iter().any(|s| matches!(
            &s.action,
            StepAction::EmptyGoto { nonterminal, .. } if nonterminal == "OPT"
        )),
        "the guarded path must have produced OPT"
    );
}
