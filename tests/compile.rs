//! End-to-end pipeline tests: the canned scenarios, semantic verdicts, the
//! lexical-fault path, and reuse across reset.

use thuumc::{
    Compiler, Error,
    lexer::tokens::TokenKind,
    semantics::Analyzer,
};

fn compiler() -> Compiler {
    Compiler::new().expect("shipped tables are well-formed")
}

#[test]
fn scenario_accepts_declaration_with_arithmetic() {
    let mut c = compiler();
    assert!(c.compile("FUS resultado := 10 + 20 - 5"));
    assert!(c.analyzer().errors().is_empty());

    // Token shape: declaration keyword, identifier, assignment marker, three
    // numerals joined by plus/minus, end marker.
    let out = thuumc::lexer::Lexer::new()
        .tokenize("FUS resultado := 10 + 20 - 5")
        .expect("tokenize");
    let kinds: Vec<TokenKind> = out.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Fus,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Num,
            TokenKind::Plus,
            TokenKind::Num,
            TokenKind::Minus,
            TokenKind::Num,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scenario_missing_assignment_marker_fails() {
    let mut c = compiler();
    assert!(!c.compile("FUS x 10 + 5"));
    assert!(c.fault().is_none(), "a syntax error is a verdict, not a fault");
}

#[test]
fn scenario_unclosed_parenthesis_fails_structurally() {
    let mut c = compiler();
    assert!(!c.compile("FUS calc := ( 5 + 3"));
    // Every word tokenized fine; the structure is what failed.
    assert_eq!(c.lex_trace().len(), 7, "one trace entry per word");
    assert!(c.fault().is_none());
    assert!(
        matches!(
            c.analyzer().engine().failure(),
            Some(thuumc::parser::ParseFailure::Syntax { lookahead, .. }) if lookahead == "$"
        ),
        "the parser fails when the end marker arrives"
    );
    assert!(c.analyzer().errors().is_empty(), "no semantic errors here");
}

#[test]
fn scenario_unknown_character_is_rejected_downstream() {
    let mut c = compiler();
    assert!(!c.compile("FUS valor := 10 @ 5"));
    let at = c
        .lex_trace()
        .iter()
        .find(|w| w.lexeme == "@")
        .expect("'@' is its own word");
    assert!(!at.accepted, "the recognizer rejects at '@'");
}

#[test]
fn declaration_then_use_is_accepted() {
    let mut c = compiler();
    assert!(c.compile("FUS x := 15 ; JUN x"));
    assert!(c.analyzer().errors().is_empty());
    assert!(c.analyzer().declared().contains("x"));
}

#[test]
fn use_before_declaration_is_a_semantic_error() {
    let mut c = compiler();
    assert!(!c.compile("JUN y + 10"));
    let errs = c.analyzer().errors();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].name, "y");
    assert_eq!(errs[0].line, 1);
}

#[test]
fn assign_does_not_declare() {
    let mut c = compiler();
    assert!(!c.compile("assign mana := 50"));
    assert_eq!(c.analyzer().errors()[0].name, "mana");
}

#[test]
fn input_of_undeclared_variable_is_a_semantic_error() {
    let mut c = compiler();
    assert!(!c.compile("HON player"));
    assert_eq!(c.analyzer().errors()[0].name, "player");
}

#[test]
fn simple_declaration_accepts() {
    let mut c = compiler();
    assert!(c.compile("FUS health := 100"));
    assert!(c.analyzer().errors().is_empty());
}

#[test]
fn lexical_fault_skips_the_parser() {
    let mut c = compiler();
    assert!(!c.compile("FUS x := 99999999999999999999"));
    assert!(
        matches!(c.fault(), Some(Error::NumOverflow(_, _))),
        "overflow must surface as a lexical fault"
    );
    assert!(
        c.analyzer().engine().trace().is_empty(),
        "the parser must not have been invoked"
    );
}

#[test]
fn lexical_fault_clears_the_previous_trace() {
    let mut c = compiler();
    assert!(c.compile("FUS x := 10 + 5"));
    assert!(!c.lex_trace().is_empty());

    assert!(!c.compile("FUS x := 99999999999999999999"));
    assert!(c.fault().is_some());
    assert!(
        c.lex_trace().is_empty(),
        "a faulting compilation must not expose the previous run's trace"
    );
}

#[test]
fn reset_permits_reuse_across_compilations() {
    let mut c = compiler();
    assert!(!c.compile("FUS x 10 + 5"));
    c.reset();
    assert!(c.compile("FUS x := 10 + 5"));
    assert!(c.analyzer().errors().is_empty());

    // Same input after reset gives the same verdict as a fresh pipeline.
    c.reset();
    let again = c.compile("FUS x := 10 + 5");
    let fresh = compiler().compile("FUS x := 10 + 5");
    assert_eq!(again, fresh);
}

#[test]
fn report_surfaces_the_outcome() {
    let mut c = compiler();
    c.compile("JUN y + 10");
    let report = c.report();
    assert!(report.contains("rejected"), "report: {report}");
    assert!(report.contains("'y'"), "report names the identifier: {report}");
}
