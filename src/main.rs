// src/main.rs

use anyhow::Result;
use thuumc::Compiler;

fn main() -> Result<()> {
    // Canned scenarios covering acceptance, syntax errors, semantic errors,
    // and the lexical fallback paths.
    let scenarios: &[(&str, &str)] = &[
        ("declaration with arithmetic", "FUS resultado := 10 + 20 - 5"),
        ("declare then return", "FUS x := 15 ; JUN x"),
        ("missing assignment marker", "FUS x 10 + 5"),
        ("use before declaration", "JUN y + 10"),
        ("character outside the alphabet", "FUS valor := 10 @ 5"),
        ("unclosed parenthesis", "FUS calc := ( 5 + 3"),
    ];

    let mut compiler = Compiler::new()?;
    for (name, source) in scenarios {
        let verdict = compiler.compile(source);
        println!("== {name}");
        println!("   source:  {source}");
        println!("   verdict: {}", if verdict { "accepted" } else { "rejected" });
        for line in compiler.report().lines() {
            println!("   {line}");
        }
        for w in compiler.lex_trace() {
            println!(
                "   line {}: {:<12} -> {:<10} {}",
                w.line,
                w.lexeme,
                w.config.as_deref().unwrap_or("X"),
                if w.accepted { "accepted" } else { "rejected" },
            );
        }
        println!();
        compiler.reset();
    }
    Ok(())
}
