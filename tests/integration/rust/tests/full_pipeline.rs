//! Full Pipeline Integration Tests
//!
//! Drives the compiler components together: lexer through parser,
//! declaration context and code generator, against the one-call driver.

use compiler::{
    compile, CodeGenerator, DeclarationContext, Lexer, Parser, TokenKind,
};

/// Test: The lexer classifies a whole statement correctly
#[test]
fn test_pipeline_token_stream() {
    let mut lexer = Lexer::new("total += price[i] * 1.5\n");
    let mut kinds = Vec::new();

    while let Some(token) = lexer.next_token().expect("lexing failed") {
        kinds.push(token.kind);
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Name,
            TokenKind::Assignment,
            TokenKind::Name,
            TokenKind::Separator,
            TokenKind::Name,
            TokenKind::Separator,
            TokenKind::Operator,
            TokenKind::Real,
            TokenKind::NewLine,
        ]
    );
}

/// Test: Hand-assembled pipeline produces the same text as the driver
#[test]
fn test_pipeline_matches_driver() {
    let source = "count = 0\nif ready\n count += 1\n end";

    let mut parser = Parser::new(source);
    let program = parser.parse_program().expect("parsing failed");

    let mut context = DeclarationContext::with_seeds(&[], &["print".to_string()]);
    context.collect(&program);

    let code = CodeGenerator::new()
        .generate(&program)
        .expect("generation failed");
    let assembled = format!("{} {}", context.compile_locals(), code);

    assert_eq!(assembled, compile(source).expect("compile failed"));
}

/// Test: A program using every command form compiles end to end
#[test]
fn test_pipeline_full_program() {
    let source = "total = 0\nfor x in items\n if x > 10\n total += x\n else\n skipped += 1\n end\nend\nprint(total)";

    assert_eq!(
        compile(source).expect("compile failed"),
        "var total, x, items, skipped; total = 0; \
         for (x in items) { if (x > 10) { total += x; } else { skipped += 1; } } \
         print(total);"
    );
}

/// Test: Functions, calls and loops compose
#[test]
fn test_pipeline_function_program() {
    let source = "function double(x)\n return x + x\nend\nn = double(21)\nprint(n)";

    assert_eq!(
        compile(source).expect("compile failed"),
        "var x, n, double; function double(x) { return x + x; } n = double(21); print(n);"
    );
}

/// Test: While loops with break compose
#[test]
fn test_pipeline_while_break() {
    let source = "n = 0\nwhile 1\n n += 1\n if n > 3 break\nend\nprint(n)";

    assert_eq!(
        compile(source).expect("compile failed"),
        "var n; n = 0; while (1) { n += 1; if (n > 3) { break; } } print(n);"
    );
}

/// Test: Errors surface across the component boundary unchanged
#[test]
fn test_pipeline_error_propagation() {
    let err = compile("if a\nb").expect_err("expected compile failure");
    assert_eq!(err.message, "expected 'end'");

    let err = compile("'open").expect_err("expected compile failure");
    assert_eq!(err.message, "unclosed string");
}
