// mjc - A MiniJava compiler emitting textual LLVM IR
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Property-based fuzz tests for the MiniJava compiler.
//!
//! These tests use proptest to generate random inputs and verify
//! that the compiler handles them gracefully (no panics).
//!
//! Unlike cargo-fuzz, these tests run on stable Rust.

use proptest::prelude::*;

fn in_main(body: &str) -> String {
    format!(
        "class Main {{ public static void main(String[] a) {{ {} }} }}",
        body
    )
}

// ============================================================================
// Lexer Fuzzing
// ============================================================================

proptest! {
    /// Fuzz the lexer with random ASCII strings.
    /// The lexer should never panic, only return Ok or Err.
    #[test]
    fn fuzz_lexer_ascii(s in "[ -~]{0,500}") {
        let _ = mjc::lexer::tokenize(&s);
    }

    /// Fuzz the lexer with random bytes (may include invalid UTF-8).
    #[test]
    fn fuzz_lexer_bytes(bytes in prop::collection::vec(any::<u8>(), 0..500)) {
        if let Ok(s) = String::from_utf8(bytes) {
            let _ = mjc::lexer::tokenize(&s);
        }
    }

    /// Fuzz with strings that look like MiniJava code.
    #[test]
    fn fuzz_lexer_codelike(
        keyword in prop::sample::select(vec![
            "class", "extends", "public", "return", "int", "boolean",
            "if", "else", "while", "true", "false", "this", "new", "length",
        ]),
        ident in "[a-zA-Z][a-zA-Z0-9_]{0,10}",
        num in 0u32..=2147483647,
        op in prop::sample::select(vec![
            "+", "-", "*", "<", "&&", "!", "=", ".", ";", ",",
            "(", ")", "[", "]", "{", "}",
        ]),
    ) {
        let source = format!("{} {} {} {} {}", keyword, ident, op, num, ident);
        let tokens = mjc::lexer::tokenize(&source);
        prop_assert!(tokens.is_ok(), "{:?}", tokens.err());
    }

    /// Comments never produce tokens, whatever they contain.
    #[test]
    fn fuzz_lexer_comments(
        line in "[ -~]{0,80}",
        block in "[a-zA-Z0-9 ;{}()\\n]{0,80}",
    ) {
        let source = format!("/* {} */ // {}\n", block, line);
        let tokens = mjc::lexer::tokenize(&source);
        prop_assert_eq!(tokens.map(|t| t.len()).ok(), Some(0));
    }
}

// ============================================================================
// Parser Fuzzing
// ============================================================================

proptest! {
    /// Fuzz the parser with random method-like structures.
    #[test]
    fn fuzz_parser_method(
        name in "[a-z][a-z0-9_]{0,10}",
        body in "[ a-z0-9_=+\\-*<!;&().\\[\\]]{0,100}",
    ) {
        let source = format!(
            "class Main {{ public static void main(String[] a) {{ }} }} class A {{ public int {}() {{ {} return 0; }} }}",
            name, body
        );
        if let Ok(tokens) = mjc::lexer::tokenize(&source) {
            let _ = mjc::parser::parse(&tokens);
        }
    }

    /// Fuzz with nested control structures.
    #[test]
    fn fuzz_parser_control_flow(
        depth in 1usize..8,
        var in "[a-z]",
        looped in any::<bool>(),
    ) {
        let mut body = format!("{} = {} - 1;", var, var);
        for _ in 0..depth {
            body = if looped {
                format!("while (0 < {}) {{ {} }}", var, body)
            } else {
                format!("if (0 < {}) {{ {} }} else {{ }}", var, body)
            };
        }
        let source = in_main(&format!("int {}; {} = 5; {}", var, var, body));

        let tokens = mjc::lexer::tokenize(&source);
        prop_assert!(tokens.is_ok());
        if let Ok(tokens) = tokens {
            prop_assert!(mjc::parser::parse(&tokens).is_ok());
        }
    }
}

// ============================================================================
// Compiler Pipeline Fuzzing
// ============================================================================

proptest! {
    /// Fuzz the complete compiler with single statements.
    #[test]
    fn fuzz_compiler_statements(
        stmt in prop::sample::select(vec![
            "",
            "{ }",
            "System.out.println(1);",
            "while (false) { }",
            "if (true) { } else { }",
            "x = x;",
            "b = !b;",
            "xs = new int[x];",
            "xs[0] = xs.length;",
        ]),
    ) {
        let source = in_main(&format!("int x; boolean b; int[] xs; {}", stmt));
        prop_assert!(mjc::compile(&source).is_ok());
    }

    /// Fuzz with arithmetic expressions.
    #[test]
    fn fuzz_compiler_arithmetic(
        a in 0u32..100000,
        b in 0u32..100000,
        op in prop::sample::select(vec!["+", "-", "*"]),
    ) {
        let source = in_main(&format!("System.out.println({} {} {});", a, op, b));
        let module = mjc::compile(&source);
        prop_assert!(module.is_ok());
        if let Ok(module) = module {
            let expected = format!("i32 {}, {}", a, b);
            prop_assert!(module.contains(&expected));
        }
    }

    /// Fuzz with comparisons and logic, which must stay boolean.
    #[test]
    fn fuzz_compiler_logic(
        a in 0u32..1000,
        b in 0u32..1000,
        negate in any::<bool>(),
    ) {
        let cond = format!("{}({} < {}) && true", if negate { "!" } else { "" }, a, b);
        let source = in_main(&format!("boolean c; c = {};", cond));
        prop_assert!(mjc::compile(&source).is_ok());
    }

    /// Booleans never flow into int slots.
    #[test]
    fn fuzz_compiler_rejects_boolean_in_arithmetic(
        op in prop::sample::select(vec!["+", "-", "*", "<"]),
        left in any::<bool>(),
    ) {
        let expr = if left {
            format!("true {} 1", op)
        } else {
            format!("1 {} false", op)
        };
        let source = in_main(&format!("System.out.println({});", expr));
        prop_assert!(mjc::compile(&source).is_err());
    }
}

// ============================================================================
// Edge Case Fuzzing
// ============================================================================

proptest! {
    /// Fuzz with deeply nested parentheses.
    #[test]
    fn fuzz_nested_parens(depth in 1usize..60) {
        let opens: String = "(".repeat(depth);
        let closes: String = ")".repeat(depth);
        let source = in_main(&format!("System.out.println({}1{});", opens, closes));
        prop_assert!(mjc::compile(&source).is_ok());
    }

    /// Nesting past the parser limit is an error, never a crash.
    #[test]
    fn fuzz_nesting_beyond_limit(
        depth in 100usize..3000,
        open in prop::sample::select(vec!["(", "!", "while (true) "]),
    ) {
        let body = if open == "(" {
            format!("System.out.println({}1{});", open.repeat(depth), ")".repeat(depth))
        } else if open == "!" {
            format!("boolean b; b = {}true;", open.repeat(depth))
        } else {
            format!("{}{{ }}", open.repeat(depth))
        };
        let result = mjc::compile(&in_main(&body));
        prop_assert!(result.is_err());
    }

    /// Fuzz with long identifiers.
    #[test]
    fn fuzz_long_identifiers(name in "[a-z_]{1,100}") {
        let source = in_main(&format!("int {}; {} = 1;", name, name));
        let _ = mjc::compile(&source);
    }

    /// Fuzz with boundary numbers.
    #[test]
    fn fuzz_boundary_numbers(n in prop::sample::select(vec![
        0u64, 1, 127, 128, 255, 65535, 2147483647, 2147483648, 4294967295, 99999999999,
    ])) {
        let source = in_main(&format!("System.out.println({});", n));
        let result = mjc::compile(&source);
        prop_assert_eq!(result.is_ok(), n <= i32::MAX as u64);
    }
}

// ============================================================================
// Stress Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    /// Stress test with many statements.
    #[test]
    fn fuzz_many_statements(count in 1usize..50) {
        let mut body = String::new();
        for i in 0..count {
            body.push_str(&format!("int x{}; ", i));
        }
        for i in 0..count {
            body.push_str(&format!("x{} = {}; ", i, i));
        }
        prop_assert!(mjc::compile(&in_main(&body)).is_ok());
    }

    /// Stress test with many classes.
    #[test]
    fn fuzz_many_classes(count in 1usize..20) {
        let mut source = in_main("");
        for i in 0..count {
            source.push_str(&format!(
                "\nclass K{} {{ int v; public int get(int x) {{ v = x; return v; }} }}",
                i
            ));
        }
        let module = mjc::compile(&source);
        prop_assert!(module.is_ok());
        if let Ok(module) = module {
            prop_assert_eq!(module.matches("_vtable = global").count(), count);
        }
    }
}

// ============================================================================
// Invariant Tests
// ============================================================================

proptest! {
    /// Verify that tokenizing never produces overlapping spans.
    #[test]
    fn invariant_token_spans_non_overlapping(s in "[a-z0-9 +\\-*<=!&;.()\\[\\]{}]{0,200}") {
        if let Ok(tokens) = mjc::lexer::tokenize(&s) {
            let mut last_end = 0;
            for (_, span) in &tokens {
                prop_assert!(span.start >= last_end,
                    "Token spans overlap: last_end={}, span.start={}", last_end, span.start);
                prop_assert!(span.start <= span.end,
                    "Invalid span: start={} > end={}", span.start, span.end);
                last_end = span.end;
            }
        }
    }

    /// Verify that compilation either succeeds or fails gracefully.
    #[test]
    fn invariant_no_panic(s in "[ -~]{0,300}") {
        let result = std::panic::catch_unwind(|| {
            let _ = mjc::compile(&s);
        });
        prop_assert!(result.is_ok(), "Compiler panicked on input");
    }
}
