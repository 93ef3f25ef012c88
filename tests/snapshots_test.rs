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

//! Snapshot tests for the MiniJava compiler.
//!
//! These tests use the `insta` crate to capture and verify output
//! from various compiler stages.

use mjc::{compile, error::format_error, lexer, Span, Token};
use pretty_assertions::assert_eq;

// ============================================================================
// Lexer Snapshot Tests
// ============================================================================

/// Format tokens for snapshot comparison.
fn format_tokens(tokens: &[(Token, Span)]) -> String {
    let mut output = String::new();
    for (token, span) in tokens {
        output.push_str(&format!("{:?} @ {}..{}\n", token, span.start, span.end));
    }
    output
}

#[test]
fn test_lexer_snapshot_statement() {
    let tokens = lexer::tokenize("x = a[1] && !b;").unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r###"
Identifier("x") @ 0..1
Equal @ 2..3
Identifier("a") @ 4..5
LeftBracket @ 5..6
Integer(1) @ 6..7
RightBracket @ 7..8
AndAnd @ 9..11
Bang @ 12..13
Identifier("b") @ 13..14
Semicolon @ 14..15
"###);
}

#[test]
fn test_lexer_snapshot_comments_and_println() {
    let tokens = lexer::tokenize("/* a */ System.out.println(7); // b").unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r###"
Println @ 8..26
LeftParen @ 26..27
Integer(7) @ 27..28
RightParen @ 28..29
Semicolon @ 29..30
"###);
}

// ============================================================================
// Code Generation Snapshot Tests
// ============================================================================

/// Cut the module down to its functions, dropping vtables and the prelude.
fn functions(module: &str) -> &str {
    let start = module.find("define i32 @main()").unwrap();
    &module[start..]
}

#[test]
fn test_codegen_snapshot_field_getter() {
    let module = compile(
        "class Main { public static void main(String[] a) { System.out.println(new A().get()); } }
         class A { int f; public int get() { return f; } }",
    )
    .unwrap();

    assert!(module.starts_with(
        "@.A_vtable = global [1 x i8*] [i8* bitcast (i32 (i8*)* @A.get to i8*)]\n\ndeclare"
    ));
    insta::assert_snapshot!(functions(&module), @r###"
define i32 @main() {
fn.entry:
	%_0 = call i8* @calloc(i32 1, i32 12)
	%_1 = bitcast i8* %_0 to i8***
	%_2 = getelementptr [1 x i8*], [1 x i8*]* @.A_vtable, i32 0, i32 0
	store i8** %_2, i8*** %_1
	; A.get
	%_3 = bitcast i8* %_0 to i8***
	%_4 = load i8**, i8*** %_3
	%_5 = getelementptr i8*, i8** %_4, i32 0
	%_6 = load i8*, i8** %_5
	%_7 = bitcast i8* %_6 to i32 (i8*)*
	%_8 = call i32 %_7(i8* %_0)
	call void @print_int(i32 %_8)
	ret i32 0
}

define i32 @A.get(i8* %this) {
fn.entry:
	%_0 = getelementptr i8, i8* %this, i32 8
	%_1 = bitcast i8* %_0 to i32*
	%_2 = load i32, i32* %_1
	ret i32 %_2
}
"###);
}

#[test]
fn test_codegen_snapshot_array_length() {
    let module = compile(
        "class Main { public static void main(String[] a) { int[] xs; xs = new int[3]; System.out.println(xs.length); } }",
    )
    .unwrap();

    insta::assert_snapshot!(functions(&module), @r###"
define i32 @main() {
fn.entry:
	%xs = alloca i32*
	br label %nsz.check.0
nsz.check.0:
	%_0 = icmp slt i32 3, 0
	br i1 %_0, label %nsz.err.0, label %nsz.ok.0
nsz.err.0:
	call void @throw_nsz()
	br label %nsz.ok.0
nsz.ok.0:
	%_1 = add i32 3, 1
	%_2 = call i8* @calloc(i32 %_1, i32 4)
	%_3 = bitcast i8* %_2 to i32*
	store i32 3, i32* %_3
	store i32* %_3, i32** %xs
	%_4 = load i32*, i32** %xs
	%_5 = load i32, i32* %_4
	call void @print_int(i32 %_5)
	ret i32 0
}
"###);
}

// ============================================================================
// Error Formatting Tests
// ============================================================================

#[test]
fn test_error_format_type_mismatch() {
    let source = "class Main {\n    public static void main(String[] a) {\n        int x;\n        x = true;\n    }\n}\n";
    let err = compile(source).unwrap_err();

    assert_eq!(
        format_error(&err, source, Some("Test.java")),
        "error[E220]: cannot assign boolean to 'x' of type int\n  \
         --> Test.java:4:13\n  \
         |\n\
         4 |         x = true;\n  \
         |             ^^^^\n"
    );
}
