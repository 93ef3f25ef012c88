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

//! Negative/Error tests for the MiniJava compiler.
//!
//! These tests verify that the compiler correctly rejects invalid programs
//! and reports the first violation with the right error code.

use mjc::error::Phase;
use mjc::{compile, lexer, ErrorCode};
use test_case::test_case;

/// Wrap statements into the entry method.
fn in_main(body: &str) -> String {
    format!(
        "class Main {{ public static void main(String[] args) {{ {} }} }}",
        body
    )
}

/// An entry class that does nothing, followed by `classes`.
fn with_classes(classes: &str) -> String {
    format!(
        "class Main {{ public static void main(String[] args) {{ }} }} {}",
        classes
    )
}

fn compile_err(source: &str) -> ErrorCode {
    match compile(source) {
        Ok(_) => panic!("Expected an error for:\n{}", source),
        Err(e) => e.code,
    }
}

// ============================================================================
// Lexer Error Tests
// ============================================================================

/// Test that the lexer rejects characters outside the language.
#[test_case("int x; x = 1 @ 2;"; "at_sign")]
#[test_case("int x; x = 1 / 2;"; "slash")]
#[test_case("int x; x = 1 % 2;"; "percent")]
#[test_case("int x; x = \"s\";"; "string_literal")]
fn test_lexer_invalid_characters(body: &str) {
    let err = lexer::tokenize(&in_main(body)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCharacter);
}

/// Test that integer literals must fit into an int.
#[test_case("2147483648"; "one_past_max")]
#[test_case("99999999999"; "far_too_large")]
fn test_lexer_integer_too_large(literal: &str) {
    let err = lexer::tokenize(&in_main(&format!("System.out.println({});", literal))).unwrap_err();
    assert_eq!(err.code, ErrorCode::IntegerLiteralTooLarge);
}

#[test]
fn test_lexer_max_integer_accepted() {
    assert!(compile(&in_main("System.out.println(2147483647);")).is_ok());
}

// ============================================================================
// Parser Error Tests
// ============================================================================

/// Test that malformed programs fail in the parser.
#[test_case("class Main {"; "unclosed_class")]
#[test_case("class Main { public static void main(String[] a) { x = ; } }"; "missing_expression")]
#[test_case("class Main { public static void main(String[] a) { } } class A { public int m() { } }"; "missing_return")]
#[test_case("class Main { public static void main(String[] a) { } } class A { int f }"; "missing_semicolon")]
#[test_case("class Main { public static int main(String[] a) { } }"; "main_not_void")]
#[test_case(""; "empty_source")]
fn test_parser_rejects(source: &str) {
    let err = compile(source).unwrap_err();
    assert_eq!(err.code.phase(), Phase::Parsing, "{}", err);
}

// ============================================================================
// Definition Conflict Tests
// ============================================================================

#[test_case("class A { } class A { }", ErrorCode::MultipleClassDefinition; "duplicate_class")]
#[test_case("class Main { }", ErrorCode::MultipleClassDefinition; "class_named_like_entry")]
#[test_case("class A { public int m() { return 0; } public int m() { return 1; } }", ErrorCode::MultipleMethodDefinition; "duplicate_method")]
#[test_case("class A { public int main() { return 0; } }", ErrorCode::MultipleMethodDefinition; "second_main")]
#[test_case("class A { public int m() { return 0; } } class B extends A { public boolean m() { return true; } }", ErrorCode::MultipleMethodDefinition; "override_changes_return")]
#[test_case("class A { public int m(int x) { return 0; } } class B extends A { public int m(int x, int y) { return 0; } }", ErrorCode::MultipleMethodDefinition; "override_changes_arity")]
#[test_case("class A { int f; int f; }", ErrorCode::MultipleVariableDefinition; "duplicate_field")]
#[test_case("class A { public int m(int x, boolean x) { return 0; } }", ErrorCode::MultipleVariableDefinition; "duplicate_parameter")]
#[test_case("class A { public int m(int x) { int x; return 0; } }", ErrorCode::MultipleVariableDefinition; "local_shadows_parameter")]
#[test_case("class A { public int m() { int y; boolean y; return 0; } }", ErrorCode::MultipleVariableDefinition; "duplicate_local")]
fn test_definition_conflicts(classes: &str, expected: ErrorCode) {
    assert_eq!(compile_err(&with_classes(classes)), expected);
}

#[test]
fn test_main_local_clashes_with_argument() {
    assert_eq!(
        compile_err(&in_main("int args;")),
        ErrorCode::MultipleVariableDefinition
    );
}

// ============================================================================
// Resolution Error Tests
// ============================================================================

#[test_case("class B extends A { }", ErrorCode::ClassNotFound; "undeclared_superclass")]
#[test_case("class B extends A { } class A { }", ErrorCode::ClassNotFound; "superclass_declared_later")]
#[test_case("class A extends A { }", ErrorCode::ClassNotFound; "extends_itself")]
#[test_case("class A extends Main { }", ErrorCode::ClassNotFound; "extends_entry_class")]
#[test_case("class A { Missing f; }", ErrorCode::UnknownType; "unknown_field_type")]
#[test_case("class A { public Missing m() { return this; } }", ErrorCode::UnknownType; "unknown_return_type")]
#[test_case("class A { public int m(Missing p) { return 0; } }", ErrorCode::UnknownType; "unknown_parameter_type")]
#[test_case("class A { public int m() { return y; } }", ErrorCode::UnknownType; "undeclared_identifier")]
#[test_case("class A { public A m() { return new Missing(); } }", ErrorCode::ClassNotFound; "new_unknown_class")]
fn test_resolution_errors(classes: &str, expected: ErrorCode) {
    assert_eq!(compile_err(&with_classes(classes)), expected);
}

// ============================================================================
// Type Error Tests
// ============================================================================

#[test_case("int x; x = true;"; "boolean_to_int")]
#[test_case("boolean b; b = 1;"; "int_to_boolean")]
#[test_case("int[] xs; xs = new boolean[1];"; "boolean_array_to_int_array")]
#[test_case("System.out.println(true);"; "print_boolean")]
#[test_case("if (1) { } else { }"; "int_condition")]
#[test_case("while (0) { }"; "int_loop_condition")]
#[test_case("System.out.println(1 + true);"; "add_boolean")]
#[test_case("System.out.println(1 && 2);"; "and_ints")]
#[test_case("int x; x = 1; x[0] = 1;"; "index_int")]
#[test_case("int[] xs; xs = new int[true];"; "boolean_size")]
#[test_case("System.out.println(args.length);"; "use_of_args")]
#[test_case("System.out.println(this.m());"; "this_in_main")]
#[test_case("Main m; m = new Main();"; "instantiate_entry_class")]
fn test_type_errors_in_main(body: &str) {
    assert_eq!(compile_err(&in_main(body)), ErrorCode::TypeMissMatch);
}

#[test_case("class A { public int m() { return true; } }"; "wrong_return_type")]
#[test_case("class A { public int m() { return this.n(); } }"; "missing_method")]
#[test_case("class A { public int m(int x) { return this.m(); } }"; "too_few_arguments")]
#[test_case("class A { public int m(int x) { return this.m(1, 2); } }"; "too_many_arguments")]
#[test_case("class A { public int m(B b) { return 0; } public int n() { return this.m(new C()); } } class B { } class C { }"; "sibling_argument")]
#[test_case("class A { public int m() { int x; return x.m(); } }"; "call_on_int")]
#[test_case("class A { public A m() { A a; return A; } }"; "class_name_as_value")]
fn test_type_errors_in_methods(classes: &str) {
    assert_eq!(compile_err(&with_classes(classes)), ErrorCode::TypeMissMatch);
}

#[test]
fn test_assignment_mismatch_names_both_types() {
    let err = compile(&in_main("int x; x = true;")).unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeMissMatch);
    assert!(err.message.contains("boolean"), "{}", err.message);
    assert!(err.message.contains("int"), "{}", err.message);
}

#[test]
fn test_two_mains_fail_before_type_checking() {
    // The body of B.main is also ill-typed; symbol collection reports first.
    let err = compile(&with_classes(
        "class B { public int main() { return true; } }",
    ))
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MultipleMethodDefinition);
    assert_eq!(err.code.phase(), Phase::SymbolCollection);
}
