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

//! Parser module for the MiniJava compiler.
//!
//! This module parses a token stream into an Abstract Syntax Tree (AST).
//! It uses recursive descent parsing with precedence climbing for expressions.
//!
//! # Module Structure
//!
//! - `control_flow` - `if` and `while` parsing (ControlFlowParser trait)
//! - `declarations` - Class and method parsing (DeclarationParser trait)
//! - `expressions` - Expression parsing (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statement parsing (StatementParser trait)
//! - `types` - Type parsing (TypeParser trait)

pub mod control_flow;
pub mod declarations;
pub mod expressions;
pub mod helpers;
pub mod statements;
pub mod types;

use declarations::DeclarationParser;
use helpers::ParserHelpers;

use crate::ast::Program;
use crate::error::{CompileError, Span};
use crate::lexer::Token;

/// Deepest statement and expression nesting the parser accepts.
///
/// Every later phase walks the tree recursively, so this bounds their
/// stack use as well.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
    /// Current nesting depth of statements and expressions.
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program: the entry class followed by any other classes.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let main = self.parse_main_class()?;
        let mut program = Program::new(main);

        while !self.is_at_end() {
            let class = self.parse_class()?;
            program.add_class(class);
        }

        tracing::trace!(classes = program.classes.len(), "parsed program");
        Ok(program)
    }
}

/// Parse a token stream into a program AST.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, ElementType, ExprKind, StatementKind, Type};
    use crate::error::ErrorCode;
    use crate::lexer::tokenize;

    /// Helper to parse source code directly.
    fn parse_source(source: &str) -> Result<Program, CompileError> {
        let tokens = tokenize(source)?;
        parse(&tokens)
    }

    /// Wrap a method body into a minimal program with one class `A`.
    fn with_method(method: &str) -> String {
        format!(
            "class Main {{ public static void main(String[] a) {{ }} }} class A {{ {} }}",
            method
        )
    }

    // ========================================
    // Parser Navigation Tests
    // ========================================

    #[test]
    fn test_parser_creation() {
        let tokens = vec![];
        let parser = Parser::new(&tokens);
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_parser_peek_and_advance() {
        let tokens = vec![
            (Token::Integer(42), Span::new(0, 2)),
            (Token::Plus, Span::new(3, 4)),
        ];
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.peek(), Some(&Token::Integer(42)));
        let first = parser.advance();
        assert!(matches!(first, Some((Token::Integer(42), _))));
        assert_eq!(parser.peek(), Some(&Token::Plus));
    }

    // ========================================
    // Declaration Tests
    // ========================================

    #[test]
    fn test_parse_main_class() {
        let program = parse_source(
            "class Main { public static void main(String[] args) { int x; x = 1; System.out.println(x); } }",
        )
        .unwrap();

        assert_eq!(program.main.name, "Main");
        assert_eq!(program.main.args_name, "args");
        assert_eq!(program.main.locals.len(), 1);
        assert_eq!(program.main.locals[0].ty, Type::Int);
        assert_eq!(program.main.body.len(), 2);
        assert!(program.classes.is_empty());
    }

    #[test]
    fn test_parse_classes_with_inheritance() {
        let program = parse_source(
            "class Main { public static void main(String[] a) { } }
             class A { int f; boolean[] flags; public int m() { return f; } }
             class B extends A { A other; public int m() { return 1; } }",
        )
        .unwrap();

        assert_eq!(program.classes.len(), 2);
        let a = &program.classes[0];
        assert_eq!(a.superclass, None);
        assert_eq!(a.fields[1].ty, Type::BooleanArray);
        let b = &program.classes[1];
        assert_eq!(b.superclass.as_deref(), Some("A"));
        assert_eq!(b.fields[0].ty, Type::Class("A".to_string()));
        assert_eq!(b.methods[0].name, "m");
    }

    #[test]
    fn test_parse_method_signature() {
        let program =
            parse_source(&with_method("public boolean f(int a, int[] b, A c) { int t; return true; }"))
                .unwrap();
        let method = &program.classes[0].methods[0];

        assert_eq!(method.return_type, Type::Boolean);
        let param_types: Vec<_> = method.params.iter().map(|p| p.ty.clone()).collect();
        assert_eq!(
            param_types,
            vec![Type::Int, Type::IntArray, Type::Class("A".to_string())]
        );
        assert_eq!(method.locals[0].name, "t");
        assert_eq!(method.return_expr.kind, ExprKind::BoolLiteral(true));
    }

    #[test]
    fn test_parse_method_named_main() {
        let program = parse_source(&with_method("public int main() { return 0; }")).unwrap();
        assert_eq!(program.classes[0].methods[0].name, "main");
    }

    #[test]
    fn test_class_typed_local_vs_assignment() {
        let program = parse_source(&with_method(
            "public int f() { A x; x = new A(); return 0; }",
        ))
        .unwrap();
        let method = &program.classes[0].methods[0];
        assert_eq!(method.locals.len(), 1);
        assert!(matches!(
            &method.body[0].kind,
            StatementKind::Assign { target, value } if target == "x"
                && value.kind == ExprKind::NewObject("A".to_string())
        ));
    }

    // ========================================
    // Statement Tests
    // ========================================

    #[test]
    fn test_parse_statements() {
        let program = parse_source(&with_method(
            "public int f() {
                int[] xs;
                xs = new int[3];
                xs[0] = 1;
                if (xs[0] < 2) { } else System.out.println(xs.length);
                while (false) { }
                return 0;
            }",
        ))
        .unwrap();
        let body = &program.classes[0].methods[0].body;

        assert!(matches!(body[0].kind, StatementKind::Assign { .. }));
        assert!(matches!(body[1].kind, StatementKind::ArrayAssign { .. }));
        assert!(matches!(body[2].kind, StatementKind::If(_)));
        assert!(matches!(body[3].kind, StatementKind::While(_)));
    }

    #[test]
    fn test_if_requires_else() {
        let err = parse_source(&with_method(
            "public int f() { if (true) { } return 0; }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
        assert!(err.message.contains("'else'"));
    }

    #[test]
    fn test_method_requires_return() {
        let err = parse_source(&with_method("public int f() { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
        assert!(err.message.contains("'return'"));
    }

    // ========================================
    // Expression Tests
    // ========================================

    fn return_expr(expr: &str) -> crate::ast::Expr {
        let program = parse_source(&with_method(&format!("public int f() {{ return {}; }}", expr)))
            .unwrap();
        program.classes[0].methods[0].return_expr.clone()
    }

    #[test]
    fn test_precedence() {
        let expr = return_expr("a + b * c < d && !e");
        let ExprKind::Binary { op, left, right } = expr.kind else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(right.kind, ExprKind::Not(_)));
        let ExprKind::Binary { op, left, .. } = left.kind else {
            panic!("expected comparison");
        };
        assert_eq!(op, BinaryOp::Less);
        let ExprKind::Binary { op, right, .. } = left.kind else {
            panic!("expected addition");
        };
        assert_eq!(op, BinaryOp::Add);
        assert!(matches!(
            right.kind,
            ExprKind::Binary {
                op: BinaryOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let expr = return_expr("10 - 3 - 2");
        let ExprKind::Binary { op, left, right } = expr.kind else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::Sub);
        assert_eq!(right.kind, ExprKind::IntegerLiteral(2));
        assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
    }

    #[test]
    fn test_postfix_chain() {
        let expr = return_expr("new A().get(1, x[2]).length");
        let ExprKind::ArrayLength(inner) = expr.kind else {
            panic!("expected length");
        };
        let ExprKind::MessageSend {
            receiver,
            method,
            args,
        } = inner.kind
        else {
            panic!("expected message send");
        };
        assert_eq!(receiver.kind, ExprKind::NewObject("A".to_string()));
        assert_eq!(method, "get");
        assert_eq!(args.len(), 2);
        assert!(matches!(args[1].kind, ExprKind::ArrayLookup { .. }));
    }

    #[test]
    fn test_array_allocation() {
        let expr = return_expr("new boolean[n + 1]");
        assert!(matches!(
            expr.kind,
            ExprKind::NewArray {
                element: ElementType::Boolean,
                ..
            }
        ));
    }

    #[test]
    fn test_grouped_expression() {
        let expr = return_expr("(this)");
        assert!(matches!(expr.kind, ExprKind::Grouped(_)));
    }

    #[test]
    fn test_missing_expression() {
        let err = parse_source(&with_method("public int f() { return ; }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedExpression);
    }

    #[test]
    fn test_unexpected_end_of_file() {
        let err = parse_source("class Main { public static void main(String[] a) {").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfFile);
    }

    #[test]
    fn test_display_reparses() {
        let source = "class Main { public static void main(String[] a) { System.out.println(new A().f(3)); } }
            class A { int x; public int f(int n) { int r; if (n < 1) r = 0; else r = n * 2; return r; } }";
        let program = parse_source(source).unwrap();
        let printed = program.to_string();
        let reparsed = parse_source(&printed).unwrap();
        assert_eq!(reparsed.to_string(), printed);
    }

    #[test]
    fn test_display_of_built_tree_reparses_to_same_shape() {
        use crate::ast::Expr;

        let int = |v| Box::new(Expr::new(ExprKind::IntegerLiteral(v), Span::default()));
        let sum = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Add,
                left: int(1),
                right: int(2),
            },
            Span::default(),
        );
        let product = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Mul,
                left: Box::new(sum),
                right: int(3),
            },
            Span::default(),
        );

        let reparsed = return_expr(&product.to_string());
        let ExprKind::Binary { op, left, .. } = reparsed.kind else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::Mul);
        let ExprKind::Grouped(inner) = left.kind else {
            panic!("expected grouped left operand");
        };
        assert!(matches!(inner.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
    }

    // ========================================
    // Nesting Limit Tests
    // ========================================

    /// `System.out.println` of `1` wrapped in `depth` parentheses.
    fn nested_print(depth: usize) -> String {
        format!(
            "class Main {{ public static void main(String[] a) {{ System.out.println({}1{}); }} }}",
            "(".repeat(depth),
            ")".repeat(depth)
        )
    }

    #[test]
    fn test_nesting_up_to_limit() {
        // the statement and the printed expression take two levels
        assert!(parse_source(&nested_print(MAX_NESTING_DEPTH - 2)).is_ok());
    }

    #[test]
    fn test_nesting_past_limit() {
        let err = parse_source(&nested_print(MAX_NESTING_DEPTH - 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedExpression);
        assert!(err.message.contains("Nesting exceeds"));
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_very_deep_nesting_is_an_error() {
        for source in [
            nested_print(5000),
            format!(
                "class Main {{ public static void main(String[] a) {{ {}System.out.println(1); }} }}",
                "while (true) ".repeat(5000)
            ),
            format!(
                "class Main {{ public static void main(String[] a) {{ boolean b; b = {}true; }} }}",
                "!".repeat(5000)
            ),
        ] {
            let err = parse_source(&source).unwrap_err();
            assert_eq!(err.code, ErrorCode::ExpectedExpression);
        }
    }

    #[test]
    fn test_long_operator_chain_counts_as_nesting() {
        let within = vec!["1"; 40].join(" + ");
        assert!(parse_source(&with_method(&format!("public int f() {{ return {}; }}", within))).is_ok());

        let beyond = vec!["1"; 200].join(" + ");
        let err = parse_source(&with_method(&format!("public int f() {{ return {}; }}", beyond)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedExpression);
    }

    #[test]
    fn test_nesting_depth_resets_between_statements() {
        let statement = format!("System.out.println({}1{});", "(".repeat(50), ")".repeat(50));
        let source = format!(
            "class Main {{ public static void main(String[] a) {{ {} }} }}",
            statement.repeat(10)
        );
        assert!(parse_source(&source).is_ok());
    }
}
