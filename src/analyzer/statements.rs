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
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Statement checking for the semantic analyzer.

use super::control_flow::ControlFlowChecker;
use super::expressions::ExpressionTyper;
use super::scope::Scope;
use super::type_check::{mismatch, TypeRules};
use super::TypeChecker;
use crate::ast::{Expr, Statement, StatementKind, Type};
use crate::error::{Result, Span};

/// Extension trait for statement checking.
pub trait StatementChecker {
    /// Check a statement.
    fn check_statement(&self, stmt: &Statement, scope: Scope) -> Result<()>;

    /// Check statements in order.
    fn check_statements(&self, stmts: &[Statement], scope: Scope) -> Result<()>;

    /// Check `target = value;`.
    fn check_assign(&self, target: &str, value: &Expr, span: &Span, scope: Scope) -> Result<()>;

    /// Check `target[index] = value;`.
    fn check_array_assign(
        &self,
        target: &str,
        index: &Expr,
        value: &Expr,
        span: &Span,
        scope: Scope,
    ) -> Result<()>;

    /// Check `System.out.println(value);`.
    fn check_print(&self, value: &Expr, scope: Scope) -> Result<()>;
}

impl StatementChecker for TypeChecker<'_> {
    fn check_statement(&self, stmt: &Statement, scope: Scope) -> Result<()> {
        match &stmt.kind {
            StatementKind::Block(stmts) => self.check_statements(stmts, scope),
            StatementKind::Assign { target, value } => {
                self.check_assign(target, value, &stmt.span, scope)
            }
            StatementKind::ArrayAssign {
                target,
                index,
                value,
            } => self.check_array_assign(target, index, value, &stmt.span, scope),
            StatementKind::If(if_stmt) => self.check_if_statement(if_stmt, scope),
            StatementKind::While(while_stmt) => self.check_while_statement(while_stmt, scope),
            StatementKind::Print(value) => self.check_print(value, scope),
        }
    }

    fn check_statements(&self, stmts: &[Statement], scope: Scope) -> Result<()> {
        stmts
            .iter()
            .try_for_each(|stmt| self.check_statement(stmt, scope))
    }

    fn check_assign(&self, target: &str, value: &Expr, span: &Span, scope: Scope) -> Result<()> {
        let target_type = self.type_of_variable(target, span, scope)?;
        let value_type = self.type_of(value, scope)?;
        self.expect_assignable(&value_type, &target_type, &format!("'{}'", target), &value.span)
    }

    fn check_array_assign(
        &self,
        target: &str,
        index: &Expr,
        value: &Expr,
        span: &Span,
        scope: Scope,
    ) -> Result<()> {
        let target_type = self.type_of_variable(target, span, scope)?;
        let Some(element) = target_type.element_type() else {
            return Err(mismatch(
                format!(
                    "'{}' of type {} cannot be indexed",
                    target, target_type
                ),
                span,
            ));
        };

        let index_type = self.type_of(index, scope)?;
        self.expect_type(&index_type, &Type::Int, "array index", &index.span)?;

        let value_type = self.type_of(value, scope)?;
        let what = format!("an element of '{}'", target);
        self.expect_type(&value_type, &element, &what, &value.span)
    }

    fn check_print(&self, value: &Expr, scope: Scope) -> Result<()> {
        let ty = self.type_of(value, scope)?;
        self.expect_type(&ty, &Type::Int, "the printed value", &value.span)
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;
    use crate::error::ErrorCode;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn check_main(body: &str) -> Option<ErrorCode> {
        let source = format!(
            "class Main {{ public static void main(String[] a) {{ {} }} }} class A {{ }}",
            body
        );
        let tokens = tokenize(&source).unwrap();
        let program = parse(&tokens).unwrap();
        analyze(&program).err().map(|e| e.code)
    }

    #[test]
    fn test_assignments() {
        assert_eq!(check_main("int x; boolean b; A o; x = 1; b = x < 2; o = new A();"), None);
        assert_eq!(check_main("int x; x = false;"), Some(ErrorCode::TypeMissMatch));
        assert_eq!(check_main("int[] x; x = new boolean[2];"), Some(ErrorCode::TypeMissMatch));
    }

    #[test]
    fn test_assign_unknown_variable() {
        assert_eq!(check_main("x = 1;"), Some(ErrorCode::UnknownType));
        assert_eq!(check_main("A = 1;"), Some(ErrorCode::UnknownType));
    }

    #[test]
    fn test_assign_to_args() {
        assert_eq!(check_main("a = a;"), Some(ErrorCode::TypeMissMatch));
    }

    #[test]
    fn test_array_assignments() {
        assert_eq!(check_main("int[] xs; xs = new int[1]; xs[0] = 5;"), None);
        assert_eq!(check_main("boolean[] bs; bs = new boolean[1]; bs[0] = true;"), None);
        assert_eq!(check_main("int x; x[0] = 1;"), Some(ErrorCode::TypeMissMatch));
        assert_eq!(check_main("int[] xs; xs[true] = 1;"), Some(ErrorCode::TypeMissMatch));
        assert_eq!(check_main("int[] xs; xs[0] = true;"), Some(ErrorCode::TypeMissMatch));
    }

    #[test]
    fn test_print() {
        assert_eq!(check_main("System.out.println(1 + 2);"), None);
        assert_eq!(check_main("System.out.println(new A());"), Some(ErrorCode::TypeMissMatch));
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(check_main("{ { System.out.println(false); } }"), Some(ErrorCode::TypeMissMatch));
    }
}
