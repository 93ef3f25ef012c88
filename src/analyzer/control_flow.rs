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

//! Control flow checking for the semantic analyzer.

use super::expressions::ExpressionTyper;
use super::scope::Scope;
use super::statements::StatementChecker;
use super::type_check::TypeRules;
use super::TypeChecker;
use crate::ast::{Expr, IfStatement, Type, WhileStatement};
use crate::error::Result;

/// Extension trait for control flow checking.
pub trait ControlFlowChecker {
    /// Check an if statement and both branches.
    fn check_if_statement(&self, if_stmt: &IfStatement, scope: Scope) -> Result<()>;

    /// Check a while statement and its body.
    fn check_while_statement(&self, while_stmt: &WhileStatement, scope: Scope) -> Result<()>;

    /// Check that a condition is boolean.
    fn check_condition(&self, condition: &Expr, scope: Scope) -> Result<()>;
}

impl ControlFlowChecker for TypeChecker<'_> {
    fn check_if_statement(&self, if_stmt: &IfStatement, scope: Scope) -> Result<()> {
        self.check_condition(&if_stmt.condition, scope)?;
        self.check_statement(&if_stmt.then_branch, scope)?;
        self.check_statement(&if_stmt.else_branch, scope)
    }

    fn check_while_statement(&self, while_stmt: &WhileStatement, scope: Scope) -> Result<()> {
        self.check_condition(&while_stmt.condition, scope)?;
        self.check_statement(&while_stmt.body, scope)
    }

    fn check_condition(&self, condition: &Expr, scope: Scope) -> Result<()> {
        let ty = self.type_of(condition, scope)?;
        self.expect_type(&ty, &Type::Boolean, "a condition", &condition.span)
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
            "class Main {{ public static void main(String[] a) {{ int x; {} }} }}",
            body
        );
        let tokens = tokenize(&source).unwrap();
        let program = parse(&tokens).unwrap();
        analyze(&program).err().map(|e| e.code)
    }

    #[test]
    fn test_conditions_must_be_boolean() {
        assert_eq!(check_main("if (x < 1) x = 1; else x = 2;"), None);
        assert_eq!(check_main("while (x < 3) x = x + 1;"), None);
        assert_eq!(check_main("if (x) x = 1; else x = 2;"), Some(ErrorCode::TypeMissMatch));
        assert_eq!(check_main("while (1) { }"), Some(ErrorCode::TypeMissMatch));
    }

    #[test]
    fn test_branches_are_checked() {
        assert_eq!(
            check_main("if (true) x = 1; else x = false;"),
            Some(ErrorCode::TypeMissMatch)
        );
        assert_eq!(
            check_main("while (false) System.out.println(true);"),
            Some(ErrorCode::TypeMissMatch)
        );
    }
}
