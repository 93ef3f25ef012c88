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

//! Operator type checking for the semantic analyzer.

use super::expressions::ExpressionTyper;
use super::scope::Scope;
use super::type_check::mismatch;
use super::TypeChecker;
use crate::ast::{BinaryOp, Expr, Type};
use crate::error::{Result, Span};

/// Extension trait for operator type checking.
pub trait OperatorChecker {
    /// Type a binary operation. Both operands must have the operator's operand type.
    fn check_binary(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        span: &Span,
        scope: Scope,
    ) -> Result<Type>;

    /// Type a logical negation.
    fn check_not(&self, operand: &Expr, scope: Scope) -> Result<Type>;
}

impl OperatorChecker for TypeChecker<'_> {
    fn check_binary(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        span: &Span,
        scope: Scope,
    ) -> Result<Type> {
        let expected = op.operand_type();
        let left_type = self.type_of(left, scope)?;
        let right_type = self.type_of(right, scope)?;

        if left_type != expected || right_type != expected {
            return Err(mismatch(
                format!(
                    "operator '{}' requires {} operands, found {} and {}",
                    op, expected, left_type, right_type
                ),
                span,
            ));
        }

        Ok(op.result_type())
    }

    fn check_not(&self, operand: &Expr, scope: Scope) -> Result<Type> {
        let ty = self.type_of(operand, scope)?;
        if ty != Type::Boolean {
            return Err(mismatch(
                format!("operator '!' requires a boolean operand, found {}", ty),
                &operand.span,
            ));
        }
        Ok(Type::Boolean)
    }
}
