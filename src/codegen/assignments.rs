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

//! Assignment code generation.
//!
//! This module provides code generation for assignments:
//! - Simple assignments (`x = e;`) to locals, parameters and fields
//! - Array element assignments (`xs[i] = e;`)
//!
//! The right-hand side is always evaluated before the target address.

use super::arrays::ArrayEmitter;
use super::conversions::TypeConversions;
use super::expressions::ExpressionEmitter;
use super::types::IrType;
use super::variables::VariableManager;
use super::CodeGenerator;
use crate::ast::Expr;
use crate::error::{Result, Span};

/// Extension trait for assignment code generation.
pub trait AssignmentEmitter {
    /// Generate code for `target = value;`.
    fn generate_assignment(&mut self, target: &str, value: &Expr, span: &Span) -> Result<()>;

    /// Generate code for `target[index] = value;`.
    fn generate_array_assignment(
        &mut self,
        target: &str,
        index: &Expr,
        value: &Expr,
        span: &Span,
    ) -> Result<()>;
}

impl AssignmentEmitter for CodeGenerator<'_> {
    fn generate_assignment(&mut self, target: &str, value: &Expr, span: &Span) -> Result<()> {
        let value = self.emit_expression(value)?;
        let variable = self.variable(target, span)?;
        let value = self.coerce(value, variable.ty)?;
        self.store_variable(&variable, &value);
        Ok(())
    }

    fn generate_array_assignment(
        &mut self,
        target: &str,
        index: &Expr,
        value: &Expr,
        span: &Span,
    ) -> Result<()> {
        let array = self.load_variable(target, span)?;
        let index = self.emit_expression_as(index, IrType::I32)?;
        // boolean elements are stored widened
        let value = self.emit_expression_as(value, IrType::I32)?;
        self.emit_array_store(&array, &index, &value);
        Ok(())
    }
}
