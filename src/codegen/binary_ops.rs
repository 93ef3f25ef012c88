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

//! Binary operation code generation.
//!
//! This module provides:
//! - `+`, `-`, `*` as `add`, `sub`, `mul` on `i32`
//! - `<` as a signed `icmp`
//! - short-circuit `&&` with a `phi` join

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::types::{IrType, Value};
use super::CodeGenerator;
use crate::ast::{BinaryOp, Expr};
use crate::error::Result;

/// Extension trait for binary operation code generation.
pub trait BinaryOpsEmitter {
    /// Generate code for a binary operation.
    fn emit_binary_op(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Result<Value>;

    /// Generate code for `left && right`. `right` only runs if `left` is true.
    fn emit_logical_and(&mut self, left: &Expr, right: &Expr) -> Result<Value>;
}

impl BinaryOpsEmitter for CodeGenerator<'_> {
    fn emit_binary_op(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Result<Value> {
        let instr = match op {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Less => "icmp slt",
            BinaryOp::And => return self.emit_logical_and(left, right),
        };

        let left = self.emit_expression_as(left, IrType::I32)?;
        let right = self.emit_expression_as(right, IrType::I32)?;
        Ok(self.emit_value(
            &format!("{} i32 {}, {}", instr, left.repr, right.repr),
            IrType::from_type(&op.result_type()),
        ))
    }

    fn emit_logical_and(&mut self, left: &Expr, right: &Expr) -> Result<Value> {
        let [rhs_label, end_label] = self.make_labels(["and.rhs", "and.end"]);

        let left = self.emit_expression_as(left, IrType::I1)?;
        let left_block = self.current_label.clone();
        self.emit_cond_branch(&left.repr, &rhs_label, &end_label);

        self.define_label(&rhs_label);
        let right = self.emit_expression_as(right, IrType::I1)?;
        let right_block = self.current_label.clone();
        self.emit_branch(&end_label);

        self.define_label(&end_label);
        Ok(self.emit_value(
            &format!(
                "phi i1 [false, %{}], [{}, %{}]",
                left_block, right.repr, right_block
            ),
            IrType::I1,
        ))
    }
}
