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

//! Expression code generation.
//!
//! Literals are written inline, everything else produces a fresh register.
//! Boolean array elements come back as `i32`; callers convert with
//! [`TypeConversions::coerce`](super::conversions::TypeConversions::coerce).

use super::arrays::ArrayEmitter;
use super::binary_ops::BinaryOpsEmitter;
use super::conversions::TypeConversions;
use super::functions::FunctionCallEmitter;
use super::objects::ObjectEmitter;
use super::types::{IrType, Value};
use super::unary_ops::UnaryOpsEmitter;
use super::variables::VariableManager;
use super::CodeGenerator;
use crate::ast::{Expr, ExprKind};
use crate::error::Result;

/// Extension trait for expression code generation.
pub trait ExpressionEmitter {
    /// Generate code for an expression and return its value.
    fn emit_expression(&mut self, expr: &Expr) -> Result<Value>;

    /// Generate code for an expression and convert it to `target`.
    fn emit_expression_as(&mut self, expr: &Expr, target: IrType) -> Result<Value>;
}

impl ExpressionEmitter for CodeGenerator<'_> {
    fn emit_expression(&mut self, expr: &Expr) -> Result<Value> {
        match &expr.kind {
            ExprKind::IntegerLiteral(n) => Ok(Value::new(n.to_string(), IrType::I32)),
            ExprKind::BoolLiteral(b) => Ok(Value::new(b.to_string(), IrType::I1)),
            ExprKind::Identifier(name) => self.load_variable(name, &expr.span),
            ExprKind::This => Ok(Value::new("%this", IrType::I8Ptr)),
            ExprKind::Binary { op, left, right } => self.emit_binary_op(*op, left, right),
            ExprKind::Not(operand) => self.emit_not(operand),
            ExprKind::ArrayLookup { array, index } => {
                let array = self.emit_expression_as(array, IrType::I32Ptr)?;
                let index = self.emit_expression_as(index, IrType::I32)?;
                Ok(self.emit_array_lookup(&array, &index))
            }
            ExprKind::ArrayLength(array) => {
                let array = self.emit_expression_as(array, IrType::I32Ptr)?;
                Ok(self.emit_array_length(&array))
            }
            ExprKind::MessageSend {
                receiver,
                method,
                args,
            } => self.emit_message_send(receiver, method, args, &expr.span),
            ExprKind::NewObject(class) => self.emit_new_object(class, &expr.span),
            ExprKind::NewArray { size, .. } => {
                let size = self.emit_expression_as(size, IrType::I32)?;
                Ok(self.emit_new_array(&size))
            }
            ExprKind::Grouped(inner) => self.emit_expression(inner),
        }
    }

    fn emit_expression_as(&mut self, expr: &Expr, target: IrType) -> Result<Value> {
        let value = self.emit_expression(expr)?;
        self.coerce(value, target)
    }
}
