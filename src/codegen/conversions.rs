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

//! Type conversions for code generation.
//!
//! Booleans are `i1` in registers, variables and fields, but `i32` inside
//! arrays. Every consumer converts the value it receives to the
//! representation it needs.

use super::emit::EmitHelpers;
use super::types::{IrType, Value};
use super::CodeGenerator;
use crate::error::{CompileError, Result, Span};

/// Extension trait for type conversions.
pub trait TypeConversions {
    /// Convert a value to the target representation.
    ///
    /// `i1` is widened with `zext`, `i32` is narrowed with `trunc`. Equal
    /// types pass through unchanged.
    fn coerce(&mut self, value: Value, target: IrType) -> Result<Value>;
}

impl TypeConversions for CodeGenerator<'_> {
    fn coerce(&mut self, value: Value, target: IrType) -> Result<Value> {
        match (value.ty, target) {
            (from, to) if from == to => Ok(value),
            (IrType::I1, IrType::I32) => {
                Ok(self.emit_value(&format!("zext i1 {} to i32", value.repr), IrType::I32))
            }
            (IrType::I32, IrType::I1) => {
                Ok(self.emit_value(&format!("trunc i32 {} to i1", value.repr), IrType::I1))
            }
            (from, to) => Err(CompileError::internal(
                format!("Cannot convert {} {} to {}", from, value.repr, to),
                Span::default(),
            )),
        }
    }
}
