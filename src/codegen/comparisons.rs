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

//! Comparison helpers for code generation.

use super::emit::EmitHelpers;
use super::types::{IrType, Value};
use super::CodeGenerator;

/// Extension trait for signed integer comparisons.
pub trait ComparisonHelpers {
    /// Emit `icmp <predicate> i32 left, right` and return the `i1` result.
    fn emit_compare(&mut self, predicate: &str, left: &Value, right: &Value) -> Value;
}

impl ComparisonHelpers for CodeGenerator<'_> {
    fn emit_compare(&mut self, predicate: &str, left: &Value, right: &Value) -> Value {
        self.emit_value(
            &format!("icmp {} i32 {}, {}", predicate, left.repr, right.repr),
            IrType::I1,
        )
    }
}
