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

//! Unary operation code generation.

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::types::{IrType, Value};
use super::CodeGenerator;
use crate::ast::Expr;
use crate::error::Result;

/// Extension trait for unary operation code generation.
pub trait UnaryOpsEmitter {
    /// Generate code for `!operand` as `xor i1 operand, true`.
    fn emit_not(&mut self, operand: &Expr) -> Result<Value>;
}

impl UnaryOpsEmitter for CodeGenerator<'_> {
    fn emit_not(&mut self, operand: &Expr) -> Result<Value> {
        let value = self.emit_expression_as(operand, IrType::I1)?;
        Ok(self.emit_value(&format!("xor i1 {}, true", value.repr), IrType::I1))
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;

    #[test]
    fn test_not_of_boolean_array_element() {
        let ir = compile(
            "class Main { public static void main(String[] a) { } }
             class A { public boolean m(boolean[] bs) { return !bs[0]; } }",
        )
        .unwrap();
        let method = &ir[ir.find("define i1 @A.m").unwrap()..];
        assert!(method.contains("%_8 = trunc i32 %_7 to i1\n\t%_9 = xor i1 %_8, true\n\tret i1 %_9\n"));
    }
}
