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

//! Emit helper methods for code generation.
//!
//! This module provides the low-level text output every emitter builds on:
//! - Raw lines for module-level items
//! - Indented instructions inside functions
//! - Fresh virtual registers

use super::types::{IrType, Value};
use super::CodeGenerator;

/// Extension trait for low-level IR emission.
///
/// This trait is implemented for `CodeGenerator` and separates the output
/// format from the lowering logic.
pub trait EmitHelpers {
    /// Append a line at module level.
    fn emit_raw(&mut self, line: &str);

    /// Append an indented instruction.
    fn emit_instr(&mut self, instr: &str);

    /// Append an indented comment.
    fn emit_comment(&mut self, text: &str);

    /// Mint a fresh virtual register name.
    fn fresh_register(&mut self) -> String;

    /// Emit `%r = instr` into a fresh register and return it as a value.
    fn emit_value(&mut self, instr: &str, ty: IrType) -> Value;

    /// Emit `%r = instr` into a fresh register and return the register name.
    fn emit_assign(&mut self, instr: &str) -> String;
}

impl EmitHelpers for CodeGenerator<'_> {
    fn emit_raw(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn emit_instr(&mut self, instr: &str) {
        self.output.push('\t');
        self.output.push_str(instr);
        self.output.push('\n');
    }

    fn emit_comment(&mut self, text: &str) {
        self.emit_instr(&format!("; {}", text));
    }

    fn fresh_register(&mut self) -> String {
        let register = format!("%_{}", self.register_counter);
        self.register_counter += 1;
        register
    }

    fn emit_value(&mut self, instr: &str, ty: IrType) -> Value {
        Value::new(self.emit_assign(instr), ty)
    }

    fn emit_assign(&mut self, instr: &str) -> String {
        let register = self.fresh_register();
        self.emit_instr(&format!("{} = {}", register, instr));
        register
    }
}
