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

//! Basic block labels for code generation.
//!
//! Labels are `prefix.N`. Identifiers cannot contain a dot, so labels never
//! collide with variable names. Labels created together share their number,
//! e.g. `if.then.3`, `if.else.3`, `if.end.3`.

use super::emit::EmitHelpers;
use super::CodeGenerator;

/// Extension trait for label management.
pub trait LabelManager {
    /// Create a set of labels sharing one fresh number.
    fn make_labels<const N: usize>(&mut self, prefixes: [&str; N]) -> [String; N];

    /// Start a new basic block.
    fn define_label(&mut self, label: &str);

    /// Emit an unconditional branch.
    fn emit_branch(&mut self, label: &str);

    /// Emit a conditional branch on an `i1` register or constant.
    fn emit_cond_branch(&mut self, condition: &str, then_label: &str, else_label: &str);
}

impl LabelManager for CodeGenerator<'_> {
    fn make_labels<const N: usize>(&mut self, prefixes: [&str; N]) -> [String; N] {
        let id = self.label_counter;
        self.label_counter += 1;
        prefixes.map(|prefix| format!("{}.{}", prefix, id))
    }

    fn define_label(&mut self, label: &str) {
        self.emit_raw(&format!("{}:", label));
        self.current_label = label.to_string();
    }

    fn emit_branch(&mut self, label: &str) {
        self.emit_instr(&format!("br label %{}", label));
    }

    fn emit_cond_branch(&mut self, condition: &str, then_label: &str, else_label: &str) {
        self.emit_instr(&format!(
            "br i1 {}, label %{}, label %{}",
            condition, then_label, else_label
        ));
    }
}
