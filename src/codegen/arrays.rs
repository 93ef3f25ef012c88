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

//! Arrays for code generation.
//!
//! An array is an `i32*` to `length + 1` zeroed slots. Slot 0 holds the
//! length, element `i` lives in slot `i + 1`. Boolean elements are stored
//! as `i32`.
//!
//! Every access is guarded by a bounds check and every allocation by a size
//! check. Both use the same three blocks: `check`, then `ok` or `err`, where
//! `err` calls a trap that exits the program.

use super::comparisons::ComparisonHelpers;
use super::constants::{ARRAY_SLOT_SIZE, CALLOC, THROW_NSZ, THROW_OOB};
use super::emit::EmitHelpers;
use super::labels::LabelManager;
use super::types::{IrType, Value};
use super::CodeGenerator;

/// Extension trait for array operations.
pub trait ArrayEmitter {
    /// Trap unless `0 <= index < length`.
    fn emit_bounds_check(&mut self, array: &Value, index: &Value);

    /// Compute the address of the slot holding element `index`.
    fn element_pointer(&mut self, array: &Value, index: &Value) -> String;

    /// Load an element as `i32`.
    fn emit_array_lookup(&mut self, array: &Value, index: &Value) -> Value;

    /// Store an `i32` element.
    fn emit_array_store(&mut self, array: &Value, index: &Value, value: &Value);

    /// Load the length of an array.
    fn emit_array_length(&mut self, array: &Value) -> Value;

    /// Allocate an array of `size` elements, trapping on a negative size.
    fn emit_new_array(&mut self, size: &Value) -> Value;
}

impl ArrayEmitter for CodeGenerator<'_> {
    fn emit_bounds_check(&mut self, array: &Value, index: &Value) {
        let [check, ok, err] = self.make_labels(["oob.check", "oob.ok", "oob.err"]);

        self.emit_branch(&check);
        self.define_label(&check);
        let length = self.emit_array_length(array);
        let lower = self.emit_compare("sge", index, &Value::new("0", IrType::I32));
        let upper = self.emit_compare("slt", index, &length);
        let in_bounds = self.emit_assign(&format!("and i1 {}, {}", lower.repr, upper.repr));
        self.emit_cond_branch(&in_bounds, &ok, &err);

        self.emit_trap(THROW_OOB, &err, &ok);
        self.define_label(&ok);
    }

    fn element_pointer(&mut self, array: &Value, index: &Value) -> String {
        let slot = self.emit_assign(&format!("add i32 {}, 1", index.repr));
        self.emit_assign(&format!("getelementptr i32, i32* {}, i32 {}", array.repr, slot))
    }

    fn emit_array_lookup(&mut self, array: &Value, index: &Value) -> Value {
        self.emit_bounds_check(array, index);
        let pointer = self.element_pointer(array, index);
        self.emit_value(&format!("load i32, i32* {}", pointer), IrType::I32)
    }

    fn emit_array_store(&mut self, array: &Value, index: &Value, value: &Value) {
        self.emit_bounds_check(array, index);
        let pointer = self.element_pointer(array, index);
        self.emit_instr(&format!("store {}, i32* {}", value.typed(), pointer));
    }

    fn emit_array_length(&mut self, array: &Value) -> Value {
        self.emit_value(&format!("load i32, i32* {}", array.repr), IrType::I32)
    }

    fn emit_new_array(&mut self, size: &Value) -> Value {
        let [check, ok, err] = self.make_labels(["nsz.check", "nsz.ok", "nsz.err"]);

        self.emit_branch(&check);
        self.define_label(&check);
        let negative = self.emit_compare("slt", size, &Value::new("0", IrType::I32));
        self.emit_cond_branch(&negative.repr, &err, &ok);

        self.emit_trap(THROW_NSZ, &err, &ok);
        self.define_label(&ok);

        let slots = self.emit_assign(&format!("add i32 {}, 1", size.repr));
        let memory = self.emit_assign(&format!(
            "call i8* {}(i32 {}, i32 {})",
            CALLOC, slots, ARRAY_SLOT_SIZE
        ));
        let array = self.emit_value(&format!("bitcast i8* {} to i32*", memory), IrType::I32Ptr);
        self.emit_instr(&format!("store i32 {}, i32* {}", size.repr, array.repr));
        array
    }
}

impl CodeGenerator<'_> {
    /// Emit the `err` block calling a trap, falling through to `ok`.
    fn emit_trap(&mut self, trap: &str, err: &str, ok: &str) {
        self.define_label(err);
        self.emit_instr(&format!("call void {}()", trap));
        self.emit_branch(ok);
    }
}
