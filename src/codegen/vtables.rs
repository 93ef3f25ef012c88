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

//! Vtable globals.
//!
//! Each non-entry class gets `@.C_vtable`, an array of `i8*` holding its
//! method implementations bitcast from their exact function types.

use super::constants::{method_name, vtable_name};
use super::emit::EmitHelpers;
use super::types::function_pointer_type;
use super::CodeGenerator;
use crate::analyzer::ClassId;
use crate::error::{CompileError, Result};

/// Extension trait for vtable emission.
pub trait VTableEmitter {
    /// Emit the vtables of all non-entry classes in declaration order.
    fn emit_vtables(&mut self) -> Result<()>;

    /// Get the array type of a class's vtable, e.g. `[2 x i8*]`.
    fn vtable_type(&self, class: ClassId) -> Result<String>;
}

impl VTableEmitter for CodeGenerator<'_> {
    fn emit_vtables(&mut self) -> Result<()> {
        let (symbols, vtables) = (self.symbols, self.vtables);
        let mut emitted = false;
        for vtable in vtables.iter() {
            let class_name = &symbols.class(vtable.class).name;
            let entries: Vec<String> = vtable
                .entries
                .iter()
                .map(|&method_id| {
                    let method = symbols.method(method_id);
                    let owner = &symbols.class(method.owner).name;
                    format!(
                        "i8* bitcast ({} {} to i8*)",
                        function_pointer_type(method),
                        method_name(owner, &method.name)
                    )
                })
                .collect();

            let line = format!(
                "{} = global {} [{}]",
                vtable_name(class_name),
                self.vtable_type(vtable.class)?,
                entries.join(", ")
            );
            self.emit_raw(&line);
            emitted = true;
        }
        if emitted {
            self.emit_raw("");
        }
        Ok(())
    }

    fn vtable_type(&self, class: ClassId) -> Result<String> {
        let vtable = self.vtables.get(class).ok_or_else(|| {
            CompileError::internal(
                format!("Class '{}' has no vtable", self.symbols.class(class).name),
                self.symbols.class(class).span.clone(),
            )
        })?;
        Ok(format!("[{} x i8*]", vtable.len()))
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;

    #[test]
    fn test_vtable_globals() {
        let ir = compile(
            "class Main { public static void main(String[] a) { } }
             class A { public int m(int x) { return x; } public boolean n(A o, boolean[] b) { return true; } }
             class B extends A { public int m(int x) { return 0; } }
             class E { }",
        )
        .unwrap();

        assert!(ir.contains(
            "@.A_vtable = global [2 x i8*] [i8* bitcast (i32 (i8*, i32)* @A.m to i8*), \
             i8* bitcast (i1 (i8*, i8*, i32*)* @A.n to i8*)]"
        ));
        assert!(ir.contains(
            "@.B_vtable = global [2 x i8*] [i8* bitcast (i32 (i8*, i32)* @B.m to i8*), \
             i8* bitcast (i1 (i8*, i8*, i32*)* @A.n to i8*)]"
        ));
        assert!(ir.contains("@.E_vtable = global [0 x i8*] []"));
    }
}
