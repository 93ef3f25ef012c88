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

//! Objects for code generation.
//!
//! An object is an `i8*` to zeroed memory of the instance size. The first
//! 8 bytes hold a pointer to the class's vtable; fields follow.

use super::constants::{vtable_name, CALLOC};
use super::emit::EmitHelpers;
use super::types::{IrType, Value};
use super::vtables::VTableEmitter;
use super::CodeGenerator;
use crate::analyzer::ClassId;
use crate::error::{CompileError, Result, Span};
use crate::layout::HEADER_SIZE;

/// Extension trait for object allocation and field access.
pub trait ObjectEmitter {
    /// Allocate an instance of a class and install its vtable pointer.
    fn emit_new_object(&mut self, class: &str, span: &Span) -> Result<Value>;

    /// Compute the address of a field of `%this`, typed as `ty*`.
    fn field_pointer(&mut self, class: ClassId, field: &str, ty: IrType, span: &Span) -> Result<String>;
}

impl ObjectEmitter for CodeGenerator<'_> {
    fn emit_new_object(&mut self, class: &str, span: &Span) -> Result<Value> {
        let class_id = self.symbols.class_id(class).ok_or_else(|| {
            CompileError::internal(format!("Class '{}' was not collected", class), span.clone())
        })?;
        let size = self.layouts.instance_size(class_id).ok_or_else(|| {
            CompileError::internal(format!("Class '{}' has no layout", class), span.clone())
        })?;
        let vtable_type = self.vtable_type(class_id)?;

        let object = self.emit_value(&format!("call i8* {}(i32 1, i32 {})", CALLOC, size), IrType::I8Ptr);
        let header = self.emit_assign(&format!("bitcast i8* {} to i8***", object.repr));
        let vtable = self.emit_assign(&format!(
            "getelementptr {}, {}* {}, i32 0, i32 0",
            vtable_type,
            vtable_type,
            vtable_name(class)
        ));
        self.emit_instr(&format!("store i8** {}, i8*** {}", vtable, header));
        Ok(object)
    }

    fn field_pointer(&mut self, class: ClassId, field: &str, ty: IrType, span: &Span) -> Result<String> {
        let offset = self
            .layouts
            .field_offset(self.symbols, class, field)
            .ok_or_else(|| {
                CompileError::internal(format!("Field '{}' has no layout", field), span.clone())
            })?;
        let address = self.emit_assign(&format!(
            "getelementptr i8, i8* %this, i32 {}",
            HEADER_SIZE + offset
        ));
        Ok(self.emit_assign(&format!("bitcast i8* {} to {}*", address, ty)))
    }
}
