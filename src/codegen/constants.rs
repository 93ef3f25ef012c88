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

//! Constants for code generation.
//!
//! Names of runtime symbols and the sizes the generated code relies on.

/// Zero-initialising allocator.
pub const CALLOC: &str = "@calloc";

/// Prints an `i32` followed by a newline.
pub const PRINT_INT: &str = "@print_int";

/// Reports an out-of-bounds array access and exits.
pub const THROW_OOB: &str = "@throw_oob";

/// Reports a negative array size and exits.
pub const THROW_NSZ: &str = "@throw_nsz";

/// Bytes per array slot; the length and every element are `i32`.
pub const ARRAY_SLOT_SIZE: u32 = 4;

/// Label of the first basic block of every function.
pub const ENTRY_LABEL: &str = "fn.entry";

/// Get the global name of a class's vtable.
pub fn vtable_name(class: &str) -> String {
    format!("@.{}_vtable", class)
}

/// Get the global name of a method.
pub fn method_name(class: &str, method: &str) -> String {
    format!("@{}.{}", class, method)
}
