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

//! Runtime prelude for generated modules.
//!
//! Every module declares the C functions it links against and defines three
//! small helpers:
//! - `print_int` prints an `i32` and a newline
//! - `throw_oob` reports an out-of-bounds array access and exits with 1
//! - `throw_nsz` reports a negative array size and exits with 1

use super::emit::EmitHelpers;
use super::CodeGenerator;

/// External declarations and message strings.
const DECLARATIONS: &str = r#"declare i8* @calloc(i32, i32)
declare i32 @printf(i8*, ...)
declare void @exit(i32)

@_cint = constant [4 x i8] c"%d\0a\00"
@_cOOB = constant [15 x i8] c"Out of bounds\0a\00"
@_cNSZ = constant [21 x i8] c"Negative Array Size\0a\00""#;

/// Helper functions calling into the C runtime.
const HELPERS: &str = r#"define void @print_int(i32 %i) {
	%_str = bitcast [4 x i8]* @_cint to i8*
	call i32 (i8*, ...) @printf(i8* %_str, i32 %i)
	ret void
}

define void @throw_oob() {
	%_str = bitcast [15 x i8]* @_cOOB to i8*
	call i32 (i8*, ...) @printf(i8* %_str)
	call void @exit(i32 1)
	ret void
}

define void @throw_nsz() {
	%_str = bitcast [21 x i8]* @_cNSZ to i8*
	call i32 (i8*, ...) @printf(i8* %_str)
	call void @exit(i32 1)
	ret void
}"#;

/// Extension trait for the runtime prelude.
pub trait RuntimeEmitter {
    /// Emit the external declarations and the runtime helpers.
    fn emit_runtime(&mut self);
}

impl RuntimeEmitter for CodeGenerator<'_> {
    fn emit_runtime(&mut self) {
        self.emit_raw(DECLARATIONS);
        self.emit_raw("");
        self.emit_raw(HELPERS);
        self.emit_raw("");
    }
}
