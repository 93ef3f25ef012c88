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

//! IR types and values.
//!
//! MiniJava types map to IR scalars as follows:
//! - `int` -> `i32`
//! - `boolean` -> `i1`
//! - `int[]`, `boolean[]` -> `i32*` (length in slot 0)
//! - class types -> `i8*`

use crate::analyzer::MethodEntry;
use crate::ast::Type;

/// A scalar IR type a value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrType {
    /// A truth value.
    I1,
    /// A 32-bit integer.
    I32,
    /// An object reference.
    I8Ptr,
    /// An array reference.
    I32Ptr,
}

impl IrType {
    /// Get the IR representation of a MiniJava type.
    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Int => IrType::I32,
            Type::Boolean => IrType::I1,
            Type::IntArray | Type::BooleanArray => IrType::I32Ptr,
            // String[] never reaches code generation
            Type::StringArray | Type::Class(_) => IrType::I8Ptr,
        }
    }

    /// Get the IR type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IrType::I1 => "i1",
            IrType::I32 => "i32",
            IrType::I8Ptr => "i8*",
            IrType::I32Ptr => "i32*",
        }
    }
}

impl std::fmt::Display for IrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value produced by an instruction or written inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// The register name or constant as written in IR.
    pub repr: String,
    /// The IR type of the value.
    pub ty: IrType,
}

impl Value {
    /// Create a new value.
    pub fn new(repr: impl Into<String>, ty: IrType) -> Self {
        Self {
            repr: repr.into(),
            ty,
        }
    }

    /// Format as a typed operand, e.g. `i32 %_3`.
    pub fn typed(&self) -> String {
        format!("{} {}", self.ty, self.repr)
    }
}

/// Get the return type of a method, `void` for the entry method.
pub fn return_type(method: &MethodEntry) -> &'static str {
    method
        .return_type
        .as_ref()
        .map_or("void", |ty| IrType::from_type(ty).as_str())
}

/// Get the function pointer type of a method, e.g. `i32 (i8*, i1)*`.
pub fn function_pointer_type(method: &MethodEntry) -> String {
    let mut params = vec![IrType::I8Ptr.as_str()];
    params.extend(method.params.iter().map(|p| IrType::from_type(&p.ty).as_str()));
    format!("{} ({})*", return_type(method), params.join(", "))
}
