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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Type definitions for the MiniJava compiler.

/// A type in the MiniJava language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// 32-bit signed integer.
    Int,
    /// Boolean value.
    Boolean,
    /// Array of integers.
    IntArray,
    /// Array of booleans.
    BooleanArray,
    /// The argument array of the entry method. No expression may use it.
    StringArray,
    /// Reference to an instance of the named class.
    Class(String),
}

impl Type {
    /// Get the number of bytes a field of this type occupies in an object.
    pub fn field_size(&self) -> u32 {
        match self {
            Type::Boolean => 1,
            Type::Int => 4,
            Type::IntArray | Type::BooleanArray | Type::StringArray | Type::Class(_) => 8,
        }
    }

    /// Check if this is an array type that expressions may index.
    pub fn is_array(&self) -> bool {
        matches!(self, Type::IntArray | Type::BooleanArray)
    }

    /// Get the element type if this is an indexable array.
    pub fn element_type(&self) -> Option<Type> {
        match self {
            Type::IntArray => Some(Type::Int),
            Type::BooleanArray => Some(Type::Boolean),
            _ => None,
        }
    }

    /// Get the class name if this is a class reference.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Type::Class(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Boolean => write!(f, "boolean"),
            Type::IntArray => write!(f, "int[]"),
            Type::BooleanArray => write!(f, "boolean[]"),
            Type::StringArray => write!(f, "String[]"),
            Type::Class(name) => write!(f, "{}", name),
        }
    }
}
