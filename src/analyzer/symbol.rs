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

//! Symbol table entries for classes, methods and variables.
//!
//! Entries live in arenas owned by the [`SymbolTable`](super::SymbolTable)
//! and refer to each other through [`ClassId`] and [`MethodId`] handles.

use crate::ast::Type;
use crate::error::Span;

/// Handle of a class in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    /// Position of the class in declaration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle of a method in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub(crate) u32);

impl MethodId {
    /// Position of the method in the method arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a variable was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Field,
    Parameter,
    Local,
}

/// A field, parameter or local variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableEntry {
    /// The variable name.
    pub name: String,
    /// The declared type, recorded verbatim.
    pub ty: Type,
    /// Where the variable was declared.
    pub kind: VariableKind,
    /// The span of the declaration.
    pub span: Span,
}

impl VariableEntry {
    /// Create a new variable entry.
    pub fn new(name: impl Into<String>, ty: Type, kind: VariableKind, span: Span) -> Self {
        Self {
            name: name.into(),
            ty,
            kind,
            span,
        }
    }
}

/// A method of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    /// The method name, unique within its class.
    pub name: String,
    /// The class declaring the method.
    pub owner: ClassId,
    /// The declared return type (`None` for the entry method).
    pub return_type: Option<Type>,
    /// Parameters in declaration order.
    pub params: Vec<VariableEntry>,
    /// Locals in declaration order.
    pub locals: Vec<VariableEntry>,
    /// The span of the method header.
    pub span: Span,
}

impl MethodEntry {
    /// Find a parameter by name.
    pub fn param(&self, name: &str) -> Option<&VariableEntry> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Find a local by name.
    pub fn local(&self, name: &str) -> Option<&VariableEntry> {
        self.locals.iter().find(|l| l.name == name)
    }

    /// Get the parameter types in order.
    pub fn param_types(&self) -> Vec<&Type> {
        self.params.iter().map(|p| &p.ty).collect()
    }
}

/// A class, including the entry class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// The class name, unique within the program.
    pub name: String,
    /// The direct superclass.
    pub superclass: Option<ClassId>,
    /// Fields in declaration order.
    pub fields: Vec<VariableEntry>,
    /// Methods in declaration order.
    pub methods: Vec<MethodId>,
    /// Whether this is the class holding `main`.
    pub is_entry: bool,
    /// The span of the class header.
    pub span: Span,
}

impl ClassEntry {
    /// Create a class without members.
    pub fn new(name: impl Into<String>, superclass: Option<ClassId>, span: Span) -> Self {
        Self {
            name: name.into(),
            superclass,
            fields: Vec::new(),
            methods: Vec::new(),
            is_entry: false,
            span,
        }
    }

    /// Find a field declared by this class itself.
    pub fn field(&self, name: &str) -> Option<&VariableEntry> {
        self.fields.iter().find(|f| f.name == name)
    }
}
