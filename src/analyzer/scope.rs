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

//! Identifier resolution inside a method.
//!
//! A [`Scope`] is the (class, method) pair a statement is checked or lowered
//! in. Names resolve in a fixed order shared by the type checker and the code
//! generator: local, parameter, field of the class or one of its ancestors,
//! class name.

use super::symbol::{ClassId, MethodId, VariableEntry};
use super::symbol_table::SymbolTable;
use crate::ast::Type;

/// The method a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// The class declaring the method.
    pub class: ClassId,
    /// The method itself.
    pub method: MethodId,
}

impl Scope {
    /// Create a new scope.
    pub fn new(class: ClassId, method: MethodId) -> Self {
        Self { class, method }
    }
}

/// What an identifier resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// A local of the current method.
    Local(&'a VariableEntry),
    /// A parameter of the current method.
    Parameter(&'a VariableEntry),
    /// A field declared by `owner`, the current class or an ancestor.
    Field {
        owner: ClassId,
        field: &'a VariableEntry,
    },
    /// A class name.
    Class(ClassId),
}

impl Resolution<'_> {
    /// Get the type the identifier denotes.
    pub fn ty(&self, table: &SymbolTable) -> Type {
        match self {
            Resolution::Local(var) | Resolution::Parameter(var) => var.ty.clone(),
            Resolution::Field { field, .. } => field.ty.clone(),
            Resolution::Class(id) => Type::Class(table.class(*id).name.clone()),
        }
    }
}

impl SymbolTable {
    /// Resolve an identifier in a scope.
    pub fn resolve(&self, scope: Scope, name: &str) -> Option<Resolution<'_>> {
        let method = self.method(scope.method);

        if let Some(local) = method.local(name) {
            return Some(Resolution::Local(local));
        }
        if let Some(param) = method.param(name) {
            return Some(Resolution::Parameter(param));
        }
        if let Some((owner, field)) = self.find_field(scope.class, name) {
            return Some(Resolution::Field { owner, field });
        }
        self.class_id(name).map(Resolution::Class)
    }
}
