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

//! Symbol table for the semantic analyzer.
//!
//! Classes and methods are stored in arenas in declaration order, with a
//! name index for classes. The table answers inheritance queries: ancestor
//! chains, method lookup through the chain and nominal subtyping.

use super::symbol::{ClassEntry, ClassId, MethodEntry, MethodId, VariableEntry};
use crate::ast::Type;
use rustc_hash::FxHashMap;

/// The symbol table of one program.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Classes in declaration order, the entry class first.
    classes: Vec<ClassEntry>,
    /// All methods of all classes.
    methods: Vec<MethodEntry>,
    /// Class name to handle.
    class_index: FxHashMap<String, ClassId>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. The caller checks for duplicates first.
    pub fn add_class(&mut self, class: ClassEntry) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.class_index.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Register a method of an already registered class.
    pub fn add_method(&mut self, method: MethodEntry) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        let owner = method.owner;
        self.methods.push(method);
        self.classes[owner.index()].methods.push(id);
        id
    }

    /// Add a field to an already registered class.
    pub fn add_field(&mut self, class: ClassId, field: VariableEntry) {
        self.classes[class.index()].fields.push(field);
    }

    /// Get a class by handle.
    pub fn class(&self, id: ClassId) -> &ClassEntry {
        &self.classes[id.index()]
    }

    /// Get a method by handle.
    pub fn method(&self, id: MethodId) -> &MethodEntry {
        &self.methods[id.index()]
    }

    /// Look up a class handle by name.
    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.class_index.get(name).copied()
    }

    /// Number of registered classes, including the entry class.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over all classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassEntry)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, c)| (ClassId(i as u32), c))
    }

    /// Get the entry class, if registered.
    pub fn entry_class(&self) -> Option<ClassId> {
        self.classes().find(|(_, c)| c.is_entry).map(|(id, _)| id)
    }

    /// Iterate over a class and its ancestors, most derived first.
    pub fn ancestors(&self, id: ClassId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: Some(id),
        }
    }

    /// Find a method declared by the class itself.
    pub fn own_method(&self, class: ClassId, name: &str) -> Option<MethodId> {
        self.class(class)
            .methods
            .iter()
            .copied()
            .find(|&m| self.method(m).name == name)
    }

    /// Resolve a method by name through the inheritance chain, most derived first.
    pub fn find_method(&self, class: ClassId, name: &str) -> Option<MethodId> {
        self.ancestors(class)
            .find_map(|ancestor| self.own_method(ancestor, name))
    }

    /// Resolve a field by name through the inheritance chain, most derived first.
    pub fn find_field(&self, class: ClassId, name: &str) -> Option<(ClassId, &VariableEntry)> {
        self.ancestors(class)
            .find_map(|ancestor| self.class(ancestor).field(name).map(|f| (ancestor, f)))
    }

    /// Check if `sub` is `sup` or one of its descendants.
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        self.ancestors(sub).any(|ancestor| ancestor == sup)
    }

    /// Check if a value of type `from` may be used where `to` is expected.
    ///
    /// Types must be equal, except that a class may stand in for any of its
    /// ancestors.
    pub fn is_assignable(&self, from: &Type, to: &Type) -> bool {
        if from == to {
            return true;
        }
        match (from, to) {
            (Type::Class(sub), Type::Class(sup)) => match (self.class_id(sub), self.class_id(sup)) {
                (Some(sub), Some(sup)) => self.is_subclass(sub, sup),
                _ => false,
            },
            _ => false,
        }
    }
}

/// Iterator over a class and its ancestors.
pub struct Ancestors<'a> {
    table: &'a SymbolTable,
    next: Option<ClassId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let current = self.next?;
        self.next = self.table.class(current).superclass;
        Some(current)
    }
}
