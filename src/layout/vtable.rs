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

//! Virtual method tables.
//!
//! A vtable lists, for every slot of a class, the most derived implementation
//! visible from that class. Overriding methods share the slot of the method
//! they override.

use super::Layouts;
use crate::analyzer::{ClassId, MethodId, SymbolTable};

/// The vtable of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTable {
    /// The class this vtable belongs to.
    pub class: ClassId,
    /// Implementations by slot index.
    pub entries: Vec<MethodId>,
}

impl VTable {
    /// Get the number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vtable has no slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Vtables of all non-entry classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VTables {
    /// Indexed by class handle; `None` for the entry class.
    tables: Vec<Option<VTable>>,
}

impl VTables {
    /// Get the vtable of a class.
    pub fn get(&self, class: ClassId) -> Option<&VTable> {
        self.tables.get(class.index()).and_then(Option::as_ref)
    }

    /// Iterate over all vtables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &VTable> {
        self.tables.iter().flatten()
    }
}

/// Build the vtable of every planned class.
///
/// Walking the chain from the class itself upwards, the first method seen for
/// a slot is the one that ends up in it.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_vtables(symbols: &SymbolTable, layouts: &Layouts) -> VTables {
    let mut tables = Vec::with_capacity(symbols.class_count());

    for (id, class) in symbols.classes() {
        let Some(layout) = layouts.get(id) else {
            tables.push(None);
            continue;
        };

        let mut slots: Vec<Option<MethodId>> = vec![None; layout.vtable_len() as usize];
        for ancestor in symbols.ancestors(id) {
            for &method_id in &symbols.class(ancestor).methods {
                let name = &symbols.method(method_id).name;
                let Some(slot) = layouts.method_slot(symbols, ancestor, name) else {
                    continue;
                };
                if let Some(entry) = slots.get_mut(slot as usize) {
                    entry.get_or_insert(method_id);
                }
            }
        }

        let entries: Vec<MethodId> = slots.into_iter().flatten().collect();
        tracing::trace!(class = %class.name, slots = entries.len(), "built vtable");
        tables.push(Some(VTable { class: id, entries }));
    }

    VTables { tables }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::layout::plan;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn build(classes: &str) -> (SymbolTable, VTables) {
        let source = format!(
            "class Main {{ public static void main(String[] a) {{ }} }} {}",
            classes
        );
        let tokens = tokenize(&source).unwrap();
        let program = parse(&tokens).unwrap();
        let symbols = analyze(&program).unwrap();
        let layouts = plan(&symbols);
        let vtables = build_vtables(&symbols, &layouts);
        (symbols, vtables)
    }

    /// Render a vtable as `Owner.method` names by slot.
    fn names(symbols: &SymbolTable, vtables: &VTables, class: &str) -> Vec<String> {
        let table = vtables.get(symbols.class_id(class).unwrap()).unwrap();
        table
            .entries
            .iter()
            .map(|&m| {
                let method = symbols.method(m);
                format!("{}.{}", symbols.class(method.owner).name, method.name)
            })
            .collect()
    }

    #[test]
    fn test_override_replaces_entry_in_place() {
        let (symbols, vtables) = build(
            "class A { public int m() { return 1; } public int n() { return 2; } }
             class B extends A { public int k() { return 3; } public int m() { return 4; } }",
        );
        assert_eq!(names(&symbols, &vtables, "A"), vec!["A.m", "A.n"]);
        assert_eq!(names(&symbols, &vtables, "B"), vec!["B.m", "A.n", "B.k"]);
    }

    #[test]
    fn test_most_derived_implementation_wins() {
        let (symbols, vtables) = build(
            "class A { public int m() { return 1; } }
             class B extends A { public int m() { return 2; } }
             class C extends B { }",
        );
        assert_eq!(names(&symbols, &vtables, "C"), vec!["B.m"]);
    }

    #[test]
    fn test_single_slot_for_override_chain() {
        let (symbols, vtables) = build(
            "class A { int f; public int m() { return f; } }
             class B extends A { int g; public int m() { return g; } }",
        );
        let b = vtables.get(symbols.class_id("B").unwrap()).unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(names(&symbols, &vtables, "B"), vec!["B.m"]);
    }

    #[test]
    fn test_empty_and_entry() {
        let (symbols, vtables) = build("class E { }");
        assert!(vtables.get(symbols.class_id("E").unwrap()).unwrap().is_empty());
        assert!(vtables.get(symbols.entry_class().unwrap()).is_none());
        assert_eq!(vtables.iter().count(), 1);
    }
}
