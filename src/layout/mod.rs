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

//! Object layout planning.
//!
//! Every heap object starts with an 8-byte vtable pointer followed by its
//! fields. Field offsets are relative to the end of that header and continue
//! from where the superclass stopped:
//!
//! | Field type           | Size |
//! |----------------------|------|
//! | `boolean`            | 1    |
//! | `int`                | 4    |
//! | arrays, class types  | 8    |
//!
//! Methods occupy 8-byte vtable slots. A method gets a new slot only if no
//! ancestor declares a method with the same name; an overriding method reuses
//! the slot of the method it overrides.
//!
//! The entry class has no heap representation and gets no layout.
//!
//! [`format_offsets`] prints the planned offsets as a per-class report.

pub mod vtable;

pub use vtable::{build_vtables, VTable, VTables};

use crate::analyzer::{ClassId, SymbolTable};
use crate::ast::Type;

/// Size of the vtable pointer at the start of every object.
pub const HEADER_SIZE: u32 = 8;

/// Size of one vtable slot.
pub const SLOT_SIZE: u32 = 8;

/// A field and its offset after the object header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// The field name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// Byte offset relative to the end of the header.
    pub offset: u32,
}

/// A method that introduced a new vtable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSlot {
    /// The method name.
    pub name: String,
    /// Byte offset of the slot in the vtable.
    pub offset: u32,
}

impl MethodSlot {
    /// Get the slot index in the vtable.
    pub fn index(&self) -> u32 {
        self.offset / SLOT_SIZE
    }
}

/// The layout of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLayout {
    /// The class this layout belongs to.
    pub class: ClassId,
    /// Fields declared by the class itself, in declaration order.
    pub fields: Vec<FieldLayout>,
    /// Slots introduced by the class itself, in declaration order.
    pub methods: Vec<MethodSlot>,
    /// Field offset after the last field of the class and its ancestors.
    pub field_end: u32,
    /// Vtable offset after the last slot of the class and its ancestors.
    pub method_end: u32,
}

impl ClassLayout {
    /// Get the number of bytes to allocate for an instance.
    pub fn instance_size(&self) -> u32 {
        HEADER_SIZE + self.field_end
    }

    /// Get the number of vtable slots.
    pub fn vtable_len(&self) -> u32 {
        self.method_end / SLOT_SIZE
    }
}

/// Layouts of all classes of a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layouts {
    /// Indexed by class handle; `None` for the entry class.
    classes: Vec<Option<ClassLayout>>,
}

impl Layouts {
    /// Get the layout of a class.
    pub fn get(&self, class: ClassId) -> Option<&ClassLayout> {
        self.classes.get(class.index()).and_then(Option::as_ref)
    }

    /// Iterate over all planned layouts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassLayout> {
        self.classes.iter().flatten()
    }

    /// Get the byte offset of a field, after the header, as seen from `class`.
    pub fn field_offset(&self, symbols: &SymbolTable, class: ClassId, name: &str) -> Option<u32> {
        let (owner, _) = symbols.find_field(class, name)?;
        self.get(owner)?
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.offset)
    }

    /// Get the vtable slot index of a method, as seen from `class`.
    pub fn method_slot(&self, symbols: &SymbolTable, class: ClassId, name: &str) -> Option<u32> {
        symbols.ancestors(class).find_map(|ancestor| {
            self.get(ancestor)?
                .methods
                .iter()
                .find(|m| m.name == name)
                .map(MethodSlot::index)
        })
    }

    /// Get the number of bytes to allocate for an instance of a class.
    pub fn instance_size(&self, class: ClassId) -> Option<u32> {
        self.get(class).map(ClassLayout::instance_size)
    }
}

/// Plan the layout of every non-entry class.
///
/// Classes are processed in declaration order. Superclasses are always
/// declared first, so their layouts are complete when a subclass needs them.
#[tracing::instrument(level = "debug", skip_all)]
pub fn plan(symbols: &SymbolTable) -> Layouts {
    let mut layouts = Layouts::default();

    for (id, class) in symbols.classes() {
        if class.is_entry {
            layouts.classes.push(None);
            continue;
        }

        let (mut field_end, mut method_end) = class
            .superclass
            .and_then(|sup| layouts.get(sup))
            .map(|sup| (sup.field_end, sup.method_end))
            .unwrap_or((0, 0));

        let mut fields = Vec::with_capacity(class.fields.len());
        for field in &class.fields {
            fields.push(FieldLayout {
                name: field.name.clone(),
                ty: field.ty.clone(),
                offset: field_end,
            });
            field_end += field.ty.field_size();
        }

        let mut methods = Vec::new();
        for &method_id in &class.methods {
            let name = &symbols.method(method_id).name;
            let overrides = class
                .superclass
                .is_some_and(|sup| layouts.method_slot(symbols, sup, name).is_some());
            if !overrides {
                methods.push(MethodSlot {
                    name: name.clone(),
                    offset: method_end,
                });
                method_end += SLOT_SIZE;
            }
        }

        tracing::debug!(
            class = %class.name,
            fields = fields.len(),
            new_slots = methods.len(),
            field_end,
            method_end,
            "planned class layout"
        );

        layouts.classes.push(Some(ClassLayout {
            class: id,
            fields,
            methods,
            field_end,
            method_end,
        }));
    }

    layouts
}

/// Format the offsets of every non-entry class in declaration order.
///
/// Each class lists the fields it declares and the methods that opened a new
/// vtable slot. Inherited members and overriding methods are left out.
///
/// ```text
/// -----------Class A-----------
/// --Variables---
/// A.f : 0
/// ---Methods---
/// A.m : 0
///
/// ```
pub fn format_offsets(symbols: &SymbolTable, layouts: &Layouts) -> String {
    let mut out = String::new();

    for layout in layouts.iter() {
        let class = &symbols.class(layout.class).name;
        out.push_str(&format!("-----------Class {}-----------\n", class));
        out.push_str("--Variables---\n");
        for field in &layout.fields {
            out.push_str(&format!("{}.{} : {}\n", class, field.name, field.offset));
        }
        out.push_str("---Methods---\n");
        for method in &layout.methods {
            out.push_str(&format!("{}.{} : {}\n", class, method.name, method.offset));
        }
        out.push('\n');
    }

    out
}
