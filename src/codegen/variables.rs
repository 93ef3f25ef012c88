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

//! Variable access for code generation.
//!
//! Locals and parameters live in `alloca` slots named after the variable.
//! Fields are reached through `%this` at their layout offset. Names resolve
//! in the same order the type checker uses.

use super::emit::EmitHelpers;
use super::objects::ObjectEmitter;
use super::types::{IrType, Value};
use super::CodeGenerator;
use crate::analyzer::{Resolution, Scope};
use crate::error::{CompileError, Result, Span};

/// The storage of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Pointer to the storage, e.g. `%x` or a field address register.
    pub pointer: String,
    /// The IR type stored there.
    pub ty: IrType,
}

/// Extension trait for variable access.
pub trait VariableManager {
    /// Get the scope of the method being generated.
    fn current_scope(&self) -> Result<Scope>;

    /// Get the storage of a local, parameter or field.
    fn variable(&mut self, name: &str, span: &Span) -> Result<Variable>;

    /// Load a variable's value.
    fn load_variable(&mut self, name: &str, span: &Span) -> Result<Value>;

    /// Store a value, already converted to the variable's type.
    fn store_variable(&mut self, variable: &Variable, value: &Value);
}

impl VariableManager for CodeGenerator<'_> {
    fn current_scope(&self) -> Result<Scope> {
        self.scope
            .ok_or_else(|| CompileError::internal("No method is being generated", Span::default()))
    }

    fn variable(&mut self, name: &str, span: &Span) -> Result<Variable> {
        let scope = self.current_scope()?;
        let symbols = self.symbols;
        match symbols.resolve(scope, name) {
            Some(Resolution::Local(var)) | Some(Resolution::Parameter(var)) => Ok(Variable {
                pointer: format!("%{}", var.name),
                ty: IrType::from_type(&var.ty),
            }),
            Some(Resolution::Field { field, .. }) => {
                let ty = IrType::from_type(&field.ty);
                let pointer = self.field_pointer(scope.class, name, ty, span)?;
                Ok(Variable { pointer, ty })
            }
            Some(Resolution::Class(_)) | None => Err(CompileError::internal(
                format!("Cannot resolve variable '{}'", name),
                span.clone(),
            )),
        }
    }

    fn load_variable(&mut self, name: &str, span: &Span) -> Result<Value> {
        let variable = self.variable(name, span)?;
        Ok(self.emit_value(
            &format!("load {}, {}* {}", variable.ty, variable.ty, variable.pointer),
            variable.ty,
        ))
    }

    fn store_variable(&mut self, variable: &Variable, value: &Value) {
        self.emit_instr(&format!(
            "store {}, {}* {}",
            value.typed(),
            variable.ty,
            variable.pointer
        ));
    }
}
