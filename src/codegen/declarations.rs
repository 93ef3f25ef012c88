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

//! Declaration code generation.
//!
//! This module provides code generation for declarations:
//! - The entry function `main`
//! - One function per method, taking `%this` first
//! - `alloca` slots for parameters and locals
//! - Statement dispatch for method bodies

use super::assignments::AssignmentEmitter;
use super::constants::{method_name, ENTRY_LABEL, PRINT_INT};
use super::control_flow::ControlFlowEmitter;
use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::types::{return_type, IrType};
use super::CodeGenerator;
use crate::analyzer::{MethodEntry, Scope, VariableEntry};
use crate::ast::{MainClass, MethodDecl, Statement, StatementKind};
use crate::error::{CompileError, Result};

/// Extension trait for declaration code generation.
pub trait DeclarationEmitter {
    /// Generate `define i32 @main()` from the entry method.
    fn emit_main(&mut self, main: &MainClass) -> Result<()>;

    /// Generate the function of a method.
    fn emit_method(&mut self, class: &str, method: &MethodDecl) -> Result<()>;

    /// Start a function: reset counters, open the entry block, allocate variables.
    fn begin_function(&mut self, header: &str, scope: Scope);
}

impl DeclarationEmitter for CodeGenerator<'_> {
    fn emit_main(&mut self, main: &MainClass) -> Result<()> {
        let scope = self.checker.entry_scope()?;
        self.begin_function("define i32 @main()", scope);
        self.generate_statements(&main.body)?;
        self.emit_instr("ret i32 0");
        self.emit_raw("}");
        self.emit_raw("");
        Ok(())
    }

    fn emit_method(&mut self, class: &str, method: &MethodDecl) -> Result<()> {
        let symbols = self.symbols;
        let missing = || {
            CompileError::internal(
                format!("Method '{}.{}' was not collected", class, method.name),
                method.span.clone(),
            )
        };
        let class_id = symbols.class_id(class).ok_or_else(missing)?;
        let method_id = symbols.own_method(class_id, &method.name).ok_or_else(missing)?;
        let entry = symbols.method(method_id);
        let declared = entry.return_type.as_ref().ok_or_else(missing)?;

        tracing::trace!(class, method = %method.name, "emitting method");

        self.begin_function(&method_header(class, entry), Scope::new(class_id, method_id));
        self.generate_statements(&method.body)?;
        let result = self.emit_expression_as(&method.return_expr, IrType::from_type(declared))?;
        self.emit_instr(&format!("ret {}", result.typed()));
        self.emit_raw("}");
        self.emit_raw("");
        Ok(())
    }

    fn begin_function(&mut self, header: &str, scope: Scope) {
        self.register_counter = 0;
        self.label_counter = 0;
        self.scope = Some(scope);

        self.emit_raw(&format!("{} {{", header));
        self.define_label(ENTRY_LABEL);

        let method = self.symbols.method(scope.method);
        let is_entry = method.return_type.is_none();
        if !is_entry {
            for param in &method.params {
                let ty = IrType::from_type(&param.ty);
                self.emit_instr(&format!("%{} = alloca {}", param.name, ty));
                self.emit_instr(&format!("store {} %.{}, {}* %{}", ty, param.name, ty, param.name));
            }
        }
        for local in &method.locals {
            self.emit_alloca(local);
        }
    }
}

impl CodeGenerator<'_> {
    fn emit_alloca(&mut self, var: &VariableEntry) {
        self.emit_instr(&format!("%{} = alloca {}", var.name, IrType::from_type(&var.ty)));
    }
}

/// Build `define RET @Class.method(i8* %this, T %.param, ...)`.
fn method_header(class: &str, method: &MethodEntry) -> String {
    let mut params = vec!["i8* %this".to_string()];
    params.extend(
        method
            .params
            .iter()
            .map(|p| format!("{} %.{}", IrType::from_type(&p.ty), p.name)),
    );
    format!(
        "define {} {}({})",
        return_type(method),
        method_name(class, &method.name),
        params.join(", ")
    )
}

/// Helper trait for statement generation used by declarations.
pub trait BlockGenerator {
    /// Generate code for one statement.
    fn generate_statement(&mut self, stmt: &Statement) -> Result<()>;

    /// Generate code for statements in order.
    fn generate_statements(&mut self, stmts: &[Statement]) -> Result<()>;
}

impl BlockGenerator for CodeGenerator<'_> {
    fn generate_statement(&mut self, stmt: &Statement) -> Result<()> {
        match &stmt.kind {
            StatementKind::Block(stmts) => self.generate_statements(stmts),
            StatementKind::Assign { target, value } => {
                self.generate_assignment(target, value, &stmt.span)
            }
            StatementKind::ArrayAssign {
                target,
                index,
                value,
            } => self.generate_array_assignment(target, index, value, &stmt.span),
            StatementKind::If(if_stmt) => self.generate_if(if_stmt),
            StatementKind::While(while_stmt) => self.generate_while(while_stmt),
            StatementKind::Print(value) => {
                let value = self.emit_expression_as(value, IrType::I32)?;
                self.emit_instr(&format!("call void {}({})", PRINT_INT, value.typed()));
                Ok(())
            }
        }
    }

    fn generate_statements(&mut self, stmts: &[Statement]) -> Result<()> {
        stmts.iter().try_for_each(|stmt| self.generate_statement(stmt))
    }
}
