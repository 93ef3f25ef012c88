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

//! Semantic analyzer module for the MiniJava compiler.
//!
//! Analysis runs in two passes over the AST:
//! - symbol collection builds the [`SymbolTable`] and rejects definition
//!   conflicts
//! - type checking validates every declared type, expression and statement
//!
//! Both passes stop at the first error.
//!
//! # Module Structure
//!
//! - `builder` - Symbol collection (SymbolTableBuilder)
//! - `control_flow` - `if` and `while` checks (ControlFlowChecker trait)
//! - `expressions` - Expression typing (ExpressionTyper trait)
//! - `functions` - Method bodies and message sends (MethodChecker trait)
//! - `operators` - Operator typing (OperatorChecker trait)
//! - `scope` - Identifier resolution
//! - `statements` - Statement checks (StatementChecker trait)
//! - `symbol`, `symbol_table` - Symbol table entries and queries
//! - `type_check` - Type rules shared by all checks (TypeRules trait)

pub mod builder;
pub mod control_flow;
pub mod expressions;
pub mod functions;
pub mod operators;
pub mod scope;
pub mod statements;
pub mod symbol;
pub mod symbol_table;
pub mod type_check;

pub use builder::{collect_symbols, SymbolTableBuilder};
pub use expressions::ExpressionTyper;
pub use scope::{Resolution, Scope};
pub use symbol::{ClassEntry, ClassId, MethodEntry, MethodId, VariableEntry, VariableKind};
pub use symbol_table::SymbolTable;

use functions::MethodChecker;
use type_check::TypeRules;

use crate::ast::Program;
use crate::error::{CompileError, Result};

/// The type checker.
///
/// It borrows the symbol table and keeps no other state, so expression types
/// can be queried again after checking, e.g. by the code generator.
#[derive(Debug, Clone, Copy)]
pub struct TypeChecker<'a> {
    /// The collected symbols of the program.
    pub(crate) symbols: &'a SymbolTable,
}

impl<'a> TypeChecker<'a> {
    /// Create a type checker over a symbol table.
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Get the symbol table.
    pub fn symbols(&self) -> &'a SymbolTable {
        self.symbols
    }

    /// Type check a program whose symbols were collected into this table.
    pub fn check_program(&self, program: &Program) -> Result<()> {
        self.validate_declared_types()?;

        let main = self.entry_scope()?;
        self.check_main_body(main, &program.main.body)?;

        for class in &program.classes {
            let class_id = self.symbols.class_id(&class.name).ok_or_else(|| {
                CompileError::internal(
                    format!("Class '{}' was not collected", class.name),
                    class.span.clone(),
                )
            })?;

            for method in &class.methods {
                let method_id = self.symbols.own_method(class_id, &method.name).ok_or_else(|| {
                    CompileError::internal(
                        format!("Method '{}.{}' was not collected", class.name, method.name),
                        method.span.clone(),
                    )
                })?;
                self.check_method(Scope::new(class_id, method_id), method)?;
            }
        }

        Ok(())
    }

    /// Get the scope of the entry method.
    pub fn entry_scope(&self) -> Result<Scope> {
        let missing = || CompileError::internal("The main class was not collected", Default::default());
        let class = self.symbols.entry_class().ok_or_else(missing)?;
        let method = self.symbols.own_method(class, "main").ok_or_else(missing)?;
        Ok(Scope::new(class, method))
    }
}

/// Type check a program against its symbol table.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_types(symbols: &SymbolTable, program: &Program) -> Result<()> {
    TypeChecker::new(symbols).check_program(program)
}

/// Collect symbols and type check a program.
pub fn analyze(program: &Program) -> Result<SymbolTable> {
    let symbols = collect_symbols(program)?;
    check_types(&symbols, program)?;
    Ok(symbols)
}
