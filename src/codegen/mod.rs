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

//! Code generation module for the MiniJava compiler.
//!
//! This module lowers a checked program to one textual LLVM IR module:
//! - vtable globals for every non-entry class
//! - the runtime prelude (`calloc`, `print_int`, `throw_oob`, `throw_nsz`)
//! - one function per method, plus the entry function `main`
//!
//! # Module Structure
//!
//! - `arrays` - Array allocation, access and bounds checks (ArrayEmitter trait)
//! - `assignments` - Variable and array element stores (AssignmentEmitter trait)
//! - `binary_ops` - Arithmetic and `&&` (BinaryOpsEmitter trait)
//! - `comparisons` - Integer comparisons (ComparisonHelpers trait)
//! - `constants` - Names of runtime symbols and layout constants
//! - `control_flow` - `if` and `while` (ControlFlowEmitter trait)
//! - `conversions` - `i1`/`i32` widening and narrowing (TypeConversions trait)
//! - `declarations` - Function definitions and statements (DeclarationEmitter, BlockGenerator traits)
//! - `emit` - Instruction output and registers (EmitHelpers trait)
//! - `expressions` - Expression dispatch (ExpressionEmitter trait)
//! - `functions` - Virtual calls (FunctionCallEmitter trait)
//! - `labels` - Basic block labels (LabelManager trait)
//! - `objects` - Object allocation and field access (ObjectEmitter trait)
//! - `runtime` - The runtime prelude (RuntimeEmitter trait)
//! - `type_inference` - Static types of expressions (TypeInference trait)
//! - `types` - IR types and values
//! - `unary_ops` - Logical negation (UnaryOpsEmitter trait)
//! - `variables` - Locals, parameters and fields (VariableManager trait)
//! - `vtables` - Vtable globals (VTableEmitter trait)

pub mod arrays;
pub mod assignments;
pub mod binary_ops;
pub mod comparisons;
pub mod constants;
pub mod control_flow;
pub mod conversions;
pub mod declarations;
pub mod emit;
pub mod expressions;
pub mod functions;
pub mod labels;
pub mod objects;
pub mod runtime;
pub mod type_inference;
pub mod types;
pub mod unary_ops;
pub mod variables;
pub mod vtables;

pub use types::{IrType, Value};

use declarations::DeclarationEmitter;
use runtime::RuntimeEmitter;
use vtables::VTableEmitter;

use crate::analyzer::{Scope, SymbolTable, TypeChecker};
use crate::ast::Program;
use crate::error::Result;
use crate::layout::{Layouts, VTables};

/// The LLVM IR code generator.
pub struct CodeGenerator<'ctx> {
    /// The collected symbols.
    pub(crate) symbols: &'ctx SymbolTable,
    /// Field offsets and vtable slots.
    pub(crate) layouts: &'ctx Layouts,
    /// Vtable contents.
    pub(crate) vtables: &'ctx VTables,
    /// Type queries for receivers and operands.
    pub(crate) checker: TypeChecker<'ctx>,
    /// The generated module text.
    pub(crate) output: String,
    /// Next virtual register number in the current function.
    pub(crate) register_counter: u32,
    /// Next label number in the current function.
    pub(crate) label_counter: u32,
    /// The method being generated.
    pub(crate) scope: Option<Scope>,
    /// The label of the basic block instructions are appended to.
    pub(crate) current_label: String,
}

impl<'ctx> CodeGenerator<'ctx> {
    /// Create a new code generator.
    pub fn new(symbols: &'ctx SymbolTable, layouts: &'ctx Layouts, vtables: &'ctx VTables) -> Self {
        Self {
            symbols,
            layouts,
            vtables,
            checker: TypeChecker::new(symbols),
            output: String::new(),
            register_counter: 0,
            label_counter: 0,
            scope: None,
            current_label: String::new(),
        }
    }

    /// Generate the module for a program.
    pub fn generate(mut self, program: &Program) -> Result<String> {
        self.emit_vtables()?;
        self.emit_runtime();
        self.emit_main(&program.main)?;
        for class in &program.classes {
            for method in &class.methods {
                self.emit_method(&class.name, method)?;
            }
        }
        Ok(self.output)
    }
}

/// Generate the LLVM IR module of a checked program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate(
    program: &Program,
    symbols: &SymbolTable,
    layouts: &Layouts,
    vtables: &VTables,
) -> Result<String> {
    CodeGenerator::new(symbols, layouts, vtables).generate(program)
}
