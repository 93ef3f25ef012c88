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

//! Per-file compilation context.
//!
//! A [`CompilerContext`] owns everything one file's compilation produces and
//! tracks which phase is running. A fresh context is created for every file,
//! so nothing leaks from one file into the next.

use crate::analyzer::{check_types, collect_symbols, SymbolTable};
use crate::ast::Program;
use crate::codegen;
use crate::error::{CompileError, Result, Span};
use crate::layout::{self, Layouts, VTables};

/// The phase a compilation is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilerPhase {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// Building the symbol table.
    Collecting,
    /// Checking types.
    TypeChecking,
    /// Computing field offsets and vtable slots.
    LayoutPlanning,
    /// Generating IR.
    Emitting,
    /// IR was generated.
    Done,
    /// A phase reported an error.
    Failed,
}

impl std::fmt::Display for CompilerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CompilerPhase::Idle => "idle",
            CompilerPhase::Collecting => "collecting",
            CompilerPhase::TypeChecking => "type checking",
            CompilerPhase::LayoutPlanning => "layout planning",
            CompilerPhase::Emitting => "emitting",
            CompilerPhase::Done => "done",
            CompilerPhase::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// State of one file's compilation.
#[derive(Debug, Default)]
pub struct CompilerContext {
    /// The current phase.
    phase: CompilerPhase,
    /// Collected symbols.
    symbols: Option<SymbolTable>,
    /// Planned layouts.
    layouts: Option<Layouts>,
    /// Built vtables.
    vtables: Option<VTables>,
}

impl CompilerContext {
    /// Create a fresh context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase.
    pub fn phase(&self) -> CompilerPhase {
        self.phase
    }

    /// Get the collected symbols.
    pub fn symbols(&self) -> Option<&SymbolTable> {
        self.symbols.as_ref()
    }

    /// Get the planned layouts.
    pub fn layouts(&self) -> Option<&Layouts> {
        self.layouts.as_ref()
    }

    /// Get the built vtables.
    pub fn vtables(&self) -> Option<&VTables> {
        self.vtables.as_ref()
    }

    /// Format the offset report, once layouts are planned.
    pub fn offsets(&self) -> Option<String> {
        match (&self.symbols, &self.layouts) {
            (Some(symbols), Some(layouts)) => Some(layout::format_offsets(symbols, layouts)),
            _ => None,
        }
    }

    /// Build the symbol table.
    pub fn collect(&mut self, program: &Program) -> Result<()> {
        self.enter(CompilerPhase::Idle, CompilerPhase::Collecting)?;
        let symbols = self.track(collect_symbols(program))?;
        self.symbols = Some(symbols);
        Ok(())
    }

    /// Type check the program against the collected symbols.
    pub fn type_check(&mut self, program: &Program) -> Result<()> {
        self.enter(CompilerPhase::Collecting, CompilerPhase::TypeChecking)?;
        let result = match &self.symbols {
            Some(symbols) => check_types(symbols, program),
            None => Err(missing("symbol table")),
        };
        self.track(result)
    }

    /// Plan layouts and build vtables.
    pub fn plan_layout(&mut self) -> Result<()> {
        self.enter(CompilerPhase::TypeChecking, CompilerPhase::LayoutPlanning)?;
        let Some(symbols) = &self.symbols else {
            return self.track(Err(missing("symbol table")));
        };
        let layouts = layout::plan(symbols);
        let vtables = layout::build_vtables(symbols, &layouts);
        self.layouts = Some(layouts);
        self.vtables = Some(vtables);
        Ok(())
    }

    /// Generate the IR module.
    pub fn emit(&mut self, program: &Program) -> Result<String> {
        self.enter(CompilerPhase::LayoutPlanning, CompilerPhase::Emitting)?;
        let result = match (&self.symbols, &self.layouts, &self.vtables) {
            (Some(symbols), Some(layouts), Some(vtables)) => {
                codegen::generate(program, symbols, layouts, vtables)
            }
            _ => Err(missing("layout")),
        };
        let module = self.track(result)?;
        self.phase = CompilerPhase::Done;
        Ok(module)
    }

    /// Run all phases.
    pub fn run(&mut self, program: &Program) -> Result<String> {
        self.collect(program)?;
        self.type_check(program)?;
        self.plan_layout()?;
        self.emit(program)
    }

    fn enter(&mut self, expected: CompilerPhase, next: CompilerPhase) -> Result<()> {
        if self.phase != expected {
            return Err(CompileError::internal(
                format!("Cannot start {} while {}", next, self.phase),
                Span::default(),
            ));
        }
        tracing::debug!(phase = %next, "entering phase");
        self.phase = next;
        Ok(())
    }

    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            self.phase = CompilerPhase::Failed;
        }
        result
    }
}

fn missing(what: &str) -> CompileError {
    CompileError::internal(format!("The {} is missing", what), Span::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn program(source: &str) -> Program {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap()
    }

    const VALID: &str = "class Main { public static void main(String[] a) { System.out.println(new A().m()); } }
        class A { int f; public int m() { return f; } }";

    #[test]
    fn test_phases_in_order() {
        let program = program(VALID);
        let mut context = CompilerContext::new();
        assert_eq!(context.phase(), CompilerPhase::Idle);

        context.collect(&program).unwrap();
        assert_eq!(context.phase(), CompilerPhase::Collecting);
        assert!(context.symbols().is_some());

        context.type_check(&program).unwrap();
        assert_eq!(context.phase(), CompilerPhase::TypeChecking);

        context.plan_layout().unwrap();
        assert_eq!(context.phase(), CompilerPhase::LayoutPlanning);
        assert!(context.layouts().is_some());
        assert!(context.vtables().is_some());

        let module = context.emit(&program).unwrap();
        assert_eq!(context.phase(), CompilerPhase::Done);
        assert!(module.contains("define i32 @main()"));
    }

    #[test]
    fn test_out_of_order_step() {
        let program = program(VALID);
        let mut context = CompilerContext::new();
        let err = context.emit(&program).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(context.phase(), CompilerPhase::Idle);
    }

    #[test]
    fn test_failure_marks_context() {
        let program = program(
            "class Main { public static void main(String[] a) { System.out.println(true); } }",
        );
        let mut context = CompilerContext::new();
        let err = context.run(&program).unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMissMatch);
        assert_eq!(context.phase(), CompilerPhase::Failed);
        assert!(context.layouts().is_none());

        let err = context.plan_layout().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_offsets_after_layout() {
        let program = program(VALID);
        let mut context = CompilerContext::new();
        context.collect(&program).unwrap();
        assert!(context.offsets().is_none());

        context.type_check(&program).unwrap();
        context.plan_layout().unwrap();
        assert_eq!(
            context.offsets().unwrap(),
            "-----------Class A-----------\n--Variables---\nA.f : 0\n---Methods---\nA.m : 0\n\n"
        );
    }

    #[test]
    fn test_fresh_contexts_agree() {
        let program = program(VALID);
        let first = CompilerContext::new().run(&program).unwrap();
        let second = CompilerContext::new().run(&program).unwrap();
        assert_eq!(first, second);
    }
}
