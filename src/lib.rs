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

//! MiniJava Compiler Library
//!
//! This library provides all the components needed to compile MiniJava
//! source code into a textual LLVM IR module.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing tokens into an AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Symbol collection and type checking
//! - [`layout`] - Field offsets, vtable slots and vtables
//! - [`codegen`] - LLVM IR generation
//! - [`context`] - Per-file compilation state
//! - [`output`] - `.ll` file writing
//!
//! # Example
//!
//! ```no_run
//! use mjc::{context::CompilerContext, lexer, parser};
//!
//! fn compile(source: &str) -> Result<String, Box<dyn std::error::Error>> {
//!     // Tokenize
//!     let tokens = lexer::tokenize(source)?;
//!
//!     // Parse
//!     let program = parser::parse(&tokens)?;
//!
//!     // Collect, check, plan and emit
//!     let module = CompilerContext::new().run(&program)?;
//!
//!     Ok(module)
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod context;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use ast::{Program, Type};
pub use context::{CompilerContext, CompilerPhase};
pub use error::{format_error, CompileError, ErrorCode, Result, SourceLocation, Span};
pub use lexer::Token;

/// The version of the MiniJava compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "mjc";

/// Compile source code to an LLVM IR module.
///
/// This is the main entry point for compiling MiniJava source code.
/// It performs all compilation stages: lexing, parsing, symbol collection,
/// type checking, layout planning and code generation.
///
/// # Example
///
/// ```no_run
/// let source = r#"
/// class Main {
///     public static void main(String[] a) {
///         System.out.println(42);
///     }
/// }
/// "#;
///
/// match mjc::compile(source) {
///     Ok(module) => println!("{}", module),
///     Err(e) => eprintln!("Compilation error: {}", e),
/// }
/// ```
pub fn compile(source: &str) -> Result<String> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse(&tokens)?;
    compile_program(&program)
}

/// Run all phases on a parsed program with a fresh context.
pub fn compile_program(program: &Program) -> Result<String> {
    CompilerContext::new().run(program)
}

/// A compiled module together with the offsets of its classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// The LLVM IR module.
    pub module: String,
    /// The per-class offset report.
    pub offsets: String,
}

/// Compile MiniJava source code and keep the offset report.
pub fn compile_with_offsets(source: &str) -> Result<Compiled> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse(&tokens)?;
    let mut context = CompilerContext::new();
    let module = context.run(&program)?;
    let offsets = context.offsets().unwrap_or_default();
    Ok(Compiled { module, offsets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "mjc");
    }

    #[test]
    fn test_compile_reports_first_error() {
        let err = compile(
            "class Main { public static void main(String[] a) { int x; x = true; } }",
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeMissMatch);
    }

    #[test]
    fn test_compile_with_offsets() {
        let source = "class Main { public static void main(String[] a) { } }
            class A { int f; public int m() { return f; } }
            class B extends A { boolean g; public int m() { return 1; } }";
        let compiled = compile_with_offsets(source).unwrap();
        assert_eq!(compiled.module, compile(source).unwrap());
        assert!(compiled.offsets.contains("A.f : 0\n"));
        assert!(compiled.offsets.contains("B.g : 4\n"));
        assert!(!compiled.offsets.contains("B.m"));
    }

    #[test]
    fn test_compile_with_offsets_entry_class_only() {
        let compiled = compile_with_offsets(
            "class Main { public static void main(String[] a) { } }",
        )
        .unwrap();
        assert!(compiled.offsets.is_empty());
    }

    #[test]
    fn test_compile_syntax_error() {
        let err = compile("class Main {").unwrap_err();
        assert!(err.code_str().starts_with("E1"));
    }
}
