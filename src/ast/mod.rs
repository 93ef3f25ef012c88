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

//! Abstract Syntax Tree (AST) definitions for the MiniJava compiler.
//!
//! This module defines the data structures that represent a parsed MiniJava
//! program. Every phase matches exhaustively over these closed enums.

mod expr;
mod stmt;
mod types;

pub use expr::*;
pub use stmt::*;
pub use types::*;

use crate::error::Span;

/// A complete MiniJava program: the entry class followed by the other classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The class holding `public static void main(String[] args)`.
    pub main: MainClass,
    /// All other classes in declaration order.
    pub classes: Vec<ClassDecl>,
}

impl Program {
    /// Create a program with no classes besides the entry class.
    pub fn new(main: MainClass) -> Self {
        Self {
            main,
            classes: Vec::new(),
        }
    }

    /// Add a class declaration to the program.
    pub fn add_class(&mut self, class: ClassDecl) {
        self.classes.push(class);
    }

    /// Find a class declaration by name.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.name == name)
    }
}

/// The entry class.
#[derive(Debug, Clone, PartialEq)]
pub struct MainClass {
    /// The class name.
    pub name: String,
    /// The name of the `String[]` argument.
    pub args_name: String,
    /// Locals of `main`.
    pub locals: Vec<VarDecl>,
    /// The statements of `main`.
    pub body: Vec<Statement>,
    /// The source span of the class header.
    pub span: Span,
}

/// A class declaration, plain or inheriting.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// The class name.
    pub name: String,
    /// The superclass named after `extends`.
    pub superclass: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<VarDecl>,
    /// Methods in declaration order.
    pub methods: Vec<MethodDecl>,
    /// The source span of the class header.
    pub span: Span,
}

impl ClassDecl {
    /// Create an empty class.
    pub fn new(name: impl Into<String>, superclass: Option<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            superclass,
            fields: Vec::new(),
            methods: Vec::new(),
            span,
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.main)?;
        for class in &self.classes {
            writeln!(f)?;
            write!(f, "{}", class)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for MainClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "class {} {{", self.name)?;
        writeln!(
            f,
            "    public static void main(String[] {}) {{",
            self.args_name
        )?;
        for local in &self.locals {
            writeln!(f, "        {};", local)?;
        }
        for stmt in &self.body {
            writeln!(f, "        {}", stmt)?;
        }
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

impl std::fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "class {}", self.name)?;
        if let Some(superclass) = &self.superclass {
            write!(f, " extends {}", superclass)?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "    {};", field)?;
        }
        for method in &self.methods {
            writeln!(f, "    {}", method)?;
        }
        writeln!(f, "}}")
    }
}
