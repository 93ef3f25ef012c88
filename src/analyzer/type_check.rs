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

//! Type rules for the semantic analyzer.
//!
//! This module provides the checks every other part of the type checker
//! builds on:
//! - Declared type validation
//! - Exact type expectations
//! - Assignment compatibility with subclassing

use super::symbol::VariableEntry;
use super::TypeChecker;
use crate::ast::Type;
use crate::error::{CompileError, ErrorCode, Result, Span};

/// Extension trait for type rules.
pub trait TypeRules {
    /// Check that every class named by a declared type exists.
    fn validate_declared_types(&self) -> Result<()>;

    /// Check that a declared type names an existing class, if it names one.
    fn validate_type(&self, ty: &Type, span: &Span) -> Result<()>;

    /// Require `actual` to be exactly `expected`.
    fn expect_type(&self, actual: &Type, expected: &Type, what: &str, span: &Span) -> Result<()>;

    /// Require a value of type `value` to be usable where `target` is expected.
    fn expect_assignable(&self, value: &Type, target: &Type, what: &str, span: &Span) -> Result<()>;
}

impl TypeRules for TypeChecker<'_> {
    fn validate_declared_types(&self) -> Result<()> {
        for (_, class) in self.symbols.classes() {
            for field in &class.fields {
                self.validate_variable(field)?;
            }
            for &method_id in &class.methods {
                let method = self.symbols.method(method_id);
                if let Some(return_type) = &method.return_type {
                    self.validate_type(return_type, &method.span)?;
                }
                for var in method.params.iter().chain(method.locals.iter()) {
                    self.validate_variable(var)?;
                }
            }
        }
        Ok(())
    }

    fn validate_type(&self, ty: &Type, span: &Span) -> Result<()> {
        match ty.class_name() {
            Some(name) if self.symbols.class_id(name).is_none() => Err(CompileError::new(
                ErrorCode::UnknownType,
                format!("Unknown type '{}'", name),
                span.clone(),
            )),
            _ => Ok(()),
        }
    }

    fn expect_type(&self, actual: &Type, expected: &Type, what: &str, span: &Span) -> Result<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(mismatch(
                format!("{} must be {}, found {}", what, expected, actual),
                span,
            ))
        }
    }

    fn expect_assignable(&self, value: &Type, target: &Type, what: &str, span: &Span) -> Result<()> {
        if self.symbols.is_assignable(value, target) {
            Ok(())
        } else {
            Err(mismatch(
                format!("cannot assign {} to {} of type {}", value, what, target),
                span,
            ))
        }
    }
}

impl TypeChecker<'_> {
    fn validate_variable(&self, var: &VariableEntry) -> Result<()> {
        self.validate_type(&var.ty, &var.span)
    }
}

/// Create a type mismatch error.
pub(crate) fn mismatch(message: impl Into<String>, span: &Span) -> CompileError {
    CompileError::new(ErrorCode::TypeMissMatch, message, span.clone())
}
