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

//! Static types during code generation.
//!
//! The generator does not track MiniJava types itself. It asks the type
//! checker again, in the scope of the method being generated.

use super::variables::VariableManager;
use super::CodeGenerator;
use crate::analyzer::{ClassId, ExpressionTyper};
use crate::ast::{Expr, Type};
use crate::error::{CompileError, Result};

/// Extension trait for static type queries.
pub trait TypeInference {
    /// Get the static type of an expression.
    fn static_type(&self, expr: &Expr) -> Result<Type>;

    /// Get the class an expression statically refers to.
    fn static_class(&self, expr: &Expr) -> Result<ClassId>;
}

impl TypeInference for CodeGenerator<'_> {
    fn static_type(&self, expr: &Expr) -> Result<Type> {
        let scope = self.current_scope()?;
        self.checker.type_of(expr, scope)
    }

    fn static_class(&self, expr: &Expr) -> Result<ClassId> {
        let ty = self.static_type(expr)?;
        ty.class_name()
            .and_then(|name| self.symbols.class_id(name))
            .ok_or_else(|| {
                CompileError::internal(
                    format!("Expected a class type, found {}", ty),
                    expr.span.clone(),
                )
            })
    }
}
