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

//! Expression typing for the semantic analyzer.
//!
//! `type_of` has no side effects. The type checker calls it while checking
//! statements, and the code generator calls it again to learn the static
//! type of receivers and operands.

use super::functions::MethodChecker;
use super::operators::OperatorChecker;
use super::scope::{Resolution, Scope};
use super::type_check::mismatch;
use super::TypeChecker;
use crate::ast::{Expr, ExprKind, Type};
use crate::error::{CompileError, ErrorCode, Result, Span};

/// Extension trait for expression typing.
pub trait ExpressionTyper {
    /// Get the type of an expression in a scope, checking its subexpressions.
    fn type_of(&self, expr: &Expr, scope: Scope) -> Result<Type>;

    /// Get the type of an identifier used as a value.
    fn type_of_identifier(&self, name: &str, span: &Span, scope: Scope) -> Result<Type>;

    /// Get the type of a variable that may be assigned to.
    fn type_of_variable(&self, name: &str, span: &Span, scope: Scope) -> Result<Type>;

    /// Get the class type of `this`.
    fn type_of_this(&self, span: &Span, scope: Scope) -> Result<Type>;

    /// Get the type of a class instantiation.
    fn type_of_new_object(&self, class: &str, span: &Span) -> Result<Type>;

    /// Check that an expression is an indexable array and get its element type.
    fn array_element_type(&self, array: &Expr, scope: Scope) -> Result<Type>;
}

impl ExpressionTyper for TypeChecker<'_> {
    fn type_of(&self, expr: &Expr, scope: Scope) -> Result<Type> {
        match &expr.kind {
            ExprKind::IntegerLiteral(_) => Ok(Type::Int),
            ExprKind::BoolLiteral(_) => Ok(Type::Boolean),
            ExprKind::Identifier(name) => self.type_of_identifier(name, &expr.span, scope),
            ExprKind::This => self.type_of_this(&expr.span, scope),
            ExprKind::Binary { op, left, right } => {
                self.check_binary(*op, left, right, &expr.span, scope)
            }
            ExprKind::Not(operand) => self.check_not(operand, scope),
            ExprKind::ArrayLookup { array, index } => {
                let element = self.array_element_type(array, scope)?;
                let index_type = self.type_of(index, scope)?;
                if index_type != Type::Int {
                    return Err(mismatch(
                        format!("array index must be int, found {}", index_type),
                        &index.span,
                    ));
                }
                Ok(element)
            }
            ExprKind::ArrayLength(array) => {
                self.array_element_type(array, scope)?;
                Ok(Type::Int)
            }
            ExprKind::MessageSend {
                receiver,
                method,
                args,
            } => self.check_message_send(receiver, method, args, &expr.span, scope),
            ExprKind::NewObject(class) => self.type_of_new_object(class, &expr.span),
            ExprKind::NewArray { element, size } => {
                let size_type = self.type_of(size, scope)?;
                if size_type != Type::Int {
                    return Err(mismatch(
                        format!("array size must be int, found {}", size_type),
                        &size.span,
                    ));
                }
                Ok(element.array_type())
            }
            ExprKind::Grouped(inner) => self.type_of(inner, scope),
        }
    }

    fn type_of_identifier(&self, name: &str, span: &Span, scope: Scope) -> Result<Type> {
        match self.symbols.resolve(scope, name) {
            Some(Resolution::Class(_)) => Err(mismatch(
                format!("class '{}' cannot be used as a value", name),
                span,
            )),
            Some(_) => self.type_of_variable(name, span, scope),
            None => Err(CompileError::new(
                ErrorCode::UnknownType,
                format!("Cannot resolve '{}'", name),
                span.clone(),
            )),
        }
    }

    fn type_of_variable(&self, name: &str, span: &Span, scope: Scope) -> Result<Type> {
        let resolved = match self.symbols.resolve(scope, name) {
            Some(Resolution::Class(_)) | None => {
                return Err(CompileError::new(
                    ErrorCode::UnknownType,
                    format!("Cannot resolve variable '{}'", name),
                    span.clone(),
                ));
            }
            Some(resolved) => resolved,
        };

        let ty = resolved.ty(self.symbols);
        if ty == Type::StringArray {
            return Err(mismatch(
                format!("'{}' of type String[] cannot be used", name),
                span,
            ));
        }
        Ok(ty)
    }

    fn type_of_this(&self, span: &Span, scope: Scope) -> Result<Type> {
        let class = self.symbols.class(scope.class);
        if class.is_entry {
            return Err(mismatch("'this' cannot be used in the main method", span));
        }
        Ok(Type::Class(class.name.clone()))
    }

    fn type_of_new_object(&self, class: &str, span: &Span) -> Result<Type> {
        let Some(id) = self.symbols.class_id(class) else {
            return Err(CompileError::new(
                ErrorCode::ClassNotFound,
                format!("Class '{}' is not declared", class),
                span.clone(),
            ));
        };
        if self.symbols.class(id).is_entry {
            return Err(mismatch(
                format!("the main class '{}' cannot be instantiated", class),
                span,
            ));
        }
        Ok(Type::Class(class.to_string()))
    }

    fn array_element_type(&self, array: &Expr, scope: Scope) -> Result<Type> {
        let ty = self.type_of(array, scope)?;
        ty.element_type().ok_or_else(|| {
            mismatch(
                format!("expected int[] or boolean[], found {}", ty),
                &array.span,
            )
        })
    }
}
