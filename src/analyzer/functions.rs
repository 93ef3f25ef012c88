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

//! Method analysis for the semantic analyzer.
//!
//! This module provides method-related analysis:
//! - Method body and return type checking
//! - Message send validation (receiver, arity, argument types)

use super::expressions::ExpressionTyper;
use super::scope::Scope;
use super::statements::StatementChecker;
use super::type_check::{mismatch, TypeRules};
use super::TypeChecker;
use crate::ast::{Expr, MethodDecl, Statement, Type};
use crate::error::{CompileError, ErrorCode, Result, Span};

/// Extension trait for method analysis.
pub trait MethodChecker {
    /// Check the statements of the entry method.
    fn check_main_body(&self, scope: Scope, body: &[Statement]) -> Result<()>;

    /// Check a method body and its return expression.
    fn check_method(&self, scope: Scope, method: &MethodDecl) -> Result<()>;

    /// Type a message send `receiver.method(args)`.
    fn check_message_send(
        &self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        span: &Span,
        scope: Scope,
    ) -> Result<Type>;
}

impl MethodChecker for TypeChecker<'_> {
    fn check_main_body(&self, scope: Scope, body: &[Statement]) -> Result<()> {
        self.check_statements(body, scope)
    }

    fn check_method(&self, scope: Scope, method: &MethodDecl) -> Result<()> {
        self.check_statements(&method.body, scope)?;

        let declared = self
            .symbols
            .method(scope.method)
            .return_type
            .clone()
            .ok_or_else(|| {
                CompileError::internal(
                    format!("Method '{}' has no return type", method.name),
                    method.span.clone(),
                )
            })?;
        let returned = self.type_of(&method.return_expr, scope)?;
        let what = format!("the value returned by '{}'", method.name);
        self.expect_type(&returned, &declared, &what, &method.return_expr.span)
    }

    fn check_message_send(
        &self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        span: &Span,
        scope: Scope,
    ) -> Result<Type> {
        let receiver_type = self.type_of(receiver, scope)?;
        let Some(class_name) = receiver_type.class_name() else {
            return Err(mismatch(
                format!(
                    "cannot call '{}' on a value of type {}",
                    method, receiver_type
                ),
                &receiver.span,
            ));
        };
        let Some(class) = self.symbols.class_id(class_name) else {
            return Err(CompileError::new(
                ErrorCode::ClassNotFound,
                format!("Class '{}' is not declared", class_name),
                receiver.span.clone(),
            ));
        };
        if self.symbols.class(class).is_entry {
            return Err(mismatch(
                format!("methods of the main class '{}' cannot be called", class_name),
                &receiver.span,
            ));
        }

        let Some(method_id) = self.symbols.find_method(class, method) else {
            return Err(mismatch(
                format!("class '{}' has no method '{}'", class_name, method),
                span,
            ));
        };
        let target = self.symbols.method(method_id);

        if target.params.len() != args.len() {
            return Err(mismatch(
                format!(
                    "method '{}.{}' expects {} argument(s), found {}",
                    class_name,
                    method,
                    target.params.len(),
                    args.len()
                ),
                span,
            ));
        }

        for (param, arg) in target.params.iter().zip(args) {
            let arg_type = self.type_of(arg, scope)?;
            let what = format!("parameter '{}'", param.name);
            self.expect_assignable(&arg_type, &param.ty, &what, &arg.span)?;
        }

        target.return_type.clone().ok_or_else(|| {
            CompileError::internal(
                format!("Method '{}.{}' has no return type", class_name, method),
                span.clone(),
            )
        })
    }
}
