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

//! Method call code generation.
//!
//! Every call is virtual. The callee is looked up by name from the
//! receiver's static class, exactly as the type checker resolved it, and its
//! slot is loaded from the receiver's vtable at run time:
//!
//! ```text
//! ; Owner.method
//! %vt.ptr = bitcast i8* %recv to i8***
//! %vt     = load i8**, i8*** %vt.ptr
//! %slot   = getelementptr i8*, i8** %vt, i32 SLOT
//! %raw    = load i8*, i8** %slot
//! %fn     = bitcast i8* %raw to RET (i8*, ARGS...)*
//! %result = call RET %fn(i8* %recv, ARGS...)
//! ```

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::type_inference::TypeInference;
use super::types::{function_pointer_type, return_type, IrType, Value};
use super::CodeGenerator;
use crate::ast::Expr;
use crate::error::{CompileError, Result, Span};

/// Extension trait for method call code generation.
pub trait FunctionCallEmitter {
    /// Generate a virtual call `receiver.method(args)`.
    fn emit_message_send(
        &mut self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        span: &Span,
    ) -> Result<Value>;
}

impl FunctionCallEmitter for CodeGenerator<'_> {
    fn emit_message_send(
        &mut self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        span: &Span,
    ) -> Result<Value> {
        let (symbols, layouts) = (self.symbols, self.layouts);
        let class = self.static_class(receiver)?;
        let unresolved = || {
            CompileError::internal(
                format!(
                    "Method '{}.{}' cannot be resolved",
                    symbols.class(class).name,
                    method
                ),
                span.clone(),
            )
        };
        let target = symbols.find_method(class, method).ok_or_else(unresolved)?;
        let slot = layouts.method_slot(symbols, class, method).ok_or_else(unresolved)?;
        let target = symbols.method(target);
        let ret = target.return_type.as_ref().ok_or_else(unresolved)?;

        let object = self.emit_expression_as(receiver, IrType::I8Ptr)?;
        self.emit_comment(&format!("{}.{}", symbols.class(target.owner).name, method));

        let header = self.emit_assign(&format!("bitcast i8* {} to i8***", object.repr));
        let vtable = self.emit_assign(&format!("load i8**, i8*** {}", header));
        let entry = self.emit_assign(&format!("getelementptr i8*, i8** {}, i32 {}", vtable, slot));
        let raw = self.emit_assign(&format!("load i8*, i8** {}", entry));
        let function = self.emit_assign(&format!(
            "bitcast i8* {} to {}",
            raw,
            function_pointer_type(target)
        ));

        let mut operands = vec![object.typed()];
        for (param, arg) in target.params.iter().zip(args) {
            let value = self.emit_expression_as(arg, IrType::from_type(&param.ty))?;
            operands.push(value.typed());
        }

        Ok(self.emit_value(
            &format!(
                "call {} {}({})",
                return_type(target),
                function,
                operands.join(", ")
            ),
            IrType::from_type(ret),
        ))
    }
}
