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

//! Control flow code generation.
//!
//! This module provides code generation for control flow statements:
//! - if/else statements (`if.then`, `if.else`, `if.end`)
//! - while loops (`loop.cond`, `loop.body`, `loop.end`)
//!
//! Every block ends with an explicit branch, so no block falls through.

use super::declarations::BlockGenerator;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::types::IrType;
use super::CodeGenerator;
use crate::ast::{IfStatement, WhileStatement};
use crate::error::Result;

/// Extension trait for control flow code generation.
pub trait ControlFlowEmitter {
    /// Generate code for an if statement.
    fn generate_if(&mut self, if_stmt: &IfStatement) -> Result<()>;

    /// Generate code for a while loop.
    fn generate_while(&mut self, while_stmt: &WhileStatement) -> Result<()>;
}

impl ControlFlowEmitter for CodeGenerator<'_> {
    fn generate_if(&mut self, if_stmt: &IfStatement) -> Result<()> {
        let [then_label, else_label, end_label] = self.make_labels(["if.then", "if.else", "if.end"]);

        let condition = self.emit_expression_as(&if_stmt.condition, IrType::I1)?;
        self.emit_cond_branch(&condition.repr, &then_label, &else_label);

        self.define_label(&then_label);
        self.generate_statement(&if_stmt.then_branch)?;
        self.emit_branch(&end_label);

        self.define_label(&else_label);
        self.generate_statement(&if_stmt.else_branch)?;
        self.emit_branch(&end_label);

        self.define_label(&end_label);
        Ok(())
    }

    fn generate_while(&mut self, while_stmt: &WhileStatement) -> Result<()> {
        let [cond_label, body_label, end_label] =
            self.make_labels(["loop.cond", "loop.body", "loop.end"]);

        self.emit_branch(&cond_label);
        self.define_label(&cond_label);
        let condition = self.emit_expression_as(&while_stmt.condition, IrType::I1)?;
        self.emit_cond_branch(&condition.repr, &body_label, &end_label);

        self.define_label(&body_label);
        self.generate_statement(&while_stmt.body)?;
        self.emit_branch(&cond_label);

        self.define_label(&end_label);
        Ok(())
    }
}
