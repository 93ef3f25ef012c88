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

//! Control flow statement parsing.
//!
//! - `if (condition) statement else statement`
//! - `while (condition) statement`

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::ast::{IfStatement, Statement, StatementKind, WhileStatement};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// Parse an if statement. The else branch is mandatory.
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a while loop.
    fn parse_while_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> ControlFlowParser for Parser<'a> {
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::If, "Expected 'if'")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after if condition")?;

        let then_branch = self.parse_statement()?;
        self.expect(&Token::Else, "Expected 'else' after if branch")?;
        let else_branch = self.parse_statement()?;

        let span = start.merge(&else_branch.span);
        Ok(Statement::new(
            StatementKind::If(IfStatement {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            }),
            span,
        ))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::While, "Expected 'while'")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after while condition")?;

        let body = self.parse_statement()?;

        let span = start.merge(&body.span);
        Ok(Statement::new(
            StatementKind::While(WhileStatement {
                condition,
                body: Box::new(body),
            }),
            span,
        ))
    }
}
