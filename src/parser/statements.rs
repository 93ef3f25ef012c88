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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Blocks
//! - Assignments to variables and array elements
//! - `System.out.println` statements
//! - Local variable declarations at the head of a body

use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Statement, StatementKind, VarDecl};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement.
    fn parse_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse statements until a closing brace or `return`.
    fn parse_statements(&mut self) -> Result<Vec<Statement>, CompileError>;

    /// Parse a block after checking for the opening brace.
    fn parse_block(&mut self) -> Result<Statement, CompileError>;

    /// Parse an assignment or array assignment.
    fn parse_assignment(&mut self) -> Result<Statement, CompileError>;

    /// Parse a `System.out.println(e);` statement.
    fn parse_print(&mut self) -> Result<Statement, CompileError>;

    /// Parse a single `Type name;` declaration.
    fn parse_var_decl(&mut self) -> Result<VarDecl, CompileError>;

    /// Parse the variable declarations at the head of a body.
    fn parse_var_decls(&mut self) -> Result<Vec<VarDecl>, CompileError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        self.descend()?;
        let statement = match self.peek() {
            Some(Token::LeftBrace) => self.parse_block(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::Println) => self.parse_print(),
            Some(Token::Identifier(_)) => self.parse_assignment(),
            Some(token) => {
                let message = format!("Expected statement, found {}", token);
                Err(self.error(ErrorCode::ExpectedStatement, message))
            }
            None => Err(self.error(ErrorCode::ExpectedStatement, "Expected statement")),
        }?;
        self.ascend(1);
        Ok(statement)
    }

    fn parse_statements(&mut self) -> Result<Vec<Statement>, CompileError> {
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check(&Token::RightBrace) && !self.check(&Token::Return)
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_block(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::LeftBrace, "Expected '{'")?;
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check(&Token::RightBrace) {
            statements.push(self.parse_statement()?);
        }
        let end = self.expect(&Token::RightBrace, "Expected '}' to close block")?;
        Ok(Statement::new(
            StatementKind::Block(statements),
            start.merge(&end),
        ))
    }

    fn parse_assignment(&mut self) -> Result<Statement, CompileError> {
        let (target, start) = self.expect_identifier("Expected assignment target")?;

        let kind = if self.match_token(&Token::LeftBracket) {
            let index = self.parse_expression()?;
            self.expect(&Token::RightBracket, "Expected ']' after array index")?;
            self.expect(&Token::Equal, "Expected '=' in array assignment")?;
            let value = self.parse_expression()?;
            StatementKind::ArrayAssign {
                target,
                index,
                value,
            }
        } else {
            self.expect(&Token::Equal, "Expected '=' in assignment")?;
            let value = self.parse_expression()?;
            StatementKind::Assign { target, value }
        };

        let end = self.expect(&Token::Semicolon, "Expected ';' after assignment")?;
        Ok(Statement::new(kind, start.merge(&end)))
    }

    fn parse_print(&mut self) -> Result<Statement, CompileError> {
        let start = self.expect(&Token::Println, "Expected 'System.out.println'")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'System.out.println'")?;
        let value = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after printed expression")?;
        let end = self.expect(&Token::Semicolon, "Expected ';' after print statement")?;
        Ok(Statement::new(StatementKind::Print(value), start.merge(&end)))
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl, CompileError> {
        let start = self.current_span();
        let ty = self.parse_type()?;
        let (name, _) = self.expect_identifier("Expected variable name after type")?;
        let end = self.expect(&Token::Semicolon, "Expected ';' after variable declaration")?;
        Ok(VarDecl::new(name, ty, start.merge(&end)))
    }

    fn parse_var_decls(&mut self) -> Result<Vec<VarDecl>, CompileError> {
        let mut decls = Vec::new();
        while self.at_var_decl() {
            decls.push(self.parse_var_decl()?);
        }
        Ok(decls)
    }
}
