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

//! Type parsing for the parser.
//!
//! This module handles `int`, `boolean`, their array forms and class names.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::Type;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Trait for type parsing operations.
pub trait TypeParser<'a> {
    /// Parse a type annotation.
    fn parse_type(&mut self) -> Result<Type, CompileError>;

    /// Check if the upcoming tokens start a variable declaration.
    fn at_var_decl(&self) -> bool;
}

impl<'a> TypeParser<'a> for Parser<'a> {
    fn parse_type(&mut self) -> Result<Type, CompileError> {
        match self.peek() {
            Some(Token::Int) => {
                self.advance();
                if self.match_token(&Token::LeftBracket) {
                    self.expect(&Token::RightBracket, "Expected ']' after 'int['")?;
                    Ok(Type::IntArray)
                } else {
                    Ok(Type::Int)
                }
            }
            Some(Token::Boolean) => {
                self.advance();
                if self.match_token(&Token::LeftBracket) {
                    self.expect(&Token::RightBracket, "Expected ']' after 'boolean['")?;
                    Ok(Type::BooleanArray)
                } else {
                    Ok(Type::Boolean)
                }
            }
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(Type::Class(name))
            }
            Some(token) => {
                let message = format!("Expected a type, found {}", token);
                Err(self.error(ErrorCode::ExpectedType, message))
            }
            None => Err(self.error(ErrorCode::ExpectedType, "Expected a type")),
        }
    }

    fn at_var_decl(&self) -> bool {
        match self.peek() {
            Some(Token::Int) | Some(Token::Boolean) => true,
            Some(Token::Identifier(_)) => matches!(self.peek_ahead(1), Some(Token::Identifier(_))),
            _ => false,
        }
    }
}
