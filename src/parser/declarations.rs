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

//! Class and method declaration parsing.
//!
//! This module handles:
//! - The entry class with its fixed `main` signature
//! - Plain and inheriting class declarations
//! - Method declarations with parameters, locals and the trailing return

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{ClassDecl, MainClass, MethodDecl, VarDecl};
use crate::error::{CompileError, Span};
use crate::lexer::Token;

/// Extension trait for declaration parsing.
pub trait DeclarationParser {
    /// Parse the entry class.
    fn parse_main_class(&mut self) -> Result<MainClass, CompileError>;

    /// Parse a class declaration, with or without `extends`.
    fn parse_class(&mut self) -> Result<ClassDecl, CompileError>;

    /// Parse a method declaration.
    fn parse_method(&mut self) -> Result<MethodDecl, CompileError>;

    /// Parse a parameter list after the opening parenthesis.
    fn parse_params(&mut self) -> Result<Vec<VarDecl>, CompileError>;

    /// Parse a method name. `main` is accepted so that later phases can reject it.
    fn parse_method_name(&mut self) -> Result<(String, Span), CompileError>;
}

impl<'a> DeclarationParser for Parser<'a> {
    fn parse_main_class(&mut self) -> Result<MainClass, CompileError> {
        let start = self.expect(&Token::Class, "Expected 'class' to start the main class")?;
        let (name, name_span) = self.expect_identifier("Expected main class name")?;
        self.expect(&Token::LeftBrace, "Expected '{' after main class name")?;

        self.expect(&Token::Public, "Expected 'public static void main'")?;
        self.expect(&Token::Static, "Expected 'static' after 'public'")?;
        self.expect(&Token::Void, "Expected 'void' after 'static'")?;
        self.expect(&Token::Main, "Expected 'main' after 'void'")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'main'")?;
        self.expect(&Token::StringType, "Expected 'String' parameter type")?;
        self.expect(&Token::LeftBracket, "Expected '[' after 'String'")?;
        self.expect(&Token::RightBracket, "Expected ']' after 'String['")?;
        let (args_name, _) = self.expect_identifier("Expected argument name")?;
        self.expect(&Token::RightParen, "Expected ')' after main arguments")?;
        self.expect(&Token::LeftBrace, "Expected '{' to open main")?;

        let locals = self.parse_var_decls()?;
        let body = self.parse_statements()?;

        self.expect(&Token::RightBrace, "Expected '}' to close main")?;
        self.expect(&Token::RightBrace, "Expected '}' to close the main class")?;

        Ok(MainClass {
            name,
            args_name,
            locals,
            body,
            span: start.merge(&name_span),
        })
    }

    fn parse_class(&mut self) -> Result<ClassDecl, CompileError> {
        let start = self.expect(&Token::Class, "Expected 'class'")?;
        let (name, name_span) = self.expect_identifier("Expected class name")?;

        let superclass = if self.match_token(&Token::Extends) {
            let (superclass, _) = self.expect_identifier("Expected superclass name after 'extends'")?;
            Some(superclass)
        } else {
            None
        };

        let mut class = ClassDecl::new(name, superclass, start.merge(&name_span));
        self.expect(&Token::LeftBrace, "Expected '{' after class header")?;

        class.fields = self.parse_var_decls()?;
        while self.check(&Token::Public) {
            class.methods.push(self.parse_method()?);
        }

        self.expect(&Token::RightBrace, "Expected '}' to close class")?;
        Ok(class)
    }

    fn parse_method(&mut self) -> Result<MethodDecl, CompileError> {
        let start = self.expect(&Token::Public, "Expected 'public'")?;
        let return_type = self.parse_type()?;
        let (name, name_span) = self.parse_method_name()?;

        self.expect(&Token::LeftParen, "Expected '(' after method name")?;
        let params = self.parse_params()?;
        self.expect(&Token::LeftBrace, "Expected '{' to open method body")?;

        let locals = self.parse_var_decls()?;
        let body = self.parse_statements()?;

        self.expect(&Token::Return, "Expected 'return' at the end of the method")?;
        let return_expr = self.parse_expression()?;
        self.expect(&Token::Semicolon, "Expected ';' after return expression")?;
        self.expect(&Token::RightBrace, "Expected '}' to close method")?;

        Ok(MethodDecl {
            name,
            return_type,
            params,
            locals,
            body,
            return_expr,
            span: start.merge(&name_span),
        })
    }

    fn parse_params(&mut self) -> Result<Vec<VarDecl>, CompileError> {
        let mut params = Vec::new();

        if !self.check(&Token::RightParen) {
            loop {
                let start = self.current_span();
                let ty = self.parse_type()?;
                let (name, end) = self.expect_identifier("Expected parameter name")?;
                params.push(VarDecl::new(name, ty, start.merge(&end)));
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(&Token::RightParen, "Expected ')' after parameters")?;
        Ok(params)
    }

    fn parse_method_name(&mut self) -> Result<(String, Span), CompileError> {
        if self.check(&Token::Main) {
            let span = self.current_span();
            self.advance();
            return Ok(("main".to_string(), span));
        }
        self.expect_identifier("Expected method name")
    }
}
