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

//! Expression parsing for the parser.
//!
//! This module provides expression parsing functionality:
//! - Precedence climbing for `&&`, `<`, `+ -` and `*`
//! - The `!` prefix operator
//! - Postfix forms (array lookup, `.length`, message sends)
//! - Primary expressions (literals, identifiers, `this`, allocations, grouping)

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{BinaryOp, ElementType, Expr, ExprKind};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression.
    fn parse_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an `&&` expression.
    fn parse_and_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a `<` expression.
    fn parse_comparison_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an additive expression.
    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a multiplicative expression.
    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a `!` expression.
    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a postfix expression (lookups, lengths and message sends).
    fn parse_postfix_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse the argument list of a message send after the opening parenthesis.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, CompileError>;

    /// Parse a primary expression.
    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an allocation after the `new` keyword.
    fn parse_allocation(&mut self) -> Result<Expr, CompileError>;
}

/// Build a binary node spanning both operands.
fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(&right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        self.descend()?;
        let expr = self.parse_and_expression()?;
        self.ascend(1);
        Ok(expr)
    }

    // Each operator in a chain deepens the left operand by one level.

    fn parse_and_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_comparison_expression()?;
        let mut chained = 0;

        while self.match_token(&Token::AndAnd) {
            self.descend()?;
            chained += 1;
            let right = self.parse_comparison_expression()?;
            left = binary(BinaryOp::And, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    fn parse_comparison_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_additive_expression()?;
        let mut chained = 0;

        while self.match_token(&Token::Less) {
            self.descend()?;
            chained += 1;
            let right = self.parse_additive_expression()?;
            left = binary(BinaryOp::Less, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_multiplicative_expression()?;
        let mut chained = 0;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            self.descend()?;
            chained += 1;
            let right = self.parse_multiplicative_expression()?;
            left = binary(op, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_unary_expression()?;
        let mut chained = 0;

        while self.match_token(&Token::Star) {
            self.descend()?;
            chained += 1;
            let right = self.parse_unary_expression()?;
            left = binary(BinaryOp::Mul, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError> {
        if self.check(&Token::Bang) {
            let start = self.current_span();
            self.advance();
            self.descend()?;
            let operand = self.parse_unary_expression()?;
            self.ascend(1);
            let span = start.merge(&operand.span);
            return Ok(Expr::new(ExprKind::Not(Box::new(operand)), span));
        }

        self.parse_postfix_expression()
    }

    fn parse_postfix_expression(&mut self) -> Result<Expr, CompileError> {
        let mut expr = self.parse_primary_expression()?;
        let mut chained = 0;

        loop {
            if matches!(self.peek(), Some(Token::LeftBracket | Token::Dot)) {
                self.descend()?;
                chained += 1;
            }

            if self.match_token(&Token::LeftBracket) {
                let index = self.parse_expression()?;
                let end = self.expect(&Token::RightBracket, "Expected ']' after array index")?;
                let span = expr.span.merge(&end);
                expr = Expr::new(
                    ExprKind::ArrayLookup {
                        array: Box::new(expr),
                        index: Box::new(index),
                    },
                    span,
                );
            } else if self.match_token(&Token::Dot) {
                if self.check(&Token::Length) {
                    let end = self.current_span();
                    self.advance();
                    let span = expr.span.merge(&end);
                    expr = Expr::new(ExprKind::ArrayLength(Box::new(expr)), span);
                    continue;
                }

                let (method, _) = self.expect_identifier("Expected method name or 'length' after '.'")?;
                self.expect(&Token::LeftParen, "Expected '(' after method name")?;
                let args = self.parse_arguments()?;
                let span = expr.span.merge(&self.previous_span());
                expr = Expr::new(
                    ExprKind::MessageSend {
                        receiver: Box::new(expr),
                        method,
                        args,
                    },
                    span,
                );
            } else {
                break;
            }
        }

        self.ascend(chained);
        Ok(expr)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>, CompileError> {
        let mut args = Vec::new();

        if !self.check(&Token::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(&Token::RightParen, "Expected ')' after arguments")?;
        Ok(args)
    }

    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError> {
        let span = self.current_span();

        let kind = match self.peek() {
            Some(Token::Integer(value)) => ExprKind::IntegerLiteral(*value),
            Some(Token::True) => ExprKind::BoolLiteral(true),
            Some(Token::False) => ExprKind::BoolLiteral(false),
            Some(Token::This) => ExprKind::This,
            Some(Token::Identifier(name)) => ExprKind::Identifier(name.clone()),
            Some(Token::New) => return self.parse_allocation(),
            Some(Token::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                let end = self.expect(&Token::RightParen, "Expected ')' after expression")?;
                return Ok(Expr::new(ExprKind::Grouped(Box::new(inner)), span.merge(&end)));
            }
            Some(token) => {
                let message = format!("Expected expression, found {}", token);
                return Err(self.error(ErrorCode::ExpectedExpression, message));
            }
            None => return Err(self.error(ErrorCode::ExpectedExpression, "Expected expression")),
        };

        self.advance();
        Ok(Expr::new(kind, span))
    }

    fn parse_allocation(&mut self) -> Result<Expr, CompileError> {
        let start = self.expect(&Token::New, "Expected 'new'")?;

        let element = match self.peek() {
            Some(Token::Int) => Some(ElementType::Int),
            Some(Token::Boolean) => Some(ElementType::Boolean),
            _ => None,
        };

        if let Some(element) = element {
            self.advance();
            self.expect(&Token::LeftBracket, "Expected '[' in array allocation")?;
            let size = self.parse_expression()?;
            let end = self.expect(&Token::RightBracket, "Expected ']' after array size")?;
            return Ok(Expr::new(
                ExprKind::NewArray {
                    element,
                    size: Box::new(size),
                },
                start.merge(&end),
            ));
        }

        let (class, _) = self.expect_identifier("Expected class name after 'new'")?;
        self.expect(&Token::LeftParen, "Expected '(' after class name")?;
        let end = self.expect(&Token::RightParen, "Expected ')' in object allocation")?;
        Ok(Expr::new(ExprKind::NewObject(class), start.merge(&end)))
    }
}
