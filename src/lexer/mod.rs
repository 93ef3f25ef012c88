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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Lexer module for the MiniJava compiler.
//!
//! This module tokenizes MiniJava source code into a stream of tokens.
//! It handles:
//! - Keywords and identifiers
//! - Decimal integer literals
//! - Operators and punctuation, including `System.out.println`
//! - Line (`//`) and block (`/* */`) comments

mod tokens;

pub use tokens::Token;

use crate::error::{CompileError, ErrorCode, Span};
use logos::Logos;

/// Tokenize source code into a vector of tokens with their spans.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(lexical_error(lexer.slice(), span)),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Classify a slice the lexer could not turn into a token.
fn lexical_error(slice: &str, span: Span) -> CompileError {
    if slice.starts_with("/*") {
        CompileError::new(
            ErrorCode::InvalidCharacter,
            "Unterminated block comment",
            Span::new(span.start, span.start + 2),
        )
        .with_hint("close the comment with '*/'")
    } else if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        CompileError::new(
            ErrorCode::IntegerLiteralTooLarge,
            format!("Integer literal {} does not fit in an int", slice),
            span,
        )
        .with_hint("int values range from -2147483648 to 2147483647")
    } else {
        CompileError::new(
            ErrorCode::InvalidCharacter,
            format!("Unexpected character sequence '{}'", slice),
            span,
        )
    }
}
