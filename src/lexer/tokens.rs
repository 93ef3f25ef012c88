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

//! Token definitions for the MiniJava language.

use logos::{FilterResult, Lexer, Logos};

/// A token in the MiniJava language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Block comment, consumed by its callback and never emitted.
    #[token("/*", skip_block_comment)]
    BlockComment,

    // Literals
    /// Decimal integer literal that fits in an `i32`.
    #[regex("[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Integer(i32),
    /// Identifier (class, method or variable name).
    #[regex("[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Declaration keywords
    /// `class`
    #[token("class")]
    Class,
    /// `extends`
    #[token("extends")]
    Extends,
    /// `public`
    #[token("public")]
    Public,
    /// `static`
    #[token("static")]
    Static,
    /// `void`
    #[token("void")]
    Void,
    /// `main`
    #[token("main")]
    Main,
    /// `String`
    #[token("String")]
    StringType,
    /// `return`
    #[token("return")]
    Return,

    // Type keywords
    /// `int`
    #[token("int")]
    Int,
    /// `boolean`
    #[token("boolean")]
    Boolean,

    // Statement keywords
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `System.out.println`
    #[token("System.out.println")]
    Println,

    // Expression keywords
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `this`
    #[token("this")]
    This,
    /// `new`
    #[token("new")]
    New,
    /// `length`
    #[token("length")]
    Length,

    // Operators
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `<`
    #[token("<")]
    Less,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equal,

    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::BlockComment => write!(f, "comment"),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "identifier '{}'", s),
            Token::Class => write!(f, "'class'"),
            Token::Extends => write!(f, "'extends'"),
            Token::Public => write!(f, "'public'"),
            Token::Static => write!(f, "'static'"),
            Token::Void => write!(f, "'void'"),
            Token::Main => write!(f, "'main'"),
            Token::StringType => write!(f, "'String'"),
            Token::Return => write!(f, "'return'"),
            Token::Int => write!(f, "'int'"),
            Token::Boolean => write!(f, "'boolean'"),
            Token::If => write!(f, "'if'"),
            Token::Else => write!(f, "'else'"),
            Token::While => write!(f, "'while'"),
            Token::Println => write!(f, "'System.out.println'"),
            Token::True => write!(f, "'true'"),
            Token::False => write!(f, "'false'"),
            Token::This => write!(f, "'this'"),
            Token::New => write!(f, "'new'"),
            Token::Length => write!(f, "'length'"),
            Token::AndAnd => write!(f, "'&&'"),
            Token::Less => write!(f, "'<'"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Bang => write!(f, "'!'"),
            Token::Equal => write!(f, "'='"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::LeftBracket => write!(f, "'['"),
            Token::RightBracket => write!(f, "']'"),
            Token::LeftBrace => write!(f, "'{{'"),
            Token::RightBrace => write!(f, "'}}'"),
            Token::Semicolon => write!(f, "';'"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
        }
    }
}

/// Consume a block comment up to and including the closing `*/`.
fn skip_block_comment(lex: &mut Lexer<'_, Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}
