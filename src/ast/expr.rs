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

//! Expression AST nodes for the MiniJava compiler.

use super::Type;
use crate::error::Span;

/// An expression in the MiniJava language.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source span of this expression.
    pub span: Span,
}

impl Expr {
    /// Create a new expression.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// An integer literal.
    IntegerLiteral(i32),

    /// `true` or `false`.
    BoolLiteral(bool),

    /// A local, parameter, field or class name.
    Identifier(String),

    /// The receiver of the current method.
    This,

    /// `left op right` for `+ - * < &&`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `!operand`.
    Not(Box<Expr>),

    /// `array[index]`.
    ArrayLookup { array: Box<Expr>, index: Box<Expr> },

    /// `array.length`.
    ArrayLength(Box<Expr>),

    /// `receiver.method(args)`.
    MessageSend {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// `new C()`.
    NewObject(String),

    /// `new int[size]` or `new boolean[size]`.
    NewArray {
        element: ElementType,
        size: Box<Expr>,
    },

    /// A parenthesized expression.
    Grouped(Box<Expr>),
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Less,
    And,
}

impl BinaryOp {
    /// Get the operand type this operator requires.
    pub fn operand_type(&self) -> Type {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Less => Type::Int,
            BinaryOp::And => Type::Boolean,
        }
    }

    /// Get the type this operator produces.
    pub fn result_type(&self) -> Type {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => Type::Int,
            BinaryOp::Less | BinaryOp::And => Type::Boolean,
        }
    }

    /// Binding strength; a higher value binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::And => 1,
            BinaryOp::Less => 2,
            BinaryOp::Add | BinaryOp::Sub => 3,
            BinaryOp::Mul => 4,
        }
    }

    /// Get the operator symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Less => "<",
            BinaryOp::And => "&&",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The element type of an array allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Int,
    Boolean,
}

impl ElementType {
    /// Get the type of the allocated array.
    pub fn array_type(&self) -> Type {
        match self {
            ElementType::Int => Type::IntArray,
            ElementType::Boolean => Type::BooleanArray,
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Int => write!(f, "int"),
            ElementType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Binding strength of `!`.
const NOT_PRECEDENCE: u8 = 5;
/// Binding strength of atoms and postfix forms.
const POSTFIX_PRECEDENCE: u8 = 6;

impl Expr {
    /// How tightly this expression binds when printed without parentheses.
    fn precedence(&self) -> u8 {
        match &self.kind {
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Not(_) => NOT_PRECEDENCE,
            _ => POSTFIX_PRECEDENCE,
        }
    }
}

/// An operand printed in parentheses when it binds looser than `.1`.
struct Operand<'a>(&'a Expr, u8);

impl std::fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.precedence() < self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprKind::IntegerLiteral(v) => write!(f, "{}", v),
            ExprKind::BoolLiteral(v) => write!(f, "{}", v),
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::This => write!(f, "this"),
            ExprKind::Binary { op, left, right } => {
                // operators associate to the left
                let precedence = op.precedence();
                write!(
                    f,
                    "{} {} {}",
                    Operand(left, precedence),
                    op,
                    Operand(right, precedence + 1)
                )
            }
            ExprKind::Not(operand) => write!(f, "!{}", Operand(operand, NOT_PRECEDENCE)),
            ExprKind::ArrayLookup { array, index } => {
                write!(f, "{}[{}]", Operand(array, POSTFIX_PRECEDENCE), index)
            }
            ExprKind::ArrayLength(array) => {
                write!(f, "{}.length", Operand(array, POSTFIX_PRECEDENCE))
            }
            ExprKind::MessageSend {
                receiver,
                method,
                args,
            } => {
                write!(f, "{}.{}(", Operand(receiver, POSTFIX_PRECEDENCE), method)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            ExprKind::NewObject(class) => write!(f, "new {}()", class),
            ExprKind::NewArray { element, size } => write!(f, "new {}[{}]", element, size),
            ExprKind::Grouped(inner) => write!(f, "({})", inner),
        }
    }
}
