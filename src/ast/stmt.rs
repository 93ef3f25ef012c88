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

//! Statement and declaration AST nodes for the MiniJava compiler.

use super::{Expr, Type};
use crate::error::Span;

/// A statement in the MiniJava language.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The source span of this statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of statement.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// `{ statements }`
    Block(Vec<Statement>),
    /// `target = value;`
    Assign { target: String, value: Expr },
    /// `target[index] = value;`
    ArrayAssign {
        target: String,
        index: Expr,
        value: Expr,
    },
    /// `if (condition) then_branch else else_branch`
    If(IfStatement),
    /// `while (condition) body`
    While(WhileStatement),
    /// `System.out.println(value);`
    Print(Expr),
}

/// An if statement. MiniJava requires the else branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition.
    pub condition: Expr,
    /// Executed when the condition holds.
    pub then_branch: Box<Statement>,
    /// Executed otherwise.
    pub else_branch: Box<Statement>,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// The loop condition.
    pub condition: Expr,
    /// The loop body.
    pub body: Box<Statement>,
}

/// A field, parameter or local variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared name.
    pub name: String,
    /// The declared type, recorded verbatim.
    pub ty: Type,
    /// The source span of the declaration.
    pub span: Span,
}

impl VarDecl {
    /// Create a new declaration.
    pub fn new(name: impl Into<String>, ty: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            ty,
            span,
        }
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// The method name.
    pub name: String,
    /// The declared return type.
    pub return_type: Type,
    /// Parameters in declaration order.
    pub params: Vec<VarDecl>,
    /// Locals in declaration order.
    pub locals: Vec<VarDecl>,
    /// The statements of the body.
    pub body: Vec<Statement>,
    /// The trailing `return` expression.
    pub return_expr: Expr,
    /// The source span of the method header.
    pub span: Span,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::Block(statements) => {
                write!(f, "{{")?;
                for stmt in statements {
                    write!(f, " {}", stmt)?;
                }
                write!(f, " }}")
            }
            StatementKind::Assign { target, value } => write!(f, "{} = {};", target, value),
            StatementKind::ArrayAssign {
                target,
                index,
                value,
            } => write!(f, "{}[{}] = {};", target, index, value),
            StatementKind::If(if_stmt) => write!(
                f,
                "if ({}) {} else {}",
                if_stmt.condition, if_stmt.then_branch, if_stmt.else_branch
            ),
            StatementKind::While(while_stmt) => {
                write!(f, "while ({}) {}", while_stmt.condition, while_stmt.body)
            }
            StatementKind::Print(value) => write!(f, "System.out.println({});", value),
        }
    }
}

impl std::fmt::Display for VarDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl std::fmt::Display for MethodDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "public {} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        writeln!(f, ") {{")?;
        for local in &self.locals {
            writeln!(f, "        {};", local)?;
        }
        for stmt in &self.body {
            writeln!(f, "        {}", stmt)?;
        }
        writeln!(f, "        return {};", self.return_expr)?;
        write!(f, "    }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExprKind;

    fn int(v: i32) -> Expr {
        Expr::new(ExprKind::IntegerLiteral(v), Span::default())
    }

    #[test]
    fn test_display_if() {
        let stmt = Statement::new(
            StatementKind::If(IfStatement {
                condition: Expr::new(ExprKind::BoolLiteral(true), Span::default()),
                then_branch: Box::new(Statement::new(StatementKind::Print(int(1)), Span::default())),
                else_branch: Box::new(Statement::new(StatementKind::Block(vec![]), Span::default())),
            }),
            Span::default(),
        );
        assert_eq!(stmt.to_string(), "if (true) System.out.println(1); else { }");
    }

    #[test]
    fn test_display_array_assign() {
        let stmt = Statement::new(
            StatementKind::ArrayAssign {
                target: "a".to_string(),
                index: int(0),
                value: int(7),
            },
            Span::default(),
        );
        assert_eq!(stmt.to_string(), "a[0] = 7;");
    }

    #[test]
    fn test_display_var_decl() {
        let decl = VarDecl::new("xs", Type::IntArray, Span::default());
        assert_eq!(decl.to_string(), "int[] xs");
    }
}
