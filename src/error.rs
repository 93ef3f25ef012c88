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

//! Error types for the MiniJava compiler.
//!
//! Every phase reports the first violation it finds as a [`CompileError`].
//! The driver is the only place where errors are caught and reported.

use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a range.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// The compiler phase that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexing,
    Parsing,
    SymbolCollection,
    TypeChecking,
    CodeGeneration,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Lexing => "lexing",
            Phase::Parsing => "parsing",
            Phase::SymbolCollection => "symbol collection",
            Phase::TypeChecking => "type checking",
            Phase::CodeGeneration => "code generation",
        };
        write!(f, "{}", name)
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E002)
    InvalidCharacter,
    IntegerLiteralTooLarge,

    // Syntax errors (E100-E105)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedType,

    // Definition conflicts (E200-E202)
    MultipleClassDefinition,
    MultipleMethodDefinition,
    MultipleVariableDefinition,

    // Resolution failures (E210-E211)
    ClassNotFound,
    UnknownType,

    // Type errors (E220)
    TypeMissMatch,

    // Broken invariants between phases (E300)
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::IntegerLiteralTooLarge => "E002",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedExpression => "E102",
            ErrorCode::ExpectedStatement => "E103",
            ErrorCode::ExpectedIdentifier => "E104",
            ErrorCode::ExpectedType => "E105",

            // Definition conflicts
            ErrorCode::MultipleClassDefinition => "E200",
            ErrorCode::MultipleMethodDefinition => "E201",
            ErrorCode::MultipleVariableDefinition => "E202",

            // Resolution failures
            ErrorCode::ClassNotFound => "E210",
            ErrorCode::UnknownType => "E211",

            // Type errors
            ErrorCode::TypeMissMatch => "E220",

            ErrorCode::InternalError => "E300",
        }
    }

    /// Get the phase that raises this error.
    ///
    /// `ClassNotFound` is raised both while collecting symbols (unknown
    /// superclass) and while type checking (unknown allocation target); it is
    /// attributed to the earlier phase.
    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::InvalidCharacter | ErrorCode::IntegerLiteralTooLarge => Phase::Lexing,
            ErrorCode::UnexpectedToken
            | ErrorCode::UnexpectedEndOfFile
            | ErrorCode::ExpectedExpression
            | ErrorCode::ExpectedStatement
            | ErrorCode::ExpectedIdentifier
            | ErrorCode::ExpectedType => Phase::Parsing,
            ErrorCode::MultipleClassDefinition
            | ErrorCode::MultipleMethodDefinition
            | ErrorCode::MultipleVariableDefinition
            | ErrorCode::ClassNotFound => Phase::SymbolCollection,
            ErrorCode::UnknownType | ErrorCode::TypeMissMatch => Phase::TypeChecking,
            ErrorCode::InternalError => Phase::CodeGeneration,
        }
    }
}

/// A compiler error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Create an internal error for an invariant one phase expects from another.
    pub fn internal(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::InternalError, message, span)
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[last_newline..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let loc = SourceLocation::from_offset(source, error.span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    let underline_start = loc.column - 1;
    let underline_len = error
        .span
        .len()
        .min(loc.line_content.len().saturating_sub(underline_start))
        .max(1);
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// Render an error as an ariadne report.
///
/// Colors are only used when `color` is set, so the rendering can be
/// compared in tests.
pub fn render_report(error: &CompileError, source: &str, filename: &str, color: bool) -> String {
    use ariadne::{Config, Label, Report, ReportKind, Source};

    let end = error.span.end.min(source.len());
    let start = error.span.start.min(end);

    let mut report = Report::build(ReportKind::Error, filename, start)
        .with_config(Config::default().with_color(color))
        .with_code(error.code_str())
        .with_message(&error.message)
        .with_label(Label::new((filename, start..end)).with_message(error.code.phase()));
    if let Some(hint) = &error.hint {
        report = report.with_note(hint);
    }

    let mut buffer = Vec::new();
    let written = report
        .finish()
        .write((filename, Source::from(source)), &mut buffer);
    match written {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => format_error(error, source, Some(filename)),
    }
}
