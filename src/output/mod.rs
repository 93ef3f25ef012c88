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

//! Output module for the MiniJava compiler.
//!
//! Every input file produces one textual LLVM IR module named after the
//! input's stem, e.g. `Factorial.java` becomes `Factorial.ll`.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The extension of generated modules.
pub const LL_EXTENSION: &str = "ll";

/// Stem used when the input path has none.
const FALLBACK_STEM: &str = "module";

/// Derive the module file name for an input file.
pub fn ll_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_STEM);
    PathBuf::from(format!("{}.{}", stem, LL_EXTENSION))
}

/// Write a module to `path`, replacing any existing file.
pub fn write_ll(module: &str, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(module.as_bytes())?;
    file.flush()
}
