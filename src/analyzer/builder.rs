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

//! Symbol collection.
//!
//! The builder walks the program once in declaration order and fills the
//! [`SymbolTable`]. It stops at the first definition conflict:
//! - a class declared twice, or extending an unknown or later class
//! - a second `main`, a method declared twice in one class, or an override
//!   that changes the inherited signature
//! - a field, parameter or local declared twice in its scope

use super::symbol::{ClassEntry, ClassId, MethodEntry, VariableEntry, VariableKind};
use super::symbol_table::SymbolTable;
use crate::ast::{ClassDecl, MainClass, MethodDecl, Program, Type, VarDecl};
use crate::error::{CompileError, ErrorCode, Result};

/// Builds the symbol table of a program.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    /// The table being filled.
    table: SymbolTable,
}

impl SymbolTableBuilder {
    /// Create a builder with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect all symbols of the program.
    pub fn build(mut self, program: &Program) -> Result<SymbolTable> {
        self.collect_main_class(&program.main)?;
        for class in &program.classes {
            self.collect_class(class)?;
        }
        Ok(self.table)
    }

    fn collect_main_class(&mut self, main: &MainClass) -> Result<()> {
        let mut entry = ClassEntry::new(main.name.clone(), None, main.span.clone());
        entry.is_entry = true;
        let class = self.table.add_class(entry);

        let args = VariableEntry::new(
            main.args_name.clone(),
            Type::StringArray,
            VariableKind::Parameter,
            main.span.clone(),
        );
        let locals = self.collect_locals(std::slice::from_ref(&args), &main.locals)?;

        self.table.add_method(MethodEntry {
            name: "main".to_string(),
            owner: class,
            return_type: None,
            params: vec![args],
            locals,
            span: main.span.clone(),
        });
        Ok(())
    }

    fn collect_class(&mut self, decl: &ClassDecl) -> Result<()> {
        if self.table.class_id(&decl.name).is_some() {
            return Err(CompileError::new(
                ErrorCode::MultipleClassDefinition,
                format!("Class '{}' is defined more than once", decl.name),
                decl.span.clone(),
            ));
        }

        let superclass = match &decl.superclass {
            Some(name) => Some(self.resolve_superclass(decl, name)?),
            None => None,
        };

        let class = self
            .table
            .add_class(ClassEntry::new(decl.name.clone(), superclass, decl.span.clone()));
        tracing::trace!(class = %decl.name, ?superclass, "collected class");

        for field in &decl.fields {
            if self.table.class(class).field(&field.name).is_some() {
                return Err(duplicate_variable("field", field, &decl.name));
            }
            self.table.add_field(class, variable(field, VariableKind::Field));
        }

        for method in &decl.methods {
            self.collect_method(class, decl, method)?;
        }

        Ok(())
    }

    fn resolve_superclass(&self, decl: &ClassDecl, name: &str) -> Result<ClassId> {
        if name == decl.name {
            return Err(CompileError::new(
                ErrorCode::ClassNotFound,
                format!("Class '{}' cannot extend itself", decl.name),
                decl.span.clone(),
            ));
        }

        let Some(superclass) = self.table.class_id(name) else {
            return Err(CompileError::new(
                ErrorCode::ClassNotFound,
                format!("Superclass '{}' of class '{}' is not declared", name, decl.name),
                decl.span.clone(),
            )
            .with_hint("a superclass must be declared before the classes extending it"));
        };

        if self.table.class(superclass).is_entry {
            return Err(CompileError::new(
                ErrorCode::ClassNotFound,
                format!("Class '{}' cannot extend the main class '{}'", decl.name, name),
                decl.span.clone(),
            ));
        }

        Ok(superclass)
    }

    fn collect_method(&mut self, class: ClassId, decl: &ClassDecl, method: &MethodDecl) -> Result<()> {
        if method.name == "main" {
            return Err(CompileError::new(
                ErrorCode::MultipleMethodDefinition,
                format!(
                    "Class '{}' declares 'main', but a program has exactly one main method",
                    decl.name
                ),
                method.span.clone(),
            ));
        }

        if self.table.own_method(class, &method.name).is_some() {
            return Err(CompileError::new(
                ErrorCode::MultipleMethodDefinition,
                format!(
                    "Method '{}' is defined more than once in class '{}'",
                    method.name, decl.name
                ),
                method.span.clone(),
            ));
        }

        let mut params: Vec<VariableEntry> = Vec::with_capacity(method.params.len());
        for param in &method.params {
            if params.iter().any(|p| p.name == param.name) {
                return Err(duplicate_variable("parameter", param, &method.name));
            }
            params.push(variable(param, VariableKind::Parameter));
        }
        let locals = self.collect_locals(&params, &method.locals)?;

        let entry = MethodEntry {
            name: method.name.clone(),
            owner: class,
            return_type: Some(method.return_type.clone()),
            params,
            locals,
            span: method.span.clone(),
        };
        self.check_override(class, &entry, decl)?;

        self.table.add_method(entry);
        Ok(())
    }

    /// An override keeps the return type and the ordered parameter types.
    fn check_override(&self, class: ClassId, method: &MethodEntry, decl: &ClassDecl) -> Result<()> {
        let Some(superclass) = self.table.class(class).superclass else {
            return Ok(());
        };
        let Some(inherited) = self.table.find_method(superclass, &method.name) else {
            return Ok(());
        };
        let inherited = self.table.method(inherited);

        if inherited.return_type != method.return_type || inherited.param_types() != method.param_types()
        {
            let base = &self.table.class(inherited.owner).name;
            return Err(CompileError::new(
                ErrorCode::MultipleMethodDefinition,
                format!(
                    "Method '{}.{}' overrides '{}.{}' with a different signature",
                    decl.name, method.name, base, inherited.name
                ),
                method.span.clone(),
            )
            .with_hint("an overriding method must keep the return type and parameter types"));
        }

        Ok(())
    }

    /// Collect locals, rejecting names already used by a parameter or local.
    fn collect_locals(&self, params: &[VariableEntry], decls: &[VarDecl]) -> Result<Vec<VariableEntry>> {
        let mut locals: Vec<VariableEntry> = Vec::with_capacity(decls.len());
        for decl in decls {
            if params.iter().chain(locals.iter()).any(|v| v.name == decl.name) {
                return Err(duplicate_variable("variable", decl, "its method"));
            }
            locals.push(variable(decl, VariableKind::Local));
        }
        Ok(locals)
    }
}

fn variable(decl: &VarDecl, kind: VariableKind) -> VariableEntry {
    VariableEntry::new(decl.name.clone(), decl.ty.clone(), kind, decl.span.clone())
}

fn duplicate_variable(what: &str, decl: &VarDecl, scope: &str) -> CompileError {
    CompileError::new(
        ErrorCode::MultipleVariableDefinition,
        format!("The {} '{}' is defined more than once in {}", what, decl.name, scope),
        decl.span.clone(),
    )
}

/// Collect the symbols of a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn collect_symbols(program: &Program) -> Result<SymbolTable> {
    SymbolTableBuilder::new().build(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn collect(source: &str) -> Result<SymbolTable> {
        let tokens = tokenize(source)?;
        let program = parse(&tokens)?;
        collect_symbols(&program)
    }

    fn program(classes: &str) -> String {
        format!(
            "class Main {{ public static void main(String[] a) {{ }} }} {}",
            classes
        )
    }

    // ========================================
    // Successful Collection Tests
    // ========================================

    #[test]
    fn test_entry_class() {
        let table = collect(&program("")).unwrap();
        let entry = table.entry_class().unwrap();
        let class = table.class(entry);

        assert_eq!(class.name, "Main");
        assert!(class.fields.is_empty());
        assert_eq!(class.methods.len(), 1);
        let main = table.method(class.methods[0]);
        assert_eq!(main.name, "main");
        assert_eq!(main.return_type, None);
        assert_eq!(main.params[0].ty, Type::StringArray);
        assert_eq!(main.params[0].name, "a");
    }

    #[test]
    fn test_classes_fields_and_methods() {
        let table = collect(&program(
            "class A { int f; boolean g; public int m(int x, A y) { int[] z; return x; } }
             class B extends A { public int m(int p, A q) { return p; } }",
        ))
        .unwrap();

        let a = table.class_id("A").unwrap();
        let b = table.class_id("B").unwrap();
        assert_eq!(table.class(b).superclass, Some(a));
        assert_eq!(table.class(a).fields.len(), 2);

        let m = table.method(table.own_method(a, "m").unwrap());
        assert_eq!(m.return_type, Some(Type::Int));
        assert_eq!(m.param_types(), vec![&Type::Int, &Type::Class("A".to_string())]);
        assert_eq!(m.locals[0].ty, Type::IntArray);
        assert_eq!(table.find_method(b, "m"), table.own_method(b, "m"));
    }

    #[test]
    fn test_declared_types_recorded_verbatim() {
        let table = collect(&program("class A { Missing f; }")).unwrap();
        let a = table.class_id("A").unwrap();
        assert_eq!(table.class(a).fields[0].ty, Type::Class("Missing".to_string()));
    }

    #[test]
    fn test_local_may_shadow_field() {
        let table = collect(&program(
            "class A { int f; public int m() { int f; return f; } }",
        ));
        assert!(table.is_ok());
    }

    // ========================================
    // Definition Conflict Tests
    // ========================================

    #[test]
    fn test_duplicate_class() {
        let err = collect(&program("class A { } class A { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleClassDefinition);
    }

    #[test]
    fn test_class_named_like_main_class() {
        let err = collect(&program("class Main { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleClassDefinition);
    }

    #[test]
    fn test_unknown_superclass() {
        let err = collect(&program("class B extends A { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);
    }

    #[test]
    fn test_superclass_declared_later() {
        let err = collect(&program("class B extends A { } class A { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);
    }

    #[test]
    fn test_class_extends_itself() {
        let err = collect(&program("class A extends A { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);
        assert!(err.message.contains("itself"));
    }

    #[test]
    fn test_class_extends_main_class() {
        let err = collect(&program("class A extends Main { }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);
    }

    #[test]
    fn test_second_main_method() {
        let err = collect(&program(
            "class A { public int main() { return 0; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleMethodDefinition);
    }

    #[test]
    fn test_duplicate_method() {
        let err = collect(&program(
            "class A { public int m() { return 0; } public boolean m() { return true; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleMethodDefinition);
    }

    #[test]
    fn test_override_changes_return_type() {
        let err = collect(&program(
            "class A { public int m() { return 0; } }
             class B extends A { public boolean m() { return true; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleMethodDefinition);
        assert!(err.message.contains("B.m"));
    }

    #[test]
    fn test_override_changes_parameters() {
        let err = collect(&program(
            "class A { public int m(int x) { return 0; } }
             class B extends A { }
             class C extends B { public int m(boolean x) { return 0; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleMethodDefinition);
    }

    #[test]
    fn test_duplicate_field() {
        let err = collect(&program("class A { int f; boolean f; }")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleVariableDefinition);
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = collect(&program(
            "class A { public int m(int x, int x) { return 0; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleVariableDefinition);
    }

    #[test]
    fn test_local_shadows_parameter() {
        let err = collect(&program(
            "class A { public int m(int x) { int x; return 0; } }",
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleVariableDefinition);
    }

    #[test]
    fn test_main_local_shadows_argument() {
        let source = "class Main { public static void main(String[] a) { int a; } }";
        let err = collect(source).unwrap_err();
        assert_eq!(err.code, ErrorCode::MultipleVariableDefinition);
    }
}
