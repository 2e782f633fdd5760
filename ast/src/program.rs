use crate::{Identifier, QualifiedName, TypeDecl};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The root of the AST: one parsed source file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub file: String,
    /// The line the file's first token starts on; 1 for an empty file.
    pub line: u32,
    /// The `package` clause, if present.
    pub package: Option<QualifiedName>,
    pub imports: Vec<QualifiedName>,
    pub decls: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn empty(file: impl Into<String>) -> Self {
        Self { file: file.into(), line: 1, package: None, imports: Vec::new(), decls: Vec::new() }
    }

    /// Every class declared at the top level of this file, in source order.
    pub fn classes(&self) -> impl Iterator<Item = &crate::ClassDecl> {
        self.decls.iter().map(|decl| {
            let TypeDecl::Class(c) = decl;
            c
        })
    }

    pub fn find_class(&self, name: &Identifier) -> Option<&crate::ClassDecl> {
        self.classes().find(|c| c.name.matches(name))
    }

    /// Serializes the tree to pretty-printed JSON, mainly useful for
    /// golden-file style assertions in tests.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = &self.package {
            writeln!(f, "package {package};")?;
        }
        for import in &self.imports {
            writeln!(f, "import {import};")?;
        }
        for decl in &self.decls {
            let TypeDecl::Class(class) = decl;
            writeln!(f, "class {} {{ /* {} members */ }}", class.name, class.members.len())?;
        }
        Ok(())
    }
}
