// Tue Jan 15 2026 - Alex

use crate::declarations::{ClassEntity, DeclarationError, EnumDecl, Function};
use crate::utils::StringUtils;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const MAX_TYPEDEF_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Qualified name of the aliased declaration
    pub target: String,
}

impl Typedef {
    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.namespace, &self.name)
    }
}

/// Top-level node of the declaration graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Class(ClassEntity),
    Typedef(Typedef),
    Function(Function),
    Operator(Function),
    Enum(EnumDecl),
}

impl Declaration {
    pub fn qualified_name(&self) -> String {
        match self {
            Declaration::Class(c) => c.full_name(),
            Declaration::Typedef(t) => t.full_name(),
            Declaration::Function(f) => f.full_name(),
            Declaration::Operator(f) => f.operator_full_name(),
            Declaration::Enum(e) => e.full_name(),
        }
    }
}

/// A class found through `DeclarationGraph::resolve_class`
#[derive(Debug, Clone, Copy)]
pub struct ResolvedClass<'a> {
    pub class: &'a ClassEntity,
    /// Short name of the typedef the class was reached through
    pub alias: Option<&'a str>,
}

/// Immutable arena of declarations, indexed by qualified name.
///
/// Nested classes are stored as ordinary top-level entries under their
/// qualified name (`Outer::Inner`). When several declarations share a name
/// (overloaded free functions) lookup returns the first one.
#[derive(Debug, Clone, Default)]
pub struct DeclarationGraph {
    declarations: Vec<Declaration>,
    index: HashMap<String, usize>,
}

impl DeclarationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_declarations(declarations: Vec<Declaration>) -> Self {
        let mut graph = Self::new();
        for decl in declarations {
            graph.add(decl);
        }
        graph
    }

    pub fn from_json(json: &str) -> Result<Self, DeclarationError> {
        let declarations: Vec<Declaration> = serde_json::from_str(json)?;
        Ok(Self::from_declarations(declarations))
    }

    pub fn from_file(path: &Path) -> Result<Self, DeclarationError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn add(&mut self, decl: Declaration) {
        let position = self.declarations.len();
        self.index.entry(decl.qualified_name()).or_insert(position);
        self.declarations.push(decl);
    }

    pub fn with(mut self, decl: Declaration) -> Self {
        self.add(decl);
        self
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn get(&self, name: &str) -> Result<&Declaration, DeclarationError> {
        self.index
            .get(name)
            .map(|&i| &self.declarations[i])
            .ok_or_else(|| DeclarationError::NotFound(name.to_string()))
    }

    /// Looks up a class, following typedefs to the aliased class
    pub fn resolve_class(&self, name: &str) -> Result<ResolvedClass<'_>, DeclarationError> {
        let mut alias = None;
        let mut current = name.to_string();

        for _ in 0..MAX_TYPEDEF_DEPTH {
            match self.get(&current)? {
                Declaration::Class(class) => return Ok(ResolvedClass { class, alias }),
                Declaration::Typedef(typedef) => {
                    alias.get_or_insert(typedef.name.as_str());
                    current = typedef.target.clone();
                }
                _ => return Err(DeclarationError::NotAClass(current)),
            }
        }

        Err(DeclarationError::TypedefCycle(name.to_string()))
    }

    pub fn class(&self, name: &str) -> Result<&ClassEntity, DeclarationError> {
        self.resolve_class(name).map(|resolved| resolved.class)
    }

    pub fn function(&self, name: &str) -> Result<&Function, DeclarationError> {
        match self.get(name)? {
            Declaration::Function(f) => Ok(f),
            _ => Err(DeclarationError::NotAFunction(name.to_string())),
        }
    }

    /// Free operators with at least one operand of type `class`
    pub fn free_operators_for(&self, class: &str) -> Vec<&Function> {
        self.declarations
            .iter()
            .filter_map(|d| match d {
                Declaration::Operator(op) if op.involves(class) => Some(op),
                _ => None,
            })
            .collect()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassEntity> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Class(c) => Some(c),
            _ => None,
        })
    }
}
