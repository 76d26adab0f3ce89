// Tue Jan 15 2026 - Alex

use crate::declarations::DeclarationError;
use crate::directives::{Directive, DEFAULT_DIRECTIVE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Free function exported as if it were a method of the class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedMethod {
    /// Qualified name of the free function
    pub name: String,
    #[serde(default)]
    pub rename: Option<String>,
}

/// Everything the user configured for one exported class (or nested enum).
///
/// Lookups of names that were never configured fall back to the default
/// directive, so binders can ask unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDirectives {
    /// Qualified name of the class (or typedef) to export
    pub name: String,
    #[serde(default)]
    pub rename: Option<String>,
    #[serde(default)]
    pub exclude: bool,
    /// Headers the generated code needs
    #[serde(default)]
    pub include: Vec<String>,
    /// Smart pointer spelling with `%s` standing for the class
    #[serde(default)]
    pub smart_ptr: Option<String>,
    #[serde(default)]
    pub members: IndexMap<String, Directive>,
    /// Keyed by operator symbol, or by result type for conversion operators
    #[serde(default)]
    pub operators: IndexMap<String, Directive>,
    #[serde(default)]
    pub added_methods: Vec<AddedMethod>,
    /// Directives of nested classes and enums, keyed by short name
    #[serde(default)]
    pub nested: IndexMap<String, ClassDirectives>,
}

impl ClassDirectives {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn member(&self, name: &str) -> &Directive {
        self.members.get(name).unwrap_or(&DEFAULT_DIRECTIVE)
    }

    pub fn operator(&self, symbol: &str) -> &Directive {
        self.operators.get(symbol).unwrap_or(&DEFAULT_DIRECTIVE)
    }

    pub fn member_mut(&mut self, name: &str) -> &mut Directive {
        self.members.entry(name.to_string()).or_default()
    }

    pub fn operator_mut(&mut self, symbol: &str) -> &mut Directive {
        self.operators.entry(symbol.to_string()).or_default()
    }

    pub fn with_member(mut self, name: &str, directive: Directive) -> Self {
        self.members.insert(name.to_string(), directive);
        self
    }

    pub fn with_operator(mut self, symbol: &str, directive: Directive) -> Self {
        self.operators.insert(symbol.to_string(), directive);
        self
    }

    pub fn with_rename(mut self, name: &str) -> Self {
        self.rename = Some(name.to_string());
        self
    }

    pub fn with_include(mut self, header: &str) -> Self {
        self.include.push(header.to_string());
        self
    }

    pub fn with_smart_ptr(mut self, spelling: &str) -> Self {
        self.smart_ptr = Some(spelling.to_string());
        self
    }

    pub fn with_added_method(mut self, name: &str, rename: Option<&str>) -> Self {
        self.added_methods.push(AddedMethod {
            name: name.to_string(),
            rename: rename.map(str::to_string),
        });
        self
    }

    pub fn with_nested(mut self, name: &str, directives: ClassDirectives) -> Self {
        self.nested.insert(name.to_string(), directives);
        self
    }

    /// Directives for a nested declaration: whatever was configured under
    /// `short_name`, addressed by `full_name` and sharing this class's
    /// includes.
    pub fn nested_for(&self, short_name: &str, full_name: &str) -> ClassDirectives {
        let mut nested = self.nested.get(short_name).cloned().unwrap_or_default();
        nested.name = full_name.to_string();
        nested.include = self.include.clone();
        nested
    }
}

/// The directive file handed to the driver: the classes to export, in any
/// order, each with its directives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectiveTable {
    #[serde(default)]
    pub classes: Vec<ClassDirectives>,
}

impl DirectiveTable {
    pub fn from_json(json: &str) -> Result<Self, DeclarationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DeclarationError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, name: &str) -> Option<&ClassDirectives> {
        self.classes.iter().find(|c| c.name == name)
    }
}
