// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// C++ access specifier of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        *self == Visibility::Public
    }

    pub fn is_private(&self) -> bool {
        *self == Visibility::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        write!(f, "{}", access)
    }
}

/// How a type is held: by value, through a pointer or through a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Value,
    Pointer,
    Reference,
}

/// A type as it appears in a signature.
///
/// `name` is the bare qualified name (`std::string`, `ns::Vec3`), without
/// cv-qualifiers or indirection. Those are kept apart so operand matching
/// can compare names directly while code generation uses `full_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub kind: TypeKind,
    /// Default argument expression, only meaningful for parameters
    #[serde(default)]
    pub default: Option<String>,
}

impl Type {
    pub fn value(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_const: false,
            kind: TypeKind::Value,
            default: None,
        }
    }

    pub fn pointer(name: &str) -> Self {
        Self {
            kind: TypeKind::Pointer,
            ..Self::value(name)
        }
    }

    pub fn reference(name: &str) -> Self {
        Self {
            kind: TypeKind::Reference,
            ..Self::value(name)
        }
    }

    pub fn void() -> Self {
        Self::value("void")
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Value && self.name == "void"
    }

    pub fn is_pointer(&self) -> bool {
        self.kind == TypeKind::Pointer
    }

    pub fn is_reference(&self) -> bool {
        self.kind == TypeKind::Reference
    }

    /// Spelling used in generated code: `const std::string&`
    pub fn full_name(&self) -> String {
        let constness = if self.is_const { "const " } else { "" };
        let suffix = match self.kind {
            TypeKind::Value => "",
            TypeKind::Pointer => "*",
            TypeKind::Reference => "&",
        };
        format!("{}{}{}", constness, self.name, suffix)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
