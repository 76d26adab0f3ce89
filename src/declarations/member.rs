// Tue Jan 13 2026 - Alex

use crate::declarations::{Type, Visibility};
use crate::utils::StringUtils;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

fn unique_by_default() -> bool {
    true
}

/// Anything with an ordered parameter list and default-argument range
pub trait Signature {
    fn parameters(&self) -> &[Type];

    /// Number of leading parameters without a default argument
    fn min_args(&self) -> usize {
        self.parameters()
            .iter()
            .take_while(|p| p.default.is_none())
            .count()
    }

    fn max_args(&self) -> usize {
        self.parameters().len()
    }

    fn has_default_arguments(&self) -> bool {
        self.min_args() != self.max_args()
    }

    /// Full names of the first `count` parameter types
    fn parameter_types(&self, count: usize) -> Vec<String> {
        self.parameters()
            .iter()
            .take(count)
            .map(Type::full_name)
            .collect()
    }
}

/// A member function, constructor, destructor, member operator or
/// conversion operator. Which one it is comes from the `Member` variant
/// that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// Qualified name of the class that declares the method
    pub class: String,
    /// Absent for constructors and destructors
    #[serde(default)]
    pub result: Option<Type>,
    #[serde(default)]
    pub parameters: Vec<Type>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_abstract: bool,
    /// False when the name is overloaded within the class and a pointer to it
    /// needs an explicit signature
    #[serde(default = "unique_by_default")]
    pub is_unique: bool,
}

impl Method {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            result: None,
            parameters: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_const: false,
            is_virtual: false,
            is_abstract: false,
            is_unique: true,
        }
    }

    pub fn with_result(mut self, result: Type) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_param(mut self, param: Type) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Pure virtual
    pub fn with_abstract(mut self) -> Self {
        self.is_virtual = true;
        self.is_abstract = true;
        self
    }

    pub fn overloaded(mut self) -> Self {
        self.is_unique = false;
        self
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.class, &self.name)
    }

    /// `Class::operator+`
    pub fn operator_full_name(&self) -> String {
        format!("{}::operator{}", self.class, self.name)
    }

    /// `Class::operator double`
    pub fn converter_full_name(&self) -> String {
        format!("{}::operator {}", self.class, self.result_name())
    }

    pub fn result_name(&self) -> String {
        self.result
            .as_ref()
            .map(Type::full_name)
            .unwrap_or_else(|| "void".to_string())
    }

    /// `const T&` where T is the owning class, and nothing else
    pub fn is_copy_constructor(&self) -> bool {
        match self.parameters.as_slice() {
            [param] => {
                param.is_reference()
                    && param.is_const
                    && param.name == self.class
                    && self.visibility.is_public()
            }
            _ => false,
        }
    }

    /// Signature used to decide whether two virtual methods are the same
    /// slot, ignoring the declaring class.
    pub fn signature_key(&self) -> String {
        let params = self.parameters.iter().map(Type::full_name).join(", ");
        let constness = if self.is_const { " const" } else { "" };
        format!("{} {}({}){}", self.result_name(), self.name, params, constness)
    }

    /// Pointer expression naming `full_name`, cast to its exact signature
    /// when the name alone is ambiguous.
    pub fn pointer_to(&self, full_name: &str) -> String {
        if self.is_unique {
            return format!("&{}", full_name);
        }
        let params = self.parameters.iter().map(Type::full_name).join(", ");
        if self.is_static {
            format!("({} (*)({}))&{}", self.result_name(), params, full_name)
        } else {
            let constness = if self.is_const { " const" } else { "" };
            format!(
                "({} ({}::*)({}){})&{}",
                self.result_name(),
                self.class,
                params,
                constness,
                full_name
            )
        }
    }

    pub fn pointer_declaration(&self) -> String {
        self.pointer_to(&self.full_name())
    }
}

impl Signature for Method {
    fn parameters(&self) -> &[Type] {
        &self.parameters
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameters.iter().map(Type::full_name).join(", ");
        if self.is_virtual {
            write!(f, "virtual ")?;
        }
        write!(f, "{} {}({})", self.result_name(), self.full_name(), params)?;
        if self.is_const {
            write!(f, " const")?;
        }
        if self.is_abstract {
            write!(f, " = 0")?;
        }
        Ok(())
    }
}

/// A free function or free operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    pub result: Type,
    #[serde(default)]
    pub parameters: Vec<Type>,
    #[serde(default = "unique_by_default")]
    pub is_unique: bool,
}

impl Function {
    pub fn new(name: &str, namespace: &str, result: Type) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            result,
            parameters: Vec::new(),
            is_unique: true,
        }
    }

    pub fn with_param(mut self, param: Type) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn overloaded(mut self) -> Self {
        self.is_unique = false;
        self
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.namespace, &self.name)
    }

    /// `ns::operator<<`
    pub fn operator_full_name(&self) -> String {
        StringUtils::qualify(&self.namespace, &format!("operator{}", self.name))
    }

    pub fn pointer_to(&self, full_name: &str) -> String {
        if self.is_unique {
            return format!("&{}", full_name);
        }
        let params = self.parameters.iter().map(Type::full_name).join(", ");
        format!("({} (*)({}))&{}", self.result.full_name(), params, full_name)
    }

    pub fn pointer_declaration(&self) -> String {
        self.pointer_to(&self.full_name())
    }

    /// True when any parameter names `class` (cv and indirection ignored)
    pub fn involves(&self, class: &str) -> bool {
        self.parameters.iter().any(|p| p.name == class)
    }
}

impl Signature for Function {
    fn parameters(&self) -> &[Type] {
        &self.parameters
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub class: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
}

impl Variable {
    pub fn new(name: &str, class: &str, ty: Type) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.class, &self.name)
    }
}

/// Reference from a class to a class declared inside it. The nested class
/// itself lives in the declaration graph under its qualified name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedClass {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl NestedClass {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            visibility: Visibility::Public,
        }
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.class, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    /// Enclosing namespace or class
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl EnumDecl {
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            values: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.values.push(value.to_string());
        self
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.namespace, &self.name)
    }

    /// Unscoped enumerators live in the enclosing scope
    pub fn value_full_name(&self, value: &str) -> String {
        StringUtils::qualify(&self.namespace, value)
    }
}

/// One entry of a class body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Constructor(Method),
    Destructor(Method),
    Method(Method),
    ClassOperator(Method),
    ConverterOperator(Method),
    Variable(Variable),
    NestedClass(NestedClass),
    NestedEnum(EnumDecl),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Constructor(m)
            | Member::Destructor(m)
            | Member::Method(m)
            | Member::ClassOperator(m)
            | Member::ConverterOperator(m) => &m.name,
            Member::Variable(v) => &v.name,
            Member::NestedClass(n) => &n.name,
            Member::NestedEnum(e) => &e.name,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Member::Constructor(m)
            | Member::Destructor(m)
            | Member::Method(m)
            | Member::ClassOperator(m)
            | Member::ConverterOperator(m) => m.visibility,
            Member::Variable(v) => v.visibility,
            Member::NestedClass(n) => n.visibility,
            Member::NestedEnum(e) => e.visibility,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Member::Method(m) => m.is_static,
            Member::Variable(v) => v.is_static,
            _ => false,
        }
    }

    /// Qualified name of the class the member was declared in
    pub fn owner(&self) -> &str {
        match self {
            Member::Constructor(m)
            | Member::Destructor(m)
            | Member::Method(m)
            | Member::ClassOperator(m)
            | Member::ConverterOperator(m) => &m.class,
            Member::Variable(v) => &v.class,
            Member::NestedClass(n) => &n.class,
            Member::NestedEnum(e) => &e.namespace,
        }
    }

    /// Members that are copied down from unexported ancestors
    pub fn is_inheritable(&self) -> bool {
        matches!(
            self,
            Member::Method(_)
                | Member::Variable(_)
                | Member::NestedClass(_)
                | Member::ClassOperator(_)
                | Member::ConverterOperator(_)
                | Member::NestedEnum(_)
        )
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(m) => Some(m),
            _ => None,
        }
    }
}
