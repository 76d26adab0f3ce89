// Tue Jan 13 2026 - Alex

use crate::directives::Policy;
use crate::utils::StringUtils;
use serde::{Deserialize, Serialize};

/// A hand-written function registered in place of the declared one.
///
/// When `code` is given the function is emitted into the generated
/// declarations and referred to through the helper namespace; otherwise
/// `name` must already be visible to the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionWrapper {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl FunctionWrapper {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn full_name(&self, helper_ns: &str) -> String {
        match self.code {
            Some(_) => format!("{}{}", helper_ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Short name used when the wrapper becomes the exported name
    pub fn exported_name(&self) -> &str {
        StringUtils::last_component(&self.name)
    }
}

/// User overrides for a single declaration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Directive {
    #[serde(default)]
    pub exclude: bool,
    #[serde(default)]
    pub rename: Option<String>,
    #[serde(default)]
    pub wrapper: Option<FunctionWrapper>,
    #[serde(default)]
    pub policy: Option<Policy>,
    #[serde(default)]
    pub no_override: bool,
}

/// What every lookup of an unconfigured declaration returns
pub static DEFAULT_DIRECTIVE: Directive = Directive {
    exclude: false,
    rename: None,
    wrapper: None,
    policy: None,
    no_override: false,
};

impl Directive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluded() -> Self {
        Self {
            exclude: true,
            ..Self::default()
        }
    }

    pub fn with_rename(mut self, name: &str) -> Self {
        self.rename = Some(name.to_string());
        self
    }

    pub fn with_wrapper(mut self, wrapper: FunctionWrapper) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_no_override(mut self) -> Self {
        self.no_override = true;
        self
    }

    /// Exported name: the rename when set, otherwise `name`
    pub fn name_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.rename.as_deref().unwrap_or(name)
    }
}
