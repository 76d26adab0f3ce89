// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Spelling choices for the generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Prefix for `noncopyable`
    pub boost_namespace: String,
    /// Prefix for `class_`, `init`, `self` and the call policies
    pub python_namespace: String,
    /// Prefix of the namespace holding generated helper code
    pub pyste_namespace: String,
    pub indent: String,
    pub module_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            boost_namespace: "boost::".to_string(),
            python_namespace: "boost::python::".to_string(),
            pyste_namespace: String::new(),
            indent: "    ".to_string(),
            module_name: "module".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_name(mut self, name: &str) -> Self {
        self.module_name = name.to_string();
        self
    }

    pub fn with_pyste_namespace(mut self, namespace: &str) -> Self {
        self.pyste_namespace = namespace.to_string();
        self
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let prefixes = [
            ("boost_namespace", &self.boost_namespace),
            ("python_namespace", &self.python_namespace),
            ("pyste_namespace", &self.pyste_namespace),
        ];
        for (field, prefix) in prefixes {
            if !prefix.is_empty() && !prefix.ends_with("::") {
                return Err(format!("{} must be empty or end with '::'", field));
            }
        }
        if self.module_name.is_empty() {
            return Err("module_name must not be empty".to_string());
        }
        Ok(())
    }
}
