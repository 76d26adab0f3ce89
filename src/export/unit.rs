// Tue Jan 13 2026 - Alex

use indexmap::IndexMap;

pub const MODULE: &str = "module";
pub const DECLARATION: &str = "declaration";
pub const DECLARATION_OUTSIDE: &str = "declaration-outside";
pub const INCLUDE: &str = "include";

/// Receives finished code, section by section
pub trait OutputSink {
    fn write(&mut self, section: &str, code: &str);
}

/// In-memory sink; also what a nested export writes into before its parent
/// merges it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeUnit {
    sections: IndexMap<String, String>,
}

impl CodeUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> &str {
        self.sections.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(String::is_empty)
    }
}

impl OutputSink for CodeUnit {
    fn write(&mut self, section: &str, code: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .push_str(code);
    }
}
