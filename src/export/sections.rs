// Tue Jan 13 2026 - Alex

use indexmap::IndexMap;
use std::fmt;

/// Named buckets of generated code for one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Arguments of `class_< ... >`
    Template,
    /// Arguments of the `class_` constructor call
    Constructor,
    /// Chained `.def(...)` calls inside the registration
    Inside,
    /// Statements run inside the class scope after the registration
    Scope,
    /// Code emitted before the module body
    Declaration,
    /// Code emitted outside any helper namespace
    DeclarationOutside,
    Include,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Template,
        Section::Constructor,
        Section::Inside,
        Section::Scope,
        Section::Declaration,
        Section::DeclarationOutside,
        Section::Include,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Template => "template",
            Section::Constructor => "constructor",
            Section::Inside => "inside",
            Section::Scope => "scope",
            Section::Declaration => "declaration",
            Section::DeclarationOutside => "declaration-outside",
            Section::Include => "include",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    items: IndexMap<Section, Vec<String>>,
}

impl Sections {
    pub fn new() -> Self {
        Self {
            items: Section::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    pub fn add(&mut self, section: Section, item: impl Into<String>) {
        self.items.entry(section).or_default().push(item.into());
    }

    pub fn get(&self, section: Section) -> &[String] {
        self.items.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, section: Section) -> bool {
        self.get(section).is_empty()
    }

    pub fn contains(&self, section: Section, item: &str) -> bool {
        self.get(section).iter().any(|i| i == item)
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_order() {
        let mut sections = Sections::new();
        sections.add(Section::Inside, ".def(\"b\", &A::b)");
        sections.add(Section::Inside, ".def(\"a\", &A::a)");

        assert_eq!(sections.get(Section::Inside).len(), 2);
        assert!(sections.get(Section::Inside)[0].contains("\"b\""));
        assert!(sections.is_empty(Section::Scope));
        assert!(sections.contains(Section::Inside, ".def(\"a\", &A::a)"));
    }

    #[test]
    fn test_section_names() {
        assert_eq!(Section::DeclarationOutside.as_str(), "declaration-outside");
        assert_eq!(Section::ALL.len(), 7);
    }
}
