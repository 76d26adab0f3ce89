// Tue Jan 15 2026 - Alex

use crate::config::ExportConfig;
use crate::declarations::{ClassEntity, DeclarationGraph, Member, Method};
use crate::directives::ClassDirectives;
use crate::export::{CodeUnit, Diagnostic, ExportError, Section, Sections};
use std::collections::HashSet;

/// Read-only inputs shared by every binder during one class export
pub struct ExportContext<'a> {
    pub graph: &'a DeclarationGraph,
    pub info: &'a ClassDirectives,
    pub config: &'a ExportConfig,
    /// Owned, already flattened copy of the class
    pub class: &'a ClassEntity,
    /// Effective public members
    pub members: &'a [Member],
    /// Classes registered before this one
    pub exported: &'a HashSet<String>,
}

impl<'a> ExportContext<'a> {
    pub fn class_name(&self) -> String {
        self.class.full_name()
    }

    pub fn py(&self) -> &str {
        &self.config.python_namespace
    }

    pub fn helper_ns(&self) -> &str {
        &self.config.pyste_namespace
    }

    pub fn constructors(&self) -> Vec<&'a Method> {
        self.members
            .iter()
            .filter_map(|m| match m {
                Member::Constructor(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn methods(&self) -> impl Iterator<Item = &'a Method> {
        self.members.iter().filter_map(Member::as_method)
    }
}

/// Everything a class export produces before it is written to a sink
#[derive(Debug, Default)]
pub struct Fragments {
    pub sections: Sections,
    pub diagnostics: Vec<Diagnostic>,
    /// Output of nested classes and enums, in declaration order
    pub nested: Vec<CodeUnit>,
    /// Qualified names of the classes registered by this export
    pub exported: Vec<String>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, section: Section, item: impl Into<String>) {
        self.sections.add(section, item);
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// One stage of the class export pipeline
pub trait Binder {
    fn name(&self) -> &'static str;

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError>;
}
