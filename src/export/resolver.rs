// Tue Jan 15 2026 - Alex

use crate::declarations::{ClassEntity, DeclarationGraph, Member};
use crate::directives::ClassDirectives;
use std::collections::HashSet;

/// Works out the members a class actually exposes once its unexported
/// ancestors are folded in.
pub struct MemberResolver<'a> {
    graph: &'a DeclarationGraph,
}

impl<'a> MemberResolver<'a> {
    pub fn new(graph: &'a DeclarationGraph) -> Self {
        Self { graph }
    }

    /// Copies the members of unexported ancestors into `class`, walking the
    /// hierarchy nearest level first and stopping after the first level that
    /// holds an exported base; the runtime inherits anything above it from
    /// that base. Returns how many members were copied.
    pub fn inherit_members(&self, class: &mut ClassEntity, exported: &HashSet<String>) -> usize {
        let mut inherited = Vec::new();

        for level in &class.hierarchy {
            let mut level_exported = false;
            for base_ref in level {
                let base = match self.graph.class(&base_ref.name) {
                    Ok(base) => base,
                    Err(e) => {
                        log::warn!("Cannot inherit members of {}: {}", base_ref.name, e);
                        continue;
                    }
                };
                if exported.contains(&base.full_name()) {
                    level_exported = true;
                } else {
                    inherited.extend(
                        base.members
                            .iter()
                            .filter(|m| m.is_inheritable())
                            .cloned(),
                    );
                }
            }
            if level_exported {
                break;
            }
        }

        let count = inherited.len();
        if count > 0 {
            log::debug!("{} inherits {} members from unexported bases", class.full_name(), count);
        }
        for member in inherited {
            class.add_member(member);
        }
        count
    }

    /// Strips the virtual flag from methods marked `no_override` so they are
    /// bound as ordinary methods.
    pub fn apply_no_override(&self, class: &mut ClassEntity, info: &ClassDirectives) {
        for member in &mut class.members {
            if let Member::Method(method) = member {
                if method.is_virtual && info.member(&method.name).no_override {
                    log::debug!("{} will not be overridable", method.full_name());
                    method.is_virtual = false;
                }
            }
        }
    }

    /// Public bases of the nearest hierarchy level that has exported ones
    pub fn exported_bases(&self, class: &ClassEntity, exported: &HashSet<String>) -> Vec<String> {
        class
            .hierarchy
            .iter()
            .map(|level| {
                level
                    .iter()
                    .filter(|b| b.visibility.is_public() && exported.contains(&b.name))
                    .map(|b| b.name.clone())
                    .collect::<Vec<_>>()
            })
            .find(|bases| !bases.is_empty())
            .unwrap_or_default()
    }

    /// The effective member list handed to the binders
    pub fn public_members(class: &ClassEntity) -> Vec<Member> {
        class
            .members
            .iter()
            .filter(|m| m.visibility().is_public())
            .cloned()
            .collect()
    }
}
