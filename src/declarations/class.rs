// Tue Jan 15 2026 - Alex

use crate::declarations::{Member, Method, Visibility};
use crate::utils::StringUtils;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direct or indirect base of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRef {
    /// Qualified name of the base class
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl BaseRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: Visibility::Public,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A class declaration as read from the declaration graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntity {
    pub name: String,
    /// Enclosing namespace, or enclosing class for nested classes
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub is_abstract: bool,
    /// Bases grouped by depth, nearest level first
    #[serde(default)]
    pub hierarchy: Vec<Vec<BaseRef>>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl ClassEntity {
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            is_abstract: false,
            hierarchy: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Appends the next (more distant) level of bases
    pub fn with_base_level(mut self, bases: &[&str]) -> Self {
        self.hierarchy
            .push(bases.iter().map(|b| BaseRef::new(b)).collect());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn full_name(&self) -> String {
        StringUtils::qualify(&self.namespace, &self.name)
    }

    /// Every base at every level, nearest first
    pub fn all_bases(&self) -> impl Iterator<Item = &BaseRef> {
        self.hierarchy.iter().flatten()
    }

    pub fn base_count(&self) -> usize {
        self.all_bases().count()
    }

    pub fn constructors(&self, publics_only: bool) -> Vec<&Method> {
        self.members
            .iter()
            .filter_map(|m| match m {
                Member::Constructor(c) if !publics_only || c.visibility.is_public() => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn has_copy_constructor(&self) -> bool {
        self.constructors(false)
            .iter()
            .any(|c| c.is_copy_constructor())
    }

    pub fn has_virtual_methods(&self) -> bool {
        self.members
            .iter()
            .any(|m| matches!(m, Member::Method(method) if method.is_virtual))
    }
}

impl fmt::Display for ClassEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.full_name())?;
        if self.is_abstract {
            write!(f, " [abstract]")?;
        }
        write!(f, " ({} members)", self.members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::Type;

    #[test]
    fn test_constructors_and_copy() {
        let class = ClassEntity::new("Point", "geo")
            .with_member(Member::Constructor(Method::new("Point", "geo::Point")))
            .with_member(Member::Constructor(
                Method::new("Point", "geo::Point")
                    .with_param(Type::reference("geo::Point").with_const()),
            ))
            .with_member(Member::Constructor(
                Method::new("Point", "geo::Point")
                    .with_param(Type::value("int"))
                    .with_visibility(Visibility::Private),
            ));

        assert_eq!(class.full_name(), "geo::Point");
        assert_eq!(class.constructors(false).len(), 3);
        assert_eq!(class.constructors(true).len(), 2);
        assert!(class.has_copy_constructor());
        assert!(!class.has_virtual_methods());
    }

    #[test]
    fn test_hierarchy_levels() {
        let class = ClassEntity::new("C", "")
            .with_base_level(&["B1", "B2"])
            .with_base_level(&["A"]);

        let names: Vec<_> = class.all_bases().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["B1", "B2", "A"]);
        assert_eq!(class.base_count(), 3);
    }
}
