// Tue Jan 13 2026 - Alex

use itertools::Itertools;

pub struct StringUtils;

impl StringUtils {
    /// Turns a C++ name into an identifier: every run of characters that
    /// cannot appear in an identifier (underscores included) becomes a
    /// single underscore, and leading or trailing ones are dropped.
    pub fn make_id(name: &str) -> String {
        name.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .join("_")
    }

    /// Joins a scope and a name with `::`, tolerating an empty scope or one
    /// that already ends in `::`.
    pub fn qualify(scope: &str, name: &str) -> String {
        if scope.is_empty() {
            name.to_string()
        } else if scope.ends_with("::") {
            format!("{}{}", scope, name)
        } else {
            format!("{}::{}", scope, name)
        }
    }

    /// Last component of a qualified name
    pub fn last_component(name: &str) -> &str {
        name.rsplit("::").next().unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_id() {
        assert_eq!(StringUtils::make_id("ns::Vec3"), "ns_Vec3");
        assert_eq!(StringUtils::make_id("std::vector<int>"), "std_vector_int");
        assert_eq!(StringUtils::make_id("_a__b_"), "a_b");
        assert_eq!(StringUtils::make_id("unsigned int"), "unsigned_int");
    }

    #[test]
    fn test_qualify() {
        assert_eq!(StringUtils::qualify("", "f"), "f");
        assert_eq!(StringUtils::qualify("ns", "f"), "ns::f");
        assert_eq!(StringUtils::qualify("ns::", "f"), "ns::f");
    }

    #[test]
    fn test_last_component() {
        assert_eq!(StringUtils::last_component("a::b::C"), "C");
        assert_eq!(StringUtils::last_component("C"), "C");
    }
}
