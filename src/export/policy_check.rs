// Tue Jan 13 2026 - Alex

use crate::declarations::Type;
use crate::directives::Policy;
use crate::export::Diagnostic;

/// Results that are converted by value even though they are pointers
const POLICY_EXEMPT_RESULTS: &[&str] = &[
    "const char*",
    "char const*",
    "const wchar_t*",
    "PyObject*",
    "_object*",
];

pub struct PolicyCheck;

impl PolicyCheck {
    /// True when returning `result` hands out a pointer or reference the
    /// runtime cannot manage without a call policy.
    pub fn needs_policy(result: Option<&Type>) -> bool {
        match result {
            Some(ty) if ty.is_pointer() || ty.is_reference() => {
                !POLICY_EXEMPT_RESULTS.contains(&ty.full_name().as_str())
            }
            _ => false,
        }
    }

    /// Returns the policy to use and, when one is required but missing, the
    /// diagnostic to report. Without a policy the registration goes ahead
    /// with none.
    pub fn resolve<'p>(
        full_name: &str,
        result: Option<&Type>,
        policy: Option<&'p Policy>,
    ) -> (Option<&'p Policy>, Option<Diagnostic>) {
        match policy {
            Some(policy) => (Some(policy), None),
            None if Self::needs_policy(result) => (None, Some(Diagnostic::missing_policy(full_name))),
            None => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::ReturnValueKind;

    #[test]
    fn test_needs_policy() {
        assert!(PolicyCheck::needs_policy(Some(&Type::pointer("Widget"))));
        assert!(PolicyCheck::needs_policy(Some(&Type::reference("Widget").with_const())));
        assert!(!PolicyCheck::needs_policy(Some(&Type::pointer("char").with_const())));
        assert!(!PolicyCheck::needs_policy(Some(&Type::value("int"))));
        assert!(!PolicyCheck::needs_policy(None));
    }

    #[test]
    fn test_resolve() {
        let result = Type::pointer("Widget");
        let (policy, diagnostic) = PolicyCheck::resolve("Factory::make", Some(&result), None);
        assert!(policy.is_none());
        let diagnostic = diagnostic.unwrap();
        assert_eq!(diagnostic.member, "Factory::make");
        assert!(diagnostic.message.contains("no policy"));

        let configured = Policy::return_value(ReturnValueKind::ManageNewObject);
        let (policy, diagnostic) = PolicyCheck::resolve("Factory::make", Some(&result), Some(&configured));
        assert_eq!(policy, Some(&configured));
        assert!(diagnostic.is_none());
    }
}
