// Tue Jan 13 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A pointer or reference is returned and no call policy was configured
    MissingPolicy,
}

/// Non-fatal problem found while exporting; the export carries on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Qualified name of the offending declaration
    pub member: String,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_policy(member: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingPolicy,
            member: member.to_string(),
            message: format!(
                "{} returns a pointer or a reference, but no policy was specified",
                member
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
