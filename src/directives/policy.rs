// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

fn first_argument() -> usize {
    1
}

/// What `return_value_policy` does with the returned value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnValueKind {
    CopyConstReference,
    CopyNonConstReference,
    ManageNewObject,
    ReferenceExistingObject,
    ReturnOpaquePointer,
}

impl ReturnValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnValueKind::CopyConstReference => "copy_const_reference",
            ReturnValueKind::CopyNonConstReference => "copy_non_const_reference",
            ReturnValueKind::ManageNewObject => "manage_new_object",
            ReturnValueKind::ReferenceExistingObject => "reference_existing_object",
            ReturnValueKind::ReturnOpaquePointer => "return_opaque_pointer",
        }
    }
}

impl fmt::Display for ReturnValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call policy attached to a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    ReturnInternalReference {
        #[serde(default = "first_argument")]
        param: usize,
        #[serde(default)]
        next: Option<Box<Policy>>,
    },
    WithCustodianAndWard {
        custodian: usize,
        ward: usize,
        #[serde(default)]
        next: Option<Box<Policy>>,
    },
    ReturnValuePolicy {
        which: ReturnValueKind,
    },
}

impl Policy {
    pub fn return_internal_reference(param: usize) -> Self {
        Policy::ReturnInternalReference { param, next: None }
    }

    pub fn with_custodian_and_ward(custodian: usize, ward: usize) -> Self {
        Policy::WithCustodianAndWard {
            custodian,
            ward,
            next: None,
        }
    }

    pub fn return_value(which: ReturnValueKind) -> Self {
        Policy::ReturnValuePolicy { which }
    }

    /// Chains another policy after this one. A return-value policy has no
    /// slot for a chained policy and is returned unchanged.
    pub fn then(self, policy: Policy) -> Self {
        match self {
            Policy::ReturnInternalReference { param, .. } => Policy::ReturnInternalReference {
                param,
                next: Some(Box::new(policy)),
            },
            Policy::WithCustodianAndWard { custodian, ward, .. } => Policy::WithCustodianAndWard {
                custodian,
                ward,
                next: Some(Box::new(policy)),
            },
            other => other,
        }
    }

    pub fn is_opaque_pointer(&self) -> bool {
        matches!(
            self,
            Policy::ReturnValuePolicy {
                which: ReturnValueKind::ReturnOpaquePointer
            }
        )
    }

    /// Template spelling, qualified with `python_ns`
    pub fn code(&self, python_ns: &str) -> String {
        match self {
            Policy::ReturnInternalReference { param, next } => {
                let mut code = format!("{}return_internal_reference< {}", python_ns, param);
                if let Some(next) = next {
                    code.push_str(&format!(", {}", next.code(python_ns)));
                }
                code.push_str(" >");
                code
            }
            Policy::WithCustodianAndWard {
                custodian,
                ward,
                next,
            } => {
                let mut code = format!(
                    "{}with_custodian_and_ward< {}, {}",
                    python_ns, custodian, ward
                );
                if let Some(next) = next {
                    code.push_str(&format!(", {}", next.code(python_ns)));
                }
                code.push_str(" >");
                code
            }
            Policy::ReturnValuePolicy { which } => {
                format!("{}return_value_policy< {}{} >", python_ns, python_ns, which)
            }
        }
    }

    /// Trailing argument appended to a `.def(...)`: `, policy()`
    pub fn def_argument(&self, python_ns: &str) -> String {
        format!(", {}()", self.code(python_ns))
    }
}
