// Tue Jan 13 2026 - Alex

pub mod types;
pub mod member;
pub mod class;
pub mod graph;
pub mod error;

pub use types::{Type, TypeKind, Visibility};
pub use member::{EnumDecl, Function, Member, Method, NestedClass, Signature, Variable};
pub use class::{BaseRef, ClassEntity};
pub use graph::{Declaration, DeclarationGraph, ResolvedClass, Typedef};
pub use error::DeclarationError;
