// Tue Jan 13 2026 - Alex

pub mod directive;
pub mod policy;
pub mod table;

pub use directive::{Directive, FunctionWrapper, DEFAULT_DIRECTIVE};
pub use policy::{Policy, ReturnValueKind};
pub use table::{AddedMethod, ClassDirectives, DirectiveTable};
