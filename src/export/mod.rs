// Tue Jan 13 2026 - Alex

pub mod error;
pub mod diagnostics;
pub mod sections;
pub mod unit;
pub mod context;
pub mod resolver;
pub mod policy_check;
pub mod constructors;
pub mod variables;
pub mod methods;
pub mod operators;
pub mod virtuals;
pub mod enums;
pub mod nested;
pub mod exporter;

#[cfg(test)]
pub mod fixtures;

pub use error::ExportError;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use sections::{Section, Sections};
pub use unit::{CodeUnit, OutputSink};
pub use context::{Binder, ExportContext, Fragments};
pub use resolver::MemberResolver;
pub use policy_check::PolicyCheck;
pub use constructors::ConstructorBuilder;
pub use variables::VariableBinder;
pub use methods::MethodBinder;
pub use operators::OperatorMapper;
pub use virtuals::VirtualShim;
pub use enums::EnumExporter;
pub use nested::NestedComposer;
pub use exporter::{ClassExporter, ExportReport};
