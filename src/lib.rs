// Tue Jan 15 2026 - Alex

pub mod config;
pub mod declarations;
pub mod directives;
pub mod export;
pub mod output;
pub mod ui;
pub mod utils;

pub use config::ExportConfig;
pub use declarations::{ClassEntity, DeclarationGraph, Member};
pub use directives::{ClassDirectives, Directive, DirectiveTable};
pub use export::{ClassExporter, CodeUnit, ExportError, ExportReport, OutputSink};
pub use output::{ModuleWriter, RunSummary};
