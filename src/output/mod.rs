// Tue Jan 13 2026 - Alex

pub mod module;
pub mod summary;

pub use module::ModuleWriter;
pub use summary::RunSummary;
