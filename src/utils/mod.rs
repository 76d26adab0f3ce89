// Tue Jan 13 2026 - Alex

pub mod string;

pub use string::StringUtils;
