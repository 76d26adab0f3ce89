// Tue Jan 16 2026 - Alex

use crate::config::ExportConfig;
use crate::export::unit::{DECLARATION, DECLARATION_OUTSIDE, INCLUDE, MODULE};
use crate::export::CodeUnit;
use std::fs;
use std::path::Path;

const BANNER_WIDTH: usize = 79;

fn banner(title: &str) -> String {
    let prefix = format!("// {} ", title);
    let fill = BANNER_WIDTH.saturating_sub(prefix.len());
    format!("{}{}\n", prefix, "=".repeat(fill))
}

/// Turns a filled code unit into one compilable translation unit
pub struct ModuleWriter<'a> {
    config: &'a ExportConfig,
}

impl<'a> ModuleWriter<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    /// Namespace the generated helpers live in; anonymous when unset
    fn helper_namespace(&self) -> &str {
        self.config.pyste_namespace.trim_end_matches("::")
    }

    pub fn render(&self, unit: &CodeUnit) -> String {
        let mut code = String::from("// Generated by class-exporter. Do not edit.\n\n");

        code.push_str(&banner("Boost Includes"));
        code.push_str("#include <boost/python.hpp>\n");
        code.push_str("#include <boost/cstdint.hpp>\n\n");

        let includes = unit.section(INCLUDE);
        if !includes.is_empty() {
            code.push_str(&banner("Includes"));
            code.push_str(includes);
            code.push('\n');
        }

        let outside = unit.section(DECLARATION_OUTSIDE);
        let declarations = unit.section(DECLARATION);
        if !outside.is_empty() || !declarations.is_empty() {
            code.push_str(&banner("Declarations"));
            code.push_str(outside);
            if !declarations.is_empty() {
                code.push_str(&format!("namespace {} {{\n\n", self.helper_namespace()));
                code.push_str(declarations);
                code.push_str(&format!("\n}}// namespace {}\n", self.helper_namespace()));
            }
            code.push('\n');
        }

        code.push_str(&banner("Module"));
        code.push_str(&format!("BOOST_PYTHON_MODULE({})\n{{\n", self.config.module_name));
        code.push_str(unit.section(MODULE));
        code.push_str("}\n");
        code
    }

    pub fn save(&self, unit: &CodeUnit, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render(unit))?;
        log::info!("Wrote module {} to {}", self.config.module_name, path.display());
        Ok(())
    }
}
