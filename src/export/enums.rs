// Tue Jan 16 2026 - Alex

use crate::config::ExportConfig;
use crate::declarations::EnumDecl;
use crate::directives::ClassDirectives;
use crate::export::unit::{OutputSink, MODULE};

/// Registers an enumeration with `enum_< T >` and one `.value` per
/// enumerator.
pub struct EnumExporter<'a> {
    info: &'a ClassDirectives,
    config: &'a ExportConfig,
}

impl<'a> EnumExporter<'a> {
    pub fn new(info: &'a ClassDirectives, config: &'a ExportConfig) -> Self {
        Self { info, config }
    }

    pub fn export(&self, decl: &EnumDecl, sink: &mut dyn OutputSink) {
        if self.info.exclude {
            log::debug!("Skipping excluded enum {}", decl.full_name());
            return;
        }

        let indent = &self.config.indent;
        let name = self.info.rename.as_deref().unwrap_or(&decl.name);
        let mut code = format!(
            "{}{}enum_< {} >(\"{}\")\n",
            indent,
            self.config.python_namespace,
            decl.full_name(),
            name
        );
        for value in &decl.values {
            let directive = self.info.member(value);
            if directive.exclude {
                continue;
            }
            code.push_str(&format!(
                "{}{}.value(\"{}\", {})\n",
                indent,
                indent,
                directive.name_or(value),
                decl.value_full_name(value)
            ));
        }
        code.push_str(&format!("{};\n\n", indent));
        sink.write(MODULE, &code);
    }
}
