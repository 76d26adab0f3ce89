// Tue Jan 16 2026 - Alex

use crate::config::ExportConfig;
use crate::declarations::{DeclarationGraph, Member};
use crate::directives::ClassDirectives;
use crate::export::unit::{OutputSink, DECLARATION, DECLARATION_OUTSIDE, INCLUDE, MODULE};
use crate::export::{
    Binder, ConstructorBuilder, Diagnostic, ExportContext, ExportError, Fragments,
    MemberResolver, MethodBinder, NestedComposer, OperatorMapper, Section, VariableBinder,
    VirtualShim,
};
use crate::utils::StringUtils;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of one class export
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// Qualified name of the exported class
    pub class: String,
    /// The class and every nested class registered along with it
    pub exported: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExportReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Drives the binders over one class and writes the assembled code
pub struct ClassExporter<'a> {
    graph: &'a DeclarationGraph,
    info: &'a ClassDirectives,
    config: &'a ExportConfig,
}

impl<'a> ClassExporter<'a> {
    pub fn new(graph: &'a DeclarationGraph, info: &'a ClassDirectives, config: &'a ExportConfig) -> Self {
        Self { graph, info, config }
    }

    fn binders() -> [&'static dyn Binder; 6] {
        [
            &ConstructorBuilder,
            &VariableBinder,
            &VirtualShim,
            &MethodBinder,
            &OperatorMapper,
            &NestedComposer,
        ]
    }

    /// Total number of bases, at every level. Classes with fewer bases are
    /// exported first so bases are registered before what derives from them.
    pub fn order(&self) -> Result<(usize, String), ExportError> {
        let class = self.graph.class(&self.info.name)?;
        Ok((class.base_count(), class.full_name()))
    }

    pub fn export(
        &self,
        sink: &mut dyn OutputSink,
        exported: &HashSet<String>,
    ) -> Result<ExportReport, ExportError> {
        self.config.validate().map_err(ExportError::Config)?;
        let resolved = self.graph.resolve_class(&self.info.name)?;
        let mut class = resolved.class.clone();
        let mut report = ExportReport {
            class: class.full_name(),
            ..ExportReport::default()
        };

        if self.info.exclude {
            log::info!("Skipping excluded class {}", report.class);
            return Ok(report);
        }

        let resolver = MemberResolver::new(self.graph);
        resolver.inherit_members(&mut class, exported);
        resolver.apply_no_override(&mut class, self.info);
        let members = MemberResolver::public_members(&class);

        let ctx = ExportContext {
            graph: self.graph,
            info: self.info,
            config: self.config,
            class: &class,
            members: &members,
            exported,
        };

        let mut out = Fragments::new();
        let name = self
            .info
            .rename
            .as_deref()
            .or(resolved.alias)
            .unwrap_or(&class.name);
        out.add(Section::Template, class.full_name());
        out.add(Section::Constructor, format!("\"{}\"", name));

        let bases = resolver.exported_bases(&class, exported);
        if !bases.is_empty() {
            out.add(
                Section::Template,
                format!("{}bases< {} >", ctx.py(), bases.join(", ")),
            );
        }

        for header in &self.info.include {
            out.add(Section::Include, Self::include_line(header));
        }

        for binder in Self::binders() {
            log::trace!("Running {} binder on {}", binder.name(), report.class);
            binder.bind(&ctx, &mut out)?;
        }

        self.export_smart_pointer(&ctx, &mut out);
        self.export_opaque_pointers(&ctx, &mut out);

        self.write(&ctx, &out, sink);

        report.exported.push(report.class.clone());
        report.exported.extend(out.exported);
        report.diagnostics = out.diagnostics;
        log::info!(
            "Exported {} ({} nested, {} diagnostics)",
            report.class,
            report.exported.len() - 1,
            report.diagnostics.len()
        );
        Ok(report)
    }

    fn include_line(header: &str) -> String {
        if header.starts_with('<') || header.starts_with('"') {
            format!("#include {}", header)
        } else {
            format!("#include <{}>", header)
        }
    }

    fn export_smart_pointer(&self, ctx: &ExportContext<'_>, out: &mut Fragments) {
        if let Some(smart_ptr) = &self.info.smart_ptr {
            let pointer = smart_ptr.replace("%s", &ctx.class_name());
            out.add(
                Section::Scope,
                format!("{}register_ptr_to_python< {} >();", ctx.py(), pointer),
            );
        }
    }

    fn export_opaque_pointers(&self, ctx: &ExportContext<'_>, out: &mut Fragments) {
        let mut declared = HashSet::new();
        for member in ctx.members {
            let Member::Method(method) = member else {
                continue;
            };
            let opaque = self
                .info
                .member(&method.name)
                .policy
                .as_ref()
                .map_or(false, |p| p.is_opaque_pointer());
            if let (true, Some(result)) = (opaque, method.result.as_ref()) {
                let code = format!("BOOST_PYTHON_OPAQUE_SPECIALIZED_TYPE_ID({})", result.name);
                if declared.insert(code.clone()) {
                    out.add(Section::DeclarationOutside, code);
                }
            }
        }
    }

    /// Assembles the registration statement, wrapping it in a scope block
    /// when scope statements or nested declarations need one, and hands
    /// every section to the sink.
    fn write(&self, ctx: &ExportContext<'_>, out: &Fragments, sink: &mut dyn OutputSink) {
        let indent = &self.config.indent;
        let py = ctx.py();
        let sections = &out.sections;
        let needs_scope = !sections.is_empty(Section::Scope) || !out.nested.is_empty();
        let scope_name = format!("{}_scope", StringUtils::make_id(&ctx.class_name()));

        let mut code = String::new();
        if needs_scope {
            code.push_str(&format!(
                "{}{}scope* {} = new {}scope(\n",
                indent, py, scope_name, py
            ));
        }
        code.push_str(&format!(
            "{}{}class_< {} >({})\n",
            indent,
            py,
            sections.get(Section::Template).join(", "),
            sections.get(Section::Constructor).join(", ")
        ));
        for line in sections.get(Section::Inside) {
            code.push_str(&format!("{}{}{}\n", indent, indent, line));
        }
        if needs_scope {
            code.push_str(&format!("{});\n", indent));
            for line in sections.get(Section::Scope) {
                code.push_str(&format!("{}{}\n", indent, line));
            }
            for unit in &out.nested {
                code.push('\n');
                code.push_str(unit.section(MODULE));
            }
            code.push_str(&format!("{}delete {};\n", indent, scope_name));
        } else {
            code.push_str(&format!("{};\n", indent));
        }
        sink.write(MODULE, &format!("{}\n", code));

        for (section, name) in [
            (Section::Declaration, DECLARATION),
            (Section::DeclarationOutside, DECLARATION_OUTSIDE),
        ] {
            let mut text = sections.get(section).join("\n");
            for unit in &out.nested {
                let nested = unit.section(name);
                if nested.is_empty() {
                    continue;
                }
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(nested);
            }
            if !text.is_empty() {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                sink.write(name, &text);
            }
        }

        let includes: String = sections
            .get(Section::Include)
            .iter()
            .map(String::as_str)
            .chain(out.nested.iter().flat_map(|u| u.section(INCLUDE).lines()))
            .unique()
            .map(|line| format!("{}\n", line))
            .collect();
        if !includes.is_empty() {
            sink.write(INCLUDE, &includes);
        }
    }
}
