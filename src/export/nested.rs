// Tue Jan 16 2026 - Alex

use crate::declarations::Member;
use crate::export::{
    Binder, ClassExporter, CodeUnit, EnumExporter, ExportContext, ExportError, Fragments,
};

/// Exports nested classes and enums through their own pipeline and keeps
/// the resulting units for the parent to merge into its scope.
pub struct NestedComposer;

impl Binder for NestedComposer {
    fn name(&self) -> &'static str {
        "nested"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        let class_name = ctx.class_name();
        let mut exported = ctx.exported.clone();

        for member in ctx.members {
            match member {
                Member::NestedClass(nested) => {
                    let full_name = nested.full_name();
                    let info = ctx.info.nested_for(&nested.name, &full_name);
                    let mut unit = CodeUnit::new();
                    let report = ClassExporter::new(ctx.graph, &info, ctx.config)
                        .export(&mut unit, &exported)?;

                    out.diagnostics.extend(report.diagnostics);
                    for name in report.exported {
                        exported.insert(name.clone());
                        out.exported.push(name);
                    }
                    out.nested.push(unit);
                }
                Member::NestedEnum(decl) => {
                    let info = ctx.info.nested_for(&decl.name, &decl.full_name());
                    let mut unit = CodeUnit::new();
                    EnumExporter::new(&info, ctx.config).export(decl, &mut unit);
                    out.nested.push(unit);
                }
                _ => {}
            }
        }

        if !out.nested.is_empty() {
            log::debug!("{} has {} nested declarations", class_name, out.nested.len());
        }
        Ok(())
    }
}
