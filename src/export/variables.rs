// Tue Jan 13 2026 - Alex

use crate::declarations::Member;
use crate::export::{Binder, ExportContext, ExportError, Fragments, Section};

pub struct VariableBinder;

impl Binder for VariableBinder {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        for var in ctx.members.iter().filter_map(|m| match m {
            Member::Variable(v) => Some(v),
            _ => None,
        }) {
            let directive = ctx.info.member(&var.name);
            if directive.exclude {
                log::debug!("Skipping excluded variable {}", var.full_name());
                continue;
            }
            let def = if var.ty.is_const { ".def_readonly" } else { ".def_readwrite" };
            out.add(
                Section::Inside,
                format!("{}(\"{}\", &{})", def, directive.name_or(&var.name), var.full_name()),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::{ClassDirectives, Directive};
    use crate::export::fixtures::{self, Harness};

    #[test]
    fn test_readonly_and_readwrite() {
        let harness = Harness::new(fixtures::widget_graph(), "Widget");
        let out = harness.run(&VariableBinder);

        assert_eq!(
            out.sections.get(Section::Inside),
            [
                ".def_readwrite(\"width\", &Widget::width)".to_string(),
                ".def_readonly(\"id\", &Widget::id)".to_string(),
            ]
        );
    }

    #[test]
    fn test_rename_and_exclude() {
        let info = ClassDirectives::new("Widget")
            .with_member("width", Directive::new().with_rename("w"))
            .with_member("id", Directive::excluded());
        let harness = Harness::new(fixtures::widget_graph(), "Widget").with_info(info);
        let out = harness.run(&VariableBinder);

        assert_eq!(
            out.sections.get(Section::Inside),
            [".def_readwrite(\"w\", &Widget::width)".to_string()]
        );
    }
}
