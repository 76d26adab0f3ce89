// Tue Jan 15 2026 - Alex

use crate::declarations::{Method, Signature};
use crate::export::{Binder, ExportContext, ExportError, Fragments, Section};
use itertools::Itertools;

/// Picks the `class_` constructor and registers the remaining overloads
pub struct ConstructorBuilder;

impl ConstructorBuilder {
    /// `init< A, B, optional< C > >()`
    pub fn init_code(py: &str, constructor: &Method) -> String {
        let params = constructor.parameter_types(constructor.max_args());
        let (required, optional) = params.split_at(constructor.min_args());

        let mut args = required.to_vec();
        if !optional.is_empty() {
            args.push(format!("{}optional< {} >", py, optional.iter().join(", ")));
        }

        if args.is_empty() {
            format!("{}init<>()", py)
        } else {
            format!("{}init< {} >()", py, args.join(", "))
        }
    }
}

impl Binder for ConstructorBuilder {
    fn name(&self) -> &'static str {
        "constructors"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        let py = ctx.py();
        let mut constructors = ctx.constructors();

        if ctx.class.is_abstract {
            if let Some(pos) = constructors.iter().position(|c| c.is_copy_constructor()) {
                constructors.remove(pos);
            }
        }

        if constructors.is_empty() {
            out.add(Section::Constructor, format!("{}no_init", py));
        } else {
            let primary = constructors
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| (c.min_args(), c.max_args()))
                .map(|(i, _)| i)
                .ok_or_else(|| {
                    ExportError::invariant(&ctx.class_name(), "no primary constructor candidate")
                })?;
            let primary = constructors.remove(primary);
            out.add(Section::Constructor, Self::init_code(py, primary));

            for constructor in constructors {
                out.add(Section::Inside, format!(".def({})", Self::init_code(py, constructor)));
            }
        }

        if !ctx.class.has_copy_constructor() || ctx.class.is_abstract {
            out.add(
                Section::Template,
                format!("{}noncopyable", ctx.config.boost_namespace),
            );
        }

        Ok(())
    }
}
