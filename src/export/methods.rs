// Tue Jan 15 2026 - Alex

use crate::declarations::{Function, Method, Signature, Type};
use crate::export::{Binder, ExportContext, ExportError, Fragments, PolicyCheck, Section};
use crate::utils::StringUtils;
use std::collections::HashSet;

/// Something the method binder registers: a non-virtual member function or
/// a free function added to the class by the user.
enum Bindable<'a> {
    Method(&'a Method),
    Added {
        function: &'a Function,
        rename: Option<&'a str>,
    },
}

impl<'a> Bindable<'a> {
    fn name(&self) -> &'a str {
        match *self {
            Bindable::Method(m) => &m.name,
            Bindable::Added { function, .. } => &function.name,
        }
    }

    fn full_name(&self) -> String {
        match self {
            Bindable::Method(m) => m.full_name(),
            Bindable::Added { function, .. } => function.full_name(),
        }
    }

    fn result(&self) -> Option<&'a Type> {
        match *self {
            Bindable::Method(m) => m.result.as_ref(),
            Bindable::Added { function, .. } => Some(&function.result),
        }
    }

    fn signature(&self) -> &dyn Signature {
        match self {
            Bindable::Method(m) => *m,
            Bindable::Added { function, .. } => *function,
        }
    }

    fn is_static(&self) -> bool {
        matches!(self, Bindable::Method(m) if m.is_static)
    }

    /// Static methods and free functions are plain function pointers
    fn is_function_like(&self) -> bool {
        match self {
            Bindable::Method(m) => m.is_static,
            Bindable::Added { .. } => true,
        }
    }

    fn pointer_declaration(&self) -> String {
        match self {
            Bindable::Method(m) => m.pointer_declaration(),
            Bindable::Added { function, .. } => function.pointer_declaration(),
        }
    }
}

/// Registers non-virtual methods and user-added free functions
pub struct MethodBinder;

impl MethodBinder {
    /// Name of the overload-set struct for a default-argument range
    pub fn overload_name(full_name: &str, min_args: usize, max_args: usize) -> String {
        format!("{}_overloads_{}_{}", StringUtils::make_id(full_name), min_args, max_args)
    }

    fn overload_declaration(method: &Bindable<'_>, overload_name: &str) -> String {
        let sig = method.signature();
        let (macro_name, func) = if method.is_function_like() {
            ("BOOST_PYTHON_FUNCTION_OVERLOADS", method.full_name())
        } else {
            ("BOOST_PYTHON_MEMBER_FUNCTION_OVERLOADS", method.name().to_string())
        };
        format!(
            "{}({}, {}, {}, {})\n",
            macro_name,
            overload_name,
            func,
            sig.min_args(),
            sig.max_args()
        )
    }
}

impl Binder for MethodBinder {
    fn name(&self) -> &'static str {
        "methods"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        let py = ctx.py();
        let helper_ns = ctx.helper_ns();
        let mut declared = HashSet::new();

        let mut methods: Vec<Bindable<'_>> = ctx
            .methods()
            .filter(|m| !m.is_virtual)
            .map(Bindable::Method)
            .collect();
        for added in &ctx.info.added_methods {
            let function = ctx.graph.function(&added.name).map_err(|e| {
                log::warn!("Cannot add {} to {}: {}", added.name, ctx.class_name(), e);
                e
            })?;
            methods.push(Bindable::Added {
                function,
                rename: added.rename.as_deref(),
            });
        }

        for method in &methods {
            let directive = ctx.info.member(method.name());
            if directive.exclude {
                log::debug!("Skipping excluded method {}", method.full_name());
                continue;
            }

            let name = match method {
                Bindable::Added {
                    rename: Some(rename),
                    ..
                } => *rename,
                _ => directive.name_or(method.name()),
            };

            let (policy, diagnostic) =
                PolicyCheck::resolve(&method.full_name(), method.result(), directive.policy.as_ref());
            if let Some(diagnostic) = diagnostic {
                out.report(diagnostic);
            }
            let policy = policy.map(|p| p.def_argument(py)).unwrap_or_default();

            let sig = method.signature();
            let overload = if sig.has_default_arguments() {
                let overload_name =
                    Self::overload_name(&method.full_name(), sig.min_args(), sig.max_args());
                let declaration = Self::overload_declaration(method, &overload_name);
                if declared.insert(declaration.clone()) {
                    out.add(Section::Declaration, declaration);
                }
                format!(", {}{}()", helper_ns, overload_name)
            } else {
                String::new()
            };

            let pointer = match &directive.wrapper {
                Some(wrapper) => format!("&{}", wrapper.full_name(helper_ns)),
                None => method.pointer_declaration(),
            };

            out.add(
                Section::Inside,
                format!(".def(\"{}\", {}{}{})", name, pointer, policy, overload),
            );
            if method.is_static() {
                out.add(Section::Inside, format!(".staticmethod(\"{}\")", name));
            }
            if let Some(code) = directive.wrapper.as_ref().and_then(|w| w.code.as_ref()) {
                out.add(Section::Declaration, code.clone());
            }
        }

        Ok(())
    }
}
