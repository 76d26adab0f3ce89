// Tue Jan 16 2026 - Alex

use crate::declarations::{Member, Method, Signature, Type};
use crate::export::{Binder, ExportContext, ExportError, Fragments, Section};
use crate::utils::StringUtils;
use itertools::Itertools;
use std::collections::HashSet;

/// `T p0, U p1` plus the bare names, for the first `count` parameters
fn parameter_list(method: &Method, count: usize) -> (String, Vec<String>) {
    let names: Vec<String> = (0..count).map(|i| format!("p{}", i)).collect();
    let params = method
        .parameter_types(count)
        .iter()
        .zip(&names)
        .map(|(ty, name)| format!("{} {}", ty, name))
        .join(", ");
    (params, names)
}

/// Generates the subclass that lets the runtime override virtual methods,
/// and the registrations pointing at it.
pub struct VirtualShim;

impl VirtualShim {
    pub fn wrapper_name(class_name: &str) -> String {
        format!("{}_Wrapper", StringUtils::make_id(class_name))
    }

    /// One name per default-argument arity, fewest arguments first
    pub fn default_names(method: &Method) -> Vec<String> {
        let base = format!("default_{}", method.name);
        if method.has_default_arguments() {
            (method.min_args()..=method.max_args())
                .map(|n| format!("{}_{}", base, n))
                .collect()
        } else {
            vec![base]
        }
    }

    fn is_overridable(method: &Method) -> bool {
        method.is_virtual && !method.visibility.is_private()
    }

    /// Virtual methods the shim overrides: the class's own first, then those
    /// of every base attributed to the class. A signature already seen is
    /// skipped, so the most derived declaration wins. A name kept more than
    /// once is overloaded in the shim and loses its uniqueness.
    pub fn collect(ctx: &ExportContext<'_>) -> Vec<Method> {
        let class_name = ctx.class_name();
        let own = ctx
            .class
            .members
            .iter()
            .filter_map(|m| match m {
                Member::Method(method) if Self::is_overridable(method) => Some(method.clone()),
                _ => None,
            });

        let mut inherited = Vec::new();
        for base_ref in ctx.class.all_bases() {
            let base = match ctx.graph.class(&base_ref.name) {
                Ok(base) => base,
                Err(e) => {
                    log::warn!("Cannot collect virtual methods of {}: {}", base_ref.name, e);
                    continue;
                }
            };
            for member in &base.members {
                if let Member::Method(method) = member {
                    if Self::is_overridable(method) && !ctx.info.member(&method.name).no_override {
                        let mut method = method.clone();
                        method.class = class_name.clone();
                        inherited.push(method);
                    }
                }
            }
        }

        let mut seen = HashSet::new();
        let mut methods: Vec<Method> = own
            .chain(inherited)
            .filter(|m| seen.insert(m.signature_key()))
            .collect();

        let counts = methods.iter().counts_by(|m| m.name.clone());
        for method in &mut methods {
            if counts[&method.name] > 1 {
                method.is_unique = false;
            }
        }
        methods
    }

    /// Override entry point plus the default implementations of `method`,
    /// as members of the shim struct.
    fn method_declaration(ctx: &ExportContext<'_>, method: &Method) -> String {
        let indent = &ctx.config.indent;
        let directive = ctx.info.member(&method.name);
        let exported = directive.name_or(&method.name);
        let result = method.result_name();
        let return_ = if method.result.as_ref().map_or(true, Type::is_void) {
            ""
        } else {
            "return "
        };
        let constness = if method.is_const { " const" } else { "" };

        let (params, names) = parameter_list(method, method.max_args());
        let forwarded: String = names.iter().map(|n| format!(", {}", n)).collect();

        let mut code = format!(
            "{}{} {}({}){} {{\n",
            indent, result, method.name, params, constness
        );
        code.push_str(&format!(
            "{}{}{}{}call_method< {} >(self, \"{}\"{});\n",
            indent,
            indent,
            return_,
            ctx.py(),
            result,
            exported,
            forwarded
        ));
        code.push_str(&format!("{}}}\n", indent));

        if method.is_abstract || method.visibility.is_private() {
            return code;
        }

        let arities = method.min_args()..=method.max_args();
        for (name, count) in Self::default_names(method).iter().zip(arities) {
            let (params, names) = parameter_list(method, count);
            let call = match &directive.wrapper {
                Some(wrapper) => format!(
                    "{}{}({});\n",
                    return_,
                    wrapper.full_name(ctx.helper_ns()),
                    std::iter::once("this".to_string()).chain(names).join(", ")
                ),
                None => format!(
                    "{}{}::{}({});\n",
                    return_,
                    ctx.class_name(),
                    method.name,
                    names.join(", ")
                ),
            };
            code.push('\n');
            code.push_str(&format!(
                "{}{} {}({}){} {{\n",
                indent, result, name, params, constness
            ));
            code.push_str(&format!("{}{}{}", indent, indent, call));
            code.push_str(&format!("{}}}\n", indent));
        }

        code
    }

    /// The shim struct: one constructor per arity of every public
    /// constructor (minus the copy constructor of an abstract class), the
    /// overridden methods and the back-reference.
    pub fn declaration(ctx: &ExportContext<'_>, methods: &[Method]) -> String {
        let indent = &ctx.config.indent;
        let class_name = ctx.class_name();
        let wrapper = Self::wrapper_name(&class_name);

        let mut code = format!("struct {}: {}\n{{\n", wrapper, class_name);
        let constructors = ctx
            .class
            .constructors(true)
            .into_iter()
            .filter(|c| !(ctx.class.is_abstract && c.is_copy_constructor()));
        for constructor in constructors {
            for count in constructor.min_args()..=constructor.max_args() {
                let (params, names) = parameter_list(constructor, count);
                let params = if params.is_empty() { params } else { format!(", {}", params) };
                code.push_str(&format!("{}{}(PyObject* self_{}):\n", indent, wrapper, params));
                code.push_str(&format!(
                    "{}{}{}({}), self(self_) {{}}\n\n",
                    indent,
                    indent,
                    class_name,
                    names.join(", ")
                ));
            }
        }

        let body = methods
            .iter()
            .filter(|m| !ctx.info.member(&m.name).exclude)
            .map(|m| Self::method_declaration(ctx, m))
            .join("\n");
        code.push_str(&body);
        code.push('\n');
        code.push_str(&format!("{}PyObject* self;\n", indent));
        code.push_str("};\n");
        code
    }

    /// Registrations binding the exported name to the override entry point
    /// and every default implementation.
    pub fn definitions(ctx: &ExportContext<'_>, method: &Method) -> Vec<String> {
        let py = ctx.py();
        let directive = ctx.info.member(&method.name);
        let exported = directive.name_or(&method.name);
        let wrapper = format!("{}{}", ctx.helper_ns(), Self::wrapper_name(&ctx.class_name()));
        let policy = directive
            .policy
            .as_ref()
            .map(|p| p.def_argument(py))
            .unwrap_or_default();

        if method.is_abstract {
            return vec![format!(
                ".def(\"{}\", {}pure_virtual({}){})",
                exported,
                py,
                method.pointer_declaration(),
                policy
            )];
        }

        let constness = if method.is_const { " const" } else { "" };
        let arities = method.min_args()..=method.max_args();
        let mut defaults: Vec<String> = Self::default_names(method)
            .iter()
            .zip(arities)
            .map(|(name, count)| {
                if method.is_unique {
                    format!("&{}::{}", wrapper, name)
                } else {
                    format!(
                        "({} ({}::*)({}){})&{}::{}",
                        method.result_name(),
                        wrapper,
                        method.parameter_types(count).join(", "),
                        constness,
                        wrapper,
                        name
                    )
                }
            })
            .collect();

        let mut definitions = Vec::with_capacity(defaults.len());
        if let Some(full) = defaults.pop() {
            definitions.push(format!(
                ".def(\"{}\", {}, {}{})",
                exported,
                method.pointer_declaration(),
                full,
                policy
            ));
        }
        for default in defaults {
            definitions.push(format!(".def(\"{}\", {}{})", exported, default, policy));
        }
        definitions
    }
}

impl Binder for VirtualShim {
    fn name(&self) -> &'static str {
        "virtuals"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        if !ctx.class.has_virtual_methods() {
            return Ok(());
        }

        let methods = Self::collect(ctx);
        log::debug!(
            "{} overrides {} virtual methods",
            Self::wrapper_name(&ctx.class_name()),
            methods.len()
        );

        out.add(
            Section::Template,
            format!("{}{}", ctx.helper_ns(), Self::wrapper_name(&ctx.class_name())),
        );
        for method in &methods {
            let directive = ctx.info.member(&method.name);
            if directive.exclude {
                continue;
            }
            if method.visibility.is_public() {
                for definition in Self::definitions(ctx, method) {
                    out.add(Section::Inside, definition);
                }
            }
            if let Some(code) = directive.wrapper.as_ref().and_then(|w| w.code.as_ref()) {
                out.add(Section::Declaration, code.clone());
            }
        }
        out.add(Section::Declaration, Self::declaration(ctx, &methods));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::{ClassDirectives, Directive, FunctionWrapper};
    use crate::export::fixtures::{self, Harness};

    fn declaration(out: &Fragments) -> &str {
        out.sections
            .get(Section::Declaration)
            .iter()
            .find(|d| d.starts_with("struct "))
            .unwrap()
    }

    #[test]
    fn test_shape_shim() {
        let harness = Harness::new(fixtures::shape_graph(), "Shape");
        let out = harness.run(&VirtualShim);

        assert_eq!(out.sections.get(Section::Template), ["Shape_Wrapper".to_string()]);
        assert_eq!(
            out.sections.get(Section::Inside),
            [
                ".def(\"area\", boost::python::pure_virtual(&Shape::area))".to_string(),
                ".def(\"name\", &Shape::name, &Shape_Wrapper::default_name)".to_string(),
            ]
        );

        let expected = "\
struct Shape_Wrapper: Shape
{
    Shape_Wrapper(PyObject* self_):
        Shape(), self(self_) {}

    Shape_Wrapper(PyObject* self_, int p0):
        Shape(p0), self(self_) {}

    double area() const {
        return boost::python::call_method< double >(self, \"area\");
    }

    std::string name() const {
        return boost::python::call_method< std::string >(self, \"name\");
    }

    std::string default_name() const {
        return Shape::name();
    }

    PyObject* self;
};
";
        assert_eq!(declaration(&out), expected);
    }

    #[test]
    fn test_identical_override_is_kept_once() {
        let harness = Harness::new(fixtures::virtual_graph(), "Derived");
        let graph = &harness.graph;
        let class = graph.class("Derived").unwrap().clone();
        let members = crate::export::MemberResolver::public_members(&class);
        let ctx = ExportContext {
            graph,
            info: &harness.info,
            config: &harness.config,
            class: &class,
            members: &members,
            exported: &harness.exported,
        };
        let methods = VirtualShim::collect(&ctx);
        let keys: Vec<String> = methods.iter().map(Method::signature_key).collect();

        assert_eq!(
            keys,
            [
                "void f(int)",
                "void g(double)",
                "void g()",
                "int h(int, int, int)",
            ]
        );
        assert_eq!(methods[0].class, "Derived");
        assert!(methods.iter().all(|m| m.name != "secret"));
    }

    #[test]
    fn test_default_arities() {
        let harness = Harness::new(fixtures::virtual_graph(), "Derived").with_exported(&["Base"]);
        let out = harness.run(&VirtualShim);
        let inside = out.sections.get(Section::Inside);

        let h: Vec<&String> = inside.iter().filter(|l| l.starts_with(".def(\"h\"")).collect();
        assert_eq!(
            h,
            [
                ".def(\"h\", &Derived::h, &Derived_Wrapper::default_h_3)",
                ".def(\"h\", &Derived_Wrapper::default_h_1)",
                ".def(\"h\", &Derived_Wrapper::default_h_2)",
            ]
        );

        let declaration = declaration(&out);
        for name in ["default_h_1(int p0)", "default_h_2(int p0, int p1)", "default_h_3(int p0, int p1, int p2)"] {
            assert!(declaration.contains(&format!("int {} {{", name)), "{}", name);
        }
        assert!(declaration.contains("return Derived::h(p0, p1);"));
        assert!(declaration.contains("Derived_Wrapper(PyObject* self_):\n        Derived(), self(self_) {}"));
        assert!(declaration.contains("Derived_Wrapper(PyObject* self_, int p0):\n        Derived(p0), self(self_) {}"));
    }

    #[test]
    fn test_overloaded_defaults_are_cast() {
        let harness = Harness::new(fixtures::virtual_graph(), "Derived").with_exported(&["Base"]);
        let out = harness.run(&VirtualShim);

        assert!(out.sections.contains(
            Section::Inside,
            ".def(\"g\", (void (Derived::*)(double))&Derived::g, (void (Derived_Wrapper::*)(double))&Derived_Wrapper::default_g)"
        ));
        assert!(out.sections.contains(
            Section::Inside,
            ".def(\"g\", (void (Derived::*)())&Derived::g, (void (Derived_Wrapper::*)())&Derived_Wrapper::default_g)"
        ));
        assert!(!out.sections.get(Section::Inside).iter().any(|l| l.contains("&Derived_Wrapper::default_g)") && !l.contains("::*)")));

        let declaration = declaration(&out);
        assert_eq!(declaration.matches("void default_g(").count(), 2);
    }

    #[test]
    fn test_inherited_overload_loses_uniqueness() {
        let harness = Harness::new(fixtures::virtual_graph(), "Derived").with_exported(&["Base"]);
        let graph = &harness.graph;
        let class = graph.class("Derived").unwrap().clone();
        let members = crate::export::MemberResolver::public_members(&class);
        let ctx = ExportContext {
            graph,
            info: &harness.info,
            config: &harness.config,
            class: &class,
            members: &members,
            exported: &harness.exported,
        };
        let methods = VirtualShim::collect(&ctx);

        let unique: Vec<(&str, bool)> = methods.iter().map(|m| (m.name.as_str(), m.is_unique)).collect();
        assert_eq!(
            unique,
            [("f", true), ("g", false), ("g", false), ("h", true)]
        );
    }

    #[test]
    fn test_overloaded_defaults_cast_per_arity() {
        let harness = Harness::new(fixtures::canvas_graph(), "Canvas");
        let out = harness.run(&VirtualShim);

        assert_eq!(
            out.sections.get(Section::Inside),
            [
                ".def(\"draw\", (void (Canvas::*)(int, int))&Canvas::draw, (void (Canvas_Wrapper::*)(int, int))&Canvas_Wrapper::default_draw_2)".to_string(),
                ".def(\"draw\", (void (Canvas_Wrapper::*)(int))&Canvas_Wrapper::default_draw_1)".to_string(),
                ".def(\"draw\", (void (Canvas::*)(double))&Canvas::draw, (void (Canvas_Wrapper::*)(double))&Canvas_Wrapper::default_draw)".to_string(),
            ]
        );

        let declaration = declaration(&out);
        assert!(declaration.contains("    void default_draw_1(int p0) {\n        Canvas::draw(p0);\n    }\n"));
        assert!(declaration.contains("    void default_draw_2(int p0, int p1) {\n        Canvas::draw(p0, p1);\n    }\n"));
        assert!(declaration.contains("    void default_draw(double p0) {\n        Canvas::draw(p0);\n    }\n"));
        assert!(declaration.contains("        boost::python::call_method< void >(self, \"draw\", p0, p1);\n"));
        assert!(!declaration.contains("return "));
    }

    #[test]
    fn test_abstract_copy_constructor_not_mirrored() {
        let harness = Harness::new(fixtures::abstract_copyable_graph(), "Base");
        let out = harness.run(&VirtualShim);
        let declaration = declaration(&out);

        assert!(declaration.contains("    Base_Wrapper(PyObject* self_):\n        Base(), self(self_) {}\n"));
        assert_eq!(declaration.matches("Base_Wrapper(PyObject* self_").count(), 1);
        assert!(!declaration.contains("const Base&"));
        assert!(out
            .sections
            .contains(Section::Inside, ".def(\"reset\", boost::python::pure_virtual(&Base::reset))"));
    }

    #[test]
    fn test_rename_and_default_wrapper() {
        let info = ClassDirectives::new("Shape").with_member(
            "name",
            Directive::new()
                .with_rename("label")
                .with_wrapper(FunctionWrapper::new("shape_name").with_code("std::string shape_name(Shape*);")),
        );
        let harness = Harness::new(fixtures::shape_graph(), "Shape").with_info(info);
        let out = harness.run(&VirtualShim);

        assert!(out
            .sections
            .contains(Section::Inside, ".def(\"label\", &Shape::name, &Shape_Wrapper::default_name)"));
        let declaration = declaration(&out);
        assert!(declaration.contains("call_method< std::string >(self, \"label\");"));
        assert!(declaration.contains("return shape_name(this);"));
        assert_eq!(out.sections.get(Section::Declaration)[0], "std::string shape_name(Shape*);");
    }

    #[test]
    fn test_no_virtuals_no_shim() {
        let harness = Harness::new(fixtures::widget_graph(), "Widget");
        let out = harness.run(&VirtualShim);
        assert!(out.sections.is_empty(Section::Template));
        assert!(out.sections.is_empty(Section::Declaration));
    }

    #[test]
    fn test_default_names() {
        let method = Method::new("h", "Base")
            .with_param(Type::value("int"))
            .with_param(Type::value("int").with_default("0"));
        assert_eq!(VirtualShim::default_names(&method), ["default_h_1", "default_h_2"]);
        assert_eq!(VirtualShim::wrapper_name("ns::Base"), "ns_Base_Wrapper");
    }
}
