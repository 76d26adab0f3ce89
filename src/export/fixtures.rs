// Tue Jan 15 2026 - Alex

//! Declaration graphs shared by the export tests.

use crate::config::ExportConfig;
use crate::declarations::{
    ClassEntity, Declaration, DeclarationGraph, EnumDecl, Function, Member, Method, NestedClass,
    Type, Variable, Visibility,
};
use crate::directives::ClassDirectives;
use crate::export::{Binder, ExportContext, ExportError, Fragments, MemberResolver};
use std::collections::HashSet;

/// Runs a single binder the way the class exporter would: on a flattened
/// clone of the class, with `no_override` applied.
pub struct Harness {
    pub graph: DeclarationGraph,
    pub info: ClassDirectives,
    pub config: ExportConfig,
    pub exported: HashSet<String>,
}

impl Harness {
    pub fn new(graph: DeclarationGraph, class_name: &str) -> Self {
        Self {
            graph,
            info: ClassDirectives::new(class_name),
            config: ExportConfig::default(),
            exported: HashSet::new(),
        }
    }

    pub fn with_info(mut self, info: ClassDirectives) -> Self {
        self.info = info;
        self
    }

    pub fn with_exported(mut self, names: &[&str]) -> Self {
        self.exported = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn try_run(&self, binder: &dyn Binder) -> Result<Fragments, ExportError> {
        let resolver = MemberResolver::new(&self.graph);
        let mut class = self.graph.class(&self.info.name)?.clone();
        resolver.inherit_members(&mut class, &self.exported);
        resolver.apply_no_override(&mut class, &self.info);
        let members = MemberResolver::public_members(&class);

        let ctx = ExportContext {
            graph: &self.graph,
            info: &self.info,
            config: &self.config,
            class: &class,
            members: &members,
            exported: &self.exported,
        };
        let mut out = Fragments::new();
        binder.bind(&ctx, &mut out)?;
        Ok(out)
    }

    pub fn run(&self, binder: &dyn Binder) -> Fragments {
        self.try_run(binder).unwrap()
    }
}

fn constructor(class: &str, params: &[Type]) -> Member {
    let short = class.rsplit("::").next().unwrap_or(class);
    let mut ctor = Method::new(short, class);
    for param in params {
        ctor = ctor.with_param(param.clone());
    }
    Member::Constructor(ctor)
}

fn int() -> Type {
    Type::value("int")
}

/// `C : B : A`, none of them exported
pub fn chain_graph() -> DeclarationGraph {
    let a = ClassEntity::new("A", "")
        .with_member(constructor("A", &[]))
        .with_member(Member::Method(
            Method::new("a", "A")
                .with_result(int())
                .with_param(int())
                .with_param(int().with_default("0"))
                .with_const(),
        ))
        .with_member(Member::Variable(Variable::new("x", "A", int())))
        .with_member(Member::Method(
            Method::new("hidden", "A")
                .with_result(Type::void())
                .with_visibility(Visibility::Private),
        ));
    let b = ClassEntity::new("B", "")
        .with_base_level(&["A"])
        .with_member(Member::Method(Method::new("b", "B").with_result(Type::void())));
    let c = ClassEntity::new("C", "")
        .with_base_level(&["B"])
        .with_base_level(&["A"])
        .with_member(Member::Method(Method::new("c", "C").with_result(Type::void())));

    DeclarationGraph::new()
        .with(Declaration::Class(a))
        .with(Declaration::Class(b))
        .with(Declaration::Class(c))
}

/// Abstract `Shape` with a pure virtual `area` and an overridable `name`,
/// plus `Circle` deriving from it.
pub fn shape_graph() -> DeclarationGraph {
    let shape = ClassEntity::new("Shape", "")
        .with_abstract()
        .with_member(constructor("Shape", &[]))
        .with_member(constructor("Shape", &[int()]))
        .with_member(Member::Method(
            Method::new("area", "Shape")
                .with_result(Type::value("double"))
                .with_const()
                .with_abstract(),
        ))
        .with_member(Member::Method(
            Method::new("name", "Shape")
                .with_result(Type::value("std::string"))
                .with_const()
                .with_virtual(),
        ));
    let circle = ClassEntity::new("Circle", "")
        .with_base_level(&["Shape"])
        .with_member(constructor("Circle", &[Type::value("double")]))
        .with_member(constructor("Circle", &[Type::reference("Circle").with_const()]))
        .with_member(Member::Method(
            Method::new("area", "Circle")
                .with_result(Type::value("double"))
                .with_const()
                .with_virtual(),
        ))
        .with_member(Member::Variable(Variable::new("radius", "Circle", Type::value("double"))));

    DeclarationGraph::new()
        .with(Declaration::Class(shape))
        .with(Declaration::Class(circle))
}

pub fn widget_graph() -> DeclarationGraph {
    let widget = ClassEntity::new("Widget", "")
        .with_member(constructor("Widget", &[]))
        .with_member(constructor("Widget", &[int(), int()]))
        .with_member(constructor("Widget", &[int(), int(), int()]))
        .with_member(constructor("Widget", &[Type::reference("Widget").with_const()]))
        .with_member(Member::Variable(Variable::new("width", "Widget", int())))
        .with_member(Member::Variable(Variable::new("id", "Widget", int().with_const())))
        .with_member(Member::Variable(
            Variable::new("secret", "Widget", int()).with_visibility(Visibility::Private),
        ));

    DeclarationGraph::new().with(Declaration::Class(widget))
}

pub fn abstract_copyable_graph() -> DeclarationGraph {
    let base = ClassEntity::new("Base", "")
        .with_abstract()
        .with_member(constructor("Base", &[]))
        .with_member(constructor("Base", &[Type::reference("Base").with_const()]))
        .with_member(Member::Method(
            Method::new("reset", "Base").with_result(Type::void()).with_abstract(),
        ));

    DeclarationGraph::new().with(Declaration::Class(base))
}

/// `Canvas` with `draw(int, int = 0)` overloaded by `draw(double)`, both
/// virtual.
pub fn canvas_graph() -> DeclarationGraph {
    let canvas = ClassEntity::new("Canvas", "")
        .with_member(constructor("Canvas", &[]))
        .with_member(Member::Method(
            Method::new("draw", "Canvas")
                .with_result(Type::void())
                .with_param(int())
                .with_param(int().with_default("0"))
                .with_virtual()
                .overloaded(),
        ))
        .with_member(Member::Method(
            Method::new("draw", "Canvas")
                .with_result(Type::void())
                .with_param(Type::value("double"))
                .with_virtual()
                .overloaded(),
        ));

    DeclarationGraph::new().with(Declaration::Class(canvas))
}

pub fn factory_graph() -> DeclarationGraph {
    let factory = ClassEntity::new("Factory", "")
        .with_member(Member::Method(
            Method::new("create", "Factory")
                .with_result(Type::pointer("Factory"))
                .with_static(),
        ))
        .with_member(Member::Method(
            Method::new("count", "Factory")
                .with_result(int())
                .with_param(int())
                .with_param(int().with_default("1"))
                .with_param(int().with_default("2"))
                .with_const(),
        ))
        .with_member(Member::Method(
            Method::new("set", "Factory")
                .with_result(Type::void())
                .with_param(int())
                .with_param(int().with_default("0"))
                .overloaded(),
        ))
        .with_member(Member::Method(
            Method::new("set", "Factory")
                .with_result(Type::void())
                .with_param(Type::value("double"))
                .with_param(int().with_default("0"))
                .overloaded(),
        ))
        .with_member(Member::Method(
            Method::new("label", "Factory")
                .with_result(Type::reference("std::string").with_const())
                .with_const(),
        ))
        .with_member(Member::Method(
            Method::new("update", "Factory")
                .with_result(Type::void())
                .with_virtual(),
        ));
    let size = Function::new("factory_size", "", int())
        .with_param(Type::reference("Factory").with_const());

    DeclarationGraph::new()
        .with(Declaration::Class(factory))
        .with(Declaration::Function(size))
}

/// `math::Vec` with member, free and conversion operators
pub fn vector_graph() -> DeclarationGraph {
    let vec = "math::Vec";
    let operator = |symbol: &str, result: Type| Method::new(symbol, vec).with_result(result);

    let class = ClassEntity::new("Vec", "math")
        .with_member(constructor(vec, &[]))
        .with_member(Member::ClassOperator(
            operator("+", Type::value(vec)).with_param(Type::reference(vec).with_const()).with_const(),
        ))
        .with_member(Member::ClassOperator(
            operator("*", Type::value(vec)).with_param(Type::value("double")).with_const(),
        ))
        .with_member(Member::ClassOperator(operator("-", Type::value(vec)).with_const()))
        .with_member(Member::ClassOperator(
            operator("()", Type::value("double")).with_param(int()).with_const(),
        ))
        .with_member(Member::ClassOperator(
            operator("==", Type::value("bool")).with_param(Type::reference(vec).with_const()).with_const(),
        ))
        .with_member(Member::ConverterOperator(
            operator("operator double", Type::value("double")).with_const(),
        ))
        .with_member(Member::ConverterOperator(
            operator("operator const char*", Type::pointer("char").with_const()).with_const(),
        ))
        .with_member(Member::ConverterOperator(
            operator("operator Point", Type::value("geo::Point")).with_const(),
        ));

    let stream = Function::new("<<", "math", Type::reference("std::ostream"))
        .with_param(Type::reference("std::ostream"))
        .with_param(Type::reference(vec).with_const());
    let scale = Function::new("*", "math", Type::value(vec))
        .with_param(Type::value("double"))
        .with_param(Type::reference(vec).with_const());
    let unrelated = Function::new("+", "geo", Type::value("geo::Point"))
        .with_param(Type::value("geo::Point"))
        .with_param(Type::value("geo::Point"));

    DeclarationGraph::new()
        .with(Declaration::Class(class))
        .with(Declaration::Operator(stream))
        .with(Declaration::Operator(scale))
        .with(Declaration::Operator(unrelated))
}

/// `Base` with virtuals `f(int)`, `g()` and `h(int, int = 0, int = 0)`;
/// `Derived` redeclares `f(int)` and adds `g(double)`.
pub fn virtual_graph() -> DeclarationGraph {
    let base = ClassEntity::new("Base", "")
        .with_member(constructor("Base", &[]))
        .with_member(Member::Method(
            Method::new("f", "Base").with_result(Type::void()).with_param(int()).with_virtual(),
        ))
        .with_member(Member::Method(Method::new("g", "Base").with_result(Type::void()).with_virtual()))
        .with_member(Member::Method(
            Method::new("h", "Base")
                .with_result(int())
                .with_param(int())
                .with_param(int().with_default("0"))
                .with_param(int().with_default("0"))
                .with_virtual(),
        ))
        .with_member(Member::Method(
            Method::new("secret", "Base")
                .with_result(Type::void())
                .with_virtual()
                .with_visibility(Visibility::Private),
        ));
    let derived = ClassEntity::new("Derived", "")
        .with_base_level(&["Base"])
        .with_member(constructor("Derived", &[int().with_default("0")]))
        .with_member(Member::Method(
            Method::new("f", "Derived").with_result(Type::void()).with_param(int()).with_virtual(),
        ))
        .with_member(Member::Method(
            Method::new("g", "Derived")
                .with_result(Type::void())
                .with_param(Type::value("double"))
                .with_virtual()
                .overloaded(),
        ));

    DeclarationGraph::new()
        .with(Declaration::Class(base))
        .with(Declaration::Class(derived))
}

/// `Outer` holding a nested class and a nested enum
pub fn nested_graph() -> DeclarationGraph {
    let outer = ClassEntity::new("Outer", "ns")
        .with_member(constructor("ns::Outer", &[]))
        .with_member(Member::NestedClass(NestedClass::new("Inner", "ns::Outer")))
        .with_member(Member::NestedEnum(
            EnumDecl::new("Color", "ns::Outer").with_value("Red").with_value("Green"),
        ))
        .with_member(Member::Method(Method::new("run", "ns::Outer").with_result(Type::void())));
    let inner = ClassEntity::new("Inner", "ns::Outer")
        .with_member(constructor("ns::Outer::Inner", &[]))
        .with_member(Member::Variable(Variable::new("value", "ns::Outer::Inner", int())));

    DeclarationGraph::new()
        .with(Declaration::Class(outer))
        .with(Declaration::Class(inner))
}
