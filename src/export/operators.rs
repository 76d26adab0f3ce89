// Tue Jan 15 2026 - Alex

use crate::declarations::{Function, Member, Method, Type};
use crate::directives::Directive;
use crate::export::{Binder, ExportContext, ExportError, Fragments, Section};
use crate::utils::StringUtils;
use once_cell::sync::Lazy;
use regex::Regex;

/// Operators the runtime can express natively through `self`
const SUPPORTED_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "&", "!", "~", "|", "<", ">", "==", "!=", "<=", ">=", "<<",
    ">>", "&&", "||", "+=", "-=", "*=", "/=", "%=", "^=", "&=", "|=", "<<=", ">>=",
];

/// Operators exposed as a method with a protocol name
const RENAMED_OPERATORS: &[(&str, &str)] = &[("()", "__call__")];

/// Conversion operators with a protocol name, keyed by result spelling.
/// Evaluated in order, first match wins.
static SPECIAL_CONVERTERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"^(const)?\s*double$", "__float__"),
        (r"^(const)?\s*float$", "__float__"),
        (r"^(const)?\s*int$", "__int__"),
        (r"^(const)?\s*long$", "__long__"),
        (r"^(const)?\s*char\s*\*?$", "__str__"),
        (r"^(const)?.*::basic_string<.*>\s*(\*|&)?$", "__str__"),
        (r"^(const)?\s*std::string\s*(\*|&)?$", "__str__"),
    ]
    .iter()
    .filter_map(|(pattern, name)| Regex::new(pattern).ok().map(|re| (re, *name)))
    .collect()
});

/// A member or free operator, seen uniformly
enum Operator<'a> {
    Member(&'a Method),
    Free(&'a Function),
}

impl<'a> Operator<'a> {
    fn symbol(&self) -> &'a str {
        match *self {
            Operator::Member(m) => &m.name,
            Operator::Free(f) => &f.name,
        }
    }

    fn parameters(&self) -> &'a [Type] {
        match *self {
            Operator::Member(m) => &m.parameters,
            Operator::Free(f) => &f.parameters,
        }
    }

    fn result_name(&self) -> String {
        match self {
            Operator::Member(m) => m.result.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
            Operator::Free(f) => f.result.name.clone(),
        }
    }

    fn pointer_declaration(&self) -> String {
        match self {
            Operator::Member(m) => m.pointer_to(&m.operator_full_name()),
            Operator::Free(f) => f.pointer_to(&f.operator_full_name()),
        }
    }

    fn is_unary(&self) -> bool {
        match self {
            Operator::Member(m) => m.parameters.is_empty(),
            Operator::Free(f) => f.parameters.len() == 1,
        }
    }
}

/// Maps member operators, free operators taking the class and conversion
/// operators onto the runtime's operator protocol.
pub struct OperatorMapper;

impl OperatorMapper {
    pub fn is_supported(symbol: &str) -> bool {
        SUPPORTED_OPERATORS.contains(&symbol)
    }

    pub fn protocol_name(symbol: &str) -> Option<&'static str> {
        RENAMED_OPERATORS
            .iter()
            .find(|(op, _)| *op == symbol)
            .map(|(_, name)| *name)
    }

    /// Method name for a conversion to `result`
    pub fn converter_name(result: &Type) -> String {
        let spelling = result.full_name();
        SPECIAL_CONVERTERS
            .iter()
            .find(|(re, _)| re.is_match(&spelling))
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| format!("to_{}", StringUtils::make_id(&result.name)))
    }

    fn operand(ctx: &ExportContext<'_>, class_name: &str, param: &Type) -> String {
        if param.name == class_name {
            format!("{}self", ctx.py())
        } else {
            format!("{}other< {} >()", ctx.py(), param.name)
        }
    }

    /// `operator<<(std::ostream&, const T&)` becomes `str(self)`
    fn stream_representation(ctx: &ExportContext<'_>, operator: &Operator<'_>) -> Option<String> {
        let first = operator.parameters().first()?;
        if operator.result_name().contains("ostream") && first.name.contains("ostream") {
            Some(format!(".def({}self_ns::str({}self))", ctx.py(), ctx.py()))
        } else {
            None
        }
    }

    fn bind_operator(
        ctx: &ExportContext<'_>,
        class_name: &str,
        operator: &Operator<'_>,
        directive: &Directive,
        out: &mut Fragments,
    ) {
        let symbol = operator.symbol();
        let py = ctx.py();

        let method_name = directive
            .rename
            .as_deref()
            .or_else(|| directive.wrapper.as_ref().map(|w| w.exported_name()))
            .or_else(|| Self::protocol_name(symbol));

        if let Some(name) = method_name {
            let pointer = match &directive.wrapper {
                Some(wrapper) => {
                    if let Some(code) = &wrapper.code {
                        out.add(Section::Declaration, code.clone());
                    }
                    format!("&{}", wrapper.full_name(ctx.helper_ns()))
                }
                None => operator.pointer_declaration(),
            };
            let policy = directive
                .policy
                .as_ref()
                .map(|p| p.def_argument(py))
                .unwrap_or_default();
            out.add(Section::Inside, format!(".def(\"{}\", {}{})", name, pointer, policy));
        } else if let Some(code) = Self::stream_representation(ctx, operator) {
            out.add(Section::Inside, code);
        } else if Self::is_supported(symbol) {
            if operator.is_unary() {
                out.add(Section::Inside, format!(".def( {}{}self )", symbol, py));
            } else {
                let (left, right) = match operator.parameters() {
                    [left, right] => (
                        Self::operand(ctx, class_name, left),
                        Self::operand(ctx, class_name, right),
                    ),
                    [right] => (format!("{}self", py), Self::operand(ctx, class_name, right)),
                    params => {
                        log::debug!("Skipping operator{} with {} operands", symbol, params.len());
                        return;
                    }
                };
                out.add(Section::Inside, format!(".def( {} {} {} )", left, symbol, right));
            }
        } else {
            log::debug!("No runtime equivalent for operator{} of {}", symbol, class_name);
        }
    }

    fn bind_converter(ctx: &ExportContext<'_>, converter: &Method, out: &mut Fragments) {
        let Some(result) = converter.result.as_ref() else {
            return;
        };
        let directive = ctx.info.operator(&result.full_name());
        if directive.exclude {
            log::debug!("Skipping excluded {}", converter.converter_full_name());
            return;
        }

        let name = directive
            .rename
            .clone()
            .unwrap_or_else(|| Self::converter_name(result));
        let pointer = converter.pointer_to(&converter.converter_full_name());
        let policy = directive
            .policy
            .as_ref()
            .map(|p| p.def_argument(ctx.py()))
            .unwrap_or_default();
        out.add(Section::Inside, format!(".def(\"{}\", {}{})", name, pointer, policy));
    }
}

impl Binder for OperatorMapper {
    fn name(&self) -> &'static str {
        "operators"
    }

    fn bind(&self, ctx: &ExportContext<'_>, out: &mut Fragments) -> Result<(), ExportError> {
        let class_name = ctx.class_name();

        let operators = ctx
            .graph
            .free_operators_for(&class_name)
            .into_iter()
            .map(Operator::Free)
            .chain(ctx.members.iter().filter_map(|m| match m {
                Member::ClassOperator(op) => Some(Operator::Member(op)),
                _ => None,
            }));

        for operator in operators {
            let directive = ctx.info.operator(operator.symbol());
            if directive.exclude {
                log::debug!("Skipping excluded operator{}", operator.symbol());
                continue;
            }
            Self::bind_operator(ctx, &class_name, &operator, directive, out);
        }

        for member in ctx.members {
            if let Member::ConverterOperator(converter) = member {
                Self::bind_converter(ctx, converter, out);
            }
        }

        Ok(())
    }
}
