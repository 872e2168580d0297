//! Code generation: turns scanned segments into template source
//!
//! Literal segments are copied through untouched. Each component tag becomes
//! an invocation of the named definition, with its attributes folded into
//! one `props(...)` argument.

use crate::parser::ast::{AttributeValue, Attributes, Segment};

/// Target template syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Go `text/template` syntax: `{{ template "Card" (props "title" .title) }}`
    #[default]
    Go,
    /// Jinja syntax as compiled by the bundled engine:
    /// `{{ template("Card", props("title", title)) }}`
    Jinja,
}

impl Dialect {
    /// Prefix that turns an identifier into a lookup on the current data
    pub fn field_marker(self) -> &'static str {
        match self {
            Dialect::Go => ".",
            Dialect::Jinja => "",
        }
    }

    /// Render a single attribute expression
    pub fn expr(self, expr: &Expr) -> String {
        match expr {
            Expr::Str(quoted) => quoted.clone(),
            Expr::Number(digits) => digits.clone(),
            Expr::Field(path) => format!("{}{}", self.field_marker(), path),
        }
    }

    /// Invocation of component `name`, with optional `(key, expression)` props
    pub fn invocation(self, name: &str, props: &[(&str, Expr)]) -> String {
        match self {
            Dialect::Go if props.is_empty() => format!("{{{{ template \"{}\" }}}}", name),
            Dialect::Go => {
                let args = props
                    .iter()
                    .map(|(key, expr)| format!("\"{}\" {}", key, self.expr(expr)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{{{{ template \"{}\" (props {}) }}}}", name, args)
            }
            Dialect::Jinja if props.is_empty() => format!("{{{{ template(\"{}\") }}}}", name),
            Dialect::Jinja => {
                let args = props
                    .iter()
                    .map(|(key, expr)| format!("\"{}\", {}", key, self.expr(expr)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{{ template(\"{}\", props({})) }}}}", name, args)
            }
        }
    }

    /// Wrap a generated body so it is registered as definition `name`.
    ///
    /// In Jinja the definition is the template registered under `name`, so
    /// the body is returned unchanged.
    pub fn wrap_definition(self, name: &str, body: &str) -> String {
        match self {
            Dialect::Go => format!("{{{{define \"{}\"}}}}{}{{{{end}}}}", name, body),
            Dialect::Jinja => body.to_string(),
        }
    }
}

/// Template expression for one attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// String literal, including its double quotes
    Str(String),
    /// Unsigned integer literal
    Number(String),
    /// Lookup on the current data, without the dialect's field marker
    Field(String),
}

impl Expr {
    pub fn from_value(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Quoted(quoted) => Expr::Str(quoted.clone()),
            AttributeValue::Braced(inner) if is_numeric(inner) => Expr::Number(inner.clone()),
            AttributeValue::Braced(inner) => Expr::Field(inner.clone()),
            AttributeValue::Bare(bare) => Expr::Str(format!("\"{}\"", bare)),
        }
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Reassemble the source with every component replaced by its invocation.
///
/// `attributes` holds one entry per component segment, in segment order.
pub fn assemble(
    source: &str,
    segments: &[Segment],
    attributes: &[Attributes],
    dialect: Dialect,
) -> String {
    let mut out = String::with_capacity(source.len());
    let mut tag_attributes = attributes.iter();

    for segment in segments {
        match segment {
            Segment::Literal(span) => out.push_str(&source[span.clone()]),
            Segment::Component(tag) => {
                let props: Vec<(&str, Expr)> = tag_attributes
                    .next()
                    .into_iter()
                    .flatten()
                    .map(|attr| (attr.key(), Expr::from_value(&attr.value.node)))
                    .collect();
                out.push_str(&dialect.invocation(tag.name(), &props));
            }
        }
    }

    out
}

/// Generate the complete definition `name` for the scanned source
pub fn generate(
    name: &str,
    source: &str,
    segments: &[Segment],
    attributes: &[Attributes],
    dialect: Dialect,
) -> String {
    dialect.wrap_definition(name, &assemble(source, segments, attributes, dialect))
}
