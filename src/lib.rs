//! GSX - component tags for text templates
//!
//! This library rewrites self-closing, capitalized component tags such as
//! `<Card title="Hi" />` into template invocations, leaving all other text
//! untouched, and compiles the result into a set of named definitions.
//!
//! # Example
//!
//! ```rust
//! use gsx::translate;
//!
//! let translation = translate("Page", r#"<h1>Hi</h1><Card title="Go" />"#);
//! assert_eq!(
//!     translation.output,
//!     r#"{{define "Page"}}<h1>Hi</h1>{{ template "Card" (props "title" "Go") }}{{end}}"#
//! );
//! assert!(translation.warnings.is_empty());
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod lint;
pub mod parser;
pub mod template;

pub use codegen::{Dialect, Expr};
pub use config::TranslateConfig;
pub use error::GsxError;
pub use lint::LintWarning;
pub use parser::{scan, Segment};
pub use template::DefinitionSet;

use lint::LineIndex;
use parser::Attributes;

/// Result of translating one source into a definition
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Definition name
    pub name: String,
    /// Dialect the text was generated in
    pub dialect: Dialect,
    /// Rewritten source, before wrapping
    pub body: String,
    /// Complete definition text
    pub output: String,
    /// Warnings in source order
    pub warnings: Vec<LintWarning>,
}

/// Translate `source` into Go template definition `name`
///
/// # Example
///
/// ```rust
/// use gsx::translate;
///
/// let translation = translate("Tag", "<Tag name=Go />");
/// assert_eq!(translation.body, r#"{{ template "Tag" (props "name" "Go") }}"#);
/// assert_eq!(
///     translation.warnings[0].message,
///     r#"unquoted value for attribute "name""#
/// );
/// ```
pub fn translate(name: &str, source: &str) -> Translation {
    translate_with_config(name, source, &TranslateConfig::default())
}

/// Translate `source` into definition `name` with custom configuration
///
/// # Example
///
/// ```rust
/// use gsx::{translate_with_config, Dialect, TranslateConfig};
///
/// let config = TranslateConfig::new().with_dialect(Dialect::Jinja);
/// let translation = translate_with_config("Tag", "<Tag name={ value } />", &config);
/// assert_eq!(translation.output, r#"{{ template("Tag", props("name", value)) }}"#);
/// ```
pub fn translate_with_config(name: &str, source: &str, config: &TranslateConfig) -> Translation {
    let segments = scan(source);
    let lines = LineIndex::new(source);

    let mut warnings = Vec::new();
    let attributes: Vec<Attributes> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Component(tag) => Some(tag),
            Segment::Literal(_) => None,
        })
        .map(|tag| {
            let (attrs, tag_warnings) =
                parser::parse_attributes(tag.attribute_text(source), tag.attributes.start, &lines);
            warnings.extend(tag_warnings);
            attrs
        })
        .collect();

    let body = codegen::assemble(source, &segments, &attributes, config.dialect);
    let output = config.dialect.wrap_definition(name, &body);

    Translation {
        name: name.to_string(),
        dialect: config.dialect,
        body,
        output,
        warnings,
    }
}

/// Parse `source` into a fresh definition set holding definition `name`
///
/// The definition is the template registered under `name`; see [`parse_into`].
///
/// # Example
///
/// ```rust
/// use gsx::parse;
///
/// let (definitions, warnings) = parse("Greeting", "Hello {{ name }}!").unwrap();
/// assert!(warnings.is_empty());
/// let out = definitions.execute("Greeting", minijinja::context! { name => "Go" }).unwrap();
/// assert_eq!(out, "Hello Go!");
/// ```
pub fn parse(name: &str, source: &str) -> Result<(DefinitionSet, Vec<LintWarning>), GsxError> {
    let mut definitions = DefinitionSet::new();
    let warnings = parse_into(name, source, &mut definitions)?;
    Ok((definitions, warnings))
}

/// Parse `source` and add it to an existing definition set as `name`
///
/// The source is generated in the Jinja dialect, which has no definition
/// wrapper: the definition is the template registered under `name`.
///
/// Nothing is registered when the generated text fails to compile; the
/// returned error carries the warnings collected before the failure.
pub fn parse_into(
    name: &str,
    source: &str,
    definitions: &mut DefinitionSet,
) -> Result<Vec<LintWarning>, GsxError> {
    let config = TranslateConfig::new().with_dialect(Dialect::Jinja);
    let translation = translate_with_config(name, source, &config);

    match definitions.register(name, translation.output) {
        Ok(()) => Ok(translation.warnings),
        Err(source) => Err(GsxError::Compile {
            name: name.to_string(),
            warnings: translation.warnings,
            source,
        }),
    }
}
