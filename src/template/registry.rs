//! Definition set: compiled definitions that can invoke each other by name

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use super::functions::register_functions;
use crate::error::GsxError;

/// A set of compiled definitions.
///
/// Definitions registered here can invoke one another by name at execution
/// time, so components parsed from separate sources can be combined into
/// one document. The set is owned by the caller and extended one
/// registration at a time.
#[derive(Debug)]
pub struct DefinitionSet {
    env: Environment<'static>,
    /// Generated source of each registered definition
    sources: BTreeMap<String, String>,
}

impl Default for DefinitionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionSet {
    /// Create an empty set with the `props` and `template` helpers registered
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Literal text must come out byte for byte, final newline included
        env.set_keep_trailing_newline(true);
        // Definition names have no extension; escape all output as HTML
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_functions(&mut env);
        Self {
            env,
            sources: BTreeMap::new(),
        }
    }

    /// Compile `source` and register it as definition `name`.
    ///
    /// An existing definition with the same name is replaced. When
    /// compilation fails the set is left unchanged.
    pub fn register(&mut self, name: &str, source: String) -> Result<(), minijinja::Error> {
        self.env
            .add_template_owned(name.to_string(), source.clone())?;
        self.sources.insert(name.to_string(), source);
        Ok(())
    }

    /// Render definition `name` with `data` as its context
    pub fn execute<S: Serialize>(&self, name: &str, data: S) -> Result<String, GsxError> {
        if !self.contains(name) {
            return Err(GsxError::not_found(name));
        }
        let definition = self
            .env
            .get_template(name)
            .map_err(|e| GsxError::render(name, e))?;
        definition.render(data).map_err(|e| GsxError::render(name, e))
    }

    /// Render a one-off template source that can invoke the registered
    /// definitions, without registering it
    pub fn render_str<S: Serialize>(&self, source: &str, data: S) -> Result<String, GsxError> {
        self.env
            .render_str(source, data)
            .map_err(|e| GsxError::render("<string>", e))
    }

    /// Check if a definition exists
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Get all definition names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(|s| s.as_str())
    }

    /// Generated source registered under `name`
    pub fn source(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
