//! Error types for compiling and executing definitions

use thiserror::Error;

use crate::lint::LintWarning;

#[derive(Debug, Error)]
pub enum GsxError {
    /// The generated source was rejected by the template engine
    #[error("failed to parse GSX definition '{name}': {source}")]
    Compile {
        name: String,
        /// Warnings collected before compilation failed
        warnings: Vec<LintWarning>,
        #[source]
        source: minijinja::Error,
    },

    /// No definition registered under this name
    #[error("definition not found: {name}")]
    NotFound { name: String },

    /// Executing a definition failed
    #[error("failed to render '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

impl GsxError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn render(name: impl Into<String>, source: minijinja::Error) -> Self {
        Self::Render {
            name: name.into(),
            source,
        }
    }

    /// Warnings that were collected before the error, if any
    pub fn warnings(&self) -> &[LintWarning] {
        match self {
            Self::Compile { warnings, .. } => warnings,
            _ => &[],
        }
    }
}
