//! Configuration for translation

use crate::codegen::Dialect;

/// Configuration options for translating component markup
#[derive(Debug, Clone, Default)]
pub struct TranslateConfig {
    /// Template syntax to generate
    pub dialect: Dialect,
}

impl TranslateConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output dialect
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}
