//! Template engine binding for generated definitions
//!
//! Generated definitions are compiled with minijinja. Two helpers are
//! registered with every environment:
//!
//! - `props(key, value, ...)` folds alternating keys and values into a mapping
//! - `template(name, props?)` renders another registered definition
//!
//! # Example
//!
//! ```text
//! {# definition "Card" #}
//! <div class="card">{{ title }}</div>
//!
//! {# definition "Page", generated from <Card title="Hi" /> #}
//! {{ template("Card", props("title", "Hi")) }}
//! ```

mod functions;
mod registry;

pub use functions::{props, register_functions, template, MAX_NESTING};
pub use registry::DefinitionSet;
