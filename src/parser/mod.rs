//! Parser for component markup: tag scanning and attribute parsing

pub mod ast;
mod attributes;
pub mod lexer;
mod scanner;

pub use ast::*;
pub use attributes::parse_attributes;
pub use scanner::scan;
