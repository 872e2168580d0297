//! Lint warnings for component markup.
//!
//! Warnings never stop translation. They point at markup that still
//! translates correctly but is probably not what the author meant, such as
//! an attribute value written without quotes.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parser::ast::Span;

/// A non-fatal issue found while parsing attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub message: String,
    /// 1-based line of the offending text
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// Byte range of the offending text in the parsed source
    pub span: Span,
}

impl LintWarning {
    pub fn new(message: impl Into<String>, span: Span, lines: &LineIndex) -> Self {
        let (line, column) = lines.position(span.start);
        Self {
            message: message.into(),
            line,
            column,
            span,
        }
    }

    /// Warning for a bareword attribute value
    pub fn unquoted_value(key: &str, span: Span, lines: &LineIndex) -> Self {
        Self::new(format!("unquoted value for attribute \"{}\"", key), span, lines)
    }

    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        // ariadne counts in characters, spans are in bytes
        let to_char = |offset: usize| source.get(..offset).map_or(offset, |s| s.chars().count());
        let span = to_char(self.span.start)..to_char(self.span.end);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, span))
                    .with_message("wrap this value in double quotes")
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Maps byte offsets in a source text to line and column numbers
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based `(line, column)` of a byte offset; the column counts characters
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_line() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(index.position(0), (1, 1));
        assert_eq!(index.position(2), (1, 3));
    }

    #[test]
    fn test_position_after_newline() {
        let index = LineIndex::new("abc\ndef\n\nx");
        assert_eq!(index.position(4), (2, 1));
        assert_eq!(index.position(6), (2, 3));
        assert_eq!(index.position(9), (4, 1));
    }

    #[test]
    fn test_position_counts_characters() {
        let index = LineIndex::new("héllo x");
        // "héllo " is 7 bytes but 6 characters
        assert_eq!(index.position(7), (1, 7));
    }

    #[test]
    fn test_position_at_end_of_input() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.position(3), (2, 1));
        assert_eq!(index.position(100), (2, 1));
    }

    #[test]
    fn test_unquoted_value_message() {
        let index = LineIndex::new("<Tag name=Go />");
        let warning = LintWarning::unquoted_value("name", 10..12, &index);
        assert_eq!(warning.message, "unquoted value for attribute \"name\"");
        assert_eq!((warning.line, warning.column), (1, 11));
        assert_eq!(
            warning.to_string(),
            "1:11: unquoted value for attribute \"name\""
        );
    }

    #[test]
    fn test_format_includes_message() {
        let source = "<Tag name=Go />";
        let index = LineIndex::new(source);
        let warning = LintWarning::unquoted_value("name", 10..12, &index);
        let report = warning.format(source, "tag.gsx");
        assert!(report.contains("unquoted value for attribute \"name\""));
        assert!(report.contains("tag.gsx"));
    }
}
