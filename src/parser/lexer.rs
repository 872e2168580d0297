//! Lexer for component attribute lists using logos

use logos::Logos;

use super::ast::Span;

/// Tokens of an attribute list.
///
/// Quoted and braced spans are single tokens, so nothing inside them can be
/// mistaken for a `key=` boundary. A bareword value is a run of adjacent
/// `Word` and `Symbol` tokens; the parser decides where it ends.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"[ \t\n\x0C\r]+")]
    Whitespace,

    #[token("=")]
    Equals,

    /// `"..."`; no escapes, the next `"` always closes
    #[regex(r#""[^"]*""#)]
    Quoted,

    /// `{...}`; braces do not nest
    #[regex(r"\{[^}]*\}")]
    Braced,

    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    /// Any other single character that may appear in a bareword
    #[regex(r#"[^ \t\n\x0C\r"{}=A-Za-z0-9_]"#)]
    Symbol,

    /// A `"` or `{` that is never closed, or a lone `}`
    #[regex(r#"["{}]"#)]
    Stray,
}

/// Lex an attribute list into tokens with spans.
///
/// Lexing never stops early: an unclosed `"` or `{` is a single `Stray`
/// token and the rest of the list is lexed as usual. Characters no token
/// accepts come back as `None`.
pub fn lex(input: &str) -> impl Iterator<Item = (Option<Token>, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.ok(), span))
}
