//! Attribute parser for component tags

use super::ast::{Attribute, AttributeValue, Attributes, Span, Spanned};
use super::lexer::{lex, Token};
use crate::lint::{LineIndex, LintWarning};

/// Parse a raw attribute list into attributes and warnings.
///
/// `base` is the byte offset of `raw` within the source that `lines`
/// indexes, so every span and warning position refers to the full source.
///
/// Each `key=value` pair is classified by the surface syntax of its value:
/// quoted, braced, or bareword (which also yields an "unquoted value"
/// warning). Keys without a value are skipped silently. When a key repeats,
/// the last value wins.
pub fn parse_attributes(
    raw: &str,
    base: usize,
    lines: &LineIndex,
) -> (Attributes, Vec<LintWarning>) {
    let tokens: Vec<(Option<Token>, Span)> = lex(raw)
        .map(|(tok, span)| (tok, span.start + base..span.end + base))
        .collect();

    let mut attributes = Attributes::new();
    let mut warnings = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let is_key = matches!(tokens[i].0, Some(Token::Word))
            && matches!(tokens.get(i + 1), Some((Some(Token::Equals), _)));
        if !is_key {
            i += 1;
            continue;
        }

        let key_span = tokens[i].1.clone();
        let key = slice(raw, base, &key_span).to_string();
        let value_at = i + 2;

        let parsed = parse_value(&tokens[value_at..], raw, base);
        let Some((value, value_span, consumed)) = parsed else {
            // `key=` followed by nothing usable; rescan from the token after `=`
            i = value_at;
            continue;
        };

        if matches!(value, AttributeValue::Bare(_)) {
            warnings.push(LintWarning::unquoted_value(&key, value_span.clone(), lines));
        }

        attributes.insert(Attribute {
            key: Spanned::new(key, key_span),
            value: Spanned::new(value, value_span),
        });
        i = value_at + consumed;
    }

    (attributes, warnings)
}

/// Parse the value following `key=`.
///
/// Returns the value, its span, and how many tokens it used.
fn parse_value(
    tokens: &[(Option<Token>, Span)],
    raw: &str,
    base: usize,
) -> Option<(AttributeValue, Span, usize)> {
    let text = |span: &Span| slice(raw, base, span);
    let (first, first_span) = tokens.first()?;

    match first {
        Some(Token::Quoted) => Some((
            AttributeValue::Quoted(text(first_span).to_string()),
            first_span.clone(),
            1,
        )),
        Some(Token::Braced) => {
            let braced = text(first_span);
            let inner = braced[1..braced.len() - 1].trim();
            Some((
                AttributeValue::Braced(inner.to_string()),
                first_span.clone(),
                1,
            ))
        }
        Some(Token::Word | Token::Symbol) => {
            let count = tokens
                .iter()
                .take_while(|(tok, span)| is_bareword_part(*tok, text(span)))
                .count();
            if count == 0 {
                return None;
            }
            let span = first_span.start..tokens[count - 1].1.end;
            let bare = tokens[..count]
                .iter()
                .map(|(_, span)| text(span))
                .collect::<String>();
            Some((AttributeValue::Bare(bare), span, count))
        }
        _ => None,
    }
}

/// Text of a source-relative span within `raw`, which starts at `base`
fn slice<'a>(raw: &'a str, base: usize, span: &Span) -> &'a str {
    &raw[span.start - base..span.end - base]
}

/// Whether a token can continue a bareword value
fn is_bareword_part(token: Option<Token>, text: &str) -> bool {
    match token {
        Some(Token::Word) => true,
        Some(Token::Symbol) => !matches!(text, "<" | ">" | "`"),
        _ => false,
    }
}
