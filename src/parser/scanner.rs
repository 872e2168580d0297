//! Tag scanner: splits raw input into literal text and component tags

use super::ast::{ComponentTag, Segment, Span, Spanned};

/// Split `input` into alternating literal and component segments.
///
/// The result always starts and ends with a literal and has the shape
/// `Literal (Component Literal)*`. Literals between adjacent tags are empty
/// rather than omitted.
///
/// A component tag is `<`, an ASCII uppercase letter, any ASCII
/// alphanumerics, then everything up to the next `>`. Tags are matched
/// leftmost first and never overlap; a tag that is never closed stays literal.
pub fn scan(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find('<') {
        let open = cursor + found;
        match match_tag(input, open) {
            TagMatch::Tag(tag) => {
                segments.push(Segment::Literal(literal_start..open));
                cursor = tag.span.end;
                literal_start = cursor;
                segments.push(Segment::Component(tag));
            }
            TagMatch::NotATag => cursor = open + 1,
            // No `>` anywhere after this point, so nothing later can match either
            TagMatch::Unterminated => break,
        }
    }

    segments.push(Segment::Literal(literal_start..input.len()));
    segments
}

enum TagMatch {
    Tag(ComponentTag),
    NotATag,
    Unterminated,
}

/// Try to match a component tag whose `<` sits at byte `open`
fn match_tag(input: &str, open: usize) -> TagMatch {
    let bytes = input.as_bytes();
    let name_start = open + 1;

    if !bytes.get(name_start).is_some_and(u8::is_ascii_uppercase) {
        return TagMatch::NotATag;
    }

    let name_end = name_start
        + 1
        + bytes[name_start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();

    let Some(close) = input[name_end..].find('>').map(|i| name_end + i) else {
        return TagMatch::Unterminated;
    };

    TagMatch::Tag(ComponentTag {
        name: Spanned::new(input[name_start..name_end].to_string(), name_start..name_end),
        attributes: attribute_span(input, name_end..close),
        span: open..close + 1,
    })
}

/// Narrow the text between the tag name and `>` down to the attribute list:
/// surrounding whitespace and one self-closing `/` are excluded.
fn attribute_span(input: &str, region: Span) -> Span {
    let text = &input[region.clone()];
    let start = region.start + (text.len() - text.trim_start_matches(is_space).len());

    let trimmed = input[start..region.end].trim_end_matches(is_space);
    let attributes = match trimmed.strip_suffix('/') {
        Some(without_slash) => without_slash.trim_end_matches(is_space),
        None => trimmed,
    };

    start..start + attributes.len()
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}
