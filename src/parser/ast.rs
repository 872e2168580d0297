//! Syntax types produced by the tag scanner and the attribute parser

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Syntax node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// One piece of the scanned input.
///
/// Segments come out of [`scan`](super::scan) in source order and cover the
/// input exactly once, so joining the source slices of all segments gives
/// back the original text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied to the output as-is (may be empty)
    Literal(Span),
    /// A self-closing component tag such as `<Card title="x" />`
    Component(ComponentTag),
}

impl Segment {
    /// Byte range this segment occupies in the source
    pub fn span(&self) -> Span {
        match self {
            Segment::Literal(span) => span.clone(),
            Segment::Component(tag) => tag.span.clone(),
        }
    }

    /// Source text covered by this segment
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span()]
    }
}

/// A component tag found by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTag {
    /// Tag name, always starting with an ASCII uppercase letter
    pub name: Spanned<String>,
    /// Raw attribute list, without the trailing `/` and surrounding whitespace
    pub attributes: Span,
    /// Whole tag from `<` through `>`
    pub span: Span,
}

impl ComponentTag {
    pub fn name(&self) -> &str {
        &self.name.node
    }

    /// Raw attribute text of this tag
    pub fn attribute_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.attributes.clone()]
    }
}

/// Surface syntax of an attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `"..."`, stored with its quotes
    Quoted(String),
    /// `{ ... }`, stored as the trimmed inner text
    Braced(String),
    /// Anything else; stored as written
    Bare(String),
}

/// A parsed `key=value` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: Spanned<String>,
    pub value: Spanned<AttributeValue>,
}

impl Attribute {
    pub fn key(&self) -> &str {
        &self.key.node
    }
}

/// Attributes of one tag, keyed by name.
///
/// Setting a key that is already present replaces its value but keeps the
/// position where the key was first seen, so iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing an earlier one with the same key
    pub fn insert(&mut self, attribute: Attribute) {
        match self.entries.iter_mut().find(|a| a.key() == attribute.key()) {
            Some(existing) => *existing = attribute,
            None => self.entries.push(attribute),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.entries.iter().find(|a| a.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
