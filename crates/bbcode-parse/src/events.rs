//! Event types for the BBCode parser.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::Span;

/// Parameters of a single tag occurrence.
///
/// `[b=foo]` yields `{"b": "foo"}` (the shorthand key is the tag name),
/// `[b key=val other="a b"]` yields one entry per pair. Keys are unique; a
/// later duplicate overwrites an earlier one.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Params<'src> {
    entries: BTreeMap<Cow<'src, str>, &'src str>,
}

impl<'src> Params<'src> {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<Cow<'src, str>>, value: &'src str) {
        self.entries.insert(key.into(), value);
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&'src str> {
        self.entries.get(key).copied()
    }

    /// Whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'src str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'src, K> FromIterator<(K, &'src str)> for Params<'src>
where
    K: Into<Cow<'src, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, &'src str)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// An opening tag token, as reported to [`Handler::start_tag`](crate::Handler::start_tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'src> {
    /// Tag name (case-folded unless the parser is case-sensitive).
    pub name: Cow<'src, str>,
    /// Parameters, `None` if the tag head had no `=` at all.
    pub params: Option<Params<'src>>,
    /// Span of the opening token, brackets included.
    pub span: Span,
    /// Whether the token ends with `/]`.
    pub self_closing: bool,
}

/// A resolved tag, as reported to [`Handler::end_tag`](crate::Handler::end_tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'src> {
    /// Tag name.
    pub name: Cow<'src, str>,
    /// Parameters, `None` if the tag head had no `=` at all.
    pub params: Option<Params<'src>>,
    /// Span from the opening bracket to the end of the closing token.
    pub span: Span,
    /// Span between the opening and the closing token, nested markup
    /// included. `None` for self-closing tags.
    pub content: Option<Span>,
}

impl<'src> Tag<'src> {
    /// Whether this tag was written as `[name/]`.
    pub fn is_self_closing(&self) -> bool {
        self.content.is_none()
    }

    /// Raw content text, nested markup included.
    pub fn content_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.content.map(|span| span.slice(source))
    }
}

/// Events emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    // Document boundaries
    /// Start of document.
    DocumentStart,
    /// End of document.
    DocumentEnd,

    // Tags
    /// An opening tag token (self-closing included).
    TagStart(OpenTag<'src>),
    /// A resolved tag.
    TagEnd(Tag<'src>),

    // Text
    /// A run of text outside of any tag.
    Characters {
        /// Span of the run.
        span: Span,
        /// The text of the run.
        text: &'src str,
    },
}
