//! Parser options.

use std::collections::HashSet;

/// Reserved tag names.
///
/// This is not a list of supported codes: what a tag means is up to the
/// [`Handler`](crate::Handler). It is the default vocabulary the parser acts on,
/// so that arbitrary bracketed text (`[foo]`, `[1]`, `[sic]`) stays plain text.
pub const RESERVED_TAGS: &[&str] = &[
    // commonly rendered
    "abbr", "align", "b", "caption", "center", "code", "color", "email", "heading", "font", "hr",
    "i", "indent", "label", "left", "li", "ol", "right", "s", "size", "small", "span", "style",
    "sub", "sup", "u", "ul", "url",
    // reserved
    "alert", "em", "fieldset", "h1", "h2", "h3", "h4", "icon", "img", "info", "kbd", "list",
    "media", "plain", "pre", "quote", "spoiler", "stop", "table", "tooltip", "td", "th", "tr",
    "warning",
];

/// The set of tag names the parser treats as markup.
///
/// A bracket token whose name is not in the set is not a tag: it is reported
/// as (part of) a character run, or as part of the enclosing tag's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagSet {
    /// The names in [`RESERVED_TAGS`].
    #[default]
    Reserved,
    /// Every syntactically valid name.
    Any,
    /// Only the given names.
    Only(HashSet<String>),
}

impl TagSet {
    /// Build a set from a list of names.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagSet::Only(names.into_iter().map(Into::into).collect())
    }

    /// Whether `name` is part of this set.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            TagSet::Reserved => RESERVED_TAGS.iter().any(|reserved| *reserved == name),
            TagSet::Any => true,
            TagSet::Only(names) => names.contains(name),
        }
    }
}

/// Options for BBCode parsing.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Tag names the parser acts on (default: [`TagSet::Reserved`])
    pub tags: TagSet,

    /// Keep tag names and parameter keys as written (default: false).
    /// When false both are folded to ASCII lowercase. Values are never folded.
    pub case_sensitive: bool,
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag vocabulary.
    pub fn tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Accept any syntactically valid tag name.
    pub fn any_tag(mut self) -> Self {
        self.tags = TagSet::Any;
        self
    }

    /// Compare tag names and parameter keys case-sensitively.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_set() {
        let tags = TagSet::default();
        assert!(tags.contains("b"));
        assert!(tags.contains("url"));
        assert!(tags.contains("warning"));
        assert!(!tags.contains("foo"));
        assert!(!tags.contains("B"));
    }

    #[test]
    fn test_only_set() {
        let tags = TagSet::only(["foo", "bar"]);
        assert!(tags.contains("foo"));
        assert!(!tags.contains("b"));
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new().any_tag().case_sensitive(true);
        assert_eq!(options.tags, TagSet::Any);
        assert!(options.case_sensitive);
        assert!(options.tags.contains("whatever"));
    }
}
