#![doc = include_str!("../README.md")]
//! Document tree representation for BBCode markup.

mod builder;
mod diagnostic;
mod node;

pub use bbcode_parse::{ParseError, ParseErrorKind, ParseOptions, Span, TagSet};
pub use builder::TreeBuilder;
pub use diagnostic::Diagnostic;
pub use node::{Document, Element, Elements, Node, Text};

/// Parse a BBCode document into a tree, using the default options.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    Document::parse(source)
}

#[cfg(test)]
mod tests;
