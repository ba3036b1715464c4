//! Node types for BBCode documents.
//!
//! A document is a flat list of nodes. A node is either text or an element;
//! elements own their children:
//! - `plain` is `Text { text: "plain" }`
//! - `[b]x[/b]` is `Element { name: "b", children: [Text("x")] }`
//! - `[hr=2/]` is `Element { name: "hr", params: {"hr": "2"}, self_closing: true }`

use std::collections::BTreeMap;

use bbcode_parse::{ParseError, ParseOptions, Parser, Span};

use crate::TreeBuilder;

/// A parsed BBCode document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Top-level nodes, in source order.
    pub nodes: Vec<Node>,
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A run of text.
    Text(Text),
    /// A tag and its content.
    Element(Element),
}

/// A run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text content.
    pub text: String,
    /// Source span (None if programmatically constructed).
    pub span: Option<Span>,
}

/// A tag and its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Parameters, `None` if the tag had none.
    pub params: Option<BTreeMap<String, String>>,
    /// Child nodes.
    pub children: Vec<Node>,
    /// Source span from the opening bracket to the end of the closing token.
    pub span: Option<Span>,
    /// Whether the tag was written as `[name/]`.
    pub self_closing: bool,
}

impl Document {
    /// Parse a document with the default options.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Self::parse_with(source, ParseOptions::default())
    }

    /// Parse a document with the given options.
    pub fn parse_with(source: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let mut builder = TreeBuilder::new();
        Parser::with_options(source, options).parse(&mut builder)?;
        Ok(builder.finish())
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The document text with all markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_text(&mut out);
        }
        out
    }

    /// All elements, depth-first, in source order.
    pub fn elements(&self) -> Elements<'_> {
        Elements::new(&self.nodes)
    }

    /// The first element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text {
            text: text.into(),
            span: None,
        })
    }

    /// Get as text, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.text),
            Node::Element(_) => None,
        }
    }

    /// Get as element, if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Source span of this node.
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Text(text) => text.span,
            Node::Element(el) => el.span,
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(el) => {
                for child in &el.children {
                    child.write_text(out);
                }
            }
        }
    }
}

impl Element {
    /// Create an element with no parameters and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            params: None,
            children: Vec::new(),
            span: None,
            self_closing: false,
        }
    }

    /// Add a parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Mark as self-closing.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Get a parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key).map(String::as_str)
    }

    /// The `[name=value]` shorthand value: the parameter keyed by the tag name.
    pub fn shorthand(&self) -> Option<&str> {
        self.param(&self.name)
    }

    /// Text content with nested markup removed.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Depth-first iterator over the elements of a document.
pub struct Elements<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Elements<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(Node::Element(el)) => {
                    self.stack.push(el.children.iter());
                    return Some(el);
                }
                Some(Node::Text(_)) => continue,
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
