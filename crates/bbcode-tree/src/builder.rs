//! Tree builder from parser callbacks.

use std::collections::BTreeMap;

use bbcode_parse::{Handler, OpenTag, Params, Span, Tag};

use crate::node::{Document, Element, Node, Text};

/// Builder that constructs a [`Document`] from parser callbacks.
///
/// The parser only reports text outside of tags as character runs; text
/// inside a tag is part of its content span. The builder recovers it with a
/// cursor that follows the last token seen, appending whatever lies between
/// the cursor and the next token to the innermost open element.
pub struct TreeBuilder<'src> {
    source: &'src str,
    stack: Vec<Element>,
    nodes: Vec<Node>,
    /// Offset right after the last tag token seen.
    cursor: u32,
}

impl<'src> TreeBuilder<'src> {
    /// Create a new tree builder.
    pub fn new() -> Self {
        Self {
            source: "",
            stack: Vec::new(),
            nodes: Vec::new(),
            cursor: 0,
        }
    }

    /// Finish building and return the document.
    ///
    /// Elements still open, which only happens when the parse failed, are
    /// closed at the end of the input.
    pub fn finish(mut self) -> Document {
        while let Some(el) = self.stack.pop() {
            self.push_node(Node::Element(el));
        }
        Document { nodes: self.nodes }
    }

    /// Append the text between the cursor and `until` to the innermost open element.
    fn flush_text(&mut self, until: u32) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if self.cursor < until {
            let span = Span::new(self.cursor, until);
            parent.children.push(Node::Text(Text {
                text: span.slice(self.source).to_string(),
                span: Some(span),
            }));
        }
    }

    /// Push a node to the current context.
    fn push_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.nodes.push(node),
        }
    }
}

impl Default for TreeBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Handler<'src> for TreeBuilder<'src> {
    fn start_document(&mut self, source: &'src str) {
        self.source = source;
        self.cursor = 0;
    }

    fn start_tag(&mut self, tag: &OpenTag<'src>) {
        // self-closing tags are complete in end_tag
        if tag.self_closing {
            return;
        }
        self.flush_text(tag.span.start);
        self.stack.push(Element {
            name: tag.name.to_string(),
            params: owned_params(tag.params.as_ref()),
            children: Vec::new(),
            span: Some(tag.span),
            self_closing: false,
        });
        self.cursor = tag.span.end;
    }

    fn end_tag(&mut self, tag: &Tag<'src>) {
        match tag.content {
            None => {
                self.flush_text(tag.span.start);
                self.push_node(Node::Element(Element {
                    name: tag.name.to_string(),
                    params: owned_params(tag.params.as_ref()),
                    children: Vec::new(),
                    span: Some(tag.span),
                    self_closing: true,
                }));
            }
            Some(content) => {
                self.flush_text(content.end);
                if let Some(mut el) = self.stack.pop() {
                    el.span = Some(tag.span);
                    self.push_node(Node::Element(el));
                }
            }
        }
        self.cursor = tag.span.end;
    }

    fn characters(&mut self, span: Span, text: &'src str) {
        self.push_node(Node::Text(Text {
            text: text.to_string(),
            span: Some(span),
        }));
    }
}

fn owned_params(params: Option<&Params<'_>>) -> Option<BTreeMap<String, String>> {
    params.map(|p| {
        p.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    })
}
