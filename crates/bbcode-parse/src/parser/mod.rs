//! Push parser for BBCode.

#[allow(unused_imports)]
use crate::tracing_macros::{debug, trace};
use crate::{
    Event, EventCollector, Handler, Head, HeadLexer, OpenTag, ParseError, ParseErrorKind,
    ParseOptions, Span, Tag,
};

/// An open tag waiting for its closing token.
struct Frame<'src> {
    open: OpenTag<'src>,
    /// Offset right after the opening token.
    content_start: u32,
}

/// Push parser for BBCode documents.
///
/// The parser holds no state between calls: every [`parse`](Parser::parse)
/// starts from an empty tag stack at offset 0, so the same parser can be used
/// any number of times and always reports the same events for its input.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    input: &'src str,
    options: ParseOptions,
}

impl<'src> Parser<'src> {
    /// Create a new parser with default options.
    pub fn new(input: &'src str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Create a new parser with the given options.
    pub fn with_options(input: &'src str, options: ParseOptions) -> Self {
        Self { input, options }
    }

    /// The document being parsed.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// The options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the input, reporting to `handler`.
    ///
    /// On error no further callbacks are made; in particular
    /// [`Handler::end_document`] is not called.
    pub fn parse<H: Handler<'src> + ?Sized>(&self, handler: &mut H) -> Result<(), ParseError> {
        let input = self.input;
        let mut stack: Vec<Frame<'src>> = Vec::new();
        // Start of the pending character run. Only meaningful at the root.
        let mut text_start = 0;
        let mut pos = 0;

        handler.start_document(input);

        while let Some(offset) = input[pos..].find('[') {
            let open = pos + offset;
            let Some(len) = input[open + 1..].find(']') else {
                trace!(at = open, "no closing bracket left");
                break;
            };
            let close = open + 1 + len;
            let end = close + 1;
            let span = Span::from(open..end);
            pos = end;

            let Some(head) = self.lex_head(&input[open + 1..close]) else {
                trace!(?span, "not a tag head, keeping brackets as text");
                continue;
            };
            if !self.options.tags.contains(head.name()) {
                trace!(?span, name = head.name(), "unrecognized tag, keeping as text");
                continue;
            }

            match head {
                Head::Open {
                    name,
                    params,
                    self_closing,
                } => {
                    if stack.is_empty() {
                        flush(handler, input, text_start, open);
                    }
                    let open_tag = OpenTag {
                        name,
                        params,
                        span,
                        self_closing,
                    };
                    handler.start_tag(&open_tag);

                    if self_closing {
                        trace!(name = %open_tag.name, ?span, "self-closing tag");
                        handler.end_tag(&Tag {
                            name: open_tag.name,
                            params: open_tag.params,
                            span,
                            content: None,
                        });
                    } else {
                        debug!(name = %open_tag.name, depth = stack.len() + 1, "open tag");
                        stack.push(Frame {
                            open: open_tag,
                            content_start: span.end,
                        });
                    }
                }
                Head::Close { name } => {
                    let Some(frame) = stack.pop() else {
                        return Err(fail(
                            ParseErrorKind::UnopenedClosingTag {
                                name: name.into_owned(),
                            },
                            span,
                        ));
                    };
                    if frame.open.name != name {
                        return Err(fail(
                            ParseErrorKind::MismatchedClosingTag {
                                expected: frame.open.name.into_owned(),
                                found: name.into_owned(),
                                opened_at: frame.open.span,
                            },
                            span,
                        ));
                    }

                    debug!(name = %name, depth = stack.len(), "close tag");
                    handler.end_tag(&Tag {
                        name: frame.open.name,
                        params: frame.open.params,
                        span: frame.open.span.extend(span),
                        content: Some(Span::new(frame.content_start, span.start)),
                    });
                }
            }

            text_start = end;
        }

        if let Some(frame) = stack.pop() {
            return Err(fail(
                ParseErrorKind::UnclosedTag {
                    name: frame.open.name.into_owned(),
                },
                frame.open.span,
            ));
        }

        flush(handler, input, text_start, input.len());
        handler.end_document();
        Ok(())
    }

    /// Parse all events into a vector.
    pub fn parse_to_vec(&self) -> Result<Vec<Event<'src>>, ParseError> {
        let mut collector = EventCollector::new();
        self.parse(&mut collector)?;
        Ok(collector.into_events())
    }

    fn lex_head(&self, head: &'src str) -> Option<Head<'src>> {
        HeadLexer::new(head)
            .case_sensitive(self.options.case_sensitive)
            .lex()
    }
}

/// Report the pending run `[start, end)` if it is not empty.
fn flush<'src, H: Handler<'src> + ?Sized>(
    handler: &mut H,
    input: &'src str,
    start: usize,
    end: usize,
) {
    if start < end {
        handler.characters(Span::from(start..end), &input[start..end]);
    }
}

fn fail(kind: ParseErrorKind, span: Span) -> ParseError {
    let err = ParseError::new(kind, span);
    debug!(%err, "structural error");
    err
}
