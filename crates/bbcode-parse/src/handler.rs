//! The callback surface the parser reports to.

use crate::{Event, OpenTag, Span, Tag};

/// Receives notifications while the parser processes its input.
///
/// The parser is the only caller. Every method has a no-op default, so a
/// handler only implements what it needs. Spans are byte offsets into the
/// document passed to [`start_document`](Handler::start_document).
///
/// On a structural error the parser stops calling the handler and
/// [`end_document`](Handler::end_document) is never called.
pub trait Handler<'src> {
    /// Parsing has started. Called once, before anything else.
    fn start_document(&mut self, source: &'src str) {
        let _ = source;
    }

    /// Parsing has finished without error. Called once, last.
    fn end_document(&mut self) {}

    /// A recognized opening tag token.
    ///
    /// Called for self-closing tags too, immediately followed by
    /// [`end_tag`](Handler::end_tag) for the same tag.
    fn start_tag(&mut self, tag: &OpenTag<'src>) {
        let _ = tag;
    }

    /// A tag has been resolved: its closing token matched, or it was self-closing.
    fn end_tag(&mut self, tag: &Tag<'src>) {
        let _ = tag;
    }

    /// A maximal, non-empty run of text that is not enclosed by any open tag.
    fn characters(&mut self, span: Span, text: &'src str) {
        let _ = (span, text);
    }
}

impl<'src, H: Handler<'src> + ?Sized> Handler<'src> for &mut H {
    fn start_document(&mut self, source: &'src str) {
        (**self).start_document(source)
    }

    fn end_document(&mut self) {
        (**self).end_document()
    }

    fn start_tag(&mut self, tag: &OpenTag<'src>) {
        (**self).start_tag(tag)
    }

    fn end_tag(&mut self, tag: &Tag<'src>) {
        (**self).end_tag(tag)
    }

    fn characters(&mut self, span: Span, text: &'src str) {
        (**self).characters(span, text)
    }
}

/// A handler that records every callback as an [`Event`].
#[derive(Debug, Clone, Default)]
pub struct EventCollector<'src> {
    events: Vec<Event<'src>>,
}

impl<'src> EventCollector<'src> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[Event<'src>] {
        &self.events
    }

    /// Take the recorded events.
    pub fn into_events(self) -> Vec<Event<'src>> {
        self.events
    }
}

impl<'src> Handler<'src> for EventCollector<'src> {
    fn start_document(&mut self, _source: &'src str) {
        self.events.push(Event::DocumentStart);
    }

    fn end_document(&mut self) {
        self.events.push(Event::DocumentEnd);
    }

    fn start_tag(&mut self, tag: &OpenTag<'src>) {
        self.events.push(Event::TagStart(tag.clone()));
    }

    fn end_tag(&mut self, tag: &Tag<'src>) {
        self.events.push(Event::TagEnd(tag.clone()));
    }

    fn characters(&mut self, span: Span, text: &'src str) {
        self.events.push(Event::Characters { span, text });
    }
}
