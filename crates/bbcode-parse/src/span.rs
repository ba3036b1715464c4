//! Byte ranges into the parsed document.

use std::ops::Range;

/// A half-open byte range `[start, end)` in the input.
///
/// The parser never copies text; everything it reports is a span into the
/// document it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// First byte (inclusive)
    pub start: u32,
    /// One past the last byte
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span ends before it starts");
        Self { start, end }
    }

    /// A span of `len` bytes starting at `start`.
    #[inline]
    pub fn at(start: u32, len: u32) -> Self {
        Self::new(start, start + len)
    }

    /// A zero-length span at `pos`.
    #[inline]
    pub fn empty(pos: u32) -> Self {
        Self::at(pos, 0)
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The smallest span covering both `self` and `other`.
    #[inline]
    pub fn extend(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The text this span covers in `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[Range::from(*self)]
    }
}

impl From<Range<u32>> for Span {
    fn from(range: Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start as u32, range.end as u32)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_ops() {
        let span = Span::at(3, 4);
        assert_eq!(span, Span::new(3, 7));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::empty(5).is_empty());
        assert_eq!(span.extend(Span::new(10, 12)), Span::new(3, 12));
        assert_eq!(Span::new(4, 9).slice("0123456789"), "45678");
        assert_eq!(Range::<usize>::from(span), 3..7);
    }
}
