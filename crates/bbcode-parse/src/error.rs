//! Structural errors.

use std::fmt;

use crate::Span;

/// The cause of a structural error.
///
/// All causes are fatal: the input is not well-formed BBCode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended while a tag was still open.
    UnclosedTag {
        /// Name of the innermost open tag.
        name: String,
    },
    /// A closing tag appeared while no tag was open.
    UnopenedClosingTag {
        /// Name of the closing tag.
        name: String,
    },
    /// A closing tag does not match the innermost open tag.
    MismatchedClosingTag {
        /// Name of the innermost open tag.
        expected: String,
        /// Name of the closing tag.
        found: String,
        /// Span of the opening token of the innermost open tag.
        opened_at: Span,
    },
}

/// A structural error with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Span of the offending token. For [`ParseErrorKind::UnclosedTag`] this
    /// is the opening token of the tag left open.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Name of the tag the error is about.
    pub fn tag_name(&self) -> &str {
        match &self.kind {
            ParseErrorKind::UnclosedTag { name } => name,
            ParseErrorKind::UnopenedClosingTag { name } => name,
            ParseErrorKind::MismatchedClosingTag { found, .. } => found,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnclosedTag { name } => write!(f, "unclosed tag '{}'", name),
            ParseErrorKind::UnopenedClosingTag { name } => {
                write!(f, "closing tag '{}' without opening tag", name)
            }
            ParseErrorKind::MismatchedClosingTag {
                expected, found, ..
            } => write!(
                f,
                "closing tag '{}' does not match opening tag '{}'",
                found, expected
            ),
        }?;
        write!(f, " at offset {}", self.span.start)
    }
}

impl std::error::Error for ParseError {}
