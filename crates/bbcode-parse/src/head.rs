//! Lexer for tag heads: the text between `[` and the first following `]`.

use std::borrow::Cow;

use crate::Params;

/// A successfully lexed tag head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head<'src> {
    /// `[name]`, `[name=value]`, `[name key=value ...]`, optionally ending in `/`.
    Open {
        /// Tag name.
        name: Cow<'src, str>,
        /// Parameters, `None` if no `=` appeared.
        params: Option<Params<'src>>,
        /// Whether the head ends with `/`.
        self_closing: bool,
    },
    /// `[/name]`.
    Close {
        /// Tag name.
        name: Cow<'src, str>,
    },
}

impl<'src> Head<'src> {
    /// The tag name.
    pub fn name(&self) -> &str {
        match self {
            Head::Open { name, .. } | Head::Close { name } => name,
        }
    }
}

/// Lexes a single tag head.
///
/// Returns `None` from [`lex`](HeadLexer::lex) when the head does not form a
/// tag (empty name, pair without `=`, unterminated or stray quote, nested `[`).
/// The parser then treats the brackets as plain text.
#[derive(Clone)]
pub struct HeadLexer<'src> {
    /// The remaining head text.
    remaining: &'src str,
    /// Keep names and keys as written.
    case_sensitive: bool,
}

impl<'src> HeadLexer<'src> {
    /// Create a new lexer for the text between the brackets.
    pub fn new(head: &'src str) -> Self {
        Self {
            remaining: head,
            case_sensitive: false,
        }
    }

    /// Keep names and keys as written instead of folding them to lowercase.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Lex the head.
    pub fn lex(mut self) -> Option<Head<'src>> {
        if self.eat('/') {
            let name = self.name()?;
            self.skip_whitespace();
            return self.is_eof().then_some(Head::Close { name });
        }

        let self_closing = match self.remaining.strip_suffix('/') {
            Some(body) => {
                self.remaining = body;
                true
            }
            None => false,
        };

        let name = self.name()?;
        let mut params: Option<Params<'src>> = None;

        // shorthand: [name=value]
        if self.eat('=') {
            let value = self.value()?;
            params
                .get_or_insert_with(Params::new)
                .insert(name.clone(), value);
        }

        loop {
            let separated = self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            if !separated {
                return None;
            }
            let key = self.name()?;
            if !self.eat('=') {
                return None;
            }
            let value = self.value()?;
            params.get_or_insert_with(Params::new).insert(key, value);
        }

        Some(Head::Open {
            name,
            params,
            self_closing,
        })
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.remaining = &self.remaining[n..];
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance_by(c.len_utf8());
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning whether any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let len = self.take_len(char::is_whitespace);
        self.advance_by(len);
        len > 0
    }

    /// Byte length of the longest prefix whose chars satisfy `pred`.
    fn take_len(&self, pred: impl Fn(char) -> bool) -> usize {
        self.remaining
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.remaining.len(), |(i, _)| i)
    }

    /// A tag name or parameter key.
    fn name(&mut self) -> Option<Cow<'src, str>> {
        let len = self.take_len(is_name_char);
        if len == 0 {
            return None;
        }
        let name = &self.remaining[..len];
        self.advance_by(len);
        Some(self.fold(name))
    }

    /// A parameter value, quoted or not. Quotes are not part of the value.
    fn value(&mut self) -> Option<&'src str> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.advance_by(1);
                let end = self.remaining.find(quote)?;
                let value = &self.remaining[..end];
                self.advance_by(end + 1);
                Some(value)
            }
            _ => {
                let len = self.take_len(is_unquoted_value_char);
                let value = &self.remaining[..len];
                self.advance_by(len);
                Some(value)
            }
        }
    }

    fn fold(&self, name: &'src str) -> Cow<'src, str> {
        if self.case_sensitive || !name.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_ascii_lowercase())
        }
    }
}

/// Check if a character can be part of a tag name or parameter key.
fn is_name_char(c: char) -> bool {
    !matches!(c, '=' | '/' | '[' | ']' | '"' | '\'') && !c.is_whitespace()
}

/// Check if a character can be part of an unquoted parameter value.
fn is_unquoted_value_char(c: char) -> bool {
    !matches!(c, '[' | ']' | '"' | '\'') && !c.is_whitespace()
}
