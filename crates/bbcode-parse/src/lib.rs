#![doc = include_str!("../README.md")]

mod tracing_macros;

mod span;
pub use span::Span;

mod head;
pub use head::{Head, HeadLexer};

mod options;
pub use options::{ParseOptions, RESERVED_TAGS, TagSet};

mod events;
pub use events::{Event, OpenTag, Params, Tag};

mod handler;
pub use handler::{EventCollector, Handler};

mod error;
pub use error::{ParseError, ParseErrorKind};

mod parser;
pub use parser::Parser;
