//! Diagnostic rendering for structural errors.

use ariadne::{Color, Label, Report, ReportKind, Source};
use bbcode_parse::{ParseError, ParseErrorKind};

/// Human-readable reports for parser errors.
pub trait Diagnostic {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    fn render(&self, filename: &str, source: &str) -> String;

    /// Write the error report to a writer.
    fn write_report<W: std::io::Write>(
        &self,
        filename: &str,
        source: &str,
        writer: W,
    ) -> std::io::Result<()>;
}

impl Diagnostic for ParseError {
    fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        if self.write_report(filename, source, &mut output).is_err() {
            return self.to_string();
        }
        String::from_utf8(output).unwrap_or_else(|_| self.to_string())
    }

    fn write_report<W: std::io::Write>(
        &self,
        filename: &str,
        source: &str,
        writer: W,
    ) -> std::io::Result<()> {
        build_report(self, filename)
            .finish()
            .write((filename, Source::from(source)), writer)
    }
}

fn build_report<'a>(
    err: &ParseError,
    filename: &'a str,
) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
    let range: std::ops::Range<usize> = err.span.into();

    match &err.kind {
        ParseErrorKind::UnclosedTag { name } => {
            Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message(format!("unclosed tag '{}'", name))
                .with_label(
                    Label::new((filename, range))
                        .with_message("opened here, never closed")
                        .with_color(Color::Red),
                )
                .with_help(format!("add a closing '[/{}]'", name))
        }

        ParseErrorKind::UnopenedClosingTag { name } => {
            Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message(format!("closing tag '{}' without opening tag", name))
                .with_label(
                    Label::new((filename, range))
                        .with_message("nothing to close here")
                        .with_color(Color::Red),
                )
                .with_help(format!(
                    "remove it, or open the tag with '[{}]' before it",
                    name
                ))
        }

        ParseErrorKind::MismatchedClosingTag {
            expected,
            found,
            opened_at,
        } => {
            let opened_range: std::ops::Range<usize> = (*opened_at).into();
            Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message(format!(
                    "closing tag '{}' does not match opening tag '{}'",
                    found, expected
                ))
                .with_label(
                    Label::new((filename, opened_range))
                        .with_message(format!("'{}' opened here", expected))
                        .with_color(Color::Blue),
                )
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("expected '[/{}]'", expected))
                        .with_color(Color::Red),
                )
                .with_help("tags must be closed in the reverse order they were opened")
        }
    }
}
