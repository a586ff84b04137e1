//! Validation report
//!
//! The validator produces an ordered list of report lines; presentation
//! (markers, indentation, output stream) is applied separately so the rules
//! can be tested without capturing console output.

use std::fmt;
use std::io::{self, Write};

/// Kind of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Section title, preceded by a blank line when rendered
    Heading,
    /// Plain detail line
    Info,
    /// Check passed
    Success,
    /// Problem that does not affect validity
    Warning,
    /// Check failed
    Error,
    /// Overall failing verdict, marked like an error but written to stdout
    Failure,
}

impl Severity {
    /// Console marker for this severity
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Heading | Severity::Info => "",
            Severity::Success => "✓ ",
            Severity::Warning => "⚠ ",
            Severity::Error | Severity::Failure => "✗ ",
        }
    }

    /// Stream the line belongs on
    pub fn stream(&self) -> Stream {
        match self {
            Severity::Warning | Severity::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// Console stream a rendered line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One line of a validation report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub severity: Severity,
    /// Nesting depth, two spaces per level when rendered
    pub indent: usize,
    pub message: String,
}

impl ReportLine {
    pub fn new(severity: Severity, indent: usize, message: impl Into<String>) -> Self {
        Self {
            severity,
            indent,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            "  ".repeat(self.indent),
            self.severity.marker(),
            self.message
        )
    }
}

/// Result of validating a registry document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub lines: Vec<ReportLine>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// Start an empty report that is valid until an error is recorded
    pub fn new() -> Self {
        Self {
            is_valid: true,
            lines: Vec::new(),
        }
    }

    pub fn heading(&mut self, message: impl Into<String>) {
        self.push(Severity::Heading, 0, message);
    }

    pub fn info(&mut self, indent: usize, message: impl Into<String>) {
        self.push(Severity::Info, indent, message);
    }

    pub fn success(&mut self, indent: usize, message: impl Into<String>) {
        self.push(Severity::Success, indent, message);
    }

    pub fn warning(&mut self, indent: usize, message: impl Into<String>) {
        self.push(Severity::Warning, indent, message);
    }

    /// Record a failed check; the report becomes invalid
    pub fn error(&mut self, indent: usize, message: impl Into<String>) {
        self.is_valid = false;
        self.push(Severity::Error, indent, message);
    }

    /// Record the failing verdict line; the report becomes invalid
    pub fn failure_verdict(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.push(Severity::Failure, 0, message);
    }

    fn push(&mut self, severity: Severity, indent: usize, message: impl Into<String>) {
        self.lines.push(ReportLine::new(severity, indent, message));
    }

    /// Lines of a given severity
    pub fn lines_with(&self, severity: Severity) -> impl Iterator<Item = &ReportLine> {
        self.lines.iter().filter(move |l| l.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines_with(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines_with(Severity::Warning)
    }

    /// Check whether any line carries exactly this message
    pub fn contains(&self, message: &str) -> bool {
        self.lines.iter().any(|l| l.message == message)
    }

    /// Render to console lines, each tagged with its stream
    ///
    /// Every heading but the first is preceded by an empty line.
    pub fn render(&self) -> Vec<(Stream, String)> {
        let mut rendered = Vec::with_capacity(self.lines.len() + 8);
        for (i, line) in self.lines.iter().enumerate() {
            if line.severity == Severity::Heading && i > 0 {
                rendered.push((Stream::Stdout, String::new()));
            }
            rendered.push((line.severity.stream(), line.to_string()));
        }
        rendered
    }

    /// Write the rendered report, errors and warnings to `err`, the rest to `out`
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        for (stream, text) in self.render() {
            match stream {
                Stream::Stdout => writeln!(out, "{}", text)?,
                Stream::Stderr => writeln!(err, "{}", text)?,
            }
        }
        out.flush()?;
        err.flush()
    }

    /// Print the report to the process's stdout and stderr
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())
    }
}
