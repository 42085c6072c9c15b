//! Error types for node construction
//!
//! Every failure this crate can produce is a precondition violation raised while
//! a node is being built. Once a node exists, equality, hashing, child
//! enumeration and dispatch cannot fail.

use crate::ast::NodeLocation;
use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub location: Option<NodeLocation>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Main error type for tree construction
#[derive(Debug, Clone)]
pub struct AstError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    /// Shorthand for a required attribute that was never supplied.
    pub fn missing(attribute: &str) -> Self {
        Self::new(ErrorKind::MissingAttribute, format!("{} is null", attribute))
    }

    pub fn with_location(mut self, location: NodeLocation) -> Self {
        self.context = self.context.with_location(location);
        self
    }

    /// Attaches a location only when one is known.
    pub fn with_optional_location(self, location: Option<NodeLocation>) -> Self {
        match location {
            Some(location) => self.with_location(location),
            None => self,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context = self.context.with_note(note);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context = self.context.with_help(help);
        self
    }

    pub fn location(&self) -> Option<NodeLocation> {
        self.context.location
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required attribute (table name, column definition) was never supplied
    MissingAttribute,
    EmptyIdentifier,
    EmptyQualifiedName,
    EmptyDataType,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingAttribute => "missing attribute",
            ErrorKind::EmptyIdentifier => "empty identifier",
            ErrorKind::EmptyQualifiedName => "empty qualified name",
            ErrorKind::EmptyDataType => "empty data type",
        }
    }

    /// All current kinds are construction-time precondition checks.
    pub fn is_precondition_violation(&self) -> bool {
        match self {
            ErrorKind::MissingAttribute
            | ErrorKind::EmptyIdentifier
            | ErrorKind::EmptyQualifiedName
            | ErrorKind::EmptyDataType => true,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.location {
            Some(location) => write!(f, "{}: {}: {}", location, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstError {}

/// Format error with source code snippet
pub struct ErrorFormatter<'a> {
    error: &'a AstError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a AstError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(location) = &self.error.context.location {
            let header = match self.filename {
                Some(filename) => format!("{}:{}", filename, location),
                None => location.to_string(),
            };
            output.push_str(&if self.use_color {
                header.bold().to_string()
            } else {
                header
            });
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };

        output.push_str(&format!("{}: {}\n", error_label, self.error.message));

        if let Some(location) = &self.error.context.location {
            if let Some(snippet) = self.extract_snippet(location) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn extract_snippet(&self, location: &NodeLocation) -> Option<String> {
        let line = self.source.lines().nth(location.line().checked_sub(1)?)?;

        let line_num = location.line().to_string();
        let gutter_width = line_num.len();
        let line_num_str = if self.use_color {
            line_num.blue().bold().to_string()
        } else {
            line_num
        };
        let separator = if self.use_color {
            "|".blue().to_string()
        } else {
            "|".to_string()
        };

        let mut snippet = format!("{} {} {}\n", line_num_str, separator, line);

        let padding = " ".repeat(gutter_width);
        let pointer_padding = " ".repeat(location.column().saturating_sub(1));
        let pointer = if self.use_color {
            "^".red().bold().to_string()
        } else {
            "^".to_string()
        };

        snippet.push_str(&format!(
            "{} {} {}{}",
            padding, separator, pointer_padding, pointer
        ));

        Some(snippet)
    }
}

/// Result type for node construction
pub type Result<T> = std::result::Result<T, AstError>;

/// A failed construction, tagged with the kind of node that was being built.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub node_kind: &'static str,
    pub error: AstError,
}

/// Rejected constructions gathered while building one tree, so a parser can
/// report every bad node of a statement at once.
#[derive(Debug, Default)]
pub struct ErrorCollection {
    rejections: Vec<Rejection>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node_kind: &'static str, error: AstError) {
        self.rejections.push(Rejection { node_kind, error });
    }

    /// Yields the built node, or records why `node_kind` could not be built.
    pub fn collect<T>(&mut self, node_kind: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(node) => Some(node),
            Err(error) => {
                self.add(node_kind, error);
                None
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.rejections.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.rejections.len()
    }

    /// Number of rejections recorded against one node kind.
    pub fn count_for(&self, node_kind: &str) -> usize {
        self.rejections
            .iter()
            .filter(|r| r.node_kind == node_kind)
            .count()
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Converts into a `Result`, failing with the first rejection if any.
    pub fn into_result<T>(self, node: T) -> Result<T> {
        match self.rejections.into_iter().next() {
            Some(rejection) => Err(rejection.error),
            None => Ok(node),
        }
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rejection in &self.rejections {
            writeln!(f, "error[{}]: {}", rejection.node_kind, rejection.error)?;
        }

        if self.has_errors() {
            write!(f, "\n{} node(s) rejected", self.error_count())?;
        }

        Ok(())
    }
}
