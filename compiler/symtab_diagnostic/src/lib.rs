//! Contains the definition of the [`Diagnostic`] struct and related types.

use std::fmt::Display;

use colored::Colorize;

#[cfg(test)]
mod test;

/// Implement this trait for a type that can report a diagnostic.
///
/// Errors produced by the symbol table carry every piece of information they
/// need (names, declaration lines), so reporting takes no extra context.
pub trait Report {
    /// Creates a diagnostic.
    fn report(&self) -> Diagnostic;
}

impl<R: Report + ?Sized> Report for &R {
    fn report(&self) -> Diagnostic { (**self).report() }
}

impl<R: Report + ?Sized> Report for Box<R> {
    fn report(&self) -> Diagnostic { (**self).report() }
}

/// Enumeration of the severity levels of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// An error that prevents the program from compiling.
    Error,

    /// A warning that does not prevent the program from compiling.
    Warning,

    /// An informational message.
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self {
            Self::Error => "[error]:".bright_red().bold(),
            Self::Warning => "[warning]:".yellow().bold(),
            Self::Info => "[info]:".bright_green().bold(),
        };

        write!(f, "{header}")
    }
}

/// Related information displayed alongside the main [`Diagnostic`], such as
/// the line of a previous declaration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_new::new)]
pub struct Related {
    /// The source line the note points at.
    pub line: usize,

    /// The message to display to the user.
    pub message: String,
}

/// A struct containing all the information required to display the diagnostic
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Diagnostic {
    /// The source line where the diagnostic occurred, if it is tied to one.
    pub line: Option<usize>,

    /// The message to display to the user.
    pub message: String,

    /// The severity of the diagnostic.
    pub severity: Severity,

    /// The optional help message to display to the user.
    pub help_message: Option<String>,

    /// List of related useful information to display to the user.
    pub related: Vec<Related>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given severity and message and no
    /// location.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
            severity,
            help_message: None,
            related: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Attaches the source line to the diagnostic.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches a help message to the diagnostic.
    #[must_use]
    pub fn with_help(mut self, help_message: impl Into<String>) -> Self {
        self.help_message = Some(help_message.into());
        self
    }

    /// Appends a related note to the diagnostic.
    #[must_use]
    pub fn with_related(
        mut self,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        self.related.push(Related::new(line, message.into()));
        self
    }

    /// Returns `true` if the diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool { self.severity == Severity::Error }
}

fn location(line: usize) -> String {
    format!("{} line {line}", "-->".bright_cyan().bold())
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity, self.message.as_str().bold())?;

        if let Some(line) = self.line {
            write!(f, "\n  {}", location(line))?;
        }

        for related in &self.related {
            write!(
                f,
                "\n  {} {}: {}",
                "=".bright_cyan().bold(),
                related.message,
                location(related.line)
            )?;
        }

        if let Some(help_message) = &self.help_message {
            write!(f, "\n{}: {help_message}", "help".bold())?;
        }

        Ok(())
    }
}
