//! Implements [`Report`] for the errors of the table so that the front end
//! can render them uniformly.

use symtab_diagnostic::{Diagnostic, Report, Severity};

use crate::error::{
    AddressSpaceExhausted, DuplicateSymbol, Error, InactiveScope, InvalidLine,
    InvalidName, NameProblem, NoActiveScope, ScopeMismatch, TagTooLong,
    UnresolvedSymbol,
};

impl Report for DuplicateSymbol {
    fn report(&self) -> Diagnostic {
        Diagnostic::error(format!(
            "the symbol `{}` is already declared in this scope",
            self.name
        ))
        .with_line(self.redeclared_at)
        .with_related(self.first_declared_at, "previously declared here")
        .with_help("declarations in an inner scope may shadow this one")
    }
}

impl Report for UnresolvedSymbol {
    fn report(&self) -> Diagnostic {
        Diagnostic::error(format!(
            "the symbol `{}` is not declared in any open scope",
            self.name
        ))
        .with_line(self.line)
    }
}

impl Report for InvalidName {
    fn report(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(format!(
            "`{}` cannot be used as an identifier",
            self.name
        ))
        .with_line(self.line);

        match self.problem {
            NameProblem::Empty => {
                diagnostic.with_help("identifiers cannot be empty")
            }
            NameProblem::TooLong { length, max } => {
                diagnostic.with_help(format!(
                    "the identifier is {length} bytes long, at most {max} are \
                     allowed"
                ))
            }
        }
    }
}

impl Report for TagTooLong {
    fn report(&self) -> Diagnostic {
        Diagnostic::error(format!(
            "the tag `{}` of `{}` is too long",
            self.tag, self.name
        ))
        .with_line(self.line)
        .with_help(format!("tags are at most {} bytes long", self.max))
    }
}

// The structural errors describe a defect of the front end, not of the
// compiled program; they are rendered as plain internal errors.

impl Report for ScopeMismatch {
    fn report(&self) -> Diagnostic { internal(self) }
}

impl Report for NoActiveScope {
    fn report(&self) -> Diagnostic { internal(self) }
}

impl Report for InactiveScope {
    fn report(&self) -> Diagnostic { internal(self) }
}

impl Report for InvalidLine {
    fn report(&self) -> Diagnostic { internal(self) }
}

impl Report for AddressSpaceExhausted {
    fn report(&self) -> Diagnostic { internal(self) }
}

fn internal(error: &dyn std::error::Error) -> Diagnostic {
    Diagnostic::new(Severity::Error, format!("internal error: {error}"))
}

impl Report for Error {
    fn report(&self) -> Diagnostic {
        match self {
            Self::DuplicateSymbol(error) => error.report(),
            Self::ScopeMismatch(error) => error.report(),
            Self::NoActiveScope(error) => error.report(),
            Self::InactiveScope(error) => error.report(),
            Self::InvalidName(error) => error.report(),
            Self::TagTooLong(error) => error.report(),
            Self::InvalidLine(error) => error.report(),
            Self::AddressSpaceExhausted(error) => error.report(),
            Self::UnresolvedSymbol(error) => error.report(),
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(error: Error) -> Self { error.report() }
}
