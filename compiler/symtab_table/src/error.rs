//! Contains the errors produced by the symbol table.
//!
//! The errors fall into two classes. Semantic errors ([`DuplicateSymbol`],
//! [`InvalidName`], [`TagTooLong`], [`UnresolvedSymbol`]) describe a problem
//! in the program being compiled; the front end collects them and keeps
//! going. Structural errors ([`ScopeMismatch`], [`NoActiveScope`],
//! [`InactiveScope`], [`InvalidLine`], [`AddressSpaceExhausted`]) mean the
//! caller drove the table incorrectly and should abort.

use enum_as_inner::EnumAsInner;

use crate::scope::{ScopeHandle, SymbolId};

/// A name was declared twice in the same scope.
///
/// The registry is left unchanged; the first declaration stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "`{name}` is already declared in scope {scope} (first declared at line \
     {first_declared_at})"
)]
pub struct DuplicateSymbol {
    /// The duplicated identifier.
    pub name: String,

    /// The scope in which the collision happened.
    pub scope: ScopeHandle,

    /// The line of the declaration that is already in the scope.
    pub first_declared_at: usize,

    /// The line of the rejected declaration.
    pub redeclared_at: usize,

    /// The symbol that is already in the scope.
    pub existing: SymbolId,
}

/// `exit_scope` was called with a handle that is not the innermost open
/// scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "attempted to exit scope {found} while the innermost open scope is \
     {expected}"
)]
pub struct ScopeMismatch {
    /// The innermost open scope, which is the only one that can be exited.
    pub expected: ScopeHandle,

    /// The handle the caller passed.
    pub found: ScopeHandle,
}

/// An operation needed an open scope but the stack is empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    thiserror::Error,
)]
#[error("there is no open scope")]
pub struct NoActiveScope;

/// The given handle does not refer to an open scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("scope {handle} is not open")]
pub struct InactiveScope {
    /// The handle that was passed.
    pub handle: ScopeHandle,
}

/// The reason an identifier is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NameProblem {
    /// The identifier is empty.
    #[error("identifiers cannot be empty")]
    Empty,

    /// The identifier exceeds [`crate::Limits::max_name_length`].
    #[error("the identifier is {length} bytes long, the limit is {max}")]
    TooLong {
        /// The length of the identifier, in bytes.
        length: usize,

        /// The configured limit, in bytes.
        max: usize,
    },
}

/// An identifier was rejected before being declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid identifier `{name}` at line {line}: {problem}")]
pub struct InvalidName {
    /// The rejected identifier.
    pub name: String,

    /// The line of the declaration.
    pub line: usize,

    /// Why the identifier is rejected.
    pub problem: NameProblem,
}

/// A type or element-kind tag exceeds [`crate::Limits::max_tag_length`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "the tag `{tag}` of `{name}` at line {line} is longer than {max} bytes"
)]
pub struct TagTooLong {
    /// The identifier being declared.
    pub name: String,

    /// The offending tag.
    pub tag: String,

    /// The line of the declaration.
    pub line: usize,

    /// The configured limit, in bytes.
    pub max: usize,
}

/// A declaration was given line `0`; lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the declaration of `{name}` has line 0, lines start at 1")]
pub struct InvalidLine {
    /// The identifier being declared.
    pub name: String,
}

/// The address counter of a scope cannot be incremented anymore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("scope {scope} ran out of addresses")]
pub struct AddressSpaceExhausted {
    /// The scope whose frame is full.
    pub scope: ScopeHandle,
}

/// A referenced name is not declared in any open scope.
///
/// [`crate::scope::ScopeStack::resolve`] never produces this; it is created
/// by [`crate::scope::ScopeStack::resolve_or_report`] for callers that want
/// the finding reported through a handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("`{name}` at line {line} is not declared in any open scope")]
pub struct UnresolvedSymbol {
    /// The unresolved identifier.
    pub name: String,

    /// The line of the reference.
    pub line: usize,
}

/// An enumeration of all errors produced by the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, EnumAsInner)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    DuplicateSymbol(#[from] DuplicateSymbol),

    #[error(transparent)]
    ScopeMismatch(#[from] ScopeMismatch),

    #[error(transparent)]
    NoActiveScope(#[from] NoActiveScope),

    #[error(transparent)]
    InactiveScope(#[from] InactiveScope),

    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    #[error(transparent)]
    TagTooLong(#[from] TagTooLong),

    #[error(transparent)]
    InvalidLine(#[from] InvalidLine),

    #[error(transparent)]
    AddressSpaceExhausted(#[from] AddressSpaceExhausted),

    #[error(transparent)]
    UnresolvedSymbol(#[from] UnresolvedSymbol),
}

impl Error {
    /// Returns `true` if the error means the table was driven incorrectly
    /// rather than that the compiled program is wrong.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::ScopeMismatch(_)
                | Self::NoActiveScope(_)
                | Self::InactiveScope(_)
                | Self::InvalidLine(_)
                | Self::AddressSpaceExhausted(_)
        )
    }
}
