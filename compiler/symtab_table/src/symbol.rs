//! Contains the definition of [`Symbol`] and its classification tags.

use std::fmt::Display;

use getset::{CopyGetters, Getters};
use strum_macros::EnumString;

/// An integer storage-slot identifier, relative to the frame of the scope that
/// owns the symbol.
pub type Address = u64;

/// The declared type tag of a symbol.
///
/// The tag is an opaque classification and never a structured type. Tags that
/// are not known to the table are kept verbatim in [`Type::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
pub enum Type {
    /// `int`
    #[strum(serialize = "int")]
    Int,

    /// `char`
    #[strum(serialize = "char")]
    Char,

    /// `float`
    #[strum(serialize = "float")]
    Float,

    /// `double`
    #[strum(serialize = "double")]
    Double,

    /// `bool`
    #[strum(serialize = "bool")]
    Bool,

    /// `void`
    #[strum(serialize = "void")]
    Void,

    /// `struct`
    #[strum(serialize = "struct")]
    Struct,

    /// `union`
    #[strum(serialize = "union")]
    Union,

    /// `enum`
    #[strum(serialize = "enum")]
    Enum,

    /// `pointer`, also accepted as `ptr`.
    #[strum(serialize = "pointer", serialize = "ptr")]
    Pointer,

    /// `func`, also accepted as `function`.
    #[strum(serialize = "func", serialize = "function")]
    Function,

    /// Any other tag, kept as written.
    ///
    /// Only [`Type::from_tag`] normalizes: `Other("int".into())` built by
    /// hand is not equal to [`Type::Int`] even though both display as `int`.
    #[strum(default)]
    Other(String),
}

impl Type {
    /// Classifies the given tag. Unknown tags become [`Type::Other`].
    ///
    /// This is the only constructor that maps a known spelling or alias to
    /// its variant.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| Self::Other(tag.to_owned()))
    }

    /// Returns the tag as written if it is not one the table recognizes.
    #[must_use]
    pub fn custom_tag(&self) -> Option<&str> {
        match self {
            Self::Other(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the canonical spelling of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Void => "void",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Pointer => "pointer",
            Self::Function => "func",
            Self::Other(tag) => tag,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// The syntactic role of a symbol, orthogonal to its declared [`Type`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
pub enum ElementKind {
    /// A plain variable, also accepted as `var`.
    #[strum(serialize = "variable", serialize = "var")]
    Variable,

    /// A function, also accepted as `func`.
    #[strum(serialize = "function", serialize = "func")]
    Function,

    /// An array.
    #[strum(serialize = "array")]
    Array,

    /// A function parameter, also accepted as `param`.
    #[strum(serialize = "parameter", serialize = "param")]
    Parameter,

    /// A named constant, also accepted as `const`.
    #[strum(serialize = "constant", serialize = "const")]
    Constant,

    /// A type definition.
    #[strum(serialize = "typedef")]
    TypeDefinition,

    /// A jump label.
    #[strum(serialize = "label")]
    Label,

    /// Any other kind, kept as written. Like [`Type::Other`], it is only
    /// normalized when built through [`ElementKind::from_tag`].
    #[strum(default)]
    Other(String),
}

impl ElementKind {
    /// Classifies the given kind. Unknown kinds become [`ElementKind::Other`].
    #[must_use]
    pub fn from_tag(kind: &str) -> Self {
        kind.parse().unwrap_or_else(|_| Self::Other(kind.to_owned()))
    }

    /// Returns the kind as written if it is not one the table recognizes.
    #[must_use]
    pub fn custom_tag(&self) -> Option<&str> {
        match self {
            Self::Other(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns the canonical spelling of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Array => "array",
            Self::Parameter => "parameter",
            Self::Constant => "constant",
            Self::TypeDefinition => "typedef",
            Self::Label => "label",
            Self::Other(kind) => kind,
        }
    }

    /// Returns `true` if a symbol of this kind can be used where a value is
    /// expected.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Variable | Self::Array | Self::Parameter | Self::Constant
        )
    }

    /// Returns `true` if a symbol of this kind can be called.
    #[must_use]
    pub const fn is_callable(&self) -> bool { matches!(self, Self::Function) }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single identifier binding recorded at its declaration.
///
/// Symbols are created by [`crate::scope::ScopeStack::declare`] and are
/// immutable afterwards. They live as long as the scope that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Symbol {
    /// Gets the declaration ordinal of the symbol within its scope, starting
    /// at zero.
    #[get_copy = "pub"]
    index: usize,

    /// Gets the identifier text of the symbol.
    #[get = "pub"]
    name: String,

    /// Gets the declared type tag of the symbol.
    #[get = "pub"]
    ty: Type,

    /// Gets the storage address of the symbol within its scope's frame.
    #[get_copy = "pub"]
    address: Address,

    /// Gets the 1-based source line of the declaration.
    #[get_copy = "pub"]
    line: usize,

    /// Gets the syntactic role of the symbol.
    #[get = "pub"]
    element_kind: ElementKind,
}

impl Symbol {
    pub(crate) const fn new(
        index: usize,
        name: String,
        ty: Type,
        address: Address,
        line: usize,
        element_kind: ElementKind,
    ) -> Self {
        Self { index, name, ty, address, line, element_kind }
    }
}
