use std::fmt;
use std::num::ParseIntError;

/// Errors produced while parsing a single `name:type` field token.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldParseError {
    /// An empty name or type was encountered.
    Empty,
    /// A `{X:Type}` generic type definition (not a real field; used as a signal).
    TypeDef {
        /// The name of the generic type parameter (e.g. `"X"` from `{X:Type}`).
        name: String,
    },
    /// The token has no `:` separating name and type.
    MissingType,
    /// An optional marker (`flags.N?Type`) was malformed.
    InvalidFlag,
    /// A generic `<…>` argument was malformed (missing closing `>`).
    InvalidGeneric,
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty field name or type"),
            Self::TypeDef { name } => write!(f, "generic type definition: {name}"),
            Self::MissingType => write!(f, "field without `:type`"),
            Self::InvalidFlag => write!(f, "invalid optional marker"),
            Self::InvalidGeneric => write!(f, "invalid generic argument (unclosed `<`)"),
        }
    }
}

impl std::error::Error for FieldParseError {}

/// Reasons a line is rejected as a declaration.
///
/// These never escape [`crate::load_schema`]: a rejected line is skipped.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The input was blank.
    Empty,
    /// The head has no `#id` part.
    MissingId,
    /// The name before `#` is not a valid (optionally namespaced) identifier.
    InvalidName,
    /// The `#id` hex literal was unparseable.
    InvalidId(ParseIntError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty declaration"),
            Self::MissingId => write!(f, "missing `#id`"),
            Self::InvalidName => write!(f, "missing or malformed name"),
            Self::InvalidId(e) => write!(f, "invalid constructor ID: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId(e) => Some(e),
            _ => None,
        }
    }
}
