use std::fmt;

/// Whether an [`super::Entity`] is a data constructor or an RPC method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// A concrete data constructor (declared outside `---functions---`).
    Constructor,
    /// An RPC method (declared after `---functions---`).
    Method,
}

impl Kind {
    /// Lowercase name, as used in page paths (`constructor`, `method`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
