use std::fmt;
use std::str::FromStr;

use crate::errors::FieldParseError;
use crate::tl::Flag;

/// A single `name:type` field inside a TL declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// The field name as it appears in the schema.
    pub name: String,
    /// The raw type token, e.g. `flags.1?true` or `Vector<int>`.
    pub raw_ty: String,
    /// The effective type, i.e. `raw_ty` without any `flags.N?` prefix.
    pub ty: String,
    /// The optional marker, if the field is guarded by a flag bit.
    pub flag: Option<Flag>,
    /// The element type when `ty` is `Vector<…>`.
    pub vector_element: Option<String>,
}

impl Field {
    /// `true` when the field is only present if its flag bit is set.
    pub fn optional(&self) -> bool {
        self.flag.is_some()
    }

    /// `true` for bit-field headers (`flags:#`), which are not data fields.
    pub fn is_header(&self) -> bool {
        self.raw_ty == "#"
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.raw_ty)
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    /// Parses a single field token such as `flags:#`, `id:long`, or
    /// `photo:flags.0?InputPhoto`.
    ///
    /// Returns `Err(FieldParseError::TypeDef { name })` for the special
    /// `{X:Type}` generic-parameter-definition syntax so callers can skip it.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(inner) = token.strip_prefix('{') {
            return match inner.strip_suffix(":Type}") {
                Some(name) => Err(FieldParseError::TypeDef { name: name.into() }),
                None => Err(FieldParseError::InvalidGeneric),
            };
        }

        let (name, raw_ty) = token.split_once(':').ok_or(FieldParseError::MissingType)?;
        if name.is_empty() || raw_ty.is_empty() {
            return Err(FieldParseError::Empty);
        }

        // Header field
        if raw_ty == "#" {
            return Ok(Self {
                name: name.to_owned(),
                raw_ty: raw_ty.to_owned(),
                ty: raw_ty.to_owned(),
                flag: None,
                vector_element: None,
            });
        }

        let (flag, ty) = if raw_ty.contains('?') {
            let (flag, rest) = Flag::split_prefix(raw_ty).ok_or(FieldParseError::InvalidFlag)?;
            if rest.is_empty() {
                return Err(FieldParseError::Empty);
            }
            (Some(flag), rest)
        } else {
            (None, raw_ty)
        };

        if ty.contains('?') {
            return Err(FieldParseError::InvalidFlag);
        }

        Ok(Self {
            name: name.to_owned(),
            raw_ty: raw_ty.to_owned(),
            ty: ty.to_owned(),
            flag,
            vector_element: vector_element(ty)?.map(str::to_owned),
        })
    }
}

/// Returns `Inner` for `Vector<Inner>` / `vector<Inner>`.
fn vector_element(ty: &str) -> Result<Option<&str>, FieldParseError> {
    let Some((_, rest)) = ty.split_once('<') else {
        return Ok(None);
    };
    let inner = rest.strip_suffix('>').ok_or(FieldParseError::InvalidGeneric)?;
    if inner.is_empty() {
        return Err(FieldParseError::InvalidGeneric);
    }
    if ty.starts_with("Vector<") || ty.starts_with("vector<") {
        Ok(Some(inner))
    } else {
        Ok(None)
    }
}
