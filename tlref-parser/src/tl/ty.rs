use crate::tl::Flag;

/// Built-in TL scalar types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `string`
    String,
    /// `int` / `int32`
    Int,
    /// `long` / `int64`
    Long,
    /// `double`
    Double,
    /// `bytes`
    Bytes,
    /// `Bool` / `true`
    Bool,
    /// `int128`
    Int128,
    /// `int256`
    Int256,
}

/// The shape of a type string, as far as documentation cares.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A built-in scalar.
    Primitive(Primitive),
    /// `Vector<Inner>` (or bare `vector<Inner>`).
    Vector(Box<TypeRef>),
    /// A capitalized, possibly namespaced type name (e.g. `InputPeer`,
    /// `storage.FileType`).
    Named(String),
    /// Anything else: bare lowercase types, generic references (`!X`), `#`.
    Unknown(String),
}

impl TypeRef {
    /// Classifies a type string. A leading `flags.N?` marker is ignored.
    ///
    /// Any type mentioning `string` is a string, checked before vectors, so
    /// `Vector<string>` classifies as [`Primitive::String`].
    ///
    /// # Examples
    /// ```
    /// use tlref_parser::tl::{Primitive, TypeRef};
    /// assert_eq!(TypeRef::classify("flags.0?int"), TypeRef::Primitive(Primitive::Int));
    /// assert_eq!(
    ///     TypeRef::classify("Vector<InputPeer>"),
    ///     TypeRef::Vector(Box::new(TypeRef::Named("InputPeer".into()))),
    /// );
    /// ```
    pub fn classify(ty: &str) -> Self {
        let ty = Flag::split_prefix(ty).map_or(ty, |(_, rest)| rest).trim();

        if ty.contains("string") {
            return Self::Primitive(Primitive::String);
        }

        let primitive = match ty {
            "int" | "int32" => Some(Primitive::Int),
            "long" | "int64" => Some(Primitive::Long),
            "double" => Some(Primitive::Double),
            "bytes" => Some(Primitive::Bytes),
            "Bool" | "true" => Some(Primitive::Bool),
            "int128" => Some(Primitive::Int128),
            "int256" => Some(Primitive::Int256),
            _ => None,
        };
        if let Some(p) = primitive {
            return Self::Primitive(p);
        }

        let inner = ty
            .strip_prefix("Vector<")
            .or_else(|| ty.strip_prefix("vector<"))
            .and_then(|rest| rest.strip_suffix('>'));
        if let Some(inner) = inner {
            return Self::Vector(Box::new(Self::classify(inner)));
        }

        let local = ty.rsplit_once('.').map_or(ty, |(_, n)| n);
        if local.starts_with(|c: char| c.is_ascii_uppercase()) {
            Self::Named(ty.to_owned())
        } else {
            Self::Unknown(ty.to_owned())
        }
    }

    /// `true` for primitives and vectors of primitives.
    pub fn is_primitive(&self) -> bool {
        match self {
            Self::Primitive(_) => true,
            Self::Vector(inner) => inner.is_primitive(),
            Self::Named(_) | Self::Unknown(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(TypeRef::classify("long"), TypeRef::Primitive(Primitive::Long));
        assert_eq!(TypeRef::classify("int64"), TypeRef::Primitive(Primitive::Long));
        assert_eq!(TypeRef::classify("true"), TypeRef::Primitive(Primitive::Bool));
        assert_eq!(TypeRef::classify("flags.2?bytes"), TypeRef::Primitive(Primitive::Bytes));
    }

    #[test]
    fn string_wins_over_vector() {
        assert_eq!(TypeRef::classify("Vector<string>"), TypeRef::Primitive(Primitive::String));
    }

    #[test]
    fn nested_vectors() {
        let t = TypeRef::classify("Vector<Vector<long>>");
        assert_eq!(
            t,
            TypeRef::Vector(Box::new(TypeRef::Vector(Box::new(TypeRef::Primitive(Primitive::Long)))))
        );
        assert!(t.is_primitive());
    }

    #[test]
    fn named_and_unknown() {
        assert_eq!(TypeRef::classify("storage.FileType"), TypeRef::Named("storage.FileType".into()));
        assert_eq!(TypeRef::classify("!X"), TypeRef::Unknown("!X".into()));
        assert_eq!(TypeRef::classify("inputPeerUser"), TypeRef::Unknown("inputPeerUser".into()));
        assert!(!TypeRef::classify("InputPeer").is_primitive());
    }
}
