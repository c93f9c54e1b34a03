//! Groups constructors by the abstract type they build.

use std::collections::HashMap;

use tlref_parser::tl::{Entity, Kind};

/// Map from an abstract result type to the constructors implementing it.
///
/// Vector result types are not nominal interfaces and are left out. A type
/// with a single constructor is still an entry.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph<'a> {
    types: HashMap<&'a str, Vec<&'a Entity>>,
}

impl<'a> TypeGraph<'a> {
    /// Single pass over `constructors`, preserving declaration order within
    /// each type. Method entities are ignored.
    pub fn build(constructors: &'a [Entity]) -> Self {
        let mut types: HashMap<&'a str, Vec<&'a Entity>> = HashMap::new();

        for def in constructors.iter().filter(|d| d.kind == Kind::Constructor) {
            let ty = def.result_type.as_str();
            if ty.is_empty() || ty.starts_with("Vector") {
                continue;
            }
            types.entry(ty).or_default().push(def);
        }

        Self { types }
    }

    /// Constructors of `ty`, in declaration order (empty if unknown).
    pub fn implementations(&self, ty: &str) -> &[&'a Entity] {
        self.types.get(ty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` when `ty` is an abstract type of this schema.
    pub fn contains(&self, ty: &str) -> bool {
        self.types.contains_key(ty)
    }

    /// Abstract type names, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types.keys().copied()
    }

    /// All entries, sorted by type name for deterministic output.
    pub fn sorted_types(&self) -> Vec<(&'a str, &[&'a Entity])> {
        let mut entries: Vec<_> = self
            .types
            .iter()
            .map(|(ty, ctors)| (*ty, ctors.as_slice()))
            .collect();
        entries.sort_unstable_by_key(|(ty, _)| *ty);
        entries
    }

    /// Number of abstract types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// `true` when the schema declared no constructors with a nominal type.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlref_parser::load_schema;

    #[test]
    fn groups_in_declaration_order() {
        let schema = load_schema(
            "inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
             inputPeerChat#35a95cb9 chat_id:long = InputPeer;",
        );
        let graph = TypeGraph::build(&schema.constructors);
        assert_eq!(graph.len(), 1);
        let names: Vec<_> = graph.implementations("InputPeer").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["inputPeerUser", "inputPeerChat"]);
    }

    #[test]
    fn skips_vectors_and_empty_results() {
        let schema = load_schema(
            "vectorish#1 = Vector<int>;
             dangling#2 x:int
             boolTrue#997275b5 = Bool;",
        );
        let graph = TypeGraph::build(&schema.constructors);
        assert_eq!(graph.len(), 1);
        assert!(graph.contains("Bool"));
        assert!(!graph.contains("Vector<int>"));
        assert!(graph.implementations("Nope").is_empty());
    }

    #[test]
    fn sorted_keys() {
        let schema = load_schema(
            "b#1 = Zeta;
             a#2 = Alpha;
             c#3 = Mid;",
        );
        let graph = TypeGraph::build(&schema.constructors);
        let keys: Vec<_> = graph.sorted_types().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Alpha", "Mid", "Zeta"]);
    }
}
