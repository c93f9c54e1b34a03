//! Display names: mangled names, disambiguated where a constructor would
//! clash with an abstract type.

use std::collections::HashSet;

use tlref_parser::tl::{Entity, Kind};

use crate::namegen::NameCache;
use crate::typegraph::TypeGraph;

/// Appended to a constructor whose mangled name equals an abstract type's.
pub const DISAMBIGUATION_SUFFIX: &str = "Obj";

/// Resolves display names against the mangled names of every abstract type.
///
/// The set is computed once, from the complete [`TypeGraph`], so every
/// entity of a run gets the same decision.
#[derive(Debug)]
pub struct DisplayNames<'a> {
    interfaces: HashSet<String>,
    names: &'a NameCache,
}

impl<'a> DisplayNames<'a> {
    /// Precomputes the mangled names of all abstract types in `graph`.
    pub fn new(graph: &TypeGraph<'_>, names: &'a NameCache) -> Self {
        Self {
            interfaces: graph.keys().map(|k| names.mangle(k)).collect(),
            names,
        }
    }

    /// The name an entity is documented under.
    ///
    /// Methods always keep their mangled name.
    pub fn display_name(&self, entity: &Entity) -> String {
        match entity.kind {
            Kind::Constructor => self.constructor_name(&entity.name),
            Kind::Method => self.names.mangle(&entity.name),
        }
    }

    /// Display name for a constructor given by its TL name.
    pub fn constructor_name(&self, name: &str) -> String {
        let mut mangled = self.names.mangle(name);
        if self.interfaces.contains(&mangled) {
            mangled.push_str(DISAMBIGUATION_SUFFIX);
        }
        mangled
    }

    /// `true` when `mangled` is the mangled name of an abstract type.
    pub fn is_interface(&self, mangled: &str) -> bool {
        self.interfaces.contains(mangled)
    }
}
