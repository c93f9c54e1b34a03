//! Parser for Telegram's [Type Language] (TL) schema files.
//!
//! This crate turns raw `.tl` text into an ordered list of [`Entity`]s,
//! split into constructors and methods, which `tlref-gen` then models and
//! documents.
//!
//! # Quick start
//!
//! ```rust
//! use tlref_parser::load_schema;
//!
//! let schema = load_schema("
//! inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
//! ---functions---
//! users.getUsers#d91a548 id:Vector<InputUser> = Vector<User>;
//! ");
//! assert_eq!(schema.constructors.len(), 1);
//! assert_eq!(schema.methods[0].name, "users.getUsers");
//! ```
//!
//! [Type Language]: https://core.telegram.org/mtproto/TL

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Parse error types for TL declarations.
pub mod errors;
pub mod tl;
mod iterator;

use tl::{Entity, Kind};

/// A loaded schema document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    /// The `// LAYER N` number, if the document carries one.
    pub layer: Option<i32>,
    /// Constructors, in declaration order.
    pub constructors: Vec<Entity>,
    /// Methods, in declaration order.
    pub methods: Vec<Entity>,
}

impl Schema {
    /// Looks up an entity of `kind` by its full TL name.
    pub fn find(&self, kind: Kind, name: &str) -> Option<&Entity> {
        let list = match kind {
            Kind::Constructor => &self.constructors,
            Kind::Method => &self.methods,
        };
        list.iter().find(|e| e.name == name)
    }
}

/// Parses one declaration line.
///
/// Returns `None` when the line is not `name#hex …`. A valid head with an
/// unparsable field list still yields an entity, with no fields.
pub fn parse_declaration(line: &str) -> Option<Entity> {
    line.parse().ok()
}

/// Iterates every declaration in a schema document, in order.
///
/// Lines starting with `//` are comments. The `---functions---` and
/// `---types---` section markers switch the [`Kind`] applied to the
/// following declarations. Lines that fail to parse are skipped.
pub fn parse_tl_file(contents: &str) -> impl Iterator<Item = Entity> + '_ {
    iterator::SchemaIter::new(contents)
}

/// Loads a whole schema document, partitioning entities by kind.
pub fn load_schema(contents: &str) -> Schema {
    let mut schema = Schema {
        layer: contents.lines().filter_map(iterator::layer_marker).max(),
        ..Schema::default()
    };

    for entity in parse_tl_file(contents) {
        match entity.kind {
            Kind::Constructor => schema.constructors.push(entity),
            Kind::Method => schema.methods.push(entity),
        }
    }

    log::debug!(
        "[schema] loaded {} constructors, {} methods",
        schema.constructors.len(),
        schema.methods.len()
    );
    schema
}
