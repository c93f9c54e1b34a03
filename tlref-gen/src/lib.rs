//! Turns a parsed TL schema into a documentation model: Go-style names,
//! the abstract-type graph, collision-free display names and a usage
//! example for every constructor, method and abstract type.
//!
//! # Usage
//!
//! ```no_run
//! use std::fs;
//! use std::path::Path;
//! use tlref_gen::{Config, ExampleRegistry, Model};
//! use tlref_parser::load_schema;
//!
//! let schema = load_schema(&fs::read_to_string("api.tl").unwrap());
//! let model = Model::build(&schema, None, &ExampleRegistry::default(), &Config::default());
//! model.save(Path::new("model.json")).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collision;
mod examples;
mod namegen;
mod registry;
mod typegraph;
pub mod enrich;
pub mod errors;
pub mod model;

pub use collision::{DisplayNames, DISAMBIGUATION_SUFFIX};
pub use enrich::Enrichment;
pub use errors::Error;
pub use examples::Synthesizer;
pub use model::{Config, EntityDoc, FieldDoc, Metadata, Model, TypeDoc};
pub use namegen::{go_type, mangle, result_type, NameCache};
pub use registry::ExampleRegistry;
pub use typegraph::TypeGraph;
