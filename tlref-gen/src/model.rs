//! The public model-building API.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tlref_parser::Schema;
use tlref_parser::tl::{Entity, Kind};

use crate::collision::DisplayNames;
use crate::enrich::{Enrichment, ErrorInfo};
use crate::errors::Error;
use crate::examples::Synthesizer;
use crate::namegen::NameCache;
use crate::registry::ExampleRegistry;
use crate::typegraph::TypeGraph;

// ─── Config ───────────────────────────────────────────────────────────────────

/// Generation configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Methods with at most this many required fields (and no optional
    /// ones) are shown with positional arguments.
    pub positional_max_required: usize,
    /// Required fields listed in a method's `Params` struct.
    pub method_required_limit: usize,
    /// Required fields listed in a constructor literal.
    pub constructor_required_limit: usize,
    /// Optional fields suggested (commented out) in either form.
    pub optional_limit: usize,
    /// How many levels of registry implementations are expanded in place.
    pub expand_depth: usize,
    /// Implementations listed in an abstract type's example.
    pub interface_preview: usize,
    /// Synthesize entity examples on the rayon thread pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            positional_max_required: 5,
            method_required_limit: 8,
            constructor_required_limit: 6,
            optional_limit: 4,
            expand_depth: 2,
            interface_preview: 5,
            parallel: true,
        }
    }
}

// ─── Document ─────────────────────────────────────────────────────────────────

/// A displayable field of an entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDoc {
    /// TL field name.
    pub name: String,
    /// Mangled field name, as used in examples.
    pub mangled_name: String,
    /// Effective type (without the `flags.N?` prefix).
    #[serde(rename = "type")]
    pub ty: String,
    /// Raw type token from the schema.
    pub raw_type: String,
    /// Whether the field is guarded by a flag bit.
    pub optional: bool,
    /// The flag bit index, for optional fields.
    pub flag_index: Option<u32>,
    /// Element type of a `Vector<…>` field.
    pub vector_element: Option<String>,
    /// Description from enrichment, if any.
    #[serde(default)]
    pub description: String,
}

/// A documented constructor or method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityDoc {
    /// Full TL name.
    pub name: String,
    /// Namespace part of the name.
    pub namespace: Option<String>,
    /// Name without namespace.
    pub local_name: String,
    /// Constructor or method.
    pub kind: Kind,
    /// Constructor ID.
    pub id: u32,
    /// Declaration text.
    pub raw: String,
    /// Result type name.
    pub result_type: String,
    /// Plain mangled name.
    pub mangled_name: String,
    /// Mangled name after collision resolution.
    pub display_name: String,
    /// Displayable fields, in declaration order.
    pub fields: Vec<FieldDoc>,
    /// Synthesized usage example.
    pub example: String,
    /// Summary from enrichment.
    #[serde(default)]
    pub description: String,
    /// Possible errors from enrichment.
    #[serde(default)]
    pub errors: Vec<ErrorInfo>,
    /// `users` / `bots`, from enrichment.
    #[serde(default)]
    pub can_be_used_by: Vec<String>,
    /// Usable over a business connection, from enrichment.
    #[serde(default)]
    pub business_connection: bool,
    /// Related page titles, from enrichment.
    #[serde(default)]
    pub related_pages: Vec<String>,
}

/// An abstract type and its implementations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDoc {
    /// TL type name.
    pub name: String,
    /// Mangled type name.
    pub mangled_name: String,
    /// TL names of the implementing constructors, in declaration order.
    pub constructors: Vec<String>,
    /// Example listing the first implementations.
    pub example: String,
}

/// Counts for the index page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Number of constructors.
    pub total_constructors: usize,
    /// Number of methods.
    pub total_methods: usize,
    /// Number of abstract types.
    pub total_types: usize,
    /// Entities that had an enrichment record.
    pub enriched: usize,
}

/// The finished, serializable model handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Schema layer, from the `// LAYER N` comment.
    pub layer: Option<i32>,
    /// RFC 3339 build time.
    pub generated_at: String,
    /// Constructors, in declaration order.
    pub constructors: Vec<EntityDoc>,
    /// Methods, in declaration order.
    pub methods: Vec<EntityDoc>,
    /// Abstract types, sorted by name.
    pub types: Vec<TypeDoc>,
    /// Counts.
    pub metadata: Metadata,
}

// ─── Public API ───────────────────────────────────────────────────────────────

impl Model {
    /// Builds the model: type graph, display names and examples for every
    /// entity, merged with `enrichment` where available.
    pub fn build(
        schema: &Schema,
        enrichment: Option<&Enrichment>,
        registry: &ExampleRegistry,
        config: &Config,
    ) -> Self {
        let names = NameCache::new();
        let graph = TypeGraph::build(&schema.constructors);
        let display = DisplayNames::new(&graph, &names);
        let synth = Synthesizer::new(&graph, registry, &display, &names, config);

        let document = |entity: &Entity| entity_doc(entity, &synth, &display, &names, enrichment);
        let document_all = |entities: &[Entity]| -> Vec<EntityDoc> {
            if config.parallel {
                entities.par_iter().map(document).collect()
            } else {
                entities.iter().map(document).collect()
            }
        };

        let constructors = document_all(&schema.constructors);
        let methods = document_all(&schema.methods);

        let types: Vec<TypeDoc> = graph
            .sorted_types()
            .into_iter()
            .map(|(ty, ctors)| TypeDoc {
                name: ty.to_owned(),
                mangled_name: names.mangle(ty),
                constructors: ctors.iter().map(|c| c.name.clone()).collect(),
                example: synth.interface_example(ty),
            })
            .collect();

        let enriched = enrichment.map_or(0, |e| {
            schema.constructors.iter().chain(&schema.methods)
                .filter(|d| e.get(d.kind, &d.name).is_some())
                .count()
        });

        log::info!(
            "[model] {} constructors, {} methods, {} types ({} enriched, {} names cached)",
            constructors.len(),
            methods.len(),
            types.len(),
            enriched,
            names.len()
        );

        Self {
            layer: schema.layer,
            generated_at: chrono::Utc::now().to_rfc3339(),
            metadata: Metadata {
                total_constructors: constructors.len(),
                total_methods: methods.len(),
                total_types: types.len(),
                enriched,
            },
            constructors,
            methods,
            types,
        }
    }

    /// Looks up a documented entity by kind and TL name.
    pub fn find(&self, kind: Kind, name: &str) -> Option<&EntityDoc> {
        let list = match kind {
            Kind::Constructor => &self.constructors,
            Kind::Method => &self.methods,
        };
        list.iter().find(|e| e.name == name)
    }

    /// `true` when `name` is an abstract type of the model.
    pub fn is_type(&self, name: &str) -> bool {
        self.types.binary_search_by(|t| t.name.as_str().cmp(name)).is_ok()
    }

    /// Writes the model as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::json(path, e))?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Reads a model written by [`Model::save`].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| Error::json(path, e))
    }
}

// ─── Entity documents ─────────────────────────────────────────────────────────

fn entity_doc(
    entity: &Entity,
    synth: &Synthesizer<'_>,
    display: &DisplayNames<'_>,
    names: &NameCache,
    enrichment: Option<&Enrichment>,
) -> EntityDoc {
    let record = enrichment.and_then(|e| e.get(entity.kind, &entity.name));

    // The schema decides the field list; enrichment only adds descriptions
    let fields: Vec<FieldDoc> = entity
        .displayable_fields()
        .map(|f| FieldDoc {
            name: f.name.clone(),
            mangled_name: names.mangle(&f.name),
            ty: f.ty.clone(),
            raw_type: f.raw_ty.clone(),
            optional: f.optional(),
            flag_index: f.flag.as_ref().map(|fl| fl.index),
            vector_element: f.vector_element.clone(),
            description: record
                .and_then(|r| r.field_description(&f.name))
                .unwrap_or_default()
                .to_owned(),
        })
        .collect();

    if let Some(record) = record {
        for extra in record.fields.iter().filter(|rf| {
            rf.ty != "#" && !entity.fields.iter().any(|f| f.name == rf.name)
        }) {
            log::debug!("[enrich] {}: ignoring field `{}` not in the schema", entity.name, extra.name);
        }
        if !record.result_type.is_empty() && record.result_type != entity.result_type {
            log::debug!(
                "[enrich] {}: page says result `{}`, schema says `{}`; keeping the schema",
                entity.name, record.result_type, entity.result_type
            );
        }
    }

    EntityDoc {
        name: entity.name.clone(),
        namespace: entity.namespace().map(str::to_owned),
        local_name: entity.local_name().to_owned(),
        kind: entity.kind,
        id: entity.id,
        raw: entity.raw.clone(),
        result_type: entity.result_type.clone(),
        mangled_name: names.mangle(&entity.name),
        display_name: display.display_name(entity),
        fields,
        example: synth.synthesize(entity),
        description: record.map(|r| r.description.clone()).unwrap_or_default(),
        errors: record.map(|r| r.errors.clone()).unwrap_or_default(),
        can_be_used_by: record.map(|r| r.can_be_used_by.clone()).unwrap_or_default(),
        business_connection: record.is_some_and(|r| r.business_connection),
        related_pages: record.map(|r| r.related_pages.clone()).unwrap_or_default(),
    }
}
