//! Usage-example synthesis for methods, constructors and abstract types.
//!
//! Examples are Go snippets in the style of the gogram client:
//!
//! ```text
//! // MessagesGetHistory - positional arguments
//! result, err := client.MessagesGetHistory(&tg.InputPeerUser{UserID: …}, 42)
//! ```

use tlref_parser::tl::{Entity, Field, Kind, Primitive, TypeRef};

use crate::collision::DisplayNames;
use crate::model::Config;
use crate::namegen::{self as n, NameCache};
use crate::registry::ExampleRegistry;
use crate::typegraph::TypeGraph;

/// Literal used for a primitive field.
fn primitive_example(p: Primitive) -> &'static str {
    match p {
        Primitive::String => "\"Hello, World!\"",
        Primitive::Int    => "42",
        Primitive::Long   => "int64(1234567890)",
        Primitive::Double => "3.14159",
        Primitive::Bytes  => "[]byte{0x01, 0x02, 0x03}",
        Primitive::Bool   => "true",
        Primitive::Int128 => "[16]byte{}",
        Primitive::Int256 => "[32]byte{}",
    }
}

/// Builds example source for entities of one schema.
///
/// Holds only shared references; one synthesizer serves every entity and
/// can be used from several threads at once.
pub struct Synthesizer<'a> {
    graph: &'a TypeGraph<'a>,
    registry: &'a ExampleRegistry,
    display: &'a DisplayNames<'a>,
    names: &'a NameCache,
    config: &'a Config,
}

impl<'a> Synthesizer<'a> {
    /// Wires the synthesizer to the finished type graph and name tables.
    pub fn new(
        graph: &'a TypeGraph<'a>,
        registry: &'a ExampleRegistry,
        display: &'a DisplayNames<'a>,
        names: &'a NameCache,
        config: &'a Config,
    ) -> Self {
        Self { graph, registry, display, names, config }
    }

    /// Example source for a method call or a constructor literal.
    pub fn synthesize(&self, entity: &Entity) -> String {
        match entity.kind {
            Kind::Method => self.method_example(entity),
            Kind::Constructor => self.constructor_example(entity),
        }
    }

    /// Example value for a single type string (a `flags.N?` prefix is ignored).
    ///
    /// With `expand`, abstract types from the registry are shown as their
    /// representative constructor with its required fields filled in.
    pub fn example_value(&self, ty: &str, expand: bool) -> String {
        self.value(&TypeRef::classify(ty), expand, 0)
    }

    /// Example listing the first implementations of an abstract type.
    pub fn interface_example(&self, ty: &str) -> String {
        let ctors = self.graph.implementations(ty);
        let shown = self.config.interface_preview;
        let mut out = format!(
            "// {ty} is an interface type\n\
             // You can use any of the following constructors:\n"
        );
        let go_ty = self.names.mangle(ty);
        for ctor in ctors.iter().take(shown) {
            out.push_str(&format!("var _ tg.{go_ty} = &tg.{}{{}}\n", self.display.display_name(ctor)));
        }
        if ctors.len() > shown {
            out.push_str(&format!("// ... and {} more constructors\n", ctors.len() - shown));
        }
        out
    }

    // ─── Values ───────────────────────────────────────────────────────────────

    fn value(&self, ty: &TypeRef, expand: bool, depth: usize) -> String {
        match ty {
            TypeRef::Primitive(p) => primitive_example(*p).to_owned(),
            TypeRef::Vector(inner) => {
                let elem = n::go_type(inner, self.names);
                if inner.is_primitive() {
                    format!("[]{elem}{{}}")
                } else {
                    format!("[]{elem}{{{}}}", self.value(inner, expand, depth))
                }
            }
            TypeRef::Named(name) => self.named_value(name, expand, depth),
            TypeRef::Unknown(_) => "nil".to_owned(),
        }
    }

    fn named_value(&self, ty: &str, expand: bool, depth: usize) -> String {
        let Some(ctor_name) = self.registry.implementation(ty) else {
            return format!("&tg.{}{{}}", self.names.mangle(ty));
        };

        // Only expand a constructor that really builds `ty` in this schema
        let ctor = self
            .graph
            .implementations(ty)
            .iter()
            .find(|c| c.name == ctor_name);

        match ctor {
            Some(ctor) if expand && depth < self.config.expand_depth => {
                let fields: Vec<String> = ctor
                    .required_fields()
                    .map(|f| format!("{}: {}", self.names.mangle(&f.name), self.field_value(ctor, f, true, depth + 1)))
                    .collect();
                format!("&tg.{}{{{}}}", self.display.display_name(ctor), fields.join(", "))
            }
            Some(ctor) => format!("&tg.{}{{}}", self.display.display_name(ctor)),
            None => format!("&tg.{}{{}}", self.display.constructor_name(ctor_name)),
        }
    }

    fn field_value(&self, owner: &Entity, field: &Field, expand: bool, depth: usize) -> String {
        match self.registry.field_value(&owner.name, &field.name) {
            Some(literal) => literal.to_owned(),
            None => self.value(&TypeRef::classify(&field.ty), expand, depth),
        }
    }

    /// `(mangled field name, example value)` for required and optional fields.
    fn field_examples(&self, entity: &Entity) -> (Vec<(String, String)>, Vec<(String, String)>) {
        let mut required = Vec::new();
        let mut optional = Vec::new();
        for field in entity.displayable_fields() {
            let pair = (self.names.mangle(&field.name), self.field_value(entity, field, true, 0));
            if field.optional() {
                optional.push(pair);
            } else {
                required.push(pair);
            }
        }
        (required, optional)
    }

    // ─── Layouts ──────────────────────────────────────────────────────────────

    fn method_example(&self, entity: &Entity) -> String {
        let name = self.names.mangle(&entity.name);
        let result = n::result_type(&entity.result_type, self.names);
        let (required, optional) = self.field_examples(entity);

        if required.len() <= self.config.positional_max_required && optional.is_empty() {
            let args: Vec<&str> = required.iter().map(|(_, v)| v.as_str()).collect();
            return format!(
                "// {name} - positional arguments\n\
                 result, err := client.{name}({args})\n\
                 if err != nil {{\n    \
                     // handle error\n\
                 }}\n\
                 // result is {result}",
                args = args.join(", "),
            );
        }

        let body = struct_body(
            &required,
            &optional,
            self.config.method_required_limit,
            self.config.optional_limit,
            ("// ...", "// ..."),
        );
        format!(
            "// {name} - using Params struct\n\
             result, err := client.{name}(&tg.{name}Params{{\n\
             {body}\n\
             }})\n\
             if err != nil {{\n    \
                 // handle error\n\
             }}\n\
             // result is {result}"
        )
    }

    fn constructor_example(&self, entity: &Entity) -> String {
        let name = self.display.display_name(entity);
        let (required, optional) = self.field_examples(entity);

        if required.is_empty() && optional.is_empty() {
            return format!("// Creating {name} constructor\nobj := &tg.{name}{{}}");
        }

        let body = struct_body(
            &required,
            &optional,
            self.config.constructor_required_limit,
            self.config.optional_limit,
            ("// ... more required fields", "// ... more optional fields"),
        );
        format!("// Creating {name} constructor\nobj := &tg.{name}{{\n{body}\n}}")
    }
}

/// Field lines of a struct literal: required fields verbatim, optional ones
/// commented out, each list cut at its limit with an elision line.
fn struct_body(
    required: &[(String, String)],
    optional: &[(String, String)],
    required_limit: usize,
    optional_limit: usize,
    (more_required, more_optional): (&str, &str),
) -> String {
    let mut lines = Vec::new();
    for (name, value) in required.iter().take(required_limit) {
        lines.push(format!("    {name}: {value},"));
    }
    if required.len() > required_limit {
        lines.push(format!("    {more_required}"));
    }

    if !optional.is_empty() {
        lines.push(String::new());
        lines.push("    // Optional fields:".to_owned());
        for (name, value) in optional.iter().take(optional_limit) {
            lines.push(format!("    // {name}: {value},"));
        }
        if optional.len() > optional_limit {
            lines.push(format!("    {more_optional}"));
        }
    }
    lines.join("\n")
}
