//! The client-side search index (`js/search_index.js`).

use serde::Serialize;
use tlref_gen::Model;

use crate::paths::{page_path, type_path};

/// One searchable page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchEntry<'a> {
    name: &'a str,
    go_display: &'a str,
    search_name: String,
    desc: String,
    #[serde(rename = "type")]
    ty: &'static str,
    path: String,
}

/// Entries for every constructor, method and abstract type of `model`.
pub(crate) fn entries(model: &Model) -> Vec<SearchEntry<'_>> {
    let mut out = Vec::with_capacity(
        model.constructors.len() + model.methods.len() + model.types.len(),
    );

    for doc in model.constructors.iter().chain(&model.methods) {
        let mut search_name = format!(
            "{} {}",
            doc.display_name.to_lowercase(),
            doc.name.to_lowercase().replace('.', " ")
        );
        // Suffixed constructors stay findable under their plain name
        if doc.display_name != doc.mangled_name {
            search_name.push(' ');
            search_name.push_str(&doc.mangled_name.to_lowercase());
        }
        out.push(SearchEntry {
            name: &doc.name,
            go_display: &doc.display_name,
            search_name,
            desc: doc.description.clone(),
            ty: doc.kind.as_str(),
            path: page_path(doc.kind, &doc.name),
        });
    }

    for ty in &model.types {
        let n = ty.constructors.len();
        out.push(SearchEntry {
            name: &ty.name,
            go_display: &ty.mangled_name,
            search_name: format!("{} {}", ty.mangled_name.to_lowercase(), ty.name.to_lowercase()),
            desc: format!("Abstract type with {n} constructor{}", if n == 1 { "" } else { "s" }),
            ty: "type",
            path: type_path(&ty.name),
        });
    }
    out
}

/// The script body: `window.searchData = [...];`.
pub(crate) fn script(model: &Model) -> serde_json::Result<String> {
    Ok(format!("window.searchData = {};", serde_json::to_string(&entries(model))?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlref_gen::{Config, ExampleRegistry};
    use tlref_parser::load_schema;
    use tlref_parser::tl::Kind;

    #[test]
    fn indexes_every_page() {
        let schema = load_schema(
            "message#1 id:int = Message;
             ---functions---
             messages.getMessages#2 id:Vector<int> = Message;",
        );
        let model = Model::build(&schema, None, &ExampleRegistry::empty(), &Config::default());
        let entries = entries(&model);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].go_display, "MessageObj");
        assert_eq!(entries[0].search_name, "messageobj message message");
        assert_eq!(entries[1].path, page_path(Kind::Method, "messages.getMessages"));
        assert_eq!(entries[1].ty, "method");
        assert_eq!(entries[2].desc, "Abstract type with 1 constructor");

        let js = script(&model).unwrap();
        assert!(js.starts_with("window.searchData = [{\"name\":\"message\",\"goDisplay\":\"MessageObj\""));
        assert!(js.ends_with("];"));
    }
}
