//! Page locations inside the output tree and the links between them.

use tlref_parser::tl::{Flag, Kind};

use crate::text::escape_html;

/// Path of an entity's page, relative to the output root.
///
/// `messages.sendMessage` → `methods/messages/sendMessage.html`
pub fn page_path(kind: Kind, name: &str) -> String {
    match name.rsplit_once('.') {
        Some((ns, local)) => format!("{kind}s/{ns}/{local}.html"),
        None => format!("{kind}s/{name}.html"),
    }
}

/// Path of an abstract type's page, relative to the output root.
pub fn type_path(name: &str) -> String {
    format!("types/{name}.html")
}

/// Prefix leading from the page at `path` back to the output root.
pub fn relative_root(path: &str) -> String {
    match path.matches('/').count() {
        0 => ".".to_owned(),
        depth => vec![".."; depth].join("/"),
    }
}

/// Types shown as plain text.
const UNLINKED: &[&str] = &[
    "int", "int32", "long", "int64", "int128", "int256", "double", "string", "bytes", "true",
    "Bool", "#", "Object",
];

/// Renders a TL type as HTML with every referenced type linked.
///
/// `is_type` decides whether a name gets its abstract-type page; anything
/// else links to the constructor of that name. A `flags.N?` prefix stays as
/// text.
pub fn linkify_type(ty: &str, root: &str, is_type: &dyn Fn(&str) -> bool) -> String {
    let (prefix, clean) = match Flag::split_prefix(ty) {
        Some((_, rest)) => ty.split_at(ty.len() - rest.len()),
        None => ("", ty),
    };

    if UNLINKED.contains(&clean) || clean.starts_with("flags") {
        return escape_html(ty);
    }

    if let Some(inner) = clean.strip_prefix("Vector<").and_then(|r| r.strip_suffix('>')) {
        return format!("{}Vector&lt;{}&gt;", escape_html(prefix), linkify_type(inner, root, is_type));
    }

    let href = if is_type(clean) {
        type_path(clean)
    } else {
        page_path(Kind::Constructor, clean)
    };
    format!(
        "{}<a href=\"{root}/{}\">{}</a>",
        escape_html(prefix),
        escape_html(&href),
        escape_html(clean)
    )
}
