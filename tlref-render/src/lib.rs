//! Renders a [`tlref_gen::Model`] into a static HTML reference.
//!
//! The output tree:
//!
//! ```text
//! index.html  constructors.html  methods.html  types.html
//! constructors/<ns>/<name>.html
//! methods/<ns>/<name>.html
//! types/<Name>.html
//! css/common.css
//! js/search_index.js
//! ```
//!
//! All links are relative, so the tree can be served from any prefix.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod pages;
mod paths;
mod search;
mod text;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tlref_gen::{Error, Model};
use tlref_parser::tl::Kind;

use pages::Site;

pub use paths::{linkify_type, page_path, relative_root, type_path};
pub use text::{clean_description, escape_html, highlight_go};

/// Pages written between two progress lines.
const PROGRESS_EVERY: usize = 100;

/// Writes the complete page tree for `model` under `out_dir`.
///
/// Existing files are overwritten; nothing else in `out_dir` is touched.
pub fn render(model: &Model, out_dir: &Path) -> Result<(), Error> {
    let site = Site::new(model);
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    write_page(&out_dir.join("index.html"), |out| site.index(out))?;
    write_page(&out_dir.join("constructors.html"), |out| site.entity_list(out, Kind::Constructor))?;
    write_page(&out_dir.join("methods.html"), |out| site.entity_list(out, Kind::Method))?;
    write_page(&out_dir.join("types.html"), |out| site.type_list(out))?;
    write_page(&out_dir.join("css/common.css"), |out| out.write_all(pages::STYLESHEET.as_bytes()))?;

    let index_path = out_dir.join("js/search_index.js");
    let script = search::script(model).map_err(|e| Error::json(&index_path, e))?;
    write_page(&index_path, |out| out.write_all(script.as_bytes()))?;

    for ty in &model.types {
        write_page(&out_dir.join(type_path(&ty.name)), |out| site.type_page(out, ty))?;
    }
    log::info!("[render] {} type pages", model.types.len());

    for (label, docs) in [("constructor", &model.constructors), ("method", &model.methods)] {
        for (i, doc) in docs.iter().enumerate() {
            write_page(&out_dir.join(page_path(doc.kind, &doc.name)), |out| site.detail_page(out, doc))?;
            if (i + 1) % PROGRESS_EVERY == 0 {
                log::info!("[render] {}/{} {label} pages", i + 1, docs.len());
            }
        }
        log::info!("[render] {} {label} pages", docs.len());
    }

    log::info!("[render] done: {}", out_dir.display());
    Ok(())
}

/// Creates `path` (and its parent directories) and fills it through `body`.
fn write_page<F>(path: &Path, body: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let result = (|| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        body(&mut out)?;
        out.flush()
    })();
    result.map_err(|e| Error::io(path, e))
}
