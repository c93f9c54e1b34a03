//! HTML page writers.

use std::collections::HashMap;
use std::io::{self, Write};

use tlref_gen::{EntityDoc, Model, TypeDoc};
use tlref_parser::tl::Kind;

use crate::paths::{linkify_type, page_path, relative_root, type_path};
use crate::text::{clean_description, escape_html as esc, highlight_go, summary};

/// Entities shown per section on the index page.
const INDEX_PREVIEW: usize = 10;

/// Shared lookups for every page of one model.
pub(crate) struct Site<'a> {
    model: &'a Model,
    constructors: HashMap<&'a str, &'a EntityDoc>,
}

impl<'a> Site<'a> {
    pub(crate) fn new(model: &'a Model) -> Self {
        Self {
            model,
            constructors: model.constructors.iter().map(|c| (c.name.as_str(), c)).collect(),
        }
    }

    fn layer(&self) -> String {
        self.model.layer.map_or_else(|| "?".to_owned(), |l| l.to_string())
    }

    // ─── Frame ────────────────────────────────────────────────────────────────

    fn header<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        root: &str,
        description: Option<&str>,
        article: bool,
    ) -> io::Result<()> {
        let fallback = format!("TL schema reference for {title}");
        let meta = crate::text::truncate(description.unwrap_or(&fallback), 160);
        let og_type = if article { "article" } else { "website" };

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "    <meta charset=\"UTF-8\">")?;
        writeln!(out, "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
        writeln!(out, "    <title>{} - TL Reference</title>", esc(title))?;
        writeln!(out, "    <meta name=\"description\" content=\"{}\">", esc(meta))?;
        writeln!(out, "    <meta property=\"og:title\" content=\"{} - TL Reference\">", esc(title))?;
        writeln!(out, "    <meta property=\"og:description\" content=\"{}\">", esc(meta))?;
        writeln!(out, "    <meta property=\"og:type\" content=\"{og_type}\">")?;
        writeln!(out, "    <link rel=\"stylesheet\" href=\"{root}/css/common.css\">")?;
        writeln!(out, "    <script>const rootPath = \"{root}\";</script>")?;
        writeln!(out, "    <script src=\"{root}/js/search_index.js\"></script>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "    <header>")?;
        writeln!(out, "        <div class=\"container\">")?;
        writeln!(out, "            <a href=\"{root}/index.html\" class=\"logo\">TL <span>Reference</span></a>")?;
        writeln!(out, "            <nav>")?;
        writeln!(out, "                <a href=\"{root}/index.html\">Home</a>")?;
        writeln!(out, "                <a href=\"{root}/types.html\">Types</a>")?;
        writeln!(out, "                <a href=\"{root}/constructors.html\">Constructors</a>")?;
        writeln!(out, "                <a href=\"{root}/methods.html\">Methods</a>")?;
        writeln!(out, "            </nav>")?;
        writeln!(out, "            <input type=\"text\" id=\"search-input\" placeholder=\"Search methods, constructors, types...\" autocomplete=\"off\">")?;
        writeln!(out, "        </div>")?;
        writeln!(out, "    </header>")
    }

    fn footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "    <footer>")?;
        writeln!(out, "        <div class=\"container\">Generated {} from layer {}.</div>", esc(&self.model.generated_at), self.layer())?;
        writeln!(out, "    </footer>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }

    fn layer_badge<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "        <div class=\"layer\"><span>Layer {}</span></div>", self.layer())
    }

    fn item_link<W: Write>(&self, out: &mut W, href: &str, display: &str, name: &str, desc: &str) -> io::Result<()> {
        writeln!(
            out,
            "            <a href=\"{}\" class=\"item\" data-name=\"{} {}\">",
            esc(href),
            esc(&display.to_lowercase()),
            esc(&name.to_lowercase())
        )?;
        writeln!(out, "                <span class=\"item-name\">{}</span>", esc(display))?;
        writeln!(out, "                <span class=\"item-desc\">{}</span>", esc(desc))?;
        writeln!(out, "            </a>")
    }

    fn example<W: Write>(&self, out: &mut W, code: &str) -> io::Result<()> {
        writeln!(out, "        <div class=\"example-section\">")?;
        writeln!(out, "            <h2>Example</h2>")?;
        writeln!(out, "            <pre class=\"example-code\">{}</pre>", highlight_go(code))?;
        writeln!(out, "        </div>")
    }

    // ─── Index ────────────────────────────────────────────────────────────────

    pub(crate) fn index<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let m = self.model;
        self.header(out, "Home", ".", None, false)?;
        writeln!(out, "    <main class=\"container\">")?;
        writeln!(out, "        <div class=\"hero\">")?;
        writeln!(out, "            <h1>TL Reference</h1>")?;
        writeln!(out, "            <p>Constructors, methods and types of the Telegram API schema.</p>")?;
        writeln!(out, "            <div class=\"stats\">")?;
        writeln!(out, "                <span class=\"stat\">Layer <b>{}</b></span>", self.layer())?;
        writeln!(out, "                <span class=\"stat\"><b>{}</b> Constructors</span>", m.metadata.total_constructors)?;
        writeln!(out, "                <span class=\"stat\"><b>{}</b> Methods</span>", m.metadata.total_methods)?;
        writeln!(out, "                <span class=\"stat\"><b>{}</b> Types</span>", m.metadata.total_types)?;
        writeln!(out, "            </div>")?;
        writeln!(out, "        </div>")?;

        let sections: [(&str, &str, &[EntityDoc]); 2] = [
            ("Constructors", "constructors.html", m.constructors.as_slice()),
            ("Methods", "methods.html", m.methods.as_slice()),
        ];
        for (title, all, docs) in sections {
            writeln!(out, "        <div class=\"section\">")?;
            writeln!(out, "            <h2>{title}</h2>")?;
            writeln!(out, "            <div class=\"item-list\">")?;
            for doc in docs.iter().take(INDEX_PREVIEW) {
                let href = page_path(doc.kind, &doc.name);
                self.item_link(out, &href, &doc.display_name, &doc.name, &summary(&doc.description))?;
            }
            writeln!(out, "            </div>")?;
            writeln!(out, "            <p><a href=\"{all}\" class=\"view-all\">View all {} →</a></p>", title.to_lowercase())?;
            writeln!(out, "        </div>")?;
        }

        writeln!(out, "        <div class=\"section\">")?;
        writeln!(out, "            <h2>Types</h2>")?;
        writeln!(out, "            <div class=\"item-list\">")?;
        for ty in m.types.iter().take(INDEX_PREVIEW) {
            self.item_link(out, &type_path(&ty.name), &ty.mangled_name, &ty.name, &count_label(ty))?;
        }
        writeln!(out, "            </div>")?;
        writeln!(out, "            <p><a href=\"types.html\" class=\"view-all\">View all types →</a></p>")?;
        writeln!(out, "        </div>")?;
        writeln!(out, "    </main>")?;
        self.footer(out)
    }

    // ─── Listings ─────────────────────────────────────────────────────────────

    pub(crate) fn entity_list<W: Write>(&self, out: &mut W, kind: Kind) -> io::Result<()> {
        let (title, docs) = match kind {
            Kind::Constructor => ("Constructors", &self.model.constructors),
            Kind::Method => ("Methods", &self.model.methods),
        };
        self.header(out, title, ".", None, false)?;
        writeln!(out, "    <main class=\"container\">")?;
        writeln!(out, "        <div class=\"page-header\">")?;
        writeln!(out, "            <h1>{title}</h1>")?;
        writeln!(out, "            <p class=\"description\">{} entries</p>", docs.len())?;
        writeln!(out, "        </div>")?;
        writeln!(out, "        <div class=\"item-list\" id=\"items-list\">")?;
        for doc in docs {
            let href = page_path(doc.kind, &doc.name);
            self.item_link(out, &href, &doc.display_name, &doc.name, &summary(&doc.description))?;
        }
        writeln!(out, "        </div>")?;
        writeln!(out, "    </main>")?;
        self.footer(out)
    }

    pub(crate) fn type_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let types = &self.model.types;
        self.header(out, "Types", ".", None, false)?;
        writeln!(out, "    <main class=\"container\">")?;
        writeln!(out, "        <div class=\"page-header\">")?;
        writeln!(out, "            <h1>Types</h1>")?;
        writeln!(out, "            <p class=\"description\">{} abstract types</p>", types.len())?;
        writeln!(out, "        </div>")?;
        writeln!(out, "        <div class=\"item-list\" id=\"items-list\">")?;
        for ty in types {
            self.item_link(out, &type_path(&ty.name), &ty.mangled_name, &ty.name, &count_label(ty))?;
        }
        writeln!(out, "        </div>")?;
        writeln!(out, "    </main>")?;
        self.footer(out)
    }

    // ─── Type page ────────────────────────────────────────────────────────────

    pub(crate) fn type_page<W: Write>(&self, out: &mut W, ty: &TypeDoc) -> io::Result<()> {
        let root = relative_root(&type_path(&ty.name));
        let desc = format!("Abstract type representing one of {} possible constructors.", ty.constructors.len());

        self.header(out, &ty.name, &root, Some(&desc), true)?;
        writeln!(out, "    <main class=\"container\">")?;
        writeln!(out, "        <article>")?;
        writeln!(
            out,
            "        <div class=\"breadcrumb\"><a href=\"{root}/index.html\">Home</a> <span>›</span> <a href=\"{root}/types.html\">Types</a> <span>›</span> {}</div>",
            esc(&ty.name)
        )?;
        self.layer_badge(out)?;
        writeln!(out, "        <header class=\"page-header\">")?;
        writeln!(out, "            <h1>{}</h1>", esc(&ty.mangled_name))?;
        writeln!(out, "            <p class=\"description\">{desc}</p>")?;
        writeln!(out, "        </header>")?;
        writeln!(out, "        <div class=\"badges\"><span class=\"badge badge-type\">Type</span></div>")?;
        writeln!(out, "        <div class=\"section\">")?;
        writeln!(out, "            <h2>Available Constructors</h2>")?;
        writeln!(out, "            <p>Represented as the <code>tg.{}</code> interface. Use any of the following constructors:</p>", esc(&ty.mangled_name))?;
        writeln!(out, "            <div class=\"item-list\">")?;
        for name in &ty.constructors {
            let href = format!("{root}/{}", page_path(Kind::Constructor, name));
            match self.constructors.get(name.as_str()) {
                Some(doc) => self.item_link(out, &href, &doc.display_name, name, &summary(&doc.description))?,
                None => self.item_link(out, &href, name, name, "No description")?,
            }
        }
        writeln!(out, "            </div>")?;
        writeln!(out, "        </div>")?;
        self.example(out, &ty.example)?;
        writeln!(out, "        </article>")?;
        writeln!(out, "    </main>")?;
        self.footer(out)
    }

    // ─── Detail page ──────────────────────────────────────────────────────────

    pub(crate) fn detail_page<W: Write>(&self, out: &mut W, doc: &EntityDoc) -> io::Result<()> {
        let kind = doc.kind.as_str();
        let root = relative_root(&page_path(doc.kind, &doc.name));
        let description = clean_description(&doc.description);
        let is_type = |name: &str| self.model.is_type(name);

        self.header(out, &doc.name, &root, Some(description.as_str()).filter(|d| !d.is_empty()), true)?;
        writeln!(out, "    <main class=\"container\">")?;
        writeln!(out, "        <article>")?;

        write!(
            out,
            "        <div class=\"breadcrumb\"><a href=\"{root}/index.html\">Home</a> <span>›</span> <a href=\"{root}/{kind}s.html\">{}s</a>",
            title_case(kind)
        )?;
        if let Some(ns) = &doc.namespace {
            write!(out, " <span>›</span> {}", esc(&tlref_gen::mangle(ns)))?;
        }
        writeln!(out, " <span>›</span> {}</div>", esc(&doc.display_name))?;

        self.layer_badge(out)?;
        writeln!(out, "        <header class=\"page-header\">")?;
        writeln!(out, "            <h1>{}</h1>", esc(&doc.display_name))?;
        if description.is_empty() {
            writeln!(out, "            <p class=\"description\">No description available</p>")?;
        } else {
            writeln!(out, "            <p class=\"description\">{}</p>", esc(&description))?;
        }
        writeln!(out, "        </header>")?;

        writeln!(out, "        <div class=\"badges\">")?;
        writeln!(out, "            <span class=\"badge badge-{kind}\">{kind}</span>")?;
        if doc.can_be_used_by.iter().any(|u| u == "users") {
            writeln!(out, "            <span class=\"badge badge-user\">Users</span>")?;
        }
        if doc.can_be_used_by.iter().any(|u| u == "bots") {
            writeln!(out, "            <span class=\"badge badge-bot\">Bots</span>")?;
        }
        if doc.business_connection {
            writeln!(out, "            <span class=\"badge badge-business\">Business</span>")?;
        }
        writeln!(out, "        </div>")?;

        writeln!(out, "        <div class=\"code-block\">{}</div>", esc(&doc.raw))?;

        if !doc.fields.is_empty() {
            writeln!(out, "        <div class=\"section\">")?;
            writeln!(out, "            <h2>Parameters</h2>")?;
            writeln!(out, "            <table>")?;
            writeln!(out, "                <thead><tr><th>Name</th><th>Type</th><th>Description</th></tr></thead>")?;
            writeln!(out, "                <tbody>")?;
            for field in &doc.fields {
                writeln!(
                    out,
                    "                    <tr><td class=\"field-name\">{}</td><td class=\"field-type\">{}</td><td>{}</td></tr>",
                    esc(&field.mangled_name),
                    linkify_type(&field.raw_type, &root, &is_type),
                    esc(&clean_description(&field.description))
                )?;
            }
            writeln!(out, "                </tbody>")?;
            writeln!(out, "            </table>")?;
            writeln!(out, "        </div>")?;
        }

        if !doc.result_type.is_empty() {
            writeln!(out, "        <div class=\"result-section\">")?;
            writeln!(out, "            <h3>Returns</h3>")?;
            writeln!(out, "            <span class=\"result-type\">{}</span>", linkify_type(&doc.result_type, &root, &is_type))?;
            writeln!(out, "        </div>")?;
        }

        self.example(out, &doc.example)?;

        if !doc.errors.is_empty() {
            writeln!(out, "        <div class=\"section\">")?;
            writeln!(out, "            <h2>Possible Errors</h2>")?;
            writeln!(out, "            <table>")?;
            writeln!(out, "                <thead><tr><th>Code</th><th>Type</th><th>Description</th></tr></thead>")?;
            writeln!(out, "                <tbody>")?;
            for error in &doc.errors {
                writeln!(
                    out,
                    "                    <tr><td class=\"error-code\">{}</td><td class=\"error-type\">{}</td><td>{}</td></tr>",
                    esc(&error.code),
                    esc(&error.ty),
                    esc(&clean_description(&error.description))
                )?;
            }
            writeln!(out, "                </tbody>")?;
            writeln!(out, "            </table>")?;
            writeln!(out, "        </div>")?;
        }

        let related: Vec<&String> = doc.related_pages.iter().filter(|p| !p.trim().is_empty()).collect();
        if !related.is_empty() {
            writeln!(out, "        <div class=\"section\">")?;
            writeln!(out, "            <h2>Related Pages</h2>")?;
            writeln!(out, "            <ul class=\"related-list\">")?;
            for page in related {
                writeln!(out, "                <li>{}</li>", esc(page))?;
            }
            writeln!(out, "            </ul>")?;
            writeln!(out, "        </div>")?;
        }

        writeln!(out, "        </article>")?;
        writeln!(out, "    </main>")?;
        self.footer(out)
    }
}

fn count_label(ty: &TypeDoc) -> String {
    let n = ty.constructors.len();
    format!("{n} constructor{}", if n == 1 { "" } else { "s" })
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Minimal stylesheet shipped with every tree.
pub(crate) const STYLESHEET: &str = "\
:root { --bg: #fff; --bg-secondary: #f6f8fa; --text: #1f2328; --text-secondary: #59636e; --border: #d1d9e0; --accent: #0969da; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
.container { max-width: 960px; margin: 0 auto; padding: 0 16px; }
header { border-bottom: 1px solid var(--border); padding: 12px 0; }
header nav a { margin-right: 12px; }
a { color: var(--accent); text-decoration: none; }
.item { display: flex; gap: 16px; padding: 8px 0; border-bottom: 1px solid var(--border); }
.item-name { font-weight: 600; min-width: 280px; }
.item-desc { color: var(--text-secondary); }
.badge { display: inline-block; padding: 2px 8px; border-radius: 10px; background: var(--bg-secondary); font-size: 12px; }
.code-block, .example-code { background: var(--bg-secondary); padding: 12px; border-radius: 6px; overflow-x: auto; font-family: monospace; }
.layer { text-align: right; font-size: 11px; color: var(--text-secondary); }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid var(--border); }
.keyword { color: #cf222e; } .comment { color: #6e7781; } .string { color: #0a3069; }
.number { color: #0550ae; } .type { color: #953800; } .function { color: #8250df; }
footer { margin-top: 48px; border-top: 1px solid var(--border); padding: 24px 0; color: var(--text-secondary); font-size: 13px; }
";
