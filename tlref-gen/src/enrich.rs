//! Optional documentation text scraped from the published API pages.
//!
//! Everything here is additive: an entity without a record is documented
//! from the schema alone.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tlref_parser::tl::Kind;

use crate::errors::Error;

/// One error a method may return.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorInfo {
    /// HTTP-like status code, as printed on the page (e.g. `"400"`).
    pub code: String,
    /// Error name, e.g. `PEER_ID_INVALID`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Human-readable explanation.
    pub description: String,
}

/// A parameter row from a documentation page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichedField {
    /// Parameter name.
    pub name: String,
    /// Type as printed on the page.
    #[serde(rename = "type")]
    pub ty: String,
    /// Parameter description.
    pub description: String,
}

/// Everything the page fetcher found out about one entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichedEntry {
    /// Full TL name.
    pub name: String,
    /// `"constructor"` or `"method"`.
    pub category: String,
    /// Page summary.
    pub description: String,
    /// Parameter table.
    pub fields: Vec<EnrichedField>,
    /// Result type as printed on the page.
    pub result_type: String,
    /// Subset of `users`, `bots`.
    pub can_be_used_by: Vec<String>,
    /// Whether the method can be used over a business connection.
    pub business_connection: bool,
    /// Possible errors.
    pub errors: Vec<ErrorInfo>,
    /// Titles of related pages.
    pub related_pages: Vec<String>,
    /// The declaration as printed on the page.
    pub raw_tl: String,
}

impl EnrichedEntry {
    /// Description of the parameter called `name`, if the page had one.
    pub fn field_description(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.description.as_str())
            .filter(|d| !d.is_empty())
    }
}

/// On-disk layout written by the fetcher.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnrichmentDoc {
    constructors: Vec<EnrichedEntry>,
    methods: Vec<EnrichedEntry>,
}

/// Enrichment records keyed by kind and TL name.
#[derive(Clone, Debug, Default)]
pub struct Enrichment {
    constructors: HashMap<String, EnrichedEntry>,
    methods: HashMap<String, EnrichedEntry>,
}

impl Enrichment {
    /// Indexes records; a later record for the same name wins.
    pub fn from_entries(
        constructors: impl IntoIterator<Item = EnrichedEntry>,
        methods: impl IntoIterator<Item = EnrichedEntry>,
    ) -> Self {
        Self {
            constructors: constructors.into_iter().map(|e| (e.name.clone(), e)).collect(),
            methods: methods.into_iter().map(|e| (e.name.clone(), e)).collect(),
        }
    }

    /// Parses the fetcher's JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let doc: EnrichmentDoc = serde_json::from_str(json)?;
        Ok(Self::from_entries(doc.constructors, doc.methods))
    }

    /// Reads the fetcher's JSON document from `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let enrichment = Self::from_json(&json).map_err(|e| Error::json(path, e))?;
        log::info!(
            "[enrich] {} constructor and {} method records from {}",
            enrichment.constructors.len(),
            enrichment.methods.len(),
            path.display()
        );
        Ok(enrichment)
    }

    /// The record for an entity, if the fetcher produced one.
    pub fn get(&self, kind: Kind, name: &str) -> Option<&EnrichedEntry> {
        match kind {
            Kind::Constructor => self.constructors.get(name),
            Kind::Method => self.methods.get(name),
        }
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.constructors.len() + self.methods.len()
    }

    /// `true` when there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "constructors": [{"name": "inputPeerSelf", "description": "Defines the current user."}],
        "methods": [{
            "name": "messages.sendMessage",
            "category": "method",
            "fields": [{"name": "peer", "type": "InputPeer", "description": "The destination"}],
            "errors": [{"code": "400", "type": "PEER_ID_INVALID", "description": "Invalid peer."}],
            "can_be_used_by": ["users", "bots"]
        }],
        "metadata": {"total_constructors": 1}
    }"#;

    #[test]
    fn parses_fetcher_document() {
        let e = Enrichment::from_json(DOC).unwrap();
        assert_eq!(e.len(), 2);
        let send = e.get(Kind::Method, "messages.sendMessage").unwrap();
        assert_eq!(send.errors[0].ty, "PEER_ID_INVALID");
        assert_eq!(send.field_description("peer"), Some("The destination"));
        assert_eq!(send.field_description("message"), None);
        assert!(e.get(Kind::Constructor, "messages.sendMessage").is_none());
        assert_eq!(
            e.get(Kind::Constructor, "inputPeerSelf").unwrap().description,
            "Defines the current user."
        );
    }

    #[test]
    fn empty_document() {
        assert!(Enrichment::from_json("{}").unwrap().is_empty());
    }
}
