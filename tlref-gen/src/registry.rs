//! The curated table of representative implementations used by examples.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Hand-maintained choices of which constructor illustrates an abstract type.
///
/// Passed explicitly to the synthesizer; tests build small tables with
/// [`ExampleRegistry::empty`] and [`ExampleRegistry::with_implementation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleRegistry {
    /// Abstract type name → TL name of its representative constructor.
    #[serde(default)]
    pub implementations: BTreeMap<String, String>,
    /// Constructor TL name → field name → literal used instead of the
    /// synthesized value.
    #[serde(default)]
    pub field_values: BTreeMap<String, BTreeMap<String, String>>,
}

/// (abstract type, representative constructor)
const IMPLEMENTATIONS: &[(&str, &str)] = &[
    ("InputMedia",              "inputMediaPhoto"),
    ("InputPeer",               "inputPeerUser"),
    ("InputUser",               "inputUserSelf"),
    ("InputChannel",            "inputChannel"),
    ("InputDocument",           "inputDocument"),
    ("InputPhoto",              "inputPhoto"),
    ("InputFile",               "inputFile"),
    ("InputGeoPoint",           "inputGeoPoint"),
    ("InputChatPhoto",          "inputChatUploadedPhoto"),
    ("InputNotifyPeer",         "inputNotifyPeer"),
    ("InputPrivacyKey",         "inputPrivacyKeyStatusTimestamp"),
    ("InputPrivacyRule",        "inputPrivacyValueAllowAll"),
    ("ReplyMarkup",             "replyKeyboardMarkup"),
    ("InputBotInlineMessage",   "inputBotInlineMessageText"),
    ("InputBotInlineResult",    "inputBotInlineResult"),
    ("InputStickeredMedia",     "inputStickeredMediaPhoto"),
    ("InputWebFileLocation",    "inputWebFileLocation"),
    ("InputSecureFile",         "inputSecureFileUploaded"),
    ("InputEncryptedFile",      "inputEncryptedFileUploaded"),
    ("MessageEntity",           "messageEntityBold"),
    ("KeyboardButton",          "keyboardButton"),
    ("Update",                  "updateNewMessage"),
    ("Chat",                    "chat"),
    ("User",                    "user"),
    ("Message",                 "message"),
    ("InputReplyTo",            "inputReplyToMessage"),
    ("InputQuickReplyShortcut", "inputQuickReplyShortcut"),
    ("SuggestedPost",           "suggestedPost"),
];

/// (constructor, field, literal)
const FIELD_VALUES: &[(&str, &str, &str)] = &[
    // Telegram's service account
    ("inputPeerUser",      "user_id",     "int64(777000)"),
    ("inputUser",          "user_id",     "int64(777000)"),
    ("inputPeerChannel",   "channel_id",  "int64(1234567890)"),
    ("inputChannel",       "channel_id",  "int64(1234567890)"),
    ("inputFile",          "parts",       "3"),
    ("inputFile",          "name",        "\"upload.dat\""),
    ("inputGeoPoint",      "lat",         "40.7128"),
    ("inputGeoPoint",      "long",        "-74.0060"),
    ("messageEntityBold",  "offset",      "0"),
    ("messageEntityBold",  "length",      "11"),
    ("keyboardButton",     "text",        "\"Click Me\""),
];

impl Default for ExampleRegistry {
    fn default() -> Self {
        Self::curated()
    }
}

impl ExampleRegistry {
    /// The curated table.
    pub fn curated() -> Self {
        let mut registry = Self::empty();
        for (ty, ctor) in IMPLEMENTATIONS {
            registry.implementations.insert((*ty).to_owned(), (*ctor).to_owned());
        }
        for (ctor, field, value) in FIELD_VALUES {
            registry
                .field_values
                .entry((*ctor).to_owned())
                .or_default()
                .insert((*field).to_owned(), (*value).to_owned());
        }
        registry
    }

    /// A table with no entries: every complex type becomes a placeholder.
    pub fn empty() -> Self {
        Self {
            implementations: BTreeMap::new(),
            field_values: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the representative constructor of `ty`.
    pub fn with_implementation(mut self, ty: &str, ctor: &str) -> Self {
        self.implementations.insert(ty.to_owned(), ctor.to_owned());
        self
    }

    /// Adds (or replaces) a literal for one field of `ctor`.
    pub fn with_field_value(mut self, ctor: &str, field: &str, value: &str) -> Self {
        self.field_values
            .entry(ctor.to_owned())
            .or_default()
            .insert(field.to_owned(), value.to_owned());
        self
    }

    /// Representative constructor for the abstract type `ty`.
    pub fn implementation(&self, ty: &str) -> Option<&str> {
        self.implementations.get(ty).map(String::as_str)
    }

    /// Literal override for `field` of `ctor`.
    pub fn field_value(&self, ctor: &str, field: &str) -> Option<&str> {
        self.field_values.get(ctor)?.get(field).map(String::as_str)
    }

    /// Parses a registry from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads a registry file, replacing the curated table entirely.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json).map_err(|e| Error::json(path, e))
    }
}
