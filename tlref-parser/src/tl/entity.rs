use std::fmt;
use std::str::FromStr;

use crate::errors::{FieldParseError, ParseError};
use crate::tl::{Field, Kind};

/// A single TL declaration, either a constructor or a method.
///
/// For example:
/// ```text
/// inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
/// ```
/// becomes an `Entity` with `name = "inputPeerUser"`, `id = 0xdde8a54c`,
/// `fields = [user_id:long, access_hash:long]` and `result_type = "InputPeer"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Full name, possibly namespaced (e.g. `"messages.sendMessage"`).
    pub name: String,

    /// Whether this is a data constructor or an RPC method.
    pub kind: Kind,

    /// 32-bit constructor ID parsed from `#XXXXXXXX`.
    pub id: u32,

    /// Ordered list of fields, header fields included.
    pub fields: Vec<Field>,

    /// The result type name (e.g. `"InputPeer"`); empty when the
    /// declaration had no `= Type` part.
    pub result_type: String,

    /// The declaration text, trimmed and without the trailing `;`.
    pub raw: String,
}

impl Entity {
    /// The namespace part of the name, split on the last dot.
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(ns, _)| ns)
    }

    /// The name without its namespace.
    pub fn local_name(&self) -> &str {
        self.name.rsplit_once('.').map_or(self.name.as_str(), |(_, n)| n)
    }

    /// Fields shown in documentation and examples (headers excluded).
    pub fn displayable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_header())
    }

    /// Displayable fields without an optional marker, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.displayable_fields().filter(|f| !f.optional())
    }

    /// Displayable fields guarded by a flag bit, in declaration order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &Field> {
        self.displayable_fields().filter(|f| f.optional())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Entity {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let raw = line.trim();
        let raw = raw.strip_suffix(';').unwrap_or(raw).trim_end();
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        // Head is `name#id`, ending at the first space or `=`
        let head_end = raw
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(raw.len());
        let (head, rest) = raw.split_at(head_end);

        let (name, hex) = head.split_once('#').ok_or(ParseError::MissingId)?;
        if !is_valid_name(name) {
            return Err(ParseError::InvalidName);
        }
        // Only the leading hex run is the id; anything after it is ignored
        let hex_end = hex.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(hex.len());
        let id = u32::from_str_radix(&hex[..hex_end], 16).map_err(ParseError::InvalidId)?;

        let (params, result_type) = match rest.split_once('=') {
            Some((p, ty)) => (p, ty.trim()),
            None => (rest, ""),
        };

        let fields = match parse_fields(params) {
            Ok(fields) => fields,
            Err(e) => {
                log::debug!("[schema] {name}: unparsable field list ({e}), keeping declaration without fields");
                Vec::new()
            }
        };

        Ok(Entity {
            name: name.to_owned(),
            kind: Kind::Constructor, // loader sets the real kind
            id,
            fields,
            result_type: result_type.to_owned(),
            raw: raw.to_owned(),
        })
    }
}

fn parse_fields(params: &str) -> Result<Vec<Field>, FieldParseError> {
    let mut fields = Vec::new();
    for token in params.split_whitespace() {
        match token.parse::<Field>() {
            Ok(field) => fields.push(field),
            // `{X:Type}` introduces a generic, not a field
            Err(FieldParseError::TypeDef { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(fields)
}

/// `ident` or `ident.ident`, where `ident` is `[a-zA-Z_][a-zA-Z0-9_]*`.
fn is_valid_name(name: &str) -> bool {
    fn is_ident(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    match name.split_once('.') {
        Some((ns, local)) => is_ident(ns) && is_ident(local),
        None => is_ident(name),
    }
}
