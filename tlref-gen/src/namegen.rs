//! Functions that convert TL names to target-language (Go) identifiers.

use std::collections::HashMap;
use std::sync::RwLock;

use tlref_parser::tl::{Primitive, TypeRef};

// ─── Mangling ─────────────────────────────────────────────────────────────────

/// Converts a TL name into a capitalized word concatenation.
///
/// The name is split on `.` and `_`, each segment is split into words on
/// case and digit boundaries, and every word is capitalized:
///
/// * `messages.sendMessage` → `MessagesSendMessage`
/// * `user_id` → `UserId`
/// * `HTTPServer` → `HttpServer`
/// * `int64` → `Int64`
pub fn mangle(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split(['.', '_']) {
        let words = split_words(segment);
        if words.is_empty() {
            out.push_str(&capitalize(segment));
        } else {
            for word in words {
                out.push_str(&capitalize(word));
            }
        }
    }
    out
}

/// Splits one segment into words, scanning left to right. At each position
/// the first matching rule wins:
///
/// 1. one optional uppercase letter followed by a run of lowercase letters;
/// 2. a run of uppercase letters that ends before an uppercase+lowercase
///    pair, a digit, a non-word character or the end (so `HTTPServer`
///    becomes `HTTP` + `Server`);
/// 3. a run of digits.
///
/// Characters matching none of the rules are skipped.
fn split_words(segment: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let n = chars.len();
    let byte_at = |i: usize| chars.get(i).map_or(segment.len(), |&(b, _)| b);
    let is_lower = |i: usize| i < n && chars[i].1.is_ascii_lowercase();
    let is_upper = |i: usize| i < n && chars[i].1.is_ascii_uppercase();
    let is_digit = |i: usize| i < n && chars[i].1.is_ascii_digit();

    let mut words = Vec::new();
    let mut i = 0;
    while i < n {
        // Rule 1
        let start_lower = if is_upper(i) && is_lower(i + 1) {
            Some(i + 1)
        } else if is_lower(i) {
            Some(i)
        } else {
            None
        };
        if let Some(mut j) = start_lower {
            while is_lower(j) {
                j += 1;
            }
            words.push(&segment[byte_at(i)..byte_at(j)]);
            i = j;
            continue;
        }

        // Rule 2, backing off from the longest uppercase run
        if is_upper(i) {
            let mut end = i;
            while is_upper(end) {
                end += 1;
            }
            let boundary = |k: usize| {
                k == n
                    || is_digit(k)
                    || !(chars[k].1.is_alphanumeric() || chars[k].1 == '_')
                    || (is_upper(k) && is_lower(k + 1))
            };
            if let Some(k) = (i + 1..=end).rev().find(|&k| boundary(k)) {
                words.push(&segment[byte_at(i)..byte_at(k)]);
                i = k;
                continue;
            }
        }

        // Rule 3
        if is_digit(i) {
            let mut j = i;
            while is_digit(j) {
                j += 1;
            }
            words.push(&segment[byte_at(i)..byte_at(j)]);
            i = j;
            continue;
        }

        i += 1;
    }
    words
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ─── Memoization ──────────────────────────────────────────────────────────────

/// Memoizing wrapper around [`mangle`], safe to share across threads.
///
/// The same names recur across fields, result types and examples, so the
/// pipeline mangles through one shared cache.
#[derive(Debug, Default)]
pub struct NameCache {
    names: RwLock<HashMap<String, String>>,
}

impl NameCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Same result as [`mangle`], served from the cache when possible.
    pub fn mangle(&self, name: &str) -> String {
        if let Some(hit) = self.names.read().ok().and_then(|m| m.get(name).cloned()) {
            return hit;
        }
        let mangled = mangle(name);
        // A poisoned lock only costs us the memo entry
        if let Ok(mut names) = self.names.write() {
            names.entry(name.to_owned()).or_insert_with(|| mangled.clone());
        }
        mangled
    }

    /// Number of memoized names.
    pub fn len(&self) -> usize {
        self.names.read().map_or(0, |m| m.len())
    }

    /// `true` when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── Go type rendering ────────────────────────────────────────────────────────

/// Map a TL primitive to the Go built-in type used by the client library.
pub(crate) fn builtin_type(p: Primitive) -> &'static str {
    match p {
        Primitive::String => "string",
        Primitive::Int    => "int32",
        Primitive::Long   => "int64",
        Primitive::Double => "float64",
        Primitive::Bytes  => "[]byte",
        Primitive::Bool   => "bool",
        Primitive::Int128 => "[16]byte",
        Primitive::Int256 => "[32]byte",
    }
}

/// Go type expression for a classified TL type, e.g. `[]tg.InputPeer`.
pub fn go_type(ty: &TypeRef, names: &NameCache) -> String {
    match ty {
        TypeRef::Primitive(p) => builtin_type(*p).to_owned(),
        TypeRef::Vector(inner) => format!("[]{}", go_type(inner, names)),
        TypeRef::Named(name) => format!("tg.{}", names.mangle(name)),
        TypeRef::Unknown(_) => "any".to_owned(),
    }
}

/// What a call returns, as shown in the `// result is …` line.
pub fn result_type(result: &str, names: &NameCache) -> String {
    if result.is_empty() {
        return "*tg.Response".to_owned();
    }
    match TypeRef::classify(result) {
        TypeRef::Named(name) => format!("*tg.{}", names.mangle(&name)),
        other => go_type(&other, names),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangle_basic() {
        assert_eq!(mangle("user_empty"), "UserEmpty");
        assert_eq!(mangle("inputPeerSelf"), "InputPeerSelf");
        assert_eq!(mangle("some_OK_name"), "SomeOkName");
    }

    #[test]
    fn mangle_namespaced() {
        assert_eq!(mangle("messages.sendMessage"), "MessagesSendMessage");
        assert_eq!(mangle("upload.fileCdnRedirect"), "UploadFileCdnRedirect");
    }

    #[test]
    fn mangle_acronyms_and_digits() {
        assert_eq!(mangle("HTTPServer"), "HttpServer");
        assert_eq!(mangle("inputMediaGeoLive2"), "InputMediaGeoLive2");
        assert_eq!(mangle("int64"), "Int64");
        assert_eq!(mangle("ttl_seconds"), "TtlSeconds");
        // `I` alone is the acronym run, `Ds` the capitalized word after it
        assert_eq!(mangle("peerIDs"), "PeerIDs");
    }

    #[test]
    fn mangle_symbol_only_segments() {
        assert_eq!(mangle(""), "");
        assert_eq!(mangle("a__b"), "AB");
        assert_eq!(mangle("#"), "#");
        assert_eq!(mangle("Vector<int>"), "VectorInt");
    }

    #[test]
    fn mangle_is_idempotent() {
        for name in ["inputPeerUser", "messages.sendMessage", "user_id", "HTTPServer", "photoSize2"] {
            let once = mangle(name);
            assert_eq!(mangle(&once), once, "{name}");
        }
    }

    #[test]
    fn mangle_has_no_separators() {
        for name in ["a.b_c", "_", ".", "x._.y", "messages.get_dialogs", "__init__"] {
            let m = mangle(name);
            assert!(!m.contains('.') && !m.contains('_'), "{name} -> {m}");
        }
    }

    #[test]
    fn cache_matches_pure_function() {
        let cache = NameCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.mangle("inputPeerUser"), mangle("inputPeerUser"));
        assert_eq!(cache.mangle("inputPeerUser"), "InputPeerUser");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn go_types() {
        let cache = NameCache::new();
        assert_eq!(go_type(&TypeRef::classify("Vector<long>"), &cache), "[]int64");
        assert_eq!(go_type(&TypeRef::classify("Vector<InputPeer>"), &cache), "[]tg.InputPeer");
        assert_eq!(result_type("messages.Messages", &cache), "*tg.MessagesMessages");
        assert_eq!(result_type("Vector<User>", &cache), "[]tg.User");
        assert_eq!(result_type("Bool", &cache), "bool");
    }
}
