/// An optional marker inside a field type, e.g. `flags.0` in `flags.0?true`.
///
/// The bit index is kept for documentation only; the model treats any
/// flagged field simply as optional.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flag {
    /// The name of the header field that holds this bit (usually `"flags"`).
    pub name: String,
    /// The bit index (0-based).
    pub index: u32,
}

impl Flag {
    /// Splits `name.N?Rest` into the flag and `Rest`.
    ///
    /// Returns `None` when `raw` carries no well-formed optional marker.
    pub fn split_prefix(raw: &str) -> Option<(Flag, &str)> {
        let (flag_part, rest) = raw.split_once('?')?;
        let (name, index) = flag_part.split_once('.')?;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let index = index.parse().ok()?;
        Some((Flag { name: name.to_owned(), index }, rest))
    }
}
