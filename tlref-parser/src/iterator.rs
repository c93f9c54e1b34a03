//! Iterator that drives [`crate::parse_tl_file`].

use crate::tl::{Entity, Kind};

pub(crate) struct SchemaIter<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    /// Flips when we see `---functions---` / `---types---`.
    kind: Kind,
}

impl<'a> SchemaIter<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines().enumerate(),
            kind: Kind::Constructor,
        }
    }

    fn handle_separator(&mut self, line: &str) -> bool {
        match line {
            "---functions---" => { self.kind = Kind::Method;      true }
            "---types---"     => { self.kind = Kind::Constructor; true }
            _ => false,
        }
    }
}

impl Iterator for SchemaIter<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, line) = self.lines.next()?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if self.handle_separator(trimmed) {
                continue;
            }

            match trimmed.parse::<Entity>() {
                Ok(mut entity) => {
                    entity.kind = self.kind;
                    return Some(entity);
                }
                Err(e) => {
                    log::debug!("[schema] line {} skipped: {e}", idx + 1);
                }
            }
        }
    }
}

/// Extracts `N` from a `// LAYER N` comment line.
pub(crate) fn layer_marker(line: &str) -> Option<i32> {
    line.trim()
        .strip_prefix("//")?
        .trim_start()
        .strip_prefix("LAYER")?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_comments() {
        assert_eq!(layer_marker("// LAYER 224"), Some(224));
        assert_eq!(layer_marker("//LAYER 3"), Some(3));
        assert_eq!(layer_marker("// LAYER x"), None);
        assert_eq!(layer_marker("user#1 = User;"), None);
    }
}
