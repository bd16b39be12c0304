//! Dotted path keys.

use std::fmt;

/// One step of a dotted path.
///
/// An all-digit segment addresses a list index, anything else a map
/// key, so `worlds.3.grid` reads the `grid` entry of the fourth element
/// of the `worlds` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A string key into a map node.
    Key(String),
    /// A numeric index into a list node.
    Index(usize),
}

impl Segment {
    fn parse(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            match text.parse() {
                Ok(index) => Self::Index(index),
                // Longer than usize; no list can be that long, but the
                // segment is still a well-formed key.
                Err(_) => Self::Key(text.to_string()),
            }
        } else {
            Self::Key(text.to_string())
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Split a dotted key into segments.
///
/// The empty key is the root and yields no segments.
pub fn parse_key(key: &str) -> Vec<Segment> {
    if key.is_empty() {
        return Vec::new();
    }
    key.split('.').map(Segment::parse).collect()
}
