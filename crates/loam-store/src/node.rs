//! The stored value tree.

use crate::path::Segment;
use indexmap::IndexMap;

/// One node of the stored tree: a leaf payload, a string-keyed map, or
/// an integer-indexed list.
///
/// Maps preserve insertion order so listings and serializations are
/// stable across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<T> {
    /// A terminal payload.
    Leaf(T),
    /// A string-keyed mapping of child nodes.
    Map(IndexMap<String, Node<T>>),
    /// An ordered list of child nodes.
    List(Vec<Node<T>>),
}

impl<T> Node<T> {
    /// An empty map node.
    pub fn map() -> Self {
        Self::Map(IndexMap::new())
    }

    /// An empty list node.
    pub fn list() -> Self {
        Self::List(Vec::new())
    }

    /// The leaf payload, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// The child at `segment`, if this node is a container holding one.
    ///
    /// Index segments address lists only and key segments maps only; a
    /// segment of the wrong kind finds nothing.
    pub fn child(&self, segment: &Segment) -> Option<&Node<T>> {
        match (self, segment) {
            (Self::Map(entries), Segment::Key(key)) => entries.get(key),
            (Self::List(items), Segment::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    /// Mutable access to the child at `segment`.
    pub fn child_mut(&mut self, segment: &Segment) -> Option<&mut Node<T>> {
        match (self, segment) {
            (Self::Map(entries), Segment::Key(key)) => entries.get_mut(key),
            (Self::List(items), Segment::Index(index)) => items.get_mut(*index),
            _ => None,
        }
    }

    /// Number of children, or 0 for a leaf.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Map(entries) => entries.len(),
            Self::List(items) => items.len(),
        }
    }

    /// `true` when the node holds no children and no payload.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Map(entries) => entries.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T, const N: usize> From<[(&str, Node<T>); N]> for Node<T> {
    fn from(entries: [(&str, Node<T>); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, node)| (key.to_string(), node))
                .collect(),
        )
    }
}

impl<T, const N: usize> From<[Node<T>; N]> for Node<T> {
    fn from(items: [Node<T>; N]) -> Self {
        Self::List(items.into())
    }
}
