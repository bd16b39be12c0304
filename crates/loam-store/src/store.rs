//! The repository itself.

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::node::Node;
use crate::path::{parse_key, Segment};
use indexmap::IndexMap;
use std::time::SystemTime;

/// A tree of [`Node`]s addressed by dotted keys, with per-key expiry.
///
/// The root is always a node (an empty map to begin with); the empty
/// key addresses it directly. Expiry is lazy: every access first
/// evicts the keys whose deadline has passed according to the injected
/// [`Clock`], which is why read access also takes `&mut self`.
#[derive(Clone, Debug)]
pub struct Store<T, C: Clock = SystemClock> {
    root: Node<T>,
    expirations: IndexMap<String, SystemTime>,
    clock: C,
}

impl<T> Store<T, SystemClock> {
    /// An empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T> Default for Store<T, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> Store<T, C> {
    /// An empty store reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            root: Node::map(),
            expirations: IndexMap::new(),
            clock,
        }
    }

    /// The injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The node at `key`, or `None` if the path resolves to nothing.
    ///
    /// The empty key returns the root.
    pub fn fetch(&mut self, key: &str) -> Option<&Node<T>> {
        self.evict_expired();
        let mut node = &self.root;
        for segment in parse_key(key) {
            node = node.child(&segment)?;
        }
        Some(node)
    }

    /// Write `value` at `key`, returning the value it replaced.
    ///
    /// Every segment but the last must already resolve to a container
    /// of the matching kind; a missing or mismatched parent is
    /// [`StoreError::MissingPath`]. Writing one past the end of a list
    /// appends; further out is [`StoreError::IndexOutOfRange`]. The
    /// empty key replaces the whole tree.
    pub fn put(
        &mut self,
        key: &str,
        value: impl Into<Node<T>>,
    ) -> Result<Option<Node<T>>, StoreError> {
        self.evict_expired();
        let value = value.into();

        let mut path = parse_key(key);
        let Some(terminal) = path.pop() else {
            return Ok(Some(std::mem::replace(&mut self.root, value)));
        };

        let parent = self
            .node_mut(&path)
            .ok_or_else(|| StoreError::MissingPath {
                key: key.to_string(),
            })?;

        match (parent, terminal) {
            (Node::Map(entries), Segment::Key(map_key)) => Ok(entries.insert(map_key, value)),
            (Node::List(items), Segment::Index(index)) => {
                if index < items.len() {
                    Ok(Some(std::mem::replace(&mut items[index], value)))
                } else if index == items.len() {
                    items.push(value);
                    Ok(None)
                } else {
                    Err(StoreError::IndexOutOfRange {
                        key: key.to_string(),
                        index,
                        len: items.len(),
                    })
                }
            }
            _ => Err(StoreError::MissingPath {
                key: key.to_string(),
            }),
        }
    }

    /// Remove the node at `key`, returning it.
    ///
    /// Removing a list element shifts the elements after it down, and
    /// any expiry deadline recorded for the exact key is dropped with
    /// it. The empty key resets the store to an empty map. Missing
    /// paths remove nothing.
    pub fn remove(&mut self, key: &str) -> Option<Node<T>> {
        self.evict_expired();
        self.remove_at(key)
    }

    /// Set the expiry deadline for `key`.
    ///
    /// The entry is evicted on the first access strictly after the
    /// deadline. Expiring a key that does not exist is allowed and has
    /// no effect until something is stored there.
    pub fn expire(&mut self, key: &str, at: SystemTime) {
        self.expirations.insert(key.to_string(), at);
    }

    /// The recorded expiry deadline for `key`, if any.
    pub fn deadline(&self, key: &str) -> Option<SystemTime> {
        self.expirations.get(key).copied()
    }

    fn node_mut(&mut self, path: &[Segment]) -> Option<&mut Node<T>> {
        let mut node = &mut self.root;
        for segment in path {
            node = node.child_mut(segment)?;
        }
        Some(node)
    }

    fn remove_at(&mut self, key: &str) -> Option<Node<T>> {
        self.expirations.shift_remove(key);

        let mut path = parse_key(key);
        let Some(terminal) = path.pop() else {
            return Some(std::mem::replace(&mut self.root, Node::map()));
        };

        let parent = self.node_mut(&path)?;
        match (parent, terminal) {
            (Node::Map(entries), Segment::Key(map_key)) => entries.shift_remove(&map_key),
            (Node::List(items), Segment::Index(index)) if index < items.len() => {
                Some(items.remove(index))
            }
            _ => None,
        }
    }

    fn evict_expired(&mut self) {
        let now = self.clock.now();
        let stale: Vec<String> = self
            .expirations
            .iter()
            .filter(|(_, &deadline)| now > deadline)
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            self.remove_at(&key);
        }
    }
}
