//! Hierarchical key-value store with per-key expiry.
//!
//! A [`Store`] holds a single tree of [`Node`]s (leaves, string-keyed
//! maps, and integer-indexed lists) addressed by dotted path keys such
//! as `worlds.3.grid`. Keys can be given an expiry deadline; expired
//! entries are evicted lazily at the start of the next access.
//!
//! The store is an explicitly constructed repository, not process-wide
//! state: callers create one, pass it where it is needed, and inject a
//! [`Clock`] so expiry is deterministic under test (see
//! [`ManualClock`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod node;
pub mod path;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use node::Node;
pub use path::Segment;
pub use store::Store;
