//! Core types for the Loam cellular automaton engine.
//!
//! This is the leaf crate with zero dependencies. It defines the value
//! types shared across the Loam workspace: the rectangular [`Grid`] and
//! its construction invariants, the [`Generation`] counter, and the
//! [`WorldState`] lifecycle verdict.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod state;

pub use error::GridError;
pub use grid::Grid;
pub use id::Generation;
pub use state::WorldState;
