//! Shared fixtures for Loam development.
//!
//! Well-known seed patterns with documented long-run behavior, used by
//! unit, integration, and bench code across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    blinker_5x5, block_4x4, isolated_pair_4x4, reference_4x4, reference_4x4_after_one_tick, soup,
};
