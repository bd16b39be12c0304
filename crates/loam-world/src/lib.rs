//! Toroidal Life-like world engine with lineage classification.
//!
//! A [`World`] holds a rectangular grid of binary cells on a wrapping
//! (toroidal) surface and advances it generation by generation under a
//! parsed [`Rulestring`](loam_rule::Rulestring). Every superseded grid
//! and state is recorded in the world's [`Lineage`], which after each
//! step classifies the simulation as still `Alive`, `Dead` (extinct),
//! or `Looped` (settled into a periodic cycle).
//!
//! The engine is single-threaded and synchronous: [`World::tick`] and
//! [`World::run`] are plain blocking calls, and each `World` owns its
//! grid and lineage buffers exclusively. `run` has no internal bound;
//! callers embedding the engine in a request-serving context should use
//! [`World::run_capped`] or [`World::tick_to`] and check their own
//! deadlines between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod lineage;
pub mod torus;
pub mod world;

pub use error::WorldError;
pub use lineage::Lineage;
pub use torus::Torus;
pub use world::World;
