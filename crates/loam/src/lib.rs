//! Loam: a Life-like cellular automaton engine with lineage
//! classification.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // A vertical blinker on a 5x5 grid under the classic B3/S23 rule.
//! let mut world = World::new(&[
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 1, 0, 0],
//!     vec![0, 0, 1, 0, 0],
//!     vec![0, 0, 1, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ]).unwrap();
//!
//! // The blinker oscillates with period 2; the lineage classifier
//! // confirms the cycle after two full periods.
//! assert_eq!(world.run(), WorldState::Looped);
//! assert_eq!(world.generation(), Generation(4));
//! assert_eq!(world.lineage().period(), Some(2));
//!
//! // The whole past is recorded and addressable by generation.
//! assert_eq!(world.history(), &[WorldState::Alive; 4]);
//! assert_eq!(world.cells_at(Generation(0)).unwrap(), &world.lineage().geology()[0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | `Grid`, `Generation`, `WorldState`, grid errors |
//! | [`rule`] | `loam-rule` | `Rulestring` parsing and digit sets |
//! | [`world`] | `loam-world` | `World`, `Torus`, `Lineage`, fingerprints |
//! | [`store`] | `loam-store` | Expiring hierarchical key-value repository |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid and state types (`loam-core`).
///
/// Contains the validated [`types::Grid`], the [`types::Generation`]
/// counter, and the [`types::WorldState`] verdict enum.
pub use loam_core as types;

/// Rulestring parsing (`loam-rule`).
///
/// [`rule::Rulestring`] parses `B<digits>/S<digits>` rule text into
/// birth and survival [`rule::DigitSet`]s.
pub use loam_rule as rule;

/// The simulation engine (`loam-world`).
///
/// [`world::World`] steps a grid on a wrapping surface, records its
/// [`world::Lineage`], and classifies the long-run outcome.
pub use loam_world as world;

/// Snapshot persistence (`loam-store`).
///
/// [`store::Store`] is a hierarchical key-value repository with
/// per-key expiry and an injectable [`store::Clock`].
pub use loam_store as store;

/// Common imports for typical Loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_core::{Generation, Grid, GridError, WorldState};
    pub use loam_rule::{Rulestring, RuleError};
    pub use loam_store::{Clock, Node, Store, StoreError};
    pub use loam_world::{Lineage, Torus, World, WorldError};
}
