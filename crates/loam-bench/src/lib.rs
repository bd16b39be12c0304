//! Benchmark profiles for the Loam simulation engine.
//!
//! Provides pre-built seed worlds at known sizes:
//!
//! - [`reference_world`]: 64x64 grid (4K cells) at 35% density
//! - [`stress_world`]: 256x256 grid (~65K cells) at 35% density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_test_utils::fixtures::soup;
use loam_world::{World, WorldError};

/// Density used by both profiles, in cells per mille.
const SOUP_DENSITY: u64 = 350;

/// Build a reference benchmark world: 64x64 grid (4K cells).
pub fn reference_world(seed: u64) -> Result<World, WorldError> {
    World::new(&soup(64, 64, SOUP_DENSITY, seed))
}

/// Build a stress benchmark world: 256x256 grid (~65K cells).
///
/// Same density as [`reference_world`] at 16x the cell count.
pub fn stress_world(seed: u64) -> Result<World, WorldError> {
    World::new(&soup(256, 256, SOUP_DENSITY, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_world_constructs() {
        let world = reference_world(42).unwrap();
        assert_eq!(world.width(), 64);
        assert_eq!(world.height(), 64);
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_world(42).unwrap();
        let b = reference_world(42).unwrap();
        assert_eq!(a.cells(), b.cells());
    }
}
