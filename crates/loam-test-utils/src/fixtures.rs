//! Reusable seed patterns.
//!
//! Each fixture returns fresh nested rows ready for `World::new`, with
//! its long-run behavior stated so tests can assert against it:
//!
//! - [`reference_4x4`] — the documented one-tick vector seed.
//! - [`blinker_5x5`] — period-2 oscillator, loops at generation 4.
//! - [`block_4x4`] — still life, loops at generation 2.
//! - [`isolated_pair_4x4`] — two lone cells, extinct after one tick.
//! - [`soup`] — deterministic pseudo-random fill for sizing tests.

/// The 4x4 seed whose first transition is pinned as a reference vector
/// (see [`reference_4x4_after_one_tick`]).
pub fn reference_4x4() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 1, 0],
        vec![0, 0, 0, 0],
        vec![1, 0, 1, 0],
        vec![0, 0, 0, 0],
    ]
}

/// The grid [`reference_4x4`] becomes after exactly one tick under
/// `B3/S23`.
pub fn reference_4x4_after_one_tick() -> Vec<Vec<u8>> {
    vec![
        vec![0, 1, 0, 0],
        vec![1, 0, 1, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]
}

/// A vertical blinker centered on a 5x5 grid.
///
/// Oscillates with period 2 under `B3/S23`; a run-to-completion loop
/// reports `Looped` at generation 4, after two full periods.
pub fn blinker_5x5() -> Vec<Vec<u8>> {
    vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]
}

/// A 2x2 block still life in the top-left of a 4x4 grid.
///
/// Stable under `B3/S23`; a run-to-completion loop reports `Looped` at
/// generation 2, the earliest a period-1 cycle can be confirmed.
pub fn block_4x4() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 0, 0],
        vec![1, 1, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]
}

/// Two live cells with no live neighbours on a 4x4 grid.
///
/// Both die of underpopulation in a single tick under `B3/S23`, so a
/// run-to-completion loop reports `Dead` at generation 1.
pub fn isolated_pair_4x4() -> Vec<Vec<u8>> {
    vec![
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 0],
    ]
}

/// A deterministic pseudo-random fill at roughly `density` per mille.
///
/// Uses a fixed multiplicative mix of the seed and cell index, so the
/// same arguments always produce the same pattern without pulling in an
/// RNG dependency.
pub fn soup(width: usize, height: usize, density_per_mille: u64, seed: u64) -> Vec<Vec<u8>> {
    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let index = (y * width + x) as u64;
            let mut mixed = seed
                .wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
                .wrapping_mul(0xBF58_476D_1CE4_E5B9);
            mixed ^= mixed >> 31;
            row.push(u8::from(mixed % 1000 < density_per_mille));
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_core::Grid;

    #[test]
    fn fixtures_form_valid_grids() {
        for rows in [
            reference_4x4(),
            reference_4x4_after_one_tick(),
            blinker_5x5(),
            block_4x4(),
            isolated_pair_4x4(),
        ] {
            assert!(Grid::from_rows(&rows).is_ok());
        }
    }

    #[test]
    fn soup_is_deterministic() {
        assert_eq!(soup(16, 16, 300, 7), soup(16, 16, 300, 7));
        assert_ne!(soup(16, 16, 300, 7), soup(16, 16, 300, 8));
    }

    #[test]
    fn soup_density_is_plausible() {
        let live: usize = soup(64, 64, 500, 1)
            .iter()
            .flatten()
            .map(|&c| c as usize)
            .sum();
        let total = 64 * 64;
        assert!(live > total / 4 && live < 3 * total / 4);
    }
}
