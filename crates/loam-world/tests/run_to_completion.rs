//! Integration test: full run-to-completion behavior on known seeds.
//!
//! Exercises the public surface end to end: construct from fixture
//! rows, run until a terminal verdict, and check the verdict, the
//! generation it arrived at, and the lineage recorded along the way.

use loam_core::{Generation, WorldState};
use loam_test_utils::fixtures;
use loam_world::World;

#[test]
fn isolated_cells_die_out() {
    let mut world = World::new(&fixtures::isolated_pair_4x4()).unwrap();
    assert_eq!(world.run(), WorldState::Dead);
    assert_eq!(world.generation(), Generation(1));
    assert!(world.cells().is_extinct());
    assert_eq!(world.history(), &[WorldState::Alive]);
}

#[test]
fn blinker_settles_into_a_period_two_loop() {
    let mut world = World::new(&fixtures::blinker_5x5()).unwrap();
    assert_eq!(world.run(), WorldState::Looped);
    assert_eq!(world.generation(), Generation(4));
    assert_eq!(world.lineage().period(), Some(2));

    // The geology alternates between the two blinker phases.
    let geology = world.lineage().geology();
    assert_eq!(geology.len(), 4);
    assert_eq!(geology[0], geology[2]);
    assert_eq!(geology[1], geology[3]);
    assert_ne!(geology[0], geology[1]);
    assert_eq!(world.cells(), &geology[0]);
}

#[test]
fn block_settles_into_a_period_one_loop() {
    let mut world = World::new(&fixtures::block_4x4()).unwrap();
    assert_eq!(world.run(), WorldState::Looped);
    assert_eq!(world.generation(), Generation(2));
    assert_eq!(world.lineage().period(), Some(1));
    assert_eq!(
        world.cells().to_rows(),
        fixtures::block_4x4(),
        "a still life never changes content"
    );
}

#[test]
fn reference_seed_first_transition() {
    let mut world = World::new(&fixtures::reference_4x4()).unwrap();
    world.tick();
    assert_eq!(
        world.cells().to_rows(),
        fixtures::reference_4x4_after_one_tick()
    );
}

#[test]
fn identical_seeds_run_identically() {
    let mut a = World::new(&fixtures::soup(12, 12, 350, 42)).unwrap();
    let mut b = World::new(&fixtures::soup(12, 12, 350, 42)).unwrap();
    let verdict_a = a.run_capped(200);
    let verdict_b = b.run_capped(200);
    assert_eq!(verdict_a, verdict_b);
    assert_eq!(a.generation(), b.generation());
    assert_eq!(a.cells(), b.cells());
    assert_eq!(a.history(), b.history());
}

#[test]
fn capped_runs_leave_a_consistent_world() {
    for seed in 0..8 {
        let mut world = World::new(&fixtures::soup(4, 4, 400, seed)).unwrap();
        let verdict = world.run_capped(500);
        assert_eq!(verdict, world.state());
        assert!(world.generation().0 <= 500);
        match verdict {
            WorldState::Dead => assert!(world.cells().is_extinct()),
            WorldState::Looped => assert!(world.lineage().period().is_some()),
            WorldState::Alive => assert_eq!(world.generation(), Generation(500)),
        }
    }
}

#[test]
fn history_and_geology_stay_aligned_through_a_run() {
    let mut world = World::new(&fixtures::soup(6, 6, 350, 3)).unwrap();
    world.run_capped(100);
    let generation = world.generation().0 as usize;
    assert_eq!(world.history().len(), generation);
    assert_eq!(world.lineage().geology().len(), generation);
    // Every recorded state before the last is non-terminal; a terminal
    // verdict ends the run before it can be superseded.
    for state in &world.history()[..generation.saturating_sub(1)] {
        assert_eq!(*state, WorldState::Alive);
    }
}
