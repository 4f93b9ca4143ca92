use car_scene::scene::{EXHAUST_PIPES, spawn_smoke};
use cgmath::Vector4;

use crate::common::test_utils::seeded_rng;

mod common;

fn from_pipe(puffs: &[car_scene::data_structures::particle::Smoke], pipe: usize) -> usize {
    let [x, y, z] = EXHAUST_PIPES[pipe];
    let origin = Vector4::new(x, y, z, 0.0);
    puffs.iter().filter(|p| p.origin == origin).count()
}

#[test]
fn smoke_should_split_evenly_between_pipes() {
    let puffs = spawn_smoke(&mut seeded_rng(), 300);

    assert_eq!(puffs.len(), 300);
    assert_eq!(from_pipe(&puffs, 0), 150);
    assert_eq!(from_pipe(&puffs, 1), 150);
}

#[test]
fn smoke_should_keep_an_odd_remainder() {
    let puffs = spawn_smoke(&mut seeded_rng(), 7);
    assert_eq!(puffs.len(), 7);
    assert_eq!(from_pipe(&puffs, 0), 4);
    assert_eq!(from_pipe(&puffs, 1), 3);

    let single = spawn_smoke(&mut seeded_rng(), 1);
    assert_eq!(single.len(), 1);
    assert_eq!(from_pipe(&single, 0), 1);
}

#[test]
fn no_smoke_should_spawn_nothing() {
    assert!(spawn_smoke(&mut seeded_rng(), 0).is_empty());
}
