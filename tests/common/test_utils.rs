#![allow(dead_code)]

use cgmath::{InnerSpace, Matrix4, Vector3};
use rand::{SeedableRng, rngs::StdRng};

pub const EPSILON: f32 = 1e-4;

/// Fixed seed so particle tests see the same population on every run.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn assert_near(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

pub fn assert_vec3_near(actual: Vector3<f32>, expected: Vector3<f32>, what: &str) {
    assert!(
        (actual - expected).magnitude() < EPSILON,
        "{what}: expected {expected:?}, got {actual:?}"
    );
}

pub fn assert_mat4_near(actual: Matrix4<f32>, expected: Matrix4<f32>, what: &str) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (col, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        for row in 0..4 {
            assert!(
                (a[row] - e[row]).abs() < EPSILON,
                "{what}: mismatch at column {col}, row {row}: expected {}, got {}",
                e[row],
                a[row]
            );
        }
    }
}
