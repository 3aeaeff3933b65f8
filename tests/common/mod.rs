#![allow(dead_code)]

use rand::Rng;
use vector2::Vector2;

pub const EPSILON: f32 = 1e-4;

/// Routes library warnings to the test output, set `RUST_LOG=warn` to see them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random vectors with components in a range where f32 rounding stays well below [`EPSILON`]
pub fn random_vectors(count: usize) -> Vec<Vector2> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            Vector2::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            )
        })
        .collect()
}

pub fn random_non_zero_scalars(count: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let s: f32 = rng.random_range(0.01..100.0);
            if rng.random_bool(0.5) { s } else { -s }
        })
        .collect()
}

pub fn assert_vector_eq(actual: Vector2, expected: Vector2, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "expected {expected}, got {actual}"
    );
}
