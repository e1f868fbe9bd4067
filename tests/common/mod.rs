//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use scatter_editor::{Point, PointSet};

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Collection with three points at the corners and centre of [0, 100]
pub fn sample_points() -> PointSet {
    PointSet::from_points([
        Point::new("a", 0.0, 0.0, "Origin"),
        Point::new("b", 50.0, 50.0, "Centre"),
        Point::new("c", 100.0, 100.0, "Corner"),
    ])
}
