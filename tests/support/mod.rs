//! Test support library
//! Provides the classic sprocket arrangements as fixtures plus various
//! helper functions & utilities for tests.
#![allow(dead_code)]

use chaindrive::float_types::{EPSILON, Real};
use nalgebra::Point2;

/// The classic five-sprocket code-review-challenge arrangement.
pub const CHALLENGE: [[Real; 3]; 5] = [
    [0.0, 0.0, 16.0],
    [100.0, 0.0, 16.0],
    [100.0, 100.0, 12.0],
    [50.0, 50.0, 24.0],
    [0.0, 100.0, 12.0],
];

/// Two equal pulleys, the simplest possible belt.
pub const TWO_PULLEY: [[Real; 3]; 2] = [[0.0, 0.0, 26.0], [120.0, 0.0, 26.0]];

/// A large and a small pulley side by side.
pub const BIG_SMALL: [[Real; 3]; 2] = [[100.0, 100.0, 60.0], [220.0, 100.0, 14.0]];

/// Four sprockets on a square, traversed in a crossing order.
pub const SQUARE: [[Real; 3]; 4] = [
    [100.0, 100.0, 16.0],
    [100.0, 0.0, 24.0],
    [0.0, 100.0, 24.0],
    [0.0, 0.0, 16.0],
];

/// Eight sprockets forming a figure-eight-like path.
pub const FIGURE: [[Real; 3]; 8] = [
    [0.0, 0.0, 60.0],
    [44.0, 140.0, 16.0],
    [-204.0, 140.0, 16.0],
    [-160.0, 0.0, 60.0],
    [-112.0, 188.0, 12.0],
    [-190.0, 300.0, 30.0],
    [30.0, 300.0, 30.0],
    [-48.0, 188.0, 12.0],
];

/// Ten sprockets around a ring, alternating radii.
pub const RING_OF_TEN: [[Real; 3]; 10] = [
    [0.0, 128.0, 14.0],
    [46.17, 63.55, 10.0],
    [121.74, 39.55, 14.0],
    [74.71, -24.28, 10.0],
    [75.24, -103.55, 14.0],
    [0.0, -78.56, 10.0],
    [-75.24, -103.55, 14.0],
    [-74.71, -24.28, 10.0],
    [-121.74, 39.55, 14.0],
    [-46.17, 63.55, 10.0],
];

/// Sixteen scattered sprockets, the stress case.
pub const SCATTER: [[Real; 3]; 16] = [
    [367.0, 151.0, 12.0],
    [210.0, 75.0, 36.0],
    [57.0, 286.0, 38.0],
    [14.0, 181.0, 32.0],
    [91.0, 124.0, 18.0],
    [298.0, 366.0, 38.0],
    [141.0, 3.0, 52.0],
    [80.0, 179.0, 26.0],
    [313.0, 32.0, 26.0],
    [146.0, 280.0, 10.0],
    [126.0, 253.0, 8.0],
    [220.0, 184.0, 24.0],
    [135.0, 332.0, 8.0],
    [365.0, 296.0, 50.0],
    [248.0, 217.0, 8.0],
    [218.0, 392.0, 30.0],
];

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Comparison tolerance scaled to the magnitude of the compared values,
/// tracking the active scalar precision (`f32` vs `f64`).
pub fn tol(scale: Real) -> Real {
    EPSILON * scale.abs().max(1.0)
}

/// Point comparison with a per-coordinate tolerance.
pub fn approx_point(a: Point2<Real>, b: Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}
