//! Ring Escape - a ball bouncing out of a nest of rotating, gapped rings
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball, rings, particles, collisions)
//! - `renderer`: Drawing surface abstraction and mesh generation
//! - `platform`: Host-side helpers (fixed-rate frame clock)
//! - `settings`: Tunable constants, JSON loading and validation

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::{ColorMode, Rgb, Settings};

use glam::Vec2;
use std::f32::consts::TAU;

/// Simulation timing constants
pub mod consts {
    /// Reference frame rate; every simulation quantity is expressed per frame
    pub const FRAME_RATE: u32 = 60;
    /// Maximum frames run for a single host update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap (seconds) a host update will try to catch up on
    pub const MAX_FRAME_GAP: f32 = 0.1;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Check whether `angle` lies in the closed interval from `start` to `end`.
///
/// When `start > end` the interval wraps through zero.
#[inline]
pub fn angle_in_range(angle: f32, start: f32, end: f32) -> bool {
    if start > end {
        angle >= start || angle <= end
    } else {
        angle >= start && angle <= end
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta), theta in [0, 2π)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_angle(pos.y.atan2(pos.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_basic() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
    }

    #[test]
    fn test_normalize_angle_tiny_negative() {
        let a = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&a));
    }

    #[test]
    fn test_angle_in_range_wraparound() {
        assert!(angle_in_range(6.0, 5.5, 0.5));
        assert!(angle_in_range(0.2, 5.5, 0.5));
        assert!(!angle_in_range(3.0, 5.5, 0.5));
    }

    #[test]
    fn test_angle_in_range_plain() {
        assert!(angle_in_range(1.5, 1.25, 1.75));
        assert!(angle_in_range(1.25, 1.25, 1.75));
        assert!(!angle_in_range(2.0, 1.25, 1.75));
    }

    #[test]
    fn test_polar_roundtrip() {
        let p = polar_to_cartesian(10.0, 1.0);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 10.0).abs() < 1e-4);
        assert!((theta - 1.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn normalize_angle_in_range(x in -1.0e4f32..1.0e4) {
            let a = normalize_angle(x);
            prop_assert!((0.0..TAU).contains(&a));
        }

        #[test]
        fn normalize_angle_idempotent(x in -1.0e4f32..1.0e4) {
            let a = normalize_angle(x);
            prop_assert_eq!(normalize_angle(a), a);
        }
    }
}
