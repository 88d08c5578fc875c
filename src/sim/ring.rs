//! Rotating gapped rings
//!
//! A ring is an annulus with one angular gap. The gap is fixed in the ring's
//! own frame and turns with the ring's rotation.

use glam::Vec2;
use std::f32::consts::TAU;

use super::arc::ArcBand;
use crate::settings::{Rgb, Settings};
use crate::{angle_in_range, normalize_angle};

/// Angular interval of a ring's gap, both ends in [0, 2π).
///
/// `start > end` means the gap straddles angle 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapInterval {
    pub start: f32,
    pub end: f32,
}

impl GapInterval {
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        angle_in_range(angle, self.start, self.end)
    }
}

/// A rotating annulus with a single gap
#[derive(Debug, Clone)]
pub struct Ring {
    pub center: Vec2,
    /// Centerline radius
    pub radius: f32,
    pub thickness: f32,
    /// Gap center in the ring's unrotated frame (radians)
    pub base_gap_angle: f32,
    /// Angular width of the gap (radians)
    pub gap_width: f32,
    /// Current rotation, kept in [0, 2π)
    pub rotation: f32,
    /// Signed rotation per frame (radians)
    pub rotation_speed: f32,
    pub color: Rgb,
}

impl Ring {
    pub fn new(
        center: Vec2,
        radius: f32,
        thickness: f32,
        base_gap_angle: f32,
        gap_width: f32,
        rotation_speed: f32,
        color: Rgb,
    ) -> Self {
        Self {
            center,
            radius,
            thickness,
            base_gap_angle,
            gap_width,
            rotation: 0.0,
            rotation_speed,
            color,
        }
    }

    /// Build ring `index` of `total` from settings
    pub fn from_settings(settings: &Settings, index: u32, total: u32) -> Self {
        Self::new(
            settings.center(),
            settings.ring_radius(index),
            settings.circle_thickness,
            settings.base_hole_angle,
            settings.hole_size,
            settings.ring_rotation_speed(index),
            settings.ring_color(index, total),
        )
    }

    /// Rotate by one frame
    pub fn advance(&mut self) {
        self.rotation = normalize_angle(self.rotation + self.rotation_speed);
    }

    /// Flip the rotation direction
    pub fn reverse(&mut self) {
        self.rotation_speed = -self.rotation_speed;
    }

    /// Radius the ball must stay inside of: the inner edge of the band
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    /// Gap center after rotation
    #[inline]
    pub fn effective_gap_angle(&self) -> f32 {
        normalize_angle(self.base_gap_angle + self.rotation)
    }

    pub fn gap_interval(&self) -> GapInterval {
        let effective = self.effective_gap_angle();
        GapInterval {
            start: normalize_angle(effective - self.gap_width / 2.0),
            end: normalize_angle(effective + self.gap_width / 2.0),
        }
    }

    /// The solid part of the ring as one or two non-wrapping bands
    pub fn solid_arcs(&self) -> Vec<ArcBand> {
        let gap = self.gap_interval();
        if gap.start < gap.end {
            vec![
                ArcBand::new(self.radius, self.thickness, gap.end, TAU),
                ArcBand::new(self.radius, self.thickness, 0.0, gap.start),
            ]
        } else {
            vec![ArcBand::new(self.radius, self.thickness, gap.end, gap.start)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(base_gap_angle: f32, gap_width: f32) -> Ring {
        Ring::new(Vec2::ZERO, 100.0, 10.0, base_gap_angle, gap_width, 0.1, [255, 0, 0])
    }

    #[test]
    fn test_gap_interval_unrotated() {
        let gap = ring(1.5, 0.5).gap_interval();
        assert!((gap.start - 1.25).abs() < 1e-5);
        assert!((gap.end - 1.75).abs() < 1e-5);
        assert!(!gap.wraps());
    }

    #[test]
    fn test_gap_interval_tracks_rotation() {
        let mut r = ring(1.5, 0.5);
        r.rotation = 1.0;
        let gap = r.gap_interval();
        assert!((gap.start - 2.25).abs() < 1e-5);
        assert!((gap.end - 2.75).abs() < 1e-5);
    }

    #[test]
    fn test_gap_interval_wraps_through_zero() {
        let gap = ring(0.0, 0.5).gap_interval();
        assert!(gap.wraps());
        assert!(gap.contains(0.0));
        assert!(gap.contains(TAU - 0.1));
        assert!(gap.contains(0.2));
        assert!(!gap.contains(3.0));
    }

    #[test]
    fn test_advance_normalizes() {
        let mut r = ring(1.5, 0.5);
        r.rotation = TAU - 0.05;
        r.advance();
        assert!((r.rotation - 0.05).abs() < 1e-4);

        r.reverse();
        r.advance();
        r.advance();
        assert!((r.rotation - (TAU - 0.15)).abs() < 1e-4);
    }

    #[test]
    fn test_collision_radius() {
        assert_eq!(ring(1.5, 0.5).collision_radius(), 95.0);
    }

    #[test]
    fn test_solid_arcs_plain_gap() {
        let arcs = ring(1.5, 0.5).solid_arcs();
        assert_eq!(arcs.len(), 2);
        assert!((arcs[0].theta_start - 1.75).abs() < 1e-5);
        assert_eq!(arcs[0].theta_end, TAU);
        assert_eq!(arcs[1].theta_start, 0.0);
        assert!((arcs[1].theta_end - 1.25).abs() < 1e-5);
    }

    #[test]
    fn test_solid_arcs_wrapping_gap() {
        let arcs = ring(0.0, 0.5).solid_arcs();
        assert_eq!(arcs.len(), 1);
        assert!((arcs[0].theta_start - 0.25).abs() < 1e-5);
        assert!((arcs[0].theta_end - (TAU - 0.25)).abs() < 1e-5);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::default();
        let r = Ring::from_settings(&settings, 2, 25);
        assert!((r.radius - 65.0).abs() < 1e-4);
        assert_eq!(r.thickness, 5.0);
        assert_eq!(r.rotation, 0.0);
        assert!((r.rotation_speed - 0.0055).abs() < 1e-6);
        assert_eq!(r.center, Vec2::new(400.0, 300.0));
    }
}
