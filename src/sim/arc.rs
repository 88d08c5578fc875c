//! Arc band geometry for ring rendering
//!
//! In polar coordinates around a center, an arc band is defined by:
//! - radius: centerline distance from center
//! - thickness: radial extent (inner = radius - thickness/2, outer = radius + thickness/2)
//! - theta_start, theta_end: angular extent, with theta_start <= theta_end
//!
//! Bands never wrap; a span crossing 0 is split into two bands by the caller.

use glam::Vec2;

use crate::polar_to_cartesian;

/// A thickened, non-wrapping arc in polar space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBand {
    /// Centerline radius
    pub radius: f32,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: f32,
    /// Start angle (radians)
    pub theta_start: f32,
    /// End angle (radians), not less than `theta_start`
    pub theta_end: f32,
}

impl ArcBand {
    pub fn new(radius: f32, thickness: f32, theta_start: f32, theta_end: f32) -> Self {
        Self {
            radius,
            thickness,
            theta_start,
            theta_end: theta_end.max(theta_start),
        }
    }

    /// Inner radius of the band
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    /// Outer radius of the band
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }

    #[inline]
    pub fn angular_span(&self) -> f32 {
        self.theta_end - self.theta_start
    }

    /// Sample `segments + 1` points along the outer edge, start to end
    pub fn sample_outer_edge(&self, center: Vec2, segments: u32) -> Vec<Vec2> {
        let span = self.angular_span();
        let outer_r = self.outer_radius();
        let segments = segments.max(1);

        (0..=segments)
            .map(|i| {
                let theta = self.theta_start + span * i as f32 / segments as f32;
                center + polar_to_cartesian(outer_r, theta)
            })
            .collect()
    }

    /// Sample `segments + 1` points along the inner edge, end back to start
    pub fn sample_inner_edge(&self, center: Vec2, segments: u32) -> Vec<Vec2> {
        let span = self.angular_span();
        let inner_r = self.inner_radius();
        let segments = segments.max(1);

        (0..=segments)
            .map(|i| {
                let theta = self.theta_end - span * i as f32 / segments as f32;
                center + polar_to_cartesian(inner_r, theta)
            })
            .collect()
    }

    /// Closed outline of the band: outer edge forward, then inner edge backward
    pub fn polygon(&self, center: Vec2, segments: u32) -> Vec<Vec2> {
        let mut points = self.sample_outer_edge(center, segments);
        points.extend(self.sample_inner_edge(center, segments));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_band_radii() {
        let arc = ArcBand::new(100.0, 10.0, 0.0, PI);
        assert_eq!(arc.inner_radius(), 95.0);
        assert_eq!(arc.outer_radius(), 105.0);
        assert!((arc.angular_span() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_inverted_span_collapses() {
        let arc = ArcBand::new(100.0, 10.0, 2.0, 1.0);
        assert_eq!(arc.angular_span(), 0.0);
    }

    #[test]
    fn test_polygon_edges() {
        let center = Vec2::new(400.0, 300.0);
        let arc = ArcBand::new(100.0, 10.0, 0.0, PI / 2.0);
        let points = arc.polygon(center, 4);
        assert_eq!(points.len(), 10);

        // Outer edge starts at theta_start
        assert!((points[0] - (center + Vec2::new(105.0, 0.0))).length() < 1e-3);
        // and ends at theta_end
        assert!((points[4] - (center + Vec2::new(0.0, 105.0))).length() < 1e-3);
        // Inner edge walks back from theta_end
        assert!((points[5] - (center + Vec2::new(0.0, 95.0))).length() < 1e-3);
        assert!((points[9] - (center + Vec2::new(95.0, 0.0))).length() < 1e-3);
    }
}
