//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count for a circle of the given radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 2.0) as u32).clamp(8, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangulate a closed polygon by zig-zagging between its two ends.
///
/// Exact for convex polygons and for arc bands laid out as outer edge forward
/// followed by inner edge backward: each step pairs the i-th point from the
/// front with the i-th point from the back, producing a quad strip.
pub fn polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((n - 2) * 3);
    let mut push = |a: Vec2, b: Vec2, c: Vec2| {
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(c.x, c.y, color));
    };

    let (mut lo, mut hi) = (0, n - 1);
    while hi - lo >= 2 {
        push(points[lo], points[lo + 1], points[hi]);
        lo += 1;
        if hi - lo >= 2 {
            push(points[lo], points[hi - 1], points[hi]);
            hi -= 1;
        }
    }

    vertices
}

/// Generate a line list tracing a closed polygon outline
pub fn outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}
