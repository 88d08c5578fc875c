//! Mesh-building surface
//!
//! Tessellates every draw call into CPU-side vertex lists: filled shapes into
//! a triangle list, anti-aliased outlines into a line list. A GPU host uploads
//! the byte views each frame.

use glam::Vec2;

use super::shapes;
use super::surface::{Rgba, Surface};
use super::vertex::{Vertex, opaque, to_float_color};
use crate::settings::Rgb;

/// Surface that records geometry into vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshSurface {
    /// Background color of the current frame
    pub clear_color: [f32; 4],
    /// Filled geometry, three vertices per triangle
    pub triangles: Vec<Vertex>,
    /// Outline geometry, two vertices per line
    pub lines: Vec<Vertex>,
}

impl MeshSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Total vertices recorded this frame
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() + self.lines.len()
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, color: Rgb) {
        self.clear_color = to_float_color(opaque(color));
        self.triangles.clear();
        self.lines.clear();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.triangles
            .extend(shapes::polygon(points, to_float_color(color)));
    }

    fn aa_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.lines.extend(shapes::outline(points, to_float_color(color)));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.triangles.extend(shapes::circle(
            center,
            radius,
            to_float_color(color),
            shapes::circle_segments(radius),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_buffers() {
        let mut mesh = MeshSurface::new();
        mesh.fill_circle(Vec2::ZERO, 4.0, [255; 4]);
        assert!(mesh.vertex_count() > 0);

        mesh.clear([0, 0, 255]);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.clear_color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_byte_views() {
        let mut mesh = MeshSurface::new();
        let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        mesh.fill_polygon(&square, [255; 4]);
        mesh.aa_polygon(&square, [255; 4]);

        assert_eq!(mesh.triangle_bytes().len(), 6 * Vertex::STRIDE);
        assert_eq!(mesh.line_bytes().len(), 8 * Vertex::STRIDE);
    }
}
