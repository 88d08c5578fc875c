//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::surface::Rgba;
use crate::settings::Rgb;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// 8-bit RGBA to normalized float color
#[inline]
pub fn to_float_color(color: Rgba) -> [f32; 4] {
    color.map(|c| c as f32 / 255.0)
}

/// Opaque RGBA from RGB
#[inline]
pub fn opaque(color: Rgb) -> Rgba {
    [color[0], color[1], color[2], 255]
}

/// RGBA from RGB with the given alpha
#[inline]
pub fn with_alpha(color: Rgb, alpha: u8) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
