//! Drawing surface abstraction
//!
//! The simulation draws through this trait so the host decides how pixels
//! are produced (GPU mesh upload, software raster, test recorder).

use glam::Vec2;

use crate::settings::Rgb;

/// 8-bit RGBA color
pub type Rgba = [u8; 4];

/// Primitive drawing operations a host surface must provide
pub trait Surface {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Rgb);

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Draw an anti-aliased outline of a closed polygon
    fn aa_polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}
