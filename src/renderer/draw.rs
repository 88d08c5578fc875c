//! Drawing simulation entities onto a [`Surface`]

use super::surface::Surface;
use super::vertex::{opaque, with_alpha};
use crate::settings::Settings;
use crate::sim::{Ball, Particle, Ring, Simulation};

impl Ring {
    /// Draw the solid part of the ring, leaving the gap open
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, arc_resolution: u32) {
        let color = opaque(self.color);
        for arc in self.solid_arcs() {
            let points = arc.polygon(self.center, arc_resolution);
            surface.fill_polygon(&points, color);
            surface.aa_polygon(&points, color);
        }
    }
}

impl Ball {
    /// Draw the fading trail, then the ball on top
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, settings: &Settings) {
        let len = self.trail_len();
        if len > 1 {
            for (i, pos) in self.trail().enumerate() {
                let alpha = (255 * (i + 1) / len) as u8;
                surface.fill_circle(
                    pos,
                    settings.ball_trail_width,
                    with_alpha(settings.ball_trail_color, alpha),
                );
            }
        }
        surface.fill_circle(self.pos, self.radius, opaque(self.color));
    }
}

impl Particle {
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.size, opaque(self.color));
    }
}

/// Draw one frame: background, rings outermost first, ball, particles
pub fn render<S: Surface + ?Sized>(state: &Simulation, surface: &mut S) {
    let settings = state.settings();
    surface.clear(settings.background_color);

    for ring in state.rings.iter().rev() {
        ring.render(surface, settings.arc_resolution);
    }
    state.ball.render(surface, settings);
    for particle in &state.particles {
        particle.render(surface);
    }
}
