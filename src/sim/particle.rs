//! Decorative particles thrown off by destroyed rings

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::ring::Ring;
use crate::polar_to_cartesian;
use crate::settings::{Rgb, Settings};

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub size: f32,
    /// Frames left to live
    pub lifetime: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, size: f32, lifetime: u32) -> Self {
        Self {
            pos,
            vel,
            color,
            size,
            lifetime,
        }
    }

    /// Drift one frame (no gravity, no drag)
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }
}

/// Spawn `particle_count` particles on the ring's centerline, flying outward
pub fn burst<R: Rng>(ring: &Ring, settings: &Settings, rng: &mut R) -> Vec<Particle> {
    let jitter = settings.particle_jitter;

    (0..settings.particle_count)
        .map(|_| {
            let theta = rng.random_range(0.0..TAU);
            let pos = ring.center + polar_to_cartesian(ring.radius, theta);
            let speed =
                rng.random_range(settings.particle_speed_min..=settings.particle_speed_max);
            let vel = polar_to_cartesian(speed, theta)
                + Vec2::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                );
            let lifetime =
                rng.random_range(settings.particle_min_lifetime..=settings.particle_max_lifetime);
            let size = rng.random_range(settings.particle_min_size..=settings.particle_max_size);

            Particle::new(pos, vel, ring.color, size, lifetime)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_lives_exactly_lifetime_updates() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, -1.0), [255; 3], 1.0, 3);
        p.update();
        p.update();
        assert!(p.is_alive());
        p.update();
        assert!(!p.is_alive());
        assert_eq!(p.pos, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_burst_respects_settings() {
        let settings = Settings::default();
        let ring = Ring::from_settings(&settings, 0, 25);
        let mut rng = Pcg32::seed_from_u64(42);

        let particles = burst(&ring, &settings, &mut rng);
        assert_eq!(particles.len(), 150);

        for p in &particles {
            assert!(((p.pos - ring.center).length() - ring.radius).abs() < 1e-3);
            assert!((35..=50).contains(&p.lifetime));
            assert_eq!(p.size, 1.0);
            assert_eq!(p.color, ring.color);

            // Outward radial speed survives the jitter
            let outward = (p.pos - ring.center).normalize();
            let radial = p.vel.dot(outward);
            assert!(radial >= 1.0 - 0.5 * std::f32::consts::SQRT_2 - 1e-4);
            assert!(p.vel.length() <= 3.0 + 0.5 * std::f32::consts::SQRT_2 + 1e-4);
        }
    }

    #[test]
    fn test_spent_particle_stays_dead() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::X, [255; 3], 1.0, 0);
        assert!(!p.is_alive());
        p.update();
        assert_eq!(p.lifetime, 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_burst_keeps_huge_lifetimes_alive() {
        let settings = Settings {
            particle_count: 4,
            particle_min_lifetime: u32::MAX,
            particle_max_lifetime: u32::MAX,
            ..Default::default()
        };
        let ring = Ring::from_settings(&settings, 0, 1);
        let particles = burst(&ring, &settings, &mut Pcg32::seed_from_u64(3));

        assert_eq!(particles.len(), 4);
        assert!(particles.iter().all(|p| p.lifetime == u32::MAX && p.is_alive()));
    }

    #[test]
    fn test_burst_zero_count() {
        let settings = Settings {
            particle_count: 0,
            ..Default::default()
        };
        let ring = Ring::from_settings(&settings, 0, 1);
        assert!(burst(&ring, &settings, &mut Pcg32::seed_from_u64(1)).is_empty());
    }
}
