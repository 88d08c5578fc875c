//! Simulation state
//!
//! Everything one frame reads and writes lives here: the settings snapshot,
//! the ball, the live rings (innermost first), the live particles and the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::particle::Particle;
use super::ring::Ring;
use crate::error::SettingsError;
use crate::settings::Settings;

/// Whether any ring is left to escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rings remain; the innermost one is active
    Running,
    /// Every ring has been escaped; only the ball and particles animate
    Drained,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// The ball left through the active ring's gap and the ring was destroyed
    RingEscaped {
        /// Creation index of the destroyed ring (0 = innermost at startup)
        ring: u32,
        /// Rings still standing
        remaining: usize,
        /// Where the ball was when it escaped
        ball_pos: Vec2,
    },
    /// The last ring was destroyed
    Drained,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Frozen, validated settings snapshot
    pub(crate) settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub ball: Ball,
    /// Live rings ordered innermost first; index 0 is the active ring
    pub rings: Vec<Ring>,
    pub particles: Vec<Particle>,
    /// Frames simulated so far
    pub frame: u64,
    /// Rings destroyed so far
    pub rings_escaped: u32,
}

impl Simulation {
    /// Build rings and spawn the ball from `settings`, seeding the RNG with `seed`.
    ///
    /// Settings are validated first so no later sampling can fail mid-run.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let rings = build_rings(&settings);
        let ball = Ball::spawn(&settings, &mut rng);

        log::debug!(
            "Simulation seeded with {}: {} rings, ball at ({:.1}, {:.1})",
            seed,
            rings.len(),
            ball.pos.x,
            ball.pos.y
        );

        Ok(Self {
            settings,
            seed,
            rng,
            ball,
            rings,
            particles: Vec::new(),
            frame: 0,
            rings_escaped: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of rings still standing
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// The only ring tested for collisions
    pub fn active_ring(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn phase(&self) -> Phase {
        if self.rings.is_empty() {
            Phase::Drained
        } else {
            Phase::Running
        }
    }

    /// Drained and no particles left to animate
    pub fn is_settled(&self) -> bool {
        self.phase() == Phase::Drained && self.particles.is_empty()
    }
}

/// Create `num_circles` concentric rings, innermost first
pub fn build_rings(settings: &Settings) -> Vec<Ring> {
    let total = settings.num_circles;
    (0..total)
        .map(|i| Ring::from_settings(settings, i, total))
        .collect()
}
