//! The bouncing ball

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::collision::{CollisionOutcome, RingContact, ball_ring_contact, reflect_velocity};
use super::ring::Ring;
use crate::polar_to_cartesian;
use crate::settings::{Rgb, Settings};

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Recent positions, oldest first
    trail: VecDeque<Vec2>,
    /// Maximum number of trail positions kept
    trail_capacity: usize,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb, trail_capacity: usize) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            trail: VecDeque::with_capacity(trail_capacity + 1),
            trail_capacity,
        }
    }

    /// Spawn near the arena center, moving at `ball_speed` in a random direction
    pub fn spawn<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        let spread = settings.ball_start_offset;
        let offset = Vec2::new(
            rng.random_range(-spread..=spread),
            rng.random_range(-spread..=spread),
        );
        let heading = rng.random_range(0.0..TAU);

        Self::new(
            settings.center() + offset,
            polar_to_cartesian(settings.ball_speed, heading),
            settings.ball_radius,
            settings.ball_color,
            settings.ball_trail_length,
        )
    }

    /// Apply gravity, move, and record the new position in the trail
    pub fn update(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;

        self.trail.push_back(self.pos);
        while self.trail.len() > self.trail_capacity {
            self.trail.pop_front();
        }
    }

    /// Trail positions, oldest first
    pub fn trail(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Resolve contact with a ring.
    ///
    /// Inside the gap the ball is left alone and the outcome is `Escape`.
    /// Against the band the velocity is reflected and scaled by `elasticity`,
    /// and the ball is pulled back so it just touches the collision radius.
    pub fn check_collision(&mut self, ring: &Ring, elasticity: f32) -> CollisionOutcome {
        match ball_ring_contact(self.pos, self.radius, ring) {
            RingContact::Inside => CollisionOutcome::Clear,
            RingContact::Gap { .. } => CollisionOutcome::Escape,
            RingContact::Wall { normal, overlap } => {
                self.vel = reflect_velocity(self.vel, normal) * elasticity;
                self.pos -= normal * overlap;
                CollisionOutcome::Reflected
            }
        }
    }
}
