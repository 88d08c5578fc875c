//! Collision detection and response against a gapped ring
//!
//! The ball lives inside the ring. Contact happens when the ball's far edge
//! reaches the inner edge of the band; at that point the ball either slips
//! through the gap or bounces off the band.

use glam::Vec2;

use super::ring::Ring;
use crate::cartesian_to_polar;

/// Geometric relation between the ball and a ring, before any response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingContact {
    /// Ball is clear of the band
    Inside,
    /// Ball reached the band at an angle inside the gap
    Gap { angle: f32 },
    /// Ball reached the solid band
    Wall {
        /// Unit vector from the ring center toward the ball
        normal: Vec2,
        /// How far the ball reaches past the collision radius
        overlap: f32,
    },
}

/// What a collision check did to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No contact
    Clear,
    /// Bounced off the band; velocity and position were corrected
    Reflected,
    /// Passed through the gap; ball untouched
    Escape,
}

impl CollisionOutcome {
    #[inline]
    pub fn is_escape(&self) -> bool {
        matches!(self, CollisionOutcome::Escape)
    }
}

/// Classify the ball against a ring
pub fn ball_ring_contact(ball_pos: Vec2, ball_radius: f32, ring: &Ring) -> RingContact {
    let (d, angle) = cartesian_to_polar(ball_pos - ring.center);
    let collision_radius = ring.collision_radius();

    if d + ball_radius <= collision_radius {
        return RingContact::Inside;
    }

    if ring.gap_interval().contains(angle) {
        return RingContact::Gap { angle };
    }

    RingContact::Wall {
        normal: Vec2::new(angle.cos(), angle.sin()),
        overlap: (d + ball_radius) - collision_radius,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
