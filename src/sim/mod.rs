//! Frame-stepped simulation module
//!
//! All simulation logic lives here. This module must stay deterministic:
//! - One fixed step per frame, quantities expressed per frame
//! - Seeded RNG only
//! - Stable ordering (rings innermost first)
//! - No rendering or platform dependencies

pub mod arc;
pub mod ball;
pub mod collision;
pub mod particle;
pub mod ring;
pub mod state;
pub mod tick;

pub use arc::ArcBand;
pub use ball::Ball;
pub use collision::{CollisionOutcome, RingContact, ball_ring_contact, reflect_velocity};
pub use particle::{Particle, burst};
pub use ring::{GapInterval, Ring};
pub use state::{Phase, SimEvent, Simulation, build_rings};
pub use tick::tick;
