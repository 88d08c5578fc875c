//! Platform helpers for hosts driving the simulation
//!
//! Handles the wall-clock side of the loop:
//! - Fixed-rate frame pacing

pub mod clock;

pub use clock::FrameClock;
