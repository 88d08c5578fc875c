//! Per-frame simulation step
//!
//! One call advances the world by exactly one frame, in a fixed order:
//! ball, particles, active-ring collision (and escape), ring rotation.
//! Rendering is done separately by the host after the tick.

use super::particle::burst;
use super::state::{SimEvent, Simulation};

/// Advance the simulation by one frame, returning what happened
pub fn tick(state: &mut Simulation) -> Vec<SimEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    // Ball physics
    state.ball.update(state.settings.gravity);

    // Particles drift, then expire
    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());

    // Only the innermost ring can be hit
    if let Some(active) = state.rings.first() {
        let outcome = state
            .ball
            .check_collision(active, state.settings.ball_elasticity);

        if outcome.is_escape() {
            let debris = burst(active, &state.settings, &mut state.rng);
            state.particles.extend(debris);

            // Every ring still standing turns around
            for ring in state.rings.iter_mut() {
                ring.reverse();
            }
            state.rings.remove(0);

            let ring = state.rings_escaped;
            state.rings_escaped += 1;
            let remaining = state.rings.len();
            log::info!(
                "Ring {} escaped at frame {} ({} remaining)",
                ring,
                state.frame,
                remaining
            );
            events.push(SimEvent::RingEscaped {
                ring,
                remaining,
                ball_pos: state.ball.pos,
            });

            if remaining == 0 {
                log::info!("All rings escaped after {} frames", state.frame);
                events.push(SimEvent::Drained);
            }
        }
    }

    for ring in state.rings.iter_mut() {
        ring.advance();
    }

    events
}
