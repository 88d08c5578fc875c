//! Ring Escape entry point
//!
//! Headless host: runs the simulation at its frame rate against a mesh
//! surface and logs what happens, until every ring is gone and the last
//! particles have faded (or a frame cap is reached).
//!
//! Usage: `ring-escape [SETTINGS.json] [--seed N] [--frames N] [--color-mode NAME] [--unpaced] [--dump-settings]`

use std::process::ExitCode;
use std::time::Instant;

use ring_escape::{ColorMode, Settings};
use ring_escape::platform::FrameClock;
use ring_escape::renderer::{MeshSurface, Vertex, render};
use ring_escape::sim::{SimEvent, Simulation, tick};

/// Default frame cap: ten minutes at the reference rate
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;

#[derive(Debug, Default)]
struct Args {
    settings_path: Option<String>,
    seed: Option<u64>,
    max_frames: Option<u64>,
    color_mode: Option<ColorMode>,
    unpaced: bool,
    dump_settings: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse().map_err(|e| format!("bad seed {}: {}", value, e))?);
            }
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.max_frames =
                    Some(value.parse().map_err(|e| format!("bad frame count {}: {}", value, e))?);
            }
            "--color-mode" => {
                let value = iter.next().ok_or("--color-mode needs a value")?;
                args.color_mode = Some(
                    ColorMode::from_name(&value)
                        .ok_or_else(|| format!("unknown color mode {}", value))?,
                );
            }
            "--unpaced" => args.unpaced = true,
            "--dump-settings" => args.dump_settings = true,
            other if other.starts_with("--") => return Err(format!("unknown option {}", other)),
            path => args.settings_path = Some(path.to_string()),
        }
    }

    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut settings = match &args.settings_path {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Some(mode) = args.color_mode {
        settings.circle_color_mode = mode;
    }

    if args.dump_settings {
        return match settings.to_json_pretty() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let max_frames = args.max_frames.unwrap_or(DEFAULT_MAX_FRAMES);
    log::info!(
        "Ring Escape starting (seed {}, {} rings, {} colors)",
        seed,
        settings.num_circles,
        settings.circle_color_mode.as_str()
    );

    match Simulation::new(settings, seed) {
        Ok(sim) => {
            run(sim, max_frames, args.unpaced);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(mut sim: Simulation, max_frames: u64, unpaced: bool) {
    let mut surface = MeshSurface::new();
    let mut clock = FrameClock::new(sim.settings().frame_rate);
    let started = Instant::now();
    let mut last = Instant::now();

    while sim.frame < max_frames && !sim.is_settled() {
        let due = if unpaced {
            1
        } else {
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;
            clock.advance(elapsed)
        };

        for _ in 0..due {
            for event in tick(&mut sim) {
                if let SimEvent::RingEscaped { remaining, ball_pos, .. } = event {
                    log::debug!(
                        "Ball left through the gap at ({:.1}, {:.1}); {} particles live, {} rings left",
                        ball_pos.x,
                        ball_pos.y,
                        sim.particles.len(),
                        remaining
                    );
                }
            }
        }

        if due > 0 {
            render(&sim, &mut surface);
            log::trace!(
                "Frame {}: {} triangle vertices, {} line vertices",
                sim.frame,
                surface.triangle_bytes().len() / Vertex::STRIDE,
                surface.line_bytes().len() / Vertex::STRIDE
            );
        }

        if !unpaced {
            std::thread::sleep(clock.until_next_frame());
        }
    }

    if sim.is_settled() {
        log::info!(
            "Finished: {} rings escaped in {} frames ({:.1}s wall time)",
            sim.rings_escaped,
            sim.frame,
            started.elapsed().as_secs_f32()
        );
    } else {
        log::warn!(
            "Stopped at frame cap {} with {} rings left",
            max_frames,
            sim.ring_count()
        );
    }
}
