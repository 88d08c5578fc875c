//! Simulation settings
//!
//! All tunable constants in one bundle. Values are read once when the
//! simulation is built and stay frozen afterwards. Every field has a default,
//! so a settings file only needs to list what it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// 8-bit RGB color
pub type Rgb = [u8; 3];

/// How ring colors are picked from `circle_colors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Cycle through the palette by ring index
    Alternating,
    /// Interpolate linearly from the first to the second palette color
    #[default]
    Gradient,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Alternating => "alternating",
            ColorMode::Gradient => "gradient",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "alternating" | "alt" => Some(ColorMode::Alternating),
            "gradient" | "grad" => Some(ColorMode::Gradient),
            _ => None,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration applied to the ball (px/frame²)
    pub gravity: f32,
    /// Velocity scale after a bounce (1.0 = perfect bounce)
    pub ball_elasticity: f32,

    // === Rings ===
    pub num_circles: u32,
    /// Radius of the innermost ring
    pub base_radius: f32,
    pub radius_increment: f32,
    /// Multiplier on `radius_increment` for the spacing between rings
    pub radius_increment_factor: f32,
    /// Band width of each ring (px)
    pub circle_thickness: f32,
    /// Rotation speed of the innermost ring (rad/frame)
    pub circle_rotation_speed: f32,
    /// Extra rotation speed per ring index
    pub circle_rotation_speed_offset: f32,
    /// Angular width of the gap (radians)
    pub hole_size: f32,
    /// Gap center before any rotation (radians)
    pub base_hole_angle: f32,

    // === Ring colors ===
    pub circle_color_mode: ColorMode,
    pub circle_colors: Vec<Rgb>,

    // === Ball ===
    /// Initial speed (px/frame)
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub ball_color: Rgb,
    /// Maximum random offset of the start position from the arena center
    pub ball_start_offset: f32,

    // === Ball trail ===
    /// Number of stored trail positions
    pub ball_trail_length: usize,
    pub ball_trail_width: f32,
    pub ball_trail_color: Rgb,

    // === Particles (ring destruction) ===
    pub particle_count: u32,
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    /// Lifetime bounds in frames (inclusive)
    pub particle_min_lifetime: u32,
    pub particle_max_lifetime: u32,
    /// Outward launch speed bounds (px/frame)
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    /// Per-axis random velocity spread added to the launch velocity
    pub particle_jitter: f32,

    // === Display ===
    pub background_color: Rgb,
    /// Samples per arc edge when tessellating rings
    pub arc_resolution: u32,
    /// Arena size; rings are centered at its midpoint
    pub width: f32,
    pub height: f32,
    /// Host tick rate (frames per second)
    pub frame_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            ball_elasticity: 1.0,

            num_circles: 25,
            base_radius: 45.0,
            radius_increment: 100.0,
            radius_increment_factor: 0.1,
            circle_thickness: 5.0,
            circle_rotation_speed: 0.005,
            circle_rotation_speed_offset: 0.00025,
            hole_size: 0.5,
            base_hole_angle: 1.5,

            circle_color_mode: ColorMode::Gradient,
            circle_colors: vec![[255, 187, 0], [255, 0, 0]],

            ball_speed: 2.5,
            ball_radius: 5.0,
            ball_color: [255, 255, 255],
            ball_start_offset: 50.0,

            ball_trail_length: 8,
            ball_trail_width: 5.0,
            ball_trail_color: [220, 220, 220],

            particle_count: 150,
            particle_min_size: 1.0,
            particle_max_size: 1.0,
            particle_min_lifetime: 35,
            particle_max_lifetime: 50,
            particle_speed_min: 1.0,
            particle_speed_max: 3.0,
            particle_jitter: 0.5,

            background_color: [0, 0, 0],
            arc_resolution: 50,
            width: 800.0,
            height: 600.0,
            frame_rate: crate::consts::FRAME_RATE,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot sample from or tessellate
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.circle_colors.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        if self.arc_resolution == 0 {
            return Err(SettingsError::ZeroArcResolution);
        }
        if self.frame_rate == 0 {
            return Err(SettingsError::ZeroFrameRate);
        }

        if self.particle_min_lifetime > self.particle_max_lifetime {
            return Err(SettingsError::InvalidRange {
                name: "particle_lifetime",
                min: self.particle_min_lifetime as f32,
                max: self.particle_max_lifetime as f32,
            });
        }

        let ranges = [
            ("particle_size", self.particle_min_size, self.particle_max_size),
            ("particle_speed", self.particle_speed_min, self.particle_speed_max),
            ("particle_jitter", -self.particle_jitter, self.particle_jitter),
            ("ball_start_offset", -self.ball_start_offset, self.ball_start_offset),
        ];
        for (name, min, max) in ranges {
            // NaN and infinite bounds cannot be sampled either
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(SettingsError::InvalidRange { name, min, max });
            }
        }

        Ok(())
    }

    /// Center shared by every ring
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Centerline radius of ring `index`
    pub fn ring_radius(&self, index: u32) -> f32 {
        self.base_radius + index as f32 * self.radius_increment * self.radius_increment_factor
    }

    /// Rotation speed of ring `index` (rad/frame)
    pub fn ring_rotation_speed(&self, index: u32) -> f32 {
        self.circle_rotation_speed + index as f32 * self.circle_rotation_speed_offset
    }

    /// Color of ring `index` out of `total` rings
    pub fn ring_color(&self, index: u32, total: u32) -> Rgb {
        let colors = &self.circle_colors;
        let Some(&first) = colors.first() else {
            log::warn!("circle_colors is empty; ring {} falls back to red", index);
            return [255, 0, 0];
        };

        match self.circle_color_mode {
            ColorMode::Alternating => colors[index as usize % colors.len()],
            ColorMode::Gradient => {
                if colors.len() < 2 {
                    return first;
                }
                let t = if total > 1 {
                    index as f32 / (total - 1) as f32
                } else {
                    0.0
                };
                let second = colors[1];
                let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
                [
                    lerp(first[0], second[0]),
                    lerp(first[1], second[1]),
                    lerp(first[2], second[2]),
                ]
            }
        }
    }
}
