//! Data-driven game balance
//!
//! Every gameplay number lives in one serializable struct so a build
//! can be re-tuned without recompiling: a JSON file next to the binary
//! overrides the compiled-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena dimensions (pixels)
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom of the arena to the paddle's top edge
    pub paddle_baseline: f32,
    /// Movement per frame (pixels)
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Speed assigned after every bounce (pixels per frame)
    pub bounce_factor: f32,

    // === Brick field ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_spacing: f32,
    pub brick_field_top: f32,

    // === Session ===
    pub starting_lives: u8,
    pub points_per_brick: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_baseline: PADDLE_BASELINE,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            bounce_factor: BOUNCE_FACTOR,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_spacing: BRICK_SPACING,
            brick_field_top: BRICK_FIELD_TOP,
            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
        }
    }
}

impl Tuning {
    /// Tuning file looked up next to the binary's working directory
    const STORAGE_FILE: &'static str = "brickfall_tuning.json";

    /// A tuning is sane when every dimension is positive and the
    /// geometry fits the arena; anything else would break the collision
    /// invariants.
    pub fn is_sane(&self) -> bool {
        self.arena_width > 0.0
            && self.arena_height > 0.0
            && self.paddle_width > 0.0
            && self.paddle_width <= self.arena_width
            && self.paddle_height > 0.0
            && self.paddle_baseline >= self.paddle_height
            && self.paddle_speed > 0.0
            && self.ball_radius > 0.0
            && self.bounce_factor > 0.0
            && self.brick_width > 0.0
            && self.brick_width + self.brick_spacing <= self.arena_width
            && self.brick_height > 0.0
            && self.brick_rows > 0
            && self.brick_spacing >= 0.0
            && self.starting_lives > 0
    }

    /// Load tuning from the default file, falling back to defaults when
    /// the file is missing, unreadable or insane
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    /// Load tuning from `path` with the same fallback behavior
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) if tuning.is_sane() => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Ok(_) => {
                    log::warn!("tuning in {} fails sanity checks, using defaults", path.display());
                    Self::default()
                }
                Err(e) => {
                    log::warn!("unparsable tuning in {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save tuning to `path`; failures are logged, not fatal
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("could not save tuning to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("could not serialize tuning: {e}"),
        }
    }
}
