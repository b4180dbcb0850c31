//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame, and everything a shell
//! needs to snapshot/restore a run, lives in `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Run ended, awaiting a restart or quit key
    GameOver,
}

/// The ball
///
/// `pos` is the circle's true center; the bounding box is derived from
/// it, never the reverse, so the collision reference point and the
/// sprite corner can't drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per frame; zero only while resting on the paddle
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        assert!(radius > 0.0, "degenerate ball radius {radius}");
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Top-left corner of the bounding box, for renderers drawing sprites
    pub fn bounding_box_top_left(&self) -> Vec2 {
        self.pos - Vec2::splat(self.radius)
    }

    /// Rest the ball on top of the paddle, centered on it
    pub fn rest_on(&mut self, paddle: &Rect) {
        self.pos = Vec2::new(paddle.center().x, paddle.top() - self.radius);
        self.vel = Vec2::ZERO;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Move left by `pixels`, stopping at the left arena edge
    pub fn move_left(&mut self, pixels: f32) {
        self.rect.pos.x = (self.rect.pos.x - pixels).max(0.0);
    }

    /// Move right by `pixels`, stopping at the right arena edge
    pub fn move_right(&mut self, pixels: f32, arena_width: f32) {
        self.rect.pos.x = (self.rect.pos.x + pixels).min(arena_width - self.rect.width);
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Row index, for renderers that color-band the field
    pub row: u32,
}

/// RNG state wrapper for serialization
///
/// Reseeded after every draw so consecutive serves differ while the
/// whole run stays reproducible from the session seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draw a value in `range` and advance the stored seed
    pub fn next_in_range(&mut self, range: std::ops::RangeInclusive<f32>) -> f32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let value = rng.random_range(range);
        self.seed = rng.random();
        value
    }

    /// Draw a fresh seed for a follow-up session
    pub fn next_seed(&mut self) -> u64 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let value = rng.random();
        self.seed = rng.random();
        value
    }
}

/// Horizontal jitter range applied to the launch direction, so serves
/// are not perfectly vertical
const LAUNCH_JITTER: f32 = 0.35;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Gameplay numbers this run was built with
    pub tuning: Tuning,
    /// Current level (1-based; bumped when the field is cleared)
    pub level: u32,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u64,
    /// Frame counter
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Remaining bricks, in layout order (row-major from the top-left)
    pub bricks: Vec<Brick>,
    /// True while the ball overlapped the bottom wall last frame; gates
    /// the lives decrement to once per contact event
    #[serde(default)]
    pub bottom_contact: bool,
    /// Set when the player asked to quit; the shell ends its loop
    #[serde(default)]
    pub quit_requested: bool,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given seed and tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let paddle = Paddle {
            rect: Rect::new(
                Vec2::new(
                    (tuning.arena_width - tuning.paddle_width) / 2.0,
                    tuning.arena_height - tuning.paddle_baseline,
                ),
                tuning.paddle_width,
                tuning.paddle_height,
            ),
        };
        let mut ball = Ball::new(tuning.ball_radius);
        ball.rest_on(&paddle.rect);

        Self {
            seed,
            rng_state: RngState::new(seed),
            level: 1,
            lives: tuning.starting_lives,
            score: 0,
            frame: 0,
            phase: GamePhase::Serve,
            paddle,
            ball,
            bricks: build_brick_field(&tuning),
            bottom_contact: false,
            quit_requested: false,
            tuning,
        }
    }

    /// Launch the ball off the paddle: full bounce speed, mostly upward,
    /// with a small seeded horizontal jitter
    pub fn launch_ball(&mut self) {
        let jitter = self.rng_state.next_in_range(-LAUNCH_JITTER..=LAUNCH_JITTER);
        self.ball.vel = Vec2::new(jitter, -1.0).normalize() * self.tuning.bounce_factor;
        self.phase = GamePhase::Playing;
        log::info!("serve: launched at {:?}", self.ball.vel);
    }

    /// Rebuild the field and re-serve after a clear
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.bricks = build_brick_field(&self.tuning);
        self.ball.rest_on(&self.paddle.rect);
        self.phase = GamePhase::Serve;
        log::info!("level {} (score {})", self.level, self.score);
    }

    /// Take a life; ends the session when none remain
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("game over: score {} on level {}", self.score, self.level);
        } else {
            log::info!("life lost, {} remaining", self.lives);
        }
    }

    /// Start a fresh session after game over, keeping the tuning and
    /// deriving the next seed from the RNG stream
    pub fn restart(&mut self) {
        let seed = self.rng_state.next_seed();
        *self = Self::with_tuning(seed, self.tuning.clone());
        log::info!("restarted with seed {seed}");
    }
}

/// Batch-create the brick field: full rows of fixed-size bricks,
/// centered across the arena width with uniform spacing.
fn build_brick_field(tuning: &Tuning) -> Vec<Brick> {
    let step_x = tuning.brick_width + tuning.brick_spacing;
    let cols = ((tuning.arena_width - tuning.brick_spacing) / step_x).floor() as u32;
    assert!(cols > 0, "arena too narrow for a single brick");
    let field_width = cols as f32 * step_x - tuning.brick_spacing;
    let margin = (tuning.arena_width - field_width) / 2.0;

    let mut bricks = Vec::with_capacity((cols * tuning.brick_rows) as usize);
    for row in 0..tuning.brick_rows {
        let y = tuning.brick_field_top + row as f32 * (tuning.brick_height + tuning.brick_spacing);
        for col in 0..cols {
            let x = margin + col as f32 * step_x;
            bricks.push(Brick {
                rect: Rect::new(Vec2::new(x, y), tuning.brick_width, tuning.brick_height),
                row,
            });
        }
    }
    bricks
}
