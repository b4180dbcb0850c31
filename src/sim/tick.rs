//! Fixed-rate simulation tick
//!
//! Advances the game by exactly one frame. The frame model is the
//! classic arcade one: 60 frames per second, velocities in pixels per
//! frame, no variable timestep.

use super::collision::intersect_rect_circle;
use super::state::{GamePhase, GameState};

/// Key states polled once per frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Launch the ball; doubles as the restart key on the game-over screen
    pub launch: bool,
    pub quit: bool,
}

/// Advance the game state by one frame.
///
/// Collision order within a frame is fixed: bricks in layout order,
/// then the paddle, then the walls. Hits are not deduplicated: each
/// one overwrites the ball velocity with the impulse scaled by the
/// bounce factor, so the last collision of the frame wins.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.quit_requested = true;
        return;
    }

    match state.phase {
        GamePhase::Serve => {
            move_paddle(state, input);
            // Ball rides the paddle until launch
            let paddle_rect = state.paddle.rect;
            state.ball.rest_on(&paddle_rect);
            if input.launch {
                state.launch_ball();
            }
        }
        GamePhase::Playing => {
            move_paddle(state, input);
            sweep_bricks(state);
            bounce_paddle(state);
            bounce_walls(state);
            state.ball.pos += state.ball.vel;

            if state.bricks.is_empty() && state.phase == GamePhase::Playing {
                state.advance_level();
            }
        }
        GamePhase::GameOver => {
            if input.launch {
                state.restart();
            }
        }
    }

    state.frame += 1;
}

fn move_paddle(state: &mut GameState, input: &TickInput) {
    if input.move_left {
        state.paddle.move_left(state.tuning.paddle_speed);
    }
    if input.move_right {
        state
            .paddle
            .move_right(state.tuning.paddle_speed, state.tuning.arena_width);
    }
}

/// Test every remaining brick against the ball, in layout order. A hit
/// redirects the ball and removes the brick in the same frame, so a
/// dead brick can never score or bounce twice.
fn sweep_bricks(state: &mut GameState) {
    let mut i = 0;
    while i < state.bricks.len() {
        let brick_rect = state.bricks[i].rect;
        match intersect_rect_circle(&brick_rect, state.ball.pos, state.ball.radius, state.ball.vel)
        {
            Some(impulse) => {
                state.ball.vel = impulse * state.tuning.bounce_factor;
                state.bricks.remove(i);
                state.score += state.tuning.points_per_brick;
                log::debug!(
                    "brick hit at {:?}, impulse {impulse:?}, score {}",
                    brick_rect.pos,
                    state.score
                );
            }
            None => i += 1,
        }
    }
}

fn bounce_paddle(state: &mut GameState) {
    let paddle_rect = state.paddle.rect;
    if let Some(impulse) =
        intersect_rect_circle(&paddle_rect, state.ball.pos, state.ball.radius, state.ball.vel)
    {
        state.ball.vel = impulse * state.tuning.bounce_factor;
        log::debug!("paddle hit, impulse {impulse:?}");
    }
}

/// Reflect the ball off the arena walls. Contact is exact: the ball
/// touches a wall when `center ± radius` reaches the edge. The bottom
/// wall also costs a life, once per contact event; the decrement is
/// gated by the contact flag while the overlap persists across frames.
fn bounce_walls(state: &mut GameState) {
    let r = state.ball.radius;
    let ball = &mut state.ball;

    if ball.pos.x - r <= 0.0 && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x + r >= state.tuning.arena_width && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    let touching_bottom = ball.pos.y + r >= state.tuning.arena_height;
    if touching_bottom {
        if ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
        }
        if !state.bottom_contact {
            state.lose_life();
        }
    }
    state.bottom_contact = touching_bottom;
}
