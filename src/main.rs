//! Brickfall entry point
//!
//! Runs the simulation headlessly at a fixed 60 FPS. Rendering is an
//! external concern, so the shell logs state transitions instead of
//! drawing and plays through a small ball-tracking autopilot that
//! stands in for the human player.
//!
//! Usage: `brickfall [seed]`, with a clock-derived seed when omitted.

use std::time::{Duration, Instant};

use brickfall::consts::FRAME_RATE;
use brickfall::highscores::{HighScores, now_millis};
use brickfall::sim::{GamePhase, GameState, TickInput, tick};
use brickfall::tuning::Tuning;

/// Stop a demo run that somehow never loses (five minutes of game time)
const MAX_FRAMES: u64 = 5 * 60 * FRAME_RATE as u64;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(now_millis);

    let tuning = Tuning::load();
    let mut state = GameState::with_tuning(seed, tuning);
    let mut highscores = HighScores::load();
    log::info!("Brickfall starting (seed {seed})");

    let frame_budget = Duration::from_secs_f64(1.0 / FRAME_RATE as f64);
    let mut last_phase = state.phase;

    loop {
        let frame_start = Instant::now();

        let input = autopilot(&state);
        tick(&mut state, &input);

        if state.phase != last_phase {
            log::info!(
                "phase {:?} -> {:?} (score {}, lives {}, level {})",
                last_phase,
                state.phase,
                state.score,
                state.lives,
                state.level
            );
            last_phase = state.phase;
        }

        if state.phase == GamePhase::GameOver || state.frame >= MAX_FRAMES {
            break;
        }

        // Frame-rate limiter: sleep off the remainder of the 60 Hz budget
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }

    println!(
        "final score {} on level {} after {} frames",
        state.score, state.level, state.frame
    );
    if let Some(rank) = highscores.add_score(state.score, state.level, now_millis()) {
        println!("new high score, rank {rank}");
        highscores.save();
    }
}

/// Stand-in for the human player: serve immediately, then keep the
/// paddle under the ball. The tracking target oscillates slightly so
/// the run does not settle into a perfect loop and eventually ends.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Serve => input.launch = true,
        GamePhase::Playing => {
            let wobble = (state.frame as f32 * 0.013).sin() * state.paddle.rect.width;
            let target = state.ball.pos.x + wobble;
            let diff = target - state.paddle.rect.center().x;
            if diff < -state.tuning.paddle_speed {
                input.move_left = true;
            } else if diff > state.tuning.paddle_speed {
                input.move_right = true;
            }
        }
        GamePhase::GameOver => {}
    }
    input
}
