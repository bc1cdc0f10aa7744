//! Fixed timestep simulation tick
//!
//! One tick runs the phases in order: apply input, integrate the ball,
//! integrate and expire pins, resolve collisions, evaluate the round-end
//! condition. All velocity-driven position updates scale by `dt`; the
//! original game stepped a constant amount per rendered frame, which made
//! gameplay depend on the display refresh rate.

use glam::Vec2;

use super::collision::resolve;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Launch pressed this frame; only acts while aiming
    pub launch: bool,
    /// Restart pressed this frame; only acts at game over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Game over freezes everything except restart
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    apply_input(state, input, dt);
    integrate_ball(state, dt);
    integrate_pins(state, dt);
    resolve(state);
    evaluate_round(state, dt);
}

/// Lateral aiming and launch; level-triggered moves, one-shot launch
fn apply_input(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Aiming {
        return;
    }

    if input.move_left {
        state.ball.pos.x -= BALL_MOVE_SPEED * dt;
    }
    if input.move_right {
        state.ball.pos.x += BALL_MOVE_SPEED * dt;
    }
    // Grounded ball never leaves the lane
    state.ball.pos.x = state.ball.pos.x.clamp(
        LANE_LEFT + state.ball.radius,
        LANE_RIGHT - state.ball.radius,
    );

    if input.launch {
        state.ball.vel = Vec2::new(0.0, BALL_LAUNCH_SPEED);
        state.phase = GamePhase::InFlight;
        log::info!("throw {} launched from x {:.3}", state.throws + 1, state.ball.pos.x);
    }
}

/// Flight integration; exiting the top of the lane completes the throw
fn integrate_ball(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::InFlight {
        return;
    }

    state.ball.pos += state.ball.vel * dt;
    if state.ball.pos.y > LANE_TOP {
        state.ball.reset_to_base();
        state.throws += 1;
        state.phase = if state.round_over() {
            GamePhase::RoundEnding
        } else {
            GamePhase::Aiming
        };
        log::info!(
            "throw {} complete, {} toppled so far",
            state.throws,
            state.total_toppled
        );
    }
}

/// Pin integration, wall bounce, topple timers, expiry, ball visibility
fn integrate_pins(state: &mut GameState, dt: f32) {
    for pin in &mut state.pins {
        pin.pos += pin.vel * dt;
        pin.vel *= PIN_DAMPING;
        // Pins are constrained to the lane: flip x-velocity at the edges
        if pin.pos.x + pin.radius > LANE_RIGHT || pin.pos.x - pin.radius < LANE_LEFT {
            pin.vel.x = -pin.vel.x;
        }
        if pin.toppled {
            pin.toppled_secs += dt;
        }
    }

    // Two-phase expiry: predicate over current state, then filter
    let before = state.pins.len();
    state.pins.retain(|p| !p.expired());
    if state.pins.len() < before {
        log::debug!(
            "{} faded pin(s) removed, {} remain",
            before - state.pins.len(),
            state.pins.len()
        );
    }

    // Hide the ball while the first throw's rack is mid-clear; show it again
    // once every toppled pin has faded out
    if state.throws == 1 && state.any_toppled() {
        state.ball.visible = false;
    }
    if state.throws >= 1 && !state.any_toppled() {
        state.ball.visible = true;
    }
}

/// Round-over countdown; recomputed every tick from the predicate
fn evaluate_round(state: &mut GameState, dt: f32) {
    if state.round_over() {
        if state.phase == GamePhase::Aiming {
            state.phase = GamePhase::RoundEnding;
            log::info!("round over, ending in {ROUND_END_SECS:.0}s");
        }
        state.round_end_secs += dt;
        if state.round_end_secs > ROUND_END_SECS {
            state.phase = GamePhase::GameOver;
            log::info!("game over, final score {}", state.total_toppled);
        }
    } else {
        state.round_end_secs = 0.0;
    }
}
