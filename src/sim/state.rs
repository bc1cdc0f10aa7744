//! Game state and core simulation types
//!
//! The whole session lives in one explicit [`GameState`] value that the tick
//! phases receive by reference; there are no ambient globals.

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball grounded at the lane base, accepting lateral-move and launch input
    Aiming,
    /// Ball travelling up the lane; lateral/launch input ignored
    InFlight,
    /// Round-over condition holds; countdown to game over, launch input dead
    RoundEnding,
    /// Session ended; only restart is accepted
    GameOver,
}

/// The player's ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Hidden mid-clear so a half-toppled rack stays readable
    pub visible: bool,
}

impl Ball {
    /// Ball at rest at the lane base
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, BALL_BASE_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            visible: true,
        }
    }

    /// Return the ball to its base position with zero velocity
    pub fn reset_to_base(&mut self) {
        self.pos = Vec2::new(self.pos.x, BALL_BASE_Y);
        self.vel = Vec2::ZERO;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A single pin on the lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Terminal "hit" state; never reverts within a session
    pub toppled: bool,
    /// Seconds since this pin toppled
    pub toppled_secs: f32,
}

impl Pin {
    /// A standing pin at rest
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PIN_RADIUS,
            toppled: false,
            toppled_secs: 0.0,
        }
    }

    /// Whether this pin has faded out and should leave the lane
    pub fn expired(&self) -> bool {
        self.toppled && self.toppled_secs > TOPPLE_FADE_SECS
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// The one ball
    pub ball: Ball,
    /// Live pins; pairwise iteration is by index for reproducibility
    pub pins: Vec<Pin>,
    /// Completed launch-to-exit cycles this session
    pub throws: u32,
    /// Running topple count; persists across pin removal, never recomputed
    /// from the live collection
    pub total_toppled: u32,
    /// Accumulated seconds the round-over condition has held
    pub round_end_secs: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session: rack built, ball at base, counters zeroed
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Aiming,
            ball: Ball::new(),
            pins: build_rack(),
            throws: 0,
            total_toppled: 0,
            round_end_secs: 0.0,
            time_ticks: 0,
        }
    }

    /// Re-enter setup from game over; nothing survives, score included
    pub fn restart(&mut self) {
        log::info!(
            "restart: final score was {}, rebuilding rack",
            self.total_toppled
        );
        *self = Self::new();
    }

    /// True when every live pin is toppled (vacuously true once the
    /// collection is empty, which keeps the countdown alive after the last
    /// pin fades out)
    pub fn all_toppled(&self) -> bool {
        self.pins.iter().all(|p| p.toppled)
    }

    /// True when at least one live pin is toppled
    pub fn any_toppled(&self) -> bool {
        self.pins.iter().any(|p| p.toppled)
    }

    /// The round-over predicate: all pins down, or throws exhausted
    pub fn round_over(&self) -> bool {
        self.all_toppled() || self.throws >= MAX_THROWS
    }

    /// Mark the pin at `idx` toppled, counting it exactly once
    pub fn topple(&mut self, idx: usize) {
        let pin = &mut self.pins[idx];
        if !pin.toppled {
            pin.toppled = true;
            self.total_toppled += 1;
            log::debug!(
                "pin {idx} toppled at tick {}, total {}",
                self.time_ticks,
                self.total_toppled
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the triangular rack: RACK_ROWS rows, one pin fewer per row going
/// down-lane, centered rows around the rack origin
pub fn build_rack() -> Vec<Pin> {
    let mut pins = Vec::new();
    let mut row_count = RACK_ROWS;
    for row in 0..RACK_ROWS {
        for col in 0..row_count {
            let x = RACK_ORIGIN_X + (col as f32 - row_count as f32 / 2.0) * RACK_SPACING;
            let y = RACK_ORIGIN_Y - row as f32 * RACK_SPACING;
            pins.push(Pin::new(Vec2::new(x, y)));
        }
        row_count -= 1;
    }
    pins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_is_triangular() {
        let pins = build_rack();
        // 4 + 3 + 2 + 1
        assert_eq!(pins.len(), 10);
        assert!(pins.iter().all(|p| !p.toppled && p.vel == Vec2::ZERO));
        // Every pin stays inside the lane
        assert!(
            pins.iter()
                .all(|p| p.pos.x - p.radius > LANE_LEFT && p.pos.x + p.radius < LANE_RIGHT)
        );
    }

    #[test]
    fn test_rack_spacing_exceeds_contact() {
        // No two rack pins start overlapping
        let pins = build_rack();
        for i in 0..pins.len() {
            for j in i + 1..pins.len() {
                let dist = pins[i].pos.distance(pins[j].pos);
                assert!(dist >= pins[i].radius + pins[j].radius);
            }
        }
    }

    #[test]
    fn test_new_session_counters() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.throws, 0);
        assert_eq!(state.total_toppled, 0);
        assert_eq!(state.round_end_secs, 0.0);
        assert!(state.ball.visible);
        assert_eq!(state.ball.pos, Vec2::new(0.0, BALL_BASE_Y));
    }

    #[test]
    fn test_topple_counts_once() {
        let mut state = GameState::new();
        state.topple(0);
        state.topple(0);
        assert!(state.pins[0].toppled);
        assert_eq!(state.total_toppled, 1);
    }

    #[test]
    fn test_round_over_vacuous_on_empty_rack() {
        let mut state = GameState::new();
        state.pins.clear();
        assert!(state.all_toppled());
        assert!(state.round_over());
    }

    #[test]
    fn test_restart_rebuilds_everything() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.throws = 2;
        state.total_toppled = 7;
        state.round_end_secs = 5.0;
        state.pins.clear();
        state.ball.visible = false;

        state.restart();
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.pins.len(), 10);
        assert_eq!(state.throws, 0);
        assert_eq!(state.total_toppled, 0);
        assert_eq!(state.round_end_secs, 0.0);
        assert!(state.ball.visible);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }
}
