//! Pinfall - a vertical-lane bowling toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Draw-list description consumed by the frontend
//! - `settings`: Presentation settings loaded from a JSON file

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Lane geometry (world space is x,y in [-1, 1], +y up)
    pub const LANE_LEFT: f32 = -0.5;
    pub const LANE_RIGHT: f32 = 0.5;
    pub const LANE_TOP: f32 = 1.0;
    pub const LANE_BOTTOM: f32 = -1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.05;
    pub const BALL_BASE_Y: f32 = -0.8;
    /// Upward speed while in flight (world units per second)
    pub const BALL_LAUNCH_SPEED: f32 = 1.2;
    /// Lateral aiming speed while grounded (world units per second)
    pub const BALL_MOVE_SPEED: f32 = 0.6;

    /// Pin defaults
    pub const PIN_RADIUS: f32 = 0.03;
    /// Velocity retained per 120 Hz tick (exponential decay toward rest)
    pub const PIN_DAMPING: f32 = 0.995;
    /// Seconds a toppled pin stays on the lane before it is removed
    pub const TOPPLE_FADE_SECS: f32 = 3.0;

    /// Rack layout: triangular, one pin fewer per row going down-lane
    pub const RACK_ROWS: u32 = 4;
    pub const RACK_ORIGIN_X: f32 = 0.05;
    pub const RACK_ORIGIN_Y: f32 = 0.8;
    pub const RACK_SPACING: f32 = 0.1;

    /// Throws per session
    pub const MAX_THROWS: u32 = 2;
    /// Seconds the round-over condition must hold before the session ends
    pub const ROUND_END_SECS: f32 = 3.0;
}
