//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (pin index order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, contact_normal, resolve};
pub use state::{Ball, GamePhase, GameState, Pin};
pub use tick::{TickInput, tick};
