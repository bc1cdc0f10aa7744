//! Collision detection and response between circular bodies
//!
//! The response is a deliberate simplification, kept from the original game
//! design: on contact the struck body's velocity is set to the striking
//! body's speed directed along the contact normal. Mass and momentum are not
//! modeled, and the pin-pin response is asymmetric (only the second pin of a
//! pair receives an impulse). Do not "fix" this to true elastic collision;
//! it changes observable gameplay.

use glam::Vec2;

use super::state::GameState;

/// Overlap test for two circles; symmetric in argument order
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Unit vector from `from` toward `to`, via the contact angle atan2(dy, dx).
///
/// Coincident centers give angle 0, i.e. +x, rather than a zero vector.
#[inline]
pub fn contact_normal(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    Vec2::new(angle.cos(), angle.sin())
}

/// Detect and resolve all overlaps for this tick, in index order.
///
/// Ball-pin first, then every unordered pin pair (i < j). A pin overlapping
/// several bodies in one tick takes the resolutions sequentially in pair
/// order. O(n^2) scan; the rack holds at most ten pins.
pub fn resolve(state: &mut GameState) {
    // Ball vs pins: the pin inherits the ball's vertical speed along the
    // contact normal, and topples on first contact.
    for i in 0..state.pins.len() {
        let pin = state.pins[i];
        if circles_overlap(state.ball.pos, state.ball.radius, pin.pos, pin.radius) {
            let normal = contact_normal(state.ball.pos, pin.pos);
            let speed = state.ball.vel.y.abs();
            state.pins[i].vel = normal * speed;
            state.topple(i);
        }
    }

    // Pin vs pin: pin j inherits pin i's full speed along the contact
    // normal; both topple on first contact even though only j is pushed.
    for i in 0..state.pins.len() {
        for j in i + 1..state.pins.len() {
            let (a, b) = (state.pins[i], state.pins[j]);
            if circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                let normal = contact_normal(a.pos, b.pos);
                let speed = a.vel.length();
                state.pins[j].vel = normal * speed;
                state.topple(i);
                state.topple(j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Pin;

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.05, 0.02);
        assert_eq!(
            circles_overlap(a, BALL_RADIUS, b, PIN_RADIUS),
            circles_overlap(b, PIN_RADIUS, a, BALL_RADIUS)
        );
        // Touching exactly is not an overlap
        let c = Vec2::new(BALL_RADIUS + PIN_RADIUS, 0.0);
        assert!(!circles_overlap(a, BALL_RADIUS, c, PIN_RADIUS));
    }

    #[test]
    fn test_contact_normal_is_unit() {
        let n = contact_normal(Vec2::new(0.1, -0.3), Vec2::new(0.2, 0.4));
        assert!((n.length() - 1.0).abs() < 1e-6);
        // Coincident centers fall back to +x
        let n = contact_normal(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(n, Vec2::X);
    }

    #[test]
    fn test_ball_impulse_magnitude() {
        let mut state = GameState::new();
        state.pins = vec![Pin::new(Vec2::new(0.0, 0.5))];
        state.ball.pos = Vec2::new(0.0, 0.5 - BALL_RADIUS - PIN_RADIUS + 0.01);
        state.ball.vel = Vec2::new(0.0, BALL_LAUNCH_SPEED);

        resolve(&mut state);

        assert!(state.pins[0].toppled);
        assert_eq!(state.total_toppled, 1);
        // Pin speed equals the ball's vertical speed, directed along the
        // contact normal (straight up here)
        let vel = state.pins[0].vel;
        assert!((vel.length() - BALL_LAUNCH_SPEED).abs() < 1e-5);
        assert!(vel.x.abs() < 1e-5);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_ball_hit_topples_once() {
        let mut state = GameState::new();
        state.pins = vec![Pin::new(Vec2::new(0.0, 0.5))];
        state.ball.pos = Vec2::new(0.0, 0.45);
        state.ball.vel = Vec2::new(0.0, BALL_LAUNCH_SPEED);

        resolve(&mut state);
        resolve(&mut state);
        assert_eq!(state.total_toppled, 1);
    }

    #[test]
    fn test_adjacent_pair_both_topple() {
        // Two pins already in contact: first resolve topples both
        let mut state = GameState::new();
        state.pins = vec![
            Pin::new(Vec2::new(0.0, 0.5)),
            Pin::new(Vec2::new(0.05, 0.5)),
        ];

        resolve(&mut state);

        assert!(state.pins[0].toppled);
        assert!(state.pins[1].toppled);
        assert_eq!(state.total_toppled, 2);
        // The asymmetric response: both pins are at rest, so j gets a zero
        // impulse, and i is never pushed at all
        assert_eq!(state.pins[0].vel, Vec2::ZERO);
        assert_eq!(state.pins[1].vel.length(), 0.0);
    }

    #[test]
    fn test_pin_pin_impulse_direction() {
        let mut state = GameState::new();
        state.pins = vec![
            Pin::new(Vec2::new(0.0, 0.5)),
            Pin::new(Vec2::new(0.05, 0.5)),
        ];
        state.pins[0].vel = Vec2::new(0.8, 0.0);

        resolve(&mut state);

        // Pin 1 is pushed along the i->j normal (+x) at pin 0's speed
        let vel = state.pins[1].vel;
        assert!((vel.length() - 0.8).abs() < 1e-5);
        assert!(vel.x > 0.0);
        assert!(vel.y.abs() < 1e-5);
        // Pin 0 keeps its own velocity
        assert_eq!(state.pins[0].vel, Vec2::new(0.8, 0.0));
    }

    #[test]
    fn test_no_overlap_no_topple() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(0.25, 0.5);
        state.ball.vel = Vec2::new(0.0, BALL_LAUNCH_SPEED);

        resolve(&mut state);
        assert_eq!(state.total_toppled, 0);
        assert!(state.pins.iter().all(|p| !p.toppled));
    }
}
