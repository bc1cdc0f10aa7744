//! Draw-list description of the scene
//!
//! The simulation never draws; it describes the frame as a list of primitive
//! commands in world space, and the frontend rasterizes them however it
//! likes. Text positions are world-space anchors for the string's left edge.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Solid RGB color
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const RED: Rgb = [1.0, 0.0, 0.0];

/// One primitive draw command, in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Segment {
        a: Vec2,
        b: Vec2,
        color: Rgb,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Rgb,
    },
}

/// Describe the current frame
pub fn draw_list(state: &GameState) -> Vec<DrawCmd> {
    if state.phase == GamePhase::GameOver {
        return vec![
            DrawCmd::Text {
                pos: Vec2::new(-0.1, 0.0),
                text: format!("Final Score: {}", state.total_toppled),
                color: WHITE,
            },
            DrawCmd::Text {
                pos: Vec2::new(-0.1, -0.2),
                text: "Press R to Restart".to_string(),
                color: WHITE,
            },
        ];
    }

    let mut cmds = Vec::with_capacity(state.pins.len() + 4);

    if state.ball.visible {
        cmds.push(DrawCmd::Circle {
            center: state.ball.pos,
            radius: state.ball.radius,
            color: WHITE,
        });
    }

    for pin in &state.pins {
        cmds.push(DrawCmd::Circle {
            center: pin.pos,
            radius: pin.radius,
            color: if pin.toppled { RED } else { WHITE },
        });
    }

    // Lane edges
    cmds.push(DrawCmd::Segment {
        a: Vec2::new(LANE_LEFT, LANE_BOTTOM),
        b: Vec2::new(LANE_LEFT, LANE_TOP),
        color: WHITE,
    });
    cmds.push(DrawCmd::Segment {
        a: Vec2::new(LANE_RIGHT, LANE_BOTTOM),
        b: Vec2::new(LANE_RIGHT, LANE_TOP),
        color: WHITE,
    });

    cmds.push(DrawCmd::Text {
        pos: Vec2::new(-0.9, 0.9),
        text: format!("Toppled Bottles: {}", state.total_toppled),
        color: WHITE,
    });

    cmds
}
