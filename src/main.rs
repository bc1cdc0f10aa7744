//! Pinfall entry point
//!
//! Native frontend: polls keyboard input into per-tick action flags, runs the
//! fixed-timestep simulation, and rasterizes the draw-list with macroquad.
//! The window's vsync'd frame loop drives everything; the simulation itself
//! only ever sees `TickInput` and `SIM_DT`.

use std::sync::OnceLock;

use glam::Vec2;
use macroquad::prelude as mq;

use pinfall::Settings;
use pinfall::consts::{MAX_SUBSTEPS, SIM_DT};
use pinfall::render::{self, DrawCmd, Rgb};
use pinfall::sim::{GameState, TickInput, tick};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::load)
}

fn window_conf() -> mq::Conf {
    env_logger::init();
    let settings = settings();
    mq::Conf {
        window_title: "Pinfall".to_string(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        ..Default::default()
    }
}

/// Frame-loop driver holding the session and the timestep accumulator
struct Frontend {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Frontend {
    fn new() -> Self {
        Self {
            state: GameState::new(),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Read this frame's keys; one-shot flags latch until a tick consumes
    /// them, so a press during a short frame is never lost
    fn poll_input(&mut self) {
        self.input.move_left = mq::is_key_down(mq::KeyCode::Left);
        self.input.move_right = mq::is_key_down(mq::KeyCode::Right);
        self.input.launch |= mq::is_key_pressed(mq::KeyCode::Space);
        self.input.restart |= mq::is_key_pressed(mq::KeyCode::R);
    }

    /// Run simulation ticks for this frame's elapsed time
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = false;
            self.input.restart = false;
        }
    }

    fn draw(&self) {
        for cmd in render::draw_list(&self.state) {
            match cmd {
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let (x, y) = to_screen(center);
                    mq::draw_circle(x, y, radius * radius_scale(), to_mq(color));
                }
                DrawCmd::Segment { a, b, color } => {
                    let (x1, y1) = to_screen(a);
                    let (x2, y2) = to_screen(b);
                    mq::draw_line(x1, y1, x2, y2, 2.0, to_mq(color));
                }
                DrawCmd::Text { pos, text, color } => {
                    let (x, y) = to_screen(pos);
                    mq::draw_text(&text, x, y, 32.0, to_mq(color));
                }
            }
        }

        if settings().show_fps {
            let label = format!("{} fps", mq::get_fps());
            mq::draw_text(&label, 10.0, mq::screen_height() - 14.0, 24.0, mq::GRAY);
        }
    }
}

/// World [-1, 1] to screen pixels, +y up becomes +y down
fn to_screen(p: Vec2) -> (f32, f32) {
    let x = (p.x + 1.0) * 0.5 * mq::screen_width();
    let y = (1.0 - p.y) * 0.5 * mq::screen_height();
    (x, y)
}

/// Uniform radius scale so circles stay round on a non-square window
fn radius_scale() -> f32 {
    mq::screen_height() * 0.5
}

fn to_mq(c: Rgb) -> mq::Color {
    mq::Color::new(c[0], c[1], c[2], 1.0)
}

#[macroquad::main(window_conf)]
async fn main() {
    log::info!("pinfall starting");
    let mut frontend = Frontend::new();

    loop {
        frontend.poll_input();
        frontend.update(mq::get_frame_time());

        mq::clear_background(mq::Color::new(0.1, 0.1, 0.2, 1.0));
        frontend.draw();

        mq::next_frame().await;
    }
}
