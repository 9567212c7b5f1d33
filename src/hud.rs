//! Score overlay and arena decoration layout
//!
//! Pure layout: renderers draw the rectangles and strings, nothing here
//! touches a graphics API.

use glam::Vec2;

use crate::settings::Tuning;
use crate::sim::GameState;

/// Controls hint shown along the bottom edge
pub const CONTROLS_HINT: &str = "W/S | Up/Down to move. Space toggles pause.";

/// Center line dash size and spacing
pub const DASH_WIDTH: f32 = 2.0;
pub const DASH_LENGTH: f32 = 12.0;
pub const DASH_SPACING: f32 = 20.0;

/// An axis-aligned rectangle to fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Score line, e.g. `"3    1"`
pub fn score_text(state: &GameState) -> String {
    format!("{}    {}", state.score.left, state.score.right)
}

/// Text anchor for the score line, roughly centered in the arena
pub fn score_anchor(tuning: &Tuning) -> Vec2 {
    // Half the width of a two-digit debug-font score line
    Vec2::new(tuning.arena_width / 2.0 - 17.0, tuning.arena_height / 2.0 + 10.0)
}

/// Text anchor for [`CONTROLS_HINT`]
pub fn hint_anchor(tuning: &Tuning) -> Vec2 {
    Vec2::new(10.0, tuning.arena_height - 20.0)
}

/// The dashed line splitting the arena, top to bottom
pub fn center_line(tuning: &Tuning) -> Vec<Rect> {
    let x = tuning.arena_width / 2.0 - DASH_WIDTH / 2.0;
    let count = (tuning.arena_height / DASH_SPACING).ceil() as usize;
    (0..count)
        .map(|i| Rect {
            pos: Vec2::new(x, i as f32 * DASH_SPACING),
            size: Vec2::new(DASH_WIDTH, DASH_LENGTH),
        })
        .collect()
}

/// Status line for headless hosts and logs
pub fn status_line(state: &GameState) -> String {
    let mut line = format!("tick {} | {}", state.time_ticks, score_text(state));
    if state.paused {
        line.push_str(" | PAUSED");
    }
    line
}
