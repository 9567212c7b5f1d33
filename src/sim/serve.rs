//! Round control: scoring and serving
//!
//! The serve is the only non-deterministic input to the simulation, and it
//! draws from the state's own seeded RNG.

use rand::Rng;

use super::state::{GameEvent, GameState, Side};

impl GameState {
    /// Re-center the ball and launch it toward one side
    ///
    /// The horizontal speed is always `initial_speed_x`; the vertical speed is
    /// `initial_speed_y * sin(angle)` for an angle drawn uniformly from
    /// `[-serve_spread, serve_spread]`.
    pub fn reset_ball(&mut self, toward_right: bool) {
        let spread = self.tuning.serve_spread;
        let angle = (self.rng.random::<f32>() * 2.0 - 1.0) * spread;

        self.ball.pos = self.tuning.serve_position();
        self.ball.vel.x = if toward_right {
            self.tuning.initial_speed_x
        } else {
            -self.tuning.initial_speed_x
        };
        self.ball.vel.y = self.tuning.initial_speed_y * angle.sin();
    }

    /// Credit a point to `side` and serve
    ///
    /// The ball is served toward the side that conceded.
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.score.left += 1,
            Side::Right => self.score.right += 1,
        }
        self.events.push(GameEvent::Point(side));
        log::info!(
            "{:?} scores: {} - {}",
            side,
            self.score.left,
            self.score.right
        );

        self.reset_ball(side.opponent() == Side::Right);
    }
}
