//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one frame. All speeds are
//! per tick, so the caller must drive this at a fixed rate (see
//! [`crate::platform::time::FixedStep`]).

use serde::{Deserialize, Serialize};

use super::collision::{deflect_off_paddle, paddle_contact, reflect_off_walls};
use super::state::{GameEvent, GameState, Side};

/// Control signals held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Flip the pause flag this tick
    pub pause: bool,
}

impl TickInput {
    /// Net vertical direction requested for `side` (-1 up, +1 down, 0 none)
    pub fn paddle_axis(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        (down as i8 - up as i8) as f32
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Level-triggered: the input layer decides whether a held key repeats
    if input.pause {
        state.paused = !state.paused;
        state.events.push(GameEvent::PauseToggled(state.paused));
    }
    if state.paused {
        return;
    }

    state.time_ticks += 1;
    let arena_height = state.tuning.arena_height;

    // Paddles
    for side in [Side::Left, Side::Right] {
        let dy = input.paddle_axis(side) * state.tuning.paddle_speed;
        state.paddle_mut(side).move_by(dy, arena_height);
    }

    // Ball
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if reflect_off_walls(ball, arena_height).is_some() {
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        if paddle_contact(&state.ball, paddle, side) {
            let angle = deflect_off_paddle(
                &mut state.ball,
                paddle,
                side,
                state.tuning.max_bounce_angle,
                state.tuning.clamp_bounce_offset,
                state.tuning.paddle_nudge,
            );
            log::trace!("{:?} paddle hit, exit angle {:.3}", side, angle);
            state.events.push(GameEvent::PaddleHit(side));
        }
    }

    // Scoring
    let size = state.ball.size;
    if state.ball.pos.x < -size {
        state.award_point(Side::Right);
    } else if state.ball.pos.x > state.tuning.arena_width + size {
        state.award_point(Side::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::speed_of;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), 12345).unwrap()
    }

    #[test]
    fn test_paddle_axis() {
        let input = TickInput {
            left_up: true,
            right_up: true,
            right_down: true,
            ..Default::default()
        };
        assert_eq!(input.paddle_axis(Side::Left), -1.0);
        assert_eq!(input.paddle_axis(Side::Right), 0.0);
        assert_eq!(TickInput::default().paddle_axis(Side::Left), 0.0);
    }

    #[test]
    fn test_paddles_move_and_clamp() {
        let mut state = new_state();
        let up = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &up);
        assert_eq!(state.left.y, 484.0);
        assert_eq!(state.right.y, 496.0);

        for _ in 0..200 {
            tick(&mut state, &up);
        }
        assert_eq!(state.left.y, 0.0);
        assert_eq!(state.right.y, 980.0);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(900.0, 500.0);
        state.ball.vel = Vec2::new(4.0, -1.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, Vec2::new(904.0, 499.0));
        assert!(state.events.is_empty());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_wall_bounce_in_corner() {
        // 1920x1080 arena, ball integrated to negative y
        let mut state = new_state();
        state.ball.pos = Vec2::ZERO;
        state.ball.vel = Vec2::new(-4.0, -1.5);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, 1.5);
        assert_eq!(state.ball.vel.x, -4.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(34.0, 520.0);
        state.ball.vel = Vec2::new(-4.0, 1.0);
        let before = speed_of(state.ball.vel);

        tick(&mut state, &TickInput::default());
        assert!(state.ball.vel.x > 0.0);
        assert!((speed_of(state.ball.vel) - before).abs() < 1e-4);
        assert!((state.ball.pos.x - 32.1).abs() < 1e-4);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Left)]);
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(1875.0, 500.0);
        state.ball.vel = Vec2::new(4.0, -2.0);
        let before = speed_of(state.ball.vel);

        tick(&mut state, &TickInput::default());
        assert!(state.ball.vel.x < 0.0);
        // Struck above the paddle center, so it leaves upward
        assert!(state.ball.vel.y < 0.0);
        assert!((speed_of(state.ball.vel) - before).abs() < 1e-4);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Right)]);
    }

    #[test]
    fn test_missed_ball_scores_for_right() {
        let mut state = new_state();
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(-8.0, 700.0);
        state.ball.vel = Vec2::new(-4.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.pos, state.tuning.serve_position());
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.events, vec![GameEvent::Point(Side::Right)]);
    }

    #[test]
    fn test_missed_ball_scores_for_left() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(1928.0, 100.0);
        state.ball.vel = Vec2::new(4.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, state.tuning.serve_position());
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_ball_just_outside_does_not_score() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(-2.0, 100.0);
        state.ball.vel = Vec2::new(-4.0, 0.0);
        tick(&mut state, &TickInput::default());
        // x == -6, still within one ball size of the edge
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos.x, -6.0);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = new_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert!(state.paused);
        assert_eq!(state.events, vec![GameEvent::PauseToggled(true)]);

        let ball = state.ball.clone();
        let left = state.left.clone();
        let moving = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &moving);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.left, left);
        assert_eq!(state.time_ticks, 0);

        // Unpause
        tick(&mut state, &pause);
        assert!(!state.paused);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_held_pause_flips_every_tick() {
        let mut state = new_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        let mut flags = Vec::new();
        for _ in 0..4 {
            tick(&mut state, &pause);
            flags.push(state.paused);
        }
        assert_eq!(flags, vec![true, false, true, false]);
    }
}
