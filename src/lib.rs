//! Duel Pong - A two-player paddle-and-ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `platform`: Driver glue (fixed timestep clock, keyboard sampling)
//! - `settings`: Tunables and controls, loaded from JSON
//! - `hud`: Score overlay and center line layout for renderers

pub mod error;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SettingsError};
pub use settings::{PauseTrigger, Settings, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; per-tick speeds are tuned for this)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1920.0;
    pub const ARENA_HEIGHT: f32 = 1080.0;

    /// Paddle defaults (speed in pixels per tick)
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Gap between each paddle and its arena edge
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults (speeds in pixels per tick)
    pub const BALL_SIZE: f32 = 10.0;
    pub const INITIAL_SPEED_X: f32 = 4.0;
    pub const INITIAL_SPEED_Y: f32 = 1.5;

    /// Steepest paddle deflection (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 75.0 * std::f32::consts::PI / 180.0;
    /// Serve angle is drawn uniformly from [-SERVE_SPREAD, SERVE_SPREAD]
    pub const SERVE_SPREAD: f32 = std::f32::consts::FRAC_PI_8;
    /// Distance the ball is pushed clear of a paddle after a hit
    pub const PADDLE_NUDGE: f32 = 0.1;
}

/// Speed (magnitude) of a velocity vector
#[inline]
pub fn speed_of(vel: Vec2) -> f32 {
    vel.x.hypot(vel.y)
}

/// Map a hit offset from a paddle center to a bounce angle (radians)
///
/// `offset` is measured from the paddle center and normalized by
/// `half_extent`. With `clamp` the normalized value is held to [-1, 1] so the
/// result never exceeds `max_angle`; without it, hits that straddle a paddle
/// end can produce steeper angles.
#[inline]
pub fn bounce_angle(offset: f32, half_extent: f32, max_angle: f32, clamp: bool) -> f32 {
    let mut normalized = offset / half_extent;
    if clamp {
        normalized = normalized.clamp(-1.0, 1.0);
    }
    normalized * max_angle
}

/// Velocity of magnitude `speed` leaving at `angle` from the horizontal
///
/// The horizontal component always points along `dir_x` (+1 right, -1 left),
/// whatever the sign of `cos(angle)`.
#[inline]
pub fn launch_velocity(speed: f32, angle: f32, dir_x: f32) -> Vec2 {
    Vec2::new(dir_x.signum() * (speed * angle.cos()).abs(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_speed_of() {
        assert!((speed_of(Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(speed_of(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_bounce_angle_center_is_flat() {
        assert_eq!(bounce_angle(0.0, 50.0, consts::MAX_BOUNCE_ANGLE, true), 0.0);
    }

    #[test]
    fn test_bounce_angle_clamps() {
        let max = consts::MAX_BOUNCE_ANGLE;
        assert!((bounce_angle(80.0, 50.0, max, true) - max).abs() < 1e-6);
        assert!((bounce_angle(-80.0, 50.0, max, true) + max).abs() < 1e-6);
        // Unclamped keeps the overshoot
        assert!(bounce_angle(80.0, 50.0, max, false) > max);
    }

    #[test]
    fn test_launch_velocity_direction() {
        let right = launch_velocity(2.0, FRAC_PI_4, 1.0);
        assert!(right.x > 0.0 && right.y > 0.0);
        assert!((speed_of(right) - 2.0).abs() < 1e-5);

        let left = launch_velocity(2.0, -FRAC_PI_4, -1.0);
        assert!(left.x < 0.0 && left.y < 0.0);
        assert!((speed_of(left) - 2.0).abs() < 1e-5);
    }
}
