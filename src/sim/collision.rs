//! Collision detection and response
//!
//! Everything is an axis-aligned box anchored at its top-left corner. There is
//! no swept test: a ball moving further than a paddle's width in one tick can
//! pass straight through it.

use super::state::{Ball, Paddle, Side};
use crate::{bounce_angle, launch_velocity, speed_of};

/// Which arena edge the ball was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Top,
    Bottom,
}

/// Reflect the ball off the top and bottom edges
///
/// Both edges are checked independently. On contact the ball is placed flush
/// with the edge and its vertical velocity is negated.
pub fn reflect_off_walls(ball: &mut Ball, arena_height: f32) -> Option<WallHit> {
    let mut hit = None;
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hit = Some(WallHit::Top);
    }
    if ball.bottom() >= arena_height {
        ball.pos.y = arena_height - ball.size;
        ball.vel.y = -ball.vel.y;
        hit = Some(WallHit::Bottom);
    }
    hit
}

/// Whether the ball is touching the face of `side`'s paddle
///
/// Horizontally, the ball's leading edge (its left edge against the left
/// paddle, its right edge against the right one) must lie within the paddle's
/// span. Vertically, the spans must overlap. Both tests are inclusive.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let leading_x = match side {
        Side::Left => ball.pos.x,
        Side::Right => ball.right(),
    };
    let horizontal = leading_x >= paddle.x && leading_x <= paddle.x + paddle.width;
    let vertical = ball.bottom() >= paddle.y && ball.pos.y <= paddle.y + paddle.height;
    horizontal && vertical
}

/// Send the ball away from `side`'s paddle
///
/// The exit angle grows with the distance between the ball's center and the
/// paddle's center, up to `max_angle` (exceeded only when `clamp` is off). The
/// ball keeps its speed, always heads away from the paddle, and is moved
/// `nudge` clear of the paddle face so the next tick does not hit again.
/// Returns the exit angle.
pub fn deflect_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    max_angle: f32,
    clamp: bool,
    nudge: f32,
) -> f32 {
    let offset = ball.center_y() - paddle.center_y();
    let angle = bounce_angle(offset, paddle.height / 2.0, max_angle, clamp);

    let speed = speed_of(ball.vel);
    ball.vel = launch_velocity(speed, angle, side.outward());
    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + nudge,
        Side::Right => paddle.x - ball.size - nudge,
    };
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_BOUNCE_ANGLE;
    use glam::Vec2;

    fn paddle_at(x: f32, y: f32) -> Paddle {
        Paddle {
            x,
            y,
            width: 12.0,
            height: 100.0,
        }
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            size: 10.0,
        }
    }

    #[test]
    fn test_top_wall_reflection() {
        let mut ball = ball_at(100.0, -1.5, Vec2::new(-4.0, -1.5));
        assert_eq!(reflect_off_walls(&mut ball, 1080.0), Some(WallHit::Top));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(-4.0, 1.5));
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let mut ball = ball_at(100.0, 1072.0, Vec2::new(4.0, 2.0));
        assert_eq!(reflect_off_walls(&mut ball, 1080.0), Some(WallHit::Bottom));
        assert_eq!(ball.pos.y, 1070.0);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_no_wall_contact_mid_arena() {
        let mut ball = ball_at(100.0, 500.0, Vec2::new(4.0, 2.0));
        assert_eq!(reflect_off_walls(&mut ball, 1080.0), None);
        assert_eq!(ball.vel, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_left_contact_requires_leading_edge_in_paddle() {
        let paddle = paddle_at(20.0, 490.0);
        assert!(paddle_contact(&ball_at(25.0, 530.0, Vec2::ZERO), &paddle, Side::Left));
        assert!(paddle_contact(&ball_at(32.0, 530.0, Vec2::ZERO), &paddle, Side::Left));
        // Past the face
        assert!(!paddle_contact(&ball_at(33.0, 530.0, Vec2::ZERO), &paddle, Side::Left));
        // Above and below
        assert!(!paddle_contact(&ball_at(25.0, 470.0, Vec2::ZERO), &paddle, Side::Left));
        assert!(!paddle_contact(&ball_at(25.0, 591.0, Vec2::ZERO), &paddle, Side::Left));
        // Grazing the top corner still counts
        assert!(paddle_contact(&ball_at(25.0, 480.0, Vec2::ZERO), &paddle, Side::Left));
    }

    #[test]
    fn test_right_contact_uses_right_edge() {
        let paddle = paddle_at(1888.0, 490.0);
        assert!(paddle_contact(&ball_at(1880.0, 530.0, Vec2::ZERO), &paddle, Side::Right));
        assert!(!paddle_contact(&ball_at(1877.0, 530.0, Vec2::ZERO), &paddle, Side::Right));
    }

    #[test]
    fn test_center_hit_goes_flat() {
        let paddle = paddle_at(20.0, 490.0);
        let mut ball = ball_at(28.0, 535.0, Vec2::new(-4.0, 0.0));
        let angle = deflect_off_paddle(&mut ball, &paddle, Side::Left, MAX_BOUNCE_ANGLE, true, 0.1);
        assert_eq!(angle, 0.0);
        assert!((ball.vel.x - 4.0).abs() < 1e-5);
        assert!(ball.vel.y.abs() < 1e-5);
        assert!((ball.pos.x - 32.1).abs() < 1e-4);
    }

    #[test]
    fn test_edge_hit_preserves_speed() {
        let paddle = paddle_at(1888.0, 490.0);
        let vel = Vec2::new(4.0, 1.2);
        let mut ball = ball_at(1880.0, 575.0, vel);
        let angle = deflect_off_paddle(&mut ball, &paddle, Side::Right, MAX_BOUNCE_ANGLE, true, 0.1);
        assert!(angle > 0.0);
        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y > 0.0);
        assert!((speed_of(ball.vel) - speed_of(vel)).abs() < 1e-4);
        assert!((ball.pos.x - (1888.0 - 10.0 - 0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_overhanging_hit_respects_clamp() {
        let paddle = paddle_at(20.0, 490.0);
        // Ball center 5 past the paddle's bottom edge
        let mut clamped = ball_at(25.0, 590.0, Vec2::new(-4.0, 0.0));
        let mut loose = clamped.clone();

        let a = deflect_off_paddle(&mut clamped, &paddle, Side::Left, MAX_BOUNCE_ANGLE, true, 0.1);
        let b = deflect_off_paddle(&mut loose, &paddle, Side::Left, MAX_BOUNCE_ANGLE, false, 0.1);
        assert!((a - MAX_BOUNCE_ANGLE).abs() < 1e-6);
        assert!(b > MAX_BOUNCE_ANGLE);
        assert!(clamped.vel.x > 0.0 && loose.vel.x > 0.0);
    }
}
