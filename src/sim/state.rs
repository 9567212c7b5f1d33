//! Game state and core simulation types
//!
//! Everything a renderer reads after a tick lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings::Tuning;

/// Which half of the arena a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction a ball leaves this side's paddle (+1 right, -1 left)
    pub fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A player paddle (axis-aligned rectangle, top-left anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge; fixed for the whole match
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle for `side`, vertically centered
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Left => tuning.left_paddle_x(),
            Side::Right => tuning.right_paddle_x(),
        };
        Self {
            x,
            y: tuning.paddle_start_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shift the paddle vertically, then clamp it to `[0, arena_height - height]`
    pub fn move_by(&mut self, dy: f32, arena_height: f32) {
        self.y = (self.y + dy).clamp(0.0, arena_height - self.height);
    }
}

/// The ball (square, top-left anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball deflected off this side's paddle
    PaddleHit(Side),
    /// This side won a point
    Point(Side),
    /// Pause flag flipped to the given value
    PauseToggled(bool),
}

/// Complete simulation state (deterministic, serializable)
///
/// Deserializing re-validates the tuning and rebuilds entity dimensions from
/// it, so a restored snapshot holds the same invariants as a fresh match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Snapshot")]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve angle source
    pub(crate) rng: Pcg32,
    /// Tunables this match was created with (validated)
    pub tuning: Tuning,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub paused: bool,
    /// Unpaused ticks simulated so far
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new match with the given tuning and seed
    ///
    /// The opening serve goes toward the right paddle.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            left: Paddle::new(Side::Left, &tuning),
            right: Paddle::new(Side::Right, &tuning),
            ball: Ball::new(tuning.ball_size),
            tuning,
            score: Score::default(),
            paused: false,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset_ball(true);

        log::debug!("New match, seed {}", seed);
        Ok(state)
    }

    /// Restore a snapshot written with `serde_json`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Serialized form of [`GameState`], checked before use
#[derive(Deserialize)]
struct Snapshot {
    seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    score: Score,
    paused: bool,
    time_ticks: u64,
}

impl TryFrom<Snapshot> for GameState {
    type Error = ConfigError;

    fn try_from(snap: Snapshot) -> Result<Self, Self::Error> {
        let tuning = snap.tuning;
        tuning.validate()?;

        // Only the mutable parts are taken from the snapshot
        let mut left = Paddle::new(Side::Left, &tuning);
        left.y = snap.left.y.clamp(0.0, tuning.paddle_max_y());
        let mut right = Paddle::new(Side::Right, &tuning);
        right.y = snap.right.y.clamp(0.0, tuning.paddle_max_y());
        let ball = Ball {
            size: tuning.ball_size,
            ..snap.ball
        };

        Ok(Self {
            seed: snap.seed,
            rng: snap.rng,
            tuning,
            left,
            right,
            ball,
            score: snap.score,
            paused: snap.paused,
            time_ticks: snap.time_ticks,
            events: Vec::new(),
        })
    }
}
