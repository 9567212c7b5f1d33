//! Error types
//!
//! The simulation step itself is total; only construction and settings
//! loading can fail.

use thiserror::Error;

/// A tuning value that breaks the geometry the simulation relies on
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A length or speed is NaN or infinite
    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },

    /// A dimension that must be strictly positive is not
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },

    /// A speed or offset that must not be negative is
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },

    /// Paddle does not fit vertically in the arena
    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    /// Ball does not fit in the arena
    #[error("ball size {ball} does not fit in a {width}x{height} arena")]
    BallTooLarge { ball: f32, width: f32, height: f32 },

    /// The two paddles would touch or cross
    #[error("paddles overlap: margin {margin} and width {paddle_width} leave no room in arena width {arena_width}")]
    PaddlesOverlap {
        margin: f32,
        paddle_width: f32,
        arena_width: f32,
    },

    /// Angle outside its allowed range (radians)
    #[error("{name} must be within {min}..{max} radians (got {value})")]
    AngleOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Failure loading settings, tapes or command-line options
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Parsed but physically unusable
    #[error("invalid tuning: {0}")]
    Invalid(#[from] ConfigError),

    /// A key name no binding knows
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// Bad command-line option or value
    #[error("bad argument: {0}")]
    BadArgument(String),
}
