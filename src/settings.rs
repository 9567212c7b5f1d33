//! Game settings and tuning
//!
//! Persisted as JSON. Every field has a default, so partial files are fine.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SettingsError};
use crate::platform::input::KeyBindings;

/// How the pause key toggles pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PauseTrigger {
    /// Toggle once per key press
    #[default]
    Press,
    /// Toggle on every tick the key is held (flickers while held)
    Held,
}

impl PauseTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseTrigger::Press => "Press",
            PauseTrigger::Held => "Held",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "press" | "edge" => Some(PauseTrigger::Press),
            "held" | "level" => Some(PauseTrigger::Held),
            _ => None,
        }
    }
}

/// Physics tunables
///
/// Lengths are in arena pixels, speeds in pixels per tick at [`SIM_DT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Gap between each paddle and its arena edge
    pub paddle_margin: f32,

    pub ball_size: f32,
    /// Horizontal serve speed
    pub initial_speed_x: f32,
    /// Vertical serve speed, scaled by the sine of the serve angle
    pub initial_speed_y: f32,

    /// Steepest paddle deflection (radians)
    pub max_bounce_angle: f32,
    /// Half-width of the random serve angle range (radians)
    pub serve_spread: f32,
    /// Distance the ball is pushed clear of a paddle after a hit
    pub paddle_nudge: f32,
    /// Hold the normalized hit offset to [-1, 1] so bounces never exceed
    /// `max_bounce_angle`
    pub clamp_bounce_offset: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            initial_speed_x: INITIAL_SPEED_X,
            initial_speed_y: INITIAL_SPEED_Y,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            serve_spread: SERVE_SPREAD,
            paddle_nudge: PADDLE_NUDGE,
            clamp_bounce_offset: true,
        }
    }
}

impl Tuning {
    /// Check that the geometry is sane enough for the simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("initial_speed_x", self.initial_speed_x),
        ];
        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("paddle_margin", self.paddle_margin),
            ("initial_speed_y", self.initial_speed_y),
            ("paddle_nudge", self.paddle_nudge),
        ];
        let angles = [
            ("max_bounce_angle", self.max_bounce_angle),
            ("serve_spread", self.serve_spread),
        ];

        for &(name, value) in lengths.iter().chain(&non_negative).chain(&angles) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in lengths {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if self.ball_size >= self.arena_height || self.ball_size >= self.arena_width {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                paddle_width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }

        if self.max_bounce_angle <= 0.0 || self.max_bounce_angle >= FRAC_PI_2 {
            return Err(ConfigError::AngleOutOfRange {
                name: "max_bounce_angle",
                value: self.max_bounce_angle,
                min: 0.0,
                max: FRAC_PI_2,
            });
        }
        if self.serve_spread < 0.0 || self.serve_spread >= FRAC_PI_2 {
            return Err(ConfigError::AngleOutOfRange {
                name: "serve_spread",
                value: self.serve_spread,
                min: 0.0,
                max: FRAC_PI_2,
            });
        }

        Ok(())
    }

    /// X of the left paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// X of the right paddle's left edge
    pub fn right_paddle_x(&self) -> f32 {
        self.arena_width - self.paddle_margin - self.paddle_width
    }

    /// Lowest paddle y that keeps it inside the arena
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Paddle y at match start (vertically centered)
    pub fn paddle_start_y(&self) -> f32 {
        self.paddle_max_y() / 2.0
    }

    /// Ball top-left corner when serving (ball centered in the arena)
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics tunables
    pub tuning: Tuning,
    /// Keyboard mapping
    pub controls: KeyBindings,
    /// Pause key behavior
    pub pause_trigger: PauseTrigger,
    /// Fixed RNG seed; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.tuning.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// The configured seed, or one taken from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0);
            log::debug!("No seed configured, using clock seed {}", seed);
            seed
        })
    }
}
