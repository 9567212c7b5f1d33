//! Platform abstraction layer
//!
//! Glue between a host loop (window, terminal, test harness) and the
//! simulation:
//! - Fixed timestep clock
//! - Keyboard sampling into tick inputs

pub mod input;
pub mod time;

pub use input::{InputSampler, Key, KeyBindings, parse_tape};
pub use time::FixedStep;
