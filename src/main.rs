//! Duel Pong entry point
//!
//! Headless driver: replays a recorded keyboard tape through the fixed
//! timestep clock and prints the final game state as JSON.
//!
//! Usage: `duel-pong [--pause-trigger press|held] [settings.json] [tape.json]`
//!
//! A tape is a JSON array with one entry per tick, each entry listing the keys
//! held during that tick, e.g. `[["W"], ["W", "Space"], []]`.

use std::collections::VecDeque;
use std::process::ExitCode;

use duel_pong::consts::SIM_DT;
use duel_pong::hud;
use duel_pong::platform::{FixedStep, InputSampler, Key, parse_tape};
use duel_pong::sim::{GameEvent, GameState, tick};
use duel_pong::{PauseTrigger, Settings, SettingsError};

/// Display refresh rate the headless host pretends to run at
const HOST_FPS: f32 = 144.0;
/// Ticks to run when no tape is given (10 seconds)
const IDLE_TICKS: usize = 600;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    pause_trigger: Option<PauseTrigger>,
    settings_path: Option<String>,
    tape_path: Option<String>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, SettingsError> {
        let mut options = Options::default();
        let mut positional = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--pause-trigger" {
                let value = iter
                    .next()
                    .ok_or_else(|| SettingsError::BadArgument("--pause-trigger needs a value".into()))?;
                let trigger = PauseTrigger::from_str(value).ok_or_else(|| {
                    SettingsError::BadArgument(format!("unknown pause trigger '{}'", value))
                })?;
                options.pause_trigger = Some(trigger);
            } else if arg.starts_with("--") {
                return Err(SettingsError::BadArgument(format!("unknown option '{}'", arg)));
            } else {
                positional.push(arg.clone());
            }
        }
        if positional.len() > 2 {
            return Err(SettingsError::BadArgument(format!(
                "unexpected argument '{}'",
                positional[2]
            )));
        }
        let mut positional = positional.into_iter();
        options.settings_path = positional.next();
        options.tape_path = positional.next();
        Ok(options)
    }
}

fn run(options: &Options) -> Result<GameState, SettingsError> {
    let mut settings = match &options.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(trigger) = options.pause_trigger {
        settings.pause_trigger = trigger;
    }
    log::info!("Pause trigger: {}", settings.pause_trigger.as_str());

    let mut tape: VecDeque<Vec<Key>> = match &options.tape_path {
        Some(path) => parse_tape(&std::fs::read_to_string(path)?)?.into(),
        None => std::iter::repeat_n(Vec::new(), IDLE_TICKS).collect(),
    };
    log::info!("Replaying {} ticks", tape.len());

    let seed = settings.resolve_seed();
    let mut state = GameState::new(settings.tuning.clone(), seed)?;
    let mut sampler = InputSampler::new(settings.controls.clone(), settings.pause_trigger);
    let mut clock = FixedStep::default();

    let frame_dt = 1.0 / HOST_FPS;
    while !tape.is_empty() {
        for _ in 0..clock.advance(frame_dt) {
            let Some(held) = tape.pop_front() else {
                break;
            };
            let input = sampler.sample_keys(&held);
            tick(&mut state, &input);

            for event in &state.events {
                match event {
                    GameEvent::Point(_) => log::info!("{}", hud::status_line(&state)),
                    GameEvent::PauseToggled(paused) => log::debug!("Paused: {}", paused),
                    _ => {}
                }
            }
        }
    }

    log::info!(
        "Finished after {:.1}s of play: {}",
        state.time_ticks as f32 * SIM_DT,
        hud::status_line(&state)
    );
    Ok(state)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = Options::parse(&args).and_then(|options| run(&options));
    match result {
        Ok(state) => match serde_json::to_string_pretty(&state) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize state: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
