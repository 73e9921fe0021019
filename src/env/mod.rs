//! Landing environment core
//!
//! This module holds the environment state machine the agent is trained
//! against: the action set, the reward policy, the reset sampler, and the
//! per-tick state record tying them together.

pub mod action;
pub mod config;
pub mod reset;
pub mod reward;
pub mod state;

pub use action::{Action, FlightCommand};
pub use config::EnvConfig;
pub use reset::ResetSampler;
pub use reward::{EpisodeOutcome, ZoneClass};
pub use state::{LandingEnv, Phase};
