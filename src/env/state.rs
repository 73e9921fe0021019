//! Environment state machine
//!
//! [`LandingEnv`] owns the per-tick record tying the zone geometry, reward
//! policy, and reset sampler together: current poses, the last episode
//! outcome, the pending action, and the dispatch latches. The tick loop
//! drives it; asynchronous producers never touch it directly.

use tracing::{debug, info};

use crate::env::action::{Action, FlightCommand};
use crate::env::config::EnvConfig;
use crate::env::reset::ResetSampler;
use crate::env::reward::{self, EpisodeOutcome};
use crate::error::EnvError;
use crate::geometry::pose::{Pose, Twist};
use crate::geometry::zone::EnvironmentGeometry;
use crate::io::WorldControl;

/// Lifecycle phase of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An episode is in progress.
    Running,
    /// A reset was requested and has not been applied yet.
    AwaitingReset,
    /// The episode reached a terminal outcome; awaiting a reset request.
    Terminal,
}

/// The landing environment: geometry, reward bookkeeping, and the
/// action/reset plumbing between the training driver and the platform.
#[derive(Debug)]
pub struct LandingEnv {
    config: EnvConfig,
    geometry: EnvironmentGeometry,
    phase: Phase,
    episode: usize,

    vehicle: Pose,
    target: Pose,
    relative: Pose,
    outcome: EpisodeOutcome,
    last_action: Action,

    // Dispatch latches, released at most one per tick.
    pending_takeoff: bool,
    pending_land: bool,
    pending_move: Option<Twist>,
}

impl LandingEnv {
    /// Create an environment from a validated configuration.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        let geometry = config.geometry(Pose::origin().position)?;
        Ok(Self {
            config,
            geometry,
            phase: Phase::Running,
            episode: 0,
            vehicle: Pose::origin(),
            target: Pose::origin(),
            relative: Pose::origin(),
            outcome: EpisodeOutcome::default(),
            last_action: Action::Hover,
            pending_takeoff: false,
            pending_land: false,
            pending_move: None,
        })
    }

    /// Record a pending action from the training driver.
    ///
    /// The action becomes the reward policy's `last_action` immediately and
    /// arms exactly one dispatch latch; the vehicle itself only moves when
    /// the tick loop releases the command to the actuation collaborator.
    pub fn apply_action(&mut self, action: Action) {
        debug!(action = action.name(), "action received");
        self.last_action = action;
        match action.command(&self.config) {
            FlightCommand::Takeoff => self.pending_takeoff = true,
            FlightCommand::Land => self.pending_land = true,
            FlightCommand::Move(twist) => self.pending_move = Some(twist),
        }
    }

    /// Release at most one pending flight command.
    ///
    /// Priority order is takeoff > land > move; only the released latch is
    /// cleared, so a lower-priority command waits for a later tick.
    pub fn take_dispatch(&mut self) -> Option<FlightCommand> {
        if self.pending_takeoff {
            self.pending_takeoff = false;
            return Some(FlightCommand::Takeoff);
        }
        if self.pending_land {
            self.pending_land = false;
            return Some(FlightCommand::Land);
        }
        self.pending_move.take().map(FlightCommand::Move)
    }

    /// Run one evaluation: refresh geometry from the target, recompute the
    /// relative pose, and apply the reward policy.
    ///
    /// A missing vehicle or target pose leaves the previous outcome and
    /// phase untouched and reports [`EnvError::MissingTelemetry`]; absence
    /// of fresh data is never a terminal condition.
    pub fn evaluate(
        &mut self,
        vehicle: Option<Pose>,
        target: Option<Pose>,
        landed_signal: bool,
        altitude_valid: bool,
    ) -> Result<EpisodeOutcome, EnvError> {
        let vehicle = vehicle.ok_or(EnvError::MissingTelemetry("vehicle"))?;
        let target = target.ok_or(EnvError::MissingTelemetry("target"))?;

        self.vehicle = vehicle;
        self.target = target;
        self.geometry.refresh(target.position);
        self.relative = vehicle.relative_to(&target);

        let outcome = reward::evaluate(
            &self.config,
            &self.geometry,
            &vehicle,
            self.last_action,
            altitude_valid,
            landed_signal,
        );
        self.outcome = outcome;

        if outcome.done && self.phase == Phase::Running {
            self.phase = Phase::Terminal;
            info!(
                episode = self.episode,
                reward = outcome.reward,
                wrong_altitude = outcome.wrong_altitude,
                "episode terminal"
            );
        }

        Ok(outcome)
    }

    /// Request an episode reset. Idempotent while a reset is pending.
    pub fn request_reset(&mut self) {
        if self.phase != Phase::AwaitingReset {
            debug!(episode = self.episode, "reset requested");
            self.phase = Phase::AwaitingReset;
        }
    }

    /// If a reset is pending, sample a spawn pose and apply it to the world.
    ///
    /// On success the environment returns to [`Phase::Running`] with a
    /// fresh episode and the applied pose is returned. On failure the reset
    /// stays pending so the next tick retries; the request is never
    /// silently dropped.
    pub fn consume_reset_if_pending(
        &mut self,
        sampler: &mut ResetSampler,
        world: &mut dyn WorldControl,
    ) -> Result<Option<Pose>, EnvError> {
        if self.phase != Phase::AwaitingReset {
            return Ok(None);
        }

        let spawn = sampler.sample(&self.target, &self.geometry);
        world
            .apply_spawn_pose(spawn)
            .map_err(EnvError::ResetApplication)?;

        self.phase = Phase::Running;
        self.episode += 1;
        self.outcome = EpisodeOutcome::default();
        self.last_action = Action::Hover;
        self.pending_takeoff = false;
        self.pending_land = false;
        self.pending_move = None;

        info!(
            episode = self.episode,
            x = spawn.position.x,
            y = spawn.position.y,
            z = spawn.position.z,
            "respawned"
        );
        Ok(Some(spawn))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based episode counter, incremented on each applied reset.
    pub fn episode(&self) -> usize {
        self.episode
    }

    /// Outcome of the last completed evaluation.
    pub fn outcome(&self) -> EpisodeOutcome {
        self.outcome
    }

    /// Vehicle pose relative to the target (position only), as of the last
    /// completed evaluation.
    pub fn relative_pose(&self) -> Pose {
        self.relative
    }

    /// The action most recently recorded by [`LandingEnv::apply_action`].
    pub fn last_action(&self) -> Action {
        self.last_action
    }

    /// Environment configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Current zone geometry (as of the last evaluation).
    pub fn geometry(&self) -> &EnvironmentGeometry {
        &self.geometry
    }
}
