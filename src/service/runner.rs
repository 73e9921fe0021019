//! Fixed-rate tick loop
//!
//! [`TickRunner`] drives the environment against a world collaborator at
//! the configured cadence. Each tick runs to completion in a fixed order:
//! drain control requests, pull telemetry, evaluate, consume a pending
//! reset, release at most one flight command, publish status. No step
//! blocks on the collaborator's outcome; failures are logged and the next
//! tick proceeds with fresh inputs.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::env::action::FlightCommand;
use crate::env::reset::ResetSampler;
use crate::env::state::LandingEnv;
use crate::error::EnvError;
use crate::io::World;
use crate::service::handle::{EnvHandle, StatusSnapshot};
use crate::trajectory::{EpisodeRecorder, Transition};

/// Owns the environment, the reset sampler, and the world collaborator,
/// and runs the per-tick control flow.
pub struct TickRunner<W: World> {
    env: LandingEnv,
    sampler: ResetSampler,
    world: W,
    handle: EnvHandle,
    recorder: Option<EpisodeRecorder>,
    period: Duration,
    ticks: u64,
}

impl<W: World> TickRunner<W> {
    /// Create a runner for the given environment and world.
    pub fn new(env: LandingEnv, sampler: ResetSampler, world: W) -> Self {
        let period = env.config().tick_period();
        Self {
            env,
            sampler,
            world,
            handle: EnvHandle::new(),
            recorder: None,
            period,
            ticks: 0,
        }
    }

    /// Attach a capacity-bounded transition recorder.
    pub fn with_recorder(mut self, capacity: usize) -> Self {
        self.recorder = Some(EpisodeRecorder::new(capacity));
        self
    }

    /// A driver-side handle to this runner. Clones share the same channel.
    pub fn handle(&self) -> EnvHandle {
        self.handle.clone()
    }

    /// The environment being driven.
    pub fn env(&self) -> &LandingEnv {
        &self.env
    }

    /// The world collaborator.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the world collaborator (e.g. to step a simulated
    /// world between ticks).
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Recorded transitions, if a recorder is attached.
    pub fn recorder(&self) -> Option<&EpisodeRecorder> {
        self.recorder.as_ref()
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run ticks at the configured rate until the handle requests shutdown.
    pub fn run(&mut self) {
        info!(period_ms = self.period.as_millis() as u64, "tick loop started");
        while !self.handle.is_shutdown() {
            let started = Instant::now();
            self.tick();
            let elapsed = started.elapsed();
            if let Some(remaining) = self.period.checked_sub(elapsed) {
                std::thread::sleep(remaining);
            } else {
                debug!(elapsed_ms = elapsed.as_millis() as u64, "tick overran its period");
            }
        }
        info!(ticks = self.ticks, "tick loop stopped");
    }

    /// Run exactly one tick. Exposed for drivers that pace themselves.
    pub fn tick(&mut self) {
        // Control requests buffered since the last tick, latest value wins.
        if let Some(action) = self.handle.take_command() {
            self.env.apply_action(action);
        }
        if self.handle.take_reset_request() {
            self.env.request_reset();
        }

        // Telemetry pull and evaluation.
        let vehicle = self.world.vehicle_pose();
        let target = self.world.target_pose();
        let landed = self.world.landed_signal();
        let altitude_valid = self.world.altitude_valid();

        match self.env.evaluate(vehicle, target, landed, altitude_valid) {
            Ok(outcome) => {
                if let Some(recorder) = &mut self.recorder {
                    recorder.push(Transition {
                        episode: self.env.episode(),
                        tick: self.ticks,
                        relative_position: self.env.relative_pose().position,
                        action: self.env.last_action(),
                        reward: outcome.reward,
                        done: outcome.done,
                        wrong_altitude: outcome.wrong_altitude,
                    });
                }
            }
            Err(err) => debug!(%err, "evaluation skipped"),
        }

        // Pending reset, retried next tick on failure.
        match self.env.consume_reset_if_pending(&mut self.sampler, &mut self.world) {
            Ok(_) => {}
            Err(err) => warn!(%err, "reset will be retried"),
        }

        // At most one flight command per tick.
        if let Some(command) = self.env.take_dispatch() {
            let result = match command {
                FlightCommand::Takeoff => self.world.dispatch_takeoff(),
                FlightCommand::Land => self.world.dispatch_land(),
                FlightCommand::Move(twist) => self.world.dispatch_velocity(twist),
            };
            if let Err(err) = result {
                let err = EnvError::ActuationDispatch(err);
                warn!(%err, "command dropped");
            }
        }

        self.handle.publish(StatusSnapshot {
            outcome: self.env.outcome(),
            relative_pose: self.env.relative_pose(),
            episode: self.env.episode(),
        });
        self.ticks += 1;
    }
}
