//! Control and status surface for the training driver
//!
//! The driver holds an [`EnvHandle`] clone and talks to the tick loop
//! through it: actions and reset requests go in as latest-value-wins
//! events, and the loop publishes a status snapshot after every tick for
//! the driver to poll.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::env::action::Action;
use crate::env::reward::EpisodeOutcome;
use crate::geometry::pose::Pose;
use crate::service::slot::LatestSlot;

/// Status published by the tick loop after each completed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Outcome of the last completed evaluation.
    pub outcome: EpisodeOutcome,

    /// Vehicle pose relative to the target (position only).
    pub relative_pose: Pose,

    /// Episode counter at snapshot time.
    pub episode: usize,
}

/// Clonable handle connecting the training driver to the tick loop.
#[derive(Debug, Clone, Default)]
pub struct EnvHandle {
    command: LatestSlot<Action>,
    reset: Arc<AtomicBool>,
    shutdown: Arc<AtomicBool>,
    status: Arc<RwLock<StatusSnapshot>>,
}

impl EnvHandle {
    /// Create a fresh handle pair (driver side and loop side are clones).
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an action. A newer action before the next tick replaces it.
    pub fn request_command(&self, action: Action) {
        self.command.put(action);
    }

    /// Request an episode reset. Idempotent while one is pending.
    pub fn request_reset(&self) {
        self.reset.store(true, Ordering::SeqCst);
    }

    /// Ask the tick loop to stop after the current tick.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Whether shutdown has been requested.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Outcome from the most recent published snapshot.
    pub fn outcome(&self) -> EpisodeOutcome {
        self.snapshot().outcome
    }

    /// Relative pose from the most recent published snapshot.
    pub fn relative_pose(&self) -> Pose {
        self.snapshot().relative_pose
    }

    /// Episode counter from the most recent published snapshot.
    pub fn episode(&self) -> usize {
        self.snapshot().episode
    }

    /// The full most recent snapshot.
    pub fn snapshot(&self) -> StatusSnapshot {
        *self.status.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Drain the pending action, if any. Called once per tick by the loop.
    pub(crate) fn take_command(&self) -> Option<Action> {
        self.command.take()
    }

    /// Consume the reset flag, observing each request exactly once.
    pub(crate) fn take_reset_request(&self) -> bool {
        self.reset.swap(false, Ordering::SeqCst)
    }

    /// Publish a snapshot for the driver to poll.
    pub(crate) fn publish(&self, snapshot: StatusSnapshot) {
        *self.status.write().unwrap_or_else(|e| e.into_inner()) = snapshot;
    }
}
