//! Error taxonomy for the landing environment
//!
//! Every failure the core can report is one of these variants. Only
//! [`EnvError::InvalidZoneGeometry`] is fatal, and only at construction
//! time; the rest are per-tick conditions the tick loop recovers from.

use thiserror::Error;

/// Errors raised by the landing environment core.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Zone parameters that cannot form a valid training volume.
    ///
    /// Raised at construction/configuration time only; geometry is rebuilt
    /// from fixed dimensions plus a live center afterwards, so this never
    /// occurs mid-episode.
    #[error("invalid zone geometry: {0}")]
    InvalidZoneGeometry(String),

    /// The pose source had no data for the current tick.
    ///
    /// Recoverable: the previous episode outcome stays in place and no
    /// state transition happens.
    #[error("missing {0} telemetry for the current tick")]
    MissingTelemetry(&'static str),

    /// The actuation collaborator rejected a flight command.
    ///
    /// Recoverable: the tick becomes a no-op for actuation; the next
    /// tick's command dispatches normally.
    #[error("actuation dispatch failed")]
    ActuationDispatch(#[source] anyhow::Error),

    /// The world-mutation collaborator rejected a spawn pose.
    ///
    /// Recoverable: the reset request stays pending and is retried on the
    /// next tick.
    #[error("reset application failed")]
    ResetApplication(#[source] anyhow::Error),
}
