//! Tick loop and driver-facing service surface

pub mod handle;
pub mod runner;
pub mod slot;

pub use handle::{EnvHandle, StatusSnapshot};
pub use runner::TickRunner;
pub use slot::LatestSlot;
