//! Transition recording
//!
//! The environment-side half of an experience pipeline: one [`Transition`]
//! per evaluated tick, kept in a capacity-bounded recorder that evicts the
//! oldest entries when full. What (if anything) learns from the records is
//! up to the training driver.

use std::collections::VecDeque;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::env::action::Action;

/// One evaluated tick, as seen by the training signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Episode the tick belongs to.
    pub episode: usize,

    /// Global tick index at record time.
    pub tick: u64,

    /// Vehicle position relative to the target.
    pub relative_position: Vector3<f64>,

    /// The action in effect during the tick.
    pub action: Action,

    /// Reward produced by the tick's evaluation.
    pub reward: f64,

    /// Whether the tick was terminal.
    pub done: bool,

    /// Wrong-altitude flag from the tick's evaluation.
    pub wrong_altitude: bool,
}

/// Capacity-bounded transition store, oldest-first eviction.
#[derive(Debug, Clone)]
pub struct EpisodeRecorder {
    capacity: usize,
    transitions: VecDeque<Transition>,
}

impl EpisodeRecorder {
    /// Create a recorder holding at most `capacity` transitions.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(4096)),
        }
    }

    /// Append a transition, evicting the oldest if the recorder is full.
    pub fn push(&mut self, transition: Transition) {
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Number of stored transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the recorder is empty.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of stored transitions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recently recorded transition.
    pub fn latest(&self) -> Option<&Transition> {
        self.transitions.back()
    }

    /// Iterate stored transitions oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// Remove and return all stored transitions, oldest first.
    pub fn drain(&mut self) -> Vec<Transition> {
        self.transitions.drain(..).collect()
    }
}
