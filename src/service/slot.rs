//! Latest-value-wins cell
//!
//! Asynchronous producers (pose callbacks, control-plane requests) and the
//! tick loop share single-slot cells rather than queues: only the most
//! recent observation of a continuously running process is meaningful, so
//! a newer write simply replaces whatever was there.

use std::sync::{Arc, Mutex};

/// A synchronized single-value slot. Cloning shares the same cell.
#[derive(Debug)]
pub struct LatestSlot<T> {
    cell: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// Store a value, replacing any previous one.
    pub fn put(&self, value: T) {
        let mut guard = self.cell.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(value);
    }

    /// Remove and return the stored value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        let mut guard = self.cell.lock().unwrap_or_else(|e| e.into_inner());
        guard.take()
    }
}

impl<T: Clone> LatestSlot<T> {
    /// Return a copy of the stored value without clearing the slot.
    pub fn peek(&self) -> Option<T> {
        let guard = self.cell.lock().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }
}
