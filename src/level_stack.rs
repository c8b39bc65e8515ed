// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary minimum-level overrides.
//!
//! The level stack implements the `level_set`/`level_restore` pair on the
//! facade: [`set`](LevelStack::set) saves the active minimum and installs a
//! new one, [`restore`](LevelStack::restore) reinstalls the most recently
//! saved value. Overrides nest; two sets need two restores to unwind.

use crate::Level;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Process-wide stack of minimum-severity overrides.
///
/// The active minimum is read on every emit, so it lives in an atomic and is
/// readable without taking the lock; the lock serializes `set`/`restore`
/// pairs against each other.
#[derive(Debug)]
pub struct LevelStack {
    saved: Mutex<Vec<Level>>,
    active: AtomicU8,
}

impl LevelStack {
    pub fn new(base: Level) -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            active: AtomicU8::new(base as u8),
        }
    }

    /// The minimum severity currently in force.
    pub fn active(&self) -> Level {
        Level::from_repr(self.active.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` passes the filter.
    ///
    /// A record is suppressed iff its severity is strictly below the active
    /// minimum.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.active()
    }

    /// Pushes the current active level and installs `level` as the new
    /// minimum.
    pub fn set(&self, level: Level) {
        let mut saved = self.saved.lock();
        saved.push(self.active());
        self.active.store(level as u8, Ordering::Relaxed);
    }

    /// Pops the most recently saved level and reinstalls it.
    ///
    /// Restoring with nothing saved is a deliberate no-op; see DESIGN.md.
    pub fn restore(&self) {
        let mut saved = self.saved.lock();
        if let Some(previous) = saved.pop() {
            self.active.store(previous as u8, Ordering::Relaxed);
        }
    }

    /// Installs a new base level and discards pending overrides.
    ///
    /// Reconfiguring the logger replaces the level configuration wholesale.
    pub(crate) fn reset(&self, base: Level) {
        let mut saved = self.saved.lock();
        saved.clear();
        self.active.store(base as u8, Ordering::Relaxed);
    }
}
