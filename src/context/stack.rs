// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide context stack.

use super::value::ContextValue;
use crate::error::StateError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A named mapping of metadata keys to display-annotated values, pushed and
/// popped as a unit.
///
/// Keys are unique within a frame; later frames shadow earlier ones for the
/// same key. `BTreeMap` keeps render order deterministic.
pub type ContextFrame = BTreeMap<String, ContextValue>;

/// Builds a [`ContextFrame`] from key/value pairs.
///
/// ```rust
/// use logrich::context::{ctx, frame};
///
/// let f = frame([("exec_id", ctx("id_123")), ("worker", ctx("w-1"))]);
/// assert_eq!(f.len(), 2);
/// ```
pub fn frame<K, I>(pairs: I) -> ContextFrame
where
    K: Into<String>,
    I: IntoIterator<Item = (K, ContextValue)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Token identifying a pushed frame.
///
/// Each pushed frame gets a unique token that must be presented to pop it
/// again. Tokens enforce the stack discipline: only the current top frame's
/// token is accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub(crate) u64);

const ROOT_TOKEN: FrameToken = FrameToken(0);

#[derive(Debug)]
struct StackEntry {
    token: FrameToken,
    frame: ContextFrame,
}

/// Process-wide stack of named context frames.
///
/// The stack always holds a permanent root frame at the bottom, which
/// [`set_direct`](ContextStack::set_direct) mutates when nothing else is
/// pushed. Pushed frames are strictly LIFO: [`pop`](ContextStack::pop)
/// rejects any token but the current top's.
///
/// All operations are atomic with respect to each other; a single mutex
/// guards the stack so [`effective`](ContextStack::effective) always sees a
/// consistent snapshot, never half of one frame and half of another.
///
/// The stack is owned by the process-scoped logger state
/// ([`Logger`](crate::Logger) hands out access via
/// [`Logger::context`](crate::Logger::context)); crossing an OS process
/// boundary requires explicit transfer via the process bridge.
#[derive(Debug)]
pub struct ContextStack {
    entries: Mutex<Vec<StackEntry>>,
    next_token: AtomicU64,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(vec![StackEntry {
                token: ROOT_TOKEN,
                frame: ContextFrame::new(),
            }]),
            next_token: AtomicU64::new(1),
        }
    }

    /// Appends a frame and returns the token that pops exactly that frame.
    pub fn push(&self, frame: ContextFrame) -> FrameToken {
        let token = FrameToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().push(StackEntry { token, frame });
        token
    }

    /// Pops the top frame, which must correspond to `token`.
    ///
    /// The stack is strictly LIFO; presenting anything but the current top
    /// frame's token is a [`StateError`], as is popping when nothing has been
    /// pushed (the root frame is not poppable).
    pub fn pop(&self, token: FrameToken) -> Result<(), StateError> {
        let mut entries = self.entries.lock();
        if entries.len() == 1 {
            return Err(StateError::Empty);
        }
        let top = entries.last().expect("root frame always present");
        if top.token != token {
            return Err(StateError::NotTop(token.0));
        }
        entries.pop();
        Ok(())
    }

    /// Pushes a frame and returns a guard that pops it again when dropped.
    ///
    /// The pop happens on every exit path out of the guard's scope: normal
    /// return, early return, or panic unwind. This is what makes nested
    /// scoped context restore correctly under errors.
    pub fn scoped(&self, frame: ContextFrame) -> ContextGuard<'_> {
        let token = self.push(frame);
        ContextGuard { stack: self, token }
    }

    /// Returns the merged view of all active frames.
    ///
    /// Frames merge outer-to-inner with inner frames overriding same-named
    /// keys. The merge is computed freshly on every call; nothing is cached
    /// across pushes.
    pub fn effective(&self) -> ContextFrame {
        let entries = self.entries.lock();
        let mut merged = ContextFrame::new();
        for entry in entries.iter() {
            for (key, value) in &entry.frame {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    /// Mutates the top frame in place.
    ///
    /// `Some(value)` inserts or replaces the key; `None` removes it. With no
    /// pushed frames this edits the permanent root frame, which is the "set
    /// and forget" form: callers are responsible for clearing the key later
    /// with `set_direct(name, None)`.
    pub fn set_direct(&self, name: &str, value: Option<ContextValue>) {
        let mut entries = self.entries.lock();
        let top = entries.last_mut().expect("root frame always present");
        match value {
            Some(value) => {
                top.frame.insert(name.to_string(), value);
            }
            None => {
                top.frame.remove(name);
            }
        }
    }

    /// Number of pushed frames (the root frame doesn't count).
    pub fn depth(&self) -> usize {
        self.entries.lock().len() - 1
    }

    /// Drops every pushed frame and empties the root frame.
    ///
    /// Used when reconstructing logger state in a child process; outstanding
    /// guards from before the clear will find their frames gone and pop
    /// nothing.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.truncate(1);
        entries[0].frame.clear();
    }
}

/// Scoped-acquisition handle for a pushed context frame.
///
/// Pops exactly the frame it pushed when dropped, on every exit path.
/// Returned by [`ContextStack::scoped`] and
/// [`Logger::contextualize`](crate::Logger::contextualize).
#[must_use = "dropping the guard immediately pops the frame it pushed"]
#[derive(Debug)]
pub struct ContextGuard<'a> {
    stack: &'a ContextStack,
    token: FrameToken,
}

impl ContextGuard<'_> {
    /// Token of the frame this guard owns.
    pub fn token(&self) -> FrameToken {
        self.token
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        // Discipline violations inside the scope (a leaked inner guard) leave
        // our frame buried; popping someone else's frame would be worse than
        // leaving ours in place.
        let _ = self.stack.pop(self.token);
    }
}
