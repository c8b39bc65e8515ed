// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record delivery.
//!
//! A [`Dispatcher`] routes finished records to the sink, either directly on
//! the emitting thread or through a queue drained by a single background
//! consumer thread that owns the sink. Queued submission never blocks the
//! caller: the default queue is unbounded, and a bounded queue fails fast
//! with [`QueueFullError`] when full.
//!
//! Cross-thread ordering is whatever the queue's enqueue order happens to
//! be; per-producer order is preserved, no global total order across threads
//! is promised.

use crate::error::QueueFullError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

enum Command {
    Record(LogRecord),
    Flush(mpsc::Sender<()>),
}

enum Sender {
    Unbounded(mpsc::Sender<Command>),
    Bounded {
        tx: mpsc::SyncSender<Command>,
        capacity: usize,
    },
}

#[derive(Debug)]
enum Mode {
    Direct(Arc<dyn Sink>),
    Queued(Sender),
}

impl std::fmt::Debug for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Unbounded(_) => f.write_str("Sender::Unbounded"),
            Sender::Bounded { capacity, .. } => {
                f.debug_struct("Sender::Bounded").field("capacity", capacity).finish()
            }
        }
    }
}

/// Routes finished records to the sink.
///
/// Dropping the dispatcher drops its queue sender; the consumer thread
/// drains what was already submitted and exits. That is exactly the handoff
/// `reconfigure` relies on: emits in flight finish against the old sink
/// while new emits go to the replacement.
#[derive(Debug)]
pub(crate) struct Dispatcher {
    mode: Mode,
}

impl Dispatcher {
    /// Synchronous delivery on the emitting thread.
    pub(crate) fn direct(sink: Arc<dyn Sink>) -> Self {
        Self {
            mode: Mode::Direct(sink),
        }
    }

    /// Queued delivery through a background consumer thread owning `sink`.
    ///
    /// `bound` of `None` builds an unbounded queue.
    pub(crate) fn queued(sink: Arc<dyn Sink>, bound: Option<usize>) -> Self {
        let sender = match bound {
            None => {
                let (tx, rx) = mpsc::channel();
                spawn_consumer(sink, rx);
                Sender::Unbounded(tx)
            }
            Some(capacity) => {
                let (tx, rx) = mpsc::sync_channel(capacity);
                spawn_consumer(sink, rx);
                Sender::Bounded { tx, capacity }
            }
        };
        Self {
            mode: Mode::Queued(sender),
        }
    }

    /// Hands a record to the sink.
    ///
    /// Fails only on a full bounded queue; the unbounded and direct paths
    /// always succeed.
    pub(crate) fn submit(&self, record: LogRecord) -> Result<(), QueueFullError> {
        match &self.mode {
            Mode::Direct(sink) => {
                sink.write_record(record);
                Ok(())
            }
            Mode::Queued(Sender::Unbounded(tx)) => {
                // A disconnected consumer means the process is tearing down;
                // dropping the record is the only option left.
                let _ = tx.send(Command::Record(record));
                Ok(())
            }
            Mode::Queued(Sender::Bounded { tx, capacity }) => {
                match tx.try_send(Command::Record(record)) {
                    Ok(()) => Ok(()),
                    Err(mpsc::TrySendError::Full(_)) => Err(QueueFullError {
                        capacity: *capacity,
                    }),
                    Err(mpsc::TrySendError::Disconnected(_)) => Ok(()),
                }
            }
        }
    }

    /// Blocks until every record submitted before this call has reached the
    /// sink, then flushes the sink itself.
    pub(crate) fn complete(&self) {
        match &self.mode {
            Mode::Direct(sink) => sink.flush(),
            Mode::Queued(sender) => {
                let (ack_tx, ack_rx) = mpsc::channel();
                let sent = match sender {
                    Sender::Unbounded(tx) => tx.send(Command::Flush(ack_tx)).is_ok(),
                    // complete() may block here; emit paths never do
                    Sender::Bounded { tx, .. } => tx.send(Command::Flush(ack_tx)).is_ok(),
                };
                if sent {
                    let _ = ack_rx.recv();
                }
            }
        }
    }
}

fn spawn_consumer(sink: Arc<dyn Sink>, rx: mpsc::Receiver<Command>) {
    thread::Builder::new()
        .name("logrich-dispatch".to_string())
        .spawn(move || {
            while let Ok(command) = rx.recv() {
                match command {
                    Command::Record(record) => sink.write_record(record),
                    Command::Flush(ack) => {
                        sink.flush();
                        let _ = ack.send(());
                    }
                }
            }
            // Sender gone: drain anything already queued and exit.
            sink.flush();
        })
        .expect("Can't spawn the log delivery thread");
}
