//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logrich

logrich is a contextual rich-logging library for Rust.

# Development status

logrich is experimental and the API may change.

# The problem

Typical logging facades give you leveled lines and not much else. In practice
the messages that matter carry *context* (which worker, which request, which
execution), and that context is established far from the call sites that log.
Threading it through by hand couples every function signature to the logging
layer; baking it into message strings loses the structure.

logrich keeps the context out-of-band: a process-wide stack of named frames
that every emitted record reads at emit time. Frames nest, inner frames
shadow outer ones, scoped frames restore on every exit path (including panic
unwinds), and a captured snapshot can be replayed inside a spawned worker
process.

# The API

```rust
use logrich::context::{ctx, frame};

let log = logrich::logger();
{
    let _scope = log.contextualize(frame([("exec_id", ctx("id_123").with_style("yellow"))]));
    logrich::info!("Hello, {}!", "world"); // carries exec_id
}
logrich::info!("plain again");
```

Levels run `TRACE < DEBUG < INFO < SUCCESS < WARNING < ERROR < CRITICAL`, and
the minimum can be overridden temporarily in a stack discipline:

```rust
use logrich::Level;

let log = logrich::logger();
log.level_set(Level::Warning);
logrich::info!("suppressed");
log.level_restore();
```

# Rich blocks

Anything implementing [`Renderable`](render::Renderable) can be logged as a
block whose lines each carry the standard leveled header: plain strings,
[`Panel`](render::Panel)s, [`Table`](render::Table)s, or a
[`Pretty`](render::Pretty)-printed structure.

```rust
use logrich::render::Panel;
use logrich::{Level, RichOptions};

logrich::logger().rich(
    Level::Info,
    &[&Panel::new("All workers completed")],
    RichOptions::default().with_title("Status"),
);
```

# Multiprocess use

Context and level state never cross an OS process boundary implicitly. A
parent captures a [`ProcessConfig`](bridge::ProcessConfig), ships it to a
spawned worker as plain data, and the worker replays it before its first
emit. See the [`bridge`] module.

# Delivery

Records go to the configured sink either synchronously or through a queue
drained by a single background thread (the `enqueue` flag). The queue is
unbounded by default; a bounded queue never blocks the emitting thread and
fails fast when full.
*/

mod config;
mod dispatch;
mod error;
mod file_sink;
mod format;
mod inmemory_sink;
mod level;
mod level_stack;
mod log_record;
mod logger;
mod macros;
mod sink;
mod stderror_sink;

pub mod bridge;
pub mod context;
pub mod render;

pub use config::{ENV_RICH_HIGHLIGHT, ENV_SERIALIZE, LogConfig, SinkTarget};
pub use context::{ContextValue, ctx};
pub use error::{ConfigError, QueueFullError, StateError};
pub use file_sink::FileSink;
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use level_stack::LevelStack;
pub use log_record::LogRecord;
pub use logger::{
    Logger, RichOptions, global_context_configure, global_context_set, init_logger, logger,
};
pub use sink::Sink;
pub use stderror_sink::{StdErrorSink, StdOutSink};
