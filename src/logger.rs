// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging facade.
//!
//! [`Logger`] wraps the delivery pipeline behind the leveled emit methods,
//! rich block logging, context binding, and multiprocess-safe
//! reconfiguration. A process normally talks to the global facade returned
//! by [`logger()`]; independent instances (with their own context and level
//! state) exist mainly for tests and embedded use.
//!
//! # Emitting
//!
//! ```rust
//! use logrich::{Level, logger};
//!
//! logger().emit(Level::Info, "Hello, {}!", &[&"world"]);
//! logrich::info!("or through the macro: {}", 42);
//! ```
//!
//! # Binding
//!
//! A bound facade merges its values into every record it emits, without
//! touching the global context stack:
//!
//! ```rust
//! use logrich::context::ctx;
//! use logrich::logger;
//!
//! let session_log = logger().bind("session", ctx("sess-42"));
//! session_log.info("bound message", &[]);
//! ```
//!
//! # Reconfiguring
//!
//! ```rust
//! use logrich::{Level, LogConfig, init_logger};
//!
//! init_logger(LogConfig::with_level(Level::Debug)).unwrap();
//! ```

use arc_swap::ArcSwap;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt::Display;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

use crate::Level;
use crate::config::LogConfig;
use crate::context::{ContextFrame, ContextGuard, ContextStack, ContextValue};
use crate::dispatch::Dispatcher;
use crate::error::{ConfigError, QueueFullError};
use crate::format::format_template;
use crate::level_stack::LevelStack;
use crate::log_record::LogRecord;
use crate::render::{Renderable, paint};
use crate::sink::{self, Sink};

/// Verbosity at which call-site information joins the header.
const CALLSITE_VERBOSITY: u8 = 2;

/// Process-scoped logger state: the context stack, the level stack, and the
/// current configuration/delivery snapshot.
pub(crate) struct LoggerShared {
    context: ContextStack,
    levels: LevelStack,
    config: ArcSwap<LogConfig>,
    dispatch: ArcSwap<Dispatcher>,
    /// Serializes reconfiguration; emits never take this.
    reconfigure: Mutex<()>,
}

/// The public logging facade.
///
/// Cheap to clone: clones share the same process-scoped state and differ
/// only in their bound context. See the [module docs](self) for usage.
#[derive(Clone)]
pub struct Logger {
    shared: Arc<LoggerShared>,
    bound: ContextFrame,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &**self.shared.config.load())
            .field("active_level", &self.shared.levels.active())
            .field("bound", &self.bound)
            .finish()
    }
}

/// Options for [`Logger::rich`].
#[derive(Debug, Clone)]
pub struct RichOptions {
    /// Caption rendered as a rule above the block.
    pub title: Option<String>,
    /// Prefix every line with the standard leveled header.
    pub prefix: bool,
    /// Render width; the configured default applies when `None`.
    pub width: Option<usize>,
}

impl Default for RichOptions {
    fn default() -> Self {
        Self {
            title: None,
            prefix: true,
            width: None,
        }
    }
}

impl RichOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_prefix(mut self) -> Self {
        self.prefix = false;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

impl Logger {
    /// Creates an independent facade with its own context and level state.
    ///
    /// Most callers want the process-global [`logger()`] instead; fresh
    /// instances are for tests and embedded pipelines.
    pub fn new(config: LogConfig) -> Result<Self, ConfigError> {
        let mut config = config;
        config.apply_env();
        validate(&config)?;
        let dispatcher = build_dispatcher(&config)?;
        Ok(Self {
            shared: Arc::new(LoggerShared {
                context: ContextStack::new(),
                levels: LevelStack::new(config.level),
                dispatch: ArcSwap::from_pointee(dispatcher),
                config: ArcSwap::from_pointee(config),
                reconfigure: Mutex::new(()),
            }),
            bound: ContextFrame::new(),
        })
    }

    fn default_facade() -> Self {
        let config = LogConfig::default();
        let dispatcher = Dispatcher::direct(Arc::new(crate::stderror_sink::StdErrorSink::new()));
        Self {
            shared: Arc::new(LoggerShared {
                context: ContextStack::new(),
                levels: LevelStack::new(config.level),
                dispatch: ArcSwap::from_pointee(dispatcher),
                config: ArcSwap::from_pointee(config),
                reconfigure: Mutex::new(()),
            }),
            bound: ContextFrame::new(),
        }
    }

    /// The process-wide context stack this facade reads at emit time.
    pub fn context(&self) -> &ContextStack {
        &self.shared.context
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Arc<LogConfig> {
        self.shared.config.load_full()
    }

    /// The minimum severity currently in force.
    pub fn active_level(&self) -> Level {
        self.shared.levels.active()
    }

    /// Atomically replaces the sink, level, verbosity and delivery
    /// configuration.
    ///
    /// Safe to call while other threads are emitting: in-flight emits
    /// complete wholly under the old snapshot or the new one. Invalid
    /// configuration fails fast here and leaves the previous configuration
    /// in force. Pending `level_set` overrides are discarded.
    pub fn reconfigure(&self, config: LogConfig) -> Result<(), ConfigError> {
        let mut config = config;
        config.apply_env();
        validate(&config)?;
        let dispatcher = build_dispatcher(&config)?;
        let _guard = self.shared.reconfigure.lock();
        self.shared.levels.reset(config.level);
        self.shared.dispatch.store(Arc::new(dispatcher));
        self.shared.config.store(Arc::new(config));
        Ok(())
    }

    /// Replaces the sink while keeping the rest of the configuration.
    ///
    /// This is the capture hook tests use with
    /// [`InMemorySink`](crate::InMemorySink); the delivery mode (direct or
    /// queued) follows the current enqueue flag.
    pub fn set_sink(&self, sink: Arc<dyn Sink>) {
        let _guard = self.shared.reconfigure.lock();
        let config = self.shared.config.load();
        let dispatcher = if config.enqueue {
            Dispatcher::queued(sink, config.queue_bound)
        } else {
            Dispatcher::direct(sink)
        };
        self.shared.dispatch.store(Arc::new(dispatcher));
    }

    /// Blocks until every record emitted before this call has reached the
    /// sink.
    ///
    /// A no-op for synchronous delivery.
    pub fn complete(&self) {
        self.shared.dispatch.load().complete();
    }

    /// Temporarily raises (or lowers) the minimum severity.
    ///
    /// Overrides nest; each `level_set` needs a matching
    /// [`level_restore`](Self::level_restore) to unwind.
    pub fn level_set(&self, level: Level) {
        self.shared.levels.set(level);
    }

    /// Restores the minimum severity saved by the most recent
    /// [`level_set`](Self::level_set). A no-op when nothing is saved.
    pub fn level_restore(&self) {
        self.shared.levels.restore();
    }

    /// Returns a facade that merges `value` under `key` into every record it
    /// emits.
    ///
    /// The global context stack is untouched; bound values win over
    /// same-named global context at emit time. Chainable.
    pub fn bind(&self, key: impl Into<String>, value: ContextValue) -> Logger {
        let mut bound = self.bound.clone();
        bound.insert(key.into(), value);
        Logger {
            shared: self.shared.clone(),
            bound,
        }
    }

    /// Like [`bind`](Self::bind), for a whole frame at once.
    pub fn bind_frame(&self, frame: ContextFrame) -> Logger {
        let mut bound = self.bound.clone();
        bound.extend(frame);
        Logger {
            shared: self.shared.clone(),
            bound,
        }
    }

    /// Pushes `frame` onto the context stack for the duration of the
    /// returned guard.
    ///
    /// The frame pops on every exit path out of the guard's scope, including
    /// panic unwinds.
    pub fn contextualize(&self, frame: ContextFrame) -> ContextGuard<'_> {
        self.shared.context.scoped(frame)
    }

    /// Formats and emits one record at `level`.
    ///
    /// The template uses brace placeholders (`{}`, `{0}`, `{{` to escape). A
    /// malformed template never panics and never fails the call: the
    /// formatting error is itself emitted as an error-level record
    /// describing the failure.
    #[track_caller]
    pub fn emit(&self, level: Level, template: &str, args: &[&dyn Display]) {
        // Full-queue drops are deliberate here; try_emit surfaces them.
        let _ = self.emit_at(level, template, args, Location::caller());
    }

    /// Like [`emit`](Self::emit), but surfaces [`QueueFullError`] when a
    /// bounded delivery queue rejects the record.
    #[track_caller]
    pub fn try_emit(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), QueueFullError> {
        self.emit_at(level, template, args, Location::caller())
    }

    #[track_caller]
    pub fn trace(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Trace, template, args, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Debug, template, args, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Info, template, args, Location::caller());
    }

    #[track_caller]
    pub fn success(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Success, template, args, Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Warning, template, args, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Error, template, args, Location::caller());
    }

    #[track_caller]
    pub fn critical(&self, template: &str, args: &[&dyn Display]) {
        let _ = self.emit_at(Level::Critical, template, args, Location::caller());
    }

    /// Renders each renderable into a text block and emits them as one
    /// record at `level`.
    ///
    /// Blocks are separated by a blank line. When `options.prefix` is on
    /// (the default) every output line carries the standard leveled header;
    /// `options.title` renders as a rule above the block. Rich records pass
    /// through the same level filter and delivery pipeline as plain emits.
    #[track_caller]
    pub fn rich(&self, level: Level, renderables: &[&dyn Renderable], options: RichOptions) {
        if !self.shared.levels.enabled(level) {
            return;
        }
        let config = self.shared.config.load_full();
        let location = Location::caller();
        let width = options.width.unwrap_or(config.width);

        let mut blocks = Vec::with_capacity(renderables.len() + 1);
        if let Some(title) = &options.title {
            blocks.push(title_rule(title, width));
        }
        for renderable in renderables {
            blocks.push(renderable.render(width));
        }
        let body = blocks.join("\n\n");

        let fields = self.effective_fields();
        let mut record = LogRecord::new(level);
        if options.prefix {
            let header = header(level, &config, location);
            let mut first = true;
            for line in body.lines() {
                if !first {
                    record.log("\n");
                }
                first = false;
                record.log_owned(format!("{header}{line}"));
            }
        } else {
            record.log_owned(body);
        }
        for (key, value) in fields {
            record.attach(key, value);
        }
        let _ = self.shared.dispatch.load().submit(record);
    }

    fn emit_at(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        location: &'static Location<'static>,
    ) -> Result<(), QueueFullError> {
        if !self.shared.levels.enabled(level) {
            return Ok(());
        }
        match format_template(template, args) {
            Ok(message) => self.deliver(level, message, location),
            Err(err) => {
                // Fail soft: the formatting failure becomes the record.
                let diagnostic =
                    format!("message template {template:?} could not be formatted: {err}");
                self.deliver(Level::Error, diagnostic, location)
            }
        }
    }

    fn deliver(
        &self,
        level: Level,
        message: String,
        location: &'static Location<'static>,
    ) -> Result<(), QueueFullError> {
        if !self.shared.levels.enabled(level) {
            return Ok(());
        }
        let config = self.shared.config.load_full();
        let fields = self.effective_fields();
        let record = if config.serialize {
            serialized_record(level, &message, &fields)
        } else {
            text_record(level, &message, &fields, &config, location)
        };
        self.shared.dispatch.load().submit(record)
    }

    /// The merged metadata an emit would attach right now: global effective
    /// context with bound values layered on top.
    fn effective_fields(&self) -> ContextFrame {
        let mut fields = self.shared.context.effective();
        for (key, value) in &self.bound {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}

fn validate(config: &LogConfig) -> Result<(), ConfigError> {
    if config.queue_bound == Some(0) {
        return Err(ConfigError::ZeroQueueBound);
    }
    Ok(())
}

fn build_dispatcher(config: &LogConfig) -> Result<Dispatcher, ConfigError> {
    let sink = sink::create(&config.sink)?;
    Ok(if config.enqueue {
        Dispatcher::queued(sink, config.queue_bound)
    } else {
        Dispatcher::direct(sink)
    })
}

fn header(level: Level, config: &LogConfig, location: &Location) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
    let name = format!("{:<8}", level.name());
    let name = if config.highlight && !level.style().is_empty() {
        paint(&name, level.style())
    } else {
        name
    };
    if config.verbosity >= CALLSITE_VERBOSITY {
        format!(
            "{timestamp} | {name} | {}:{} | ",
            location.file(),
            location.line()
        )
    } else {
        format!("{timestamp} | {name} | ")
    }
}

fn text_record(
    level: Level,
    message: &str,
    fields: &ContextFrame,
    config: &LogConfig,
    location: &Location,
) -> LogRecord {
    let mut record = LogRecord::new(level);
    record.log_owned(header(level, config, location));
    if !fields.is_empty() {
        let rendered: Vec<String> = fields
            .iter()
            .map(|(key, value)| value.render(key, config.highlight))
            .collect();
        record.log_owned(rendered.join(" "));
        record.log(" | ");
    }
    record.log(message);
    for (key, value) in fields {
        record.attach(key.clone(), value.clone());
    }
    record
}

fn serialized_record(level: Level, message: &str, fields: &ContextFrame) -> LogRecord {
    let extra: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::from(value.value())))
        .collect();
    let payload = serde_json::json!({
        "record": {
            "time": Local::now().to_rfc3339(),
            "level": level.name(),
            "message": message,
            "extra": extra,
        }
    });
    let mut record = LogRecord::new(level);
    record.log_owned(payload.to_string());
    for (key, value) in fields {
        record.attach(key.clone(), value.clone());
    }
    record
}

fn title_rule(title: &str, width: usize) -> String {
    let label = format!(" {title} ");
    let label_width = label.chars().count();
    if label_width >= width {
        return label;
    }
    let left = (width - label_width) / 2;
    let right = width - label_width - left;
    format!("{}{}{}", "─".repeat(left), label, "─".repeat(right))
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-global facade.
///
/// Initialized on first use with the default configuration (stderr sink,
/// level Info, synchronous delivery); [`init_logger`] replaces the
/// configuration in place.
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default_facade)
}

/// Reconfigures the process-global facade.
///
/// ```rust
/// use logrich::{Level, LogConfig, init_logger};
///
/// init_logger(LogConfig::with_level(Level::Debug)).unwrap();
/// ```
pub fn init_logger(config: LogConfig) -> Result<(), ConfigError> {
    logger().reconfigure(config)
}

/// Pushes a context frame onto the global stack for the duration of the
/// returned guard.
///
/// Equivalent to `logger().contextualize(frame)`.
pub fn global_context_configure(frame: ContextFrame) -> ContextGuard<'static> {
    logger().contextualize(frame)
}

/// Sets (or, with `None`, clears) a key in the global stack's top frame.
///
/// The "set and forget" form of context: no guard, no automatic cleanup.
pub fn global_context_set(name: &str, value: Option<ContextValue>) {
    logger().context().set_direct(name, value);
}
