// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide context management for annotated, structured logging.
//!
//! This module provides the context system that lets callers attach key/value
//! annotations to every record the process emits. Context lives in a
//! process-wide stack of named frames; inner frames shadow outer frames for
//! the same key, and scoped frames restore on every exit path, including
//! panic unwinds.
//!
//! # Overview
//!
//! The context system consists of three main components:
//!
//! - [`ContextValue`]: an immutable display value carrying a style and an
//!   optional display-key override
//! - [`ContextStack`]: the process-wide stack of [`ContextFrame`]s with
//!   token-checked push/pop and scoped guards
//! - [`ContextGuard`]: a scoped-acquisition handle that pops exactly the
//!   frame it pushed when dropped
//!
//! # Scoped context
//!
//! ```rust
//! use logrich::context::{ctx, frame};
//!
//! let log = logrich::logger();
//! {
//!     let _guard = log.contextualize(frame([("exec_id", ctx("id_123").with_style("yellow"))]));
//!     logrich::info!("annotated");
//! } // frame popped here, on success or unwind
//! ```
//!
//! # Direct context
//!
//! For long-lived context without a matching pop, mutate the root frame in
//! place; the caller is responsible for clearing it later:
//!
//! ```rust
//! use logrich::context::ctx;
//!
//! let log = logrich::logger();
//! log.context().set_direct("exec_id", Some(ctx("id_123")));
//! // ... later ...
//! log.context().set_direct("exec_id", None);
//! ```

mod stack;
mod value;


// Re-export public types
pub use stack::{ContextFrame, ContextGuard, ContextStack, FrameToken, frame};
pub use value::{ContextValue, ctx};
