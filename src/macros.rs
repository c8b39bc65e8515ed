// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leveled logging macros.
//!
//! Thin sugar over [`Logger::emit`](crate::Logger::emit) on the process
//! global facade: the macro packs its arguments into the display slice the
//! facade's runtime formatter consumes.
//!
//! ```rust
//! logrich::info!("Hello, {}!", "world");
//! logrich::warning!("retrying ({} of {})", 2, 5);
//! ```
//!
//! Formatting happens at emit time, so a malformed template degrades to an
//! error-level diagnostic record instead of failing the call site.

/// Emits at [`Level::Trace`](crate::Level::Trace) on the global facade.
#[macro_export]
macro_rules! trace {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Trace,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Debug`](crate::Level::Debug) on the global facade.
#[macro_export]
macro_rules! debug {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Debug,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Info`](crate::Level::Info) on the global facade.
#[macro_export]
macro_rules! info {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Info,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Success`](crate::Level::Success) on the global facade.
#[macro_export]
macro_rules! success {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Success,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Warning`](crate::Level::Warning) on the global facade.
#[macro_export]
macro_rules! warning {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Warning,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Error`](crate::Level::Error) on the global facade.
#[macro_export]
macro_rules! error {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Error,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Emits at [`Level::Critical`](crate::Level::Critical) on the global facade.
#[macro_export]
macro_rules! critical {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Level::Critical,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}
