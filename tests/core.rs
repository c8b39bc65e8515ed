// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for level filtering, context propagation, and the
//! fail-soft emit path, driven through the public facade.

use logrich::context::{ctx, frame};
use logrich::{InMemorySink, Level, LogConfig, Logger};
use std::sync::Arc;

fn capture(mut configure: impl FnMut(&mut LogConfig)) -> (Logger, Arc<InMemorySink>) {
    let mut config = LogConfig::with_level(Level::Info);
    configure(&mut config);
    let logger = Logger::new(config).unwrap();
    let sink = Arc::new(InMemorySink::new());
    logger.set_sink(sink.clone());
    (logger, sink)
}

#[test]
fn test_level_info() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Info;
            c.enqueue = enqueue;
        });
        logger.info("Hello, world!", &[]);
        logger.debug("Debug, world!", &[]);
        logger.complete();

        let output = sink.drain_logs();
        assert!(output.contains("Hello, world!"));
        assert!(!output.contains("Debug, world"));
    }
}

#[test]
fn test_level_debug() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
        });
        logger.info("Hello, world!", &[]);
        logger.debug("Debug, world!", &[]);
        logger.complete();

        let output = sink.drain_logs();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Hello, world!"));
        assert!(lines[1].contains("Debug, world"));
    }
}

#[test]
fn test_level_debug_verbose() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
            c.verbosity = 3;
        });
        logger.info("Hello, world!", &[]);
        logger.debug("Debug, world!", &[]);
        logger.complete();

        let output = sink.drain_logs();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Hello, world!"));
        assert!(lines[1].contains("Debug, world"));
        // verbosity >= 2 puts the call site in the header
        assert!(lines[0].contains("core.rs"));
    }
}

#[test]
fn test_global_configure() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
        });
        {
            let _scope =
                logger.contextualize(frame([("exec_id", ctx("id_123").with_style("yellow"))]));
            logger.info("Hello, world!", &[]);
            logger.debug("Debug, world!", &[]);
            logger.complete();
        }
        let output = sink.drain_logs();
        assert!(output.lines().all(|line| line.contains("id_123")));
    }
}

#[test]
fn test_global_configure_restores_previous() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
        });
        {
            let _outer =
                logger.contextualize(frame([("exec_id", ctx("outer_ctx").with_style("yellow"))]));
            logger.info("outer message", &[]);
            {
                let _inner = logger
                    .contextualize(frame([("exec_id", ctx("inner_ctx").with_style("cyan"))]));
                logger.info("inner message", &[]);
            }
            logger.info("outer message again", &[]);
        }
        logger.info("plain message", &[]);
        logger.complete();

        let output = sink.drain_logs();
        let lines: Vec<&str> = output.lines().filter(|l| !l.trim().is_empty()).collect();
        assert!(lines[0].contains("outer_ctx"));
        assert!(!lines[0].contains("inner_ctx"));
        assert!(lines[1].contains("inner_ctx"));
        assert!(!lines[1].contains("outer_ctx"));
        assert!(lines[2].contains("outer_ctx"));
        assert!(!lines[2].contains("inner_ctx"));
        assert!(!lines[3].contains("outer_ctx"));
        assert!(!lines[3].contains("inner_ctx"));
    }
}

#[test]
fn test_context_restored_after_panic_in_scope() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    let _outer = logger.contextualize(frame([("exec_id", ctx("outer_ctx"))]));

    let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _inner = logger.contextualize(frame([("exec_id", ctx("inner_ctx"))]));
        panic!("scope body failed");
    }));
    assert!(unwound.is_err());

    logger.info("after unwind", &[]);
    logger.complete();
    let output = sink.drain_logs();
    assert!(output.contains("outer_ctx"));
    assert!(!output.contains("inner_ctx"));
}

#[test]
fn test_with_configure() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
        });
        {
            let _scope =
                logger.contextualize(frame([("exec_id", ctx("task-id").with_style("yellow"))]));
            logger.info("Hello, world!", &[]);
            logger.debug("Debug, world!", &[]);
            logger.complete();
        }
        let output = sink.drain_logs();
        assert!(output.lines().all(|line| line.contains("task-id")));
    }
}

#[test]
fn test_set_context() {
    for enqueue in [false, true] {
        let (logger, sink) = capture(|c| {
            c.level = Level::Debug;
            c.enqueue = enqueue;
        });
        logger
            .context()
            .set_direct("exec_id", Some(ctx("id_123").with_style("yellow")));
        logger.info("Hello, world!", &[]);
        logger.debug("Debug, world!", &[]);
        logger.complete();

        let output = sink.drain_logs();
        assert!(output.lines().all(|line| line.contains("id_123")));

        logger.context().set_direct("exec_id", None);
        logger.info("cleared", &[]);
        logger.complete();
        assert!(!sink.drain_logs().contains("id_123"));
    }
}

#[test]
fn test_logger_ctx_in_bind() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    logger
        .bind("session", ctx("sess-42").with_style("cyan"))
        .info("bound message", &[]);
    logger.complete();

    let output = sink.drain_logs();
    let line = output.lines().next().unwrap();
    assert!(line.contains("sess-42"));
    assert!(line.contains("bound message"));
}

#[test]
fn test_set_level_filters_messages() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    logger.debug("before level_set", &[]);
    logger.level_set(Level::Warning);
    logger.debug("should be filtered", &[]);
    logger.info("also filtered", &[]);
    logger.warning("should appear", &[]);
    logger.complete();

    let output = sink.drain_logs();
    assert!(output.contains("before level_set"));
    assert!(!output.contains("should be filtered"));
    assert!(!output.contains("also filtered"));
    assert!(output.contains("should appear"));
}

#[test]
fn test_restore_level_resets_filtering() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    logger.level_set(Level::Error);
    logger.warning("filtered warning", &[]);
    logger.level_restore();
    logger.debug("after restore", &[]);
    logger.complete();

    let output = sink.drain_logs();
    assert!(!output.contains("filtered warning"));
    assert!(output.contains("after restore"));
}

#[test]
fn test_nested_level_overrides_unwind() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    logger.level_set(Level::Warning);
    logger.level_set(Level::Error);
    logger.warning("swallowed at error", &[]);
    logger.level_restore();
    logger.warning("visible at warning", &[]);
    logger.info("still filtered", &[]);
    logger.level_restore();
    logger.debug("back to debug", &[]);
    // restoring past the bottom is a no-op
    logger.level_restore();
    logger.debug("still debug", &[]);
    logger.complete();

    let output = sink.drain_logs();
    assert!(!output.contains("swallowed at error"));
    assert!(output.contains("visible at warning"));
    assert!(!output.contains("still filtered"));
    assert!(output.contains("back to debug"));
    assert!(output.contains("still debug"));
}

#[test]
fn test_show_key_round_trip() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    {
        let _scope = logger.contextualize(frame([(
            "internal",
            ctx("t-9").with_display_key("task_id").with_show_key(true),
        )]));
        logger.info("with key", &[]);
    }
    {
        let _scope = logger.contextualize(frame([(
            "internal",
            ctx("t-9").with_display_key("task_id"),
        )]));
        logger.info("without key", &[]);
    }
    logger.complete();

    let output = sink.drain_logs();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].contains("task_id=t-9"));
    assert!(lines[1].contains("t-9"));
    assert!(!lines[1].contains("task_id"));
}

#[test]
fn test_malformed_template_never_fails_the_call() {
    let (logger, sink) = capture(|c| c.level = Level::Debug);
    logger.info("unclosed {", &[]);
    logger.info("missing {}", &[]);
    logger.info("fine afterwards", &[]);
    logger.complete();

    let output = sink.drain_logs();
    assert_eq!(output.lines().count(), 3);
    assert!(output.contains("could not be formatted"));
    assert!(output.contains("fine afterwards"));
}
