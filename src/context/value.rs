// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display-annotated context values.

use crate::render::paint;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An immutable value attached to log records as contextual metadata.
///
/// A `ContextValue` wraps a displayable value together with rendering hints:
/// a style token string (see [`crate::render`]), an optional override for the
/// key it renders under, and whether the key is rendered alongside the value
/// at all.
///
/// Values are immutable once constructed; the builder methods consume and
/// return the value.
///
/// # Examples
///
/// ```rust
/// use logrich::context::ctx;
///
/// let plain = ctx("id_123");
/// let styled = ctx("Worker-1").with_style("magenta").with_show_key(true);
/// let renamed = ctx(42).with_display_key("task_id").with_show_key(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextValue {
    value: String,
    style: Option<String>,
    display_key: Option<String>,
    show_key: bool,
}

impl ContextValue {
    /// Wraps a displayable value with no style and no key rendering.
    pub fn new(value: impl Display) -> Self {
        Self {
            value: value.to_string(),
            style: None,
            display_key: None,
            show_key: false,
        }
    }

    /// Sets the style token string used when highlighting is enabled.
    ///
    /// Unknown tokens are ignored without error.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Overrides the key name rendered alongside the value.
    ///
    /// Only visible when [`with_show_key`](Self::with_show_key) enables key
    /// rendering; the attachment key in the frame is unaffected.
    pub fn with_display_key(mut self, key: impl Into<String>) -> Self {
        self.display_key = Some(key.into());
        self
    }

    /// Controls whether the key is rendered alongside the value.
    pub fn with_show_key(mut self, show_key: bool) -> Self {
        self.show_key = show_key;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn display_key(&self) -> Option<&str> {
        self.display_key.as_deref()
    }

    pub fn show_key(&self) -> bool {
        self.show_key
    }

    /// Renders the value for a log line.
    ///
    /// `key` is the name the value is attached under in its frame; the
    /// display-key override takes precedence when the key is shown. Styling
    /// applies only when `highlight` is on.
    pub(crate) fn render(&self, key: &str, highlight: bool) -> String {
        let text = if self.show_key {
            let shown = self.display_key.as_deref().unwrap_or(key);
            format!("{}={}", shown, self.value)
        } else {
            self.value.clone()
        };
        match (&self.style, highlight) {
            (Some(style), true) => paint(&text, style),
            _ => text,
        }
    }
}

/// Shorthand constructor for a [`ContextValue`].
///
/// Mirrors the most common call shape at annotation sites:
///
/// ```rust
/// use logrich::context::ctx;
///
/// let value = ctx("id_123").with_style("yellow");
/// ```
pub fn ctx(value: impl Display) -> ContextValue {
    ContextValue::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_value_only_by_default() {
        assert_eq!(ctx("id_123").render("exec_id", false), "id_123");
    }

    #[test]
    fn show_key_renders_attachment_key() {
        let v = ctx("id_123").with_show_key(true);
        assert_eq!(v.render("exec_id", false), "exec_id=id_123");
    }

    #[test]
    fn display_key_overrides_attachment_key() {
        let v = ctx("t-9").with_show_key(true).with_display_key("task_id");
        assert_eq!(v.render("internal_name", false), "task_id=t-9");
    }

    #[test]
    fn display_key_hidden_without_show_key() {
        let v = ctx("t-9").with_display_key("task_id");
        assert_eq!(v.render("internal_name", false), "t-9");
    }

    #[test]
    fn style_applies_only_with_highlight() {
        let v = ctx("warn").with_style("yellow");
        assert_eq!(v.render("k", false), "warn");
        let highlighted = v.render("k", true);
        assert!(highlighted.contains("warn"));
        assert!(highlighted.contains('\u{1b}'));
    }

    #[test]
    fn serde_round_trip() {
        let v = ctx("Worker-1").with_style("magenta").with_show_key(true);
        let json = serde_json::to_string(&v).unwrap();
        let back: ContextValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
