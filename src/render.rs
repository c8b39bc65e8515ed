// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rich block rendering.
//!
//! Anything convertible to a text block given a width can be logged through
//! [`Logger::rich`](crate::Logger::rich). The conversion is the
//! [`Renderable`] trait's single method; the facade treats its output as an
//! opaque multi-line string.
//!
//! The closed set shipped here covers the shapes the facade's callers
//! actually log: plain [`Text`], a bordered [`Panel`], a [`Table`], and a
//! [`Pretty`]-printed structure. Strings render directly, so
//! `logger().rich(level, &[&"plain"], opts)` works without wrapping.
//!
//! Styles are token strings: a whitespace-separated sequence of attributes
//! (`bold`, `dim`, `italic`, `underline`) and color names (`red`, `green`,
//! `yellow`, `blue`, `magenta`, `cyan`, `white`, `black`, plus `bright_`
//! variants). Unknown tokens are ignored without error.

use comfy_table::{ContentArrangement, presets};
use owo_colors::OwoColorize;

/// Any value convertible to a styled text block by the renderer.
pub trait Renderable {
    /// Converts the value into a text block no wider than `width` columns.
    fn render(&self, width: usize) -> String;
}

impl Renderable for &str {
    fn render(&self, width: usize) -> String {
        wrap(self, width)
    }
}

impl Renderable for String {
    fn render(&self, width: usize) -> String {
        wrap(self, width)
    }
}

/// A block of plain text with an optional style.
#[derive(Debug, Clone)]
pub struct Text {
    body: String,
    style: Option<String>,
}

impl Text {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

impl Renderable for Text {
    fn render(&self, width: usize) -> String {
        let wrapped = wrap(&self.body, width);
        match &self.style {
            Some(style) => paint(&wrapped, style),
            None => wrapped,
        }
    }
}

/// A bordered box around a block of text.
#[derive(Debug, Clone)]
pub struct Panel {
    body: String,
    border_style: Option<String>,
}

impl Panel {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            border_style: None,
        }
    }

    pub fn with_border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = Some(style.into());
        self
    }
}

impl Renderable for Panel {
    fn render(&self, width: usize) -> String {
        let mut table = comfy_table::Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(width as u16);
        table.add_row(vec![self.body.clone()]);
        let rendered = table.to_string();
        match &self.border_style {
            Some(style) => paint(&rendered, style),
            None => rendered,
        }
    }
}

/// A column-aligned table.
///
/// ```rust
/// use logrich::render::{Renderable, Table};
///
/// let mut table = Table::new().with_title("Process Summary");
/// table.add_column("Worker ID");
/// table.add_column("Status");
/// table.add_row(["Worker 1", "Running"]);
/// let block = table.render(80);
/// assert!(block.contains("Worker ID"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

impl Renderable for Table {
    fn render(&self, width: usize) -> String {
        let mut table = comfy_table::Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(width as u16);
        if !self.columns.is_empty() {
            table.set_header(self.columns.clone());
        }
        for row in &self.rows {
            table.add_row(row.clone());
        }
        let rendered = table.to_string();
        match &self.title {
            Some(title) => format!("{}\n{}", center(title, width), rendered),
            None => rendered,
        }
    }
}

/// A pretty-printed JSON structure.
///
/// `serde_json` pretty-printing does not re-flow to a width, so lines longer
/// than `width` are clipped rather than wrapped.
#[derive(Debug, Clone)]
pub struct Pretty(pub serde_json::Value);

impl Renderable for Pretty {
    fn render(&self, width: usize) -> String {
        let pretty = serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string());
        pretty
            .lines()
            .map(|line| {
                if line.chars().count() > width {
                    let mut clipped: String = line.chars().take(width.saturating_sub(1)).collect();
                    clipped.push('…');
                    clipped
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Applies a style token string to `text`.
///
/// Unknown tokens are ignored; an empty style returns the text unchanged.
pub(crate) fn paint(text: &str, style: &str) -> String {
    let mut out = text.to_string();
    for token in style.split_whitespace() {
        out = match token {
            "bold" => out.bold().to_string(),
            "dim" => out.dimmed().to_string(),
            "italic" => out.italic().to_string(),
            "underline" => out.underline().to_string(),
            "black" => out.black().to_string(),
            "red" => out.red().to_string(),
            "green" => out.green().to_string(),
            "yellow" => out.yellow().to_string(),
            "blue" => out.blue().to_string(),
            "magenta" => out.magenta().to_string(),
            "cyan" => out.cyan().to_string(),
            "white" => out.white().to_string(),
            "bright_black" => out.bright_black().to_string(),
            "bright_red" => out.bright_red().to_string(),
            "bright_green" => out.bright_green().to_string(),
            "bright_yellow" => out.bright_yellow().to_string(),
            "bright_blue" => out.bright_blue().to_string(),
            "bright_magenta" => out.bright_magenta().to_string(),
            "bright_cyan" => out.bright_cyan().to_string(),
            "bright_white" => out.bright_white().to_string(),
            _ => out,
        };
    }
    out
}

/// Greedy word wrap preserving existing line breaks.
pub(crate) fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.chars().count() <= width {
            out.push(paragraph.to_string());
            continue;
        }
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.chars().count() + 1 + word.chars().count() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        out.push(line);
    }
    out.join("\n")
}

/// Centers `text` within `width` columns.
pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
