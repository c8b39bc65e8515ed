// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime brace-template formatting.
//!
//! Message templates use brace placeholders: `{}` consumes the next
//! positional argument, `{0}` an explicit index, and `{{`/`}}` escape literal
//! braces. Formatting happens at emit time so that a malformed template is
//! recoverable: the facade catches [`FormatError`] and degrades it to an
//! error-level diagnostic record instead of panicking (the emit call itself
//! never fails).

use std::fmt::Display;
use thiserror::Error;

/// A template the formatter could not apply. Never leaves the crate; the
/// facade converts it into a diagnostic record at the emit site.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormatError {
    #[error("unmatched brace at byte {0}")]
    UnmatchedBrace(usize),

    #[error("placeholder {index} out of range ({available} arguments supplied)")]
    MissingArgument { index: usize, available: usize },

    #[error("unsupported placeholder {{{0}}}; placeholders are positional")]
    UnsupportedPlaceholder(String),
}

/// Applies positional arguments to a brace template.
pub(crate) fn format_template(
    template: &str,
    args: &[&dyn Display],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();
    let mut next_positional = 0usize;

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => placeholder.push(c),
                        None => return Err(FormatError::UnmatchedBrace(pos)),
                    }
                }
                let index = if placeholder.is_empty() {
                    let index = next_positional;
                    next_positional += 1;
                    index
                } else if let Ok(index) = placeholder.parse::<usize>() {
                    index
                } else {
                    return Err(FormatError::UnsupportedPlaceholder(placeholder));
                };
                let arg = args.get(index).ok_or(FormatError::MissingArgument {
                    index,
                    available: args.len(),
                })?;
                out.push_str(&arg.to_string());
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnmatchedBrace(pos));
                }
            }
            c => out.push(c),
        }
    }
    Ok(out)
}
