//! View rendering modules

mod json;
mod side_by_side;
mod stats;
mod unified;

use crate::config::{OutputFormat, Settings};
use crossterm::style::{style, Color, Stylize};
use linediff_core::{DiffEngine, DiffResult, OperationKind};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use json::render_json;
pub use side_by_side::render_side_by_side;
pub use stats::render_stats;
pub use unified::render_unified;

pub const TAB_WIDTH: usize = 4;

/// Display names of the two inputs
#[derive(Debug, Clone)]
pub struct Labels {
    pub old: String,
    pub new: String,
}

pub fn render(
    out: &mut impl Write,
    engine: &DiffEngine,
    result: &DiffResult,
    labels: &Labels,
    settings: &Settings,
) -> io::Result<()> {
    match settings.format {
        OutputFormat::SideBySide => render_side_by_side(out, result, labels, settings),
        OutputFormat::Unified => render_unified(out, engine, result, labels, settings.color),
        OutputFormat::Json => render_json(out, result),
        OutputFormat::Stats => render_stats(out, result, settings.color),
    }
}

fn kind_color(kind: OperationKind) -> Option<Color> {
    match kind {
        OperationKind::Added => Some(Color::Green),
        OperationKind::Removed => Some(Color::Red),
        OperationKind::Unchanged => None,
    }
}

/// Color `text` for `kind` when color is enabled
fn paint(text: &str, kind: OperationKind, color: bool) -> String {
    match kind_color(kind) {
        Some(fg) if color => style(text).with(fg).to_string(),
        _ => text.to_string(),
    }
}

fn marker(kind: OperationKind) -> char {
    match kind {
        OperationKind::Added => '+',
        OperationKind::Removed => '-',
        OperationKind::Unchanged => ' ',
    }
}

/// Line content as shown in a terminal: tabs expanded, carriage returns visible
fn display_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '\t' => text.push_str(&" ".repeat(TAB_WIDTH)),
            '\r' => text.push('␍'),
            c => text.push(c),
        }
    }
    text
}

/// Truncate or pad `text` to exactly `width` terminal columns
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{text}{}", " ".repeat(pad));
    }

    let mut fitted = String::new();
    let mut used = 0;
    let budget = width.saturating_sub(1);
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        fitted.push(ch);
        used += w;
    }
    if width > 0 {
        fitted.push('…');
        used += 1;
    }
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(display_text("a\tb\r"), "a    b␍");
    }

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn test_fit_wide_chars() {
        // Each CJK char takes two columns
        assert_eq!(fit("日本語", 4), "日… ");
        assert_eq!(fit("日本", 4), "日本");
    }

    #[test]
    fn test_paint_without_color() {
        assert_eq!(paint("x", OperationKind::Added, false), "x");
        assert_eq!(paint("x", OperationKind::Unchanged, true), "x");
        assert!(paint("x", OperationKind::Removed, true).contains('x'));
    }
}
