//! Unified view - hunks with `@@` headers

use super::{display_text, marker, paint, Labels};
use crossterm::style::{style, Color, Stylize};
use linediff_core::{DiffEngine, DiffResult};
use std::io::{self, Write};

pub fn render_unified(
    out: &mut impl Write,
    engine: &DiffEngine,
    result: &DiffResult,
    labels: &Labels,
    color: bool,
) -> io::Result<()> {
    let hunks = engine.hunks(result);
    if hunks.is_empty() {
        return Ok(());
    }

    writeln!(out, "--- {}", labels.old)?;
    writeln!(out, "+++ {}", labels.new)?;
    for hunk in &hunks {
        let header = hunk.header();
        if color {
            writeln!(out, "{}", style(header).with(Color::Cyan))?;
        } else {
            writeln!(out, "{header}")?;
        }

        for op in &result.operations[hunk.range.clone()] {
            let line = format!("{}{}", marker(op.kind()), display_text(op.content()));
            writeln!(out, "{}", paint(&line, op.kind(), color))?;
        }
    }
    Ok(())
}
