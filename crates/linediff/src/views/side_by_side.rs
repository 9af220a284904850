//! Side by side view - old text on the left, new text on the right

use super::{display_text, fit, marker, paint, render_stats, Labels};
use crate::config::Settings;
use linediff_core::{DiffResult, EditOperation, OperationKind};
use std::io::{self, Write};

/// Width of the line number gutter in each column: "1234 + "
const GUTTER_WIDTH: usize = 7;
const SEPARATOR: &str = " │ ";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell<'a> {
    line: usize,
    content: &'a str,
    kind: OperationKind,
}

type Row<'a> = (Option<Cell<'a>>, Option<Cell<'a>>);

/// Pair up operations into rows. Runs of removals and additions between
/// unchanged lines share rows so a replaced line sits next to its replacement.
fn build_rows(result: &DiffResult) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(result.operations.len());
    let mut pending_removed: Vec<Cell> = Vec::new();
    let mut pending_added: Vec<Cell> = Vec::new();

    for op in &result.operations {
        match op {
            EditOperation::Unchanged {
                content,
                old_line_number,
                new_line_number,
            } => {
                flush_pending(&mut pending_removed, &mut pending_added, &mut rows);
                rows.push((
                    Some(Cell {
                        line: *old_line_number,
                        content,
                        kind: OperationKind::Unchanged,
                    }),
                    Some(Cell {
                        line: *new_line_number,
                        content,
                        kind: OperationKind::Unchanged,
                    }),
                ));
            }
            EditOperation::Removed {
                content,
                old_line_number,
            } => pending_removed.push(Cell {
                line: *old_line_number,
                content,
                kind: OperationKind::Removed,
            }),
            EditOperation::Added {
                content,
                new_line_number,
            } => pending_added.push(Cell {
                line: *new_line_number,
                content,
                kind: OperationKind::Added,
            }),
        }
    }
    flush_pending(&mut pending_removed, &mut pending_added, &mut rows);

    rows
}

fn flush_pending<'a>(
    removed: &mut Vec<Cell<'a>>,
    added: &mut Vec<Cell<'a>>,
    rows: &mut Vec<Row<'a>>,
) {
    let count = removed.len().max(added.len());
    let mut removed = removed.drain(..);
    let mut added = added.drain(..);
    for _ in 0..count {
        rows.push((removed.next(), added.next()));
    }
}

fn render_cell(cell: Option<&Cell>, width: usize, color: bool) -> String {
    let Some(cell) = cell else {
        return " ".repeat(width);
    };
    let text_width = width.saturating_sub(GUTTER_WIDTH);
    let body = format!(
        "{:>4} {} {}",
        cell.line,
        marker(cell.kind),
        fit(&display_text(cell.content), text_width)
    );
    paint(&body, cell.kind, color)
}

pub fn render_side_by_side(
    out: &mut impl Write,
    result: &DiffResult,
    labels: &Labels,
    settings: &Settings,
) -> io::Result<()> {
    let column = settings.width.saturating_sub(SEPARATOR.chars().count()) / 2;

    let header = format!(
        "{}{}{}",
        fit(&labels.old, column),
        SEPARATOR,
        fit(&labels.new, column)
    );
    writeln!(out, "{}", header.trim_end())?;
    for (left, right) in build_rows(result) {
        let line = format!(
            "{}{}{}",
            render_cell(left.as_ref(), column, settings.color),
            SEPARATOR,
            render_cell(right.as_ref(), column, settings.color)
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)?;
    render_stats(out, result, settings.color)
}
