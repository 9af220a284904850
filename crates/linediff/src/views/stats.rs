//! Summary line: "+N added / -M removed / K unchanged"

use super::paint;
use linediff_core::{DiffResult, OperationKind};
use std::io::{self, Write};

pub fn render_stats(out: &mut impl Write, result: &DiffResult, color: bool) -> io::Result<()> {
    let stats = &result.stats;
    if !color {
        return writeln!(out, "{stats}");
    }

    writeln!(
        out,
        "{} / {} / {} unchanged",
        paint(&format!("+{} added", stats.added), OperationKind::Added, true),
        paint(&format!("-{} removed", stats.removed), OperationKind::Removed, true),
        stats.unchanged
    )
}
