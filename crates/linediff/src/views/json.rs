//! JSON view

use linediff_core::DiffResult;
use std::io::{self, Write};

pub fn render_json(out: &mut impl Write, result: &DiffResult) -> io::Result<()> {
    writeln!(out, "{}", result.to_json()?)
}
