//! Linediff Core - LCS based line diff engine
//!
//! Splits two texts into lines, computes their longest common subsequence
//! and turns it into an ordered edit script of unchanged, removed and added
//! lines with per-side line numbers.

pub mod change;
pub mod diff;
pub mod lcs;
pub mod line_ending;

pub use change::{DiffStats, EditOperation, OperationKind};
pub use diff::{diff_text, split_lines, DiffEngine, DiffError, DiffResult, FileDiff, Hunk};
pub use lcs::LcsTable;
pub use line_ending::LineEnding;
