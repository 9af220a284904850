//! Diff computation engine

use crate::change::{DiffStats, EditOperation, OperationKind};
use crate::lcs::LcsTable;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split text into its line sequence.
///
/// Splits on `\n` only, so `""` yields `[""]` and a trailing `\r` stays in
/// the line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Diff two texts with the default engine
pub fn diff_text(old: &str, new: &str) -> DiffResult {
    DiffEngine::default().diff(old, new)
}

/// A hunk is a window of the edit script around nearby changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Unique ID for this hunk
    pub id: usize,
    /// Operation indices covered by this hunk, context included
    pub range: Range<usize>,
    /// Starting line number in old text, or the line before when `old_len` is 0
    pub old_start: usize,
    pub old_len: usize,
    /// Starting line number in new text, or the line before when `new_len` is 0
    pub new_start: usize,
    pub new_len: usize,
    /// Number of added lines in this hunk
    pub added: usize,
    /// Number of removed lines in this hunk
    pub removed: usize,
}

impl Hunk {
    /// Unified diff header, e.g. `@@ -3,4 +3,5 @@`
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_len, self.new_start, self.new_len
        )
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// The edit script, in order
    pub operations: Vec<EditOperation>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Build a result from an edit script, counting each kind
    pub fn from_operations(operations: Vec<EditOperation>) -> Self {
        let mut stats = DiffStats::default();
        for op in &operations {
            stats.record(op.kind());
        }
        Self { operations, stats }
    }

    /// True when nothing was added or removed
    pub fn is_identical(&self) -> bool {
        self.stats.added == 0 && self.stats.removed == 0
    }

    /// Only the actual changes (excluding unchanged lines)
    pub fn changes(&self) -> impl Iterator<Item = &EditOperation> {
        self.operations.iter().filter(|op| op.is_change())
    }

    /// Old line sequence as described by the script
    pub fn old_lines(&self) -> Vec<&str> {
        self.operations
            .iter()
            .filter(|op| op.old_line().is_some())
            .map(EditOperation::content)
            .collect()
    }

    /// New line sequence as described by the script
    pub fn new_lines(&self) -> Vec<&str> {
        self.operations
            .iter()
            .filter(|op| op.new_line().is_some())
            .map(EditOperation::content)
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Group changes into hunks with `context` unchanged lines on each side.
    /// Changes separated by at most `2 * context` unchanged lines share a hunk.
    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        let mut groups: Vec<(usize, usize)> = Vec::new();
        for (idx, op) in self.operations.iter().enumerate() {
            if !op.is_change() {
                continue;
            }
            if let Some((_, last)) = groups.last_mut() {
                if idx - *last - 1 <= context.saturating_mul(2) {
                    *last = idx;
                    continue;
                }
            }
            groups.push((idx, idx));
        }

        groups
            .into_iter()
            .enumerate()
            .map(|(id, (first, last))| {
                let start = first.saturating_sub(context);
                let end = last
                    .saturating_add(context)
                    .saturating_add(1)
                    .min(self.operations.len());
                self.build_hunk(id, start..end)
            })
            .collect()
    }

    fn build_hunk(&self, id: usize, range: Range<usize>) -> Hunk {
        let before = &self.operations[..range.start];
        let old_before = before.iter().filter(|op| op.old_line().is_some()).count();
        let new_before = before.iter().filter(|op| op.new_line().is_some()).count();

        let mut old_len = 0;
        let mut new_len = 0;
        let mut added = 0;
        let mut removed = 0;
        for op in &self.operations[range.clone()] {
            match op.kind() {
                OperationKind::Unchanged => {
                    old_len += 1;
                    new_len += 1;
                }
                OperationKind::Removed => {
                    old_len += 1;
                    removed += 1;
                }
                OperationKind::Added => {
                    new_len += 1;
                    added += 1;
                }
            }
        }

        // An empty side points at the line before the change, as in unified diffs
        let old_start = if old_len > 0 { old_before + 1 } else { old_before };
        let new_start = if new_len > 0 { new_before + 1 } else { new_before };

        Hunk {
            id,
            range,
            old_start,
            old_len,
            new_start,
            new_len,
            added,
            removed,
        }
    }
}

/// A diff for a pair of files
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub result: DiffResult,
}

/// The main diff engine
#[derive(Debug, Clone)]
pub struct DiffEngine {
    /// Number of context lines to include around hunks
    context_lines: usize,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self { context_lines: 3 }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// Compute the line diff between two strings
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);

        let table = LcsTable::build(&old_lines, &new_lines);
        let in_lcs = table.new_side_membership(&old_lines, &new_lines);

        merge(&old_lines, &new_lines, &in_lcs)
    }

    /// Hunks of `result` using this engine's context setting
    pub fn hunks(&self, result: &DiffResult) -> Vec<Hunk> {
        result.hunks(self.context_lines)
    }

    /// Compute diff between two files
    pub fn diff_files(&self, old_path: &Path, new_path: &Path) -> Result<FileDiff, DiffError> {
        let old_content = read(old_path)?;
        let new_content = read(new_path)?;

        Ok(FileDiff {
            old_path: old_path.to_path_buf(),
            new_path: new_path.to_path_buf(),
            result: self.diff(&old_content, &new_content),
        })
    }
}

fn read(path: &Path) -> Result<String, DiffError> {
    std::fs::read_to_string(path).map_err(|source| DiffError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Single forward pass over both sequences.
///
/// Equal lines are kept. Otherwise an old line is removed when the new side
/// is exhausted or the current new line is not part of the LCS; anything
/// else is an addition.
fn merge(old: &[&str], new: &[&str], in_lcs: &[bool]) -> DiffResult {
    let (m, n) = (old.len(), new.len());
    let mut operations = Vec::with_capacity(m.max(n));
    let mut stats = DiffStats::default();
    let (mut i, mut j) = (0usize, 0usize);

    while i < m || j < n {
        let op = if i < m && j < n && old[i] == new[j] {
            i += 1;
            j += 1;
            EditOperation::unchanged(old[i - 1], i, j)
        } else if j >= n || (i < m && !in_lcs[j]) {
            i += 1;
            EditOperation::removed(old[i - 1], i)
        } else {
            j += 1;
            EditOperation::added(new[j - 1], j)
        };
        stats.record(op.kind());
        operations.push(op);
    }

    DiffResult { operations, stats }
}
