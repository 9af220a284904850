//! Edit operations produced by the line diff

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of an edit operation, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Line present in both texts
    Unchanged,
    /// Line only present in the old text
    Removed,
    /// Line only present in the new text
    Added,
}

/// A single line of the edit script.
///
/// Line numbers are 1-based and tracked per side: the old counter moves on
/// `Unchanged` and `Removed`, the new counter on `Unchanged` and `Added`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EditOperation {
    #[serde(rename_all = "camelCase")]
    Unchanged {
        content: String,
        old_line_number: usize,
        new_line_number: usize,
    },
    #[serde(rename_all = "camelCase")]
    Removed {
        content: String,
        old_line_number: usize,
    },
    #[serde(rename_all = "camelCase")]
    Added {
        content: String,
        new_line_number: usize,
    },
}

impl EditOperation {
    pub fn unchanged(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self::Unchanged {
            content: content.into(),
            old_line_number: old_line,
            new_line_number: new_line,
        }
    }

    pub fn removed(content: impl Into<String>, old_line: usize) -> Self {
        Self::Removed {
            content: content.into(),
            old_line_number: old_line,
        }
    }

    pub fn added(content: impl Into<String>, new_line: usize) -> Self {
        Self::Added {
            content: content.into(),
            new_line_number: new_line,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Unchanged { .. } => OperationKind::Unchanged,
            Self::Removed { .. } => OperationKind::Removed,
            Self::Added { .. } => OperationKind::Added,
        }
    }

    /// The line text this operation carries
    pub fn content(&self) -> &str {
        match self {
            Self::Unchanged { content, .. }
            | Self::Removed { content, .. }
            | Self::Added { content, .. } => content,
        }
    }

    /// Line number in the old text, if this operation consumes one
    pub fn old_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged {
                old_line_number, ..
            }
            | Self::Removed {
                old_line_number, ..
            } => Some(*old_line_number),
            Self::Added { .. } => None,
        }
    }

    /// Line number in the new text, if this operation consumes one
    pub fn new_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged {
                new_line_number, ..
            }
            | Self::Added {
                new_line_number, ..
            } => Some(*new_line_number),
            Self::Removed { .. } => None,
        }
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind() != OperationKind::Unchanged
    }
}

/// Per-kind operation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn record(&mut self, kind: OperationKind) {
        match kind {
            OperationKind::Unchanged => self.unchanged += 1,
            OperationKind::Removed => self.removed += 1,
            OperationKind::Added => self.added += 1,
        }
    }

    /// Total number of operations counted
    pub fn total(&self) -> usize {
        self.added + self.removed + self.unchanged
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} added / -{} removed / {} unchanged",
            self.added, self.removed, self.unchanged
        )
    }
}
