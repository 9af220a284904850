//! Longest common subsequence over line sequences

/// Dynamic-programming table of LCS lengths.
///
/// Cell `(i, j)` holds the LCS length of `old[..i]` and `new[..j]`. The
/// table is stored row-major in a single allocation of `(m + 1) * (n + 1)`.
#[derive(Debug, Clone)]
pub struct LcsTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl LcsTable {
    /// Build the table for two line sequences. Equality is exact.
    pub fn build<S: AsRef<str>>(old: &[S], new: &[S]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if old[i - 1].as_ref() == new[j - 1].as_ref() {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { cells, rows, cols }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the LCS of the full sequences
    pub fn len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk back from `(m, n)` and mark which indices of `new` belong to the LCS.
    ///
    /// On a mismatch the walk moves up only when the cell above is strictly
    /// larger than the cell to the left; ties move left. The returned vector
    /// has one entry per line of `new`.
    pub fn new_side_membership<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> Vec<bool> {
        let mut member = vec![false; new.len()];
        let mut i = old.len();
        let mut j = new.len();

        while i > 0 && j > 0 {
            if old[i - 1].as_ref() == new[j - 1].as_ref() {
                member[j - 1] = true;
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) > self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        member
    }
}
