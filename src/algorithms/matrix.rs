//! Dynamic-programming substrate shared by every alignment metric
//!
//! Two representations of the same recurrence:
//! - [`AlignmentMatrix`]: the full `(m+1)×(n+1)` table, for callers that
//!   backtrace it (detailed Levenshtein, LCS reconstruction, edit scripts)
//! - [`rolling_cost`] / [`bounded_cost`]: two rows sized to the shorter
//!   operand, for callers that only need the final scalar
//!
//! The cell rule lives in [`CostModel`] so the three metrics never carry
//! their own copy of the O(m·n) loop.
//!
//! # Complexity
//! - Time: O(m*n) for every mode (the banded mode is O(k*max(m,n)))
//! - Space: O(m*n) for the full table, O(min(m,n)) rolling

use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

/// Placeholder for cells outside the threshold band.
const FAR: usize = usize::MAX;

/// Cost rule applied at each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostModel {
    /// Minimum number of unit-cost insertions, deletions and substitutions
    Levenshtein,
    /// Length of the longest common subsequence of the two prefixes
    CommonSubsequence,
}

impl CostModel {
    /// Value of the first row / first column at offset `k`.
    #[inline]
    fn border(self, k: usize) -> usize {
        match self {
            CostModel::Levenshtein => k,
            CostModel::CommonSubsequence => 0,
        }
    }

    /// Value of cell (i,j) given whether `a[i-1] == b[j-1]` and its three
    /// predecessors: diagonal (i-1,j-1), up (i-1,j), left (i,j-1).
    #[inline]
    fn cell(self, matched: bool, diag: usize, up: usize, left: usize) -> usize {
        match self {
            CostModel::Levenshtein => {
                if matched {
                    diag
                } else {
                    diag.min(up).min(left).saturating_add(1)
                }
            }
            CostModel::CommonSubsequence => {
                if matched {
                    diag + 1
                } else {
                    up.max(left)
                }
            }
        }
    }
}

/// Full cost table, row-major, `rows = a.len() + 1`, `cols = b.len() + 1`.
///
/// Cell `(i, j)` holds the cost model's value for the prefixes `a[..i]` and
/// `b[..j]`. Kept whole so callers can walk it back from `(m, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    model: CostModel,
    cells: Vec<usize>,
}

impl AlignmentMatrix {
    /// Fill the table for `a` (rows) against `b` (columns).
    ///
    /// `eq` is the only element comparison performed; no normalization
    /// happens here.
    pub fn build<T, F>(a: &[T], b: &[T], model: CostModel, eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        trace!(rows, cols, ?model, "building full alignment matrix");

        let mut cells = vec![0usize; rows * cols];
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = model.border(j);
        }

        for i in 1..rows {
            let base = i * cols;
            let above = base - cols;
            cells[base] = model.border(i);
            let ai = &a[i - 1];
            for j in 1..cols {
                let matched = eq(ai, &b[j - 1]);
                cells[base + j] =
                    model.cell(matched, cells[above + j - 1], cells[above + j], cells[base + j - 1]);
            }
        }

        Self {
            rows,
            cols,
            model,
            cells,
        }
    }

    /// Value at `(i, j)`; `i <= left_len()`, `j <= right_len()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the row operand.
    #[inline]
    pub fn left_len(&self) -> usize {
        self.rows - 1
    }

    /// Length of the column operand.
    #[inline]
    pub fn right_len(&self) -> usize {
        self.cols - 1
    }

    pub fn model(&self) -> CostModel {
        self.model
    }

    /// Value of the terminal cell `(m, n)`.
    #[inline]
    pub fn final_cost(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Final cell of the recurrence using two rows sized to the shorter operand.
///
/// The operands may be swapped internally, so `eq` must be symmetric. Both
/// cost models are symmetric in their operands, which makes the swap safe.
pub fn rolling_cost<T, F>(a: &[T], b: &[T], model: CostModel, eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = cols.len();
    if n == 0 {
        return model.border(rows.len());
    }
    trace!(rows = rows.len() + 1, cols = n + 1, ?model, "rolling alignment");

    let mut prev: SmallVec<[usize; 64]> = (0..=n).map(|j| model.border(j)).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];

    for (i, r) in rows.iter().enumerate() {
        curr[0] = model.border(i + 1);
        for j in 1..=n {
            let matched = eq(r, &cols[j - 1]);
            curr[j] = model.cell(matched, prev[j - 1], prev[j], curr[j - 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Levenshtein cost restricted to the diagonal band `|i - j| <= max_cost`.
///
/// Returns `None` as soon as the cost provably exceeds `max_cost`: up front
/// when the length difference alone is too large, otherwise when a finished
/// row has no cell within the bound (checked once per row). Any cost that
/// is `<= max_cost` is returned exactly.
pub fn bounded_cost<T, F>(a: &[T], b: &[T], max_cost: usize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let model = CostModel::Levenshtein;
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let m = rows.len();
    let n = cols.len();

    if m - n > max_cost {
        debug!(len_diff = m - n, threshold = max_cost, "length difference exceeds threshold");
        return None;
    }
    if n == 0 {
        return Some(m);
    }

    let k = max_cost;
    let mut prev: SmallVec<[usize; 64]> = (0..=n).map(|j| if j <= k { j } else { FAR }).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec![FAR; n + 1];

    for i in 1..=m {
        let lo = i.saturating_sub(k).max(1);
        let hi = i.saturating_add(k).min(n);
        if lo > hi {
            return None;
        }

        curr[0] = if i <= k { i } else { FAR };
        if lo > 1 {
            curr[lo - 1] = FAR;
        }
        let mut row_min = curr[lo - 1];

        let r = &rows[i - 1];
        for j in lo..=hi {
            let matched = eq(r, &cols[j - 1]);
            let v = model.cell(matched, prev[j - 1], prev[j], curr[j - 1]);
            curr[j] = v;
            row_min = row_min.min(v);
        }
        if hi < n {
            curr[hi + 1] = FAR;
        }

        if row_min > k {
            debug!(row = i, threshold = k, "alignment exceeds threshold");
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let cost = prev[n];
    (cost <= k).then_some(cost)
}
