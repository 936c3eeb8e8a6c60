// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Diagnostics Record
// ─────────────────────────────────────────────────────────────────────
//! Read-only summary of a four-sequence summed NPAF series.
//!
//! This record doubles as the search objective: strategies rank plans
//! either lexicographically by `(num_nonzero_shifts, max_abs_deviation)`
//! or by the weighted scalar `num_nonzero_shifts * 1000 + max_abs_deviation`.

use serde::{Deserialize, Serialize};

/// How many leading nonzero (shift, value) pairs are kept verbatim.
const NONZERO_PAIR_LIMIT: usize = 10;

/// Derived summary of an expanded sequence set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Common length of the four expanded sequences.
    pub length: usize,
    /// Summed NPAF for shifts 1..length-1, in shift order.
    pub sum_series: Vec<i32>,
    /// Number of shifts with a nonzero sum.
    pub num_nonzero_shifts: usize,
    /// First nonzero (shift, value) pairs, 1-based shifts, capped at 10.
    pub nonzero_pairs: Vec<(usize, i32)>,
    /// Largest |sum| across all shifts.
    pub max_abs_deviation: i32,
    /// 1-based shift of the worst deviation; `None` when perfect.
    pub worst_shift: Option<usize>,
}

impl Diagnostics {
    /// Build the summary from a summed NPAF series.
    ///
    /// `worst_shift` is the first shift attaining the maximum absolute
    /// deviation, matching first-occurrence argmax semantics.
    pub fn from_sum_series(length: usize, sum_series: Vec<i32>) -> Self {
        let mut num_nonzero = 0usize;
        let mut nonzero_pairs = Vec::new();
        let mut max_abs = 0i32;
        let mut worst_shift = None;

        for (idx, &value) in sum_series.iter().enumerate() {
            if value == 0 {
                continue;
            }
            num_nonzero += 1;
            if nonzero_pairs.len() < NONZERO_PAIR_LIMIT {
                nonzero_pairs.push((idx + 1, value));
            }
            if value.abs() > max_abs {
                max_abs = value.abs();
                worst_shift = Some(idx + 1);
            }
        }

        Self {
            length,
            sum_series,
            num_nonzero_shifts: num_nonzero,
            nonzero_pairs,
            max_abs_deviation: max_abs,
            worst_shift,
        }
    }

    /// True when the summed NPAF vanishes at every nonzero shift.
    pub fn is_perfect(&self) -> bool {
        self.num_nonzero_shifts == 0
    }

    /// Lexicographic objective used by greedy and structural search.
    pub fn rank(&self) -> (usize, i32) {
        (self.num_nonzero_shifts, self.max_abs_deviation)
    }

    /// Weighted scalar objective used by simulated annealing.
    pub fn weighted_score(&self) -> i64 {
        self.num_nonzero_shifts as i64 * 1000 + i64::from(self.max_abs_deviation)
    }
}
