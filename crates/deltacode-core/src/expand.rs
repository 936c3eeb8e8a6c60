// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Block Expander
// ─────────────────────────────────────────────────────────────────────
//! Expansion of a block plan into four concatenated ±1 sequences.
//!
//! Each block contributes the outer product of its pattern column and
//! its token values, scaled by its sign: row r receives
//! `pattern[r] * token[i] * sign` for every position i. Pure function
//! of the plan and the immutable tables; no caching, every candidate
//! plan is re-expanded from scratch.

use serde::{Deserialize, Serialize};

use deltacode_types::{DeltaError, DeltaResult};

use crate::plan::Plan;

/// Four equal-length ±1 sequences produced by expanding a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSet {
    pub x: Vec<i8>,
    pub y: Vec<i8>,
    pub z: Vec<i8>,
    pub w: Vec<i8>,
}

impl SequenceSet {
    /// Common length of the four sequences.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The four rows in X, Y, Z, W order.
    pub fn rows(&self) -> [&[i8]; 4] {
        [&self.x, &self.y, &self.z, &self.w]
    }
}

/// Expand a plan into concrete X, Y, Z, W sequences.
///
/// Fails with `InvalidSign` if any block carries a sign other than ±1
/// (possible only for plans built outside `Block::new`, e.g. raw
/// deserialisation without `validate`).
pub fn expand(plan: &Plan) -> DeltaResult<SequenceSet> {
    let total = plan.total_length();
    let mut rows: [Vec<i8>; 4] = [
        Vec::with_capacity(total),
        Vec::with_capacity(total),
        Vec::with_capacity(total),
        Vec::with_capacity(total),
    ];

    for block in plan.blocks() {
        let sign = block.sign;
        if sign != 1 && sign != -1 {
            return Err(DeltaError::InvalidSign(sign));
        }
        let column = block.pattern.column();
        let values = block.token.values();
        for (row, &p) in rows.iter_mut().zip(column.iter()) {
            row.extend(values.iter().map(|&v| p * v * sign));
        }
    }

    let [x, y, z, w] = rows;
    Ok(SequenceSet { x, y, z, w })
}

/// Expand and require a specific output length (cheap feasibility gate
/// for reference instances, e.g. the length-110 construction).
pub fn expand_checked(plan: &Plan, expected_len: usize) -> DeltaResult<SequenceSet> {
    let seqs = expand(plan)?;
    if seqs.len() != expected_len {
        return Err(DeltaError::LengthMismatch(format!(
            "plan expanded to length {}, expected {expected_len}",
            seqs.len()
        )));
    }
    Ok(seqs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Block;
    use crate::tables::{PatternId, TokenId};

    #[test]
    fn test_single_block_outer_product() {
        // Pattern y = [1, 1, -1, -1] over token B = [1, 1, -1], sign -1.
        let plan = Plan::new(vec![Block::new(PatternId::Y, TokenId::B, -1).unwrap()]);
        let seqs = expand(&plan).unwrap();
        assert_eq!(seqs.x, vec![-1, -1, 1]);
        assert_eq!(seqs.y, vec![-1, -1, 1]);
        assert_eq!(seqs.z, vec![1, 1, -1]);
        assert_eq!(seqs.w, vec![1, 1, -1]);
    }

    #[test]
    fn test_blocks_concatenate_in_plan_order() {
        let plan = Plan::new(vec![
            Block::new(PatternId::X, TokenId::C, 1).unwrap(),
            Block::new(PatternId::Z, TokenId::D, 1).unwrap(),
        ]);
        let seqs = expand(&plan).unwrap();
        // x-row: +1*C then -1*D (pattern z starts with -1).
        assert_eq!(seqs.x, vec![1, -1, -1, 1]);
        // z-row: +1*C then -1*D.
        assert_eq!(seqs.z, vec![1, -1, -1, 1]);
    }

    #[test]
    fn test_rows_share_plan_length_and_are_pm_one() {
        let plan = Plan::sarukhanian_110();
        let seqs = expand(&plan).unwrap();
        assert_eq!(seqs.len(), plan.total_length());
        for row in seqs.rows() {
            assert_eq!(row.len(), 110);
            assert!(row.iter().all(|&v| v == 1 || v == -1));
        }
    }

    #[test]
    fn test_empty_plan_expands_empty() {
        let seqs = expand(&Plan::new(Vec::new())).unwrap();
        assert!(seqs.is_empty());
        assert_eq!(seqs.len(), 0);
    }

    #[test]
    fn test_expand_checked_accepts_matching_length() {
        let plan = Plan::sarukhanian_110();
        assert!(expand_checked(&plan, 110).is_ok());
    }

    #[test]
    fn test_expand_checked_rejects_wrong_length() {
        let plan = Plan::sarukhanian_110();
        let err = expand_checked(&plan, 109).unwrap_err();
        assert!(matches!(err, DeltaError::LengthMismatch(_)));
    }

    #[test]
    fn test_flip_changes_every_entry_of_its_block_only() {
        let plan = Plan::new(vec![
            Block::new(PatternId::X, TokenId::A, 1).unwrap(),
            Block::new(PatternId::X, TokenId::C, 1).unwrap(),
        ]);
        let base = expand(&plan).unwrap();
        let flipped = expand(&plan.with_sign_flipped(1)).unwrap();
        assert_eq!(&base.x[..3], &flipped.x[..3]);
        assert_eq!(base.x[3], -flipped.x[3]);
        assert_eq!(base.x[4], -flipped.x[4]);
    }
}
