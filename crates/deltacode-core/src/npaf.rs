// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — NPAF Scorer
// ─────────────────────────────────────────────────────────────────────
//! Nonperiodic autocorrelation scoring.
//!
//! `npaf(a, s)` is the dot product of `a` with a copy of itself shifted
//! by `s`, ignoring wraparound. Four sequences form a delta code when
//! their shift-wise summed NPAF vanishes at every nonzero shift; the
//! `Diagnostics` record derived here is the objective every search
//! strategy minimises.

use deltacode_types::{DeltaError, DeltaResult, Diagnostics};

use crate::expand::SequenceSet;

fn validate_sequence(seq: &[i8]) -> DeltaResult<()> {
    if let Some(pos) = seq.iter().position(|&v| v != 1 && v != -1) {
        return Err(DeltaError::InvalidSequence(format!(
            "entry {} at index {pos} is not ±1",
            seq[pos]
        )));
    }
    Ok(())
}

/// Nonperiodic autocorrelation of `seq` at shift `shift`.
///
/// Shift 0 is the full self dot product (= n for a ±1 sequence of
/// length n). Fails with `InvalidShift` outside [0, n-1] and
/// `InvalidSequence` for non-±1 entries.
pub fn npaf(seq: &[i8], shift: usize) -> DeltaResult<i32> {
    validate_sequence(seq)?;
    let n = seq.len();
    if shift >= n {
        return Err(DeltaError::InvalidShift {
            shift,
            max: n.saturating_sub(1),
        });
    }
    Ok(seq[..n - shift]
        .iter()
        .zip(&seq[shift..])
        .map(|(&a, &b)| i32::from(a) * i32::from(b))
        .sum())
}

/// NPAF values for shifts 1..n-1, in shift order; empty when n ≤ 1.
pub fn npaf_all_shifts(seq: &[i8]) -> DeltaResult<Vec<i32>> {
    validate_sequence(seq)?;
    let n = seq.len();
    if n <= 1 {
        return Ok(Vec::new());
    }
    let mut result = Vec::with_capacity(n - 1);
    for shift in 1..n {
        result.push(
            seq[..n - shift]
                .iter()
                .zip(&seq[shift..])
                .map(|(&a, &b)| i32::from(a) * i32::from(b))
                .sum(),
        );
    }
    Ok(result)
}

/// Shift-wise sum of the four sequences' NPAF series.
///
/// Fails with `LengthMismatch` unless all four lengths agree.
pub fn npaf_sum_four(x: &[i8], y: &[i8], z: &[i8], w: &[i8]) -> DeltaResult<Vec<i32>> {
    let lengths = [x.len(), y.len(), z.len(), w.len()];
    if lengths.iter().any(|&l| l != lengths[0]) {
        return Err(DeltaError::LengthMismatch(format!(
            "sequences have lengths {lengths:?}"
        )));
    }
    let mut sum = npaf_all_shifts(x)?;
    for seq in [y, z, w] {
        for (acc, value) in sum.iter_mut().zip(npaf_all_shifts(seq)?) {
            *acc += value;
        }
    }
    Ok(sum)
}

/// Full diagnostics for an expanded sequence set.
pub fn verify_four(seqs: &SequenceSet) -> DeltaResult<Diagnostics> {
    let sum_series = npaf_sum_four(&seqs.x, &seqs.y, &seqs.z, &seqs.w)?;
    Ok(Diagnostics::from_sum_series(seqs.len(), sum_series))
}

/// Fast two-field summary `(num_nonzero_shifts, max_abs_deviation)`.
pub fn summarized(seqs: &SequenceSet) -> DeltaResult<(usize, i32)> {
    let sum_series = npaf_sum_four(&seqs.x, &seqs.y, &seqs.z, &seqs.w)?;
    let non_zero = sum_series.iter().filter(|&&v| v != 0).count();
    let max_abs = sum_series.iter().map(|v| v.abs()).max().unwrap_or(0);
    Ok((non_zero, max_abs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use crate::plan::Plan;

    #[test]
    fn test_npaf_shift_zero_is_length() {
        let seq = [1i8, -1, -1, 1, -1, 1, 1];
        assert_eq!(npaf(&seq, 0).unwrap(), seq.len() as i32);
    }

    #[test]
    fn test_npaf_all_ones() {
        let seq = [1i8; 5];
        let expected = [5, 4, 3, 2, 1];
        for (shift, &value) in expected.iter().enumerate() {
            assert_eq!(npaf(&seq, shift).unwrap(), value);
        }
        assert_eq!(npaf_all_shifts(&seq).unwrap(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_npaf_alternating() {
        let seq = [1i8, -1, 1, -1, 1, -1];
        assert_eq!(npaf_all_shifts(&seq).unwrap(), vec![-5, 4, -3, 2, -1]);
    }

    #[test]
    fn test_npaf_shift_out_of_range() {
        let seq = [1i8, 1, 1];
        let err = npaf(&seq, 3).unwrap_err();
        assert!(matches!(err, DeltaError::InvalidShift { shift: 3, max: 2 }));
    }

    #[test]
    fn test_npaf_rejects_non_pm_one() {
        let seq = [1i8, 0, 1];
        assert!(matches!(
            npaf(&seq, 1).unwrap_err(),
            DeltaError::InvalidSequence(_)
        ));
        assert!(npaf_all_shifts(&seq).is_err());
    }

    #[test]
    fn test_all_shifts_trivial_lengths() {
        assert!(npaf_all_shifts(&[]).unwrap().is_empty());
        assert!(npaf_all_shifts(&[1i8]).unwrap().is_empty());
    }

    #[test]
    fn test_sum_four_matches_manual_sum() {
        let seqs: [&[i8]; 4] = [
            &[1, 1, 1, 1],
            &[1, 1, -1, -1],
            &[1, -1, 1, -1],
            &[-1, 1, 1, -1],
        ];
        let sum = npaf_sum_four(seqs[0], seqs[1], seqs[2], seqs[3]).unwrap();
        let mut manual = vec![0i32; 3];
        for seq in seqs {
            for (acc, v) in manual.iter_mut().zip(npaf_all_shifts(seq).unwrap()) {
                *acc += v;
            }
        }
        assert_eq!(sum, manual);
    }

    #[test]
    fn test_sum_four_rejects_length_mismatch() {
        let a = [1i8, 1];
        let b = [1i8, 1, 1];
        assert!(matches!(
            npaf_sum_four(&a, &a, &a, &b).unwrap_err(),
            DeltaError::LengthMismatch(_)
        ));
    }

    #[test]
    fn test_verify_four_perfect_construction() {
        // End-to-end: the canonical plan is a delta code at length 110.
        let seqs = expand(&Plan::sarukhanian_110()).unwrap();
        let diag = verify_four(&seqs).unwrap();
        assert_eq!(diag.length, 110);
        assert_eq!(diag.num_nonzero_shifts, 0);
        assert_eq!(diag.max_abs_deviation, 0);
        assert!(diag.nonzero_pairs.is_empty());
        assert_eq!(diag.worst_shift, None);
        assert_eq!(diag.sum_series.len(), 109);
        assert!(diag.is_perfect());
    }

    #[test]
    fn test_summarized_agrees_with_diagnostics() {
        let seqs = expand(&Plan::sarukhanian_110().with_sign_flipped(0)).unwrap();
        let diag = verify_four(&seqs).unwrap();
        let (non_zero, max_abs) = summarized(&seqs).unwrap();
        assert_eq!(non_zero, diag.num_nonzero_shifts);
        assert_eq!(max_abs, diag.max_abs_deviation);
        // One flipped sign breaks the delta-code property.
        assert!(non_zero > 0);
    }
}
