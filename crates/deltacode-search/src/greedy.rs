// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Greedy Sign Descent
// ─────────────────────────────────────────────────────────────────────
//! Deterministic local search over sign flips.
//!
//! Each iteration scans every block index, simulates flipping that
//! block's sign, and applies the single best strictly-improving flip
//! (first found wins ties). Terminates at a local minimum, a perfect
//! score, or the iteration budget. The best score is non-increasing
//! across iterations by construction.

use deltacode_core::Plan;
use deltacode_types::DeltaResult;

use crate::objective::{evaluate, SearchOutcome};
use crate::rng::SimpleRng;

/// Run greedy sign descent from `plan`.
///
/// Ranks candidates lexicographically by
/// `(num_nonzero_shifts, max_abs_deviation)`.
pub fn optimize(plan: &Plan, max_iterations: usize) -> DeltaResult<SearchOutcome> {
    let mut current_plan = plan.clone();
    let (mut current_seqs, mut current_diag) = evaluate(&current_plan)?;
    let mut current_rank = current_diag.rank();
    let mut iterations = 0usize;

    log::debug!("greedy: starting from rank {current_rank:?}");

    while iterations < max_iterations && !current_diag.is_perfect() {
        iterations += 1;

        let mut best_flip = None;
        let mut best_rank = current_rank;
        for idx in 0..current_plan.len() {
            let candidate = current_plan.with_sign_flipped(idx);
            let (seqs, diag) = evaluate(&candidate)?;
            if diag.rank() < best_rank {
                best_rank = diag.rank();
                best_flip = Some((idx, candidate, seqs, diag));
            }
        }

        match best_flip {
            Some((idx, candidate, seqs, diag)) => {
                current_plan = candidate;
                current_seqs = seqs;
                current_diag = diag;
                current_rank = best_rank;
                log::debug!("greedy: iteration {iterations}, flipped block {idx}, rank {current_rank:?}");
            }
            None => {
                log::debug!("greedy: converged at local minimum after {iterations} iterations");
                break;
            }
        }
    }

    if current_diag.is_perfect() {
        log::info!("greedy: perfect solution after {iterations} iterations");
    }

    Ok(SearchOutcome {
        plan: current_plan,
        sequences: current_seqs,
        diagnostics: current_diag,
        iterations,
    })
}

/// Greedy descent from `num_starts` random sign assignments of `plan`.
///
/// Each start flips every block's sign independently with probability
/// one half, then runs [`optimize`] with the given per-start budget.
/// The input plan itself counts as a baseline candidate, so the result
/// is never worse than the input. Stops early once any start reaches a
/// perfect score. `iterations` in the result sums descent iterations
/// over all starts.
pub fn multi_start(
    plan: &Plan,
    num_starts: usize,
    max_iterations: usize,
    seed: u64,
) -> DeltaResult<SearchOutcome> {
    let (sequences, diagnostics) = evaluate(plan)?;
    let mut best = SearchOutcome {
        plan: plan.clone(),
        sequences,
        diagnostics,
        iterations: 0,
    };
    if best.is_perfect() {
        return Ok(best);
    }

    let mut rng = SimpleRng::new(seed);
    let mut total_iterations = 0usize;

    for start in 0..num_starts {
        let mut candidate = plan.clone();
        for idx in 0..candidate.len() {
            if rng.next_f64() < 0.5 {
                candidate = candidate.with_sign_flipped(idx);
            }
        }

        let outcome = optimize(&candidate, max_iterations)?;
        total_iterations += outcome.iterations;
        if outcome.diagnostics.rank() < best.diagnostics.rank() {
            log::debug!(
                "multi-start: start {start} improved to rank {:?}",
                outcome.diagnostics.rank()
            );
            best = outcome;
        }
        if best.is_perfect() {
            log::info!("multi-start: perfect solution at start {start}");
            break;
        }
    }

    best.iterations = total_iterations;
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_plan_terminates_immediately() {
        let outcome = optimize(&Plan::sarukhanian_110(), 100).unwrap();
        assert!(outcome.is_perfect());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.plan, Plan::sarukhanian_110());
    }

    #[test]
    fn test_single_flip_is_repaired_in_one_iteration() {
        let perturbed = Plan::sarukhanian_110().with_sign_flipped(17);
        let outcome = optimize(&perturbed, 100).unwrap();
        assert!(outcome.is_perfect());
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.plan, Plan::sarukhanian_110());
    }

    #[test]
    fn test_score_never_regresses() {
        let perturbed = Plan::sarukhanian_110()
            .with_sign_flipped(0)
            .with_sign_flipped(5)
            .with_sign_flipped(10);
        let (_, initial) = evaluate(&perturbed).unwrap();

        // A longer budget can only do at least as well as a shorter one.
        let one = optimize(&perturbed, 1).unwrap();
        let two = optimize(&perturbed, 2).unwrap();
        let full = optimize(&perturbed, 100).unwrap();
        assert!(one.diagnostics.rank() <= initial.rank());
        assert!(two.diagnostics.rank() <= one.diagnostics.rank());
        assert!(full.diagnostics.rank() <= two.diagnostics.rank());
    }

    #[test]
    fn test_budget_zero_returns_input_state() {
        let perturbed = Plan::sarukhanian_110().with_sign_flipped(3);
        let outcome = optimize(&perturbed, 0).unwrap();
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.plan, perturbed);
    }

    #[test]
    fn test_empty_plan_is_a_fixed_point() {
        let outcome = optimize(&Plan::new(Vec::new()), 10).unwrap();
        assert!(outcome.is_perfect());
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn test_multi_start_is_deterministic() {
        let perturbed = Plan::sarukhanian_110()
            .with_sign_flipped(2)
            .with_sign_flipped(20);
        let a = multi_start(&perturbed, 3, 20, 99).unwrap();
        let b = multi_start(&perturbed, 3, 20, 99).unwrap();
        assert_eq!(a.plan, b.plan);
        assert_eq!(a.diagnostics, b.diagnostics);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_multi_start_never_worse_than_input() {
        let perturbed = Plan::sarukhanian_110()
            .with_sign_flipped(1)
            .with_sign_flipped(8);
        let (_, initial) = evaluate(&perturbed).unwrap();
        let outcome = multi_start(&perturbed, 4, 20, 5).unwrap();
        assert!(outcome.diagnostics.rank() <= initial.rank());
    }

    #[test]
    fn test_multi_start_perfect_input_short_circuits() {
        let plan = Plan::sarukhanian_110();
        let outcome = multi_start(&plan, 8, 100, 1).unwrap();
        assert!(outcome.is_perfect());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.plan, plan);
    }

    #[test]
    fn test_multi_start_zero_starts_returns_input_state() {
        let perturbed = Plan::sarukhanian_110().with_sign_flipped(6);
        let outcome = multi_start(&perturbed, 0, 100, 1).unwrap();
        assert_eq!(outcome.plan, perturbed);
        assert_eq!(outcome.iterations, 0);
    }
}
