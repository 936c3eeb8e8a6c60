// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Stochastic Local Search
// ─────────────────────────────────────────────────────────────────────
//! Seeded random walk mixing sign flips and block swaps.
//!
//! Cheaper than annealing for quick repair passes: candidates are
//! accepted whenever they do not worsen the lexicographic rank, so the
//! walk can drift across plateaus; the strict best is tracked
//! separately and returned.

use deltacode_core::Plan;
use deltacode_types::{DeltaError, DeltaResult};

use crate::objective::{evaluate, SearchOutcome};
use crate::rng::SimpleRng;

/// Probability of a sign flip; the remainder of moves are swaps.
const FLIP_PROBABILITY: f64 = 0.6;

/// Run a seeded flip/swap walk of at most `max_steps` candidates.
pub fn auto_local_search(plan: &Plan, max_steps: usize, seed: u64) -> DeltaResult<SearchOutcome> {
    if plan.is_empty() {
        return Err(DeltaError::Config(
            "local search needs at least one block to mutate".to_string(),
        ));
    }

    let mut rng = SimpleRng::new(seed);
    let mut current_plan = plan.clone();
    let (mut best_sequences, mut best_diagnostics) = evaluate(&current_plan)?;
    let mut current_rank = best_diagnostics.rank();
    let mut best_plan = current_plan.clone();
    let mut best_rank = current_rank;
    let mut iterations = 0usize;

    for _ in 0..max_steps {
        if best_rank == (0, 0) {
            break;
        }
        iterations += 1;

        let candidate = if current_plan.len() < 2 || rng.next_f64() < FLIP_PROBABILITY {
            current_plan.with_sign_flipped(rng.next_index(current_plan.len()))
        } else {
            let i = rng.next_index(current_plan.len());
            let mut j = rng.next_index(current_plan.len());
            while j == i {
                j = rng.next_index(current_plan.len());
            }
            current_plan.with_blocks_swapped(i, j)
        };

        let (sequences, diagnostics) = evaluate(&candidate)?;
        let rank = diagnostics.rank();

        if rank <= current_rank {
            current_plan = candidate.clone();
            current_rank = rank;
        }
        if rank < best_rank {
            log::debug!("local: iteration {iterations}, best rank {rank:?}");
            best_plan = candidate;
            best_sequences = sequences;
            best_diagnostics = diagnostics;
            best_rank = rank;
        }
    }

    Ok(SearchOutcome {
        plan: best_plan,
        sequences: best_sequences,
        diagnostics: best_diagnostics,
        iterations,
    })
}
