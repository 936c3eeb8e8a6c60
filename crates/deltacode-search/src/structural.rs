// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Structural Search
// ─────────────────────────────────────────────────────────────────────
//! Exhaustive search over one structural mutation.
//!
//! Beyond sign flips, a plan can be repaired by inserting a two-block
//! (long, short) pair (one length-3 token and one length-2 token) at
//! any position, or by swapping two block positions. Both candidate
//! families are enumerated completely and ranked lexicographically by
//! `(num_nonzero_shifts, max_abs_deviation)`. Intended for bounded
//! plans (tens of blocks); candidate counts grow combinatorially.

use deltacode_core::tables::{ALL_PATTERNS, LONG_TOKENS, SHORT_TOKENS};
use deltacode_core::{Block, Plan, SequenceSet};
use deltacode_types::{DeltaResult, Diagnostics};

use crate::objective::{evaluate, SearchOutcome};

const SIGNS: [i8; 2] = [1, -1];

struct BestCandidate {
    plan: Plan,
    sequences: SequenceSet,
    diagnostics: Diagnostics,
}

impl BestCandidate {
    fn replace_if_better(&mut self, plan: Plan, sequences: SequenceSet, diagnostics: Diagnostics) {
        if diagnostics.rank() < self.diagnostics.rank() {
            log::debug!("structural: new best rank {:?}", diagnostics.rank());
            self.plan = plan;
            self.sequences = sequences;
            self.diagnostics = diagnostics;
        }
    }

    fn into_outcome(self, iterations: usize) -> SearchOutcome {
        SearchOutcome {
            plan: self.plan,
            sequences: self.sequences,
            diagnostics: self.diagnostics,
            iterations,
        }
    }
}

fn seed_candidate(plan: &Plan) -> DeltaResult<BestCandidate> {
    let (sequences, diagnostics) = evaluate(plan)?;
    Ok(BestCandidate {
        plan: plan.clone(),
        sequences,
        diagnostics,
    })
}

/// All (pattern, token, sign) blocks over a token subset.
fn block_family(tokens: &[deltacode_core::TokenId]) -> Vec<Block> {
    let mut family = Vec::with_capacity(ALL_PATTERNS.len() * tokens.len() * SIGNS.len());
    for pattern in ALL_PATTERNS {
        for &token in tokens {
            for sign in SIGNS {
                family.push(Block {
                    pattern,
                    token,
                    sign,
                });
            }
        }
    }
    family
}

/// Best single two-block insertion over every position, (long, short)
/// and (short, long) orderings, all patterns and signs.
///
/// Returns as soon as a perfect candidate appears; `iterations` counts
/// evaluated candidates. With no improving candidate the outcome is the
/// input plan itself.
pub fn best_pair_insertion(plan: &Plan) -> DeltaResult<SearchOutcome> {
    let longs = block_family(&LONG_TOKENS);
    let shorts = block_family(&SHORT_TOKENS);
    let mut best = seed_candidate(plan)?;
    let mut evaluated = 0usize;

    for pos in 0..=plan.len() {
        let orderings: [(&[Block], &[Block]); 2] = [(&longs, &shorts), (&shorts, &longs)];
        for (firsts, seconds) in orderings {
            for &first in firsts {
                for &second in seconds {
                    let candidate = plan.with_pair_inserted(pos, first, second);
                    let (sequences, diagnostics) = evaluate(&candidate)?;
                    evaluated += 1;
                    if diagnostics.is_perfect() {
                        log::info!(
                            "structural: perfect insertion at position {pos} after {evaluated} candidates"
                        );
                        return Ok(SearchOutcome {
                            plan: candidate,
                            sequences,
                            diagnostics,
                            iterations: evaluated,
                        });
                    }
                    best.replace_if_better(candidate, sequences, diagnostics);
                }
            }
        }
    }

    Ok(best.into_outcome(evaluated))
}

/// Best single swap over every index pair `i < j`.
pub fn best_swap(plan: &Plan) -> DeltaResult<SearchOutcome> {
    let mut best = seed_candidate(plan)?;
    let mut evaluated = 0usize;

    for i in 0..plan.len() {
        for j in (i + 1)..plan.len() {
            let candidate = plan.with_blocks_swapped(i, j);
            let (sequences, diagnostics) = evaluate(&candidate)?;
            evaluated += 1;
            if diagnostics.is_perfect() {
                log::info!("structural: perfect swap ({i}, {j}) after {evaluated} candidates");
                return Ok(SearchOutcome {
                    plan: candidate,
                    sequences,
                    diagnostics,
                    iterations: evaluated,
                });
            }
            best.replace_if_better(candidate, sequences, diagnostics);
        }
    }

    Ok(best.into_outcome(evaluated))
}

/// Combined structural pass: the better of the best insertion and the
/// best swap; `iterations` sums both candidate counts.
pub fn search(plan: &Plan) -> DeltaResult<SearchOutcome> {
    let insertion = best_pair_insertion(plan)?;
    if insertion.is_perfect() {
        return Ok(insertion);
    }
    let swap = best_swap(plan)?;
    let iterations = insertion.iterations + swap.iterations;
    let mut best = if swap.diagnostics.rank() < insertion.diagnostics.rank() {
        swap
    } else {
        insertion
    };
    best.iterations = iterations;
    Ok(best)
}
