// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Common Evaluator & Outcome Record
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use deltacode_core::{expand, verify_four, Plan, SequenceSet};
use deltacode_types::{DeltaResult, Diagnostics};

/// Expand a plan and derive its diagnostics. Every search strategy
/// funnels candidate evaluation through here.
pub fn evaluate(plan: &Plan) -> DeltaResult<(SequenceSet, Diagnostics)> {
    let sequences = expand(plan)?;
    let diagnostics = verify_four(&sequences)?;
    Ok((sequences, diagnostics))
}

/// Result of a search run: the best plan found plus its derived
/// artefacts and the iteration count at termination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub plan: Plan,
    pub sequences: SequenceSet,
    pub diagnostics: Diagnostics,
    pub iterations: usize,
}

impl SearchOutcome {
    pub fn is_perfect(&self) -> bool {
        self.diagnostics.is_perfect()
    }
}
