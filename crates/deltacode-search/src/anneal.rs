// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Simulated Annealing Engine
// ─────────────────────────────────────────────────────────────────────
//! Simulated annealing over sign flips.
//!
//! Each step: cool (re-heating from the floor), flip one uniformly
//! random block sign, score the neighbour, and accept it when the
//! weighted score improves or with probability `exp(-delta / temp)`.
//! Best plan/score snapshots are tracked separately from the walking
//! `current` state and never regress.

use serde::{Deserialize, Serialize};

use deltacode_core::{Plan, SequenceSet};
use deltacode_types::{DeltaError, DeltaResult, Diagnostics, SearchConfig};

use crate::objective::{evaluate, SearchOutcome};
use crate::rng::SimpleRng;

/// One strict improvement of the best-ever score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub iteration: usize,
    pub score: i64,
    pub num_nonzero_shifts: usize,
    pub max_abs_deviation: i32,
}

/// Simulated-annealing search engine.
///
/// Holds the walking `current` plan/score, the best-ever snapshot, the
/// temperature schedule, and a log of best-score improvements.
pub struct Annealer {
    cfg: SearchConfig,
    rng: SimpleRng,
    temperature: f64,
    current_plan: Plan,
    current_score: i64,
    best_plan: Plan,
    best_sequences: SequenceSet,
    best_diagnostics: Diagnostics,
    best_score: i64,
    iterations: usize,
    pub improvements: Vec<Improvement>,
}

impl Annealer {
    /// Create an engine positioned at `plan`.
    ///
    /// Fails on an invalid config or an empty plan (there is nothing to
    /// flip in an empty plan).
    pub fn new(plan: Plan, cfg: SearchConfig) -> DeltaResult<Self> {
        cfg.validate()?;
        if plan.is_empty() {
            return Err(DeltaError::Config(
                "annealing needs at least one block to mutate".to_string(),
            ));
        }
        let (sequences, diagnostics) = evaluate(&plan)?;
        let score = diagnostics.weighted_score();
        Ok(Self {
            rng: SimpleRng::new(cfg.seed),
            temperature: cfg.initial_temp,
            current_plan: plan.clone(),
            current_score: score,
            best_plan: plan,
            best_sequences: sequences,
            best_diagnostics: diagnostics,
            best_score: score,
            iterations: 0,
            improvements: Vec::new(),
            cfg,
        })
    }

    /// One mutate → expand → score → accept/reject step.
    pub fn step(&mut self) -> DeltaResult<()> {
        // Cool every iteration, accepted or not; re-heat from the floor.
        self.temperature *= self.cfg.cooling_rate;
        if self.temperature < self.cfg.temp_floor {
            self.temperature = self.cfg.initial_temp;
        }

        let idx = self.rng.next_index(self.current_plan.len());
        let candidate = self.current_plan.with_sign_flipped(idx);
        let (sequences, diagnostics) = evaluate(&candidate)?;
        let score = diagnostics.weighted_score();

        let delta = score - self.current_score;
        let accept =
            delta < 0 || self.rng.next_f64() < (-(delta as f64) / self.temperature).exp();

        if accept {
            self.current_plan = candidate;
            self.current_score = score;

            if score < self.best_score {
                self.best_plan = self.current_plan.clone();
                self.best_sequences = sequences;
                self.best_diagnostics = diagnostics;
                self.best_score = score;
                self.improvements.push(Improvement {
                    iteration: self.iterations,
                    score,
                    num_nonzero_shifts: self.best_diagnostics.num_nonzero_shifts,
                    max_abs_deviation: self.best_diagnostics.max_abs_deviation,
                });
                log::debug!(
                    "anneal: iteration {}, best score {}, temp {:.3}",
                    self.iterations,
                    score,
                    self.temperature
                );
            }
        }

        self.iterations += 1;
        Ok(())
    }

    /// Run until a perfect score or the iteration budget.
    pub fn run(&mut self) -> DeltaResult<SearchOutcome> {
        while self.iterations < self.cfg.max_iterations && self.best_score != 0 {
            self.step()?;
        }
        if self.best_score == 0 {
            log::info!("anneal: perfect solution after {} iterations", self.iterations);
        }
        Ok(self.outcome())
    }

    /// Snapshot of the best state found so far.
    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            plan: self.best_plan.clone(),
            sequences: self.best_sequences.clone(),
            diagnostics: self.best_diagnostics.clone(),
            iterations: self.iterations,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Convenience wrapper: one full annealing run over `plan`.
pub fn anneal(plan: &Plan, cfg: &SearchConfig) -> DeltaResult<SearchOutcome> {
    Annealer::new(plan.clone(), cfg.clone())?.run()
}
