// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Search Engines
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Search engines driving the summed NPAF of a block plan to zero.
//!
//! Three interchangeable strategies share one plan evaluator and one
//! mutation vocabulary (sign flip, block swap, pair insertion):
//!   - greedy: deterministic best-flip descent to a local minimum
//!   - anneal: simulated annealing with re-heating, weighted objective
//!   - structural: exhaustive single pair-insertion / single swap
//!
//! A seeded stochastic flip/swap walk (`local`) rounds out the set for
//! quick repair passes. All strategies treat plans as immutable values
//! and run single-threaded with no I/O inside the loop.

pub mod anneal;
pub mod greedy;
pub mod local;
pub mod objective;
pub mod rng;
pub mod structural;

pub use anneal::{Annealer, Improvement};
pub use objective::{evaluate, SearchOutcome};
pub use rng::SimpleRng;
