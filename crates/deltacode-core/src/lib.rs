// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Construction Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Block-plan data model, expander, and NPAF scorer for Turyn-type
//! complementary sequence constructions.
//!
//! Architecture:
//!   - tables: fixed ±1 base tokens, reversals, and pattern columns
//!   - plan: signed, pattern-tagged block list with value semantics
//!   - expand: plan → four concatenated ±1 sequences (X, Y, Z, W)
//!   - npaf: nonperiodic autocorrelation and four-way sum diagnostics

pub mod expand;
pub mod npaf;
pub mod plan;
pub mod tables;

pub use expand::{expand, expand_checked, SequenceSet};
pub use npaf::{npaf, npaf_all_shifts, npaf_sum_four, summarized, verify_four};
pub use plan::{Block, Plan};
pub use tables::{PatternId, TokenId};
