// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Delta-Code Kernel, the search core for Turyn-type complementary
//! sequence constructions.

pub mod config;
pub mod diagnostics;
pub mod error;

pub use config::SearchConfig;
pub use diagnostics::Diagnostics;
pub use error::{DeltaError, DeltaResult};
