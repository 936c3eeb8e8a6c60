// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Delta-Code Kernel failures.
///
/// Every variant is a synchronously detected programmer/input error;
/// none of them is transient, so there is no retry semantics anywhere
/// in the kernel.
#[derive(Error, Debug)]
pub enum DeltaError {
    /// A block references a sequence token absent from the fixed table.
    #[error("unknown sequence token '{0}'")]
    UnknownToken(String),

    /// A block references a pattern column absent from the fixed table.
    #[error("unknown pattern token '{0}'")]
    UnknownPattern(String),

    /// A block sign is something other than +1 or -1.
    #[error("sign must be +1 or -1, got {0}")]
    InvalidSign(i8),

    /// A sequence handed to the scorer contains an entry other than ±1.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// Sequences of unequal length were submitted together, or an
    /// expansion did not produce the length it was required to.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// A requested autocorrelation shift lies outside [0, n-1].
    #[error("shift {shift} out of range [0, {max}]")]
    InvalidShift { shift: usize, max: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type DeltaResult<T> = Result<T, DeltaError>;
