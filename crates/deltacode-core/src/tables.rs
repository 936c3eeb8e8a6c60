// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Base Token & Pattern Tables
// ─────────────────────────────────────────────────────────────────────
//! Fixed ±1 base sequences, their reversals, and the four length-4
//! pattern columns that broadcast a scalar token into the X, Y, Z, W
//! rows. All tables are process-wide immutable constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use deltacode_types::{DeltaError, DeltaResult};

// Reference-instance base sequences (lengths 3, 3, 2, 2).
const SEQ_A: [i8; 3] = [1, 1, 1];
const SEQ_B: [i8; 3] = [1, 1, -1];
const SEQ_C: [i8; 2] = [1, -1];
const SEQ_D: [i8; 2] = [1, -1];
// Reversed variants, spelled out so lookups stay `&'static`.
const SEQ_RA: [i8; 3] = [1, 1, 1];
const SEQ_RB: [i8; 3] = [-1, 1, 1];
const SEQ_RC: [i8; 2] = [-1, 1];
const SEQ_RD: [i8; 2] = [-1, 1];

/// Named ±1 sequence token: a base sequence or its reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenId {
    A,
    B,
    C,
    D,
    #[serde(rename = "rA")]
    RA,
    #[serde(rename = "rB")]
    RB,
    #[serde(rename = "rC")]
    RC,
    #[serde(rename = "rD")]
    RD,
}

/// All eight tokens, base before reversed.
pub const ALL_TOKENS: [TokenId; 8] = [
    TokenId::A,
    TokenId::B,
    TokenId::C,
    TokenId::D,
    TokenId::RA,
    TokenId::RB,
    TokenId::RC,
    TokenId::RD,
];

/// Length-3 tokens eligible as the "long" half of an inserted pair.
pub const LONG_TOKENS: [TokenId; 4] = [TokenId::A, TokenId::B, TokenId::RA, TokenId::RB];

/// Length-2 tokens eligible as the "short" half of an inserted pair.
pub const SHORT_TOKENS: [TokenId; 4] = [TokenId::C, TokenId::D, TokenId::RC, TokenId::RD];

impl TokenId {
    /// The token's fixed ±1 values.
    pub fn values(self) -> &'static [i8] {
        match self {
            TokenId::A => &SEQ_A,
            TokenId::B => &SEQ_B,
            TokenId::C => &SEQ_C,
            TokenId::D => &SEQ_D,
            TokenId::RA => &SEQ_RA,
            TokenId::RB => &SEQ_RB,
            TokenId::RC => &SEQ_RC,
            TokenId::RD => &SEQ_RD,
        }
    }

    /// Token length without materialising the values.
    pub fn len(self) -> usize {
        self.values().len()
    }

    /// The reversed counterpart (involution: `t.reversed().reversed() == t`).
    pub fn reversed(self) -> TokenId {
        match self {
            TokenId::A => TokenId::RA,
            TokenId::B => TokenId::RB,
            TokenId::C => TokenId::RC,
            TokenId::D => TokenId::RD,
            TokenId::RA => TokenId::A,
            TokenId::RB => TokenId::B,
            TokenId::RC => TokenId::C,
            TokenId::RD => TokenId::D,
        }
    }

    /// The snapshot name (`"A"`, `"rB"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenId::A => "A",
            TokenId::B => "B",
            TokenId::C => "C",
            TokenId::D => "D",
            TokenId::RA => "rA",
            TokenId::RB => "rB",
            TokenId::RC => "rC",
            TokenId::RD => "rD",
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenId {
    type Err = DeltaError;

    fn from_str(s: &str) -> DeltaResult<Self> {
        ALL_TOKENS
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DeltaError::UnknownToken(s.to_string()))
    }
}

/// One of the four fixed length-4 ±1 pattern columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternId {
    X,
    Y,
    Z,
    W,
}

/// All four patterns, in row order.
pub const ALL_PATTERNS: [PatternId; 4] = [PatternId::X, PatternId::Y, PatternId::Z, PatternId::W];

impl PatternId {
    /// The column vector broadcasting a token into rows X, Y, Z, W.
    pub fn column(self) -> [i8; 4] {
        match self {
            PatternId::X => [1, 1, 1, 1],
            PatternId::Y => [1, 1, -1, -1],
            PatternId::Z => [-1, 1, -1, 1],
            PatternId::W => [-1, 1, 1, -1],
        }
    }

    /// The snapshot name (`"x"`, `"y"`, `"z"`, `"w"`).
    pub fn name(self) -> &'static str {
        match self {
            PatternId::X => "x",
            PatternId::Y => "y",
            PatternId::Z => "z",
            PatternId::W => "w",
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternId {
    type Err = DeltaError;

    fn from_str(s: &str) -> DeltaResult<Self> {
        ALL_PATTERNS
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| DeltaError::UnknownPattern(s.to_string()))
    }
}
