// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Block Plan Model
// ─────────────────────────────────────────────────────────────────────
//! Signed, pattern-tagged block list with value semantics.
//!
//! A `Plan` is never mutated in place: every mutation constructor
//! returns a fresh `Plan`, so best-plan snapshots held by a search
//! engine can never alias a plan a later step modifies.

use serde::{Deserialize, Serialize};

use deltacode_types::{DeltaError, DeltaResult};

use crate::tables::{PatternId, TokenId};

/// One (pattern, token, sign) entry of a plan.
///
/// Serialises with the snapshot field names `pattern` / `seq` / `sign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub pattern: PatternId,
    #[serde(rename = "seq")]
    pub token: TokenId,
    pub sign: i8,
}

impl Block {
    /// Construct a block, rejecting any sign other than ±1.
    pub fn new(pattern: PatternId, token: TokenId, sign: i8) -> DeltaResult<Self> {
        if sign != 1 && sign != -1 {
            return Err(DeltaError::InvalidSign(sign));
        }
        Ok(Self {
            pattern,
            token,
            sign,
        })
    }

    /// The same block with its sign negated.
    pub fn flipped(self) -> Self {
        Self {
            sign: -self.sign,
            ..self
        }
    }
}

/// An ordered block list; concatenation order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    blocks: Vec<Block>,
}

impl Plan {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Block> {
        self.blocks.get(idx)
    }

    /// Expanded sequence length, computed without expanding: the sum of
    /// the referenced token lengths over all blocks.
    pub fn total_length(&self) -> usize {
        self.blocks.iter().map(|b| b.token.len()).sum()
    }

    /// Check every block sign is exactly ±1 (relevant after snapshot load).
    pub fn validate(&self) -> DeltaResult<()> {
        for block in &self.blocks {
            if block.sign != 1 && block.sign != -1 {
                return Err(DeltaError::InvalidSign(block.sign));
            }
        }
        Ok(())
    }

    /// A new plan with the sign of block `idx` negated.
    ///
    /// Panics if `idx` is out of range; search engines only generate
    /// indices of existing blocks.
    pub fn with_sign_flipped(&self, idx: usize) -> Plan {
        let mut blocks = self.blocks.clone();
        blocks[idx] = blocks[idx].flipped();
        Plan { blocks }
    }

    /// A new plan with blocks `i` and `j` exchanged.
    pub fn with_blocks_swapped(&self, i: usize, j: usize) -> Plan {
        let mut blocks = self.blocks.clone();
        blocks.swap(i, j);
        Plan { blocks }
    }

    /// A new plan with `first` and `second` inserted at position `idx`
    /// (0 ≤ idx ≤ len; idx == len appends).
    pub fn with_pair_inserted(&self, idx: usize, first: Block, second: Block) -> Plan {
        let mut blocks = Vec::with_capacity(self.blocks.len() + 2);
        blocks.extend_from_slice(&self.blocks[..idx]);
        blocks.push(first);
        blocks.push(second);
        blocks.extend_from_slice(&self.blocks[idx..]);
        Plan { blocks }
    }

    /// Serialise to the JSON snapshot format.
    pub fn to_json(&self) -> DeltaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeltaError::Config(format!("snapshot encode error: {e}")))
    }

    /// Load from the JSON snapshot format, validating block signs.
    pub fn from_json(json: &str) -> DeltaResult<Self> {
        let plan: Plan = serde_json::from_str(json)
            .map_err(|e| DeltaError::Config(format!("snapshot parse error: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    /// The canonical 44-block Sarukhanian plan.
    ///
    /// Hand-tuned sign configuration; expands to four length-110
    /// sequences whose summed NPAF is identically zero.
    pub fn sarukhanian_110() -> Plan {
        use PatternId::{W, X, Y, Z};
        use TokenId::{A, B, C, D, RA, RB, RC, RD};

        const BLOCKS: [(PatternId, TokenId, i8); 44] = [
            (X, A, 1),
            (X, C, 1),
            (X, A, -1),
            (X, C, -1),
            (X, RB, -1),
            (X, C, -1),
            (X, A, -1),
            (X, C, 1),
            (Y, A, 1),
            (X, D, 1),
            (Y, A, 1),
            (X, D, 1),
            (Y, A, 1),
            (X, D, 1),
            (Y, B, 1),
            (Y, D, 1),
            (Y, B, -1),
            (Y, RC, 1),
            (Y, B, -1),
            (Y, D, 1),
            (Y, B, 1),
            (Y, D, -1),
            (Z, A, 1),
            (Z, C, 1),
            (Z, A, -1),
            (Z, RD, -1),
            (Z, A, -1),
            (Z, C, 1),
            (Z, A, 1),
            (Z, C, -1),
            (Z, B, -1),
            (W, C, -1),
            (Z, B, -1),
            (W, C, -1),
            (Z, B, -1),
            (W, C, -1),
            (W, B, 1),
            (W, D, 1),
            (W, B, -1),
            (W, D, -1),
            (W, RA, 1),
            (W, D, -1),
            (W, B, -1),
            (W, D, 1),
        ];

        Plan {
            blocks: BLOCKS
                .iter()
                .map(|&(pattern, token, sign)| Block {
                    pattern,
                    token,
                    sign,
                })
                .collect(),
        }
    }
}
