//! Multi-Token Core Types

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Token type identifier, monotonically issued starting at 1.
/// Identifiers are never reused, even when supply drops to zero.
pub type TokenId = u64;

/// Per-type registry record.
///
/// The presence of this record is what distinguishes a created token type
/// from an id that was never issued; the record is never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTypeData {
    /// Sum of all balances for this id
    pub total_supply: u64,
    /// Principal that created the type
    pub creator: Address,
    /// Block height at creation
    pub created_at: u64,
}

impl TokenTypeData {
    pub fn new(creator: Address, created_at: u64) -> Self {
        Self {
            total_supply: 0,
            creator,
            created_at,
        }
    }
}
