//! Mutation events.
//!
//! Every state change appends one event to the store, including
//! economically-empty mutations (a zero-quantity mint still records a
//! `TransferSingle`). Mints use the zero address as `from` and burns use
//! the zero address as `to`, so a bridge observer can watch withdrawals
//! by filtering burns.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::token::types::TokenId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// A new token type was issued
    TokenCreated {
        operator: Address,
        id: TokenId,
        initial_owner: Address,
        initial_supply: u64,
    },

    /// Single-id balance mutation (mint: from == zero, burn: to == zero)
    TransferSingle {
        operator: Address,
        from: Address,
        to: Address,
        id: TokenId,
        amount: u64,
    },

    /// Batched balance mutation, ids and amounts kept pairwise
    TransferBatch {
        operator: Address,
        from: Address,
        to: Address,
        ids: Vec<TokenId>,
        amounts: Vec<u64>,
    },

    /// Explicit operator approval changed
    ApprovalForAll {
        owner: Address,
        operator: Address,
        approved: bool,
    },

    /// Base metadata URI changed
    UriChanged { base_uri: String },
}
