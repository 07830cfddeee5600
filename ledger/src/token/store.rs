//! Storage abstraction for the registry and ledger.
//!
//! Operations are written against this trait so the same logic runs over
//! any backend. The token id counter lives in the store and is advanced
//! only inside `create`; the `&mut` receiver on every mutating method is
//! what serializes calls — one call either commits all of its writes or
//! returns before the first one.

use crate::address::Address;
use crate::token::error::TokenResult;
use crate::token::events::TokenEvent;
use crate::token::types::{TokenId, TokenTypeData};

pub trait LedgerStore {
    // Token type registry
    fn token_type(&self, id: TokenId) -> Option<TokenTypeData>;
    fn set_token_type(&mut self, id: TokenId, data: TokenTypeData) -> TokenResult<()>;

    /// Highest id issued so far; 0 when none has been
    fn last_token_id(&self) -> TokenId;

    /// Advance the monotonic counter by exactly one and return the new id
    fn advance_token_id(&mut self) -> TokenResult<TokenId>;

    // Balances
    fn balance(&self, owner: &Address, id: TokenId) -> u64;
    fn set_balance(&mut self, owner: &Address, id: TokenId, amount: u64) -> TokenResult<()>;

    // Operator approvals (explicit per-owner approval set)
    fn operator_approval(&self, owner: &Address, operator: &Address) -> bool;
    fn set_operator_approval(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> TokenResult<()>;

    // Metadata
    fn base_uri(&self) -> String;
    fn set_base_uri(&mut self, uri: String) -> TokenResult<()>;

    // Mutation log
    fn record_event(&mut self, event: TokenEvent);
}
