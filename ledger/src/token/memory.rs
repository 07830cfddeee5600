//! In-memory ledger store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::token::error::{TokenError, TokenResult};
use crate::token::events::TokenEvent;
use crate::token::store::LedgerStore;
use crate::token::types::{TokenId, TokenTypeData};

/// `LedgerStore` backed by deterministic in-memory maps.
///
/// Iteration order follows insertion order, so two replicas fed the same
/// call sequence serialize to identical state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    token_types: IndexMap<TokenId, TokenTypeData>,
    balances: IndexMap<(Address, TokenId), u64>,
    approvals: IndexMap<(Address, Address), bool>,
    base_uri: String,
    last_token_id: TokenId,
    events: Vec<TokenEvent>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All mutation events recorded so far, oldest first
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Sum of all balances for `id` across principals.
    /// Equal to `total_supply` for every created id.
    pub fn circulating(&self, id: TokenId) -> u64 {
        self.balances
            .iter()
            .filter(|((_, token), _)| *token == id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl LedgerStore for MemoryLedger {
    fn token_type(&self, id: TokenId) -> Option<TokenTypeData> {
        self.token_types.get(&id).cloned()
    }

    fn set_token_type(&mut self, id: TokenId, data: TokenTypeData) -> TokenResult<()> {
        self.token_types.insert(id, data);
        Ok(())
    }

    fn last_token_id(&self) -> TokenId {
        self.last_token_id
    }

    fn advance_token_id(&mut self) -> TokenResult<TokenId> {
        self.last_token_id = self
            .last_token_id
            .checked_add(1)
            .ok_or(TokenError::Overflow)?;
        Ok(self.last_token_id)
    }

    fn balance(&self, owner: &Address, id: TokenId) -> u64 {
        self.balances
            .get(&(owner.clone(), id))
            .copied()
            .unwrap_or(0)
    }

    fn set_balance(&mut self, owner: &Address, id: TokenId, amount: u64) -> TokenResult<()> {
        self.balances.insert((owner.clone(), id), amount);
        Ok(())
    }

    fn operator_approval(&self, owner: &Address, operator: &Address) -> bool {
        self.approvals
            .get(&(owner.clone(), operator.clone()))
            .copied()
            .unwrap_or(false)
    }

    fn set_operator_approval(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> TokenResult<()> {
        self.approvals
            .insert((owner.clone(), operator.clone()), approved);
        Ok(())
    }

    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }

    fn set_base_uri(&mut self, uri: String) -> TokenResult<()> {
        self.base_uri = uri;
        Ok(())
    }

    fn record_event(&mut self, event: TokenEvent) {
        self.events.push(event);
    }
}
