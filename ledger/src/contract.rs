//! Contract facade.
//!
//! One entry surface over the registry, ledger and bridge, composed from
//! four injected collaborators:
//!     * the ledger store (state),
//!     * the access gate (role membership),
//!     * the identity resolver (effective caller),
//!     * the proxy registry (marketplace approvals).
//!
//! Every entry point resolves the caller first, then authorizes, then
//! mutates. The host serializes calls; each one commits fully or fails
//! with nothing written.

use log::debug;

use crate::access::{AccessGate, AccessResult, Role};
use crate::address::Address;
use crate::bridge;
use crate::bridge::BridgeResult;
use crate::identity::{CallOrigin, IdentityResolver};
use crate::marketplace::{self, ProxyRegistry};
use crate::token::operations::{self, RuntimeContext};
use crate::token::store::LedgerStore;
use crate::token::{TokenId, TokenResult};

pub struct MultiTokenContract<S, G, I, P> {
    store: S,
    gate: G,
    resolver: I,
    proxies: P,
}

impl<S, G, I, P> MultiTokenContract<S, G, I, P>
where
    S: LedgerStore,
    G: AccessGate,
    I: IdentityResolver,
    P: ProxyRegistry,
{
    pub fn new(store: S, gate: G, resolver: I, proxies: P) -> Self {
        Self {
            store,
            gate,
            resolver,
            proxies,
        }
    }

    /// Read access to the underlying store (event log, balances)
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    fn context(&self, origin: &CallOrigin) -> RuntimeContext {
        RuntimeContext::new(self.resolver.resolve_caller(origin), origin.block_height)
    }

    // ===== Registry =====

    pub fn create(
        &mut self,
        origin: &CallOrigin,
        initial_owner: &Address,
        initial_supply: u64,
    ) -> TokenResult<TokenId> {
        let ctx = self.context(origin);
        let id = operations::create(&mut self.store, &self.gate, &ctx, initial_owner, initial_supply)?;
        debug!("issued token type {} with initial supply {}", id, initial_supply);
        Ok(id)
    }

    pub fn next_token_id(&self) -> TokenId {
        operations::next_token_id(&self.store)
    }

    pub fn total_supply(&self, id: TokenId) -> u64 {
        operations::total_supply(&self.store, id)
    }

    pub fn token_exists(&self, id: TokenId) -> bool {
        operations::token_exists(&self.store, id)
    }

    // ===== Ledger =====

    pub fn mint(
        &mut self,
        origin: &CallOrigin,
        to: &Address,
        id: TokenId,
        quantity: u64,
        data: &[u8],
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::mint(&mut self.store, &self.gate, &ctx, to, id, quantity, data)
    }

    pub fn batch_mint(
        &mut self,
        origin: &CallOrigin,
        to: &Address,
        ids: &[TokenId],
        quantities: &[u64],
        data: &[u8],
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::batch_mint(&mut self.store, &self.gate, &ctx, to, ids, quantities, data)
    }

    pub fn burn(
        &mut self,
        origin: &CallOrigin,
        from: &Address,
        id: TokenId,
        quantity: u64,
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::burn(&mut self.store, &self.gate, &ctx, from, id, quantity)
    }

    pub fn batch_burn(
        &mut self,
        origin: &CallOrigin,
        from: &Address,
        ids: &[TokenId],
        amounts: &[u64],
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::batch_burn(&mut self.store, &self.gate, &ctx, from, ids, amounts)
    }

    pub fn safe_transfer(
        &mut self,
        origin: &CallOrigin,
        from: &Address,
        to: &Address,
        id: TokenId,
        amount: u64,
        data: &[u8],
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::safe_transfer(
            &mut self.store,
            &self.proxies,
            &ctx,
            from,
            to,
            id,
            amount,
            data,
        )
    }

    pub fn safe_batch_transfer(
        &mut self,
        origin: &CallOrigin,
        from: &Address,
        to: &Address,
        ids: &[TokenId],
        amounts: &[u64],
        data: &[u8],
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::safe_batch_transfer(
            &mut self.store,
            &self.proxies,
            &ctx,
            from,
            to,
            ids,
            amounts,
            data,
        )
    }

    pub fn balance_of(&self, owner: &Address, id: TokenId) -> u64 {
        operations::balance_of(&self.store, owner, id)
    }

    pub fn balance_of_batch(&self, owners: &[Address], ids: &[TokenId]) -> TokenResult<Vec<u64>> {
        operations::balance_of_batch(&self.store, owners, ids)
    }

    // ===== Approvals =====

    pub fn set_approval_for_all(
        &mut self,
        origin: &CallOrigin,
        operator: &Address,
        approved: bool,
    ) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::set_approval_for_all(&mut self.store, &ctx, operator, approved)
    }

    /// Approval query with the marketplace override: the proxy
    /// registered for `owner` is always approved
    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        marketplace::is_approved_for_all(&self.store, &self.proxies, owner, operator)
    }

    // ===== Metadata =====

    pub fn set_base_metadata_uri(&mut self, origin: &CallOrigin, uri: String) -> TokenResult<()> {
        let ctx = self.context(origin);
        operations::set_base_metadata_uri(&mut self.store, &self.gate, &ctx, uri)
    }

    pub fn uri(&self, id: TokenId) -> TokenResult<String> {
        operations::uri(&self.store, id)
    }

    // ===== Bridge =====

    pub fn deposit(
        &mut self,
        origin: &CallOrigin,
        user: &Address,
        payload: &[u8],
    ) -> BridgeResult<()> {
        let ctx = self.context(origin);
        bridge::deposit(&mut self.store, &self.gate, &ctx, user, payload)
    }

    pub fn withdraw_single(
        &mut self,
        origin: &CallOrigin,
        id: TokenId,
        amount: u64,
    ) -> BridgeResult<()> {
        let ctx = self.context(origin);
        bridge::withdraw_single(&mut self.store, &ctx, id, amount)
    }

    pub fn withdraw_batch(
        &mut self,
        origin: &CallOrigin,
        ids: &[TokenId],
        amounts: &[u64],
    ) -> BridgeResult<()> {
        let ctx = self.context(origin);
        bridge::withdraw_batch(&mut self.store, &ctx, ids, amounts)
    }

    // ===== Roles =====

    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.gate.has_role(role, account)
    }

    pub fn grant_role(
        &mut self,
        origin: &CallOrigin,
        role: Role,
        account: &Address,
    ) -> AccessResult<()> {
        let granter = self.resolver.resolve_caller(origin);
        self.gate.grant_role(&granter, role, account)
    }
}
