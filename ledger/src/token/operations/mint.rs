// Mint operations.

use indexmap::IndexMap;

use crate::access::{AccessGate, Role};
use crate::address::Address;
use crate::token::error::{TokenError, TokenResult};
use crate::token::events::TokenEvent;
use crate::token::operations::validation::{
    require_token_type, validate_batch, validate_data, validate_recipient,
};
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;
use crate::token::types::TokenId;

/// Mint `quantity` units of `id` to `to`. Admin only.
///
/// A quantity of zero is permitted: economically a no-op, but the
/// mutation event is still recorded.
pub fn mint<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    to: &Address,
    id: TokenId,
    quantity: u64,
    data: &[u8],
) -> TokenResult<()> {
    gate.require_role(Role::ADMIN, &ctx.caller)?;
    validate_recipient(to)?;
    validate_data(data)?;
    credit(store, &ctx.caller, to, id, quantity)
}

/// Batch mint. Admin only; all-or-nothing.
pub fn batch_mint<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    to: &Address,
    ids: &[TokenId],
    quantities: &[u64],
    data: &[u8],
) -> TokenResult<()> {
    gate.require_role(Role::ADMIN, &ctx.caller)?;
    validate_recipient(to)?;
    validate_data(data)?;
    batch_credit(store, &ctx.caller, to, ids, quantities)
}

/// Unprivileged single credit shared by mint, create and deposit.
/// Increases the balance and the type's total supply by the same amount.
pub(crate) fn credit<S: LedgerStore + ?Sized>(
    store: &mut S,
    operator: &Address,
    to: &Address,
    id: TokenId,
    quantity: u64,
) -> TokenResult<()> {
    let mut token_type = require_token_type(store, id)?;
    token_type.total_supply = token_type
        .total_supply
        .checked_add(quantity)
        .ok_or(TokenError::Overflow)?;
    let new_balance = store
        .balance(to, id)
        .checked_add(quantity)
        .ok_or(TokenError::Overflow)?;

    store.set_token_type(id, token_type)?;
    store.set_balance(to, id, new_balance)?;
    store.record_event(TokenEvent::TransferSingle {
        operator: operator.clone(),
        from: Address::zero(),
        to: to.clone(),
        id,
        amount: quantity,
    });
    Ok(())
}

/// Unprivileged batch credit shared by batch_mint and the bridge deposit.
///
/// Duplicate ids are aggregated first; every new supply and balance is
/// computed before the first write, so a failing pair aborts with the
/// store untouched.
pub(crate) fn batch_credit<S: LedgerStore + ?Sized>(
    store: &mut S,
    operator: &Address,
    to: &Address,
    ids: &[TokenId],
    quantities: &[u64],
) -> TokenResult<()> {
    validate_batch(ids, quantities)?;

    let mut totals: IndexMap<TokenId, u64> = IndexMap::new();
    for (id, quantity) in ids.iter().zip(quantities) {
        let entry = totals.entry(*id).or_insert(0);
        *entry = entry.checked_add(*quantity).ok_or(TokenError::Overflow)?;
    }

    let mut writes = Vec::with_capacity(totals.len());
    for (&id, &quantity) in &totals {
        let mut token_type = require_token_type(store, id)?;
        token_type.total_supply = token_type
            .total_supply
            .checked_add(quantity)
            .ok_or(TokenError::Overflow)?;
        let new_balance = store
            .balance(to, id)
            .checked_add(quantity)
            .ok_or(TokenError::Overflow)?;
        writes.push((id, token_type, new_balance));
    }

    for (id, token_type, new_balance) in writes {
        store.set_token_type(id, token_type)?;
        store.set_balance(to, id, new_balance)?;
    }
    store.record_event(TokenEvent::TransferBatch {
        operator: operator.clone(),
        from: Address::zero(),
        to: to.clone(),
        ids: ids.to_vec(),
        amounts: quantities.to_vec(),
    });
    Ok(())
}
