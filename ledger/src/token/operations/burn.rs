// Burn operations.

use indexmap::IndexMap;

use crate::access::{AccessGate, Role};
use crate::address::Address;
use crate::token::error::{TokenError, TokenResult};
use crate::token::events::TokenEvent;
use crate::token::operations::validation::{require_token_type, validate_batch};
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;
use crate::token::types::TokenId;

/// Burn `quantity` units of `id` from `from`.
///
/// Self-burn is open to any caller; burning from another account is the
/// privileged path and requires the admin role.
pub fn burn<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    from: &Address,
    id: TokenId,
    quantity: u64,
) -> TokenResult<()> {
    if ctx.caller != *from {
        gate.require_role(Role::ADMIN, &ctx.caller)?;
    }
    debit(store, &ctx.caller, from, id, quantity)
}

/// Batch burn, same authorization rule; all-or-nothing.
pub fn batch_burn<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    from: &Address,
    ids: &[TokenId],
    amounts: &[u64],
) -> TokenResult<()> {
    if ctx.caller != *from {
        gate.require_role(Role::ADMIN, &ctx.caller)?;
    }
    batch_debit(store, &ctx.caller, from, ids, amounts)
}

/// Unprivileged single debit shared by burn and the bridge withdrawals.
/// Decreases the balance and the type's total supply by the same amount.
pub(crate) fn debit<S: LedgerStore + ?Sized>(
    store: &mut S,
    operator: &Address,
    from: &Address,
    id: TokenId,
    quantity: u64,
) -> TokenResult<()> {
    let mut token_type = require_token_type(store, id)?;
    let balance = store.balance(from, id);
    if balance < quantity {
        return Err(TokenError::InsufficientBalance {
            account: from.clone(),
            id,
            balance,
            required: quantity,
        });
    }
    token_type.total_supply = token_type
        .total_supply
        .checked_sub(quantity)
        .ok_or(TokenError::Overflow)?;

    store.set_token_type(id, token_type)?;
    store.set_balance(from, id, balance - quantity)?;
    store.record_event(TokenEvent::TransferSingle {
        operator: operator.clone(),
        from: from.clone(),
        to: Address::zero(),
        id,
        amount: quantity,
    });
    Ok(())
}

/// Unprivileged batch debit shared by batch_burn and withdraw_batch.
///
/// Duplicate ids are aggregated before the sufficiency check, so a batch
/// spending the same id twice is checked against the combined amount.
pub(crate) fn batch_debit<S: LedgerStore + ?Sized>(
    store: &mut S,
    operator: &Address,
    from: &Address,
    ids: &[TokenId],
    amounts: &[u64],
) -> TokenResult<()> {
    validate_batch(ids, amounts)?;

    let mut totals: IndexMap<TokenId, u64> = IndexMap::new();
    for (id, amount) in ids.iter().zip(amounts) {
        let entry = totals.entry(*id).or_insert(0);
        *entry = entry.checked_add(*amount).ok_or(TokenError::Overflow)?;
    }

    let mut writes = Vec::with_capacity(totals.len());
    for (&id, &quantity) in &totals {
        let mut token_type = require_token_type(store, id)?;
        let balance = store.balance(from, id);
        if balance < quantity {
            return Err(TokenError::InsufficientBalance {
                account: from.clone(),
                id,
                balance,
                required: quantity,
            });
        }
        token_type.total_supply = token_type
            .total_supply
            .checked_sub(quantity)
            .ok_or(TokenError::Overflow)?;
        writes.push((id, token_type, balance - quantity));
    }

    for (id, token_type, new_balance) in writes {
        store.set_token_type(id, token_type)?;
        store.set_balance(from, id, new_balance)?;
    }
    store.record_event(TokenEvent::TransferBatch {
        operator: operator.clone(),
        from: from.clone(),
        to: Address::zero(),
        ids: ids.to_vec(),
        amounts: amounts.to_vec(),
    });
    Ok(())
}
