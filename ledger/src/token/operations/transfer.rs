// Transfer operations.
//
// Transfers move balances between principals without touching total
// supply. The permission check runs through the composed approval query,
// so a marketplace proxy registered for `from` may move its tokens.

use indexmap::IndexMap;

use crate::address::Address;
use crate::marketplace::{self, ProxyRegistry};
use crate::token::error::{TokenError, TokenResult};
use crate::token::events::TokenEvent;
use crate::token::operations::validation::{
    require_token_type, validate_batch, validate_data, validate_recipient,
};
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;
use crate::token::types::TokenId;

fn check_transfer_permission<S: LedgerStore + ?Sized, P: ProxyRegistry + ?Sized>(
    store: &S,
    registry: &P,
    from: &Address,
    caller: &Address,
) -> TokenResult<()> {
    if from == caller || marketplace::is_approved_for_all(store, registry, from, caller) {
        return Ok(());
    }
    Err(TokenError::NotApproved)
}

pub fn safe_transfer<S: LedgerStore + ?Sized, P: ProxyRegistry + ?Sized>(
    store: &mut S,
    registry: &P,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    id: TokenId,
    amount: u64,
    data: &[u8],
) -> TokenResult<()> {
    validate_recipient(to)?;
    validate_data(data)?;
    check_transfer_permission(store, registry, from, &ctx.caller)?;
    require_token_type(store, id)?;

    let from_balance = store.balance(from, id);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance {
            account: from.clone(),
            id,
            balance: from_balance,
            required: amount,
        });
    }

    if from != to {
        let new_to = store
            .balance(to, id)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        store.set_balance(from, id, from_balance - amount)?;
        store.set_balance(to, id, new_to)?;
    }
    store.record_event(TokenEvent::TransferSingle {
        operator: ctx.caller.clone(),
        from: from.clone(),
        to: to.clone(),
        id,
        amount,
    });
    Ok(())
}

pub fn safe_batch_transfer<S: LedgerStore + ?Sized, P: ProxyRegistry + ?Sized>(
    store: &mut S,
    registry: &P,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    ids: &[TokenId],
    amounts: &[u64],
    data: &[u8],
) -> TokenResult<()> {
    validate_recipient(to)?;
    validate_data(data)?;
    validate_batch(ids, amounts)?;
    check_transfer_permission(store, registry, from, &ctx.caller)?;

    let mut totals: IndexMap<TokenId, u64> = IndexMap::new();
    for (id, amount) in ids.iter().zip(amounts) {
        let entry = totals.entry(*id).or_insert(0);
        *entry = entry.checked_add(*amount).ok_or(TokenError::Overflow)?;
    }

    let mut writes = Vec::with_capacity(totals.len());
    for (&id, &amount) in &totals {
        require_token_type(store, id)?;
        let from_balance = store.balance(from, id);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                account: from.clone(),
                id,
                balance: from_balance,
                required: amount,
            });
        }
        let new_to = store
            .balance(to, id)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        writes.push((id, from_balance - amount, new_to));
    }

    if from != to {
        for (id, new_from, new_to) in writes {
            store.set_balance(from, id, new_from)?;
            store.set_balance(to, id, new_to)?;
        }
    }
    store.record_event(TokenEvent::TransferBatch {
        operator: ctx.caller.clone(),
        from: from.clone(),
        to: to.clone(),
        ids: ids.to_vec(),
        amounts: amounts.to_vec(),
    });
    Ok(())
}
