// Withdrawal handling: a self-burn that an external observer matches
// with a release on the remote ledger. The gateway destroys the tokens
// and emits nothing else; there is no outbox here.

use log::debug;

use crate::bridge::error::BridgeResult;
use crate::token::operations::{batch_debit, debit, RuntimeContext};
use crate::token::store::LedgerStore;
use crate::token::TokenId;

/// Burn `amount` of `id` from the caller's own balance.
pub fn withdraw_single<S: LedgerStore + ?Sized>(
    store: &mut S,
    ctx: &RuntimeContext,
    id: TokenId,
    amount: u64,
) -> BridgeResult<()> {
    debug!("bridge withdraw by {}: {} of token {}", ctx.caller, amount, id);
    debit(store, &ctx.caller, &ctx.caller, id, amount)?;
    Ok(())
}

/// Batched withdrawal, all-or-nothing.
pub fn withdraw_batch<S: LedgerStore + ?Sized>(
    store: &mut S,
    ctx: &RuntimeContext,
    ids: &[TokenId],
    amounts: &[u64],
) -> BridgeResult<()> {
    debug!(
        "bridge batch withdraw by {}: {} entries",
        ctx.caller,
        ids.len()
    );
    batch_debit(store, &ctx.caller, &ctx.caller, ids, amounts)?;
    Ok(())
}
