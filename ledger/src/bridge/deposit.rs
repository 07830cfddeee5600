// Deposit handling: externally-attested payload in, batch mint out.

use log::debug;

use crate::access::{AccessGate, Role};
use crate::address::Address;
use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::payload::DepositPayload;
use crate::token::operations::{batch_credit, RuntimeContext};
use crate::token::store::LedgerStore;

/// Mint the deposited amounts to `user` from an attested payload.
///
/// The caller must hold the depositor role, normally granted only to the
/// bridge's verifying counterpart. The payload carries no idempotency
/// key: submitting the same bytes twice mints twice. Replay defense is
/// the verifier's responsibility.
pub fn deposit<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    user: &Address,
    payload: &[u8],
) -> BridgeResult<()> {
    gate.require_role(Role::DEPOSITOR, &ctx.caller)?;
    if user.is_zero() {
        return Err(BridgeError::InvalidRecipient);
    }
    let payload = DepositPayload::decode(payload)?;

    debug!(
        "bridge deposit for {}: {} entries, {} aux bytes",
        user,
        payload.ids.len(),
        payload.aux_data.len()
    );
    batch_credit(store, &ctx.caller, user, &payload.ids, &payload.amounts)?;
    Ok(())
}
