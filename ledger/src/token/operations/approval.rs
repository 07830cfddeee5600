// Operator approvals: the explicit per-owner approval set backing the
// base transfer-approval rule. MarketplaceCompat composes on top of the
// query, see crate::marketplace.

use crate::address::Address;
use crate::token::error::{TokenError, TokenResult};
use crate::token::events::TokenEvent;
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;

pub fn set_approval_for_all<S: LedgerStore + ?Sized>(
    store: &mut S,
    ctx: &RuntimeContext,
    operator: &Address,
    approved: bool,
) -> TokenResult<()> {
    if operator.is_zero() {
        return Err(TokenError::ZeroAddress);
    }
    if *operator == ctx.caller {
        return Err(TokenError::SelfApproval);
    }
    store.set_operator_approval(&ctx.caller, operator, approved)?;
    store.record_event(TokenEvent::ApprovalForAll {
        owner: ctx.caller.clone(),
        operator: operator.clone(),
        approved,
    });
    Ok(())
}

/// Base approval rule: the explicit approval set only
pub fn is_approved_for_all<S: LedgerStore + ?Sized>(
    store: &S,
    owner: &Address,
    operator: &Address,
) -> bool {
    store.operator_approval(owner, operator)
}
