// Base metadata URI management. The URI scheme itself (hosting, JSON
// shape) is an external concern; the ledger only stores the base and
// formats `base || id`.

use crate::access::{AccessGate, Role};
use crate::token::error::TokenResult;
use crate::token::events::TokenEvent;
use crate::token::operations::validation::{require_token_type, validate_uri};
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;
use crate::token::types::TokenId;

/// Replace the base metadata URI. Admin only.
pub fn set_base_metadata_uri<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    uri: String,
) -> TokenResult<()> {
    gate.require_role(Role::ADMIN, &ctx.caller)?;
    validate_uri(&uri)?;
    store.set_base_uri(uri.clone())?;
    store.record_event(TokenEvent::UriChanged { base_uri: uri });
    Ok(())
}

/// Metadata URI for an existing token type.
/// Fails with `UnknownToken` for an id that was never created.
pub fn uri<S: LedgerStore + ?Sized>(store: &S, id: TokenId) -> TokenResult<String> {
    require_token_type(store, id)?;
    Ok(format!("{}{}", store.base_uri(), id))
}
