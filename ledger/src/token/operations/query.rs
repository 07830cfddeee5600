// Read-only queries. None requires a role.

use crate::address::Address;
use crate::token::error::{TokenError, TokenResult};
use crate::token::store::LedgerStore;
use crate::token::types::TokenId;

pub fn balance_of<S: LedgerStore + ?Sized>(store: &S, owner: &Address, id: TokenId) -> u64 {
    store.balance(owner, id)
}

/// Pairwise balance lookup; fails on mismatched lengths like the other
/// batch entry points.
pub fn balance_of_batch<S: LedgerStore + ?Sized>(
    store: &S,
    owners: &[Address],
    ids: &[TokenId],
) -> TokenResult<Vec<u64>> {
    if owners.len() != ids.len() {
        return Err(TokenError::LengthMismatch {
            ids: ids.len(),
            amounts: owners.len(),
        });
    }
    Ok(owners
        .iter()
        .zip(ids)
        .map(|(owner, id)| store.balance(owner, *id))
        .collect())
}

/// Total supply of `id`; 0 for an id that was never created, by design
/// indistinguishable here from an existing fully-burned id. Use
/// `token_exists` to tell the two apart.
pub fn total_supply<S: LedgerStore + ?Sized>(store: &S, id: TokenId) -> u64 {
    store
        .token_type(id)
        .map(|data| data.total_supply)
        .unwrap_or(0)
}

pub fn token_exists<S: LedgerStore + ?Sized>(store: &S, id: TokenId) -> bool {
    store.token_type(id).is_some()
}

/// The id the next `create` call will return. Read-only preview.
/// The first issued id is `FIRST_TOKEN_ID`.
pub fn next_token_id<S: LedgerStore + ?Sized>(store: &S) -> TokenId {
    store.last_token_id() + 1
}
