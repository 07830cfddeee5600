// Token type creation.

use crate::access::{AccessGate, Role};
use crate::address::Address;
use crate::token::error::TokenResult;
use crate::token::events::TokenEvent;
use crate::token::operations::mint::credit;
use crate::token::operations::validation::validate_recipient;
use crate::token::operations::RuntimeContext;
use crate::token::store::LedgerStore;
use crate::token::types::{TokenId, TokenTypeData};

/// Create a new token type and mint its initial supply.
///
/// Allocates the next id, advances the counter by exactly one and records
/// the type before crediting `initial_owner`. The returned id was unused
/// before this call and is never reused after, even if the supply later
/// drops to zero.
pub fn create<S: LedgerStore + ?Sized, G: AccessGate + ?Sized>(
    store: &mut S,
    gate: &G,
    ctx: &RuntimeContext,
    initial_owner: &Address,
    initial_supply: u64,
) -> TokenResult<TokenId> {
    gate.require_role(Role::ADMIN, &ctx.caller)?;
    validate_recipient(initial_owner)?;

    let id = store.advance_token_id()?;
    store.set_token_type(id, TokenTypeData::new(ctx.caller.clone(), ctx.block_height))?;
    store.record_event(TokenEvent::TokenCreated {
        operator: ctx.caller.clone(),
        id,
        initial_owner: initial_owner.clone(),
        initial_supply,
    });

    credit(store, &ctx.caller, initial_owner, id, initial_supply)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{AccessError, RoleTable};
    use crate::token::constants::FIRST_TOKEN_ID;
    use crate::token::error::TokenError;
    use crate::token::memory::MemoryLedger;
    use crate::token::operations::query::{next_token_id, total_supply};

    fn addr(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    fn admin_ctx() -> (MemoryLedger, RoleTable, RuntimeContext) {
        let store = MemoryLedger::new();
        let gate = RoleTable::new(addr(1));
        let ctx = RuntimeContext::new(addr(1), 100);
        (store, gate, ctx)
    }

    #[test]
    fn test_create_issues_sequential_ids_from_one() {
        let (mut store, gate, ctx) = admin_ctx();
        assert_eq!(next_token_id(&store), 1);
        let a = create(&mut store, &gate, &ctx, &addr(2), 100).unwrap();
        let b = create(&mut store, &gate, &ctx, &addr(2), 0).unwrap();
        let c = create(&mut store, &gate, &ctx, &addr(3), 7).unwrap();
        assert_eq!(a, FIRST_TOKEN_ID);
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(next_token_id(&store), 4);
    }

    #[test]
    fn test_create_records_supply_and_balance() {
        let (mut store, gate, ctx) = admin_ctx();
        let id = create(&mut store, &gate, &ctx, &addr(2), 100).unwrap();
        assert_eq!(total_supply(&store, id), 100);
        assert_eq!(store.balance(&addr(2), id), 100);
        assert_eq!(store.circulating(id), total_supply(&store, id));
        let data = store.token_type(id).unwrap();
        assert_eq!(data.creator, addr(1));
        assert_eq!(data.created_at, 100);
    }

    #[test]
    fn test_create_requires_admin() {
        let (mut store, gate, _) = admin_ctx();
        let ctx = RuntimeContext::new(addr(5), 100);
        let err = create(&mut store, &gate, &ctx, &addr(2), 100).unwrap_err();
        assert_eq!(
            err,
            TokenError::Access(AccessError::MissingRole {
                role: Role::ADMIN,
                account: addr(5),
            })
        );
        assert_eq!(next_token_id(&store), 1);
        assert_eq!(total_supply(&store, 1), 0);
    }

    #[test]
    fn test_create_rejects_zero_owner() {
        let (mut store, gate, ctx) = admin_ctx();
        let err = create(&mut store, &gate, &ctx, &Address::zero(), 100).unwrap_err();
        assert_eq!(err, TokenError::ZeroAddress);
        assert_eq!(next_token_id(&store), 1);
    }

    #[test]
    fn test_fully_burned_id_is_never_reused() {
        let (mut store, gate, ctx) = admin_ctx();
        let id = create(&mut store, &gate, &ctx, &addr(2), 10).unwrap();
        crate::token::operations::burn(&mut store, &gate, &ctx, &addr(2), id, 10).unwrap();
        assert_eq!(total_supply(&store, id), 0);
        assert!(store.token_type(id).is_some());
        let next = create(&mut store, &gate, &ctx, &addr(2), 1).unwrap();
        assert_eq!(next, id + 1);
    }
}
