// Bridged Multi-Token Ledger Integration Tests
//
// End-to-end flows through the contract facade:
// 1. Marketplace scenario: create, proxy approval, mint, withdraw, deposit
// 2. Supply conservation across mixed operation sequences
// 3. Authorization failures leave state untouched
// 4. Relayed calls resolve to the original sender

use anyhow::Result;
use tessera_ledger::serializer::Serializer;
use tessera_ledger::{
    Address, CallOrigin, DepositPayload, MemoryLedger, MemoryProxyRegistry, MultiTokenContract,
    Role, RoleTable, TokenEvent, TrustedForwarderResolver,
};

// ============================================================================
// TEST ACCOUNTS
// ============================================================================

const ADMIN: [u8; 32] = [0x01; 32];
const ALICE: [u8; 32] = [0x0A; 32];
const BOB: [u8; 32] = [0x0B; 32];
const CAROL: [u8; 32] = [0x0C; 32];
const PROXY: [u8; 32] = [0xE0; 32];
const BRIDGE: [u8; 32] = [0xBB; 32];
const FORWARDER: [u8; 32] = [0xF0; 32];

fn addr(bytes: [u8; 32]) -> Address {
    Address::new(bytes)
}

type Contract =
    MultiTokenContract<MemoryLedger, RoleTable, TrustedForwarderResolver, MemoryProxyRegistry>;

fn new_contract() -> Contract {
    let gate = RoleTable::new(addr(ADMIN)).with_role(Role::DEPOSITOR, addr(BRIDGE));
    let resolver = TrustedForwarderResolver::new([addr(FORWARDER)]);
    MultiTokenContract::new(
        MemoryLedger::new(),
        gate,
        resolver,
        MemoryProxyRegistry::new(),
    )
}

fn direct(caller: [u8; 32], height: u64) -> CallOrigin {
    CallOrigin::direct(addr(caller), height)
}

// ============================================================================
// MARKETPLACE SCENARIO
// ============================================================================

#[test]
fn test_full_marketplace_and_bridge_scenario() -> Result<()> {
    let gate = RoleTable::new(addr(ADMIN)).with_role(Role::DEPOSITOR, addr(BRIDGE));
    let resolver = TrustedForwarderResolver::new([addr(FORWARDER)]);
    let mut registry = MemoryProxyRegistry::new();
    registry.register(addr(ALICE), addr(PROXY));
    let mut contract = MultiTokenContract::new(MemoryLedger::new(), gate, resolver, registry);

    // create token id 1 with initial supply 100 to Alice
    let id = contract.create(&direct(ADMIN, 100), &addr(ALICE), 100)?;
    assert_eq!(id, 1);
    assert_eq!(contract.balance_of(&addr(ALICE), id), 100);

    // the registered proxy is approved without any approval call
    assert!(contract.is_approved_for_all(&addr(ALICE), &addr(PROXY)));
    assert!(!contract.is_approved_for_all(&addr(BOB), &addr(PROXY)));

    // admin mints 50 more to Bob
    contract.mint(&direct(ADMIN, 101), &addr(BOB), id, 50, &[])?;
    assert_eq!(contract.total_supply(id), 150);

    // Alice withdraws 40 to the other ledger
    contract.withdraw_single(&direct(ALICE, 102), id, 40)?;
    assert_eq!(contract.balance_of(&addr(ALICE), id), 60);
    assert_eq!(contract.total_supply(id), 110);

    // the bridge deposits 20 for Carol from an attested payload
    let payload = DepositPayload::new(vec![id], vec![20], vec![]).to_bytes();
    contract.deposit(&direct(BRIDGE, 103), &addr(CAROL), &payload)?;
    assert_eq!(contract.balance_of(&addr(CAROL), id), 20);
    assert_eq!(contract.total_supply(id), 130);

    assert_eq!(contract.store().circulating(id), contract.total_supply(id));
    Ok(())
}

// ============================================================================
// SUPPLY CONSERVATION
// ============================================================================

#[test]
fn test_supply_matches_sum_of_balances_after_mixed_operations() -> Result<()> {
    let mut contract = new_contract();

    let first = contract.create(&direct(ADMIN, 1), &addr(ALICE), 1_000)?;
    let second = contract.create(&direct(ADMIN, 2), &addr(BOB), 500)?;

    contract.batch_mint(
        &direct(ADMIN, 3),
        &addr(CAROL),
        &[first, second, first],
        &[10, 20, 30],
        &[],
    )?;
    contract.safe_transfer(&direct(ALICE, 4), &addr(ALICE), &addr(BOB), first, 250, &[])?;
    contract.batch_burn(&direct(BOB, 5), &addr(BOB), &[first, second], &[100, 500])?;
    contract.withdraw_batch(&direct(CAROL, 6), &[first, second], &[40, 20])?;
    contract.deposit(
        &direct(BRIDGE, 7),
        &addr(ALICE),
        &DepositPayload::new(vec![first, second], vec![5, 5], b"proof".to_vec()).to_bytes(),
    )?;

    for id in [first, second] {
        assert_eq!(contract.store().circulating(id), contract.total_supply(id));
    }
    assert_eq!(contract.total_supply(first), 1_000 + 10 + 30 - 100 - 40 + 5);
    assert_eq!(contract.total_supply(second), 500 + 20 - 500 - 20 + 5);
    Ok(())
}

#[test]
fn test_supply_conservation_under_random_operations() -> Result<()> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut contract = new_contract();
    let accounts: Vec<Address> = (1u8..=8).map(|byte| addr([byte | 0x40; 32])).collect();

    let mut ids = Vec::new();
    for account in &accounts {
        ids.push(contract.create(&direct(ADMIN, 1), account, rng.gen_range(0..1_000))?);
    }

    for step in 0..200 {
        let id = ids[rng.gen_range(0..ids.len())];
        let account = accounts[rng.gen_range(0..accounts.len())].clone();
        let amount = rng.gen_range(0..100);
        let origin = CallOrigin::direct(account.clone(), 2 + step);
        match rng.gen_range(0..4) {
            0 => contract.mint(&direct(ADMIN, 2 + step), &account, id, amount, &[])?,
            1 => {
                // burns and withdrawals may exceed the balance; a failure
                // must leave the ledger untouched either way
                let _ = contract.burn(&origin, &account, id, amount);
            }
            2 => {
                let _ = contract.withdraw_single(&origin, id, amount);
            }
            _ => {
                let to = accounts[rng.gen_range(0..accounts.len())].clone();
                let _ = contract.safe_transfer(&origin, &account, &to, id, amount, &[]);
            }
        }
    }

    for id in ids {
        assert_eq!(contract.store().circulating(id), contract.total_supply(id));
    }
    Ok(())
}

// ============================================================================
// AUTHORIZATION
// ============================================================================

#[test]
fn test_unauthorized_calls_leave_state_untouched() -> Result<()> {
    let mut contract = new_contract();
    let id = contract.create(&direct(ADMIN, 1), &addr(ALICE), 100)?;
    let events_before = contract.store().events().len();

    assert!(contract.create(&direct(ALICE, 2), &addr(ALICE), 5).is_err());
    assert!(contract
        .mint(&direct(ALICE, 2), &addr(ALICE), id, 5, &[])
        .is_err());
    assert!(contract
        .batch_mint(&direct(ALICE, 2), &addr(ALICE), &[id], &[5], &[])
        .is_err());
    // the bridge role does not imply the admin role
    assert!(contract
        .mint(&direct(BRIDGE, 2), &addr(ALICE), id, 5, &[])
        .is_err());
    // nor may a non-depositor submit deposits
    let payload = DepositPayload::new(vec![id], vec![5], vec![]).to_bytes();
    assert!(contract.deposit(&direct(ADMIN, 2), &addr(ALICE), &payload).is_err());
    // burning someone else's balance needs the admin role
    assert!(contract.burn(&direct(BOB, 2), &addr(ALICE), id, 5).is_err());

    assert_eq!(contract.total_supply(id), 100);
    assert_eq!(contract.next_token_id(), id + 1);
    assert_eq!(contract.store().events().len(), events_before);
    Ok(())
}

#[test]
fn test_role_grants_extend_authority() -> Result<()> {
    let mut contract = new_contract();
    let id = contract.create(&direct(ADMIN, 1), &addr(ALICE), 100)?;

    // Bob cannot deposit until the admin grants him the role
    let payload = DepositPayload::new(vec![id], vec![5], vec![]).to_bytes();
    assert!(contract.deposit(&direct(BOB, 2), &addr(CAROL), &payload).is_err());

    contract.grant_role(&direct(ADMIN, 3), Role::DEPOSITOR, &addr(BOB))?;
    contract.deposit(&direct(BOB, 4), &addr(CAROL), &payload)?;
    assert_eq!(contract.balance_of(&addr(CAROL), id), 5);
    Ok(())
}

// ============================================================================
// RELAYED CALLS
// ============================================================================

#[test]
fn test_relayed_withdraw_burns_the_original_sender() -> Result<()> {
    let mut contract = new_contract();
    let id = contract.create(&direct(ADMIN, 1), &addr(ALICE), 100)?;

    // a trusted forwarder relays Alice's withdrawal
    let origin = CallOrigin::relayed(addr(FORWARDER), addr(ALICE), 2);
    contract.withdraw_single(&origin, id, 30)?;
    assert_eq!(contract.balance_of(&addr(ALICE), id), 70);
    assert_eq!(contract.balance_of(&addr(FORWARDER), id), 0);

    // an untrusted relayer burns from itself and fails on zero balance
    let origin = CallOrigin::relayed(addr(BOB), addr(ALICE), 3);
    assert!(contract.withdraw_single(&origin, id, 30).is_err());
    assert_eq!(contract.balance_of(&addr(ALICE), id), 70);
    Ok(())
}

// ============================================================================
// EVENTS
// ============================================================================

#[test]
fn test_withdrawal_is_observable_as_a_burn_event() -> Result<()> {
    let mut contract = new_contract();
    let id = contract.create(&direct(ADMIN, 1), &addr(ALICE), 100)?;
    contract.withdraw_single(&direct(ALICE, 2), id, 25)?;

    let burn = contract
        .store()
        .events()
        .iter()
        .rev()
        .find(|event| {
            matches!(
                event,
                TokenEvent::TransferSingle { to, .. } if to.is_zero()
            )
        })
        .expect("burn event recorded");
    assert_eq!(
        burn,
        &TokenEvent::TransferSingle {
            operator: addr(ALICE),
            from: addr(ALICE),
            to: Address::zero(),
            id,
            amount: 25,
        }
    );
    Ok(())
}
