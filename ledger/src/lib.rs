//! Tessera bridged multi-token ledger.
//!
//! One contract representing many fungible and semi-fungible token
//! types: a token-type registry with monotonic id issuance, a balance
//! ledger with role-gated mint/burn and batch variants, a bridge gateway
//! minting on attested deposits and burning on withdrawal intent, and a
//! marketplace shim auto-approving a registered proxy operator.

#![allow(clippy::too_many_arguments)]

pub mod access;
pub mod address;
pub mod bridge;
pub mod contract;
pub mod identity;
pub mod marketplace;
pub mod serializer;
pub mod token;

pub use access::{AccessError, AccessGate, Role, RoleTable};
pub use address::Address;
pub use bridge::{BridgeError, DepositPayload};
pub use contract::MultiTokenContract;
pub use identity::{CallOrigin, DirectResolver, IdentityResolver, TrustedForwarderResolver};
pub use marketplace::{MemoryProxyRegistry, NoProxy, ProxyRegistry};
pub use token::{
    LedgerStore, MemoryLedger, TokenError, TokenEvent, TokenId, TokenResult, TokenTypeData,
};
