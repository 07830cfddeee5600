//! Marketplace compatibility.
//!
//! A proxy registry maps an owner to the trading proxy a marketplace
//! operates for them. The composed approval query treats that proxy as
//! approved without any stored approval, so listings need no per-owner
//! approval transaction. This is a standing authorization for as long as
//! the registry entry exists, not a signed, revocable delegation.

use std::collections::HashMap;

use crate::address::Address;
use crate::token::operations::is_approved_for_all as base_is_approved_for_all;
use crate::token::store::LedgerStore;

/// External directory mapping an owner to their registered proxy
pub trait ProxyRegistry {
    fn lookup_proxy(&self, owner: &Address) -> Option<Address>;
}

/// Registry with no entries; the composed query falls through to the
/// explicit approval set for every operator
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProxy;

impl ProxyRegistry for NoProxy {
    fn lookup_proxy(&self, _owner: &Address) -> Option<Address> {
        None
    }
}

/// In-memory proxy registry
#[derive(Debug, Clone, Default)]
pub struct MemoryProxyRegistry {
    proxies: HashMap<Address, Address>,
}

impl MemoryProxyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, owner: Address, proxy: Address) {
        self.proxies.insert(owner, proxy);
    }
}

impl ProxyRegistry for MemoryProxyRegistry {
    fn lookup_proxy(&self, owner: &Address) -> Option<Address> {
        self.proxies.get(owner).cloned()
    }
}

/// Approval query with the proxy override: the registered proxy of
/// `owner` is always approved, everything else falls through to the
/// explicit approval set.
pub fn is_approved_for_all<S: LedgerStore + ?Sized, P: ProxyRegistry + ?Sized>(
    store: &S,
    registry: &P,
    owner: &Address,
    operator: &Address,
) -> bool {
    if let Some(proxy) = registry.lookup_proxy(owner) {
        if proxy == *operator {
            return true;
        }
    }
    base_is_approved_for_all(store, owner, operator)
}
