//! Effective-caller resolution.
//!
//! Entry points never read an ambient "current caller". The host hands in
//! a [`CallOrigin`] describing how the call arrived, and an
//! [`IdentityResolver`] turns it into the effective principal before any
//! authorization check runs. Relayed calls (meta-transactions submitted by
//! a trusted forwarder) resolve to the original sender, not the relay.

use std::collections::HashSet;

use crate::address::Address;

/// How a call entered the system
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOrigin {
    /// The principal that invoked the entry point directly
    pub caller: Address,
    /// The original sender claimed by a relaying forwarder, if any
    pub relayed_from: Option<Address>,
    /// Host block height at call time
    pub block_height: u64,
}

impl CallOrigin {
    pub fn direct(caller: Address, block_height: u64) -> Self {
        Self {
            caller,
            relayed_from: None,
            block_height,
        }
    }

    pub fn relayed(forwarder: Address, original: Address, block_height: u64) -> Self {
        Self {
            caller: forwarder,
            relayed_from: Some(original),
            block_height,
        }
    }
}

/// Resolves the effective calling principal
pub trait IdentityResolver {
    fn resolve_caller(&self, origin: &CallOrigin) -> Address;
}

/// Resolver that ignores relay claims entirely
#[derive(Debug, Clone, Default)]
pub struct DirectResolver;

impl IdentityResolver for DirectResolver {
    fn resolve_caller(&self, origin: &CallOrigin) -> Address {
        origin.caller.clone()
    }
}

/// Resolver honoring relay claims from a fixed set of trusted forwarders.
///
/// A relay claim from any other caller is ignored: the direct caller is
/// the effective principal.
#[derive(Debug, Clone, Default)]
pub struct TrustedForwarderResolver {
    forwarders: HashSet<Address>,
}

impl TrustedForwarderResolver {
    pub fn new(forwarders: impl IntoIterator<Item = Address>) -> Self {
        Self {
            forwarders: forwarders.into_iter().collect(),
        }
    }

    pub fn is_trusted(&self, forwarder: &Address) -> bool {
        self.forwarders.contains(forwarder)
    }
}

impl IdentityResolver for TrustedForwarderResolver {
    fn resolve_caller(&self, origin: &CallOrigin) -> Address {
        if let Some(original) = &origin.relayed_from {
            if self.is_trusted(&origin.caller) {
                return original.clone();
            }
        }
        origin.caller.clone()
    }
}
