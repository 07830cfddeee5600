//! Role-based access control.
//!
//! Roles are 32-byte identifiers granted to principals. The root admin
//! role administers every other role; it is granted at construction and
//! can only spread through `grant_role` calls made by existing admins.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

use crate::address::Address;

/// Role identifier (32 bytes for flexibility)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role([u8; 32]);

impl Role {
    /// Root admin role - can grant all other roles, including itself
    pub const ADMIN: Role = Role([0u8; 32]);

    /// Depositor role - sole authority for bridge deposit submission
    pub const DEPOSITOR: Role = Role([
        0x44, 0x45, 0x50, 0x4f, 0x53, 0x49, 0x54, 0x4f, // DEPOSITO
        0x52, 0x5f, 0x52, 0x4f, 0x4c, 0x45, 0x00, 0x00, // R_ROLE
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01,
    ]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Role(bytes)
    }

    /// Derive a role identifier from a name (hash of the name)
    pub fn named(name: &str) -> Self {
        use blake3::Hasher;
        let mut hasher = Hasher::new();
        hasher.update(b"TESSERA_ROLE:");
        hasher.update(name.as_bytes());
        let result = hasher.finalize();
        let mut id = [0u8; 32];
        id.copy_from_slice(result.as_bytes());
        Role(id)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Get the name of a predefined role
    pub fn predefined_name(&self) -> Option<&'static str> {
        if *self == Self::ADMIN {
            Some("ADMIN")
        } else if *self == Self::DEPOSITOR {
            Some("DEPOSITOR")
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predefined_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", hex::encode(self.0)),
        }
    }
}

/// Access control error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Account {account} is missing role {role}")]
    MissingRole { role: Role, account: Address },
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Role membership store and authorization check.
///
/// Privileged entry points guard themselves with `require_role` before
/// touching any state; a failed check aborts the call with the missing
/// role and the offending principal.
pub trait AccessGate {
    fn has_role(&self, role: Role, account: &Address) -> bool;

    /// Grant `role` to `account`. Only holders of the root admin role
    /// may grant; roles are never revoked by this core.
    fn grant_role(&mut self, granter: &Address, role: Role, account: &Address) -> AccessResult<()>;

    fn require_role(&self, role: Role, account: &Address) -> AccessResult<()> {
        if self.has_role(role, account) {
            return Ok(());
        }
        Err(AccessError::MissingRole {
            role,
            account: account.clone(),
        })
    }
}

/// In-memory role table: role -> set of members
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleTable {
    members: HashMap<Role, HashSet<Address>>,
}

impl RoleTable {
    /// Create a table with `root_admin` holding the admin role
    pub fn new(root_admin: Address) -> Self {
        let mut table = Self::default();
        table.insert(Role::ADMIN, root_admin);
        table
    }

    /// Construction-time grant, before the table is handed to the contract
    pub fn with_role(mut self, role: Role, account: Address) -> Self {
        self.insert(role, account);
        self
    }

    fn insert(&mut self, role: Role, account: Address) {
        self.members.entry(role).or_default().insert(account);
    }

    /// Number of members holding `role`
    pub fn member_count(&self, role: Role) -> usize {
        self.members.get(&role).map(|set| set.len()).unwrap_or(0)
    }
}

impl AccessGate for RoleTable {
    fn has_role(&self, role: Role, account: &Address) -> bool {
        self.members
            .get(&role)
            .map(|set| set.contains(account))
            .unwrap_or(false)
    }

    fn grant_role(&mut self, granter: &Address, role: Role, account: &Address) -> AccessResult<()> {
        self.require_role(Role::ADMIN, granter)?;
        self.insert(role, account.clone());
        Ok(())
    }
}
