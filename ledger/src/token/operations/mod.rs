// Multi-Token Operations Module
// Core business logic for registry and ledger operations.
//
// The operations are runtime-agnostic:
// - Storage is abstracted via the LedgerStore trait
// - The effective caller is resolved by the host and passed in, never
//   read from ambient state
// - Every operation validates its full input before the first write, so
//   an error return leaves the store untouched

mod approval;
mod burn;
mod create;
mod metadata;
mod mint;
mod query;
mod transfer;
mod validation;

pub use approval::*;
pub use burn::*;
pub use create::*;
pub use metadata::*;
pub use mint::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use crate::address::Address;

/// Runtime context providing the resolved caller and block information
pub struct RuntimeContext {
    /// Effective calling principal (already resolved by the host)
    pub caller: Address,
    /// Current block height
    pub block_height: u64,
}

impl RuntimeContext {
    pub fn new(caller: Address, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}
