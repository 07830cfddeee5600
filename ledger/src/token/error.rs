//! Multi-Token Error Types

use thiserror::Error;

use crate::access::AccessError;
use crate::address::Address;
use crate::token::types::TokenId;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors raised by registry and ledger operations.
///
/// Every error aborts its call before the first state mutation; there are
/// no transient failure classes and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Caller lacks the role required by a privileged entry point
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Unknown token id {0}")]
    UnknownToken(TokenId),

    #[error("Insufficient balance of token {id} for {account}: have {balance}, need {required}")]
    InsufficientBalance {
        account: Address,
        id: TokenId,
        balance: u64,
        required: u64,
    },

    #[error("Mismatched array lengths: {ids} ids, {amounts} amounts")]
    LengthMismatch { ids: usize, amounts: usize },

    #[error("Batch size {0} exceeds the maximum")]
    BatchTooLarge(usize),

    #[error("Address cannot be zero")]
    ZeroAddress,

    #[error("Caller is neither the owner nor an approved operator")]
    NotApproved,

    #[error("Cannot set operator approval for self")]
    SelfApproval,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Metadata URI too long")]
    UriTooLong,

    #[error("Passthrough data too long")]
    DataTooLong,
}
