//! Bridge Error Types

use thiserror::Error;

use crate::access::AccessError;
use crate::serializer::ReaderError;
use crate::token::TokenError;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Malformed deposit payload: {0}")]
    MalformedPayload(#[from] ReaderError),

    #[error("Mismatched deposit payload lengths: {ids} ids, {amounts} amounts")]
    LengthMismatch { ids: usize, amounts: usize },

    #[error("Deposit recipient cannot be the zero address")]
    InvalidRecipient,
}
