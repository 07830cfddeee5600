// Input validation helpers shared by the operations.

use crate::address::Address;
use crate::token::constants::{MAX_BASE_URI_LENGTH, MAX_BATCH_SIZE, MAX_DATA_LENGTH};
use crate::token::error::{TokenError, TokenResult};
use crate::token::store::LedgerStore;
use crate::token::types::{TokenId, TokenTypeData};

/// Recipients must be non-zero; the zero address is reserved as the
/// mint/burn counterparty in events
pub fn validate_recipient(recipient: &Address) -> TokenResult<()> {
    if recipient.is_zero() {
        return Err(TokenError::ZeroAddress);
    }
    Ok(())
}

/// Batch inputs must be pairwise and bounded
pub fn validate_batch(ids: &[TokenId], amounts: &[u64]) -> TokenResult<()> {
    if ids.len() != amounts.len() {
        return Err(TokenError::LengthMismatch {
            ids: ids.len(),
            amounts: amounts.len(),
        });
    }
    if ids.len() > MAX_BATCH_SIZE {
        return Err(TokenError::BatchTooLarge(ids.len()));
    }
    Ok(())
}

pub fn validate_data(data: &[u8]) -> TokenResult<()> {
    if data.len() > MAX_DATA_LENGTH {
        return Err(TokenError::DataTooLong);
    }
    Ok(())
}

pub fn validate_uri(uri: &str) -> TokenResult<()> {
    if uri.len() > MAX_BASE_URI_LENGTH {
        return Err(TokenError::UriTooLong);
    }
    Ok(())
}

/// Look up a token type that must already exist
pub fn require_token_type<S: LedgerStore + ?Sized>(
    store: &S,
    id: TokenId,
) -> TokenResult<TokenTypeData> {
    store.token_type(id).ok_or(TokenError::UnknownToken(id))
}
