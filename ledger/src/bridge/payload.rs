//! Deposit payload wire format.
//!
//! The sole wire contract the bridge depends on: an opaque byte sequence
//! decoding to exactly `(ids, amounts, aux_data)` where the two sequences
//! are equal length. Layout:
//!
//! ```text
//! u16 id count     | u64 * count  (token ids)
//! u16 amount count | u64 * count  (amounts)
//! u32 aux length   | bytes        (opaque passthrough)
//! ```

use crate::bridge::error::BridgeError;
use crate::serializer::{Reader, ReaderError, Serializer, Writer};
use crate::token::TokenId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositPayload {
    pub ids: Vec<TokenId>,
    pub amounts: Vec<u64>,
    pub aux_data: Vec<u8>,
}

impl DepositPayload {
    pub fn new(ids: Vec<TokenId>, amounts: Vec<u64>, aux_data: Vec<u8>) -> Self {
        Self {
            ids,
            amounts,
            aux_data,
        }
    }

    /// Decode a full payload. Truncation, trailing bytes and mismatched
    /// sequence lengths are all rejected before any mint happens.
    pub fn decode(bytes: &[u8]) -> Result<Self, BridgeError> {
        let payload = Self::from_bytes(bytes)?;
        if payload.ids.len() != payload.amounts.len() {
            return Err(BridgeError::LengthMismatch {
                ids: payload.ids.len(),
                amounts: payload.amounts.len(),
            });
        }
        Ok(payload)
    }
}

impl Serializer for DepositPayload {
    fn write(&self, writer: &mut Writer) {
        (self.ids.len() as u16).write(writer);
        for id in &self.ids {
            id.write(writer);
        }
        (self.amounts.len() as u16).write(writer);
        for amount in &self.amounts {
            amount.write(writer);
        }
        (self.aux_data.len() as u32).write(writer);
        writer.write_bytes(&self.aux_data);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let id_count: u16 = reader.read()?;
        let mut ids = Vec::with_capacity(id_count as usize);
        for _ in 0..id_count {
            ids.push(reader.read()?);
        }
        let amount_count: u16 = reader.read()?;
        let mut amounts = Vec::with_capacity(amount_count as usize);
        for _ in 0..amount_count {
            amounts.push(reader.read()?);
        }
        let aux_len: u32 = reader.read()?;
        let aux_data = reader.read_bytes(aux_len as usize)?.to_vec();
        Ok(Self {
            ids,
            amounts,
            aux_data,
        })
    }

    fn size(&self) -> usize {
        2 + self.ids.len() * 8 + 2 + self.amounts.len() * 8 + 4 + self.aux_data.len()
    }
}
