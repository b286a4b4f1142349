use crate::{
    decoding::{
        constants::{RLP_LIST_OFFSET, SIGNATURE_BUNDLE_BYTES_SIZE},
        rlp::{encode_string_list, list_length, RlpError, RlpItem},
        signature::{normalize_v, SignatureBundle},
    },
    error::DecodingError,
    Transaction, TransactionPayload,
};
use std::vec::Vec;

use alloy_primitives::{bytes::Buf, keccak256, Bytes, U256};

impl Transaction {
    /// Tries to read a RLP encoded legacy transaction and its trailing signature bundle from the
    /// input buffer, advancing it past both. The `offset` is the position of the buffer head in
    /// the batch.
    ///
    /// The returned transaction is hashed over its canonical signed encoding, where `v` is
    /// replaced by its EIP-155 value for the `chain_id`.
    pub(crate) fn try_from_buf(
        buf: &mut &[u8],
        offset: usize,
        chain_id: u64,
    ) -> Result<Self, DecodingError> {
        let malformed = |source: RlpError| DecodingError::MalformedRlp { offset, source };

        let byte = buf.first().copied().ok_or(DecodingError::BufferUnderrun {
            offset,
            needed: 1,
            remaining: 0,
        })?;
        if byte < RLP_LIST_OFFSET {
            return Err(DecodingError::InvalidOffset { offset, byte })
        }

        // the list header gives the extent of the transaction in the batch.
        let rlp_length = list_length(buf).map_err(malformed)?;
        let fields = RlpItem::decode_exact(&buf[..rlp_length])
            .and_then(RlpItem::into_list)
            .and_then(into_fields)
            .map_err(malformed)?;
        buf.advance(rlp_length);

        let remaining = buf.len();
        let signature = SignatureBundle::try_from_buf(buf).ok_or(DecodingError::BufferUnderrun {
            offset: offset + rlp_length,
            needed: SIGNATURE_BUNDLE_BYTES_SIZE,
            remaining,
        })?;

        let payload = TransactionPayload::try_from_fields(&fields).map_err(malformed)?;

        // only the first 6 fields are signed over, the chain id placeholders are replaced by the
        // normalized v.
        let v = normalize_v(signature.v, chain_id).to_be_bytes::<32>();
        let v = &v[v.iter().take_while(|byte| **byte == 0).count()..];
        let mut signed: Vec<&[u8]> = fields.iter().take(6).map(|field| &field[..]).collect();
        signed.extend([v, &signature.r[..], &signature.s[..]]);

        let raw: Bytes = encode_string_list(&signed).into();
        let hash = keccak256(&raw);

        Ok(Self {
            hash,
            raw,
            payload,
            signature: signature.into(),
            effective_percentage: signature.effective_percentage,
            batch_length: rlp_length + SIGNATURE_BUNDLE_BYTES_SIZE,
        })
    }
}

/// Returns the byte strings of a pre EIP-155 (6 fields) or EIP-155 (9 fields) transaction list.
fn into_fields(items: Vec<RlpItem>) -> Result<Vec<Bytes>, RlpError> {
    if !matches!(items.len(), 6 | 9) {
        return Err(RlpError::UnexpectedFieldCount(items.len()))
    }
    items.into_iter().map(RlpItem::into_bytes).collect()
}

impl TransactionPayload {
    /// Reads the payload from the transaction list fields:
    /// `[nonce, gas price, gas limit, to, value, data(, chain id, 0, 0)]`.
    fn try_from_fields(fields: &[Bytes]) -> Result<Self, RlpError> {
        let [nonce, gas_price, gas_limit, to, value, data, rest @ ..] = fields else {
            return Err(RlpError::UnexpectedFieldCount(fields.len()))
        };

        Ok(Self {
            nonce: read_uint("nonce", nonce)?,
            gas_price: read_uint("gas price", gas_price)?,
            gas_limit: read_uint("gas limit", gas_limit)?,
            to: to.clone(),
            value: read_uint("value", value)?,
            data: data.clone(),
            chain_id: rest.first().map(|chain_id| read_uint("chain id", chain_id)).transpose()?,
        })
    }
}

/// Reads the big endian integer. Leading zero bytes are accepted at any width, the significant
/// bytes must fit in 256 bits.
fn read_uint(field: &'static str, bytes: &[u8]) -> Result<U256, RlpError> {
    let significant = &bytes[bytes.iter().take_while(|byte| **byte == 0).count()..];
    U256::try_from_be_slice(significant)
        .ok_or(RlpError::IntegerOverflow { field, length: significant.len() })
}
