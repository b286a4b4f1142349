use crate::{
    decoding::constants::{SIGNATURE_BUNDLE_BYTES_SIZE, SIGNATURE_COMPONENT_BYTES_SIZE},
    TransactionSignature,
};

use alloy_primitives::{bytes::Buf, B256, U256};

/// The signature bundle trailing each RLP encoded transaction of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SignatureBundle {
    pub(crate) r: B256,
    pub(crate) s: B256,
    pub(crate) v: u8,
    pub(crate) effective_percentage: u8,
}

impl SignatureBundle {
    pub(crate) const BYTES_LENGTH: usize = SIGNATURE_BUNDLE_BYTES_SIZE;

    /// Tries to read from the input buffer into the [`SignatureBundle`].
    /// Returns [`None`] if the buffer.len() < [`SignatureBundle::BYTES_LENGTH`].
    pub(crate) fn try_from_buf(buf: &mut &[u8]) -> Option<Self> {
        if buf.len() < Self::BYTES_LENGTH {
            return None
        }
        let r = B256::from_slice(&buf[..SIGNATURE_COMPONENT_BYTES_SIZE]);
        buf.advance(SIGNATURE_COMPONENT_BYTES_SIZE);
        let s = B256::from_slice(&buf[..SIGNATURE_COMPONENT_BYTES_SIZE]);
        buf.advance(SIGNATURE_COMPONENT_BYTES_SIZE);

        let v = buf.get_u8();
        let effective_percentage = buf.get_u8();

        Some(Self { r, s, v, effective_percentage })
    }
}

impl From<SignatureBundle> for TransactionSignature {
    fn from(value: SignatureBundle) -> Self {
        Self { r: value.r, s: value.s, v: value.v }
    }
}

/// Returns the EIP-155 recovery value for the raw recovery byte of a legacy signature:
/// `v - 27 + chain_id * 2 + 35`.
pub fn normalize_v(v: u8, chain_id: u64) -> U256 {
    U256::from(chain_id) * U256::from(2) + U256::from(v) + U256::from(35) - U256::from(27)
}
