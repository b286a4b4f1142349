//! Signed legacy transactions decoded from a batch.

use alloy_primitives::{Address, Bytes, B256, U256};

/// A signed legacy transaction decoded from a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The hash of the canonical signed encoding.
    pub hash: B256,
    /// The canonical signed encoding, with the EIP-155 recovery value.
    pub raw: Bytes,
    /// The transaction fields.
    pub payload: TransactionPayload,
    /// The signature as found in the batch.
    pub signature: TransactionSignature,
    /// The effective gas price percentage applied on execution.
    pub effective_percentage: u8,
    /// The number of batch bytes the transaction occupied, signature included.
    pub batch_length: usize,
}

impl Transaction {
    /// Returns true if the transaction was signed with a chain id.
    pub const fn is_eip155(&self) -> bool {
        self.payload.chain_id.is_some()
    }
}

/// The fields of a legacy transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPayload {
    /// The sender nonce.
    pub nonce: U256,
    /// The gas price.
    pub gas_price: U256,
    /// The gas limit.
    pub gas_limit: U256,
    /// The recipient as found in the RLP list, empty for contract creations.
    pub to: Bytes,
    /// The transferred value.
    pub value: U256,
    /// The input data.
    pub data: Bytes,
    /// The chain id, only present for EIP-155 transactions.
    pub chain_id: Option<U256>,
}

impl TransactionPayload {
    /// Returns the recipient address, if the recipient is 20 bytes long.
    pub fn to_address(&self) -> Option<Address> {
        (self.to.len() == 20).then(|| Address::from_slice(&self.to))
    }
}

/// The transaction signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSignature {
    /// The r component.
    pub r: B256,
    /// The s component.
    pub s: B256,
    /// The recovery byte as found in the batch, before EIP-155 normalization.
    pub v: u8,
}
