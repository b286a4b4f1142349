use crate::decoding::constants::CHANGE_L2_BLOCK_TYPE;
use std::vec::Vec;

use alloy_primitives::Bytes;

/// Read the hex file provided at `path` as a [`Bytes`].
pub fn read_to_bytes<P: AsRef<std::path::Path>>(path: P) -> eyre::Result<Bytes> {
    use std::str::FromStr;
    Ok(Bytes::from_str(std::fs::read_to_string(path)?.trim())?)
}

/// Returns the batch encoding of a change L2 block record.
pub fn change_l2_block(delta_timestamp: u32, index_l1_info_tree: u32) -> Vec<u8> {
    let mut record = Vec::with_capacity(9);
    record.push(CHANGE_L2_BLOCK_TYPE);
    record.extend_from_slice(&delta_timestamp.to_be_bytes());
    record.extend_from_slice(&index_l1_info_tree.to_be_bytes());
    record
}

/// Returns the batch encoding of the pre EIP-155 transaction `[1, 2, 3, 4, 5, 6]` with a zero
/// signature.
pub fn short_transaction(v: u8, effective_percentage: u8) -> Vec<u8> {
    let mut tx = std::vec![0xc6, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    tx.extend_from_slice(&[0u8; 64]);
    tx.extend_from_slice(&[v, effective_percentage]);
    tx
}
