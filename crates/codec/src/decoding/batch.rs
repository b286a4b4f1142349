use crate::{
    decoding::constants::{CHANGE_L2_BLOCK_BYTES_SIZE, CHANGE_L2_BLOCK_TYPE},
    error::DecodingError,
    BatchEntry, BatchPayload, ChangeL2Block, Transaction,
};
use std::vec::Vec;

use tracing::{debug, trace};

/// Decodes the batch into its entries, in batch order.
///
/// The batch is a concatenation of change L2 block records (`0x0b | delta timestamp | L1 info
/// tree index`) and legacy transactions (`rlp(nonce, gas price, gas limit, to, value, data(,
/// chain id, 0, 0)) | r | s | v | effective percentage`). Unless `forced` is set, the batch must
/// open with a change L2 block record. Any malformed entry fails the whole batch.
pub fn decode_batch(
    batch: &[u8],
    chain_id: u64,
    forced: bool,
) -> Result<BatchPayload, DecodingError> {
    let first = batch.first().ok_or(DecodingError::InvalidInput("empty batch"))?;
    if !forced && *first != CHANGE_L2_BLOCK_TYPE {
        return Err(DecodingError::InvalidInput(
            "first entry must be a change L2 block if the batch is not forced",
        ))
    }

    let buf = &mut &batch[..];
    let mut entries: Vec<BatchEntry> = Vec::new();

    while let Some(discriminant) = buf.first().copied() {
        let offset = batch.len() - buf.len();

        let entry: BatchEntry = if discriminant == CHANGE_L2_BLOCK_TYPE {
            let remaining = buf.len();
            let change =
                ChangeL2Block::try_from_buf(buf).ok_or(DecodingError::BufferUnderrun {
                    offset,
                    needed: CHANGE_L2_BLOCK_BYTES_SIZE,
                    remaining,
                })?;
            trace!(
                target: "zkevm::codec",
                offset,
                delta_timestamp = change.delta_timestamp,
                index_l1_info_tree = change.index_l1_info_tree,
                "decoded change L2 block"
            );
            change.into()
        } else {
            let tx = Transaction::try_from_buf(buf, offset, chain_id)?;
            trace!(target: "zkevm::codec", offset, hash = %tx.hash, "decoded transaction");
            tx.into()
        };

        entries.push(entry);
    }

    debug!(target: "zkevm::codec", entries = entries.len(), bytes = batch.len(), "decoded batch");

    Ok(BatchPayload::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoding::{
        constants::DEFAULT_CHAIN_ID,
        rlp::RlpError,
        test_utils::{change_l2_block, read_to_bytes, short_transaction},
    };

    use alloy_primitives::{b256, bytes, hex, keccak256, U256};

    #[test]
    fn test_should_decode_change_l2_block() -> eyre::Result<()> {
        let payload = decode_batch(&hex!("0b00000001000000ff"), DEFAULT_CHAIN_ID, false)?;

        assert_eq!(
            payload.entries(),
            &[BatchEntry::ChangeL2Block(ChangeL2Block {
                tx_type: 11,
                delta_timestamp: 1,
                index_l1_info_tree: 255
            })]
        );
        assert_eq!(payload.batch_length(), 9);
        Ok(())
    }

    #[test]
    fn test_should_decode_short_batch() -> eyre::Result<()> {
        let batch = read_to_bytes("./testdata/batch_short.hex")?;
        let payload = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;

        assert_eq!(payload.entries().len(), 2);
        let tx = payload.entries()[1].as_transaction().expect("should be a transaction");
        assert_eq!(tx.payload.nonce, U256::from(1));
        assert_eq!(tx.signature.v, 0x1b);
        assert_eq!(tx.effective_percentage, 100);

        // the hash covers the list re-encoded with v = chain_id * 2 + 35.
        let mut expected = hex!("f84b010203040506").to_vec();
        expected.extend_from_slice(&hex!("8208bd"));
        for _ in 0..2 {
            expected.push(0xa0);
            expected.extend_from_slice(&[0u8; 32]);
        }
        assert_eq!(tx.raw[..], expected[..]);
        assert_eq!(tx.hash, keccak256(&expected));
        Ok(())
    }

    #[test]
    fn test_should_decode_multi_block_batch() -> eyre::Result<()> {
        let batch = read_to_bytes("./testdata/batch_multi.hex")?;
        let payload = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;

        let entries = payload.entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries[0].as_change_l2_block(),
            Some(&ChangeL2Block { tx_type: 0x0b, delta_timestamp: 0, index_l1_info_tree: 3 })
        );
        assert_eq!(
            entries[3].as_change_l2_block(),
            Some(&ChangeL2Block { tx_type: 0x0b, delta_timestamp: 2, index_l1_info_tree: 3 })
        );

        let hashes: Vec<_> = payload.transactions().map(|tx| tx.hash).collect();
        assert_eq!(
            hashes,
            vec![
                b256!("e5430ecc143c73f4042c2f42dc3ec881d4a9eb01fbdc657b702f4b4a67ca00e9"),
                b256!("c8810f2bc9a71e9a399a02517fd8f17e494515fbb8f0fcc4015eb413a2e005da"),
                b256!("0c9079da4078ae194414f82912801aa89190b3c11e3efe8b33c286f22c8159cb"),
            ]
        );

        let eip155 = entries[1].as_transaction().expect("should be a transaction");
        assert_eq!(eip155.payload.chain_id, Some(U256::from(1101)));
        assert_eq!(eip155.payload.value, U256::from(1_000_000_000_000_000_000u64));

        let pre_eip155 = entries[2].as_transaction().expect("should be a transaction");
        assert_eq!(pre_eip155.payload.chain_id, None);
        assert_eq!(pre_eip155.payload.to, bytes!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));

        let blocks = payload.l2_blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].transactions.len(), 2);
        assert_eq!(blocks[1].transactions.len(), 1);
        Ok(())
    }

    #[test]
    fn test_entries_cover_the_whole_batch() -> eyre::Result<()> {
        for path in ["./testdata/batch_short.hex", "./testdata/batch_multi.hex"] {
            let batch = read_to_bytes(path)?;
            let payload = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;

            let consumed: usize = payload.entries().iter().map(BatchEntry::batch_length).sum();
            assert_eq!(consumed, batch.len());
        }
        Ok(())
    }

    #[test]
    fn test_decoding_is_deterministic() -> eyre::Result<()> {
        let batch = read_to_bytes("./testdata/batch_multi.hex")?;

        let first = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;
        let second = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_should_reject_empty_batch() {
        let err = decode_batch(&[], DEFAULT_CHAIN_ID, false).unwrap_err();
        assert!(matches!(err, DecodingError::InvalidInput(_)));

        let err = decode_batch(&[], DEFAULT_CHAIN_ID, true).unwrap_err();
        assert!(matches!(err, DecodingError::InvalidInput(_)));
    }

    #[test]
    fn test_should_reject_batch_not_opening_with_change_l2_block() {
        let batch = short_transaction(0x1b, 100);

        let err = decode_batch(&batch, DEFAULT_CHAIN_ID, false).unwrap_err();

        assert!(matches!(err, DecodingError::InvalidInput(_)));
    }

    #[test]
    fn test_should_decode_forced_batch_without_change_l2_block() -> eyre::Result<()> {
        let batch = short_transaction(0x1c, 100);

        let payload = decode_batch(&batch, DEFAULT_CHAIN_ID, true)?;

        let tx = payload.entries()[0].as_transaction().expect("should be a transaction");
        assert_eq!(tx.signature.v, 0x1c);
        assert_eq!(
            tx.hash,
            b256!("2104143947988829b4b11044356acd8dd07a58362f1e231d89fb93896b6db388")
        );
        Ok(())
    }

    #[test]
    fn test_should_reject_invalid_offset() {
        let mut batch = change_l2_block(1, 255);
        batch.extend_from_slice(&hex!("bf000000"));

        let err = decode_batch(&batch, DEFAULT_CHAIN_ID, false).unwrap_err();

        assert!(matches!(err, DecodingError::InvalidOffset { offset: 9, byte: 0xbf }));
    }

    #[test]
    fn test_should_reject_truncated_change_l2_block() {
        let mut batch = change_l2_block(1, 255);
        batch.extend_from_slice(&hex!("0b000000"));

        let err = decode_batch(&batch, DEFAULT_CHAIN_ID, false).unwrap_err();

        assert!(matches!(
            err,
            DecodingError::BufferUnderrun { offset: 9, needed: 9, remaining: 4 }
        ));
    }

    #[test]
    fn test_should_discard_valid_prefix_on_malformed_entry() -> eyre::Result<()> {
        let mut batch = read_to_bytes("./testdata/batch_multi.hex")?.to_vec();
        // a list declaring 7 fields.
        batch.extend_from_slice(&hex!("c701020304050607"));
        batch.extend_from_slice(&[0u8; 66]);

        let result = decode_batch(&batch, DEFAULT_CHAIN_ID, false);

        assert!(matches!(
            result,
            Err(DecodingError::MalformedRlp {
                offset: 374,
                source: RlpError::UnexpectedFieldCount(7)
            })
        ));
        Ok(())
    }

    #[test]
    fn test_should_decode_transaction_with_wide_nonce() -> eyre::Result<()> {
        let mut batch = change_l2_block(1, 255);
        batch.extend_from_slice(&hex!("cf890100000000000000000203040506"));
        batch.extend_from_slice(&[0u8; 64]);
        batch.extend_from_slice(&hex!("1b64"));

        let payload = decode_batch(&batch, DEFAULT_CHAIN_ID, false)?;

        assert_eq!(payload.batch_length(), batch.len());
        let tx = payload.transactions().next().expect("should have a transaction");
        assert_eq!(tx.payload.nonce, U256::from(1) << 64);
        Ok(())
    }

    #[test]
    fn test_should_reject_truncated_trailing_signature() -> eyre::Result<()> {
        let batch = read_to_bytes("./testdata/batch_short.hex")?;
        let truncated = &batch[..batch.len() - 1];

        let err = decode_batch(truncated, DEFAULT_CHAIN_ID, false).unwrap_err();

        assert!(matches!(err, DecodingError::BufferUnderrun { offset: 16, remaining: 65, .. }));
        Ok(())
    }
}
