use crate::{decoding::constants::CHANGE_L2_BLOCK_BYTES_SIZE, ChangeL2Block};

use alloy_primitives::bytes::Buf;

impl ChangeL2Block {
    pub(crate) const BYTES_LENGTH: usize = CHANGE_L2_BLOCK_BYTES_SIZE;

    /// Tries to read from the input buffer into the [`ChangeL2Block`].
    /// Returns [`None`] if the buffer.len() < [`ChangeL2Block::BYTES_LENGTH`].
    pub(crate) fn try_from_buf(buf: &mut &[u8]) -> Option<Self> {
        if buf.len() < Self::BYTES_LENGTH {
            return None
        }
        let tx_type = buf.get_u8();
        let delta_timestamp = buf.get_u32();
        let index_l1_info_tree = buf.get_u32();

        Some(Self { tx_type, delta_timestamp, index_l1_info_tree })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_should_read_change_l2_block() {
        let input = hex!("0b00000001000000ffc0");
        let buf = &mut input.as_slice();

        let change = ChangeL2Block::try_from_buf(buf).expect("should read a record");

        assert_eq!(
            change,
            ChangeL2Block { tx_type: 0x0b, delta_timestamp: 1, index_l1_info_tree: 255 }
        );
        assert_eq!(*buf, &[0xc0]);
    }

    #[test]
    fn test_should_read_big_endian_fields() {
        let input = hex!("0bdeadbeef01020304");
        let buf = &mut input.as_slice();

        let change = ChangeL2Block::try_from_buf(buf).expect("should read a record");

        assert_eq!(change.delta_timestamp, 0xdeadbeef);
        assert_eq!(change.index_l1_info_tree, 0x01020304);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_should_not_read_truncated_change_l2_block() {
        let input = hex!("0b0000000100");
        let buf = &mut input.as_slice();

        assert!(ChangeL2Block::try_from_buf(buf).is_none());
        assert_eq!(buf.len(), 6);
    }
}
