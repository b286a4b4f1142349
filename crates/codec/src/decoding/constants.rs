/// The discriminant byte of a change L2 block record.
pub const CHANGE_L2_BLOCK_TYPE: u8 = 0x0b;

/// The length in bytes of a change L2 block record: type, delta timestamp and L1 info tree index.
pub const CHANGE_L2_BLOCK_BYTES_SIZE: usize = 9;

/// The first RLP prefix byte of a list.
pub const RLP_LIST_OFFSET: u8 = 0xc0;

/// The first RLP prefix byte of a list with a long form length.
pub const RLP_LONG_LIST_OFFSET: u8 = 0xf7;

/// The length in bytes of the signature bundle trailing each transaction: r, s, v and the
/// effective percentage.
pub const SIGNATURE_BUNDLE_BYTES_SIZE: usize = 66;

/// The length in bytes of the r and s signature components.
pub const SIGNATURE_COMPONENT_BYTES_SIZE: usize = 32;

/// The maximum nesting depth accepted by the RLP decoder.
pub const MAX_RLP_DEPTH: usize = 16;

/// The chain id of the Polygon zkEVM mainnet, used by default for the v normalization.
pub const DEFAULT_CHAIN_ID: u64 = 1101;
