//! Decoding implementations for the batch data.

/// Decoding of the batch entries.
pub mod batch;

mod change_l2_block;

/// Constants of the batch encoding.
pub mod constants;

/// RLP codec for the batch transactions.
pub mod rlp;

/// Signature bundle and v normalization.
pub mod signature;

/// Tests utils.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Decoding implementation for a transaction.
mod transaction;
