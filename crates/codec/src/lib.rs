//! The codec implementation for zkEVM batches.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub use block::{ChangeL2Block, L2Block};
pub mod block;

pub mod decoding;

pub use error::{CodecError, DecodingError};
mod error;

pub use payload::{BatchEntry, BatchPayload};
pub mod payload;

pub use transaction::{Transaction, TransactionPayload, TransactionSignature};
pub mod transaction;

use crate::decoding::{batch::decode_batch, constants::DEFAULT_CHAIN_ID};
use std::vec::Vec;

use alloy_primitives::Bytes;

/// The Codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    /// The chain id folded into the transactions recovery value before hashing.
    chain_id: u64,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(DEFAULT_CHAIN_ID)
    }
}

impl Codec {
    /// Returns a new [`Codec`] for the provided chain id.
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Returns the chain id of the codec.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Decodes the input batch and returns the [`BatchPayload`].
    pub fn decode<T: BatchSource>(&self, input: T) -> Result<BatchPayload, CodecError> {
        Ok(decode_batch(input.batch_data(), self.chain_id, input.is_forced())?)
    }
}

/// Values that implement the trait can provide the data of a batch.
pub trait BatchSource {
    /// Returns the batch data.
    fn batch_data(&self) -> &[u8];
    /// Returns true if the batch was forced through L1, in which case it is not required to open
    /// with a change L2 block record.
    fn is_forced(&self) -> bool {
        false
    }
}

impl BatchSource for [u8] {
    fn batch_data(&self) -> &[u8] {
        self
    }
}

impl BatchSource for Vec<u8> {
    fn batch_data(&self) -> &[u8] {
        self
    }
}

impl BatchSource for Bytes {
    fn batch_data(&self) -> &[u8] {
        self
    }
}

impl<T: BatchSource + ?Sized> BatchSource for &T {
    fn batch_data(&self) -> &[u8] {
        (**self).batch_data()
    }

    fn is_forced(&self) -> bool {
        (**self).is_forced()
    }
}

/// A batch forced through L1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedBatch<T>(pub T);

impl<T: BatchSource> BatchSource for ForcedBatch<T> {
    fn batch_data(&self) -> &[u8] {
        self.0.batch_data()
    }

    fn is_forced(&self) -> bool {
        true
    }
}
