//! Decoded batch payload.

use crate::{decoding::constants::CHANGE_L2_BLOCK_BYTES_SIZE, ChangeL2Block, L2Block, Transaction};
use std::vec::Vec;

/// An entry of the batch.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum BatchEntry {
    /// A change L2 block record.
    ChangeL2Block(ChangeL2Block),
    /// A signed transaction.
    Transaction(Transaction),
}

impl BatchEntry {
    /// Returns the number of batch bytes the entry occupied.
    pub const fn batch_length(&self) -> usize {
        match self {
            Self::ChangeL2Block(_) => CHANGE_L2_BLOCK_BYTES_SIZE,
            Self::Transaction(tx) => tx.batch_length,
        }
    }

    /// Returns the transaction if the entry is one.
    pub const fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Transaction(tx) => Some(tx),
            Self::ChangeL2Block(_) => None,
        }
    }

    /// Returns the change L2 block record if the entry is one.
    pub const fn as_change_l2_block(&self) -> Option<&ChangeL2Block> {
        match self {
            Self::ChangeL2Block(change) => Some(change),
            Self::Transaction(_) => None,
        }
    }
}

/// The decoded batch, with its entries in batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPayload {
    entries: Vec<BatchEntry>,
}

impl BatchPayload {
    /// Returns a new instance of a [`BatchPayload`].
    pub const fn new(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries of the batch.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Returns an iterator over the transactions of the batch.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().filter_map(BatchEntry::as_transaction)
    }

    /// Returns the number of batch bytes covered by the entries.
    pub fn batch_length(&self) -> usize {
        self.entries.iter().map(BatchEntry::batch_length).sum()
    }

    /// Groups the entries into [`L2Block`]s. Each change record opens a new block, which holds the
    /// transactions following it.
    pub fn l2_blocks(&self) -> Vec<L2Block> {
        let mut blocks: Vec<L2Block> = Vec::new();
        for entry in &self.entries {
            match entry {
                BatchEntry::ChangeL2Block(change) => {
                    blocks.push(L2Block::new(Some(*change), Vec::new()))
                }
                BatchEntry::Transaction(tx) => {
                    if blocks.is_empty() {
                        blocks.push(L2Block::default());
                    }
                    if let Some(block) = blocks.last_mut() {
                        block.transactions.push(tx.clone());
                    }
                }
            }
        }
        blocks
    }
}
