//! Change L2 block records and the L2 blocks they delimit.

use crate::Transaction;
use std::vec::Vec;

/// A change L2 block record, marking the start of a new L2 block in the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeL2Block {
    /// The record type.
    pub tx_type: u8,
    /// The timestamp delta from the previous L2 block.
    pub delta_timestamp: u32,
    /// The index of the L1 info tree leaf used by the block.
    pub index_l1_info_tree: u32,
}

/// A L2 block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2Block {
    /// The record opening the block. Transactions of a forced batch which precede any change
    /// record belong to a block without one.
    pub change: Option<ChangeL2Block>,
    /// The transactions of the block.
    pub transactions: Vec<Transaction>,
}

impl L2Block {
    /// Returns a new instance of a [`L2Block`].
    pub const fn new(change: Option<ChangeL2Block>, transactions: Vec<Transaction>) -> Self {
        Self { change, transactions }
    }
}
