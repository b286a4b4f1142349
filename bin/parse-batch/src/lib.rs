//! Command line tool decoding zkEVM batches into JSON.

mod args;
pub use args::{read_batch, ParseBatchArgs};

pub mod render;
