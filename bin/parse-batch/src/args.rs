use crate::render::render_batch;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy_primitives::Bytes;
use eyre::WrapErr;
use tracing::info;
use zkevm_codec::{decoding::constants::DEFAULT_CHAIN_ID, Codec, ForcedBatch};

/// Decodes a zkEVM batch into its change L2 block records and transactions.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "parse-batch", about = "Decodes a zkEVM batch into a JSON list of its entries")]
pub struct ParseBatchArgs {
    /// Path to the file holding the hex encoded batch, with or without the 0x prefix.
    pub input: PathBuf,
    /// Path to the JSON file the decoded batch is written to.
    pub output: PathBuf,
    /// The chain id folded into the transactions recovery value before hashing.
    #[arg(long, env = "ZKEVM_CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,
    /// Decode the input as a forced batch, which does not need to open with a change L2 block.
    #[arg(long)]
    pub forced: bool,
}

impl ParseBatchArgs {
    /// Reads the batch, decodes it and writes the JSON document to the output path.
    pub fn run(self) -> eyre::Result<()> {
        info!(target: "parse_batch", input = %self.input.display(), chain_id = self.chain_id, forced = self.forced, "Decoding batch");

        let batch = read_batch(&self.input)?;
        let codec = Codec::new(self.chain_id);
        let payload = if self.forced {
            codec.decode(ForcedBatch(&batch))
        } else {
            codec.decode(&batch)
        }
        .wrap_err("failed to decode batch")?;

        let json = render_batch(&payload)?;
        fs::write(&self.output, json)
            .wrap_err_with(|| format!("failed to write {}", self.output.display()))?;

        info!(
            target: "parse_batch",
            entries = payload.entries().len(),
            transactions = payload.transactions().count(),
            output = %self.output.display(),
            "Decoded batch"
        );

        Ok(())
    }
}

/// Reads the hex encoded batch at `path`. Surrounding whitespace and the 0x prefix are optional.
pub fn read_batch(path: &Path) -> eyre::Result<Bytes> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Bytes::from_str(text.trim()).wrap_err("batch is not valid hex")
}
