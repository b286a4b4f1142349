//! JSON rendering of a decoded batch.

use std::str::FromStr;

use alloy_primitives::{Bytes, B256, U256};
use serde::{ser::Error as _, Serialize, Serializer};
use zkevm_codec::{BatchEntry, BatchPayload, ChangeL2Block, Transaction};

/// A batch entry as rendered in the JSON document.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EntryView {
    /// A change L2 block record.
    ChangeL2Block(ChangeL2BlockView),
    /// A transaction.
    Transaction(TransactionView),
}

impl From<&BatchEntry> for EntryView {
    fn from(value: &BatchEntry) -> Self {
        match value {
            BatchEntry::ChangeL2Block(change) => Self::ChangeL2Block(change.into()),
            BatchEntry::Transaction(tx) => Self::Transaction(tx.into()),
        }
    }
}

/// The rendered change L2 block record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeL2BlockView {
    #[serde(rename = "type")]
    tx_type: u8,
    delta_timestamp: u32,
    index_l1_info_tree: u32,
}

impl From<&ChangeL2Block> for ChangeL2BlockView {
    fn from(value: &ChangeL2Block) -> Self {
        Self {
            tx_type: value.tx_type,
            delta_timestamp: value.delta_timestamp,
            index_l1_info_tree: value.index_l1_info_tree,
        }
    }
}

/// The rendered transaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    hash: B256,
    raw: Bytes,
    payload: PayloadView,
    signature: SignatureView,
    effective_percentage: u8,
}

#[derive(Debug, Serialize)]
struct PayloadView {
    #[serde(serialize_with = "serialize_decimal")]
    nonce: U256,
    #[serde(rename = "gasprice", serialize_with = "serialize_decimal")]
    gas_price: U256,
    #[serde(rename = "gaslimit", serialize_with = "serialize_decimal")]
    gas_limit: U256,
    to: Bytes,
    #[serde(serialize_with = "serialize_decimal")]
    value: U256,
    data: Bytes,
    #[serde(
        rename = "chainId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_decimal"
    )]
    chain_id: Option<U256>,
}

#[derive(Debug, Serialize)]
struct SignatureView {
    r: B256,
    s: B256,
    // the recovery byte as found in the batch, not the one used for the hash.
    v: Bytes,
}

impl From<&Transaction> for TransactionView {
    fn from(value: &Transaction) -> Self {
        let payload = &value.payload;
        Self {
            hash: value.hash,
            raw: value.raw.clone(),
            payload: PayloadView {
                nonce: payload.nonce,
                gas_price: payload.gas_price,
                gas_limit: payload.gas_limit,
                to: payload.to.clone(),
                value: payload.value,
                data: payload.data.clone(),
                chain_id: payload.chain_id,
            },
            signature: SignatureView {
                r: value.signature.r,
                s: value.signature.s,
                v: Bytes::copy_from_slice(&[value.signature.v]),
            },
            effective_percentage: value.effective_percentage,
        }
    }
}

/// Serializes the value as a JSON integer, whatever its magnitude.
fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serde_json::Number::from_str(&value.to_string())
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

fn serialize_optional_decimal<S: Serializer>(
    value: &Option<U256>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize_decimal(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Renders the batch payload as a pretty printed JSON array, indented by 4 spaces.
pub fn render_batch(payload: &BatchPayload) -> eyre::Result<String> {
    let entries: Vec<EntryView> = payload.entries().iter().map(Into::into).collect();

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    entries.serialize(&mut serializer)?;

    Ok(String::from_utf8(out)?)
}
