//! RLP items and the list codec used to read and re-sign batch transactions.

use crate::decoding::constants::MAX_RLP_DEPTH;
use std::vec::Vec;

use alloy_primitives::Bytes;
use alloy_rlp::{length_of_length, BufMut, Encodable, Header};

/// An error occurring while decoding a RLP item.
#[derive(Debug, thiserror::Error)]
pub enum RlpError {
    /// The item header is invalid or runs past the buffer.
    #[error("invalid header: {0}")]
    Header(alloy_rlp::Error),
    /// Lists are nested too deep.
    #[error("nesting deeper than {} levels", MAX_RLP_DEPTH)]
    DepthLimit,
    /// Bytes remain after the item.
    #[error("{0} trailing bytes after item")]
    TrailingBytes(usize),
    /// A list was found where a byte string was expected.
    #[error("expected a byte string, found a list")]
    UnexpectedList,
    /// A byte string was found where a list was expected.
    #[error("expected a list, found a byte string")]
    UnexpectedString,
    /// The transaction list has neither 6 nor 9 fields.
    #[error("unexpected transaction field count {0}, expected 6 or 9")]
    UnexpectedFieldCount(usize),
    /// An integer field does not fit in 256 bits.
    #[error("field {field} has {length} significant bytes and overflows 256 bits")]
    IntegerOverflow {
        /// The name of the transaction field.
        field: &'static str,
        /// The length of the byte string, leading zeros excluded.
        length: usize,
    },
}

impl From<alloy_rlp::Error> for RlpError {
    fn from(value: alloy_rlp::Error) -> Self {
        Self::Header(value)
    }
}

/// A decoded RLP item.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum RlpItem {
    /// A byte string.
    String(Bytes),
    /// A list of items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Decodes a single item from the head of the buffer and advances the buffer past it.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, RlpError> {
        Self::decode_nested(buf, 0)
    }

    fn decode_nested(buf: &mut &[u8], depth: usize) -> Result<Self, RlpError> {
        if depth > MAX_RLP_DEPTH {
            return Err(RlpError::DepthLimit)
        }

        // the header checks the declared payload fits in the buffer.
        let header = Header::decode(buf)?;
        let remaining: &[u8] = *buf;
        let (payload, rest) = remaining.split_at(header.payload_length);
        *buf = rest;

        if !header.list {
            return Ok(Self::String(Bytes::copy_from_slice(payload)))
        }

        let mut payload = payload;
        let mut items = Vec::new();
        while !payload.is_empty() {
            items.push(Self::decode_nested(&mut payload, depth + 1)?);
        }
        Ok(Self::List(items))
    }

    /// Decodes a single item from the input, returning it along with the number of bytes
    /// consumed.
    pub fn decode_with_length(input: &[u8]) -> Result<(Self, usize), RlpError> {
        let mut buf = input;
        let item = Self::decode(&mut buf)?;
        Ok((item, input.len() - buf.len()))
    }

    /// Decodes an item which must span the whole input.
    pub fn decode_exact(input: &[u8]) -> Result<Self, RlpError> {
        let (item, consumed) = Self::decode_with_length(input)?;
        if consumed != input.len() {
            return Err(RlpError::TrailingBytes(input.len() - consumed))
        }
        Ok(item)
    }

    /// Returns the byte string if the item is not a list.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::String(bytes) => Some(bytes),
            Self::List(_) => None,
        }
    }

    /// Returns the inner byte string or [`RlpError::UnexpectedList`].
    pub fn into_bytes(self) -> Result<Bytes, RlpError> {
        match self {
            Self::String(bytes) => Ok(bytes),
            Self::List(_) => Err(RlpError::UnexpectedList),
        }
    }

    /// Returns the inner items or [`RlpError::UnexpectedString`].
    pub fn into_list(self) -> Result<Vec<Self>, RlpError> {
        match self {
            Self::List(items) => Ok(items),
            Self::String(_) => Err(RlpError::UnexpectedString),
        }
    }

    fn payload_length(&self) -> usize {
        match self {
            Self::String(bytes) => bytes.len(),
            Self::List(items) => items.iter().map(Encodable::length).sum(),
        }
    }
}

impl Encodable for RlpItem {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::String(bytes) => <[u8] as Encodable>::encode(bytes, out),
            Self::List(items) => {
                Header { list: true, payload_length: self.payload_length() }.encode(out);
                for item in items {
                    item.encode(out);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::String(bytes) => <[u8] as Encodable>::length(bytes),
            Self::List(_) => {
                let payload_length = self.payload_length();
                payload_length + length_of_length(payload_length)
            }
        }
    }
}

/// Returns the total length of the RLP list at the head of the buffer, header included, without
/// advancing the buffer. A list payload up to 55 bytes has a single byte header, longer payloads
/// are prefixed with their big endian length.
pub fn list_length(buf: &[u8]) -> Result<usize, RlpError> {
    let header = Header::decode(&mut &buf[..])?;
    if !header.list {
        return Err(RlpError::UnexpectedString)
    }
    Ok(header.length_with_payload())
}

/// Encodes the byte strings as a RLP list.
pub fn encode_string_list<T: AsRef<[u8]>>(items: &[T]) -> Vec<u8> {
    let payload_length = items.iter().map(|item| <[u8] as Encodable>::length(item.as_ref())).sum();
    let mut out = Vec::with_capacity(payload_length + length_of_length(payload_length));
    Header { list: true, payload_length }.encode(&mut out);
    for item in items {
        <[u8] as Encodable>::encode(item.as_ref(), &mut out);
    }
    out
}
