use crate::decoding::rlp::RlpError;

/// An error occurring during the codec process.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// An error occurring at the decoding state.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}

/// An error occurring during the decoding of a batch. Any of these aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The batch is empty or does not open with a change L2 block record.
    #[error("invalid batch input: {0}")]
    InvalidInput(&'static str),
    /// A byte expected to be a RLP list header is outside of the list prefix range.
    #[error("invalid offset: byte {byte:#04x} at offset {offset} is not a RLP list header")]
    InvalidOffset {
        /// The offset of the byte in the batch.
        offset: usize,
        /// The byte found at the offset.
        byte: u8,
    },
    /// The RLP encoded transaction at the offset could not be decoded.
    #[error("malformed RLP at offset {offset}: {source}")]
    MalformedRlp {
        /// The offset of the transaction in the batch.
        offset: usize,
        /// The underlying RLP error.
        #[source]
        source: RlpError,
    },
    /// A fixed width field would read past the end of the batch.
    #[error("buffer underrun at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        /// The offset of the field in the batch.
        offset: usize,
        /// The width of the field.
        needed: usize,
        /// The bytes left in the batch.
        remaining: usize,
    },
}
