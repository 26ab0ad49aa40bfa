use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeeError {
    #[error("found fee in {0} currencies")]
    Ambiguous(usize),
    #[error("unsupported fee denomination: {0}")]
    UnsupportedDenom(String),
    #[error("invalid fee amount: {0:?}")]
    InvalidAmount(String),
}

#[derive(Error, Debug)]
pub enum TxDecodeError {
    #[error("invalid transaction envelope: {0}")]
    Envelope(#[from] prost::DecodeError),
    #[error("transaction body is missing")]
    BodyMissing,
    #[error("transaction auth info is missing")]
    AuthInfoMissing,
    #[error(transparent)]
    Fee(#[from] FeeError),
    #[error("message {type_url} at position {position}: {source}")]
    Message {
        position: usize,
        type_url: String,
        #[source]
        source: prost::DecodeError,
    },
}

/// Consistency violations found while handling a single decoded message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    #[error("blob sizes has {sizes} entries, namespace {index} has no size")]
    BlobSizesMismatch { index: usize, sizes: usize },
    #[error("namespace {0} is empty")]
    InvalidNamespace(usize),
    #[error("invalid decimal: {0:?}")]
    InvalidDecimal(String),
    #[error("invalid timestamp: {seconds}s {nanos}ns")]
    InvalidTimestamp { seconds: i64, nanos: i32 },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{type_url} at position {position}: {source}")]
pub struct MessageDecodeError {
    pub type_url: String,
    pub position: usize,
    #[source]
    pub source: MessageError,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("transaction {index}: {source}")]
    Transaction {
        index: usize,
        #[source]
        source: TxDecodeError,
    },
    #[error("transaction {index}: {source}")]
    Message {
        index: usize,
        #[source]
        source: MessageDecodeError,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error: invalid integer")]
    ParseInt(#[from] ParseIntError),
    #[error("parse error: invalid decimal {0:?}")]
    InvalidDecimal(String),
    #[error("parse error: invalid coin {0:?}")]
    InvalidCoin(String),
    #[error("parse error: invalid time {0:?}")]
    InvalidTime(String),
}
