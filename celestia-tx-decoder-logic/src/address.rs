use bech32::{Bech32, Hrp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Lowercase human-readable part, e.g. `celestia` or `celestiavaloper`.
    pub prefix: String,
    pub bytes: Vec<u8>,
}

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("invalid address prefix: {0}")]
    Prefix(#[from] bech32::primitives::hrp::Error),
    #[error("address encoding failed: {0}")]
    Encode(#[from] bech32::EncodeError),
}

/// Converts between human-readable addresses and their raw bytes.
pub trait AddressCodec: Send + Sync {
    /// Returns `None` for strings that are not valid addresses.
    fn decode(&self, address: &str) -> Option<DecodedAddress>;

    fn encode(&self, prefix: &str, bytes: &[u8]) -> Result<String, AddressError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bech32Codec;

impl AddressCodec for Bech32Codec {
    fn decode(&self, address: &str) -> Option<DecodedAddress> {
        let (hrp, bytes) = bech32::decode(address).ok()?;
        Some(DecodedAddress {
            prefix: hrp.to_string().to_lowercase(),
            bytes,
        })
    }

    fn encode(&self, prefix: &str, bytes: &[u8]) -> Result<String, AddressError> {
        let hrp = Hrp::parse(prefix)?;
        Ok(bech32::encode::<Bech32>(hrp, bytes)?)
    }
}
