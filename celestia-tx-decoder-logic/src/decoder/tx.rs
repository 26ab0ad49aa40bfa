use crate::{
    address::AddressCodec,
    error::{FeeError, TxDecodeError},
    helpers::parse_integer,
    proto::{
        celestia::core::v1::blob::{BlobTx, IndexWrapper},
        cosmos::{
            base::v1beta1::Coin,
            tx::v1beta1::{AuthInfo, Tx},
        },
        google::protobuf::Any,
    },
    settings::DecoderSettings,
};
use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};
use prost::Message;
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
};

pub const BLOB_TX_TYPE_ID: &str = "BLOB";
pub const INDEX_WRAPPER_TYPE_ID: &str = "INDX";

/// Envelope contents before the messages are resolved against the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTx {
    pub messages: Vec<Any>,
    /// `None` when the envelope format has no memo.
    pub memo: Option<String>,
    /// `None` when the envelope format has no timeout height.
    pub timeout_height: Option<u64>,
    pub auth_info: AuthInfo,
}

pub trait TxCodec: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<ParsedTx, TxDecodeError>;
}

/// Decodes `cosmos.tx.v1beta1.Tx`, unwrapping Celestia blob and index wrappers first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoTxCodec;

impl TxCodec for ProtoTxCodec {
    fn decode(&self, raw: &[u8]) -> Result<ParsedTx, TxDecodeError> {
        let raw = unwrap_tx(raw);
        let tx = Tx::decode(raw.as_ref())?;
        let body = tx.body.ok_or(TxDecodeError::BodyMissing)?;
        let auth_info = tx.auth_info.ok_or(TxDecodeError::AuthInfoMissing)?;
        Ok(ParsedTx {
            messages: body.messages,
            memo: Some(body.memo),
            timeout_height: Some(body.timeout_height),
            auth_info,
        })
    }
}

/// Returns the inner sdk transaction of a `BlobTx` or `IndexWrapper`, or the input itself.
/// Blobs are dropped.
pub fn unwrap_tx(raw: &[u8]) -> Cow<'_, [u8]> {
    if let Ok(blob_tx) = BlobTx::decode(raw) {
        if blob_tx.type_id == BLOB_TX_TYPE_ID {
            return Cow::Owned(blob_tx.tx);
        }
    }
    if let Ok(wrapper) = IndexWrapper::decode(raw) {
        if wrapper.type_id == INDEX_WRAPPER_TYPE_ID {
            return Cow::Owned(wrapper.tx);
        }
    }
    Cow::Borrowed(raw)
}

/// Fee amount in the native denomination. Fees must use a single currency, either the
/// native denomination or its display alias.
pub fn decode_fee(coins: &[Coin], settings: &DecoderSettings) -> Result<BigDecimal, FeeError> {
    let denoms: BTreeSet<&str> = coins.iter().map(|coin| coin.denom.as_str()).collect();
    let denom = match denoms.len() {
        0 => return Ok(BigDecimal::zero()),
        1 => denoms.into_iter().next().unwrap_or_default(),
        count => return Err(FeeError::Ambiguous(count)),
    };

    let scale = if denom == settings.native_denom {
        BigDecimal::from(1)
    } else if denom == settings.display_denom {
        BigDecimal::new(BigInt::from(1), -i64::from(settings.display_denom_exponent))
    } else {
        return Err(FeeError::UnsupportedDenom(denom.to_string()));
    };

    if coins.len() > 1 {
        tracing::debug!(denom, coins = coins.len(), "summing fee coins of one denomination");
    }
    let mut total = BigDecimal::zero();
    for coin in coins {
        let amount = parse_integer(&coin.amount)
            .ok_or_else(|| FeeError::InvalidAmount(coin.amount.clone()))?;
        total += BigDecimal::new(amount, 0);
    }
    Ok(total * scale)
}

/// Distinct account addresses among `signers`. Validator operator addresses are converted
/// to the account address with the same bytes; undecodable strings are kept verbatim.
pub fn collect_signers<'a>(
    signers: impl IntoIterator<Item = &'a str>,
    codec: &dyn AddressCodec,
    settings: &DecoderSettings,
) -> BTreeMap<String, Vec<u8>> {
    let mut result = BTreeMap::new();
    for signer in signers.into_iter().filter(|signer| !signer.is_empty()) {
        match codec.decode(signer) {
            Some(decoded) if decoded.prefix == settings.validator_prefix => {
                let account = codec
                    .encode(&settings.address_prefix, &decoded.bytes)
                    .unwrap_or_else(|_| signer.to_string());
                result.insert(account, decoded.bytes);
            }
            Some(decoded) => {
                result.insert(signer.to_string(), decoded.bytes);
            }
            None => {
                result.insert(signer.to_string(), Vec::new());
            }
        }
    }
    result
}
