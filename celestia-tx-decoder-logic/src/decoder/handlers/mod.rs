//! Per-module message handlers. A handler maps one typed message to its ordered address
//! roles and the entities it creates; the dispatcher attaches everything generic.

pub mod authz;
pub mod bank;
pub mod blob;
pub mod circuit;
pub mod distribution;
pub mod feegrant;
pub mod forwarding;
pub mod gov;
pub mod hyperlane;
pub mod ibc;
pub mod ica;
pub mod staking;
pub mod upgrade;
pub mod vesting;
pub mod zkism;

use super::{registry::CosmosMsg, Decoder};
use crate::{
    error::MessageError,
    helpers::{parse_decimal, parse_integer},
    proto::{cosmos::base::v1beta1::Coin, google::protobuf},
    settings::DecoderSettings,
    types::{
        Address, AddressRole, AddressWithRole, Balance, BlockContext, DecodedPacket,
        ExecutionStatus, MessageEntities, MsgType, NestedMessage,
    },
};
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

/// Precision of cosmos `LegacyDec` values, which are encoded as scaled integers.
const LEGACY_DEC_PRECISION: i64 = 18;

#[derive(Debug, Default)]
pub struct HandlerOutput {
    pub addresses: Vec<AddressWithRole>,
    pub blobs_size: u64,
    pub internal_msgs: Vec<String>,
    pub packet: Option<DecodedPacket>,
    pub entities: MessageEntities,
}

impl HandlerOutput {
    pub fn with_addresses(addresses: Vec<AddressWithRole>) -> Self {
        Self {
            addresses,
            ..Default::default()
        }
    }
}

pub struct Context<'a> {
    pub decoder: &'a Decoder,
    pub block: &'a BlockContext,
    pub status: ExecutionStatus,
    pub position: usize,
    /// Zero for top level messages.
    pub depth: usize,
}

impl Context<'_> {
    pub fn settings(&self) -> &DecoderSettings {
        self.decoder.settings()
    }

    pub fn address(&self, role: AddressRole, address: &str) -> AddressWithRole {
        let hash = self
            .decoder
            .address_codec()
            .decode(address)
            .map(|decoded| decoded.bytes)
            .unwrap_or_default();
        AddressWithRole {
            role,
            address: Address {
                height: self.block.height,
                last_height: self.block.height,
                address: address.to_string(),
                hash,
                balance: Balance::empty(&self.settings().native_denom),
            },
        }
    }

    /// Builds one address record per role in the given order. Empty or unparsable
    /// strings are kept with an empty hash.
    pub fn addresses<'s>(
        &self,
        refs: impl IntoIterator<Item = (AddressRole, &'s str)>,
    ) -> Vec<AddressWithRole> {
        refs.into_iter()
            .map(|(role, address)| self.address(role, address))
            .collect()
    }

    /// Whether the address belongs to accounts of this chain.
    pub fn is_local(&self, address: &str) -> bool {
        self.decoder
            .address_codec()
            .decode(address)
            .is_some_and(|decoded| decoded.prefix == self.settings().address_prefix)
    }

    /// Account address sharing the bytes of a validator operator address.
    pub fn account_of(&self, validator: &str) -> Option<String> {
        let codec = self.decoder.address_codec();
        let decoded = codec.decode(validator)?;
        codec
            .encode(&self.settings().address_prefix, &decoded.bytes)
            .ok()
    }

    /// Sum of the native denomination entries of `coins`.
    pub fn native_amount(&self, coins: &[Coin]) -> Result<BigDecimal, MessageError> {
        coins
            .iter()
            .filter(|coin| coin.denom == self.settings().native_denom)
            .try_fold(BigDecimal::zero(), |total, coin| {
                Ok(total + parse_int(&coin.amount)?)
            })
    }

    /// Identifier stored for a wrapped message: its type tag when known, its type url
    /// otherwise.
    pub fn internal_msg(&self, any: &protobuf::Any) -> String {
        match self.decoder.registry().decode(any) {
            Ok(CosmosMsg::Unknown(_)) => any.type_url.clone(),
            Ok(msg) => msg.msg_type().to_string(),
            Err(err) => {
                tracing::debug!(type_url = %any.type_url, err = %err, "failed to decode internal message");
                any.type_url.clone()
            }
        }
    }

    /// Runs a wrapped message through the dispatcher one level deeper. Failures and
    /// messages past the depth limit are kept as opaque entries.
    pub fn decode_nested(&self, any: &protobuf::Any) -> NestedMessage {
        if self.depth >= self.settings().max_nesting_depth {
            tracing::warn!(
                type_url = %any.type_url,
                depth = self.depth,
                "nesting depth limit reached, message is left undecoded"
            );
            return opaque(any);
        }
        let msg = match self.decoder.registry().decode(any) {
            Ok(msg) => msg,
            Err(err) => {
                tracing::debug!(type_url = %any.type_url, err = %err, "failed to decode nested message");
                return opaque(any);
            }
        };
        match self.decoder.decode_message_at_depth(
            self.block,
            &msg,
            self.position,
            self.status,
            self.depth + 1,
        ) {
            Ok(decoded) => NestedMessage {
                type_url: any.type_url.clone(),
                msg_type: decoded.msg_type,
                data: decoded.data,
            },
            Err(err) => {
                tracing::debug!(err = %err, "failed to handle nested message");
                opaque(any)
            }
        }
    }
}

fn opaque(any: &protobuf::Any) -> NestedMessage {
    NestedMessage {
        type_url: any.type_url.clone(),
        msg_type: MsgType::MsgUnknown,
        data: CosmosMsg::Unknown(any.clone()).fields(),
    }
}

/// Parses a cosmos `Int`. Empty values are zero.
pub fn parse_int(value: &str) -> Result<BigDecimal, MessageError> {
    if value.is_empty() {
        return Ok(BigDecimal::zero());
    }
    parse_integer(value)
        .map(|int| BigDecimal::new(int, 0))
        .ok_or_else(|| MessageError::InvalidDecimal(value.to_string()))
}

/// Parses a cosmos `LegacyDec`. The wire form is an integer scaled by 10^18, the json
/// form carries a decimal point. Empty values are zero.
pub fn parse_legacy_dec(value: &str) -> Result<BigDecimal, MessageError> {
    if value.is_empty() {
        return Ok(BigDecimal::zero());
    }
    if value.contains('.') {
        return parse_decimal(value).ok_or_else(|| MessageError::InvalidDecimal(value.to_string()));
    }
    let scaled =
        parse_integer(value).ok_or_else(|| MessageError::InvalidDecimal(value.to_string()))?;
    Ok(BigDecimal::new(scaled, LEGACY_DEC_PRECISION))
}

pub fn timestamp(value: &protobuf::Timestamp) -> Result<DateTime<Utc>, MessageError> {
    u32::try_from(value.nanos)
        .ok()
        .and_then(|nanos| DateTime::from_timestamp(value.seconds, nanos))
        .ok_or(MessageError::InvalidTimestamp {
            seconds: value.seconds,
            nanos: value.nanos,
        })
}

pub fn unix_time(seconds: i64) -> Result<DateTime<Utc>, MessageError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or(MessageError::InvalidTimestamp { seconds, nanos: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("", "0")]
    #[case("50000000000000000", "0.05")]
    #[case("1000000000000000000", "1")]
    #[case("0.100000000000000000", "0.1")]
    fn legacy_decimals(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(
            parse_legacy_dec(value).unwrap(),
            BigDecimal::from_str(expected).unwrap()
        );
    }

    #[test]
    fn invalid_decimals() {
        assert_eq!(
            parse_legacy_dec("1e"),
            Err(MessageError::InvalidDecimal("1e".to_string()))
        );
        assert!(parse_int("ten").is_err());
    }

    #[rstest]
    #[case::exponent("1e5")]
    #[case::huge_negative_exponent("1e-20000000")]
    #[case::fraction("1.5")]
    #[case::separator("1_000")]
    fn rejected_ints(#[case] value: &str) {
        assert_eq!(
            parse_int(value),
            Err(MessageError::InvalidDecimal(value.to_string()))
        );
    }

    #[rstest]
    #[case::exponent("5E17")]
    #[case::fraction_exponent("0.5e-20000000")]
    #[case::trailing_point("5.")]
    fn rejected_legacy_decimals(#[case] value: &str) {
        assert_eq!(
            parse_legacy_dec(value),
            Err(MessageError::InvalidDecimal(value.to_string()))
        );
    }

    #[test]
    fn timestamps() {
        let value = protobuf::Timestamp {
            seconds: 1_700_000_000,
            nanos: 5,
        };
        assert_eq!(
            timestamp(&value).unwrap(),
            DateTime::from_timestamp(1_700_000_000, 5).unwrap()
        );
        let negative = protobuf::Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert!(timestamp(&negative).is_err());
    }
}
