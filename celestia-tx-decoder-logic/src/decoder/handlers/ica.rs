use super::{Context, HandlerOutput};
use crate::{
    helpers::string_from_map,
    proto::ibc::applications::interchain_accounts::{
        controller::v1::{MsgRegisterInterchainAccount, MsgSendTx},
        v1::{CosmosTx, InterchainAccountPacketData, Type},
    },
    types::{AddressRole, DecodedPacket, NestedMessage},
};
use base64::prelude::*;
use prost::Message;
use serde_json::{Map, Value};

pub fn register_interchain_account(
    ctx: &Context,
    msg: &MsgRegisterInterchainAccount,
) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Owner, msg.owner.as_str())]))
}

pub fn send_tx(ctx: &Context, msg: &MsgSendTx) -> HandlerOutput {
    let mut output =
        HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Owner, msg.owner.as_str())]));
    output.packet = msg
        .packet_data
        .as_ref()
        .map(|data| DecodedPacket::InterchainAccount {
            packet_type: packet_type(data.r#type),
            memo: data.memo.clone(),
            messages: nested_messages(ctx, &data.data),
        });
    output
}

/// Decodes the payload of a packet addressed to the interchain accounts host port.
/// Relayed packets carry the json form of `InterchainAccountPacketData`; the protobuf form
/// is accepted as well.
pub fn decode_host_packet(ctx: &Context, data: &[u8]) -> Option<DecodedPacket> {
    if let Ok(packet) = serde_json::from_slice::<Map<String, Value>>(data) {
        let encoded = string_from_map(&packet, "data");
        let messages = match BASE64_STANDARD.decode(encoded.as_bytes()) {
            Ok(bytes) => nested_messages(ctx, &bytes),
            Err(err) => {
                tracing::debug!(err = %err, "interchain account packet data is not base64");
                return None;
            }
        };
        return Some(DecodedPacket::InterchainAccount {
            packet_type: json_packet_type(packet.get("type")),
            memo: string_from_map(&packet, "memo"),
            messages,
        });
    }

    match InterchainAccountPacketData::decode(data) {
        Ok(packet) => Some(DecodedPacket::InterchainAccount {
            packet_type: packet_type(packet.r#type),
            memo: packet.memo,
            messages: nested_messages(ctx, &packet.data),
        }),
        Err(err) => {
            tracing::debug!(err = %err, "failed to decode interchain account packet");
            None
        }
    }
}

fn nested_messages(ctx: &Context, data: &[u8]) -> Vec<NestedMessage> {
    match CosmosTx::decode(data) {
        Ok(tx) => tx.messages.iter().map(|any| ctx.decode_nested(any)).collect(),
        Err(err) => {
            tracing::debug!(err = %err, "failed to decode interchain account transaction");
            Vec::new()
        }
    }
}

fn packet_type(value: i32) -> String {
    Type::try_from(value)
        .map(|kind| kind.as_str_name().to_string())
        .unwrap_or_else(|_| value.to_string())
}

fn json_packet_type(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .map(packet_type)
            .unwrap_or_else(|| number.to_string()),
        _ => Type::Unspecified.as_str_name().to_string(),
    }
}
