//! IBC core and ICS-20 handlers. Lifecycle messages only carry their signer; packet
//! messages also interpret the packet payload.

use super::{ica, Context, HandlerOutput};
use crate::{
    helpers::{decimal_from_map, string_from_map},
    proto::ibc::{
        applications::transfer::v1::MsgTransfer,
        core::channel::v1::{MsgAcknowledgement, MsgRecvPacket, MsgTimeout, MsgTimeoutOnClose, Packet},
    },
    types::{
        ibc::{FungibleTokenPacketData, IbcChannel, IbcChannelStatus, IbcTransfer},
        AddressRole, DecodedPacket,
    },
};
use bigdecimal::{BigDecimal, Zero};
use serde_json::{Map, Value};

/// Client, connection and channel handshake messages.
pub fn signer(ctx: &Context, signer: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, signer)]))
}

pub fn transfer(ctx: &Context, msg: &MsgTransfer) -> HandlerOutput {
    let mut addresses = ctx.addresses([(AddressRole::Sender, msg.sender.as_str())]);
    if ctx.is_local(&msg.receiver) {
        addresses.push(ctx.address(AddressRole::Receiver, &msg.receiver));
    }
    HandlerOutput::with_addresses(addresses)
}

pub fn recv_packet(ctx: &Context, msg: &MsgRecvPacket) -> HandlerOutput {
    packet_output(ctx, &msg.signer, msg.packet.as_ref(), Flow::Received)
}

/// A failed acknowledgement returns the tokens, so it does not count as a transfer.
pub fn acknowledgement(ctx: &Context, msg: &MsgAcknowledgement) -> HandlerOutput {
    let flow = if is_error_acknowledgement(&msg.acknowledgement) {
        Flow::Refunded
    } else {
        Flow::Sent
    };
    packet_output(ctx, &msg.signer, msg.packet.as_ref(), flow)
}

pub fn timeout(ctx: &Context, msg: &MsgTimeout) -> HandlerOutput {
    packet_output(ctx, &msg.signer, msg.packet.as_ref(), Flow::Refunded)
}

pub fn timeout_on_close(ctx: &Context, msg: &MsgTimeoutOnClose) -> HandlerOutput {
    packet_output(ctx, &msg.signer, msg.packet.as_ref(), Flow::Refunded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Inbound packet delivered to this chain.
    Received,
    /// Outbound packet acknowledged by the counterparty.
    Sent,
    /// Outbound packet that timed out or was rejected.
    Refunded,
}

fn packet_output(ctx: &Context, signer: &str, packet: Option<&Packet>, flow: Flow) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, signer)]));
    let Some(packet) = packet else {
        return output;
    };

    if packet.destination_port == ctx.settings().ica_host_port {
        output.packet = ica::decode_host_packet(ctx, &packet.data);
        return output;
    }

    let Some(mut data) = transfer_data(&packet.data) else {
        tracing::debug!(
            port = %packet.destination_port,
            channel = %packet.destination_channel,
            "packet data is not a fungible token transfer"
        );
        return output;
    };
    data.denom = local_denom(packet, &data.denom);

    for (role, address) in [
        (AddressRole::Sender, &data.sender),
        (AddressRole::Receiver, &data.receiver),
    ] {
        if ctx.is_local(address) {
            output.addresses.push(ctx.address(role, address));
        }
    }

    let (channel_id, port) = match flow {
        Flow::Received => (&packet.destination_channel, &packet.destination_port),
        Flow::Sent => (&packet.source_channel, &packet.source_port),
        Flow::Refunded => {
            output.packet = Some(DecodedPacket::Transfer(data));
            return output;
        }
    };

    let native = if data.denom == ctx.settings().native_denom {
        data.amount.clone()
    } else {
        BigDecimal::zero()
    };
    let (received, sent) = match flow {
        Flow::Received => (native, BigDecimal::zero()),
        _ => (BigDecimal::zero(), native),
    };
    output.entities.ibc_channel = Some(IbcChannel {
        id: channel_id.clone(),
        port_id: port.clone(),
        status: IbcChannelStatus::Initialization,
        transfers_count: 1,
        received,
        sent,
        height: ctx.block.height,
    });
    output.entities.ibc_transfer = Some(IbcTransfer {
        channel_id: channel_id.clone(),
        port: port.clone(),
        sender: data.sender.clone(),
        receiver: data.receiver.clone(),
        amount: data.amount.clone(),
        denom: data.denom.clone(),
        memo: data.memo.clone(),
        sequence: packet.sequence,
        height: ctx.block.height,
        time: ctx.block.time,
    });
    output.packet = Some(DecodedPacket::Transfer(data));
    output
}

/// Parses the json payload of an ICS-20 packet. Payloads without an amount and a denom
/// are not transfers.
fn transfer_data(data: &[u8]) -> Option<FungibleTokenPacketData> {
    let map: Map<String, Value> = serde_json::from_slice(data).ok()?;
    if !map.contains_key("amount") || !map.contains_key("denom") {
        return None;
    }
    let amount = decimal_from_map(&map, "amount")
        .map_err(|err| tracing::debug!(err = %err, "invalid transfer amount"))
        .ok()?;
    Some(FungibleTokenPacketData {
        amount,
        denom: string_from_map(&map, "denom"),
        sender: string_from_map(&map, "sender"),
        receiver: string_from_map(&map, "receiver"),
        memo: string_from_map(&map, "memo"),
    })
}

/// Strips the `{port}/{channel}/` trace the sending side adds to a voucher denom.
fn local_denom(packet: &Packet, denom: &str) -> String {
    let prefix = format!("{}/{}/", packet.source_port, packet.source_channel);
    denom.strip_prefix(&prefix).unwrap_or(denom).to_string()
}

fn is_error_acknowledgement(acknowledgement: &[u8]) -> bool {
    serde_json::from_slice::<Map<String, Value>>(acknowledgement)
        .is_ok_and(|ack| ack.contains_key("error"))
}
