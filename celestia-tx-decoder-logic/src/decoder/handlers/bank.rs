use super::{Context, HandlerOutput};
use crate::{proto::cosmos::bank::v1beta1::{MsgMultiSend, MsgSend}, types::AddressRole};

pub fn send(ctx: &Context, msg: &MsgSend) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::FromAddress, msg.from_address.as_str()),
        (AddressRole::ToAddress, msg.to_address.as_str()),
    ]))
}

/// All inputs precede all outputs.
pub fn multi_send(ctx: &Context, msg: &MsgMultiSend) -> HandlerOutput {
    let inputs = msg
        .inputs
        .iter()
        .map(|input| (AddressRole::Input, input.address.as_str()));
    let outputs = msg
        .outputs
        .iter()
        .map(|output| (AddressRole::Output, output.address.as_str()));
    HandlerOutput::with_addresses(ctx.addresses(inputs.chain(outputs)))
}
