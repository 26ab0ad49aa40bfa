use super::{Context, HandlerOutput};
use crate::{proto::celestia::forwarding::v1::MsgForward, types::AddressRole};

pub fn forward(ctx: &Context, msg: &MsgForward) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Signer, msg.signer.as_str()),
        (AddressRole::ForwardAddress, msg.forward_addr.as_str()),
    ]))
}
