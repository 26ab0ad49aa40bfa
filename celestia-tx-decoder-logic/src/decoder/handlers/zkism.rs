use super::{Context, HandlerOutput};
use crate::{
    proto::celestia::zkism::v1::{
        MsgCreateZkExecutionIsm, MsgSubmitMessages, MsgUpdateZkExecutionIsm,
    },
    types::AddressRole,
};

pub fn create_zk_execution_ism(ctx: &Context, msg: &MsgCreateZkExecutionIsm) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Creator, msg.creator.as_str())]))
}

pub fn update_zk_execution_ism(ctx: &Context, msg: &MsgUpdateZkExecutionIsm) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, msg.signer.as_str())]))
}

pub fn submit_messages(ctx: &Context, msg: &MsgSubmitMessages) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, msg.signer.as_str())]))
}
