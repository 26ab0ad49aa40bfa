use super::{Context, HandlerOutput};
use crate::{
    proto::cosmos::distribution::v1beta1::{
        MsgFundCommunityPool, MsgSetWithdrawAddress, MsgWithdrawDelegatorReward,
        MsgWithdrawValidatorCommission,
    },
    types::AddressRole,
};

pub fn set_withdraw_address(ctx: &Context, msg: &MsgSetWithdrawAddress) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::WithdrawAddress, msg.withdraw_address.as_str()),
    ]))
}

pub fn withdraw_delegator_reward(
    ctx: &Context,
    msg: &MsgWithdrawDelegatorReward,
) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::Validator, msg.validator_address.as_str()),
    ]))
}

pub fn withdraw_validator_commission(
    ctx: &Context,
    msg: &MsgWithdrawValidatorCommission,
) -> HandlerOutput {
    HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Validator, msg.validator_address.as_str())]),
    )
}

pub fn fund_community_pool(ctx: &Context, msg: &MsgFundCommunityPool) -> HandlerOutput {
    HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Depositor, msg.depositor.as_str())]),
    )
}
