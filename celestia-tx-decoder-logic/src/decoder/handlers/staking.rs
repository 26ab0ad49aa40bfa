use super::{parse_int, parse_legacy_dec, Context, HandlerOutput};
use crate::{
    error::MessageError,
    proto::cosmos::{
        slashing::v1beta1::MsgUnjail,
        staking::v1beta1::{
            Description, MsgBeginRedelegate, MsgCancelUnbondingDelegation, MsgCreateValidator,
            MsgDelegate, MsgEditValidator, MsgUndelegate,
        },
    },
    types::{validators::Validator, AddressRole},
};
use bigdecimal::{BigDecimal, Zero};

pub fn create_validator(
    ctx: &Context,
    msg: &MsgCreateValidator,
) -> Result<HandlerOutput, MessageError> {
    // newer sdk versions leave the delegator empty, it shares the validator bytes
    let delegator = if msg.delegator_address.is_empty() {
        ctx.account_of(&msg.validator_address).unwrap_or_default()
    } else {
        msg.delegator_address.clone()
    };

    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, delegator.as_str()),
        (AddressRole::Validator, msg.validator_address.as_str()),
    ]));

    let commission = msg.commission.clone().unwrap_or_default();
    let stake = msg
        .value
        .as_ref()
        .map(|coin| parse_int(&coin.amount))
        .transpose()?
        .unwrap_or_else(BigDecimal::zero);
    let mut validator = Validator {
        delegator,
        address: msg.validator_address.clone(),
        rate: parse_legacy_dec(&commission.rate)?,
        max_rate: parse_legacy_dec(&commission.max_rate)?,
        max_change_rate: parse_legacy_dec(&commission.max_change_rate)?,
        min_self_delegation: parse_int(&msg.min_self_delegation)?,
        stake,
        height: ctx.block.height,
        ..empty_validator()
    };
    apply_description(&mut validator, msg.description.as_ref());
    output.entities.validator = Some(validator);
    Ok(output)
}

pub fn edit_validator(
    ctx: &Context,
    msg: &MsgEditValidator,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Validator, msg.validator_address.as_str())]),
    );
    let mut validator = Validator {
        address: msg.validator_address.clone(),
        rate: parse_legacy_dec(&msg.commission_rate)?,
        min_self_delegation: parse_int(&msg.min_self_delegation)?,
        height: ctx.block.height,
        ..empty_validator()
    };
    apply_description(&mut validator, msg.description.as_ref());
    output.entities.validator = Some(validator);
    Ok(output)
}

pub fn delegate(ctx: &Context, msg: &MsgDelegate) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::Validator, msg.validator_address.as_str()),
    ]))
}

pub fn begin_redelegate(ctx: &Context, msg: &MsgBeginRedelegate) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::ValidatorSrc, msg.validator_src_address.as_str()),
        (AddressRole::ValidatorDst, msg.validator_dst_address.as_str()),
    ]))
}

pub fn undelegate(ctx: &Context, msg: &MsgUndelegate) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::Validator, msg.validator_address.as_str()),
    ]))
}

pub fn cancel_unbonding_delegation(
    ctx: &Context,
    msg: &MsgCancelUnbondingDelegation,
) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Delegator, msg.delegator_address.as_str()),
        (AddressRole::Validator, msg.validator_address.as_str()),
    ]))
}

pub fn unjail(ctx: &Context, msg: &MsgUnjail) -> HandlerOutput {
    HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Validator, msg.validator_addr.as_str())]),
    )
}

fn empty_validator() -> Validator {
    Validator {
        delegator: String::new(),
        address: String::new(),
        moniker: String::new(),
        identity: String::new(),
        website: String::new(),
        contacts: String::new(),
        details: String::new(),
        rate: BigDecimal::zero(),
        max_rate: BigDecimal::zero(),
        max_change_rate: BigDecimal::zero(),
        min_self_delegation: BigDecimal::zero(),
        stake: BigDecimal::zero(),
        height: 0,
    }
}

fn apply_description(validator: &mut Validator, description: Option<&Description>) {
    if let Some(description) = description {
        validator.moniker = description.moniker.clone();
        validator.identity = description.identity.clone();
        validator.website = description.website.clone();
        validator.contacts = description.security_contact.clone();
        validator.details = description.details.clone();
    }
}
