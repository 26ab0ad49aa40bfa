use super::{unix_time, Context, HandlerOutput};
use crate::{
    error::MessageError,
    proto::cosmos::vesting::v1beta1::{
        MsgCreatePeriodicVestingAccount, MsgCreatePermanentLockedAccount,
        MsgCreateVestingAccount,
    },
    types::{
        vesting::{VestingAccount, VestingPeriod, VestingType},
        AddressRole,
    },
};
use bigdecimal::BigDecimal;

pub fn create_vesting_account(
    ctx: &Context,
    msg: &MsgCreateVestingAccount,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::FromAddress, msg.from_address.as_str()),
        (AddressRole::ToAddress, msg.to_address.as_str()),
    ]));
    let (vesting_type, start_time) = if msg.delayed {
        (VestingType::Delayed, None)
    } else {
        (VestingType::Continuous, Some(ctx.block.time))
    };
    output.entities.vesting_account = Some(VestingAccount {
        address: msg.to_address.clone(),
        vesting_type,
        amount: ctx.native_amount(&msg.amount)?,
        start_time,
        end_time: Some(unix_time(msg.end_time)?),
        periods: vec![],
        height: ctx.block.height,
    });
    Ok(output)
}

pub fn create_permanent_locked_account(
    ctx: &Context,
    msg: &MsgCreatePermanentLockedAccount,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::FromAddress, msg.from_address.as_str()),
        (AddressRole::ToAddress, msg.to_address.as_str()),
    ]));
    output.entities.vesting_account = Some(VestingAccount {
        address: msg.to_address.clone(),
        vesting_type: VestingType::Permanent,
        amount: ctx.native_amount(&msg.amount)?,
        start_time: None,
        end_time: None,
        periods: vec![],
        height: ctx.block.height,
    });
    Ok(output)
}

pub fn create_periodic_vesting_account(
    ctx: &Context,
    msg: &MsgCreatePeriodicVestingAccount,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::FromAddress, msg.from_address.as_str()),
        (AddressRole::ToAddress, msg.to_address.as_str()),
    ]));

    let mut periods = Vec::with_capacity(msg.vesting_periods.len());
    for period in &msg.vesting_periods {
        periods.push(VestingPeriod {
            length: period.length,
            amount: ctx.native_amount(&period.amount)?,
        });
    }
    let amount: BigDecimal = periods.iter().map(|period| &period.amount).sum();
    // period lengths come from the message, their sum may leave the i64 range
    let end_time = periods
        .iter()
        .try_fold(msg.start_time, |end, period| end.checked_add(period.length))
        .ok_or_else(|| MessageError::InvalidTimestamp {
            seconds: periods
                .iter()
                .fold(msg.start_time, |end, period| end.saturating_add(period.length)),
            nanos: 0,
        })?;

    output.entities.vesting_account = Some(VestingAccount {
        address: msg.to_address.clone(),
        vesting_type: VestingType::Periodic,
        amount,
        start_time: Some(unix_time(msg.start_time)?),
        end_time: Some(unix_time(end_time)?),
        periods,
        height: ctx.block.height,
    });
    Ok(output)
}
