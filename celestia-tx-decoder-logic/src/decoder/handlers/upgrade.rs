use super::{Context, HandlerOutput};
use crate::{
    proto::{
        celestia::signal::v1::{MsgSignalVersion, MsgTryUpgrade},
        cosmos::upgrade::v1beta1::{MsgCancelUpgrade, MsgSoftwareUpgrade},
    },
    types::{
        upgrades::{SignalVersion, Upgrade, UpgradeKind},
        AddressRole,
    },
};

pub fn software_upgrade(ctx: &Context, msg: &MsgSoftwareUpgrade) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Authority, msg.authority.as_str())]),
    );
    let plan = msg.plan.clone().unwrap_or_default();
    output.entities.upgrade = Some(Upgrade {
        plan_height: Some(plan.height),
        name: plan.name,
        info: plan.info,
        ..upgrade(ctx, &msg.authority, UpgradeKind::Software)
    });
    output
}

pub fn cancel_upgrade(ctx: &Context, msg: &MsgCancelUpgrade) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Authority, msg.authority.as_str())]),
    );
    output.entities.upgrade = Some(upgrade(ctx, &msg.authority, UpgradeKind::Cancel));
    output
}

pub fn signal_version(ctx: &Context, msg: &MsgSignalVersion) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Validator, msg.validator_address.as_str())]),
    );
    output.entities.signal_version = Some(SignalVersion {
        validator: msg.validator_address.clone(),
        version: msg.version,
        height: ctx.block.height,
        time: ctx.block.time,
    });
    output
}

pub fn try_upgrade(ctx: &Context, msg: &MsgTryUpgrade) -> HandlerOutput {
    let mut output =
        HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, msg.signer.as_str())]));
    output.entities.upgrade = Some(upgrade(ctx, &msg.signer, UpgradeKind::Try));
    output
}

/// Upgrade records carry the block time, not any time from the payload.
fn upgrade(ctx: &Context, signer: &str, kind: UpgradeKind) -> Upgrade {
    Upgrade {
        signer: signer.to_string(),
        kind,
        name: String::new(),
        info: String::new(),
        plan_height: None,
        height: ctx.block.height,
        time: ctx.block.time,
    }
}
