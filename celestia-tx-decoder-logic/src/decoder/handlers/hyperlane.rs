//! Hyperlane mailbox, ISM, post-dispatch and warp handlers. Most of these messages only
//! differ in the role their single account field plays, so the dispatcher passes the
//! field to one of the shared role mappers below.

use super::{Context, HandlerOutput};
use crate::{
    proto::hyperlane::{
        core::v1::MsgProcessMessage,
        warp::v1::{MsgCreateCollateralToken, MsgCreateSyntheticToken},
    },
    types::{
        tokens::{Token, TokenType},
        AddressRole,
    },
};

pub fn owner(ctx: &Context, owner: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Owner, owner)]))
}

/// Ownership updates. A renounced ownership leaves `new_owner` empty.
pub fn owner_transfer(ctx: &Context, owner: &str, new_owner: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Owner, owner),
        (AddressRole::NewOwner, new_owner),
    ]))
}

pub fn creator(ctx: &Context, creator: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Creator, creator)]))
}

pub fn sender(ctx: &Context, sender: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Sender, sender)]))
}

pub fn process_message(ctx: &Context, msg: &MsgProcessMessage) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Relayer, msg.relayer.as_str())]))
}

pub fn create_collateral_token(ctx: &Context, msg: &MsgCreateCollateralToken) -> HandlerOutput {
    let mut output = owner(ctx, &msg.owner);
    output.entities.token = Some(Token {
        owner: msg.owner.clone(),
        mailbox: msg.origin_mailbox.clone(),
        denom: msg.origin_denom.clone(),
        token_type: TokenType::Collateral,
        height: ctx.block.height,
    });
    output
}

pub fn create_synthetic_token(ctx: &Context, msg: &MsgCreateSyntheticToken) -> HandlerOutput {
    let mut output = owner(ctx, &msg.owner);
    output.entities.token = Some(Token {
        owner: msg.owner.clone(),
        mailbox: msg.origin_mailbox.clone(),
        denom: String::new(),
        token_type: TokenType::Synthetic,
        height: ctx.block.height,
    });
    output
}
