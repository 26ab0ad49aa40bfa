use super::{authz::params, timestamp, Context, HandlerOutput};
use crate::{
    error::MessageError,
    proto::{
        cosmos::feegrant::v1beta1::{
            AllowedMsgAllowance, BasicAllowance, MsgGrantAllowance, MsgPruneAllowances,
            MsgRevokeAllowance, PeriodicAllowance,
        },
        google::protobuf::{Any, Timestamp},
    },
    types::{
        grants::{Grant, FEE_AUTHORIZATION},
        AddressRole,
    },
};
use prost::Message;
use serde_json::{Map, Value};

const BASIC_ALLOWANCE: &str = "/cosmos.feegrant.v1beta1.BasicAllowance";
const PERIODIC_ALLOWANCE: &str = "/cosmos.feegrant.v1beta1.PeriodicAllowance";
const ALLOWED_MSG_ALLOWANCE: &str = "/cosmos.feegrant.v1beta1.AllowedMsgAllowance";

pub fn grant_allowance(
    ctx: &Context,
    msg: &MsgGrantAllowance,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Granter, msg.granter.as_str()),
        (AddressRole::Grantee, msg.grantee.as_str()),
    ]));

    let allowance = msg.allowance.as_ref().map(allowance).unwrap_or_default();
    let expiration = allowance.expiration.as_ref().map(timestamp).transpose()?;
    output.entities.grant = Some(Grant {
        height: ctx.block.height,
        time: ctx.block.time,
        granter: msg.granter.clone(),
        grantee: msg.grantee.clone(),
        authorization: FEE_AUTHORIZATION.to_string(),
        expiration,
        revoked: false,
        revoke_height: None,
        params: allowance.params,
    });
    Ok(output)
}

pub fn revoke_allowance(ctx: &Context, msg: &MsgRevokeAllowance) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Granter, msg.granter.as_str()),
        (AddressRole::Grantee, msg.grantee.as_str()),
    ]));
    output.entities.grant = Some(Grant {
        height: ctx.block.height,
        time: ctx.block.time,
        granter: msg.granter.clone(),
        grantee: msg.grantee.clone(),
        authorization: FEE_AUTHORIZATION.to_string(),
        expiration: None,
        revoked: true,
        revoke_height: Some(ctx.block.height),
        params: Map::new(),
    });
    output
}

pub fn prune_allowances(ctx: &Context, msg: &MsgPruneAllowances) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Pruner, msg.pruner.as_str())]))
}

#[derive(Debug, Default)]
struct Allowance {
    expiration: Option<Timestamp>,
    params: Map<String, Value>,
}

fn allowance(any: &Any) -> Allowance {
    let decoded = match any.type_url.as_str() {
        BASIC_ALLOWANCE => BasicAllowance::decode(any.value.as_slice()).map(|allowance| Allowance {
            expiration: allowance.expiration,
            params: params(&allowance),
        }),
        PERIODIC_ALLOWANCE => {
            PeriodicAllowance::decode(any.value.as_slice()).map(|allowance| Allowance {
                expiration: allowance.basic.as_ref().and_then(|basic| basic.expiration),
                params: params(&allowance),
            })
        }
        // the wrapped allowance holds the expiration, one level deep
        ALLOWED_MSG_ALLOWANCE => {
            AllowedMsgAllowance::decode(any.value.as_slice()).map(|allowance| {
                let expiration = allowance
                    .allowance
                    .as_ref()
                    .filter(|inner| inner.type_url != ALLOWED_MSG_ALLOWANCE)
                    .and_then(|inner| self::allowance(inner).expiration);
                Allowance {
                    expiration,
                    params: params(&allowance),
                }
            })
        }
        _ => return Allowance::default(),
    };
    decoded.unwrap_or_else(|err| {
        tracing::debug!(type_url = %any.type_url, err = %err, "failed to decode fee allowance");
        Allowance::default()
    })
}
