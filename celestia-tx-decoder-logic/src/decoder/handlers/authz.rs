use super::{timestamp, Context, HandlerOutput};
use crate::{
    error::MessageError,
    proto::{
        cosmos::{
            authz::v1beta1::{GenericAuthorization, MsgExec, MsgGrant, MsgRevoke},
            bank::v1beta1::SendAuthorization,
            staking::v1beta1::{AuthorizationType, StakeAuthorization},
        },
        google::protobuf::Any,
    },
    types::{grants::Grant, AddressRole},
};
use prost::Message;
use serde::Serialize;
use serde_json::{Map, Value};

const GENERIC_AUTHORIZATION: &str = "/cosmos.authz.v1beta1.GenericAuthorization";
const SEND_AUTHORIZATION: &str = "/cosmos.bank.v1beta1.SendAuthorization";
const STAKE_AUTHORIZATION: &str = "/cosmos.staking.v1beta1.StakeAuthorization";

pub fn grant(ctx: &Context, msg: &MsgGrant) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Granter, msg.granter.as_str()),
        (AddressRole::Grantee, msg.grantee.as_str()),
    ]));

    let grant = msg.grant.clone().unwrap_or_default();
    let expiration = grant.expiration.as_ref().map(timestamp).transpose()?;
    let (authorization, params) = grant
        .authorization
        .as_ref()
        .map(authorization)
        .unwrap_or_default();

    output.entities.grant = Some(Grant {
        height: ctx.block.height,
        time: ctx.block.time,
        granter: msg.granter.clone(),
        grantee: msg.grantee.clone(),
        authorization,
        expiration,
        revoked: false,
        revoke_height: None,
        params,
    });
    Ok(output)
}

/// Wrapped messages are listed in `internal_msgs`; their addresses are not collected.
pub fn exec(ctx: &Context, msg: &MsgExec) -> HandlerOutput {
    let mut output =
        HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Grantee, msg.grantee.as_str())]));
    output.internal_msgs = msg.msgs.iter().map(|any| ctx.internal_msg(any)).collect();
    output
}

pub fn revoke(ctx: &Context, msg: &MsgRevoke) -> HandlerOutput {
    let mut output = HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Granter, msg.granter.as_str()),
        (AddressRole::Grantee, msg.grantee.as_str()),
    ]));
    output.entities.grant = Some(Grant {
        height: ctx.block.height,
        time: ctx.block.time,
        granter: msg.granter.clone(),
        grantee: msg.grantee.clone(),
        authorization: msg.msg_type_url.clone(),
        expiration: None,
        revoked: true,
        revoke_height: Some(ctx.block.height),
        params: Map::new(),
    });
    output
}

/// Label and parameters of an authorization. The label is the type url of the message
/// the authorization allows, or empty when the authorization is not recognized.
fn authorization(any: &Any) -> (String, Map<String, Value>) {
    let decoded = match any.type_url.as_str() {
        GENERIC_AUTHORIZATION => GenericAuthorization::decode(any.value.as_slice())
            .map(|auth| (auth.msg.clone(), params(&auth))),
        SEND_AUTHORIZATION => SendAuthorization::decode(any.value.as_slice())
            .map(|auth| ("/cosmos.bank.v1beta1.MsgSend".to_string(), params(&auth))),
        STAKE_AUTHORIZATION => StakeAuthorization::decode(any.value.as_slice()).map(|auth| {
            let label = match auth.authorization_type() {
                AuthorizationType::Delegate => "/cosmos.staking.v1beta1.MsgDelegate",
                AuthorizationType::Undelegate => "/cosmos.staking.v1beta1.MsgUndelegate",
                AuthorizationType::Redelegate => "/cosmos.staking.v1beta1.MsgBeginRedelegate",
                AuthorizationType::CancelUnbondingDelegation => {
                    "/cosmos.staking.v1beta1.MsgCancelUnbondingDelegation"
                }
                AuthorizationType::Unspecified => "",
            };
            (label.to_string(), params(&auth))
        }),
        _ => return (String::new(), Map::new()),
    };
    decoded.unwrap_or_else(|err| {
        tracing::debug!(type_url = %any.type_url, err = %err, "failed to decode authorization");
        (String::new(), Map::new())
    })
}

pub(super) fn params<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(params)) => params,
        _ => Map::new(),
    }
}
