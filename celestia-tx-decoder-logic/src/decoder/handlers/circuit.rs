use super::{Context, HandlerOutput};
use crate::{
    proto::cosmos::circuit::v1::{
        MsgAuthorizeCircuitBreaker, MsgResetCircuitBreaker, MsgTripCircuitBreaker,
    },
    types::AddressRole,
};

pub fn authorize_circuit_breaker(ctx: &Context, msg: &MsgAuthorizeCircuitBreaker) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([
        (AddressRole::Granter, msg.granter.as_str()),
        (AddressRole::Grantee, msg.grantee.as_str()),
    ]))
}

pub fn trip_circuit_breaker(ctx: &Context, msg: &MsgTripCircuitBreaker) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Authority, msg.authority.as_str())]))
}

pub fn reset_circuit_breaker(ctx: &Context, msg: &MsgResetCircuitBreaker) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Authority, msg.authority.as_str())]))
}
