//! Governance handlers for both gov generations. Each generation keeps its own message
//! shapes but maps onto the same type tags and the same [`Proposal`] record.

use super::{Context, HandlerOutput};
use crate::{
    decoder::registry::CosmosMsg,
    error::MessageError,
    proto::{
        cosmos::{
            distribution::v1beta1::CommunityPoolSpendProposal,
            gov::{v1, v1beta1},
            params::v1beta1::ParameterChangeProposal,
            upgrade::v1beta1::{CancelSoftwareUpgradeProposal, SoftwareUpgradeProposal},
        },
        google::protobuf::Any,
        ibc::core::client::v1::ClientUpdateProposal,
    },
    types::{
        proposals::{Proposal, ProposalStatus, ProposalType},
        AddressRole,
    },
};
use prost::Message;
use serde_json::{json, Value};

const TEXT_PROPOSAL: &str = "/cosmos.gov.v1beta1.TextProposal";
const PARAMETER_CHANGE_PROPOSAL: &str = "/cosmos.params.v1beta1.ParameterChangeProposal";
const COMMUNITY_POOL_SPEND_PROPOSAL: &str =
    "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal";
const CLIENT_UPDATE_PROPOSAL: &str = "/ibc.core.client.v1.ClientUpdateProposal";
const SOFTWARE_UPGRADE_PROPOSAL: &str = "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal";
const CANCEL_SOFTWARE_UPGRADE_PROPOSAL: &str =
    "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal";

pub fn submit_proposal(
    ctx: &Context,
    msg: &v1::MsgSubmitProposal,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Proposer, msg.proposer.as_str())]),
    );
    output.internal_msgs = msg.messages.iter().map(|any| ctx.internal_msg(any)).collect();

    let mut proposal = Proposal {
        id: 0,
        height: ctx.block.height,
        proposer: msg.proposer.clone(),
        created_at: ctx.block.time,
        status: ProposalStatus::Inactive,
        proposal_type: if msg.messages.is_empty() {
            ProposalType::Text
        } else {
            ProposalType::Messages
        },
        title: msg.title.clone(),
        description: msg.summary.clone(),
        metadata: msg.metadata.clone(),
        deposit: ctx.native_amount(&msg.initial_deposit)?,
        changes: None,
        expedited: msg.expedited,
    };

    for any in &msg.messages {
        match ctx.decoder.registry().decode(any) {
            Ok(CosmosMsg::ExecLegacyContent(exec)) => {
                let Some(content) = exec.content.as_ref().and_then(legacy_content) else {
                    continue;
                };
                proposal.proposal_type = content.proposal_type;
                if proposal.title.is_empty() {
                    proposal.title = content.title;
                }
                if proposal.description.is_empty() {
                    proposal.description = content.description;
                }
                if content.changes.is_some() {
                    proposal.changes = content.changes;
                }
            }
            Ok(CosmosMsg::SoftwareUpgrade(_)) => {
                proposal.proposal_type = ProposalType::SoftwareUpgrade
            }
            Ok(CosmosMsg::CancelUpgrade(_)) => {
                proposal.proposal_type = ProposalType::CancelSoftwareUpgrade
            }
            _ => {}
        }
    }

    if proposal.description.is_empty() {
        proposal.description = describe_messages(&msg.messages);
    }
    if proposal.changes.is_none() && !msg.messages.is_empty() {
        let changes = msg
            .messages
            .iter()
            .map(|any| {
                let nested = ctx.decode_nested(any);
                json!({ "type_url": nested.type_url, "data": nested.data })
            })
            .collect();
        proposal.changes = Some(Value::Array(changes));
    }

    output.entities.proposal = Some(proposal);
    Ok(output)
}

pub fn legacy_submit_proposal(
    ctx: &Context,
    msg: &v1beta1::MsgSubmitProposal,
) -> Result<HandlerOutput, MessageError> {
    let mut output = HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Proposer, msg.proposer.as_str())]),
    );
    let content = msg
        .content
        .as_ref()
        .and_then(legacy_content)
        .unwrap_or_default();
    output.entities.proposal = Some(Proposal {
        id: 0,
        height: ctx.block.height,
        proposer: msg.proposer.clone(),
        created_at: ctx.block.time,
        status: ProposalStatus::Inactive,
        proposal_type: content.proposal_type,
        title: content.title,
        description: content.description,
        metadata: String::new(),
        deposit: ctx.native_amount(&msg.initial_deposit)?,
        changes: content.changes,
        expedited: false,
    });
    Ok(output)
}

pub fn exec_legacy_content(ctx: &Context, msg: &v1::MsgExecLegacyContent) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Authority, msg.authority.as_str())]))
}

/// Shared by plain and weighted votes of both generations.
pub fn vote(ctx: &Context, voter: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Voter, voter)]))
}

pub fn deposit(ctx: &Context, depositor: &str) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Depositor, depositor)]))
}

pub fn cancel_proposal(ctx: &Context, msg: &v1::MsgCancelProposal) -> HandlerOutput {
    HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Proposer, msg.proposer.as_str())]))
}

#[derive(Debug, Default)]
struct LegacyContent {
    proposal_type: ProposalType,
    title: String,
    description: String,
    changes: Option<Value>,
}

fn legacy_content(any: &Any) -> Option<LegacyContent> {
    let bytes = any.value.as_slice();
    let content = match any.type_url.as_str() {
        TEXT_PROPOSAL => v1beta1::TextProposal::decode(bytes).map(|content| LegacyContent {
            proposal_type: ProposalType::Text,
            title: content.title,
            description: content.description,
            changes: None,
        }),
        PARAMETER_CHANGE_PROPOSAL => {
            ParameterChangeProposal::decode(bytes).map(|content| LegacyContent {
                proposal_type: ProposalType::ParamChanged,
                changes: serde_json::to_value(&content.changes).ok(),
                title: content.title,
                description: content.description,
            })
        }
        COMMUNITY_POOL_SPEND_PROPOSAL => {
            CommunityPoolSpendProposal::decode(bytes).map(|content| LegacyContent {
                proposal_type: ProposalType::CommunityPoolSpend,
                changes: Some(json!({
                    "recipient": content.recipient,
                    "amount": content.amount,
                })),
                title: content.title,
                description: content.description,
            })
        }
        CLIENT_UPDATE_PROPOSAL => {
            ClientUpdateProposal::decode(bytes).map(|content| LegacyContent {
                proposal_type: ProposalType::ClientUpdate,
                changes: Some(json!({
                    "subject_client_id": content.subject_client_id,
                    "substitute_client_id": content.substitute_client_id,
                })),
                title: content.title,
                description: content.description,
            })
        }
        SOFTWARE_UPGRADE_PROPOSAL => {
            SoftwareUpgradeProposal::decode(bytes).map(|content| LegacyContent {
                proposal_type: ProposalType::SoftwareUpgrade,
                changes: content
                    .plan
                    .as_ref()
                    .and_then(|plan| serde_json::to_value(plan).ok()),
                title: content.title,
                description: content.description,
            })
        }
        CANCEL_SOFTWARE_UPGRADE_PROPOSAL => {
            CancelSoftwareUpgradeProposal::decode(bytes).map(|content| LegacyContent {
                proposal_type: ProposalType::CancelSoftwareUpgrade,
                title: content.title,
                description: content.description,
                changes: None,
            })
        }
        _ => {
            tracing::debug!(type_url = %any.type_url, "unsupported proposal content");
            return None;
        }
    };
    content
        .map_err(|err| {
            tracing::debug!(type_url = %any.type_url, err = %err, "failed to decode proposal content");
        })
        .ok()
}

/// `"1. /type.Url\n2. /other.Url"`, used when a proposal carries no description.
fn describe_messages(messages: &[Any]) -> String {
    messages
        .iter()
        .enumerate()
        .map(|(index, any)| format!("{}. {}", index + 1, any.type_url))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn any<M: Message>(type_url: &str, msg: &M) -> Any {
        Any {
            type_url: type_url.to_string(),
            value: msg.encode_to_vec(),
        }
    }

    #[test]
    fn describes_messages_with_one_based_index() {
        let messages = vec![
            Any {
                type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
                value: vec![],
            },
            Any {
                type_url: "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade".to_string(),
                value: vec![],
            },
        ];
        assert_eq!(
            describe_messages(&messages),
            "1. /cosmos.bank.v1beta1.MsgSend\n2. /cosmos.upgrade.v1beta1.MsgSoftwareUpgrade"
        );
        assert_eq!(describe_messages(&[]), "");
    }

    #[test]
    fn parameter_change_content() {
        let content = ParameterChangeProposal {
            title: "Raise max validators".to_string(),
            description: "from 100 to 125".to_string(),
            changes: vec![crate::proto::cosmos::params::v1beta1::ParamChange {
                subspace: "staking".to_string(),
                key: "MaxValidators".to_string(),
                value: "125".to_string(),
            }],
        };
        let decoded = legacy_content(&any(PARAMETER_CHANGE_PROPOSAL, &content)).unwrap();
        assert_eq!(decoded.proposal_type, ProposalType::ParamChanged);
        assert_eq!(decoded.title, "Raise max validators");
        assert_eq!(
            decoded.changes,
            Some(json!([{ "subspace": "staking", "key": "MaxValidators", "value": "125" }]))
        );
    }

    #[test]
    fn unsupported_content_is_skipped() {
        let content = Any {
            type_url: "/cosmos.gov.v1beta1.UnknownProposal".to_string(),
            value: vec![1, 2, 3],
        };
        assert!(legacy_content(&content).is_none());
    }
}
