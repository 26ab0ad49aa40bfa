use crate::{
    proto::{
        celestia::{
            blob::v1 as blob, forwarding::v1 as forwarding, qgb::v1 as qgb, signal::v1 as signal,
            zkism::v1 as zkism,
        },
        cosmos::{
            authz::v1beta1 as authz, bank::v1beta1 as bank, circuit::v1 as circuit,
            distribution::v1beta1 as distribution, feegrant::v1beta1 as feegrant, gov,
            slashing::v1beta1 as slashing, staking::v1beta1 as staking,
            upgrade::v1beta1 as upgrade, vesting::v1beta1 as vesting,
        },
        google::protobuf::Any,
        hyperlane::{
            core::{
                interchain_security::v1 as ism, post_dispatch::v1 as post_dispatch,
                v1 as mailbox,
            },
            warp::v1 as warp,
        },
        ibc::{
            applications::{
                interchain_accounts::controller::v1 as ica_controller, transfer::v1 as transfer,
            },
            core::{channel::v1 as channel, client::v1 as client, connection::v1 as connection},
        },
    },
    types::MsgType,
};
use prost::Message;
use serde_json::{Map, Value};
use std::collections::HashMap;

type DecodeFn = fn(&[u8]) -> Result<CosmosMsg, prost::DecodeError>;

/// Declares the known message set once and derives from it the [`CosmosMsg`] enum, its
/// accessors and the type url lookup table of [`MessageRegistry`].
///
/// `current` messages report their encoded size, `legacy` ones do not.
macro_rules! cosmos_msgs {
    (@reports_size current) => { true };
    (@reports_size legacy) => { false };
    ($( $variant:ident($ty:ty) => $url:literal, $msg_type:ident, $generation:ident; )*) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum CosmosMsg {
            $( $variant($ty), )*
            Unknown(Any),
        }

        impl CosmosMsg {
            pub fn type_url(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $url, )*
                    Self::Unknown(any) => &any.type_url,
                }
            }

            pub fn msg_type(&self) -> MsgType {
                match self {
                    $( Self::$variant(_) => MsgType::$msg_type, )*
                    Self::Unknown(_) => MsgType::MsgUnknown,
                }
            }

            /// Public fields of the message as a json object.
            pub fn fields(&self) -> Map<String, Value> {
                let value = match self {
                    $( Self::$variant(msg) => serde_json::to_value(msg), )*
                    Self::Unknown(any) => serde_json::to_value(any),
                };
                match value {
                    Ok(Value::Object(fields)) => fields,
                    _ => Map::new(),
                }
            }

            pub fn size(&self) -> Option<usize> {
                match self {
                    $(
                        Self::$variant(msg) if cosmos_msgs!(@reports_size $generation) => {
                            Some(msg.encoded_len())
                        }
                    )*
                    _ => None,
                }
            }
        }

        fn known_decoders() -> HashMap<&'static str, DecodeFn> {
            let mut decoders: HashMap<&'static str, DecodeFn> = HashMap::new();
            $(
                decoders.insert($url, |bytes: &[u8]| -> Result<CosmosMsg, prost::DecodeError> {
                    Ok(CosmosMsg::$variant(<$ty as Message>::decode(bytes)?))
                });
            )*
            decoders
        }
    };
}

cosmos_msgs! {
    Send(bank::MsgSend) => "/cosmos.bank.v1beta1.MsgSend", MsgSend, current;
    MultiSend(bank::MsgMultiSend) => "/cosmos.bank.v1beta1.MsgMultiSend", MsgMultiSend, current;

    CreateValidator(staking::MsgCreateValidator) => "/cosmos.staking.v1beta1.MsgCreateValidator", MsgCreateValidator, current;
    EditValidator(staking::MsgEditValidator) => "/cosmos.staking.v1beta1.MsgEditValidator", MsgEditValidator, current;
    Delegate(staking::MsgDelegate) => "/cosmos.staking.v1beta1.MsgDelegate", MsgDelegate, current;
    BeginRedelegate(staking::MsgBeginRedelegate) => "/cosmos.staking.v1beta1.MsgBeginRedelegate", MsgBeginRedelegate, current;
    Undelegate(staking::MsgUndelegate) => "/cosmos.staking.v1beta1.MsgUndelegate", MsgUndelegate, current;
    CancelUnbondingDelegation(staking::MsgCancelUnbondingDelegation) => "/cosmos.staking.v1beta1.MsgCancelUnbondingDelegation", MsgCancelUnbondingDelegation, current;

    SetWithdrawAddress(distribution::MsgSetWithdrawAddress) => "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress", MsgSetWithdrawAddress, current;
    WithdrawDelegatorReward(distribution::MsgWithdrawDelegatorReward) => "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward", MsgWithdrawDelegatorReward, current;
    WithdrawValidatorCommission(distribution::MsgWithdrawValidatorCommission) => "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission", MsgWithdrawValidatorCommission, current;
    FundCommunityPool(distribution::MsgFundCommunityPool) => "/cosmos.distribution.v1beta1.MsgFundCommunityPool", MsgFundCommunityPool, current;

    Unjail(slashing::MsgUnjail) => "/cosmos.slashing.v1beta1.MsgUnjail", MsgUnjail, current;

    CreateVestingAccount(vesting::MsgCreateVestingAccount) => "/cosmos.vesting.v1beta1.MsgCreateVestingAccount", MsgCreateVestingAccount, current;
    CreatePermanentLockedAccount(vesting::MsgCreatePermanentLockedAccount) => "/cosmos.vesting.v1beta1.MsgCreatePermanentLockedAccount", MsgCreatePermanentLockedAccount, current;
    CreatePeriodicVestingAccount(vesting::MsgCreatePeriodicVestingAccount) => "/cosmos.vesting.v1beta1.MsgCreatePeriodicVestingAccount", MsgCreatePeriodicVestingAccount, current;

    PayForBlobs(blob::MsgPayForBlobs) => "/celestia.blob.v1.MsgPayForBlobs", MsgPayForBlobs, current;
    RegisterEvmAddress(qgb::MsgRegisterEvmAddress) => "/celestia.qgb.v1.MsgRegisterEVMAddress", MsgRegisterEVMAddress, current;

    GrantAllowance(feegrant::MsgGrantAllowance) => "/cosmos.feegrant.v1beta1.MsgGrantAllowance", MsgGrantAllowance, current;
    RevokeAllowance(feegrant::MsgRevokeAllowance) => "/cosmos.feegrant.v1beta1.MsgRevokeAllowance", MsgRevokeAllowance, current;
    PruneAllowances(feegrant::MsgPruneAllowances) => "/cosmos.feegrant.v1beta1.MsgPruneAllowances", MsgPruneAllowances, current;

    Grant(authz::MsgGrant) => "/cosmos.authz.v1beta1.MsgGrant", MsgGrant, current;
    Exec(authz::MsgExec) => "/cosmos.authz.v1beta1.MsgExec", MsgExec, current;
    Revoke(authz::MsgRevoke) => "/cosmos.authz.v1beta1.MsgRevoke", MsgRevoke, current;

    SubmitProposal(gov::v1::MsgSubmitProposal) => "/cosmos.gov.v1.MsgSubmitProposal", MsgSubmitProposal, current;
    ExecLegacyContent(gov::v1::MsgExecLegacyContent) => "/cosmos.gov.v1.MsgExecLegacyContent", MsgExecLegacyContent, current;
    Vote(gov::v1::MsgVote) => "/cosmos.gov.v1.MsgVote", MsgVote, current;
    VoteWeighted(gov::v1::MsgVoteWeighted) => "/cosmos.gov.v1.MsgVoteWeighted", MsgVoteWeighted, current;
    Deposit(gov::v1::MsgDeposit) => "/cosmos.gov.v1.MsgDeposit", MsgDeposit, current;
    CancelProposal(gov::v1::MsgCancelProposal) => "/cosmos.gov.v1.MsgCancelProposal", MsgCancelProposal, current;
    LegacySubmitProposal(gov::v1beta1::MsgSubmitProposal) => "/cosmos.gov.v1beta1.MsgSubmitProposal", MsgSubmitProposal, legacy;
    LegacyVote(gov::v1beta1::MsgVote) => "/cosmos.gov.v1beta1.MsgVote", MsgVote, legacy;
    LegacyVoteWeighted(gov::v1beta1::MsgVoteWeighted) => "/cosmos.gov.v1beta1.MsgVoteWeighted", MsgVoteWeighted, legacy;
    LegacyDeposit(gov::v1beta1::MsgDeposit) => "/cosmos.gov.v1beta1.MsgDeposit", MsgDeposit, legacy;

    SoftwareUpgrade(upgrade::MsgSoftwareUpgrade) => "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade", MsgSoftwareUpgrade, current;
    CancelUpgrade(upgrade::MsgCancelUpgrade) => "/cosmos.upgrade.v1beta1.MsgCancelUpgrade", MsgCancelUpgrade, current;
    SignalVersion(signal::MsgSignalVersion) => "/celestia.signal.v1.MsgSignalVersion", MsgSignalVersion, current;
    TryUpgrade(signal::MsgTryUpgrade) => "/celestia.signal.v1.MsgTryUpgrade", MsgTryUpgrade, current;

    AuthorizeCircuitBreaker(circuit::MsgAuthorizeCircuitBreaker) => "/cosmos.circuit.v1.MsgAuthorizeCircuitBreaker", MsgAuthorizeCircuitBreaker, current;
    TripCircuitBreaker(circuit::MsgTripCircuitBreaker) => "/cosmos.circuit.v1.MsgTripCircuitBreaker", MsgTripCircuitBreaker, current;
    ResetCircuitBreaker(circuit::MsgResetCircuitBreaker) => "/cosmos.circuit.v1.MsgResetCircuitBreaker", MsgResetCircuitBreaker, current;

    CreateClient(client::MsgCreateClient) => "/ibc.core.client.v1.MsgCreateClient", MsgCreateClient, current;
    UpdateClient(client::MsgUpdateClient) => "/ibc.core.client.v1.MsgUpdateClient", MsgUpdateClient, current;
    UpgradeClient(client::MsgUpgradeClient) => "/ibc.core.client.v1.MsgUpgradeClient", MsgUpgradeClient, current;
    SubmitMisbehaviour(client::MsgSubmitMisbehaviour) => "/ibc.core.client.v1.MsgSubmitMisbehaviour", MsgSubmitMisbehaviour, current;

    ConnectionOpenInit(connection::MsgConnectionOpenInit) => "/ibc.core.connection.v1.MsgConnectionOpenInit", MsgConnectionOpenInit, current;
    ConnectionOpenTry(connection::MsgConnectionOpenTry) => "/ibc.core.connection.v1.MsgConnectionOpenTry", MsgConnectionOpenTry, current;
    ConnectionOpenAck(connection::MsgConnectionOpenAck) => "/ibc.core.connection.v1.MsgConnectionOpenAck", MsgConnectionOpenAck, current;
    ConnectionOpenConfirm(connection::MsgConnectionOpenConfirm) => "/ibc.core.connection.v1.MsgConnectionOpenConfirm", MsgConnectionOpenConfirm, current;

    ChannelOpenInit(channel::MsgChannelOpenInit) => "/ibc.core.channel.v1.MsgChannelOpenInit", MsgChannelOpenInit, current;
    ChannelOpenTry(channel::MsgChannelOpenTry) => "/ibc.core.channel.v1.MsgChannelOpenTry", MsgChannelOpenTry, current;
    ChannelOpenAck(channel::MsgChannelOpenAck) => "/ibc.core.channel.v1.MsgChannelOpenAck", MsgChannelOpenAck, current;
    ChannelOpenConfirm(channel::MsgChannelOpenConfirm) => "/ibc.core.channel.v1.MsgChannelOpenConfirm", MsgChannelOpenConfirm, current;
    ChannelCloseInit(channel::MsgChannelCloseInit) => "/ibc.core.channel.v1.MsgChannelCloseInit", MsgChannelCloseInit, current;
    ChannelCloseConfirm(channel::MsgChannelCloseConfirm) => "/ibc.core.channel.v1.MsgChannelCloseConfirm", MsgChannelCloseConfirm, current;
    RecvPacket(channel::MsgRecvPacket) => "/ibc.core.channel.v1.MsgRecvPacket", MsgRecvPacket, current;
    Timeout(channel::MsgTimeout) => "/ibc.core.channel.v1.MsgTimeout", MsgTimeout, current;
    TimeoutOnClose(channel::MsgTimeoutOnClose) => "/ibc.core.channel.v1.MsgTimeoutOnClose", MsgTimeoutOnClose, current;
    Acknowledgement(channel::MsgAcknowledgement) => "/ibc.core.channel.v1.MsgAcknowledgement", MsgAcknowledgement, current;

    Transfer(transfer::MsgTransfer) => "/ibc.applications.transfer.v1.MsgTransfer", MsgTransfer, current;
    RegisterInterchainAccount(ica_controller::MsgRegisterInterchainAccount) => "/ibc.applications.interchain_accounts.controller.v1.MsgRegisterInterchainAccount", MsgRegisterInterchainAccount, current;
    SendTx(ica_controller::MsgSendTx) => "/ibc.applications.interchain_accounts.controller.v1.MsgSendTx", MsgSendTx, current;

    CreateMailbox(mailbox::MsgCreateMailbox) => "/hyperlane.core.v1.MsgCreateMailbox", MsgCreateMailbox, current;
    SetMailbox(mailbox::MsgSetMailbox) => "/hyperlane.core.v1.MsgSetMailbox", MsgSetMailbox, current;
    ProcessMessage(mailbox::MsgProcessMessage) => "/hyperlane.core.v1.MsgProcessMessage", MsgProcessMessage, current;

    CreateMessageIdMultisigIsm(ism::MsgCreateMessageIdMultisigIsm) => "/hyperlane.core.interchain_security.v1.MsgCreateMessageIdMultisigIsm", MsgCreateMessageIdMultisigIsm, current;
    CreateMerkleRootMultisigIsm(ism::MsgCreateMerkleRootMultisigIsm) => "/hyperlane.core.interchain_security.v1.MsgCreateMerkleRootMultisigIsm", MsgCreateMerkleRootMultisigIsm, current;
    CreateNoopIsm(ism::MsgCreateNoopIsm) => "/hyperlane.core.interchain_security.v1.MsgCreateNoopIsm", MsgCreateNoopIsm, current;
    AnnounceValidator(ism::MsgAnnounceValidator) => "/hyperlane.core.interchain_security.v1.MsgAnnounceValidator", MsgAnnounceValidator, current;
    CreateRoutingIsm(ism::MsgCreateRoutingIsm) => "/hyperlane.core.interchain_security.v1.MsgCreateRoutingIsm", MsgCreateRoutingIsm, current;
    SetRoutingIsmDomain(ism::MsgSetRoutingIsmDomain) => "/hyperlane.core.interchain_security.v1.MsgSetRoutingIsmDomain", MsgSetRoutingIsmDomain, current;
    RemoveRoutingIsmDomain(ism::MsgRemoveRoutingIsmDomain) => "/hyperlane.core.interchain_security.v1.MsgRemoveRoutingIsmDomain", MsgRemoveRoutingIsmDomain, current;
    UpdateRoutingIsmOwner(ism::MsgUpdateRoutingIsmOwner) => "/hyperlane.core.interchain_security.v1.MsgUpdateRoutingIsmOwner", MsgUpdateRoutingIsmOwner, current;

    CreateIgp(post_dispatch::MsgCreateIgp) => "/hyperlane.core.post_dispatch.v1.MsgCreateIgp", MsgCreateIgp, current;
    SetIgpOwner(post_dispatch::MsgSetIgpOwner) => "/hyperlane.core.post_dispatch.v1.MsgSetIgpOwner", MsgSetIgpOwner, current;
    SetDestinationGasConfig(post_dispatch::MsgSetDestinationGasConfig) => "/hyperlane.core.post_dispatch.v1.MsgSetDestinationGasConfig", MsgSetDestinationGasConfig, current;
    PayForGas(post_dispatch::MsgPayForGas) => "/hyperlane.core.post_dispatch.v1.MsgPayForGas", MsgPayForGas, current;
    Claim(post_dispatch::MsgClaim) => "/hyperlane.core.post_dispatch.v1.MsgClaim", MsgClaim, current;
    CreateMerkleTreeHook(post_dispatch::MsgCreateMerkleTreeHook) => "/hyperlane.core.post_dispatch.v1.MsgCreateMerkleTreeHook", MsgCreateMerkleTreeHook, current;
    CreateNoopHook(post_dispatch::MsgCreateNoopHook) => "/hyperlane.core.post_dispatch.v1.MsgCreateNoopHook", MsgCreateNoopHook, current;

    CreateCollateralToken(warp::MsgCreateCollateralToken) => "/hyperlane.warp.v1.MsgCreateCollateralToken", MsgCreateCollateralToken, current;
    CreateSyntheticToken(warp::MsgCreateSyntheticToken) => "/hyperlane.warp.v1.MsgCreateSyntheticToken", MsgCreateSyntheticToken, current;
    SetToken(warp::MsgSetToken) => "/hyperlane.warp.v1.MsgSetToken", MsgSetToken, current;
    EnrollRemoteRouter(warp::MsgEnrollRemoteRouter) => "/hyperlane.warp.v1.MsgEnrollRemoteRouter", MsgEnrollRemoteRouter, current;
    UnrollRemoteRouter(warp::MsgUnrollRemoteRouter) => "/hyperlane.warp.v1.MsgUnrollRemoteRouter", MsgUnrollRemoteRouter, current;
    RemoteTransfer(warp::MsgRemoteTransfer) => "/hyperlane.warp.v1.MsgRemoteTransfer", MsgRemoteTransfer, current;

    CreateZkExecutionIsm(zkism::MsgCreateZkExecutionIsm) => "/celestia.zkism.v1.MsgCreateZKExecutionISM", MsgCreateZkExecutionIsm, current;
    UpdateZkExecutionIsm(zkism::MsgUpdateZkExecutionIsm) => "/celestia.zkism.v1.MsgUpdateZKExecutionISM", MsgUpdateZkExecutionIsm, current;
    SubmitMessages(zkism::MsgSubmitMessages) => "/celestia.zkism.v1.MsgSubmitMessages", MsgSubmitMessages, current;

    Forward(forwarding::MsgForward) => "/celestia.forwarding.v1.MsgForward", MsgForward, current;
}

impl CosmosMsg {
    /// Addresses required to sign the message, in field order.
    pub fn signers(&self) -> Vec<&str> {
        match self {
            Self::Send(msg) => vec![msg.from_address.as_str()],
            Self::MultiSend(msg) => msg.inputs.iter().map(|input| input.address.as_str()).collect(),
            Self::CreateValidator(msg) if msg.delegator_address.is_empty() => {
                vec![msg.validator_address.as_str()]
            }
            Self::CreateValidator(msg) => vec![msg.delegator_address.as_str()],
            Self::EditValidator(msg) => vec![msg.validator_address.as_str()],
            Self::Delegate(msg) => vec![msg.delegator_address.as_str()],
            Self::BeginRedelegate(msg) => vec![msg.delegator_address.as_str()],
            Self::Undelegate(msg) => vec![msg.delegator_address.as_str()],
            Self::CancelUnbondingDelegation(msg) => vec![msg.delegator_address.as_str()],
            Self::SetWithdrawAddress(msg) => vec![msg.delegator_address.as_str()],
            Self::WithdrawDelegatorReward(msg) => vec![msg.delegator_address.as_str()],
            Self::WithdrawValidatorCommission(msg) => vec![msg.validator_address.as_str()],
            Self::FundCommunityPool(msg) => vec![msg.depositor.as_str()],
            Self::Unjail(msg) => vec![msg.validator_addr.as_str()],
            Self::CreateVestingAccount(msg) => vec![msg.from_address.as_str()],
            Self::CreatePermanentLockedAccount(msg) => vec![msg.from_address.as_str()],
            Self::CreatePeriodicVestingAccount(msg) => vec![msg.from_address.as_str()],
            Self::PayForBlobs(msg) => vec![msg.signer.as_str()],
            Self::RegisterEvmAddress(msg) => vec![msg.validator_address.as_str()],
            Self::GrantAllowance(msg) => vec![msg.granter.as_str()],
            Self::RevokeAllowance(msg) => vec![msg.granter.as_str()],
            Self::PruneAllowances(msg) => vec![msg.pruner.as_str()],
            Self::Grant(msg) => vec![msg.granter.as_str()],
            Self::Exec(msg) => vec![msg.grantee.as_str()],
            Self::Revoke(msg) => vec![msg.granter.as_str()],
            Self::SubmitProposal(msg) => vec![msg.proposer.as_str()],
            Self::ExecLegacyContent(msg) => vec![msg.authority.as_str()],
            Self::Vote(msg) => vec![msg.voter.as_str()],
            Self::VoteWeighted(msg) => vec![msg.voter.as_str()],
            Self::Deposit(msg) => vec![msg.depositor.as_str()],
            Self::CancelProposal(msg) => vec![msg.proposer.as_str()],
            Self::LegacySubmitProposal(msg) => vec![msg.proposer.as_str()],
            Self::LegacyVote(msg) => vec![msg.voter.as_str()],
            Self::LegacyVoteWeighted(msg) => vec![msg.voter.as_str()],
            Self::LegacyDeposit(msg) => vec![msg.depositor.as_str()],
            Self::SoftwareUpgrade(msg) => vec![msg.authority.as_str()],
            Self::CancelUpgrade(msg) => vec![msg.authority.as_str()],
            Self::SignalVersion(msg) => vec![msg.validator_address.as_str()],
            Self::TryUpgrade(msg) => vec![msg.signer.as_str()],
            Self::AuthorizeCircuitBreaker(msg) => vec![msg.granter.as_str()],
            Self::TripCircuitBreaker(msg) => vec![msg.authority.as_str()],
            Self::ResetCircuitBreaker(msg) => vec![msg.authority.as_str()],
            Self::CreateClient(msg) => vec![msg.signer.as_str()],
            Self::UpdateClient(msg) => vec![msg.signer.as_str()],
            Self::UpgradeClient(msg) => vec![msg.signer.as_str()],
            Self::SubmitMisbehaviour(msg) => vec![msg.signer.as_str()],
            Self::ConnectionOpenInit(msg) => vec![msg.signer.as_str()],
            Self::ConnectionOpenTry(msg) => vec![msg.signer.as_str()],
            Self::ConnectionOpenAck(msg) => vec![msg.signer.as_str()],
            Self::ConnectionOpenConfirm(msg) => vec![msg.signer.as_str()],
            Self::ChannelOpenInit(msg) => vec![msg.signer.as_str()],
            Self::ChannelOpenTry(msg) => vec![msg.signer.as_str()],
            Self::ChannelOpenAck(msg) => vec![msg.signer.as_str()],
            Self::ChannelOpenConfirm(msg) => vec![msg.signer.as_str()],
            Self::ChannelCloseInit(msg) => vec![msg.signer.as_str()],
            Self::ChannelCloseConfirm(msg) => vec![msg.signer.as_str()],
            Self::RecvPacket(msg) => vec![msg.signer.as_str()],
            Self::Timeout(msg) => vec![msg.signer.as_str()],
            Self::TimeoutOnClose(msg) => vec![msg.signer.as_str()],
            Self::Acknowledgement(msg) => vec![msg.signer.as_str()],
            Self::Transfer(msg) => vec![msg.sender.as_str()],
            Self::RegisterInterchainAccount(msg) => vec![msg.owner.as_str()],
            Self::SendTx(msg) => vec![msg.owner.as_str()],
            Self::CreateMailbox(msg) => vec![msg.owner.as_str()],
            Self::SetMailbox(msg) => vec![msg.owner.as_str()],
            Self::ProcessMessage(msg) => vec![msg.relayer.as_str()],
            Self::CreateMessageIdMultisigIsm(msg) => vec![msg.creator.as_str()],
            Self::CreateMerkleRootMultisigIsm(msg) => vec![msg.creator.as_str()],
            Self::CreateNoopIsm(msg) => vec![msg.creator.as_str()],
            Self::AnnounceValidator(msg) => vec![msg.creator.as_str()],
            Self::CreateRoutingIsm(msg) => vec![msg.creator.as_str()],
            Self::SetRoutingIsmDomain(msg) => vec![msg.owner.as_str()],
            Self::RemoveRoutingIsmDomain(msg) => vec![msg.owner.as_str()],
            Self::UpdateRoutingIsmOwner(msg) => vec![msg.owner.as_str()],
            Self::CreateIgp(msg) => vec![msg.owner.as_str()],
            Self::SetIgpOwner(msg) => vec![msg.owner.as_str()],
            Self::SetDestinationGasConfig(msg) => vec![msg.owner.as_str()],
            Self::PayForGas(msg) => vec![msg.sender.as_str()],
            Self::Claim(msg) => vec![msg.sender.as_str()],
            Self::CreateMerkleTreeHook(msg) => vec![msg.owner.as_str()],
            Self::CreateNoopHook(msg) => vec![msg.owner.as_str()],
            Self::CreateCollateralToken(msg) => vec![msg.owner.as_str()],
            Self::CreateSyntheticToken(msg) => vec![msg.owner.as_str()],
            Self::SetToken(msg) => vec![msg.owner.as_str()],
            Self::EnrollRemoteRouter(msg) => vec![msg.owner.as_str()],
            Self::UnrollRemoteRouter(msg) => vec![msg.owner.as_str()],
            Self::RemoteTransfer(msg) => vec![msg.sender.as_str()],
            Self::CreateZkExecutionIsm(msg) => vec![msg.creator.as_str()],
            Self::UpdateZkExecutionIsm(msg) => vec![msg.signer.as_str()],
            Self::SubmitMessages(msg) => vec![msg.signer.as_str()],
            Self::Forward(msg) => vec![msg.signer.as_str()],
            Self::Unknown(_) => vec![],
        }
    }
}

/// Immutable type url to decoder lookup, built once per [`Decoder`](super::Decoder).
pub struct MessageRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self {
            decoders: known_decoders(),
        }
    }

    pub fn is_known(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }

    /// Decodes a known message. Unregistered type urls become [`CosmosMsg::Unknown`].
    pub fn decode(&self, any: &Any) -> Result<CosmosMsg, prost::DecodeError> {
        match self.decoders.get(any.type_url.as_str()) {
            Some(decode) => decode(&any.value),
            None => Ok(CosmosMsg::Unknown(any.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
