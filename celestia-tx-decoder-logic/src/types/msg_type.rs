use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Message classification stored with every decoded message. Both gov generations share
/// one tag per message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr, EnumIter)]
pub enum MsgType {
    #[default]
    MsgUnknown,

    // bank
    MsgSend,
    MsgMultiSend,

    // staking
    MsgCreateValidator,
    MsgEditValidator,
    MsgDelegate,
    MsgBeginRedelegate,
    MsgUndelegate,
    MsgCancelUnbondingDelegation,

    // distribution
    MsgSetWithdrawAddress,
    MsgWithdrawDelegatorReward,
    MsgWithdrawValidatorCommission,
    MsgFundCommunityPool,

    // slashing
    MsgUnjail,

    // vesting
    MsgCreateVestingAccount,
    MsgCreatePermanentLockedAccount,
    MsgCreatePeriodicVestingAccount,

    // blob
    MsgPayForBlobs,

    // blobstream
    MsgRegisterEVMAddress,

    // feegrant
    MsgGrantAllowance,
    MsgRevokeAllowance,
    MsgPruneAllowances,

    // authz
    MsgGrant,
    MsgExec,
    MsgRevoke,

    // gov
    MsgSubmitProposal,
    MsgExecLegacyContent,
    MsgVote,
    MsgVoteWeighted,
    MsgDeposit,
    MsgCancelProposal,

    // upgrade
    MsgSoftwareUpgrade,
    MsgCancelUpgrade,

    // signal
    MsgSignalVersion,
    MsgTryUpgrade,

    // circuit
    MsgAuthorizeCircuitBreaker,
    MsgTripCircuitBreaker,
    MsgResetCircuitBreaker,

    // ibc client
    MsgCreateClient,
    MsgUpdateClient,
    MsgUpgradeClient,
    MsgSubmitMisbehaviour,

    // ibc connection
    MsgConnectionOpenInit,
    MsgConnectionOpenTry,
    MsgConnectionOpenAck,
    MsgConnectionOpenConfirm,

    // ibc channel
    MsgChannelOpenInit,
    MsgChannelOpenTry,
    MsgChannelOpenAck,
    MsgChannelOpenConfirm,
    MsgChannelCloseInit,
    MsgChannelCloseConfirm,
    MsgRecvPacket,
    MsgTimeout,
    MsgTimeoutOnClose,
    MsgAcknowledgement,

    // ibc transfer
    MsgTransfer,

    // interchain accounts
    MsgRegisterInterchainAccount,
    MsgSendTx,

    // hyperlane core
    MsgCreateMailbox,
    MsgSetMailbox,
    MsgProcessMessage,

    // hyperlane interchain security
    MsgCreateMessageIdMultisigIsm,
    MsgCreateMerkleRootMultisigIsm,
    MsgCreateNoopIsm,
    MsgAnnounceValidator,
    MsgCreateRoutingIsm,
    MsgSetRoutingIsmDomain,
    MsgRemoveRoutingIsmDomain,
    MsgUpdateRoutingIsmOwner,

    // hyperlane post dispatch
    MsgCreateIgp,
    MsgSetIgpOwner,
    MsgSetDestinationGasConfig,
    MsgPayForGas,
    MsgClaim,
    MsgCreateMerkleTreeHook,
    MsgCreateNoopHook,

    // hyperlane warp
    MsgCreateCollateralToken,
    MsgCreateSyntheticToken,
    MsgSetToken,
    MsgEnrollRemoteRouter,
    MsgUnrollRemoteRouter,
    MsgRemoteTransfer,

    // zk ism
    MsgCreateZkExecutionIsm,
    MsgUpdateZkExecutionIsm,
    MsgSubmitMessages,

    // forwarding
    MsgForward,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip() {
        for msg_type in MsgType::iter() {
            let name = msg_type.to_string();
            assert!(name.starts_with("Msg"), "{name}");
            assert_eq!(MsgType::from_str(&name).unwrap(), msg_type);
        }
        assert_eq!(MsgType::MsgRegisterEVMAddress.as_ref(), "MsgRegisterEVMAddress");
    }
}
