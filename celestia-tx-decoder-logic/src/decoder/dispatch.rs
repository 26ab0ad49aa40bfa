use super::{
    handlers::{
        authz, bank, blob, circuit, distribution, feegrant, forwarding, gov, hyperlane, ibc,
        ica, staking, upgrade, vesting, zkism, Context, HandlerOutput,
    },
    registry::CosmosMsg,
};
use crate::error::MessageError;

/// Runs the handler of `msg`. Unknown messages produce an empty output.
pub(super) fn dispatch(ctx: &Context, msg: &CosmosMsg) -> Result<HandlerOutput, MessageError> {
    let output = match msg {
        CosmosMsg::Send(msg) => bank::send(ctx, msg),
        CosmosMsg::MultiSend(msg) => bank::multi_send(ctx, msg),

        CosmosMsg::CreateValidator(msg) => staking::create_validator(ctx, msg)?,
        CosmosMsg::EditValidator(msg) => staking::edit_validator(ctx, msg)?,
        CosmosMsg::Delegate(msg) => staking::delegate(ctx, msg),
        CosmosMsg::BeginRedelegate(msg) => staking::begin_redelegate(ctx, msg),
        CosmosMsg::Undelegate(msg) => staking::undelegate(ctx, msg),
        CosmosMsg::CancelUnbondingDelegation(msg) => staking::cancel_unbonding_delegation(ctx, msg),
        CosmosMsg::Unjail(msg) => staking::unjail(ctx, msg),

        CosmosMsg::SetWithdrawAddress(msg) => distribution::set_withdraw_address(ctx, msg),
        CosmosMsg::WithdrawDelegatorReward(msg) => {
            distribution::withdraw_delegator_reward(ctx, msg)
        }
        CosmosMsg::WithdrawValidatorCommission(msg) => {
            distribution::withdraw_validator_commission(ctx, msg)
        }
        CosmosMsg::FundCommunityPool(msg) => distribution::fund_community_pool(ctx, msg),

        CosmosMsg::CreateVestingAccount(msg) => vesting::create_vesting_account(ctx, msg)?,
        CosmosMsg::CreatePermanentLockedAccount(msg) => {
            vesting::create_permanent_locked_account(ctx, msg)?
        }
        CosmosMsg::CreatePeriodicVestingAccount(msg) => {
            vesting::create_periodic_vesting_account(ctx, msg)?
        }

        CosmosMsg::PayForBlobs(msg) => blob::pay_for_blobs(ctx, msg)?,
        CosmosMsg::RegisterEvmAddress(msg) => blob::register_evm_address(ctx, msg),

        CosmosMsg::GrantAllowance(msg) => feegrant::grant_allowance(ctx, msg)?,
        CosmosMsg::RevokeAllowance(msg) => feegrant::revoke_allowance(ctx, msg),
        CosmosMsg::PruneAllowances(msg) => feegrant::prune_allowances(ctx, msg),

        CosmosMsg::Grant(msg) => authz::grant(ctx, msg)?,
        CosmosMsg::Exec(msg) => authz::exec(ctx, msg),
        CosmosMsg::Revoke(msg) => authz::revoke(ctx, msg),

        CosmosMsg::SubmitProposal(msg) => gov::submit_proposal(ctx, msg)?,
        CosmosMsg::LegacySubmitProposal(msg) => gov::legacy_submit_proposal(ctx, msg)?,
        CosmosMsg::ExecLegacyContent(msg) => gov::exec_legacy_content(ctx, msg),
        CosmosMsg::Vote(msg) => gov::vote(ctx, &msg.voter),
        CosmosMsg::LegacyVote(msg) => gov::vote(ctx, &msg.voter),
        CosmosMsg::VoteWeighted(msg) => gov::vote(ctx, &msg.voter),
        CosmosMsg::LegacyVoteWeighted(msg) => gov::vote(ctx, &msg.voter),
        CosmosMsg::Deposit(msg) => gov::deposit(ctx, &msg.depositor),
        CosmosMsg::LegacyDeposit(msg) => gov::deposit(ctx, &msg.depositor),
        CosmosMsg::CancelProposal(msg) => gov::cancel_proposal(ctx, msg),

        CosmosMsg::SoftwareUpgrade(msg) => upgrade::software_upgrade(ctx, msg),
        CosmosMsg::CancelUpgrade(msg) => upgrade::cancel_upgrade(ctx, msg),
        CosmosMsg::SignalVersion(msg) => upgrade::signal_version(ctx, msg),
        CosmosMsg::TryUpgrade(msg) => upgrade::try_upgrade(ctx, msg),

        CosmosMsg::AuthorizeCircuitBreaker(msg) => circuit::authorize_circuit_breaker(ctx, msg),
        CosmosMsg::TripCircuitBreaker(msg) => circuit::trip_circuit_breaker(ctx, msg),
        CosmosMsg::ResetCircuitBreaker(msg) => circuit::reset_circuit_breaker(ctx, msg),

        CosmosMsg::CreateClient(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::UpdateClient(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::UpgradeClient(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::SubmitMisbehaviour(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ConnectionOpenInit(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ConnectionOpenTry(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ConnectionOpenAck(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ConnectionOpenConfirm(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelOpenInit(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelOpenTry(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelOpenAck(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelOpenConfirm(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelCloseInit(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::ChannelCloseConfirm(msg) => ibc::signer(ctx, &msg.signer),
        CosmosMsg::RecvPacket(msg) => ibc::recv_packet(ctx, msg),
        CosmosMsg::Timeout(msg) => ibc::timeout(ctx, msg),
        CosmosMsg::TimeoutOnClose(msg) => ibc::timeout_on_close(ctx, msg),
        CosmosMsg::Acknowledgement(msg) => ibc::acknowledgement(ctx, msg),
        CosmosMsg::Transfer(msg) => ibc::transfer(ctx, msg),
        CosmosMsg::RegisterInterchainAccount(msg) => ica::register_interchain_account(ctx, msg),
        CosmosMsg::SendTx(msg) => ica::send_tx(ctx, msg),

        CosmosMsg::CreateMailbox(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::SetMailbox(msg) => hyperlane::owner_transfer(ctx, &msg.owner, &msg.new_owner),
        CosmosMsg::ProcessMessage(msg) => hyperlane::process_message(ctx, msg),
        CosmosMsg::CreateMessageIdMultisigIsm(msg) => hyperlane::creator(ctx, &msg.creator),
        CosmosMsg::CreateMerkleRootMultisigIsm(msg) => hyperlane::creator(ctx, &msg.creator),
        CosmosMsg::CreateNoopIsm(msg) => hyperlane::creator(ctx, &msg.creator),
        CosmosMsg::AnnounceValidator(msg) => hyperlane::creator(ctx, &msg.creator),
        CosmosMsg::CreateRoutingIsm(msg) => hyperlane::creator(ctx, &msg.creator),
        CosmosMsg::SetRoutingIsmDomain(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::RemoveRoutingIsmDomain(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::UpdateRoutingIsmOwner(msg) => {
            hyperlane::owner_transfer(ctx, &msg.owner, &msg.new_owner)
        }
        CosmosMsg::CreateIgp(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::SetIgpOwner(msg) => hyperlane::owner_transfer(ctx, &msg.owner, &msg.new_owner),
        CosmosMsg::SetDestinationGasConfig(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::PayForGas(msg) => hyperlane::sender(ctx, &msg.sender),
        CosmosMsg::Claim(msg) => hyperlane::sender(ctx, &msg.sender),
        CosmosMsg::CreateMerkleTreeHook(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::CreateNoopHook(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::CreateCollateralToken(msg) => hyperlane::create_collateral_token(ctx, msg),
        CosmosMsg::CreateSyntheticToken(msg) => hyperlane::create_synthetic_token(ctx, msg),
        CosmosMsg::SetToken(msg) => hyperlane::owner_transfer(ctx, &msg.owner, &msg.new_owner),
        CosmosMsg::EnrollRemoteRouter(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::UnrollRemoteRouter(msg) => hyperlane::owner(ctx, &msg.owner),
        CosmosMsg::RemoteTransfer(msg) => hyperlane::sender(ctx, &msg.sender),

        CosmosMsg::CreateZkExecutionIsm(msg) => zkism::create_zk_execution_ism(ctx, msg),
        CosmosMsg::UpdateZkExecutionIsm(msg) => zkism::update_zk_execution_ism(ctx, msg),
        CosmosMsg::SubmitMessages(msg) => zkism::submit_messages(ctx, msg),

        CosmosMsg::Forward(msg) => forwarding::forward(ctx, msg),

        CosmosMsg::Unknown(_) => HandlerOutput::default(),
    };
    Ok(output)
}
