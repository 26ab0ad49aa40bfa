use prost_build::Config;
use std::path::Path;

fn compile(
    protos: &[impl AsRef<Path>],
    includes: &[impl AsRef<Path>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::new();
    config
        .compile_well_known_types()
        .type_attribute(".", "#[serde_with::serde_as]\n#[derive(serde::Serialize)]");

    base64_fields(
        &mut config,
        &[
            ".celestia.core.v1.blob.BlobProto.namespace_id",
            ".celestia.core.v1.blob.BlobProto.data",
            ".celestia.core.v1.blob.BlobProto.signer",
            ".celestia.core.v1.blob.BlobTx.tx",
            ".celestia.core.v1.blob.IndexWrapper.tx",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.state_root",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.namespace",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.sequencer_public_key",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.groth16_vkey",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.state_transition_vkey",
            ".celestia.zkism.v1.MsgCreateZkExecutionIsm.state_membership_vkey",
            ".celestia.zkism.v1.MsgUpdateZkExecutionIsm.proof",
            ".celestia.zkism.v1.MsgUpdateZkExecutionIsm.public_values",
            ".celestia.zkism.v1.MsgSubmitMessages.proof",
            ".celestia.zkism.v1.MsgSubmitMessages.public_values",
            ".google.protobuf.Any.value",
            ".ibc.applications.interchain_accounts.v1.InterchainAccountPacketData.data",
            ".ibc.core.channel.v1.Packet.data",
            ".ibc.core.channel.v1.MsgChannelOpenTry.proof_init",
            ".ibc.core.channel.v1.MsgChannelOpenAck.proof_try",
            ".ibc.core.channel.v1.MsgChannelOpenConfirm.proof_ack",
            ".ibc.core.channel.v1.MsgChannelCloseConfirm.proof_init",
            ".ibc.core.channel.v1.MsgRecvPacket.proof_commitment",
            ".ibc.core.channel.v1.MsgTimeout.proof_unreceived",
            ".ibc.core.channel.v1.MsgTimeoutOnClose.proof_unreceived",
            ".ibc.core.channel.v1.MsgTimeoutOnClose.proof_close",
            ".ibc.core.channel.v1.MsgAcknowledgement.acknowledgement",
            ".ibc.core.channel.v1.MsgAcknowledgement.proof_acked",
            ".ibc.core.client.v1.MsgUpgradeClient.proof_upgrade_client",
            ".ibc.core.client.v1.MsgUpgradeClient.proof_upgrade_consensus_state",
            ".ibc.core.connection.v1.Counterparty.prefix",
            ".ibc.core.connection.v1.MsgConnectionOpenTry.proof_init",
            ".ibc.core.connection.v1.MsgConnectionOpenAck.proof_try",
            ".ibc.core.connection.v1.MsgConnectionOpenConfirm.proof_ack",
        ],
    );
    repeated_base64_fields(
        &mut config,
        &[
            ".celestia.blob.v1.MsgPayForBlobs.namespaces",
            ".celestia.blob.v1.MsgPayForBlobs.share_commitments",
            ".cosmos.tx.v1beta1.Tx.signatures",
        ],
    );
    config.compile_protos(protos, includes)?;
    Ok(())
}

fn base64_fields(config: &mut Config, fields: &[&str]) {
    for field in fields {
        config.field_attribute(field, "#[serde_as(as = \"serde_with::base64::Base64\")]");
    }
}

fn repeated_base64_fields(config: &mut Config, fields: &[&str]) {
    for field in fields {
        config.field_attribute(
            field,
            "#[serde_as(as = \"Vec<serde_with::base64::Base64>\")]",
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // We need to rebuild proto lib only if any of proto definitions has been changed.
    println!("cargo:rerun-if-changed=proto/");

    compile(
        &[
            "proto/celestia/blob/v1/tx.proto",
            "proto/celestia/core/v1/blob/blob.proto",
            "proto/celestia/forwarding/v1/tx.proto",
            "proto/celestia/qgb/v1/tx.proto",
            "proto/celestia/signal/v1/tx.proto",
            "proto/celestia/zkism/v1/tx.proto",
            "proto/cosmos/authz/v1beta1/tx.proto",
            "proto/cosmos/bank/v1beta1/tx.proto",
            "proto/cosmos/base/v1beta1/coin.proto",
            "proto/cosmos/circuit/v1/tx.proto",
            "proto/cosmos/distribution/v1beta1/tx.proto",
            "proto/cosmos/feegrant/v1beta1/tx.proto",
            "proto/cosmos/gov/v1/tx.proto",
            "proto/cosmos/gov/v1beta1/tx.proto",
            "proto/cosmos/params/v1beta1/tx.proto",
            "proto/cosmos/slashing/v1beta1/tx.proto",
            "proto/cosmos/staking/v1beta1/tx.proto",
            "proto/cosmos/tx/v1beta1/tx.proto",
            "proto/cosmos/upgrade/v1beta1/tx.proto",
            "proto/cosmos/vesting/v1beta1/tx.proto",
            "proto/hyperlane/core/interchain_security/v1/tx.proto",
            "proto/hyperlane/core/post_dispatch/v1/tx.proto",
            "proto/hyperlane/core/v1/tx.proto",
            "proto/hyperlane/warp/v1/tx.proto",
            "proto/ibc/applications/interchain_accounts/controller/v1/tx.proto",
            "proto/ibc/applications/interchain_accounts/v1/packet.proto",
            "proto/ibc/applications/transfer/v1/tx.proto",
            "proto/ibc/core/channel/v1/tx.proto",
            "proto/ibc/core/client/v1/client.proto",
            "proto/ibc/core/connection/v1/tx.proto",
        ],
        &["proto"],
    )?;
    Ok(())
}
