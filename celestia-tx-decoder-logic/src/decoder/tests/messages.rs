use super::*;
use crate::{
    error::{MessageDecodeError, MessageError},
    proto::{
        celestia::{
            blob::v1::MsgPayForBlobs, forwarding::v1::MsgForward, qgb::v1::MsgRegisterEvmAddress,
            signal::v1 as signal, zkism::v1::MsgCreateZkExecutionIsm,
        },
        cosmos::{
            bank::v1beta1 as bank, circuit::v1::MsgAuthorizeCircuitBreaker,
            distribution::v1beta1 as distribution, gov::v1 as gov, slashing::v1beta1::MsgUnjail,
            staking::v1beta1 as staking, upgrade::v1beta1 as upgrade, vesting::v1beta1 as vesting,
        },
        hyperlane::{core::post_dispatch::v1::MsgPayForGas, core::v1::MsgSetMailbox, warp::v1 as warp},
        ibc::applications::transfer::v1::MsgTransfer,
    },
    types::{
        tokens::{Token, TokenType},
        upgrades::{SignalVersion, Upgrade, UpgradeKind},
        validators::Validator,
        vesting::{VestingPeriod, VestingType},
        Balance, MsgType,
    },
};
use bigdecimal::BigDecimal;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::str::FromStr;

fn namespace(seed: u8) -> Vec<u8> {
    [&[0_u8; 19][..], &[seed; 7][..]].concat()
}

#[test]
fn send() {
    let msg = bank::MsgSend {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        amount: coins("100", "utia"),
    };
    let decoded = decode(CosmosMsg::Send(msg.clone()));

    assert_eq!(decoded.msg_type, MsgType::MsgSend);
    assert_eq!(decoded.type_url, "/cosmos.bank.v1beta1.MsgSend");
    assert_eq!(decoded.height, HEIGHT);
    assert_eq!(decoded.position, 0);
    assert_eq!(
        roles(&decoded),
        vec![(AddressRole::FromAddress, ALICE), (AddressRole::ToAddress, BOB)]
    );
    assert_eq!(
        hex::encode(&decoded.addresses[0].address.hash),
        "946342c7732f062237b673f526f2674c7d0bff98"
    );
    assert_eq!(
        hex::encode(&decoded.addresses[1].address.hash),
        "641863cfc93b6f4e3730002e81cb8b2727e10068"
    );
    for address in &decoded.addresses {
        assert_eq!(address.address.height, HEIGHT);
        assert_eq!(address.address.last_height, HEIGHT);
        assert_eq!(address.address.balance, Balance::empty("utia"));
    }
    assert_eq!(decoded.size, Some(prost::Message::encoded_len(&msg)));
    assert_eq!(decoded.blobs_size, 0);
    assert_eq!(decoded.data["from_address"], json!(ALICE));
    assert_eq!(
        decoded.data["amount"],
        json!([{ "denom": "utia", "amount": "100" }])
    );
    assert!(decoded.entities.is_empty());
}

#[test]
fn multi_send_inputs_precede_outputs() {
    let msg = bank::MsgMultiSend {
        inputs: vec![
            bank::Input {
                address: ALICE.to_string(),
                coins: coins("50", "utia"),
            },
            bank::Input {
                address: BOB.to_string(),
                coins: coins("50", "utia"),
            },
        ],
        outputs: vec![bank::Output {
            address: CAROL.to_string(),
            coins: coins("100", "utia"),
        }],
    };
    let decoded = decode(CosmosMsg::MultiSend(msg));
    assert_eq!(
        roles(&decoded),
        vec![
            (AddressRole::Input, ALICE),
            (AddressRole::Input, BOB),
            (AddressRole::Output, CAROL),
        ]
    );
}

#[rstest]
#[case::delegate(
    CosmosMsg::Delegate(staking::MsgDelegate {
        delegator_address: ALICE.to_string(),
        validator_address: VALIDATOR.to_string(),
        amount: None,
    }),
    vec![(AddressRole::Delegator, ALICE), (AddressRole::Validator, VALIDATOR)]
)]
#[case::begin_redelegate(
    CosmosMsg::BeginRedelegate(staking::MsgBeginRedelegate {
        delegator_address: ALICE.to_string(),
        validator_src_address: VALIDATOR.to_string(),
        validator_dst_address: OTHER_VALIDATOR.to_string(),
        amount: None,
    }),
    vec![
        (AddressRole::Delegator, ALICE),
        (AddressRole::ValidatorSrc, VALIDATOR),
        (AddressRole::ValidatorDst, OTHER_VALIDATOR),
    ]
)]
#[case::set_withdraw_address(
    CosmosMsg::SetWithdrawAddress(distribution::MsgSetWithdrawAddress {
        delegator_address: ALICE.to_string(),
        withdraw_address: BOB.to_string(),
    }),
    vec![(AddressRole::Delegator, ALICE), (AddressRole::WithdrawAddress, BOB)]
)]
#[case::unjail(
    CosmosMsg::Unjail(MsgUnjail { validator_addr: VALIDATOR.to_string() }),
    vec![(AddressRole::Validator, VALIDATOR)]
)]
#[case::authorize_circuit_breaker(
    CosmosMsg::AuthorizeCircuitBreaker(MsgAuthorizeCircuitBreaker {
        granter: ALICE.to_string(),
        grantee: BOB.to_string(),
        permissions: None,
    }),
    vec![(AddressRole::Granter, ALICE), (AddressRole::Grantee, BOB)]
)]
#[case::forward(
    CosmosMsg::Forward(MsgForward {
        signer: ALICE.to_string(),
        forward_addr: BOB.to_string(),
        ..Default::default()
    }),
    vec![(AddressRole::Signer, ALICE), (AddressRole::ForwardAddress, BOB)]
)]
#[case::set_mailbox(
    CosmosMsg::SetMailbox(MsgSetMailbox {
        owner: ALICE.to_string(),
        new_owner: ALICE.to_string(),
        ..Default::default()
    }),
    vec![(AddressRole::Owner, ALICE), (AddressRole::NewOwner, ALICE)]
)]
#[case::renounced_mailbox(
    CosmosMsg::SetMailbox(MsgSetMailbox {
        owner: ALICE.to_string(),
        renounce_ownership: true,
        ..Default::default()
    }),
    vec![(AddressRole::Owner, ALICE), (AddressRole::NewOwner, "")]
)]
#[case::pay_for_gas(
    CosmosMsg::PayForGas(MsgPayForGas {
        sender: BOB.to_string(),
        ..Default::default()
    }),
    vec![(AddressRole::Sender, BOB)]
)]
#[case::transfer_to_foreign_chain(
    CosmosMsg::Transfer(MsgTransfer {
        source_port: "transfer".to_string(),
        source_channel: "channel-2".to_string(),
        sender: ALICE.to_string(),
        receiver: OSMO_ACCOUNT.to_string(),
        ..Default::default()
    }),
    vec![(AddressRole::Sender, ALICE)]
)]
#[case::register_evm_address(
    CosmosMsg::RegisterEvmAddress(MsgRegisterEvmAddress {
        validator_address: VALIDATOR.to_string(),
        evm_address: "0x966e6f22781EF6a6A82BBB4DB3df8E225DfD9488".to_string(),
    }),
    vec![(AddressRole::Validator, VALIDATOR)]
)]
#[case::create_zk_execution_ism(
    CosmosMsg::CreateZkExecutionIsm(MsgCreateZkExecutionIsm {
        creator: DAVE.to_string(),
        ..Default::default()
    }),
    vec![(AddressRole::Creator, DAVE)]
)]
#[case::try_upgrade(
    CosmosMsg::TryUpgrade(signal::MsgTryUpgrade { signer: BOB.to_string() }),
    vec![(AddressRole::Signer, BOB)]
)]
#[case::unparsable_address_is_kept(
    CosmosMsg::Delegate(staking::MsgDelegate {
        delegator_address: "not-an-address".to_string(),
        validator_address: VALIDATOR.to_string(),
        amount: None,
    }),
    vec![(AddressRole::Delegator, "not-an-address"), (AddressRole::Validator, VALIDATOR)]
)]
fn address_roles_follow_field_order(
    #[case] msg: CosmosMsg,
    #[case] expected: Vec<(AddressRole, &str)>,
) {
    let decoded = decode(msg);
    assert_eq!(roles(&decoded), expected);
}

#[test]
fn empty_address_keeps_its_role() {
    let decoded = decode(CosmosMsg::Send(bank::MsgSend {
        from_address: ALICE.to_string(),
        to_address: String::new(),
        amount: coins("100", "utia"),
    }));
    assert_eq!(
        roles(&decoded),
        vec![(AddressRole::FromAddress, ALICE), (AddressRole::ToAddress, "")]
    );
    assert!(!decoded.addresses[0].address.hash.is_empty());
    assert!(decoded.addresses[1].address.hash.is_empty());
}

#[test]
fn unparsable_address_has_no_hash() {
    let decoded = decode(CosmosMsg::Unjail(MsgUnjail {
        validator_addr: "not-an-address".to_string(),
    }));
    assert!(decoded.addresses[0].address.hash.is_empty());
}

#[test]
fn pay_for_blobs() {
    let msg = MsgPayForBlobs {
        signer: ALICE.to_string(),
        namespaces: vec![namespace(7)],
        blob_sizes: vec![1],
        share_commitments: vec![vec![1; 32]],
        share_versions: vec![0],
    };
    let decoded = decode(CosmosMsg::PayForBlobs(msg));

    assert_eq!(decoded.msg_type, MsgType::MsgPayForBlobs);
    assert_eq!(roles(&decoded), vec![(AddressRole::Signer, ALICE)]);
    assert_eq!(decoded.blobs_size, 1);
    assert_eq!(decoded.entities.namespaces.len(), 1);
    let namespace = &decoded.entities.namespaces[0];
    assert_eq!(namespace.version, 0);
    assert_eq!(namespace.namespace_id.len(), 25);
    assert_eq!(namespace.size, 1);
    assert_eq!(namespace.pfb_count, 1);
    assert!(!namespace.reserved);
    assert_eq!(namespace.last_height, HEIGHT);
    assert_eq!(namespace.last_message_time, block().time);
}

#[test]
fn pay_for_blobs_sums_leading_sizes() {
    let msg = MsgPayForBlobs {
        signer: ALICE.to_string(),
        namespaces: vec![namespace(1), namespace(2)],
        blob_sizes: vec![10, 20, 30],
        ..Default::default()
    };
    let decoded = decode(CosmosMsg::PayForBlobs(msg));
    assert_eq!(decoded.blobs_size, 30);
    assert_eq!(
        decoded
            .entities
            .namespaces
            .iter()
            .map(|namespace| namespace.size)
            .collect::<Vec<_>>(),
        vec![10, 20]
    );
}

#[test]
fn pay_for_blobs_with_missing_size_fails() {
    let msg = CosmosMsg::PayForBlobs(MsgPayForBlobs {
        signer: ALICE.to_string(),
        namespaces: vec![namespace(1), namespace(2)],
        blob_sizes: vec![5],
        ..Default::default()
    });
    let err = Decoder::default()
        .decode_message(&block(), &msg, 3, ExecutionStatus::Success)
        .unwrap_err();
    assert_eq!(
        err,
        MessageDecodeError {
            type_url: "/celestia.blob.v1.MsgPayForBlobs".to_string(),
            position: 3,
            source: MessageError::BlobSizesMismatch { index: 1, sizes: 1 },
        }
    );
    assert_eq!(
        err.to_string(),
        "/celestia.blob.v1.MsgPayForBlobs at position 3: blob sizes has 1 entries, namespace 1 has no size"
    );
}

#[test]
fn failed_transactions_keep_addresses_but_drop_entities() {
    let msg = CosmosMsg::PayForBlobs(MsgPayForBlobs {
        signer: ALICE.to_string(),
        namespaces: vec![namespace(1)],
        blob_sizes: vec![64],
        ..Default::default()
    });
    let succeeded = decode_with_status(msg.clone(), ExecutionStatus::Success);
    let failed = decode_with_status(msg, ExecutionStatus::Failed);

    assert_eq!(failed.msg_type, succeeded.msg_type);
    assert_eq!(failed.addresses, succeeded.addresses);
    assert_eq!(failed.blobs_size, 64);
    assert!(!succeeded.entities.is_empty());
    assert!(failed.entities.is_empty());
}

#[test]
fn unknown_message() {
    let msg = CosmosMsg::Unknown(Any {
        type_url: "/custom.module.v1.MsgDoSomething".to_string(),
        value: vec![1, 2, 3],
    });
    let decoded = decode(msg);
    assert_eq!(decoded.msg_type, MsgType::MsgUnknown);
    assert_eq!(decoded.type_url, "/custom.module.v1.MsgDoSomething");
    assert!(decoded.addresses.is_empty());
    assert!(decoded.entities.is_empty());
    assert_eq!(decoded.size, None);
    assert_eq!(decoded.packet, None);
}

#[test]
fn create_validator_derives_delegator() {
    let msg = staking::MsgCreateValidator {
        description: Some(staking::Description {
            moniker: "node-1".to_string(),
            identity: "ABCDEF".to_string(),
            website: "https://node.example".to_string(),
            security_contact: "ops@node.example".to_string(),
            details: "".to_string(),
        }),
        commission: Some(staking::CommissionRates {
            rate: "50000000000000000".to_string(),
            max_rate: "200000000000000000".to_string(),
            max_change_rate: "10000000000000000".to_string(),
        }),
        min_self_delegation: "1".to_string(),
        delegator_address: String::new(),
        validator_address: VALIDATOR.to_string(),
        pubkey: None,
        value: coins("1000000", "utia").pop(),
    };
    let decoded = decode(CosmosMsg::CreateValidator(msg));

    assert_eq!(
        roles(&decoded),
        vec![
            (AddressRole::Delegator, VALIDATOR_ACCOUNT),
            (AddressRole::Validator, VALIDATOR),
        ]
    );
    assert_eq!(
        decoded.entities.validator,
        Some(Validator {
            delegator: VALIDATOR_ACCOUNT.to_string(),
            address: VALIDATOR.to_string(),
            moniker: "node-1".to_string(),
            identity: "ABCDEF".to_string(),
            website: "https://node.example".to_string(),
            contacts: "ops@node.example".to_string(),
            details: String::new(),
            rate: BigDecimal::from_str("0.05").unwrap(),
            max_rate: BigDecimal::from_str("0.2").unwrap(),
            max_change_rate: BigDecimal::from_str("0.01").unwrap(),
            min_self_delegation: BigDecimal::from(1),
            stake: BigDecimal::from(1_000_000),
            height: HEIGHT,
        })
    );
}

#[test]
fn edit_validator_defaults_missing_rates_to_zero() {
    let decoded = decode(CosmosMsg::EditValidator(staking::MsgEditValidator {
        validator_address: VALIDATOR.to_string(),
        ..Default::default()
    }));
    let validator = decoded.entities.validator.unwrap();
    assert_eq!(validator.rate, BigDecimal::from(0));
    assert_eq!(validator.min_self_delegation, BigDecimal::from(0));
}

#[test]
fn periodic_vesting_account() {
    let msg = vesting::MsgCreatePeriodicVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        start_time: 1_700_000_000,
        vesting_periods: vec![
            vesting::Period {
                length: 3600,
                amount: coins("100", "utia"),
            },
            vesting::Period {
                length: 7200,
                amount: coins("300", "utia"),
            },
        ],
    };
    let decoded = decode(CosmosMsg::CreatePeriodicVestingAccount(msg));
    let account = decoded.entities.vesting_account.unwrap();

    assert_eq!(account.vesting_type, VestingType::Periodic);
    assert_eq!(account.address, BOB);
    assert_eq!(account.amount, BigDecimal::from(400));
    assert_eq!(
        account.end_time,
        DateTime::from_timestamp(1_700_010_800, 0)
    );
    assert_eq!(
        account.periods,
        vec![
            VestingPeriod {
                length: 3600,
                amount: BigDecimal::from(100),
            },
            VestingPeriod {
                length: 7200,
                amount: BigDecimal::from(300),
            },
        ]
    );
}

#[test]
fn continuous_vesting_starts_at_block_time() {
    let decoded = decode(CosmosMsg::CreateVestingAccount(vesting::MsgCreateVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        amount: coins("5000", "utia"),
        end_time: 1_800_000_000,
        delayed: false,
    }));
    let account = decoded.entities.vesting_account.unwrap();
    assert_eq!(account.vesting_type, VestingType::Continuous);
    assert_eq!(account.start_time, Some(block().time));
    assert_eq!(account.amount, BigDecimal::from(5000));
}

#[rstest]
#[case::period_lengths_overflow(
    CosmosMsg::CreatePeriodicVestingAccount(vesting::MsgCreatePeriodicVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        start_time: 0,
        vesting_periods: vec![
            vesting::Period { length: i64::MAX, amount: coins("1", "utia") },
            vesting::Period { length: i64::MAX, amount: coins("1", "utia") },
        ],
    }),
    MessageError::InvalidTimestamp { seconds: i64::MAX, nanos: 0 }
)]
#[case::end_time_out_of_range(
    CosmosMsg::CreateVestingAccount(vesting::MsgCreateVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        amount: coins("5000", "utia"),
        end_time: i64::MAX,
        delayed: false,
    }),
    MessageError::InvalidTimestamp { seconds: i64::MAX, nanos: 0 }
)]
#[case::vesting_amount_with_exponent(
    CosmosMsg::CreateVestingAccount(vesting::MsgCreateVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        amount: coins("1e-20000000", "utia"),
        end_time: 1_800_000_000,
        delayed: true,
    }),
    MessageError::InvalidDecimal("1e-20000000".to_string())
)]
#[case::period_amount_with_fraction(
    CosmosMsg::CreatePeriodicVestingAccount(vesting::MsgCreatePeriodicVestingAccount {
        from_address: ALICE.to_string(),
        to_address: BOB.to_string(),
        start_time: 1_700_000_000,
        vesting_periods: vec![vesting::Period { length: 60, amount: coins("0.5", "utia") }],
    }),
    MessageError::InvalidDecimal("0.5".to_string())
)]
#[case::deposit_with_exponent(
    CosmosMsg::SubmitProposal(gov::MsgSubmitProposal {
        proposer: ALICE.to_string(),
        initial_deposit: coins("1E9", "utia"),
        title: "Signal".to_string(),
        ..Default::default()
    }),
    MessageError::InvalidDecimal("1E9".to_string())
)]
fn malformed_numbers_fail_the_message(#[case] msg: CosmosMsg, #[case] expected: MessageError) {
    let err = Decoder::default()
        .decode_message(&block(), &msg, 0, ExecutionStatus::Success)
        .unwrap_err();
    assert_eq!(err.type_url, msg.type_url());
    assert_eq!(err.source, expected);
}

#[test]
fn signal_version_uses_block_time() {
    let decoded = decode(CosmosMsg::SignalVersion(signal::MsgSignalVersion {
        validator_address: VALIDATOR.to_string(),
        version: 3,
    }));
    assert_eq!(roles(&decoded), vec![(AddressRole::Validator, VALIDATOR)]);
    assert_eq!(
        decoded.entities.signal_version,
        Some(SignalVersion {
            validator: VALIDATOR.to_string(),
            version: 3,
            height: HEIGHT,
            time: block().time,
        })
    );
}

#[test]
fn collateral_token() {
    let decoded = decode(CosmosMsg::CreateCollateralToken(warp::MsgCreateCollateralToken {
        owner: ALICE.to_string(),
        origin_mailbox: "0x68797065726c616e650000000000000000000000000000000000000000000000"
            .to_string(),
        origin_denom: "utia".to_string(),
    }));
    assert_eq!(roles(&decoded), vec![(AddressRole::Owner, ALICE)]);
    assert_eq!(
        decoded.entities.token,
        Some(Token {
            owner: ALICE.to_string(),
            mailbox: "0x68797065726c616e650000000000000000000000000000000000000000000000"
                .to_string(),
            denom: "utia".to_string(),
            token_type: TokenType::Collateral,
            height: HEIGHT,
        })
    );
}

#[test]
fn software_upgrade() {
    let decoded = decode(CosmosMsg::SoftwareUpgrade(upgrade::MsgSoftwareUpgrade {
        authority: DAVE.to_string(),
        plan: Some(upgrade::Plan {
            name: "v4".to_string(),
            height: 2_000_000,
            info: "https://example.org/v4".to_string(),
            ..Default::default()
        }),
    }));
    assert_eq!(roles(&decoded), vec![(AddressRole::Authority, DAVE)]);
    assert_eq!(
        decoded.entities.upgrade,
        Some(Upgrade {
            signer: DAVE.to_string(),
            kind: UpgradeKind::Software,
            name: "v4".to_string(),
            info: "https://example.org/v4".to_string(),
            plan_height: Some(2_000_000),
            height: HEIGHT,
            time: block().time,
        })
    );
}
