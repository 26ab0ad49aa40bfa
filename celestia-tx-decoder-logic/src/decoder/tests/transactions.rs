use super::*;
use crate::{
    error::{DecodeError, FeeError, MessageError, TxDecodeError},
    proto::{
        celestia::{blob::v1::MsgPayForBlobs, core::v1::blob::BlobTx},
        cosmos::{
            bank::v1beta1::MsgSend,
            slashing::v1beta1::MsgUnjail,
            tx::v1beta1::{AuthInfo, Fee, Tx, TxBody},
        },
    },
    types::MsgType,
};
use bigdecimal::BigDecimal;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn send_any() -> Any {
    any(
        "/cosmos.bank.v1beta1.MsgSend",
        &MsgSend {
            from_address: ALICE.to_string(),
            to_address: BOB.to_string(),
            amount: coins("100", "utia"),
        },
    )
}

fn raw_tx(messages: Vec<Any>, fee: Vec<Coin>) -> Vec<u8> {
    Tx {
        body: Some(TxBody {
            messages,
            memo: "gm".to_string(),
            timeout_height: 1_500_100,
            ..Default::default()
        }),
        auth_info: Some(AuthInfo {
            fee: Some(Fee {
                amount: fee,
                gas_limit: 80_000,
                ..Default::default()
            }),
            ..Default::default()
        }),
        signatures: vec![vec![1; 64]],
    }
    .encode_to_vec()
}

fn blob_tx(tx: Vec<u8>) -> Vec<u8> {
    BlobTx {
        tx,
        blobs: vec![],
        type_id: "BLOB".to_string(),
    }
    .encode_to_vec()
}

#[test]
fn blob_transaction() {
    let unjail = any(
        "/cosmos.slashing.v1beta1.MsgUnjail",
        &MsgUnjail {
            validator_addr: VALIDATOR.to_string(),
        },
    );
    let raw = blob_tx(raw_tx(vec![send_any(), unjail], coins("2", "tia")));

    let decoded = Decoder::default().decode_transaction(&raw).unwrap();

    assert_eq!(decoded.memo, "gm");
    assert_eq!(decoded.timeout_height, 1_500_100);
    assert_eq!(decoded.fee, BigDecimal::from(2_000_000));
    assert_eq!(decoded.gas_wanted, 80_000);
    assert_eq!(
        decoded
            .messages
            .iter()
            .map(CosmosMsg::msg_type)
            .collect::<Vec<_>>(),
        vec![MsgType::MsgSend, MsgType::MsgUnjail]
    );
    assert_eq!(
        decoded.signers,
        BTreeMap::from([
            (
                ALICE.to_string(),
                hex::decode("946342c7732f062237b673f526f2674c7d0bff98").unwrap()
            ),
            (
                VALIDATOR_ACCOUNT.to_string(),
                hex::decode("3e454c535a61686f767d848b9299a0a7aeb5bcc3").unwrap()
            ),
        ])
    );
}

#[test]
fn plain_transaction_without_fee() {
    let raw = raw_tx(vec![send_any(), send_any()], vec![]);
    let decoded = Decoder::default().decode_transaction(&raw).unwrap();
    assert_eq!(decoded.fee, BigDecimal::from(0));
    assert_eq!(decoded.messages.len(), 2);
    assert_eq!(decoded.signers.len(), 1);
}

#[test]
fn fee_in_two_currencies() {
    let fee = [coins("1000", "utia"), coins("1", "tia")].concat();
    let err = Decoder::default()
        .decode_transaction(&raw_tx(vec![send_any()], fee))
        .unwrap_err();
    assert!(matches!(err, TxDecodeError::Fee(FeeError::Ambiguous(2))));
    assert_eq!(err.to_string(), "found fee in 2 currencies");
}

#[test]
fn malformed_known_message() {
    let broken = Any {
        type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
        value: vec![0x0a, 0xff],
    };
    let err = Decoder::default()
        .decode_transaction(&raw_tx(vec![send_any(), broken], vec![]))
        .unwrap_err();
    let TxDecodeError::Message {
        position, type_url, ..
    } = err
    else {
        panic!("expected a message error, got {err:?}");
    };
    assert_eq!(position, 1);
    assert_eq!(type_url, "/cosmos.bank.v1beta1.MsgSend");
}

#[test]
fn unknown_message_is_kept() {
    let custom = Any {
        type_url: "/custom.module.v1.MsgDoSomething".to_string(),
        value: vec![1, 2, 3],
    };
    let decoded = Decoder::default()
        .decode_transaction(&raw_tx(vec![custom.clone()], vec![]))
        .unwrap();
    assert_eq!(decoded.messages, vec![CosmosMsg::Unknown(custom)]);
    assert!(decoded.signers.is_empty());
}

#[test]
fn decoding_is_repeatable() {
    let raw = blob_tx(raw_tx(vec![send_any()], coins("500", "utia")));
    let decoder = Decoder::default();
    let first = decoder
        .decode_block_transaction(&block(), 0, &raw, ExecutionStatus::Success)
        .unwrap();
    let second = decoder
        .decode_block_transaction(&block(), 0, &raw, ExecutionStatus::Success)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn block_transaction() {
    let pfb = any(
        "/celestia.blob.v1.MsgPayForBlobs",
        &MsgPayForBlobs {
            signer: ALICE.to_string(),
            namespaces: vec![[&[0_u8; 19][..], &[3; 7][..]].concat()],
            blob_sizes: vec![2048],
            ..Default::default()
        },
    );
    let raw = blob_tx(raw_tx(vec![send_any(), pfb], coins("500", "utia")));

    let decoded = Decoder::default()
        .decode_block_transaction(&block(), 4, &raw, ExecutionStatus::Success)
        .unwrap();

    assert_eq!(decoded.index, 4);
    assert_eq!(decoded.blobs_size(), 2048);
    assert_eq!(decoded.messages.len(), 2);
    assert_eq!(decoded.messages[1].position, 1);
    assert_eq!(decoded.messages[1].entities.namespaces.len(), 1);
}

#[test]
fn block_transaction_errors_carry_the_index() {
    let err = Decoder::default()
        .decode_block_transaction(&block(), 3, &[0xff, 0xff], ExecutionStatus::Success)
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Transaction {
            index: 3,
            source: TxDecodeError::Envelope(_)
        }
    ));

    let pfb = any(
        "/celestia.blob.v1.MsgPayForBlobs",
        &MsgPayForBlobs {
            signer: ALICE.to_string(),
            namespaces: vec![
                [&[0_u8; 19][..], &[1; 7][..]].concat(),
                [&[0_u8; 19][..], &[2; 7][..]].concat(),
            ],
            blob_sizes: vec![10],
            ..Default::default()
        },
    );
    let err = Decoder::default()
        .decode_block_transaction(
            &block(),
            5,
            &raw_tx(vec![pfb], vec![]),
            ExecutionStatus::Success,
        )
        .unwrap_err();
    let DecodeError::Message { index, source } = err else {
        panic!("expected a message error, got {err:?}");
    };
    assert_eq!(index, 5);
    assert_eq!(source.position, 0);
    assert_eq!(
        source.source,
        MessageError::BlobSizesMismatch { index: 1, sizes: 1 }
    );
}
