mod messages;
mod transactions;

use crate::{
    decoder::registry::CosmosMsg,
    proto::{cosmos::base::v1beta1::Coin, google::protobuf::Any},
    types::{AddressRole, BlockContext, DecodedMessage, ExecutionStatus},
    Decoder,
};
use chrono::DateTime;
use prost::Message;

pub const HEIGHT: u64 = 1_500_000;
pub const BLOCK_TIME: i64 = 1_710_000_000;

pub const ALICE: &str = "celestia1j33593mn9urzydakw06jdun8f37shlucmhr8p6";
pub const BOB: &str = "celestia1vsvx8n7f8dh5udesqqhgrjutyun7zqrgehdq2l";
pub const CAROL: &str = "celestia1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnjuq2t5";
pub const DAVE: &str = "celestia1zs23v9ccrydpk8qarc0jqgfzyvjz2f38w2m67d";
pub const VALIDATOR: &str = "celestiavaloper18ez5c566v95x7anasj9e9xdq57htt0xryj6e93";
/// Account address sharing the bytes of [`VALIDATOR`].
pub const VALIDATOR_ACCOUNT: &str = "celestia18ez5c566v95x7anasj9e9xdq57htt0xrpdcqnh";
pub const OTHER_VALIDATOR: &str = "celestiavaloper1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnhrznaj";
pub const OSMO_ACCOUNT: &str = "osmo18s7nu06qg9pyx3z9ger5sj22fdxy6nj0cwdyyv";

pub fn block() -> BlockContext {
    BlockContext {
        height: HEIGHT,
        time: DateTime::from_timestamp(BLOCK_TIME, 0).unwrap(),
    }
}

pub fn any<M: Message>(type_url: &str, msg: &M) -> Any {
    Any {
        type_url: type_url.to_string(),
        value: msg.encode_to_vec(),
    }
}

pub fn coins(amount: &str, denom: &str) -> Vec<Coin> {
    vec![Coin {
        denom: denom.to_string(),
        amount: amount.to_string(),
    }]
}

pub fn decode(msg: CosmosMsg) -> DecodedMessage {
    decode_with_status(msg, ExecutionStatus::Success)
}

pub fn decode_with_status(msg: CosmosMsg, status: ExecutionStatus) -> DecodedMessage {
    Decoder::default()
        .decode_message(&block(), &msg, 0, status)
        .unwrap()
}

pub fn roles(decoded: &DecodedMessage) -> Vec<(AddressRole, &str)> {
    decoded
        .addresses
        .iter()
        .map(|address| (address.role, address.address.address.as_str()))
        .collect()
}
