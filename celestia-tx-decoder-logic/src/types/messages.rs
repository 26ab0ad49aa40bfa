use super::{
    addresses::AddressWithRole, grants::Grant, ibc::FungibleTokenPacketData, ibc::IbcChannel,
    ibc::IbcTransfer, msg_type::MsgType, namespaces::Namespace, proposals::Proposal,
    tokens::Token, upgrades::SignalVersion, upgrades::Upgrade, validators::Validator,
    vesting::VestingAccount,
};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    pub msg_type: MsgType,
    pub type_url: String,
    pub height: u64,
    pub time: DateTime<Utc>,
    /// Index of the message inside its transaction.
    pub position: usize,
    pub data: Map<String, Value>,
    /// Encoded message length. `None` for legacy gov messages and unknown messages.
    pub size: Option<usize>,
    pub blobs_size: u64,
    pub addresses: Vec<AddressWithRole>,
    /// Identifiers of messages wrapped by MsgExec or a gov proposal.
    pub internal_msgs: Vec<String>,
    pub packet: Option<DecodedPacket>,
    pub entities: MessageEntities,
}

/// State changes a message applies when its transaction succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageEntities {
    pub namespaces: Vec<Namespace>,
    pub grant: Option<Grant>,
    pub proposal: Option<Proposal>,
    pub validator: Option<Validator>,
    pub ibc_transfer: Option<IbcTransfer>,
    pub ibc_channel: Option<IbcChannel>,
    pub signal_version: Option<SignalVersion>,
    pub upgrade: Option<Upgrade>,
    pub token: Option<Token>,
    pub vesting_account: Option<VestingAccount>,
}

impl MessageEntities {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPacket {
    Transfer(FungibleTokenPacketData),
    InterchainAccount {
        packet_type: String,
        memo: String,
        messages: Vec<NestedMessage>,
    },
}

/// A message carried inside another message, kept with its classification and fields only.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedMessage {
    pub type_url: String,
    pub msg_type: MsgType,
    pub data: Map<String, Value>,
}
