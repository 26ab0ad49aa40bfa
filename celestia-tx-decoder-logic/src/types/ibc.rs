use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use strum_macros::{AsRefStr, Display};

/// ICS-20 packet payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungibleTokenPacketData {
    pub amount: BigDecimal,
    pub denom: String,
    pub sender: String,
    pub receiver: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbcTransfer {
    pub channel_id: String,
    pub port: String,
    pub sender: String,
    pub receiver: String,
    pub amount: BigDecimal,
    pub denom: String,
    pub memo: String,
    pub sequence: u64,
    pub height: u64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum IbcChannelStatus {
    #[default]
    Initialization,
    Opened,
    Closed,
}

/// Counters a single packet adds to its local channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbcChannel {
    pub id: String,
    pub port_id: String,
    pub status: IbcChannelStatus,
    pub transfers_count: u64,
    /// Native denomination received over the channel.
    pub received: BigDecimal,
    /// Native denomination sent over the channel.
    pub sent: BigDecimal,
    pub height: u64,
}
