use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde_json::Value;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProposalStatus {
    #[default]
    Inactive,
    Active,
    Applied,
    Rejected,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProposalType {
    #[default]
    Text,
    ParamChanged,
    CommunityPoolSpend,
    ClientUpdate,
    SoftwareUpgrade,
    CancelSoftwareUpgrade,
    /// Gov v1 proposal executing arbitrary messages.
    Messages,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    /// Assigned by the chain, read from events by the storage layer.
    pub id: u64,
    pub height: u64,
    pub proposer: String,
    pub created_at: DateTime<Utc>,
    pub status: ProposalStatus,
    pub proposal_type: ProposalType,
    pub title: String,
    pub description: String,
    pub metadata: String,
    /// Initial deposit in the native denomination.
    pub deposit: BigDecimal,
    pub changes: Option<Value>,
    pub expedited: bool,
}
