use chrono::{DateTime, Utc};
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalVersion {
    pub validator: String,
    pub version: u64,
    pub height: u64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UpgradeKind {
    /// Signal based upgrade attempt.
    Try,
    Software,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    pub signer: String,
    pub kind: UpgradeKind,
    pub name: String,
    pub info: String,
    pub plan_height: Option<i64>,
    pub height: u64,
    pub time: DateTime<Utc>,
}
