use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum VestingType {
    Delayed,
    Continuous,
    Permanent,
    Periodic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingPeriod {
    /// Seconds since the previous period.
    pub length: i64,
    pub amount: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingAccount {
    pub address: String,
    pub vesting_type: VestingType,
    /// Vested amount in the native denomination.
    pub amount: BigDecimal,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub periods: Vec<VestingPeriod>,
    pub height: u64,
}
