use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Authorization label of fee allowances.
pub const FEE_AUTHORIZATION: &str = "fee";

#[derive(Debug, Clone, PartialEq)]
pub struct Grant {
    pub height: u64,
    pub time: DateTime<Utc>,
    pub granter: String,
    pub grantee: String,
    /// Type url of the authorized message, [`FEE_AUTHORIZATION`] for allowances and
    /// empty for unrecognized authorizations.
    pub authorization: String,
    pub expiration: Option<DateTime<Utc>>,
    pub revoked: bool,
    pub revoke_height: Option<u64>,
    pub params: Map<String, Value>,
}
