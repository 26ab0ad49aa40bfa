use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub delegator: String,
    pub address: String,
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub contacts: String,
    pub details: String,
    pub rate: BigDecimal,
    pub max_rate: BigDecimal,
    pub max_change_rate: BigDecimal,
    pub min_self_delegation: BigDecimal,
    pub stake: BigDecimal,
    pub height: u64,
}
