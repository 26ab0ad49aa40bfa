use bigdecimal::{BigDecimal, Zero};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AddressRole {
    Signer,
    Sender,
    Receiver,
    Delegator,
    Validator,
    ValidatorSrc,
    ValidatorDst,
    Granter,
    Grantee,
    Depositor,
    Voter,
    Proposer,
    Authority,
    Owner,
    NewOwner,
    Relayer,
    FromAddress,
    ToAddress,
    Input,
    Output,
    WithdrawAddress,
    Creator,
    Pruner,
    ForwardAddress,
}

/// Placeholder balance slot, filled by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub currency: String,
    pub total: BigDecimal,
}

impl Balance {
    pub fn empty(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            total: BigDecimal::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub height: u64,
    pub last_height: u64,
    pub address: String,
    /// Raw address bytes, empty when the string is not a valid bech32 address.
    pub hash: Vec<u8>,
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressWithRole {
    pub role: AddressRole,
    pub address: Address,
}
