use super::messages::DecodedMessage;
use crate::{decoder::registry::CosmosMsg, proto::cosmos::tx::v1beta1::AuthInfo};
use bigdecimal::BigDecimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTransaction {
    pub auth_info: AuthInfo,
    pub timeout_height: u64,
    pub memo: String,
    pub messages: Vec<CosmosMsg>,
    /// Fee in the native denomination.
    pub fee: BigDecimal,
    pub gas_wanted: u64,
    /// Distinct signer account addresses mapped to their raw bytes.
    pub signers: BTreeMap<String, Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockTransaction {
    /// Position of the transaction in its block.
    pub index: usize,
    pub transaction: DecodedTransaction,
    pub messages: Vec<DecodedMessage>,
}

impl BlockTransaction {
    pub fn blobs_size(&self) -> u64 {
        self.messages.iter().map(|msg| msg.blobs_size).sum()
    }
}
