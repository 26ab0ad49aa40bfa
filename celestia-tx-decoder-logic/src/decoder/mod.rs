//! Transaction and message decoding.
//!
//! [`Decoder`] owns the immutable configuration of a decode run: settings, the message
//! registry and the address and transaction codecs. It holds no mutable state, so a single
//! instance can be shared between threads decoding different transactions.

pub mod handlers;
pub mod registry;
pub mod tx;

mod dispatch;
#[cfg(test)]
mod tests;

use crate::{
    address::{AddressCodec, Bech32Codec},
    error::{DecodeError, MessageDecodeError, TxDecodeError},
    settings::DecoderSettings,
    types::{
        BlockContext, BlockTransaction, DecodedMessage, DecodedTransaction, ExecutionStatus,
        MessageEntities,
    },
};
use handlers::Context;
use registry::{CosmosMsg, MessageRegistry};
use std::sync::Arc;
use tracing::instrument;
use tx::{collect_signers, decode_fee, ProtoTxCodec, TxCodec};

pub struct Decoder {
    settings: DecoderSettings,
    registry: MessageRegistry,
    address_codec: Arc<dyn AddressCodec>,
    tx_codec: Arc<dyn TxCodec>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderSettings::default())
    }
}

impl Decoder {
    pub fn new(settings: DecoderSettings) -> Self {
        Self::with_codecs(settings, Arc::new(Bech32Codec), Arc::new(ProtoTxCodec))
    }

    pub fn with_codecs(
        settings: DecoderSettings,
        address_codec: Arc<dyn AddressCodec>,
        tx_codec: Arc<dyn TxCodec>,
    ) -> Self {
        Self {
            settings,
            registry: MessageRegistry::new(),
            address_codec,
            tx_codec,
        }
    }

    pub fn settings(&self) -> &DecoderSettings {
        &self.settings
    }

    pub fn address_codec(&self) -> &dyn AddressCodec {
        self.address_codec.as_ref()
    }

    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    /// Decodes a raw transaction, unwrapping blob transactions first. Every message with
    /// a known type url must decode; unknown ones are kept as [`CosmosMsg::Unknown`].
    #[instrument(skip_all, level = "debug", fields(len = raw.len()))]
    pub fn decode_transaction(&self, raw: &[u8]) -> Result<DecodedTransaction, TxDecodeError> {
        let parsed = self.tx_codec.decode(raw)?;

        let messages = parsed
            .messages
            .iter()
            .enumerate()
            .map(|(position, any)| {
                let msg = self
                    .registry
                    .decode(any)
                    .map_err(|source| TxDecodeError::Message {
                        position,
                        type_url: any.type_url.clone(),
                        source,
                    })?;
                if let CosmosMsg::Unknown(_) = msg {
                    tracing::debug!(type_url = %any.type_url, position, "unknown message type");
                }
                Ok(msg)
            })
            .collect::<Result<Vec<_>, TxDecodeError>>()?;

        let fee = parsed.auth_info.fee.as_ref();
        let amount = fee.map(|fee| fee.amount.as_slice()).unwrap_or_default();
        let gas_wanted = fee.map(|fee| fee.gas_limit).unwrap_or_default();
        let fee = decode_fee(amount, &self.settings)?;

        let signers = collect_signers(
            messages.iter().flat_map(CosmosMsg::signers),
            self.address_codec(),
            &self.settings,
        );

        Ok(DecodedTransaction {
            timeout_height: parsed.timeout_height.unwrap_or_default(),
            memo: parsed.memo.unwrap_or_default(),
            auth_info: parsed.auth_info,
            messages,
            fee,
            gas_wanted,
            signers,
        })
    }

    /// Classifies a message and extracts its addresses and entities. Entities are only
    /// kept when the transaction executed successfully.
    pub fn decode_message(
        &self,
        block: &BlockContext,
        msg: &CosmosMsg,
        position: usize,
        status: ExecutionStatus,
    ) -> Result<DecodedMessage, MessageDecodeError> {
        self.decode_message_at_depth(block, msg, position, status, 0)
    }

    pub(crate) fn decode_message_at_depth(
        &self,
        block: &BlockContext,
        msg: &CosmosMsg,
        position: usize,
        status: ExecutionStatus,
        depth: usize,
    ) -> Result<DecodedMessage, MessageDecodeError> {
        let ctx = Context {
            decoder: self,
            block,
            status,
            position,
            depth,
        };
        let output = dispatch::dispatch(&ctx, msg).map_err(|source| MessageDecodeError {
            type_url: msg.type_url().to_string(),
            position,
            source,
        })?;

        let entities = if status.is_success() {
            output.entities
        } else {
            MessageEntities::default()
        };
        Ok(DecodedMessage {
            msg_type: msg.msg_type(),
            type_url: msg.type_url().to_string(),
            height: block.height,
            time: block.time,
            position,
            data: msg.fields(),
            size: msg.size(),
            blobs_size: output.blobs_size,
            addresses: output.addresses,
            internal_msgs: output.internal_msgs,
            packet: output.packet,
            entities,
        })
    }

    /// Decodes a transaction of a block together with all of its messages. The first
    /// failing message fails the whole transaction.
    #[instrument(skip_all, level = "debug", fields(height = block.height, index = index))]
    pub fn decode_block_transaction(
        &self,
        block: &BlockContext,
        index: usize,
        raw: &[u8],
        status: ExecutionStatus,
    ) -> Result<BlockTransaction, DecodeError> {
        let transaction = self
            .decode_transaction(raw)
            .map_err(|source| DecodeError::Transaction { index, source })?;
        let messages = transaction
            .messages
            .iter()
            .enumerate()
            .map(|(position, msg)| self.decode_message(block, msg, position, status))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DecodeError::Message { index, source })?;
        Ok(BlockTransaction {
            index,
            transaction,
            messages,
        })
    }
}
