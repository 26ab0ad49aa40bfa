use super::{Context, HandlerOutput};
use crate::{
    error::MessageError,
    proto::celestia::{blob::v1::MsgPayForBlobs, qgb::v1::MsgRegisterEvmAddress},
    types::{namespaces::Namespace, AddressRole},
};

/// Pairs every namespace with its blob size. A missing size is an error, never zero.
pub fn pay_for_blobs(ctx: &Context, msg: &MsgPayForBlobs) -> Result<HandlerOutput, MessageError> {
    let mut output =
        HandlerOutput::with_addresses(ctx.addresses([(AddressRole::Signer, msg.signer.as_str())]));

    for (index, namespace) in msg.namespaces.iter().enumerate() {
        let size = msg
            .blob_sizes
            .get(index)
            .copied()
            .map(u64::from)
            .ok_or(MessageError::BlobSizesMismatch {
                index,
                sizes: msg.blob_sizes.len(),
            })?;
        let namespace = Namespace::from_bytes(namespace, size, ctx.block.height, ctx.block.time)
            .ok_or(MessageError::InvalidNamespace(index))?;
        output.blobs_size += size;
        output.entities.namespaces.push(namespace);
    }
    Ok(output)
}

pub fn register_evm_address(ctx: &Context, msg: &MsgRegisterEvmAddress) -> HandlerOutput {
    HandlerOutput::with_addresses(
        ctx.addresses([(AddressRole::Validator, msg.validator_address.as_str())]),
    )
}
