pub mod address;
pub mod decoder;
pub mod error;
pub mod helpers;
pub mod settings;
pub mod types;

pub use celestia_tx_decoder_proto as proto;
pub use decoder::Decoder;
