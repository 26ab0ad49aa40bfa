pub mod addresses;
pub mod block;
pub mod grants;
pub mod ibc;
pub mod messages;
pub mod msg_type;
pub mod namespaces;
pub mod proposals;
pub mod tokens;
pub mod transactions;
pub mod upgrades;
pub mod validators;
pub mod vesting;

pub use addresses::{Address, AddressRole, AddressWithRole, Balance};
pub use block::{BlockContext, ExecutionStatus};
pub use messages::{DecodedMessage, DecodedPacket, MessageEntities, NestedMessage};
pub use msg_type::MsgType;
pub use transactions::{BlockTransaction, DecodedTransaction};
