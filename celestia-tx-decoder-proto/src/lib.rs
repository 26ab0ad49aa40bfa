//! Protobuf definitions of the Cosmos SDK, IBC, Celestia and Hyperlane messages read by the
//! transaction decoder.
//!
//! Code is generated by `prost-build` from the definitions under `proto/`, one module per
//! protobuf package. Every message also derives `serde::Serialize`; bytes are rendered as
//! base64.

pub mod google {
    pub mod protobuf {
        include!(concat!(env!("OUT_DIR"), "/google.protobuf.rs"));
    }
}

pub mod cosmos {
    pub mod authz {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.authz.v1beta1.rs"));
        }
    }
    pub mod bank {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.bank.v1beta1.rs"));
        }
    }
    pub mod base {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.base.v1beta1.rs"));
        }
    }
    pub mod circuit {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.circuit.v1.rs"));
        }
    }
    pub mod distribution {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.distribution.v1beta1.rs"));
        }
    }
    pub mod feegrant {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.feegrant.v1beta1.rs"));
        }
    }
    pub mod gov {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.gov.v1.rs"));
        }
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.gov.v1beta1.rs"));
        }
    }
    pub mod params {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.params.v1beta1.rs"));
        }
    }
    pub mod slashing {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.slashing.v1beta1.rs"));
        }
    }
    pub mod staking {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.staking.v1beta1.rs"));
        }
    }
    pub mod tx {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.tx.v1beta1.rs"));
        }
    }
    pub mod upgrade {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.upgrade.v1beta1.rs"));
        }
    }
    pub mod vesting {
        pub mod v1beta1 {
            include!(concat!(env!("OUT_DIR"), "/cosmos.vesting.v1beta1.rs"));
        }
    }
}

pub mod ibc {
    pub mod applications {
        pub mod interchain_accounts {
            pub mod controller {
                pub mod v1 {
                    include!(concat!(env!("OUT_DIR"), "/ibc.applications.interchain_accounts.controller.v1.rs"));
                }
            }
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/ibc.applications.interchain_accounts.v1.rs"));
            }
        }
        pub mod transfer {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/ibc.applications.transfer.v1.rs"));
            }
        }
    }
    pub mod core {
        pub mod channel {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/ibc.core.channel.v1.rs"));
            }
        }
        pub mod client {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/ibc.core.client.v1.rs"));
            }
        }
        pub mod connection {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/ibc.core.connection.v1.rs"));
            }
        }
    }
}

pub mod celestia {
    pub mod blob {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/celestia.blob.v1.rs"));
        }
    }
    pub mod core {
        pub mod v1 {
            pub mod blob {
                include!(concat!(env!("OUT_DIR"), "/celestia.core.v1.blob.rs"));
            }
        }
    }
    pub mod forwarding {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/celestia.forwarding.v1.rs"));
        }
    }
    pub mod qgb {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/celestia.qgb.v1.rs"));
        }
    }
    pub mod signal {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/celestia.signal.v1.rs"));
        }
    }
    pub mod zkism {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/celestia.zkism.v1.rs"));
        }
    }
}

pub mod hyperlane {
    pub mod core {
        pub mod interchain_security {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/hyperlane.core.interchain_security.v1.rs"));
            }
        }
        pub mod post_dispatch {
            pub mod v1 {
                include!(concat!(env!("OUT_DIR"), "/hyperlane.core.post_dispatch.v1.rs"));
            }
        }
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/hyperlane.core.v1.rs"));
        }
    }
    pub mod warp {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/hyperlane.warp.v1.rs"));
        }
    }
}
