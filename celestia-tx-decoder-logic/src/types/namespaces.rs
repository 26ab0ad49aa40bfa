use celestia_types::nmt::Namespace as CelestiaNamespace;
use chrono::{DateTime, Utc};

/// A blob namespace referenced by a pay-for-blobs message, with the message's
/// contribution to its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub version: u8,
    pub namespace_id: Vec<u8>,
    pub size: u64,
    pub pfb_count: u64,
    pub blobs_count: u64,
    pub reserved: bool,
    pub last_height: u64,
    pub last_message_time: DateTime<Utc>,
}

impl Namespace {
    /// Splits raw namespace bytes into version and id. Bytes that do not form a valid
    /// celestia namespace are split at the first byte and are never reserved. Returns `None`
    /// for empty input.
    pub fn from_bytes(bytes: &[u8], size: u64, height: u64, time: DateTime<Utc>) -> Option<Self> {
        let (version, namespace_id, reserved) = match CelestiaNamespace::from_raw(bytes) {
            Ok(namespace) => (
                namespace.version(),
                namespace.id().to_vec(),
                namespace.is_reserved(),
            ),
            Err(_) => {
                let (&version, namespace_id) = bytes.split_first()?;
                (version, namespace_id.to_vec(), false)
            }
        };
        Some(Self {
            version,
            namespace_id,
            size,
            pfb_count: 1,
            blobs_count: 1,
            reserved,
            last_height: height,
            last_message_time: time,
        })
    }

    /// Hex of version byte followed by the id.
    pub fn hash(&self) -> String {
        let mut bytes = Vec::with_capacity(self.namespace_id.len() + 1);
        bytes.push(self.version);
        bytes.extend_from_slice(&self.namespace_id);
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn raw(version: u8, prefix: u8, last: u8) -> Vec<u8> {
        let mut bytes = vec![prefix; 29];
        bytes[0] = version;
        bytes[28] = last;
        bytes
    }

    fn time() -> DateTime<Utc> {
        DateTime::from_timestamp(1700000000, 0).unwrap()
    }

    #[rstest]
    #[case::transactions(raw(0, 0, 0x01), true)]
    #[case::primary_padding(raw(0, 0, 0xff), true)]
    #[case::tail_padding(raw(255, 0xff, 0xfe), true)]
    #[case::parity_shares(raw(255, 0xff, 0xff), true)]
    #[case::user_namespace(
        [&[0_u8; 19][..], &b"celenium\x00\x01"[..]].concat(),
        false
    )]
    #[case::invalid_v0_prefix(raw(0, 0xff, 0xfe), false)]
    #[case::invalid_v255_id(raw(255, 0, 0x01), false)]
    #[case::unsupported_version(raw(1, 0, 0x01), false)]
    #[case::short_namespace([&[0_u8; 19][..], &[7; 7][..]].concat(), false)]
    fn reserved_namespaces(#[case] bytes: Vec<u8>, #[case] expected: bool) {
        let namespace = Namespace::from_bytes(&bytes, 1, 100, time()).unwrap();
        assert_eq!(namespace.reserved, expected);
        assert_eq!(namespace.hash(), hex::encode(&bytes));
    }

    #[test]
    fn namespace_from_bytes() {
        let mut bytes = vec![0u8; 19];
        bytes.extend_from_slice(b"rollkit!!!");
        let namespace = Namespace::from_bytes(&bytes, 512, 100, time()).unwrap();
        assert_eq!(namespace.version, 0);
        assert_eq!(namespace.namespace_id, bytes[1..].to_vec());
        assert_eq!(namespace.namespace_id.len(), 28);
        assert!(!namespace.reserved);
        assert_eq!(namespace.hash(), hex::encode(&bytes));
        assert_eq!(Namespace::from_bytes(&[], 1, 100, time()), None);
    }
}
