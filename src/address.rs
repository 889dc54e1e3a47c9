use blake2::digest::{Update, VariableOutput};
use data_encoding::HEXLOWER_PERMISSIVE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::constants::SS58_CHECKSUM_PREAMBLE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid hex account id: {0}")]
    InvalidHex(String),
    #[error("account id must be 32 bytes, got {0}")]
    BadLength(usize),
}

/// Raw 32-byte on-chain account identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub fn from_hex(value: &str) -> Result<Self, AddressError> {
        let stripped = value.strip_prefix("0x").unwrap_or(value);
        let bytes = HEXLOWER_PERMISSIVE
            .decode(stripped.as_bytes())
            .map_err(|_| AddressError::InvalidHex(value.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| AddressError::BadLength(b.len()))?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", HEXLOWER_PERMISSIVE.encode(&self.0))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// SS58-encode this account id for the given network prefix.
    ///
    /// Prefixes `0..64` use the one-byte form, `64..16384` the two-byte
    /// form. The registry reserves nothing above `16383`; higher bits are
    /// masked off.
    pub fn to_ss58(&self, prefix: u16) -> String {
        let ident = prefix & 0b0011_1111_1111_1111;
        let mut data = Vec::with_capacity(35);
        if ident < 64 {
            data.push(ident as u8);
        } else {
            data.push(((ident & 0b0000_0000_1111_1100) as u8) >> 2 | 0b0100_0000);
            data.push((ident >> 8) as u8 | ((ident & 0b0000_0000_0000_0011) as u8) << 6);
        }
        data.extend_from_slice(&self.0);
        let mut hasher = blake2::Blake2bVar::new(64).unwrap();
        hasher.update(SS58_CHECKSUM_PREAMBLE);
        hasher.update(&data);
        let mut checksum = [0u8; 64];
        hasher.finalize_variable(&mut checksum).unwrap();
        data.extend_from_slice(&checksum[..2]);
        bs58::encode(data).into_string()
    }
}

/// First 4 and last 4 characters joined by an ellipsis marker.
pub fn truncate_ss58(address: &str) -> String {
    if address.len() <= 8 {
        return address.to_string();
    }
    format!("{}...{}", &address[..4], &address[address.len() - 4..])
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl std::str::FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::{truncate_ss58, AccountId, AddressError};

    // Well-known dev account (//Alice)
    const ALICE: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

    #[test]
    fn hex_round_trip() {
        let id = AccountId::from_hex(ALICE).unwrap();
        assert_eq!(id.to_hex(), ALICE);

        let bare = AccountId::from_hex(&ALICE[2..]).unwrap();
        assert_eq!(id, bare);

        let upper = AccountId::from_hex(&ALICE[2..].to_uppercase()).unwrap();
        assert_eq!(id, upper);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            AccountId::from_hex("0xzz"),
            Err(AddressError::InvalidHex(_))
        ));
        assert_eq!(
            AccountId::from_hex("0xd435"),
            Err(AddressError::BadLength(2))
        );
    }

    #[test]
    fn ss58_known_vectors() {
        let id = AccountId::from_hex(ALICE).unwrap();
        // Polkadot
        assert_eq!(
            id.to_ss58(0),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
        // Kusama
        assert_eq!(
            id.to_ss58(2),
            "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F"
        );
        // Generic substrate
        assert_eq!(
            id.to_ss58(42),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
    }

    #[test]
    fn truncated_display() {
        assert_eq!(
            truncate_ss58("HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F"),
            "HNZa...f74F"
        );
        assert_eq!(truncate_ss58("short"), "short");
    }
}
