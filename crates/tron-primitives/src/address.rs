//! Tron address type (network prefix `0x41` + 20-byte payload)

use std::fmt;
use thiserror::Error;

use crate::base58;

/// Network prefix byte carried by every mainnet and testnet address
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Length of the Base58Check form in characters
pub const BASE58_ADDRESS_LEN: usize = 34;

/// Length of the hex form in characters (prefix + payload)
pub const HEX_ADDRESS_LEN: usize = 42;

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Base58 alphabet decode failed
    #[error("invalid base58 encoding: {0}")]
    InvalidEncoding(String),
    /// Checksum does not match the decoded payload
    #[error("invalid base58check checksum")]
    InvalidChecksum,
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Decoded data has the wrong length
    #[error("invalid address length: expected 21 bytes, got {0}")]
    InvalidLength(usize),
    /// First byte is not the network prefix
    #[error("invalid address prefix: expected 0x41, got {0:#04x}")]
    InvalidPrefix(u8),
}

/// Textual representation a caller hands to [`Address::parse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRepr {
    /// `T...`, 34 characters
    Base58Check,
    /// `41...`, 42 hex characters
    Hex,
}

/// Tron address
///
/// Only the 20-byte payload is stored; the network prefix is fixed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of the prefixed address in bytes
    pub const LEN: usize = 21;

    /// Size of the payload in bytes
    pub const PAYLOAD_LEN: usize = 20;

    /// Address with an all-zero payload
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from its 20-byte payload
    pub const fn from_payload(payload: [u8; 20]) -> Self {
        Address(payload)
    }

    /// Create address from the 21-byte prefixed form
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != Self::LEN {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        if slice[0] != ADDRESS_PREFIX {
            return Err(AddressError::InvalidPrefix(slice[0]));
        }
        let mut payload = [0u8; 20];
        payload.copy_from_slice(&slice[1..]);
        Ok(Address(payload))
    }

    /// Parse the hex form (`41` + 40 hex chars, optional `0x`)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Parse the Base58Check form, verifying the checksum
    pub fn from_base58check(s: &str) -> Result<Self, AddressError> {
        let bytes = base58::decode_check(s)?;
        Self::from_slice(&bytes)
    }

    /// Parse an address whose representation is stated by the caller
    pub fn parse(s: &str, repr: AddressRepr) -> Result<Self, AddressError> {
        match repr {
            AddressRepr::Base58Check => Self::from_base58check(s),
            AddressRepr::Hex => Self::from_hex(s),
        }
    }

    /// Get the 20-byte payload
    pub fn payload(&self) -> &[u8; 20] {
        &self.0
    }

    /// Get the 21-byte prefixed form
    pub fn to_bytes(&self) -> [u8; 21] {
        let mut bytes = [0u8; 21];
        bytes[0] = ADDRESS_PREFIX;
        bytes[1..].copy_from_slice(&self.0);
        bytes
    }

    /// Check if the payload is all zeros
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Lowercase hex form, 42 characters, no `0x`
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Base58Check form, 34 characters
    pub fn to_base58check(&self) -> String {
        base58::encode_check(&self.to_bytes())
    }

    /// Render in the requested representation
    pub fn to_repr(&self, repr: AddressRepr) -> String {
        match repr {
            AddressRepr::Base58Check => self.to_base58check(),
            AddressRepr::Hex => self.to_hex(),
        }
    }
}

/// Convert a hex-form address to Base58Check
pub fn hex_to_base58check(hex_addr: &str) -> Result<String, AddressError> {
    Ok(Address::from_hex(hex_addr)?.to_base58check())
}

/// Convert a Base58Check address to its hex form
pub fn base58check_to_hex(b58: &str) -> Result<String, AddressError> {
    Ok(Address::from_base58check(b58)?.to_hex())
}

/// Return the canonical hex form of an address given in either representation
pub fn normalize_to_hex(address: &str, repr: AddressRepr) -> Result<String, AddressError> {
    Ok(Address::parse(address, repr)?.to_hex())
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58check())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58check())
    }
}

impl From<[u8; 20]> for Address {
    fn from(payload: [u8; 20]) -> Self {
        Address(payload)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Serde implementation (behind feature flag), Base58Check on the wire
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_base58check())
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Address::from_base58check(&s).map_err(serde::de::Error::custom)
        }
    }
}
