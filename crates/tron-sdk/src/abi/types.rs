//! ABI type definitions

use std::fmt;

use thiserror::Error;
use tron_primitives::{Address, U256};

/// Size of one ABI slot in bytes
pub const SLOT_LEN: usize = 32;

/// Size of one ABI slot in hex characters
pub const SLOT_HEX_LEN: usize = 64;

/// ABI encoding/decoding error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Non-hex character, odd length or wrong slot width
    #[error("malformed hex: {0}")]
    MalformedHex(String),
    /// Result blob does not have the expected slot structure
    #[error("malformed result: {0}")]
    MalformedResult(String),
    /// String bytes are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),
    /// Offset slot is not 0x20
    #[error("unsupported layout: string offset {0:#x}, expected 0x20")]
    UnsupportedLayout(U256),
    /// Value does not fit the target width
    #[error("value too large: {0}")]
    ValueTooLarge(String),
}

/// Argument accepted by the parameter encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Address, payload left-padded to 32 bytes
    Address(Address),
    /// Unsigned integer, big-endian, left-padded to 32 bytes
    Uint(U256),
}

/// Return shape of a constant call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Single slot holding an address payload
    Address,
    /// Single slot holding an unsigned integer
    Uint,
    /// Offset slot, length slot, then the padded bytes
    String,
}

/// Value produced by the result decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    /// Decoded address
    Address(Address),
    /// Decoded unsigned integer
    Uint(U256),
    /// Decoded UTF-8 string
    String(String),
}

impl DecodedValue {
    /// Take the integer, if this is one
    pub fn into_uint(self) -> Option<U256> {
        match self {
            DecodedValue::Uint(v) => Some(v),
            _ => None,
        }
    }

    /// Take the string, if this is one
    pub fn into_string(self) -> Option<String> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Take the address, if this is one
    pub fn into_address(self) -> Option<Address> {
        match self {
            DecodedValue::Address(a) => Some(a),
            _ => None,
        }
    }
}

/// One 32-byte ABI slot
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbiSlot([u8; SLOT_LEN]);

impl AbiSlot {
    /// Slot of all zeros
    pub const ZERO: AbiSlot = AbiSlot([0u8; SLOT_LEN]);

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; SLOT_LEN]) -> Self {
        AbiSlot(bytes)
    }

    /// Parse a 64-character hex slot
    pub fn from_hex(s: &str) -> Result<Self, AbiError> {
        if s.len() != SLOT_HEX_LEN {
            return Err(AbiError::MalformedHex(format!(
                "expected {} hex characters, got {}",
                SLOT_HEX_LEN,
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| AbiError::MalformedHex(e.to_string()))?;
        let mut slot = [0u8; SLOT_LEN];
        slot.copy_from_slice(&bytes);
        Ok(AbiSlot(slot))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; SLOT_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for AbiSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbiSlot({})", self.to_hex())
    }
}

impl fmt::Display for AbiSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Ordered sequence of slots sent as the node's `parameter` field
///
/// Order must match the declared argument order of the target function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterBlock {
    slots: Vec<AbiSlot>,
}

impl ParameterBlock {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot
    pub fn push(&mut self, slot: AbiSlot) {
        self.slots.push(slot);
    }

    /// Append a slot, builder style
    pub fn with(mut self, slot: AbiSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Slots in order
    pub fn slots(&self) -> &[AbiSlot] {
        &self.slots
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no arguments are encoded
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Concatenated hex of every slot (empty string for no arguments)
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * SLOT_HEX_LEN);
        for slot in &self.slots {
            out.push_str(&slot.to_hex());
        }
        out
    }
}

impl FromIterator<AbiSlot> for ParameterBlock {
    fn from_iter<I: IntoIterator<Item = AbiSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ParameterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
