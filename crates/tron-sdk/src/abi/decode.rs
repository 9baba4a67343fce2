//! ABI result decoding

use tron_primitives::{Address, U256};

use super::types::{AbiError, DecodedValue, ParamType, SLOT_HEX_LEN, SLOT_LEN};

/// Offset slot value of the only supported dynamic-string layout
const STRING_OFFSET: u64 = 0x20;

/// Decode a constant-call result according to its return shape
pub fn decode(param_type: ParamType, result: &str) -> Result<DecodedValue, AbiError> {
    match param_type {
        ParamType::Uint => decode_uint(result).map(DecodedValue::Uint),
        ParamType::String => decode_dynamic_string(result).map(DecodedValue::String),
        ParamType::Address => decode_address(result).map(DecodedValue::Address),
    }
}

/// Parse a big-endian hex slot as an unsigned integer
///
/// The slot must be exactly 64 hex characters.
pub fn decode_uint(slot: &str) -> Result<U256, AbiError> {
    check_hex(slot)?;
    if slot.len() != SLOT_HEX_LEN {
        return Err(AbiError::MalformedHex(format!(
            "expected {} hex characters, got {}",
            SLOT_HEX_LEN,
            slot.len()
        )));
    }
    let bytes = hex::decode(slot).map_err(|e| AbiError::MalformedHex(e.to_string()))?;
    Ok(U256::from_big_endian(&bytes))
}

/// Decode an address slot (payload in the low 20 bytes)
pub fn decode_address(slot: &str) -> Result<Address, AbiError> {
    check_hex(slot)?;
    if slot.len() != SLOT_HEX_LEN {
        return Err(AbiError::MalformedHex(format!(
            "expected {} hex characters, got {}",
            SLOT_HEX_LEN,
            slot.len()
        )));
    }
    let bytes = hex::decode(slot).map_err(|e| AbiError::MalformedHex(e.to_string()))?;
    if bytes[..12].iter().any(|&b| b != 0) {
        return Err(AbiError::MalformedResult(
            "address slot has non-zero high bytes".to_string(),
        ));
    }
    let mut payload = [0u8; 20];
    payload.copy_from_slice(&bytes[12..SLOT_LEN]);
    Ok(Address::from_payload(payload))
}

/// Decode a single dynamic string: offset slot (0x20), length slot, bytes
pub fn decode_dynamic_string(blob: &str) -> Result<String, AbiError> {
    if blob.len() % SLOT_HEX_LEN != 0 {
        return Err(AbiError::MalformedResult(format!(
            "length {} is not a multiple of {}",
            blob.len(),
            SLOT_HEX_LEN
        )));
    }
    check_hex(blob)?;
    if blob.len() < 2 * SLOT_HEX_LEN {
        return Err(AbiError::MalformedResult(
            "missing offset or length slot".to_string(),
        ));
    }

    let offset = decode_uint(&blob[..SLOT_HEX_LEN])?;
    if offset != U256::from(STRING_OFFSET) {
        return Err(AbiError::UnsupportedLayout(offset));
    }

    let declared = decode_uint(&blob[SLOT_HEX_LEN..2 * SLOT_HEX_LEN])?;
    let start = 2 * SLOT_HEX_LEN;
    let end = u256_to_usize(declared)
        .and_then(|len| len.checked_mul(2))
        .and_then(|n| n.checked_add(start))
        .filter(|&end| end <= blob.len())
        .ok_or_else(|| {
            AbiError::MalformedResult(format!(
                "declared length {} exceeds {} available bytes",
                declared,
                (blob.len() - start) / 2
            ))
        })?;

    let bytes = hex::decode(&blob[start..end]).map_err(|e| AbiError::MalformedHex(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AbiError::InvalidUtf8(e.to_string()))
}

/// Turn the node's hex-encoded revert message into text
///
/// Messages that are not hex are returned unchanged.
pub fn decode_revert_message(message: &str) -> String {
    match hex::decode(message) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => message.to_string(),
    }
}

/// Narrow a decoded integer to `u64`
pub fn uint_to_u64(value: U256) -> Result<u64, AbiError> {
    if value.bits() > 64 {
        return Err(AbiError::ValueTooLarge(format!("{} does not fit in u64", value)));
    }
    Ok(value.low_u64())
}

fn u256_to_usize(value: U256) -> Option<usize> {
    if value.bits() > 64 {
        return None;
    }
    usize::try_from(value.low_u64()).ok()
}

/// Reject anything outside [0-9a-fA-F] before slicing by byte offsets
fn check_hex(s: &str) -> Result<(), AbiError> {
    match s.bytes().position(|b| !b.is_ascii_hexdigit()) {
        Some(pos) => Err(AbiError::MalformedHex(format!(
            "non-hex character at position {}",
            pos
        ))),
        None => Ok(()),
    }
}
