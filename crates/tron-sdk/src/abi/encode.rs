//! ABI parameter encoding

use tron_primitives::{Address, AddressError, AddressRepr, U256};

use super::types::{AbiError, AbiSlot, ParameterBlock, Token, SLOT_LEN};

/// Encode tokens into a parameter block, one slot per token
pub fn encode(tokens: &[Token]) -> ParameterBlock {
    tokens.iter().map(encode_token).collect()
}

/// Encode a single token
pub fn encode_token(token: &Token) -> AbiSlot {
    match token {
        Token::Address(addr) => encode_address(addr),
        Token::Uint(value) => encode_uint(*value),
    }
}

/// Encode an address: the network prefix is dropped and the 20-byte
/// payload is left-padded with zeros
pub fn encode_address(address: &Address) -> AbiSlot {
    let mut buf = [0u8; SLOT_LEN];
    buf[12..].copy_from_slice(address.payload());
    AbiSlot::from_bytes(buf)
}

/// Parse an address in the stated representation and encode it
pub fn encode_address_str(address: &str, repr: AddressRepr) -> Result<AbiSlot, AddressError> {
    Ok(encode_address(&Address::parse(address, repr)?))
}

/// Encode an unsigned integer, big-endian, left-padded to 32 bytes
pub fn encode_uint(value: impl Into<U256>) -> AbiSlot {
    let mut buf = [0u8; SLOT_LEN];
    value.into().to_big_endian(&mut buf);
    AbiSlot::from_bytes(buf)
}

/// Encode an arbitrary-precision big-endian unsigned integer
///
/// Leading zero bytes are ignored.
///
/// # Errors
///
/// `ValueTooLarge` if more than 32 significant bytes remain.
pub fn encode_uint_be(bytes: &[u8]) -> Result<AbiSlot, AbiError> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > SLOT_LEN {
        return Err(AbiError::ValueTooLarge(format!(
            "{} significant bytes, slot holds {}",
            significant.len(),
            SLOT_LEN
        )));
    }

    let mut buf = [0u8; SLOT_LEN];
    buf[SLOT_LEN - significant.len()..].copy_from_slice(significant);
    Ok(AbiSlot::from_bytes(buf))
}

/// Concatenate slots in caller order
pub fn concat(slots: &[AbiSlot]) -> ParameterBlock {
    slots.iter().copied().collect()
}

/// Multiply a base-unit amount by `scale`, failing instead of wrapping
pub fn scale_amount(amount: U256, scale: u64) -> Result<U256, AbiError> {
    amount
        .checked_mul(U256::from(scale))
        .ok_or_else(|| {
            AbiError::ValueTooLarge(format!("{} * {} overflows 256 bits", amount, scale))
        })
}
