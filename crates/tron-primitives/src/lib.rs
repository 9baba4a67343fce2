//! # tron-primitives
//!
//! Primitive types for Tron-style chains.
//!
//! This crate provides the address type with its two textual forms
//! (Base58Check and hex), the Base58Check helpers behind them, and the
//! 256-bit unsigned integer used for contract arguments and results.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
pub mod base58;

pub use address::{
    base58check_to_hex, hex_to_base58check, normalize_to_hex, Address, AddressError, AddressRepr,
    ADDRESS_PREFIX, BASE58_ADDRESS_LEN, HEX_ADDRESS_LEN,
};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Block height type
pub type BlockHeight = u64;

/// Amount of the native currency in SUN
pub type Sun = u64;

/// Number of SUN in one TRX
pub const SUN_PER_TRX: u64 = 1_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_basic() {
        let a = U256::from(100u64);
        let b = U256::from(200u64);
        assert_eq!(a + b, U256::from(300u64));
    }

    #[test]
    fn test_sun_per_trx() {
        assert_eq!(SUN_PER_TRX, 10u64.pow(6));
    }
}
