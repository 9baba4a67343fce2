//! Property tests for the address codec
//!
//! Covers the hex ⇄ Base58Check round trip and checksum rejection.

use proptest::prelude::*;
use tron_primitives::{
    base58, hex_to_base58check, normalize_to_hex, Address, AddressError, AddressRepr,
    BASE58_ADDRESS_LEN,
};

fn prefixed_hex(payload: &[u8; 20]) -> String {
    format!("41{}", hex::encode(payload))
}

proptest! {
    #[test]
    fn hex_base58_hex_is_identity(payload in any::<[u8; 20]>()) {
        let hex_form = prefixed_hex(&payload);
        let b58 = hex_to_base58check(&hex_form).unwrap();
        prop_assert_eq!(b58.len(), BASE58_ADDRESS_LEN);
        prop_assert!(b58.starts_with('T'));

        let back = normalize_to_hex(&b58, AddressRepr::Base58Check).unwrap();
        prop_assert_eq!(back, hex_form);
    }

    #[test]
    fn base58_hex_base58_is_identity(payload in any::<[u8; 20]>()) {
        let b58 = Address::from_payload(payload).to_base58check();
        let hex_form = normalize_to_hex(&b58, AddressRepr::Base58Check).unwrap();
        let again = hex_to_base58check(&hex_form).unwrap();
        prop_assert_eq!(again, b58);
    }

    #[test]
    fn corrupted_checksum_is_rejected(
        payload in any::<[u8; 20]>(),
        idx in 0usize..base58::CHECKSUM_LEN,
        mask in 1u8..=255,
    ) {
        let b58 = Address::from_payload(payload).to_base58check();
        let mut raw = bs58::decode(&b58).into_vec().unwrap();
        raw[Address::LEN + idx] ^= mask;

        let tampered = bs58::encode(raw).into_string();
        prop_assert_eq!(
            Address::from_base58check(&tampered),
            Err(AddressError::InvalidChecksum)
        );
    }
}

#[test]
fn base58_decode_strips_checksum() {
    let addr = Address::from_payload([7u8; 20]);
    let decoded = base58::decode_check(&addr.to_base58check()).unwrap();
    assert_eq!(decoded, addr.to_bytes().to_vec());
}
