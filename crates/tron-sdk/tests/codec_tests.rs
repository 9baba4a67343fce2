//! Parameter encoding and result decoding through the public API

use proptest::prelude::*;
use tron_sdk::abi::{
    concat, decode, decode_dynamic_string, decode_uint, encode, encode_address,
    encode_address_str, encode_uint, AbiError, DecodedValue, ParamType, Token,
};
use tron_sdk::{Address, AddressRepr, U256};

const USDT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
const USDT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

// ==================== Encoding Tests ====================

#[test]
fn test_address_slot_independent_of_representation() {
    let from_b58 = encode_address_str(USDT, AddressRepr::Base58Check).unwrap();
    let from_hex = encode_address_str(USDT_HEX, AddressRepr::Hex).unwrap();
    assert_eq!(from_b58, from_hex);
    assert_eq!(
        from_b58.to_hex(),
        format!("{}{}", "0".repeat(24), &USDT_HEX[2..])
    );
}

#[test]
fn test_address_slot_rejects_wrong_repr() {
    assert!(encode_address_str(USDT, AddressRepr::Hex).is_err());
    assert!(encode_address_str(USDT_HEX, AddressRepr::Base58Check).is_err());
}

#[test]
fn test_transfer_parameter_block() {
    let to = Address::parse(USDT, AddressRepr::Base58Check).unwrap();
    let block = encode(&[Token::Address(to), Token::Uint(U256::from(255u64))]);

    assert_eq!(block.len(), 2);
    assert_eq!(block, concat(&[encode_address(&to), encode_uint(255u64)]));

    let hex = block.to_hex();
    assert_eq!(hex.len(), 128);
    assert!(hex.ends_with(&format!("{}ff", "0".repeat(62))));
}

// ==================== Decoding Tests ====================

#[test]
fn test_decode_string_vector() {
    let blob = format!(
        "{}{}{}",
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000004",
        "7465737400000000000000000000000000000000000000000000000000000000"
    );
    assert_eq!(decode_dynamic_string(&blob).unwrap(), "test");
    assert_eq!(
        decode(ParamType::String, &blob).unwrap(),
        DecodedValue::String("test".to_string())
    );
}

#[test]
fn test_decode_string_rejects_unaligned_blob() {
    let blob = format!("{:064x}{:064x}7465", 0x20, 2);
    assert!(matches!(
        decode_dynamic_string(&blob),
        Err(AbiError::MalformedResult(_))
    ));
}

#[test]
fn test_decode_string_rejects_other_offset() {
    let blob = format!("{:064x}{:064x}{:064x}", 0x40, 0, 0);
    assert!(matches!(
        decode_dynamic_string(&blob),
        Err(AbiError::UnsupportedLayout(_))
    ));
}

#[test]
fn test_decode_uint_rejects_non_hex() {
    let slot = format!("{}g", "0".repeat(63));
    assert!(matches!(decode_uint(&slot), Err(AbiError::MalformedHex(_))));
}

#[test]
fn test_decode_address_round_trip() {
    let address = Address::parse(USDT_HEX, AddressRepr::Hex).unwrap();
    let slot = encode_address(&address).to_hex();
    assert_eq!(
        decode(ParamType::Address, &slot).unwrap(),
        DecodedValue::Address(address)
    );
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_uint_slot_round_trip(words in any::<[u64; 4]>()) {
        let value = U256(words);
        let slot = encode_uint(value).to_hex();
        prop_assert_eq!(slot.len(), 64);
        prop_assert_eq!(decode_uint(&slot).unwrap(), value);
    }

    #[test]
    fn prop_string_decodes_ascii(s in "[a-zA-Z0-9]{0,80}") {
        let data = hex::encode(s.as_bytes());
        let padded_len = (data.len() + 63) / 64 * 64;
        let blob = format!(
            "{:064x}{:064x}{:0<width$}",
            0x20,
            s.len(),
            data,
            width = padded_len
        );
        prop_assert_eq!(decode_dynamic_string(&blob).unwrap(), s);
    }
}
