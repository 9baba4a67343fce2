//! ABI parameter encoding and constant-result decoding
//!
//! Only the shapes the wallet API needs are supported: address and
//! unsigned-integer arguments, and uint / address / single dynamic string
//! results. Function selectors are sent as text and resolved by the node.
//!
//! # Example
//!
//! ```rust
//! use tron_sdk::abi::{encode, decode_uint, Token};
//! use tron_primitives::{Address, U256};
//!
//! // Encode transfer(address,uint256) arguments
//! let to = Address::ZERO;
//! let params = encode(&[Token::Address(to), Token::Uint(U256::from(1000))]);
//! assert_eq!(params.to_hex().len(), 128);
//!
//! // Decode a balanceOf result slot
//! let balance = decode_uint(&format!("{:064x}", 1000)).unwrap();
//! assert_eq!(balance, U256::from(1000));
//! ```

mod decode;
mod encode;
mod types;

pub use decode::{
    decode, decode_address, decode_dynamic_string, decode_revert_message, decode_uint, uint_to_u64,
};
pub use encode::{
    concat, encode, encode_address, encode_address_str, encode_token, encode_uint, encode_uint_be,
    scale_amount,
};
pub use types::{
    AbiError, AbiSlot, DecodedValue, ParamType, ParameterBlock, Token, SLOT_HEX_LEN, SLOT_LEN,
};
