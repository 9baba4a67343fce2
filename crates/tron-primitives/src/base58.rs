//! Base58Check encoding (Bitcoin alphabet, double SHA-256 checksum)

use crate::address::AddressError;

/// Length of the Base58Check checksum in bytes
pub const CHECKSUM_LEN: usize = 4;

/// Encode `payload ‖ checksum(payload)` as Base58
pub fn encode_check(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decode a Base58Check string and return the payload without its checksum
///
/// # Errors
///
/// - `InvalidEncoding` if the string contains characters outside the Base58 alphabet
/// - `InvalidLength` if the decoded data is too short to carry a checksum
/// - `InvalidChecksum` if the trailing four bytes do not match the payload
pub fn decode_check(s: &str) -> Result<Vec<u8>, AddressError> {
    bs58::decode(s)
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => AddressError::InvalidChecksum,
            bs58::decode::Error::NoChecksum => {
                let len = bs58::decode(s).into_vec().map(|raw| raw.len()).unwrap_or(0);
                AddressError::InvalidLength(len)
            }
            other => AddressError::InvalidEncoding(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_check() {
        let payload = b"tron";
        let encoded = encode_check(payload);
        assert_eq!(decode_check(&encoded).unwrap(), payload.to_vec());
    }

    #[test]
    fn test_checksum_is_double_sha256_prefix() {
        // base58check of 0x00 is "1Wh4bh" (checksum 0x1406e058)
        assert_eq!(encode_check(&[0u8]), "1Wh4bh");
        let raw = bs58::decode("1Wh4bh").into_vec().unwrap();
        assert_eq!(raw, vec![0x00, 0x14, 0x06, 0xe0, 0x58]);
    }

    #[test]
    fn test_decode_check_bad_alphabet() {
        // '0', 'O', 'I' and 'l' are not in the Bitcoin alphabet
        match decode_check("0OIl") {
            Err(AddressError::InvalidEncoding(_)) => {}
            other => panic!("Expected InvalidEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_check_too_short() {
        let encoded = bs58::encode([1u8, 2, 3]).into_string();
        match decode_check(&encoded) {
            Err(AddressError::InvalidLength(3)) => {}
            other => panic!("Expected InvalidLength(3), got {:?}", other),
        }
    }

    #[test]
    fn test_decode_check_flipped_checksum() {
        let mut raw = bs58::decode(encode_check(b"payload")).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;

        let encoded = bs58::encode(raw).into_string();
        match decode_check(&encoded) {
            Err(AddressError::InvalidChecksum) => {}
            other => panic!("Expected InvalidChecksum, got {:?}", other),
        }
    }
}
