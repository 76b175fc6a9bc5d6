//! Base58Check decoding and the base58 classification path.

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::classify::ParseOutcome;
use crate::hash::double_sha256;
use crate::network::Network;
use crate::result::{AddressType, ClassificationResult, Encoding, ErrorKind, ParseOptions};
use crate::tables::{
    base58_prefix, base58_version, is_base58_char, BASE58_ALPHABET, BASE58_CHECK_PAYLOAD_LENGTH,
    MAX_BASE58_LENGTH, MIN_BASE58_DECODE_LENGTH, TESTNET_P2SH_LENGTH,
};

/// Classify a string as a base58 address.
///
/// Declines (`NotThisEncoding`) when the leading character or charset rules
/// out base58 entirely; otherwise the string is committed to this encoding
/// and either classified or reported malformed. Strings shorter than the
/// decode threshold come back provisional: network and a type guess from
/// the leading character, no checksum verdict yet.
pub fn parse_base58(address: &str, options: ParseOptions) -> ParseOutcome {
    let bytes = address.as_bytes();

    let (network, provisional) = match bytes.first().and_then(|&c| base58_prefix(c)) {
        Some(hit) => hit,
        None => return ParseOutcome::NotThisEncoding,
    };
    if let Some(expected) = options.expected_network {
        if expected != network {
            return ParseOutcome::NotThisEncoding;
        }
    }
    if !bytes.iter().all(|&c| is_base58_char(c)) {
        return ParseOutcome::NotThisEncoding;
    }

    let mut result = ClassificationResult {
        address: address.to_string(),
        network: Some(network),
        address_type: Some(provisional),
        encoding: Some(Encoding::Base58),
        ..ClassificationResult::empty()
    };

    // Testnet script-hash payloads (version 0xc4) always encode one
    // character longer than every other prefix.
    let complete_len = match (network, provisional) {
        (Network::Testnet, AddressType::P2SH) => TESTNET_P2SH_LENGTH,
        _ => MAX_BASE58_LENGTH,
    };
    let decode_min = match complete_len {
        TESTNET_P2SH_LENGTH => TESTNET_P2SH_LENGTH,
        _ => MIN_BASE58_DECODE_LENGTH,
    };

    if bytes.len() > complete_len {
        result.error = Some(ErrorKind::AddressTooLong);
        return ParseOutcome::Malformed(result);
    }
    if bytes.len() < decode_min {
        return ParseOutcome::Recognized(result);
    }

    // Long enough for the real thing: decode and verify.
    result.is_final = true;
    let payload = match decode(address) {
        Some(payload) => payload,
        None => return ParseOutcome::NotThisEncoding,
    };
    if payload.len() != BASE58_CHECK_PAYLOAD_LENGTH {
        result.error = Some(ErrorKind::LengthMismatch);
        return ParseOutcome::Malformed(result);
    }

    let version = payload[0];
    match base58_version(network, version) {
        Some(authoritative) => {
            result.address_type = Some(authoritative);
            result.version = Some(version);
        }
        None => {
            result.error = Some(ErrorKind::TypeMismatch);
            return ParseOutcome::Malformed(result);
        }
    }

    let (body, checksum) = payload.split_at(BASE58_CHECK_PAYLOAD_LENGTH - 4);
    if checksum != &double_sha256(body)[..4] {
        result.error = Some(ErrorKind::ChecksumMismatch);
        return ParseOutcome::Malformed(result);
    }

    ParseOutcome::Recognized(result)
}

/// Decode a base58 string into bytes.
///
/// Returns `None` if the input contains a character outside the alphabet.
/// Leading `1`s decode to leading zero bytes.
pub fn decode(input: &str) -> Option<Vec<u8>> {
    let mut result: Vec<u8> = Vec::new();

    let leading_ones = input.bytes().take_while(|&c| c == b'1').count();

    for c in input.bytes() {
        let value = BASE58_ALPHABET.iter().position(|&x| x == c)? as u32;

        // Multiply result by 58 and add value
        let mut carry = value;
        for byte in result.iter_mut().rev() {
            let temp = (*byte as u32) * 58 + carry;
            *byte = (temp & 0xff) as u8;
            carry = temp >> 8;
        }

        while carry > 0 {
            result.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; leading_ones];
    decoded.extend(result);

    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture pubkey-hash 0xa58f…5edd under each network's versions.
    const MAIN_P2PKH: &str = "1G6QWmmSxRnx7p87XAToXpB1dfytmndM8C";
    const TESTNET_P2SH: &str = "2N8LdW4Bv7ncgQmT6KPkGaPXCzYUn8CSSH9";

    #[test]
    fn test_decode_known_payload() {
        let payload = decode(MAIN_P2PKH).unwrap();
        let expected =
            hex::decode("00a58f98303ff1c03019eb5c7f11b89e8c278a5edd29159221").unwrap();
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_decode_rejects_bad_char() {
        assert_eq!(decode("10OIl"), None);
        assert_eq!(decode("abc0"), None);
    }

    #[test]
    fn test_decode_leading_ones() {
        assert_eq!(decode("111").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_valid_mainnet_p2pkh() {
        let outcome = parse_base58(MAIN_P2PKH, ParseOptions::default());
        match outcome {
            ParseOutcome::Recognized(result) => {
                assert_eq!(result.network, Some(Network::Mainnet));
                assert_eq!(result.address_type, Some(AddressType::P2PKH));
                assert_eq!(result.encoding, Some(Encoding::Base58));
                assert_eq!(result.version, Some(0x00));
                assert!(result.is_final);
                assert_eq!(result.error, None);
            }
            other => panic!("expected recognized result, got {:?}", other),
        }
    }

    #[test]
    fn test_testnet_p2sh_is_35_chars() {
        // Version 0xc4 pushes the encoding to 35 characters; the path must
        // neither reject it as too long nor decode it prematurely at 34.
        assert_eq!(TESTNET_P2SH.len(), 35);

        let partial = &TESTNET_P2SH[..34];
        match parse_base58(partial, ParseOptions::default()) {
            ParseOutcome::Recognized(result) => {
                assert!(!result.is_final);
                assert_eq!(result.address_type, Some(AddressType::P2SH));
            }
            other => panic!("expected provisional result, got {:?}", other),
        }

        match parse_base58(TESTNET_P2SH, ParseOptions::default()) {
            ParseOutcome::Recognized(result) => {
                assert!(result.is_final);
                assert_eq!(result.network, Some(Network::Testnet));
                assert_eq!(result.version, Some(0xc4));
                assert_eq!(result.error, None);
            }
            other => panic!("expected recognized result, got {:?}", other),
        }
    }

    #[test]
    fn test_provisional_prefix() {
        match parse_base58("1G6", ParseOptions::default()) {
            ParseOutcome::Recognized(result) => {
                assert_eq!(result.network, Some(Network::Mainnet));
                assert_eq!(result.address_type, Some(AddressType::P2PKH));
                assert!(!result.is_final);
                assert_eq!(result.version, None);
                assert_eq!(result.error, None);
            }
            other => panic!("expected provisional result, got {:?}", other),
        }
    }

    #[test]
    fn test_not_base58_candidates() {
        // leading char in no table
        assert_eq!(parse_base58("xyz", ParseOptions::default()), ParseOutcome::NotThisEncoding);
        // bech32-only characters rule base58 out
        assert_eq!(
            parse_base58("1abc0def", ParseOptions::default()),
            ParseOutcome::NotThisEncoding
        );
    }

    #[test]
    fn test_too_long_is_fatal() {
        let long = alloc::format!("{}z", MAIN_P2PKH);
        assert_eq!(long.len(), 35);
        match parse_base58(&long, ParseOptions::default()) {
            ParseOutcome::Malformed(result) => {
                assert_eq!(result.error, Some(ErrorKind::AddressTooLong));
                assert_eq!(result.encoding, Some(Encoding::Base58));
                assert!(!result.is_final);
            }
            other => panic!("expected malformed result, got {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch() {
        // 33 ones decode to 33 zero bytes, nothing like a 25-byte payload
        let ones = "1".repeat(33);
        match parse_base58(&ones, ParseOptions::default()) {
            ParseOutcome::Malformed(result) => {
                assert_eq!(result.error, Some(ErrorKind::LengthMismatch));
                assert!(result.is_final);
            }
            other => panic!("expected malformed result, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_version_byte() {
        // Version 0x06 under a mainnet script-hash leading character;
        // the checksum itself is sound, the version byte is not.
        let addr = "3g82RRZBDWaD2QxdfgTiSZojQhXZ73AHgS";
        match parse_base58(addr, ParseOptions::default()) {
            ParseOutcome::Malformed(result) => {
                assert_eq!(result.error, Some(ErrorKind::TypeMismatch));
                assert!(result.is_final);
            }
            other => panic!("expected malformed result, got {:?}", other),
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        // MAIN_P2PKH with one character flipped (position 15, 7 -> X)
        let bad = "1G6QWmmSxRnx7p8XXAToXpB1dfytmndM8C";
        match parse_base58(bad, ParseOptions::default()) {
            ParseOutcome::Malformed(result) => {
                assert_eq!(result.error, Some(ErrorKind::ChecksumMismatch));
                assert_eq!(result.address_type, Some(AddressType::P2PKH));
                assert!(result.is_final);
                assert!(result.error_positions.is_empty());
            }
            other => panic!("expected malformed result, got {:?}", other),
        }
    }

    #[test]
    fn test_expected_network_restriction() {
        let options = ParseOptions {
            expected_network: Some(Network::Testnet),
            ..ParseOptions::default()
        };
        assert_eq!(parse_base58(MAIN_P2PKH, options), ParseOutcome::NotThisEncoding);

        let options = ParseOptions {
            expected_network: Some(Network::Mainnet),
            ..ParseOptions::default()
        };
        assert!(matches!(parse_base58(MAIN_P2PKH, options), ParseOutcome::Recognized(_)));
    }
}
