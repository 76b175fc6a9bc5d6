//! Static prefix tables and character sets for address classification.
//!
//! These tables are the compatibility surface of the classifier: they decide
//! which strings can classify as addresses of which network at all, so they
//! track the consensus parameters of the supported networks.

use crate::network::Network;
use crate::result::AddressType;

/// Base58 alphabet (no 0, O, I or l).
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Bech32 data alphabet.
pub const BECH32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Shortest base58 string worth a full decode attempt.
pub const MIN_BASE58_DECODE_LENGTH: usize = 33;

/// Longest legal base58 address for every prefix except testnet script-hash.
pub const MAX_BASE58_LENGTH: usize = 34;

/// Testnet script-hash version (0xc4) payloads always encode to 35 characters.
pub const TESTNET_P2SH_LENGTH: usize = 35;

/// Decoded Base58Check payload: version byte + 20-byte hash + 4-byte checksum.
pub const BASE58_CHECK_PAYLOAD_LENGTH: usize = 25;

/// Complete witness-pubkey-hash address length (v0, 20-byte program).
pub const WITNESS_PUBKEY_HASH_LENGTH: usize = 42;

/// Complete witness-script-hash address length (v0, 32-byte program).
pub const WITNESS_SCRIPT_HASH_LENGTH: usize = 62;

/// Longest legal bech32 address.
pub const MAX_BECH32_LENGTH: usize = WITNESS_SCRIPT_HASH_LENGTH;

/// Map a base58 leading character to its network and provisional type.
///
/// The type is only a guess until the version byte is decoded; testnet `m`
/// and `n` both carry the 0x6f pubkey-hash version.
pub fn base58_prefix(c: u8) -> Option<(Network, AddressType)> {
    match c {
        b'1' => Some((Network::Mainnet, AddressType::P2PKH)),
        b'3' => Some((Network::Mainnet, AddressType::P2SH)),
        b'm' | b'n' => Some((Network::Testnet, AddressType::P2PKH)),
        b'2' => Some((Network::Testnet, AddressType::P2SH)),
        b'R' => Some((Network::Regtest, AddressType::P2PKH)),
        b'G' => Some((Network::Regtest, AddressType::P2SH)),
        b'S' => Some((Network::Simnet, AddressType::P2PKH)),
        b'r' => Some((Network::Simnet, AddressType::P2SH)),
        _ => None,
    }
}

/// Map a decoded version byte to the authoritative type for `network`.
pub fn base58_version(network: Network, version: u8) -> Option<AddressType> {
    if version == network.p2pkh_version() {
        Some(AddressType::P2PKH)
    } else if version == network.p2sh_version() {
        Some(AddressType::P2SH)
    } else {
        None
    }
}

/// Match a (possibly partial) bech32 prefix against the network table.
///
/// Complete prefixes are the human-readable part, the separator and the
/// witness-version character: `bc1q`, `tb1q`, `rb1q`, `sb1q` (only witness
/// version 0 is recognized). Inputs shorter than four characters match on
/// what is present, so a single `b` already infers the main network. The
/// comparison is case-insensitive.
pub fn bech32_prefix(s: &str, expected: Option<Network>) -> Option<Network> {
    let bytes = s.as_bytes();
    for network in Network::ALL {
        if let Some(want) = expected {
            if want != network {
                continue;
            }
        }
        let hrp = network.bech32_hrp().as_bytes();
        let prefix = [hrp[0], hrp[1], b'1', b'q'];
        let take = bytes.len().min(prefix.len());
        if bytes[..take].eq_ignore_ascii_case(&prefix[..take]) {
            return Some(network);
        }
    }
    None
}

/// Test whether a byte belongs to the base58 alphabet.
pub fn is_base58_char(c: u8) -> bool {
    BASE58_ALPHABET.contains(&c)
}

/// Test whether a byte belongs to the bech32 alphabet (either case).
pub fn is_bech32_char(c: u8) -> bool {
    BECH32_CHARSET.contains(&c.to_ascii_lowercase())
}
