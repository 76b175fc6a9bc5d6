//! Classification result and options model.

use alloc::string::String;
use alloc::vec::Vec;

use crate::network::Network;

/// Address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Legacy pay-to-pubkey-hash
    P2PKH,
    /// Legacy pay-to-script-hash
    P2SH,
    /// Witness v0 pay-to-witness-pubkey-hash
    P2WPKH,
    /// Witness v0 pay-to-witness-script-hash
    P2WSH,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
        }
    }
}

/// Address string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Base58Check
    Base58,
    /// Bech32
    Bech32,
}

impl Encoding {
    /// Get the display name for this encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Base58 => "base58",
            Encoding::Bech32 => "bech32",
        }
    }
}

/// Classification errors.
///
/// Every kind except [`ErrorKind::MisspelledAddress`] is terminal for the
/// call that produced it; a misspelled address is still a successful, final
/// classification that carries suspect character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The string is longer than any legal address of its encoding.
    AddressTooLong,
    /// The decoded payload has the wrong length.
    LengthMismatch,
    /// The decoded version byte matches no known type on this network.
    TypeMismatch,
    /// Checksum failure with no positional data available.
    ChecksumMismatch,
    /// Checksum failure localized to specific characters (soft).
    MisspelledAddress,
    /// The checksum machinery could not operate on this input.
    UndeterminedType,
    /// Neither encoding's prefix and charset rules match.
    NoMatch,
}

impl ErrorKind {
    /// Whether classification still succeeded despite this error.
    pub fn is_soft(&self) -> bool {
        matches!(self, ErrorKind::MisspelledAddress)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::AddressTooLong => write!(f, "Address is too long."),
            ErrorKind::LengthMismatch => write!(f, "Address payload length is invalid."),
            ErrorKind::TypeMismatch => write!(f, "Address version is unknown."),
            ErrorKind::ChecksumMismatch => write!(f, "Address checksum does not match."),
            ErrorKind::MisspelledAddress => write!(f, "Address appears to be misspelled."),
            ErrorKind::UndeterminedType => write!(f, "Could not determine address type."),
            ErrorKind::NoMatch => write!(f, "Could not find address."),
        }
    }
}

/// The result of classifying a single input string.
///
/// A fresh, independent value is produced per call; unknown fields stay
/// `None` while the input is too short to pin them down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    /// The exact input that was classified (may be partial).
    pub address: String,
    /// Detected network, if any.
    pub network: Option<Network>,
    /// Detected or provisional address type, if any.
    pub address_type: Option<AddressType>,
    /// Detected encoding, if any.
    pub encoding: Option<Encoding>,
    /// Decoded base58 version byte, once a full decode has run.
    pub version: Option<u8>,
    /// Whether checksum verification has actually run (successfully or not).
    pub is_final: bool,
    /// Why the string cannot be (or is unlikely to be) a valid address.
    pub error: Option<ErrorKind>,
    /// Character offsets suspected of a checksum mismatch (bech32 only),
    /// in ascending order.
    pub error_positions: Vec<usize>,
}

impl ClassificationResult {
    /// Create the zeroed result: nothing detected, nothing wrong.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the input decoded and verified as a complete address.
    pub fn is_valid(&self) -> bool {
        self.is_final && self.error.is_none()
    }
}

/// Options controlling a classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Restrict prefix scanning to one network; strings shaped for another
    /// network then classify as no match.
    pub expected_network: Option<Network>,
    /// Whether to pay for bech32 checksum-error localization. When off, a
    /// failing checksum reports a bare mismatch with no positions.
    pub want_error_positions: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            expected_network: None,
            want_error_positions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_zeroed() {
        let result = ClassificationResult::empty();
        assert_eq!(result.address, "");
        assert_eq!(result.network, None);
        assert_eq!(result.address_type, None);
        assert_eq!(result.encoding, None);
        assert_eq!(result.version, None);
        assert!(!result.is_final);
        assert_eq!(result.error, None);
        assert!(result.error_positions.is_empty());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_error_messages() {
        use alloc::string::ToString;

        assert_eq!(ErrorKind::NoMatch.to_string(), "Could not find address.");
        assert_eq!(ErrorKind::AddressTooLong.to_string(), "Address is too long.");
        assert!(ErrorKind::MisspelledAddress.is_soft());
        assert!(!ErrorKind::ChecksumMismatch.is_soft());
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.expected_network, None);
        assert!(options.want_error_positions);
    }
}
