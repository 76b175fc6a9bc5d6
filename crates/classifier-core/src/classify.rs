//! The classification entry point.

use alloc::string::ToString;

use crate::base58::parse_base58;
use crate::bech32::parse_bech32;
use crate::result::{ClassificationResult, ErrorKind, ParseOptions};

/// What one encoding path concluded about an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The prefix/charset rules say this is not the path's encoding at all;
    /// the next encoding should be tried.
    NotThisEncoding,
    /// The string is shaped for this encoding but violates a hard
    /// constraint; no other encoding is tried.
    Malformed(ClassificationResult),
    /// A classification, possibly provisional, possibly carrying the soft
    /// misspelling error.
    Recognized(ClassificationResult),
}

/// Classify an address string.
///
/// Pure and total: every input maps to a fresh [`ClassificationResult`],
/// and errors come back as data on the result rather than unwinding. Base58
/// is tried first; a string that is base58-shaped but broken is never
/// retried as bech32. When neither encoding's prefix rules match, the
/// result is the zeroed record with [`ErrorKind::NoMatch`], the normal
/// outcome for arbitrary typed text rather than an exceptional one.
pub fn classify(address: &str, options: ParseOptions) -> ClassificationResult {
    if address.is_empty() {
        return ClassificationResult::empty();
    }

    match parse_base58(address, options) {
        ParseOutcome::Recognized(result) | ParseOutcome::Malformed(result) => return result,
        ParseOutcome::NotThisEncoding => {}
    }

    match parse_bech32(address, options) {
        ParseOutcome::Recognized(result) | ParseOutcome::Malformed(result) => result,
        ParseOutcome::NotThisEncoding => ClassificationResult {
            address: address.to_string(),
            error: Some(ErrorKind::NoMatch),
            ..ClassificationResult::empty()
        },
    }
}
