//! Bech32 checksum primitives and the bech32 classification path.
//!
//! Only witness version 0 addresses are recognized, so the accepted
//! prefixes are `bc1q`, `tb1q`, `rb1q` and `sb1q`. Beyond plain checksum
//! verification this module localizes checksum failures: the checksum
//! recurrence is linear over GF(2), so the residue displacement caused by a
//! substitution at a given position is a fixed linear image of its 5-bit
//! delta. Searching the one- and two-substitution displacement space for
//! the observed residue recovers the error positions, and the code's
//! minimum distance makes such an explanation unique when one exists.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::classify::ParseOutcome;
use crate::result::{AddressType, ClassificationResult, Encoding, ErrorKind, ParseOptions};
use crate::tables::{
    bech32_prefix, is_bech32_char, BECH32_CHARSET, MAX_BECH32_LENGTH, WITNESS_PUBKEY_HASH_LENGTH,
    WITNESS_SCRIPT_HASH_LENGTH,
};

const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Outcome of running the checksum-error locator over a complete address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// The checksum verifies.
    Clean,
    /// The residue is explained by substitutions at these data indices.
    Positions(Vec<usize>),
    /// More damage than one or two substitutions can explain.
    Ambiguous,
}

/// Classify a string as a bech32 address.
///
/// Same calling convention as the base58 path: `NotThisEncoding` when the
/// prefix or charset says this cannot be bech32, provisional results while
/// the string is shorter than a complete address, and a checksum verdict at
/// the two complete lengths. A localizable checksum failure is reported as
/// the soft [`ErrorKind::MisspelledAddress`] with the suspect character
/// offsets, keeping the inferred type so a caller can still render its best
/// guess.
pub fn parse_bech32(address: &str, options: ParseOptions) -> ParseOutcome {
    let bytes = address.as_bytes();

    let network = match bech32_prefix(address, options.expected_network) {
        Some(network) => network,
        None => return ParseOutcome::NotThisEncoding,
    };
    // Charset test is case-folded here; the no-mixed-case rule is enforced
    // when the checksum actually runs.
    if bytes.len() > 4 && !bytes[4..].iter().all(|&c| is_bech32_char(c)) {
        return ParseOutcome::NotThisEncoding;
    }

    let mut result = ClassificationResult {
        address: address.to_string(),
        network: Some(network),
        encoding: Some(Encoding::Bech32),
        ..ClassificationResult::empty()
    };

    match bytes.len() {
        len if len > MAX_BECH32_LENGTH => {
            result.error = Some(ErrorKind::AddressTooLong);
            ParseOutcome::Malformed(result)
        }
        len if len < WITNESS_PUBKEY_HASH_LENGTH => {
            // Network known, type not yet determinable.
            ParseOutcome::Recognized(result)
        }
        WITNESS_PUBKEY_HASH_LENGTH => {
            result.address_type = Some(AddressType::P2WPKH);
            verify(result, options)
        }
        WITNESS_SCRIPT_HASH_LENGTH => {
            result.address_type = Some(AddressType::P2WSH);
            verify(result, options)
        }
        _ => {
            // Strictly between the two complete lengths: accumulating
            // toward the script-hash form.
            result.address_type = Some(AddressType::P2WSH);
            ParseOutcome::Recognized(result)
        }
    }
}

/// Run the checksum (and, if requested, the error locator) over a
/// complete-length address and finish the result.
fn verify(mut result: ClassificationResult, options: ParseOptions) -> ParseOutcome {
    result.is_final = true;

    let bytes = result.address.as_bytes();
    let has_lower = bytes.iter().any(|c| c.is_ascii_lowercase());
    let has_upper = bytes.iter().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        // Mixed case never checksums under either folding; refusing to
        // guess positions here beats pointing at innocent characters.
        result.error = Some(ErrorKind::UndeterminedType);
        return ParseOutcome::Malformed(result);
    }

    let folded = result.address.to_ascii_lowercase();
    let (hrp, rest) = folded.split_at(2);
    let mut data = Vec::with_capacity(rest.len() - 1);
    for &c in &rest.as_bytes()[1..] {
        match char_value(c) {
            Some(value) => data.push(value),
            None => {
                result.error = Some(ErrorKind::UndeterminedType);
                return ParseOutcome::Malformed(result);
            }
        }
    }

    if !options.want_error_positions {
        let mut values = hrp_expand(hrp);
        values.extend_from_slice(&data);
        if polymod(&values) == 1 {
            return ParseOutcome::Recognized(result);
        }
        result.error = Some(ErrorKind::ChecksumMismatch);
        return ParseOutcome::Malformed(result);
    }

    match locate_errors(hrp, &data) {
        Located::Clean => ParseOutcome::Recognized(result),
        Located::Positions(indices) => {
            // Data index -> offset in the address string (hrp + separator).
            result.error_positions = indices.iter().map(|t| hrp.len() + 1 + t).collect();
            result.error = Some(ErrorKind::MisspelledAddress);
            ParseOutcome::Recognized(result)
        }
        Located::Ambiguous => {
            result.error = Some(ErrorKind::ChecksumMismatch);
            ParseOutcome::Malformed(result)
        }
    }
}

/// Locate checksum errors in the data part of a bech32 string.
///
/// `data` holds the 5-bit values of every character after the separator,
/// checksum included. Returns the data indices whose substitution explains
/// the residue, preferring a single-character explanation over a pair.
pub fn locate_errors(hrp: &str, data: &[u8]) -> Located {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    let residue = polymod(&values) ^ 1;
    if residue == 0 {
        return Located::Clean;
    }

    // displacement(delta, k): residue change from XORing `delta` into the
    // symbol that has `k` symbols after it. Built as delta shifted through
    // the recurrence k times; indexed [k][delta].
    let m = data.len();
    let mut displacement = Vec::with_capacity(m);
    let mut current: [u32; 32] = [0; 32];
    for (delta, slot) in current.iter_mut().enumerate() {
        *slot = delta as u32;
    }
    for _ in 0..m {
        displacement.push(current);
        for slot in current.iter_mut() {
            *slot = polymod_step(*slot, 0);
        }
    }

    // Single substitution: delta at data index t shows up after m-1-t shifts.
    let mut single: Vec<usize> = Vec::new();
    for t in 0..m {
        if displacement[m - 1 - t].contains(&residue) {
            single.push(t);
        }
    }
    if !single.is_empty() {
        return Located::Positions(single);
    }

    // Pair of substitutions: look for two displacements XORing to the residue.
    let mut table: Vec<(u32, usize)> = Vec::with_capacity(m * 31);
    for t in 0..m {
        for delta in 1..32 {
            table.push((displacement[m - 1 - t][delta], t));
        }
    }
    table.sort_unstable();
    for t1 in 0..m {
        for delta in 1..32 {
            let need = residue ^ displacement[m - 1 - t1][delta];
            let start = table.partition_point(|&(e, _)| e < need);
            for &(e, t2) in &table[start..] {
                if e != need {
                    break;
                }
                if t2 > t1 {
                    return Located::Positions(alloc::vec![t1, t2]);
                }
            }
        }
    }

    Located::Ambiguous
}

/// Expand a human-readable part for checksum computation.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    for c in hrp.bytes() {
        result.push(c >> 5);
    }
    result.push(0);
    for c in hrp.bytes() {
        result.push(c & 31);
    }
    result
}

/// The BIP-173 checksum polynomial; 1 for a valid bech32 string.
pub fn polymod(values: &[u8]) -> u32 {
    values.iter().fold(1, |chk, &value| polymod_step(chk, value))
}

#[inline]
fn polymod_step(chk: u32, value: u8) -> u32 {
    let top = chk >> 25;
    let mut chk = ((chk & 0x1ffffff) << 5) ^ (value as u32);
    for (i, &g) in GEN.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            chk ^= g;
        }
    }
    chk
}

fn char_value(c: u8) -> Option<u8> {
    BECH32_CHARSET.iter().position(|&x| x == c).map(|i| i as u8)
}
