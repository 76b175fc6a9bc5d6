//! Incremental cryptocurrency address classification.
//!
//! This crate provides pure Rust implementations of:
//! - Live classification of a (possibly partial) address string into
//!   network, address type and encoding
//! - Base58Check decoding with version-byte and checksum verification
//! - Bech32 (witness v0) checksum verification with error localization
//! - SHA256 double-hashing for the Base58Check checksum

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod base58;
pub mod bech32;
pub mod classify;
pub mod hash;
pub mod network;
pub mod result;
pub mod tables;

pub use classify::{classify, ParseOutcome};
pub use network::Network;
pub use result::{AddressType, ClassificationResult, Encoding, ErrorKind, ParseOptions};
