//! # Key Derivation and Encoding
//!
//! Deterministic byte-digest derivation keyed by challenge size, plus the
//! hex codec used wherever derived keys cross a text boundary (directory
//! attributes, provisioning payloads, log entries).

pub mod checksum;
pub mod hex;

pub use checksum::{encode_byte_array, encode_user_id};
pub use hex::{hex_decode, hex_encode};
