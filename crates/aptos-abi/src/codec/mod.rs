// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Binary codec for ABI artifacts.
//!
//! The layout is the BCS encoding of the compiler's ABI records: variable length fields are
//! prefixed with a ULEB128 length, addresses are 32 raw bytes and type tags start with a single
//! discriminant byte. `AbiReader` walks the input with a cursor and `AbiWriter` produces the
//! exact inverse.

mod reader;
mod writer;

pub use reader::AbiReader;
pub use writer::AbiWriter;

use crate::errors::AbiError;

/// Decodes a hex string (either case, no `0x` prefix) into bytes.
pub fn from_hex(hex: &str) -> Result<Vec<u8>, AbiError> {
    hex::decode(hex).map_err(|error| AbiError::MalformedHex(error.to_string()))
}

/// Encodes bytes as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
