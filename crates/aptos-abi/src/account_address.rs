// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A struct that represents an account address.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccountAddress([u8; AccountAddress::LENGTH]);

impl AccountAddress {
    /// The number of bytes in an address.
    pub const LENGTH: usize = 32;
    /// Hex address: 0x0
    pub const ZERO: Self = Self::from_suffix(0);
    /// Hex address: 0x1
    pub const ONE: Self = Self::from_suffix(1);
    /// Hex address: 0x3
    pub const THREE: Self = Self::from_suffix(3);

    pub const fn new(address: [u8; Self::LENGTH]) -> Self {
        Self(address)
    }

    const fn from_suffix(suffix: u8) -> Self {
        let mut addr = [0u8; Self::LENGTH];
        addr[Self::LENGTH - 1] = suffix;
        Self(addr)
    }

    /// Parses an address from a hex literal, which must be prefixed with `0x`. Short forms such
    /// as `0x1` are left-padded with zeros.
    pub fn from_hex_literal(literal: &str) -> Result<Self, AccountAddressParseError> {
        let hex = literal
            .strip_prefix("0x")
            .ok_or_else(|| AccountAddressParseError::MissingPrefix(literal.to_string()))?;
        if hex.is_empty() || hex.len() > Self::LENGTH * 2 {
            return Err(AccountAddressParseError::InvalidLength(hex.len()));
        }

        let mut padded = String::with_capacity(Self::LENGTH * 2);
        padded.extend(std::iter::repeat_n('0', Self::LENGTH * 2 - hex.len()));
        padded.push_str(hex);
        Self::from_hex(padded)
    }

    /// Parses an address from exactly 64 hex characters (no prefix).
    pub fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, AccountAddressParseError> {
        let mut addr = [0u8; Self::LENGTH];
        hex::decode_to_slice(hex, &mut addr)
            .map_err(|error| AccountAddressParseError::InvalidHex(error.to_string()))?;
        Ok(Self(addr))
    }

    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> Result<Self, AccountAddressParseError> {
        <[u8; Self::LENGTH]>::try_from(bytes.as_ref())
            .map(Self)
            .map_err(|_| AccountAddressParseError::InvalidLength(bytes.as_ref().len() * 2))
    }

    /// Returns the shortest `0x`-prefixed hex representation of the address, e.g. `0x1`.
    pub fn to_hex_literal(&self) -> String {
        let hex = hex::encode(self.0);
        let trimmed = hex.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    /// Returns the full 64 character `0x`-prefixed representation of the address.
    pub fn to_standard_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn into_bytes(self) -> [u8; Self::LENGTH] {
        self.0
    }

    pub fn is_special(&self) -> bool {
        self.0[..Self::LENGTH - 1].iter().all(|byte| *byte == 0) && self.0[Self::LENGTH - 1] < 0x10
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_literal())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_literal())
    }
}

impl FromStr for AccountAddress {
    type Err = AccountAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            Self::from_hex_literal(s)
        } else {
            Self::from_hex(s)
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccountAddressParseError {
    #[error("Hex literal must start with 0x: {0:?}")]
    MissingPrefix(String),
    #[error("Address must have between 1 and 64 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::AccountAddress;
    use std::str::FromStr;

    #[test]
    fn test_short_and_long_forms() {
        let short = AccountAddress::from_hex_literal("0x1").unwrap();
        let long = AccountAddress::from_str(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(short, long);
        assert_eq!(short, AccountAddress::ONE);
        assert_eq!(short.to_hex_literal(), "0x1");
        assert_eq!(
            short.to_standard_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(AccountAddress::ZERO.to_string(), "0x0");
        assert!(AccountAddress::THREE.is_special());
    }

    #[test]
    fn test_invalid_literals() {
        assert!(AccountAddress::from_hex_literal("1").is_err());
        assert!(AccountAddress::from_hex_literal("0x").is_err());
        assert!(AccountAddress::from_hex_literal("0xzz").is_err());
        assert!(AccountAddress::from_hex_literal(&format!("0x{}", "1".repeat(65))).is_err());
        assert!(AccountAddress::from_bytes([0u8; 31]).is_err());
    }

    #[test]
    fn test_bcs_is_raw_bytes() {
        let bytes = bcs::to_bytes(&AccountAddress::ONE).unwrap();
        assert_eq!(bytes.len(), AccountAddress::LENGTH);
        assert_eq!(bytes[AccountAddress::LENGTH - 1], 1);
    }
}
