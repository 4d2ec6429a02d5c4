// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! An identifier is the name of an entity (module, resource, function, etc) in Move.
//!
//! A valid identifier consists of an ASCII string which satisfies any of the conditions:
//!
//! * The first character is a letter and the remaining characters are letters, digits or
//!   underscores.
//! * The first character is an underscore, and there is at least one further letter, digit or
//!   underscore.

use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};
use thiserror::Error;

/// Returns `true` if all bytes in `b` after the offset `start_offset` are valid
/// ASCII identifier characters.
fn all_bytes_valid(b: &[u8], start_offset: usize) -> bool {
    b[start_offset..]
        .iter()
        .all(|c| c.is_ascii_alphanumeric() || *c == b'_')
}

/// Describes what identifiers are allowed.
pub const fn is_valid_identifier_char(c: char) -> bool {
    matches!(c, '_' | 'a'..='z' | 'A'..='Z' | '0'..='9')
}

/// Returns `true` if the string is a valid Move identifier.
pub fn is_valid(s: &str) -> bool {
    let b = s.as_bytes();
    match b {
        [b'a'..=b'z', ..] | [b'A'..=b'Z', ..] => all_bytes_valid(b, 1),
        [b'_', _, ..] => all_bytes_valid(b, 1),
        _ => false,
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid identifier '{0}'")]
pub struct InvalidIdentifierError(pub String);

/// An owned identifier.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Creates a new `Identifier` instance.
    pub fn new(s: impl Into<Box<str>>) -> Result<Self, InvalidIdentifierError> {
        let s = s.into();
        if is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidIdentifierError(s.into_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidIdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.into_string()
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

/// Constructs an `Identifier` from a string literal known to be valid.
#[macro_export]
macro_rules! ident_str {
    ($ident:expr) => {
        $crate::identifier::Identifier::new($ident).expect("identifier literal must be valid")
    };
}

#[cfg(test)]
mod tests {
    use super::{Identifier, is_valid};

    #[test]
    fn test_valid_identifiers() {
        for s in ["foo", "FOO", "Foo", "foo0", "FOO_0", "_foo", "_0", "coin_type", "a"] {
            assert!(is_valid(s), "{} should be valid", s);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for s in ["", "_", "0", "0foo", "foo-bar", "foo bar", "::", "vector<u8>", "ü"] {
            assert!(!is_valid(s), "{} should be invalid", s);
            assert!(Identifier::new(s).is_err());
        }
    }

    #[test]
    fn test_bcs_rejects_invalid_identifier() {
        let bytes = bcs::to_bytes("0bad").unwrap();
        assert!(bcs::from_bytes::<Identifier>(&bytes).is_err());
        let bytes = bcs::to_bytes("coin").unwrap();
        assert_eq!(bcs::from_bytes::<Identifier>(&bytes).unwrap(), "coin");
    }
}
