// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{identifier::InvalidIdentifierError, language_storage::TypeTag};
use thiserror::Error;

/// Errors produced while turning hex or raw bytes into ABIs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("Malformed hex input: {0}")]
    MalformedHex(String),
    #[error("Truncated buffer at offset {offset}: {needed} bytes needed, {remaining} remaining")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("Invalid UTF-8 in string field at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("Unknown type tag {tag:#04x} at offset {offset}")]
    UnknownTypeTag { tag: u8, offset: usize },
    #[error("Found {0} trailing bytes after the ABI record")]
    TrailingBytes(usize),
    #[error("Malformed length prefix at offset {offset}: {reason}")]
    MalformedLength { offset: usize, reason: &'static str },
    #[error("Type tag nesting exceeds the maximum depth of {0}")]
    MaxDepthExceeded(usize),
    #[error("Invalid identifier at offset {offset}: {name:?}")]
    InvalidIdentifier { name: String, offset: usize },
    #[error("Unknown ABI kind {0:#04x}")]
    UnknownAbiKind(u8),
    #[error("Expected an entry function ABI, found transaction script ABI {0:?}")]
    NotAnEntryFunction(String),
}

/// Errors produced while building a transaction payload from an ABI.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No ABI registered for function {0}")]
    UnknownFunction(String),
    #[error("Function {function} expects {expected} type arguments, {actual} were supplied")]
    TypeArgumentCountMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },
    #[error("Function {function} expects {expected} arguments, {actual} were supplied")]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },
    #[error("Argument {index} ({name}) does not match the expected type {expected}: {reason}")]
    ArgumentTypeMismatch {
        index: usize,
        name: String,
        expected: TypeTag,
        reason: String,
    },
    #[error("Type {0} cannot be passed as a transaction argument")]
    UnsupportedArgumentType(TypeTag),
    #[error("Failed to parse {0}")]
    Parse(#[from] ParseError),
    #[error("Failed to serialize argument {index}: {error}")]
    Serialization {
        index: usize,
        #[source]
        error: bcs::Error,
    },
}

/// Errors produced while parsing type tags and function identifiers from strings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input in {0:?}")]
    UnexpectedEnd(String),
    #[error("Unexpected token {token:?} at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
    #[error("Invalid address {literal:?}: {reason}")]
    InvalidAddress { literal: String, reason: String },
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),
    #[error("Invalid function identifier {0:?}, expected <address>::<module>::<function>")]
    InvalidFunctionId(String),
    #[error("Type tag nesting exceeds the maximum depth of {0}")]
    MaxDepthExceeded(usize),
}
