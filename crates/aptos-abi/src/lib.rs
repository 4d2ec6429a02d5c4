// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Decoding of Move entry function ABIs and construction of type checked transaction payloads.
//!
//! ABI artifacts are decoded with [`codec`] into [`abi::EntryFunctionABI`] values, indexed by
//! [`registry::AbiRegistry`] and consumed by [`builder::TransactionBuilderABI`], which turns
//! user supplied arguments into BCS encoded [`transaction::TransactionPayload`]s.

pub mod abi;
pub mod account_address;
pub mod builder;
pub mod cached_abis;
pub mod codec;
pub mod errors;
pub mod identifier;
pub mod language_storage;
pub mod parser;
pub mod registry;
pub mod transaction;
pub mod transaction_argument;
pub mod value;

#[cfg(test)]
mod unit_tests;

pub use abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TransactionScriptABI, TypeArgumentABI};
pub use account_address::AccountAddress;
pub use builder::TransactionBuilderABI;
pub use cached_abis::builtin_registry;
pub use errors::{AbiError, BuildError, ParseError};
pub use registry::AbiRegistry;
pub use transaction::{EntryFunction, TransactionPayload};
pub use value::MoveValue;
