// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! ABIs describe the signature of callable Move code: entry functions published in modules and
//! standalone transaction scripts. They are produced by the compiler as one artifact per
//! function and are immutable once decoded.

use crate::{
    account_address::AccountAddress,
    codec::{self, AbiReader, AbiWriter},
    errors::AbiError,
    identifier::Identifier,
    language_storage::{ModuleId, TypeTag},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The ABI of a piece of Move code that can be invoked by a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptABI {
    /// A transaction script, carrying its own bytecode.
    TransactionScript(TransactionScriptABI),
    /// An entry function published in a module.
    EntryFunction(EntryFunctionABI),
}

/// The ABI of an entry function published on chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionABI {
    name: Identifier,
    module_name: ModuleId,
    doc: String,
    ty_args: Vec<TypeArgumentABI>,
    args: Vec<ArgumentABI>,
}

/// The ABI of a transaction script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionScriptABI {
    name: String,
    #[serde(with = "serde_bytes")]
    code: Vec<u8>,
    doc: String,
    ty_args: Vec<TypeArgumentABI>,
    args: Vec<ArgumentABI>,
}

/// The description of a (regular) argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentABI {
    name: String,
    type_tag: TypeTag,
}

/// The description of a generic type parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeArgumentABI {
    name: String,
}

impl ScriptABI {
    pub const TRANSACTION_SCRIPT: u8 = 0;
    pub const ENTRY_FUNCTION: u8 = 1;

    /// Decodes a single ABI record. The whole input must be consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AbiError> {
        Self::from_reader(AbiReader::new(bytes))
    }

    /// Like `from_bytes`, but with a custom limit on type tag nesting.
    pub fn from_bytes_with_max_depth(bytes: &[u8], max_depth: usize) -> Result<Self, AbiError> {
        Self::from_reader(AbiReader::new(bytes).with_max_depth(max_depth))
    }

    /// Decodes a record from its hex dump, as found in ABI tables.
    pub fn from_hex(hex: &str) -> Result<Self, AbiError> {
        Self::from_bytes(&codec::from_hex(hex)?)
    }

    fn from_reader(mut reader: AbiReader<'_>) -> Result<Self, AbiError> {
        let abi = reader.read_script_abi()?;
        reader.finish()?;
        debug!(
            name = abi.name(),
            entry_function = abi.is_entry_function(),
            "Decoded ABI"
        );
        Ok(abi)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = AbiWriter::new();
        writer.write_script_abi(self);
        writer.into_bytes()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::TransactionScript(abi) => abi.name(),
            Self::EntryFunction(abi) => abi.name().as_str(),
        }
    }

    pub fn doc(&self) -> &str {
        match self {
            Self::TransactionScript(abi) => abi.doc(),
            Self::EntryFunction(abi) => abi.doc(),
        }
    }

    pub fn ty_args(&self) -> &[TypeArgumentABI] {
        match self {
            Self::TransactionScript(abi) => abi.ty_args(),
            Self::EntryFunction(abi) => abi.ty_args(),
        }
    }

    pub fn args(&self) -> &[ArgumentABI] {
        match self {
            Self::TransactionScript(abi) => abi.args(),
            Self::EntryFunction(abi) => abi.args(),
        }
    }

    pub fn is_entry_function(&self) -> bool {
        matches!(self, Self::EntryFunction(_))
    }
}

impl TryFrom<ScriptABI> for EntryFunctionABI {
    type Error = AbiError;

    fn try_from(abi: ScriptABI) -> Result<Self, Self::Error> {
        match abi {
            ScriptABI::EntryFunction(abi) => Ok(abi),
            ScriptABI::TransactionScript(abi) => Err(AbiError::NotAnEntryFunction(abi.name)),
        }
    }
}

impl EntryFunctionABI {
    pub fn new(
        name: Identifier,
        module_name: ModuleId,
        doc: String,
        ty_args: Vec<TypeArgumentABI>,
        args: Vec<ArgumentABI>,
    ) -> Self {
        Self {
            name,
            module_name,
            doc,
            ty_args,
            args,
        }
    }

    /// Decodes an entry function ABI record, rejecting transaction script records.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AbiError> {
        ScriptABI::from_bytes(bytes)?.try_into()
    }

    pub fn from_hex(hex: &str) -> Result<Self, AbiError> {
        ScriptABI::from_hex(hex)?.try_into()
    }

    /// Encodes the ABI as a complete record, including the leading kind byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = AbiWriter::new();
        writer.write_u8(ScriptABI::ENTRY_FUNCTION);
        writer.write_entry_function_abi(self);
        writer.into_bytes()
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_name
    }

    pub fn module_address(&self) -> &AccountAddress {
        self.module_name.address()
    }

    pub fn module_name(&self) -> &Identifier {
        self.module_name.name()
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The generic type parameters, in declaration order.
    pub fn ty_args(&self) -> &[TypeArgumentABI] {
        &self.ty_args
    }

    pub fn args(&self) -> &[ArgumentABI] {
        &self.args
    }

    pub fn generic_type_params(&self) -> &[TypeArgumentABI] {
        self.ty_args()
    }

    /// The parameter types, in declaration order.
    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &TypeTag> + '_ {
        self.args.iter().map(ArgumentABI::type_tag)
    }

    /// Entry functions cannot return values.
    pub fn returns(&self) -> &[TypeTag] {
        &[]
    }

    /// The fully qualified function id, e.g. `0x1::coin::transfer`.
    pub fn function_id(&self) -> String {
        format!("{}::{}", self.module_name, self.name)
    }
}

impl fmt::Display for EntryFunctionABI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function_id())?;
        if !self.ty_args.is_empty() {
            let ty_args: Vec<_> = self.ty_args.iter().map(TypeArgumentABI::name).collect();
            write!(f, "<{}>", ty_args.join(", "))?;
        }
        let args: Vec<_> = self
            .args
            .iter()
            .map(|arg| format!("{}: {}", arg.name(), arg.type_tag()))
            .collect();
        write!(f, "({})", args.join(", "))
    }
}

impl TransactionScriptABI {
    pub fn new(
        name: String,
        code: Vec<u8>,
        doc: String,
        ty_args: Vec<TypeArgumentABI>,
        args: Vec<ArgumentABI>,
    ) -> Self {
        Self {
            name,
            code,
            doc,
            ty_args,
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn ty_args(&self) -> &[TypeArgumentABI] {
        &self.ty_args
    }

    pub fn args(&self) -> &[ArgumentABI] {
        &self.args
    }
}

impl ArgumentABI {
    pub fn new(name: String, type_tag: TypeTag) -> Self {
        Self { name, type_tag }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }
}

impl TypeArgumentABI {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
