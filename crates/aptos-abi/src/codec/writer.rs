// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TransactionScriptABI, TypeArgumentABI},
    account_address::AccountAddress,
    identifier::Identifier,
    language_storage::{ModuleId, StructTag, TypeTag},
};

/// Serializes ABI records into the layout read by `AbiReader`.
#[derive(Debug, Default)]
pub struct AbiWriter {
    out: Vec<u8>,
}

impl AbiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    pub fn write_u8(&mut self, byte: u8) {
        self.out.push(byte);
    }

    /// Writes a ULEB128 length. Lengths that do not fit in a `u32` cannot be represented in the
    /// format and indicate a broken caller.
    pub fn write_uleb128(&mut self, length: usize) {
        let mut value = u32::try_from(length).expect("ABI lengths must fit in a u32");
        while value >= 0x80 {
            self.out.push((value & 0x7f) as u8 | 0x80);
            value >>= 7;
        }
        self.out.push(value as u8);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_uleb128(bytes.len());
        self.out.extend_from_slice(bytes);
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    pub fn write_identifier(&mut self, identifier: &Identifier) {
        self.write_str(identifier.as_str());
    }

    pub fn write_address(&mut self, address: &AccountAddress) {
        self.out.extend_from_slice(address.as_ref());
    }

    pub fn write_module_id(&mut self, module_id: &ModuleId) {
        self.write_address(module_id.address());
        self.write_identifier(module_id.name());
    }

    pub fn write_seq<T>(&mut self, elements: &[T], mut write_element: impl FnMut(&mut Self, &T)) {
        self.write_uleb128(elements.len());
        for element in elements {
            write_element(self, element);
        }
    }

    pub fn write_type_tag(&mut self, type_tag: &TypeTag) {
        self.write_u8(type_tag.discriminant());
        match type_tag {
            TypeTag::Bool
            | TypeTag::U8
            | TypeTag::U64
            | TypeTag::U128
            | TypeTag::Address
            | TypeTag::Signer => (),
            TypeTag::Vector(element) => self.write_type_tag(element),
            TypeTag::Struct(struct_tag) => self.write_struct_tag(struct_tag),
        }
    }

    fn write_struct_tag(&mut self, struct_tag: &StructTag) {
        self.write_address(&struct_tag.address);
        self.write_identifier(&struct_tag.module);
        self.write_identifier(&struct_tag.name);
        self.write_seq(&struct_tag.type_params, Self::write_type_tag);
    }

    pub fn write_type_argument_abi(&mut self, ty_arg: &TypeArgumentABI) {
        self.write_str(ty_arg.name());
    }

    pub fn write_argument_abi(&mut self, arg: &ArgumentABI) {
        self.write_str(arg.name());
        self.write_type_tag(arg.type_tag());
    }

    pub fn write_entry_function_abi(&mut self, abi: &EntryFunctionABI) {
        self.write_identifier(abi.name());
        self.write_module_id(abi.module_id());
        self.write_str(abi.doc());
        self.write_seq(abi.ty_args(), Self::write_type_argument_abi);
        self.write_seq(abi.args(), Self::write_argument_abi);
    }

    pub fn write_transaction_script_abi(&mut self, abi: &TransactionScriptABI) {
        self.write_str(abi.name());
        self.write_bytes(abi.code());
        self.write_str(abi.doc());
        self.write_seq(abi.ty_args(), Self::write_type_argument_abi);
        self.write_seq(abi.args(), Self::write_argument_abi);
    }

    pub fn write_script_abi(&mut self, abi: &ScriptABI) {
        match abi {
            ScriptABI::TransactionScript(abi) => {
                self.write_u8(ScriptABI::TRANSACTION_SCRIPT);
                self.write_transaction_script_abi(abi);
            },
            ScriptABI::EntryFunction(abi) => {
                self.write_u8(ScriptABI::ENTRY_FUNCTION);
                self.write_entry_function_abi(abi);
            },
        }
    }
}
