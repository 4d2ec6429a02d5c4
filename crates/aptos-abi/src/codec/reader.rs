// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TransactionScriptABI, TypeArgumentABI},
    account_address::AccountAddress,
    errors::AbiError,
    identifier::Identifier,
    language_storage::{MAX_TYPE_TAG_DEPTH, ModuleId, StructTag, TypeTag},
};

/// A cursor over an ABI artifact.
///
/// Every read either consumes exactly the bytes of one field or fails without producing a
/// value. Declared lengths and sequence counts are checked against the remaining input before
/// anything is allocated.
pub struct AbiReader<'a> {
    input: &'a [u8],
    offset: usize,
    max_depth: usize,
}

impl<'a> AbiReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            max_depth: MAX_TYPE_TAG_DEPTH,
        }
    }

    /// Overrides the maximum type tag nesting accepted by this reader.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Fails with `TrailingBytes` unless the whole input has been consumed.
    pub fn finish(self) -> Result<(), AbiError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(AbiError::TrailingBytes(remaining)),
        }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], AbiError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(AbiError::TruncatedBuffer {
                offset: self.offset,
                needed,
                remaining,
            });
        }
        let bytes = &self.input[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, AbiError> {
        Ok(self.take(1)?[0])
    }

    /// Reads a canonical ULEB128 value that fits in a `u32`.
    pub fn read_uleb128_as_u32(&mut self) -> Result<u32, AbiError> {
        let start = self.offset;
        let mut value: u64 = 0;
        for shift in (0..32).step_by(7) {
            let byte = self.read_u8()?;
            let digit = byte & 0x7f;
            value |= u64::from(digit) << shift;
            if digit == byte {
                if shift > 0 && digit == 0 {
                    return Err(AbiError::MalformedLength {
                        offset: start,
                        reason: "non-canonical ULEB128 encoding",
                    });
                }
                return u32::try_from(value).map_err(|_| AbiError::MalformedLength {
                    offset: start,
                    reason: "ULEB128 value overflows u32",
                });
            }
        }
        Err(AbiError::MalformedLength {
            offset: start,
            reason: "ULEB128 value overflows u32",
        })
    }

    /// Reads a length or element count and checks it against the remaining input. Every
    /// element of a sequence occupies at least one byte, so a count larger than the remaining
    /// input can never be satisfied.
    fn read_length(&mut self) -> Result<usize, AbiError> {
        let start = self.offset;
        let length = self.read_uleb128_as_u32()? as usize;
        let remaining = self.remaining();
        if length > remaining {
            return Err(AbiError::TruncatedBuffer {
                offset: start,
                needed: length,
                remaining,
            });
        }
        Ok(length)
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, AbiError> {
        let length = self.read_length()?;
        Ok(self.take(length)?.to_vec())
    }

    pub fn read_string(&mut self) -> Result<String, AbiError> {
        let length = self.read_length()?;
        let offset = self.offset;
        let bytes = self.take(length)?;
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| AbiError::InvalidUtf8 { offset })
    }

    pub fn read_identifier(&mut self) -> Result<Identifier, AbiError> {
        let offset = self.offset;
        let name = self.read_string()?;
        Identifier::new(name).map_err(|error| AbiError::InvalidIdentifier {
            name: error.0,
            offset,
        })
    }

    pub fn read_address(&mut self) -> Result<AccountAddress, AbiError> {
        let bytes = self.take(AccountAddress::LENGTH)?;
        let mut address = [0u8; AccountAddress::LENGTH];
        address.copy_from_slice(bytes);
        Ok(AccountAddress::new(address))
    }

    pub fn read_module_id(&mut self) -> Result<ModuleId, AbiError> {
        let address = self.read_address()?;
        let name = self.read_identifier()?;
        Ok(ModuleId::new(address, name))
    }

    /// Reads a count-prefixed sequence, decoding each element with `read_element`.
    pub fn read_seq<T>(
        &mut self,
        mut read_element: impl FnMut(&mut Self) -> Result<T, AbiError>,
    ) -> Result<Vec<T>, AbiError> {
        let count = self.read_length()?;
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(read_element(self)?);
        }
        Ok(elements)
    }

    pub fn read_type_tag(&mut self) -> Result<TypeTag, AbiError> {
        self.read_type_tag_at_depth(1)
    }

    fn read_type_tag_at_depth(&mut self, depth: usize) -> Result<TypeTag, AbiError> {
        if depth > self.max_depth {
            return Err(AbiError::MaxDepthExceeded(self.max_depth));
        }

        let offset = self.offset;
        Ok(match self.read_u8()? {
            TypeTag::BOOL_TAG => TypeTag::Bool,
            TypeTag::U8_TAG => TypeTag::U8,
            TypeTag::U64_TAG => TypeTag::U64,
            TypeTag::U128_TAG => TypeTag::U128,
            TypeTag::ADDRESS_TAG => TypeTag::Address,
            TypeTag::SIGNER_TAG => TypeTag::Signer,
            TypeTag::VECTOR_TAG => {
                TypeTag::Vector(Box::new(self.read_type_tag_at_depth(depth + 1)?))
            },
            TypeTag::STRUCT_TAG => TypeTag::Struct(Box::new(self.read_struct_tag(depth)?)),
            tag => return Err(AbiError::UnknownTypeTag { tag, offset }),
        })
    }

    fn read_struct_tag(&mut self, depth: usize) -> Result<StructTag, AbiError> {
        let address = self.read_address()?;
        let module = self.read_identifier()?;
        let name = self.read_identifier()?;
        let type_params = self.read_seq(|reader| reader.read_type_tag_at_depth(depth + 1))?;
        Ok(StructTag {
            address,
            module,
            name,
            type_params,
        })
    }

    pub fn read_type_argument_abi(&mut self) -> Result<TypeArgumentABI, AbiError> {
        Ok(TypeArgumentABI::new(self.read_string()?))
    }

    pub fn read_argument_abi(&mut self) -> Result<ArgumentABI, AbiError> {
        let name = self.read_string()?;
        let type_tag = self.read_type_tag()?;
        Ok(ArgumentABI::new(name, type_tag))
    }

    pub fn read_entry_function_abi(&mut self) -> Result<EntryFunctionABI, AbiError> {
        let name = self.read_identifier()?;
        let module_name = self.read_module_id()?;
        let doc = self.read_string()?;
        let ty_args = self.read_seq(Self::read_type_argument_abi)?;
        let args = self.read_seq(Self::read_argument_abi)?;
        Ok(EntryFunctionABI::new(name, module_name, doc, ty_args, args))
    }

    pub fn read_transaction_script_abi(&mut self) -> Result<TransactionScriptABI, AbiError> {
        let name = self.read_string()?;
        let code = self.read_bytes()?;
        let doc = self.read_string()?;
        let ty_args = self.read_seq(Self::read_type_argument_abi)?;
        let args = self.read_seq(Self::read_argument_abi)?;
        Ok(TransactionScriptABI::new(name, code, doc, ty_args, args))
    }

    pub fn read_script_abi(&mut self) -> Result<ScriptABI, AbiError> {
        match self.read_u8()? {
            ScriptABI::TRANSACTION_SCRIPT => Ok(ScriptABI::TransactionScript(
                self.read_transaction_script_abi()?,
            )),
            ScriptABI::ENTRY_FUNCTION => Ok(ScriptABI::EntryFunction(
                self.read_entry_function_abi()?,
            )),
            kind => Err(AbiError::UnknownAbiKind(kind)),
        }
    }
}
