// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{account_address::AccountAddress, codec::AbiWriter, ident_str, identifier::Identifier};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Address of the Move standard library and the core framework.
pub const CORE_CODE_ADDRESS: AccountAddress = AccountAddress::ONE;

/// Maximum nesting of `vector<..>` and struct type arguments accepted from untrusted input.
pub const MAX_TYPE_TAG_DEPTH: usize = 64;

/// A closed description of a Move type, as carried in ABIs and transaction payloads.
///
/// The variant order is the BCS discriminant and must not change.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

impl TypeTag {
    pub const BOOL_TAG: u8 = 0;
    pub const U8_TAG: u8 = 1;
    pub const U64_TAG: u8 = 2;
    pub const U128_TAG: u8 = 3;
    pub const ADDRESS_TAG: u8 = 4;
    pub const SIGNER_TAG: u8 = 5;
    pub const VECTOR_TAG: u8 = 6;
    pub const STRUCT_TAG: u8 = 7;

    /// The discriminant byte written on the wire for this tag.
    pub fn discriminant(&self) -> u8 {
        match self {
            TypeTag::Bool => Self::BOOL_TAG,
            TypeTag::U8 => Self::U8_TAG,
            TypeTag::U64 => Self::U64_TAG,
            TypeTag::U128 => Self::U128_TAG,
            TypeTag::Address => Self::ADDRESS_TAG,
            TypeTag::Signer => Self::SIGNER_TAG,
            TypeTag::Vector(_) => Self::VECTOR_TAG,
            TypeTag::Struct(_) => Self::STRUCT_TAG,
        }
    }

    pub fn vector(element: TypeTag) -> Self {
        TypeTag::Vector(Box::new(element))
    }

    /// `0x1::string::String`
    pub fn string() -> Self {
        TypeTag::Struct(Box::new(StructTag::string()))
    }

    /// `0x1::option::Option<T>`
    pub fn option(element: TypeTag) -> Self {
        TypeTag::Struct(Box::new(StructTag::option(element)))
    }

    /// Nesting depth of the tag; primitives have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            TypeTag::Vector(element) => 1 + element.depth(),
            TypeTag::Struct(struct_tag) => {
                1 + struct_tag
                    .type_params
                    .iter()
                    .map(TypeTag::depth)
                    .max()
                    .unwrap_or(0)
            },
            _ => 1,
        }
    }

    /// The binary encoding of the tag, as embedded in ABIs and payloads.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = AbiWriter::new();
        writer.write_type_tag(self);
        writer.into_bytes()
    }

    /// Returns true if the type contains a `signer` anywhere.
    pub fn contains_signer(&self) -> bool {
        match self {
            TypeTag::Signer => true,
            TypeTag::Vector(element) => element.contains_signer(),
            TypeTag::Struct(struct_tag) => struct_tag.type_params.iter().any(Self::contains_signer),
            _ => false,
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(element) => write!(f, "vector<{}>", element),
            TypeTag::Struct(struct_tag) => write!(f, "{}", struct_tag),
        }
    }
}

impl From<StructTag> for TypeTag {
    fn from(struct_tag: StructTag) -> Self {
        TypeTag::Struct(Box::new(struct_tag))
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: Identifier,
    pub name: Identifier,
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    pub fn string() -> Self {
        Self {
            address: CORE_CODE_ADDRESS,
            module: ident_str!("string"),
            name: ident_str!("String"),
            type_params: vec![],
        }
    }

    pub fn option(element: TypeTag) -> Self {
        Self {
            address: CORE_CODE_ADDRESS,
            module: ident_str!("option"),
            name: ident_str!("Option"),
            type_params: vec![element],
        }
    }

    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.address, self.module.clone())
    }

    pub fn is_std_string(&self) -> bool {
        self.address == CORE_CODE_ADDRESS
            && self.module == "string"
            && self.name == "String"
            && self.type_params.is_empty()
    }

    pub fn is_std_option(&self) -> bool {
        self.address == CORE_CODE_ADDRESS
            && self.module == "option"
            && self.name == "Option"
            && self.type_params.len() == 1
    }
}

impl Display for StructTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{}", first)?;
            for ty in rest {
                write!(f, ", {}", ty)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// Represents the name of a module: the address it is published under plus its identifier.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModuleId {
    address: AccountAddress,
    name: Identifier,
}

impl ModuleId {
    pub fn new(address: AccountAddress, name: Identifier) -> Self {
        ModuleId { address, name }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{StructTag, TypeTag};

    #[test]
    fn test_type_tag_display() {
        let tag = TypeTag::vector(TypeTag::option(TypeTag::string()));
        assert_eq!(
            tag.to_string(),
            "vector<0x1::option::Option<0x1::string::String>>"
        );
        assert_eq!(tag.depth(), 4);
        assert!(!tag.contains_signer());
        assert!(TypeTag::vector(TypeTag::Signer).contains_signer());
    }

    #[test]
    fn test_bcs_discriminants() {
        let tags = [
            TypeTag::Bool,
            TypeTag::U8,
            TypeTag::U64,
            TypeTag::U128,
            TypeTag::Address,
            TypeTag::Signer,
            TypeTag::vector(TypeTag::U8),
            TypeTag::string(),
        ];
        for tag in tags {
            let bytes = bcs::to_bytes(&tag).unwrap();
            assert_eq!(bytes[0], tag.discriminant());
            assert_eq!(tag.to_bytes(), bytes);
        }
    }

    #[test]
    fn test_well_known_structs() {
        assert!(StructTag::string().is_std_string());
        assert!(!StructTag::string().is_std_option());
        assert!(StructTag::option(TypeTag::U8).is_std_option());
        assert_eq!(StructTag::string().module_id().to_string(), "0x1::string");
    }
}
