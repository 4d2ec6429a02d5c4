// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{ArgumentABI, EntryFunctionABI, TypeArgumentABI},
    account_address::AccountAddress,
    identifier::Identifier,
    language_storage::{ModuleId, StructTag, TypeTag},
};
use proptest::{collection::vec, prelude::*};

pub fn arb_address() -> impl Strategy<Value = AccountAddress> {
    any::<[u8; AccountAddress::LENGTH]>().prop_map(AccountAddress::new)
}

pub fn arb_identifier() -> impl Strategy<Value = Identifier> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}".prop_map(|s| Identifier::new(s).unwrap())
}

pub fn arb_type_tag() -> impl Strategy<Value = TypeTag> {
    let leaf = prop_oneof![
        Just(TypeTag::Bool),
        Just(TypeTag::U8),
        Just(TypeTag::U64),
        Just(TypeTag::U128),
        Just(TypeTag::Address),
        Just(TypeTag::Signer),
    ];
    leaf.prop_recursive(6, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeTag::vector),
            (
                arb_address(),
                arb_identifier(),
                arb_identifier(),
                vec(inner, 0..3)
            )
                .prop_map(|(address, module, name, type_params)| {
                    TypeTag::from(StructTag {
                        address,
                        module,
                        name,
                        type_params,
                    })
                }),
        ]
    })
}

pub fn arb_entry_function_abi() -> impl Strategy<Value = EntryFunctionABI> {
    (
        arb_identifier(),
        arb_address(),
        arb_identifier(),
        ".{0,40}",
        vec("[a-z_]{1,8}", 0..3),
        vec(("[a-z_]{1,12}", arb_type_tag()), 0..5),
    )
        .prop_map(|(name, address, module, doc, ty_args, args)| {
            EntryFunctionABI::new(
                name,
                ModuleId::new(address, module),
                doc,
                ty_args.into_iter().map(TypeArgumentABI::new).collect(),
                args.into_iter()
                    .map(|(name, type_tag)| ArgumentABI::new(name, type_tag))
                    .collect(),
            )
        })
}
