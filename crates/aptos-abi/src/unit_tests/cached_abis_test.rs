// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    account_address::AccountAddress,
    cached_abis::{
        COIN_ABIS, TOKEN_ABIS, builtin_registry, is_move_bytecode,
        token_transfer_with_opt_in_payload, token_transfer_with_opt_in_script,
    },
    language_storage::TypeTag,
    transaction::TransactionPayload,
    transaction_argument::TransactionArgument,
};
use claims::{assert_ok, assert_some};

#[test]
fn test_builtin_registry() {
    let registry = builtin_registry();
    assert_eq!(registry.len(), COIN_ABIS.len() + TOKEN_ABIS.len());
    assert_eq!(registry.len(), 12);
    for abi in registry.iter() {
        let found = assert_some!(assert_ok!(registry.get_by_id(&abi.function_id())));
        assert_eq!(found, abi);
        assert!(abi.module_address().is_special());
    }
}

#[test]
fn test_token_abis() {
    let registry = builtin_registry();
    let create_token = assert_some!(assert_ok!(
        registry.get_by_id("0x3::token::create_token_script")
    ));
    assert_eq!(create_token.args().len(), 13);
    assert_eq!(
        create_token.args()[11].type_tag(),
        &TypeTag::vector(TypeTag::vector(TypeTag::U8))
    );

    let opt_in = assert_some!(assert_ok!(
        registry.get_by_id("0x3::token::opt_in_direct_transfer")
    ));
    assert_eq!(opt_in.args()[0].type_tag(), &TypeTag::Bool);

    let claim = assert_some!(assert_ok!(
        registry.get_by_id("0x3::token_transfers::claim_script")
    ));
    assert_eq!(claim.args().len(), 5);
    assert_eq!(claim.args()[0].name(), "sender");
}

#[test]
fn test_opt_in_transfer_script() {
    let code = token_transfer_with_opt_in_script();
    assert!(is_move_bytecode(&code));
    assert!(!is_move_bytecode(&code[1..]));

    let receiver = AccountAddress::from_hex_literal("0xb0b").unwrap();
    let payload = assert_ok!(token_transfer_with_opt_in_payload(
        AccountAddress::ONE,
        "collection",
        "token",
        0,
        receiver,
        1,
    ));
    let TransactionPayload::Script(script) = &payload else {
        panic!("expected a script payload, found {:?}", payload);
    };
    assert_eq!(script.code(), code.as_slice());
    assert!(script.ty_args().is_empty());
    assert_eq!(script.args(), &[
        TransactionArgument::Address(AccountAddress::ONE),
        TransactionArgument::U8Vector(b"collection".to_vec()),
        TransactionArgument::U8Vector(b"token".to_vec()),
        TransactionArgument::U64(0),
        TransactionArgument::Address(receiver),
        TransactionArgument::U64(1),
    ]);
    assert_eq!(assert_ok!(payload.to_bytes())[0], 0);
}
