// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TransactionScriptABI},
    account_address::AccountAddress,
    cached_abis::COIN_ABIS,
    errors::{AbiError, ParseError},
    ident_str,
    language_storage::{ModuleId, TypeTag},
    registry::AbiRegistry,
};
use claims::{assert_err, assert_matches, assert_none, assert_ok, assert_some};

fn abi(module: &str, name: &str, doc: &str) -> EntryFunctionABI {
    EntryFunctionABI::new(
        ident_str!(name),
        ModuleId::new(AccountAddress::ONE, ident_str!(module)),
        doc.to_string(),
        vec![],
        vec![ArgumentABI::new("to".to_string(), TypeTag::Address)],
    )
}

#[test]
fn test_lookup() {
    let registry = assert_ok!(AbiRegistry::from_hex_abis(COIN_ABIS.iter().copied()));
    assert_eq!(registry.len(), 2);

    let coin = ModuleId::new(AccountAddress::ONE, ident_str!("coin"));
    let transfer = assert_some!(registry.get(&coin, "transfer"));
    assert_eq!(transfer.ty_args().len(), 1);
    assert_none!(registry.get(&coin, "mint"));
    assert_none!(registry.get(&coin, "not an identifier"));

    let by_id = assert_some!(assert_ok!(registry.get_by_id("0x1::aptos_account::transfer")));
    assert_eq!(by_id.module_name(), "aptos_account");
    assert_none!(assert_ok!(registry.get_by_id("0x2::coin::transfer")));
    assert_matches!(
        registry.get_by_id("transfer"),
        Err(ParseError::InvalidFunctionId(_))
    );
}

#[test]
fn test_insert_replaces() {
    let mut registry = AbiRegistry::new();
    assert!(registry.is_empty());
    assert_none!(registry.insert(abi("coin", "transfer", "old")));
    let previous = assert_some!(registry.insert(abi("coin", "transfer", "new")));
    assert_eq!(previous.doc(), "old");
    assert_eq!(registry.len(), 1);
    let current = assert_some!(assert_ok!(registry.get_by_id("0x1::coin::transfer")));
    assert_eq!(current.doc(), "new");
}

#[test]
fn test_iteration_is_ordered() {
    let registry: AbiRegistry = [abi("b", "f", ""), abi("a", "g", ""), abi("a", "f", "")]
        .into_iter()
        .collect();
    let ids: Vec<_> = registry.iter().map(EntryFunctionABI::function_id).collect();
    assert_eq!(ids, vec!["0x1::a::f", "0x1::a::g", "0x1::b::f"]);
}

#[test]
fn test_rejects_transaction_scripts() {
    let script = ScriptABI::TransactionScript(TransactionScriptABI::new(
        "main".to_string(),
        vec![],
        String::new(),
        vec![],
        vec![],
    ));
    let mut registry = AbiRegistry::new();
    assert_eq!(
        assert_err!(registry.insert_script_abi(script.clone())),
        AbiError::NotAnEntryFunction("main".to_string())
    );
    let hex = hex::encode(script.to_bytes());
    assert_matches!(
        AbiRegistry::from_hex_abis([hex.as_str()]),
        Err(AbiError::NotAnEntryFunction(_))
    );
    assert_ok!(registry.insert_script_abi(ScriptABI::EntryFunction(abi("m", "f", ""))));
    assert_eq!(registry.len(), 1);
}
