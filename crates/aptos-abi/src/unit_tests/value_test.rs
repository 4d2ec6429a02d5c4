// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    account_address::AccountAddress,
    ident_str,
    language_storage::{StructTag, TypeTag},
    value::{MoveStruct, MoveValue},
};
use claims::{assert_err, assert_ok};
use serde_json::json;

#[test]
fn test_serialize_primitives() {
    assert_eq!(assert_ok!(MoveValue::Bool(true).simple_serialize()), vec![1]);
    assert_eq!(assert_ok!(MoveValue::U8(7).simple_serialize()), vec![7]);
    assert_eq!(
        assert_ok!(MoveValue::U64(1000).simple_serialize()),
        1000u64.to_le_bytes().to_vec()
    );
    assert_eq!(
        assert_ok!(MoveValue::U128(u128::MAX).simple_serialize()),
        vec![0xff; 16]
    );
    assert_eq!(
        assert_ok!(MoveValue::Address(AccountAddress::ONE).simple_serialize()),
        AccountAddress::ONE.into_bytes().to_vec()
    );
}

#[test]
fn test_serialize_string_and_option() {
    assert_eq!(
        assert_ok!(MoveValue::string("Alice's").simple_serialize()),
        assert_ok!(bcs::to_bytes("Alice's"))
    );
    assert_eq!(
        assert_ok!(MoveValue::option(None).simple_serialize()),
        vec![0]
    );
    assert_eq!(
        assert_ok!(MoveValue::option(Some(MoveValue::U8(5))).simple_serialize()),
        vec![1, 5]
    );
    assert_eq!(
        assert_ok!(MoveValue::vector_u8(vec![1, 2, 3]).simple_serialize()),
        assert_ok!(bcs::to_bytes(&vec![1u8, 2, 3]))
    );
}

#[test]
fn test_check_type() {
    assert_ok!(MoveValue::U64(1).check_type(&TypeTag::U64));
    assert_err!(MoveValue::U8(1).check_type(&TypeTag::U64));
    assert_ok!(MoveValue::string("name").check_type(&TypeTag::string()));
    assert_err!(MoveValue::vector_u8(b"name".to_vec()).check_type(&TypeTag::string()));
    assert_err!(
        MoveValue::Struct(MoveStruct::new(vec![MoveValue::vector_u8(vec![0xff])]))
            .check_type(&TypeTag::string())
    );

    let nested = TypeTag::vector(TypeTag::vector(TypeTag::U8));
    assert_ok!(MoveValue::Vector(vec![MoveValue::vector_u8(vec![1])]).check_type(&nested));
    assert_err!(MoveValue::Vector(vec![MoveValue::U8(1)]).check_type(&nested));

    let option = TypeTag::option(TypeTag::U64);
    assert_ok!(MoveValue::option(None).check_type(&option));
    assert_ok!(MoveValue::option(Some(MoveValue::U64(1))).check_type(&option));
    assert_err!(MoveValue::option(Some(MoveValue::Bool(true))).check_type(&option));

    let custom = TypeTag::from(StructTag {
        address: AccountAddress::THREE,
        module: ident_str!("token"),
        name: ident_str!("TokenId"),
        type_params: vec![],
    });
    let token_id = MoveValue::Struct(MoveStruct::new(vec![MoveValue::Vector(vec![])]));
    assert_err!(token_id.check_type(&custom));
}

#[test]
fn test_from_json_integers() {
    assert_eq!(
        assert_ok!(MoveValue::from_json(&TypeTag::U64, &json!(1000))),
        MoveValue::U64(1000)
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(&TypeTag::U64, &json!("1000"))),
        MoveValue::U64(1000)
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(
            &TypeTag::U128,
            &json!("340282366920938463463374607431768211455")
        )),
        MoveValue::U128(u128::MAX)
    );
    assert_err!(MoveValue::from_json(&TypeTag::U8, &json!(256)));
    assert_err!(MoveValue::from_json(&TypeTag::U64, &json!("18446744073709551616")));
    assert_err!(MoveValue::from_json(&TypeTag::U64, &json!(-1)));
    assert_err!(MoveValue::from_json(&TypeTag::U64, &json!(1.5)));
    assert_err!(MoveValue::from_json(&TypeTag::U64, &json!(true)));
}

#[test]
fn test_from_json_structured() {
    assert_eq!(
        assert_ok!(MoveValue::from_json(&TypeTag::Address, &json!("0x1"))),
        MoveValue::Address(AccountAddress::ONE)
    );
    assert_err!(MoveValue::from_json(&TypeTag::Address, &json!(1)));
    assert_eq!(
        assert_ok!(MoveValue::from_json(&TypeTag::Bool, &json!(false))),
        MoveValue::Bool(false)
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(&TypeTag::string(), &json!("token"))),
        MoveValue::string("token")
    );

    let bytes = TypeTag::vector(TypeTag::U8);
    assert_eq!(
        assert_ok!(MoveValue::from_json(&bytes, &json!("0x0102"))),
        MoveValue::vector_u8(vec![1, 2])
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(&bytes, &json!("hi"))),
        MoveValue::vector_u8(b"hi".to_vec())
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(&bytes, &json!([1, 2]))),
        MoveValue::vector_u8(vec![1, 2])
    );
    assert_err!(MoveValue::from_json(&bytes, &json!("0xzz")));

    let option = TypeTag::option(TypeTag::string());
    assert_eq!(
        assert_ok!(MoveValue::from_json(&option, &json!(null))),
        MoveValue::option(None)
    );
    assert_eq!(
        assert_ok!(MoveValue::from_json(&option, &json!("a"))),
        MoveValue::option(Some(MoveValue::string("a")))
    );

    assert_err!(MoveValue::from_json(&TypeTag::Signer, &json!("0x1")));
    assert_err!(MoveValue::from_json(&TypeTag::vector(TypeTag::U64), &json!({})));
}

#[test]
fn test_from_json_values_type_check() {
    let tags = [
        TypeTag::vector(TypeTag::string()),
        TypeTag::vector(TypeTag::vector(TypeTag::U8)),
        TypeTag::option(TypeTag::Address),
    ];
    let values = [json!(["a", "b"]), json!(["0x01", [2, 3]]), json!("0x3")];
    for (tag, json) in tags.iter().zip(values.iter()) {
        let value = assert_ok!(MoveValue::from_json(tag, json));
        assert_ok!(value.check_type(tag));
    }
}
