// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{account_address::AccountAddress, language_storage::TypeTag};
use anyhow::{Result, anyhow, bail, ensure};
use serde::{
    Serialize, Serializer,
    ser::{SerializeSeq, SerializeTuple},
};
use serde_json::Value;
use std::str::FromStr;

/// The fields of a struct value, in declaration order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MoveStruct(Vec<MoveValue>);

/// A runtime Move value that can be passed to an entry function.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MoveValue {
    U8(u8),
    U64(u64),
    U128(u128),
    Bool(bool),
    Address(AccountAddress),
    Vector(Vec<MoveValue>),
    Struct(MoveStruct),
    Signer(AccountAddress),
}

impl MoveStruct {
    pub fn new(fields: Vec<MoveValue>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[MoveValue] {
        &self.0
    }

    pub fn into_fields(self) -> Vec<MoveValue> {
        self.0
    }
}

impl MoveValue {
    pub fn simple_serialize(&self) -> Result<Vec<u8>, bcs::Error> {
        bcs::to_bytes(self)
    }

    pub fn vector_u8(v: Vec<u8>) -> Self {
        MoveValue::Vector(v.into_iter().map(MoveValue::U8).collect())
    }

    /// A `0x1::string::String`, which is a struct wrapping its UTF-8 bytes.
    pub fn string(s: impl Into<String>) -> Self {
        MoveValue::Struct(MoveStruct::new(vec![MoveValue::vector_u8(
            s.into().into_bytes(),
        )]))
    }

    /// A `0x1::option::Option<T>`, which is a struct wrapping a vector of at most one element.
    pub fn option(value: Option<MoveValue>) -> Self {
        MoveValue::Struct(MoveStruct::new(vec![MoveValue::Vector(
            value.into_iter().collect(),
        )]))
    }

    /// Checks that this value is an instance of `type_tag`. Struct types other than strings and
    /// options cannot be constructed outside of Move and are rejected.
    pub fn check_type(&self, type_tag: &TypeTag) -> Result<()> {
        match (type_tag, self) {
            (TypeTag::Bool, MoveValue::Bool(_))
            | (TypeTag::U8, MoveValue::U8(_))
            | (TypeTag::U64, MoveValue::U64(_))
            | (TypeTag::U128, MoveValue::U128(_))
            | (TypeTag::Address, MoveValue::Address(_))
            | (TypeTag::Signer, MoveValue::Signer(_)) => Ok(()),
            (TypeTag::Vector(element), MoveValue::Vector(values)) => {
                for (index, value) in values.iter().enumerate() {
                    value
                        .check_type(element)
                        .map_err(|error| anyhow!("element {}: {}", index, error))?;
                }
                Ok(())
            },
            (TypeTag::Struct(struct_tag), MoveValue::Struct(fields)) => {
                let [MoveValue::Vector(inner)] = fields.fields() else {
                    bail!("expected a single vector field in {}", struct_tag);
                };
                if struct_tag.is_std_string() {
                    let bytes = inner
                        .iter()
                        .map(|value| match value {
                            MoveValue::U8(byte) => Ok(*byte),
                            other => Err(anyhow!("unexpected value in string bytes: {:?}", other)),
                        })
                        .collect::<Result<Vec<u8>>>()?;
                    ensure!(
                        std::str::from_utf8(&bytes).is_ok(),
                        "string is not valid UTF-8"
                    );
                    Ok(())
                } else if struct_tag.is_std_option() {
                    ensure!(inner.len() <= 1, "option holds {} values", inner.len());
                    match inner.first() {
                        Some(value) => value.check_type(&struct_tag.type_params[0]),
                        None => Ok(()),
                    }
                } else {
                    bail!("struct {} cannot be passed as an argument", struct_tag)
                }
            },
            (expected, actual) => bail!("expected {}, found {:?}", expected, actual),
        }
    }

    /// Builds a value of type `type_tag` from its JSON form.
    ///
    /// Integers are accepted as JSON numbers or decimal strings, addresses and `vector<u8>` as
    /// hex strings (`vector<u8>` also takes plain text or a byte array), `String` as a JSON
    /// string and `Option<T>` as `null` or a `T`.
    pub fn from_json(type_tag: &TypeTag, json: &Value) -> Result<Self> {
        Ok(match type_tag {
            TypeTag::Bool => MoveValue::Bool(
                json.as_bool()
                    .ok_or_else(|| anyhow!("expected a boolean, found {}", json))?,
            ),
            TypeTag::U8 => MoveValue::U8(parse_integer(json)?),
            TypeTag::U64 => MoveValue::U64(parse_integer(json)?),
            TypeTag::U128 => MoveValue::U128(parse_integer(json)?),
            TypeTag::Address => {
                let literal = json
                    .as_str()
                    .ok_or_else(|| anyhow!("expected an address string, found {}", json))?;
                MoveValue::Address(AccountAddress::from_str(literal)?)
            },
            TypeTag::Signer => bail!("signer arguments are supplied by the transaction sender"),
            TypeTag::Vector(element) => match (element.as_ref(), json) {
                (TypeTag::U8, Value::String(s)) => match s.strip_prefix("0x") {
                    Some(digits) => MoveValue::vector_u8(hex::decode(digits)?),
                    None => MoveValue::vector_u8(s.as_bytes().to_vec()),
                },
                (element, Value::Array(values)) => MoveValue::Vector(
                    values
                        .iter()
                        .map(|value| MoveValue::from_json(element, value))
                        .collect::<Result<_>>()?,
                ),
                (_, json) => bail!("expected an array for {}, found {}", type_tag, json),
            },
            TypeTag::Struct(struct_tag) if struct_tag.is_std_string() => MoveValue::string(
                json.as_str()
                    .ok_or_else(|| anyhow!("expected a string, found {}", json))?,
            ),
            TypeTag::Struct(struct_tag) if struct_tag.is_std_option() => match json {
                Value::Null => MoveValue::option(None),
                json => MoveValue::option(Some(MoveValue::from_json(
                    &struct_tag.type_params[0],
                    json,
                )?)),
            },
            TypeTag::Struct(struct_tag) => {
                bail!("struct {} cannot be passed as an argument", struct_tag)
            },
        })
    }
}

fn parse_integer<T>(json: &Value) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let digits = match json {
        Value::Number(number) => number.to_string(),
        Value::String(s) => s.clone(),
        other => bail!("expected an integer, found {}", other),
    };
    digits
        .parse::<T>()
        .map_err(|error| anyhow!("invalid integer {:?}: {}", digits, error))
}

impl Serialize for MoveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MoveValue::Struct(s) => s.serialize(serializer),
            MoveValue::Bool(b) => serializer.serialize_bool(*b),
            MoveValue::U8(i) => serializer.serialize_u8(*i),
            MoveValue::U64(i) => serializer.serialize_u64(*i),
            MoveValue::U128(i) => serializer.serialize_u128(*i),
            MoveValue::Address(a) => a.serialize(serializer),
            MoveValue::Signer(a) => a.serialize(serializer),
            MoveValue::Vector(v) => {
                let mut t = serializer.serialize_seq(Some(v.len()))?;
                for val in v {
                    t.serialize_element(val)?;
                }
                t.end()
            },
        }
    }
}

impl Serialize for MoveStruct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(self.0.len())?;
        for v in self.0.iter() {
            t.serialize_element(v)?;
        }
        t.end()
    }
}
