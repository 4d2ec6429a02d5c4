// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{account_address::AccountAddress, value::MoveValue};
use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An argument to a transaction script. Scripts carry their arguments tagged, unlike entry
/// functions which receive pre-serialized bytes. Build them from `MoveValue`s; strings become
/// their UTF-8 bytes.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransactionArgument {
    U8(u8),
    U64(u64),
    U128(u128),
    Address(AccountAddress),
    U8Vector(#[serde(with = "serde_bytes")] Vec<u8>),
    Bool(bool),
}

impl fmt::Debug for TransactionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionArgument::U8(value) => write!(f, "{{U8: {}}}", value),
            TransactionArgument::U64(value) => write!(f, "{{U64: {}}}", value),
            TransactionArgument::U128(value) => write!(f, "{{U128: {}}}", value),
            TransactionArgument::Bool(boolean) => write!(f, "{{BOOL: {}}}", boolean),
            TransactionArgument::Address(address) => write!(f, "{{ADDRESS: {:?}}}", address),
            TransactionArgument::U8Vector(vector) => {
                write!(f, "{{U8Vector: 0x{}}}", hex::encode(vector))
            },
        }
    }
}

impl TryFrom<MoveValue> for TransactionArgument {
    type Error = Error;

    fn try_from(val: MoveValue) -> Result<Self> {
        Ok(match val {
            MoveValue::U8(i) => TransactionArgument::U8(i),
            MoveValue::U64(i) => TransactionArgument::U64(i),
            MoveValue::U128(i) => TransactionArgument::U128(i),
            MoveValue::Address(a) => TransactionArgument::Address(a),
            MoveValue::Bool(b) => TransactionArgument::Bool(b),
            MoveValue::Vector(v) => TransactionArgument::U8Vector(
                v.into_iter()
                    .map(|mv| {
                        if let MoveValue::U8(byte) = mv {
                            Ok(byte)
                        } else {
                            Err(anyhow!("unexpected value in bytes: {:?}", mv))
                        }
                    })
                    .collect::<Result<Vec<u8>>>()?,
            ),
            // Strings travel as their raw bytes in script arguments.
            MoveValue::Struct(s) => match s.into_fields().as_slice() {
                [MoveValue::Vector(bytes)] => {
                    TransactionArgument::try_from(MoveValue::Vector(bytes.clone()))?
                },
                fields => return Err(anyhow!("invalid transaction argument: {:?}", fields)),
            },
            MoveValue::Signer(_) => return Err(anyhow!("invalid transaction argument: {:?}", val)),
        })
    }
}
