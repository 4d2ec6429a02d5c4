// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{ArgumentABI, EntryFunctionABI},
    errors::BuildError,
    language_storage::TypeTag,
    parser::parse_type_tag,
    registry::AbiRegistry,
    transaction::{EntryFunction, TransactionPayload},
    value::MoveValue,
};
use serde_json::Value;
use tracing::trace;

/// Builds entry function payloads, checking every argument against the ABI of the callee.
#[derive(Clone, Copy, Debug)]
pub struct TransactionBuilderABI<'a> {
    registry: &'a AbiRegistry,
}

impl<'a> TransactionBuilderABI<'a> {
    pub fn new(registry: &'a AbiRegistry) -> Self {
        Self { registry }
    }

    fn lookup(&self, function_id: &str) -> Result<&'a EntryFunctionABI, BuildError> {
        self.registry
            .get_by_id(function_id)?
            .ok_or_else(|| BuildError::UnknownFunction(function_id.to_string()))
    }

    /// Builds a payload calling `function_id` (e.g. `0x1::coin::transfer`) with type arguments
    /// in their textual form.
    pub fn build_entry_function(
        &self,
        function_id: &str,
        ty_args: &[&str],
        args: Vec<MoveValue>,
    ) -> Result<TransactionPayload, BuildError> {
        let abi = self.lookup(function_id)?;
        let ty_args = parse_type_tags(ty_args)?;
        build_entry_function_from_abi(abi, ty_args, args)
    }

    /// Like `build_entry_function`, with arguments given as JSON and converted according to the
    /// parameter types of the ABI.
    pub fn build_entry_function_from_json(
        &self,
        function_id: &str,
        ty_args: &[&str],
        args: &[Value],
    ) -> Result<TransactionPayload, BuildError> {
        let abi = self.lookup(function_id)?;
        let ty_args = parse_type_tags(ty_args)?;
        check_signature(abi, ty_args.len(), args.len())?;
        let args = abi
            .args()
            .iter()
            .zip(args)
            .enumerate()
            .map(|(index, (arg_abi, json))| {
                MoveValue::from_json(arg_abi.type_tag(), json)
                    .map_err(|error| mismatch(index, arg_abi, error))
            })
            .collect::<Result<Vec<_>, _>>()?;
        build_entry_function_from_abi(abi, ty_args, args)
    }
}

fn parse_type_tags(ty_args: &[&str]) -> Result<Vec<TypeTag>, BuildError> {
    Ok(ty_args
        .iter()
        .map(|ty_arg| parse_type_tag(ty_arg))
        .collect::<Result<Vec<_>, _>>()?)
}

/// Checks the argument counts, and that no parameter needs a value only the sender can supply.
fn check_signature(
    abi: &EntryFunctionABI,
    ty_arg_count: usize,
    arg_count: usize,
) -> Result<(), BuildError> {
    if abi.ty_args().len() != ty_arg_count {
        return Err(BuildError::TypeArgumentCountMismatch {
            function: abi.function_id(),
            expected: abi.ty_args().len(),
            actual: ty_arg_count,
        });
    }
    if abi.args().len() != arg_count {
        return Err(BuildError::ArgumentCountMismatch {
            function: abi.function_id(),
            expected: abi.args().len(),
            actual: arg_count,
        });
    }
    if let Some(arg_abi) = abi.args().iter().find(|arg| arg.type_tag().contains_signer()) {
        return Err(BuildError::UnsupportedArgumentType(
            arg_abi.type_tag().clone(),
        ));
    }
    Ok(())
}

fn mismatch(index: usize, arg_abi: &ArgumentABI, error: anyhow::Error) -> BuildError {
    BuildError::ArgumentTypeMismatch {
        index,
        name: arg_abi.name().to_string(),
        expected: arg_abi.type_tag().clone(),
        reason: error.to_string(),
    }
}

/// Type checks `args` against `abi` and serializes them into an entry function payload.
pub fn build_entry_function_from_abi(
    abi: &EntryFunctionABI,
    ty_args: Vec<TypeTag>,
    args: Vec<MoveValue>,
) -> Result<TransactionPayload, BuildError> {
    check_signature(abi, ty_args.len(), args.len())?;

    let mut serialized_args = Vec::with_capacity(args.len());
    for (index, (arg_abi, value)) in abi.args().iter().zip(args).enumerate() {
        value
            .check_type(arg_abi.type_tag())
            .map_err(|error| mismatch(index, arg_abi, error))?;
        let bytes = value
            .simple_serialize()
            .map_err(|error| BuildError::Serialization { index, error })?;
        serialized_args.push(bytes);
    }

    let entry_function = EntryFunction::new(
        abi.module_id().clone(),
        abi.name().clone(),
        ty_args,
        serialized_args,
    );
    trace!(function = %entry_function, "Built entry function payload");
    Ok(TransactionPayload::EntryFunction(entry_function))
}
