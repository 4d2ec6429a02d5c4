// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    abi::{EntryFunctionABI, ScriptABI},
    errors::{AbiError, ParseError},
    identifier::Identifier,
    language_storage::ModuleId,
    parser::parse_function_id,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Entry function ABIs indexed by module and function name.
#[derive(Clone, Debug, Default)]
pub struct AbiRegistry {
    abis: BTreeMap<(ModuleId, Identifier), EntryFunctionABI>,
}

impl AbiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes each hex dump and registers the resulting entry function ABIs. Transaction script
    /// ABIs have no module to be addressed by and are rejected.
    pub fn from_hex_abis<'a>(abis: impl IntoIterator<Item = &'a str>) -> Result<Self, AbiError> {
        let mut registry = Self::new();
        for hex in abis {
            registry.insert(EntryFunctionABI::from_hex(hex)?);
        }
        debug!(count = registry.len(), "Built ABI registry");
        Ok(registry)
    }

    /// Registers an ABI, returning the previous ABI for the same function if there was one.
    pub fn insert(&mut self, abi: EntryFunctionABI) -> Option<EntryFunctionABI> {
        let key = (abi.module_id().clone(), abi.name().clone());
        let previous = self.abis.insert(key, abi);
        if let Some(previous) = &previous {
            warn!(
                function = %previous.function_id(),
                "Replacing an already registered ABI"
            );
        }
        previous
    }

    /// Registers a decoded ABI record if it describes an entry function.
    pub fn insert_script_abi(&mut self, abi: ScriptABI) -> Result<(), AbiError> {
        self.insert(abi.try_into()?);
        Ok(())
    }

    pub fn get(&self, module: &ModuleId, function: &str) -> Option<&EntryFunctionABI> {
        let function = Identifier::new(function).ok()?;
        self.abis.get(&(module.clone(), function))
    }

    /// Looks up an ABI by its fully qualified id, e.g. `0x1::coin::transfer`.
    pub fn get_by_id(&self, function_id: &str) -> Result<Option<&EntryFunctionABI>, ParseError> {
        let (module, function) = parse_function_id(function_id)?;
        Ok(self.abis.get(&(module, function)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryFunctionABI> {
        self.abis.values()
    }

    pub fn len(&self) -> usize {
        self.abis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abis.is_empty()
    }
}

impl FromIterator<EntryFunctionABI> for AbiRegistry {
    fn from_iter<T: IntoIterator<Item = EntryFunctionABI>>(iter: T) -> Self {
        let mut registry = Self::new();
        for abi in iter {
            registry.insert(abi);
        }
        registry
    }
}
