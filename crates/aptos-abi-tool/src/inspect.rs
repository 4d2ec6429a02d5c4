// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::config::ToolConfig;
use anyhow::Context;
use aptos_abi::{
    abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TypeArgumentABI},
    codec,
    parser::parse_function_id,
};
use serde::Serialize;
use std::{fs, path::PathBuf};

/// Print an `.abi` artifact as a hex string, as embedded in ABI tables
#[derive(Debug, clap::Parser)]
pub struct HexdumpCommand {
    /// Path to the `.abi` file
    file: PathBuf,

    /// Use uppercase hex digits
    #[clap(long)]
    uppercase: bool,
}

impl HexdumpCommand {
    pub fn execute(self) -> anyhow::Result<String> {
        let bytes = fs::read(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let hex = codec::to_hex(&bytes);
        Ok(if self.uppercase {
            hex.to_uppercase()
        } else {
            hex
        })
    }
}

/// Decode an ABI and print its signature
#[derive(Debug, clap::Parser)]
pub struct DecodeCommand {
    /// Hex encoded ABI
    #[clap(long, conflicts_with = "file", required_unless_present = "file")]
    hex: Option<String>,

    /// Path to a binary `.abi` file
    #[clap(long)]
    file: Option<PathBuf>,
}

impl DecodeCommand {
    pub fn execute(self, config: &ToolConfig) -> anyhow::Result<AbiSummary> {
        let abi = match (self.hex, self.file) {
            (Some(hex), _) => {
                let bytes = codec::from_hex(hex.trim().trim_start_matches("0x"))?;
                ScriptABI::from_bytes_with_max_depth(&bytes, config.max_type_depth)?
            },
            (None, Some(file)) => config.read_abi_file(&file)?,
            (None, None) => anyhow::bail!("Either --hex or --file must be given"),
        };
        Ok(AbiSummary::from(&abi))
    }
}

/// List the known entry function ABIs
#[derive(Debug, clap::Parser)]
pub struct ListCommand {
    /// Only list functions of this module, e.g. `0x3::token`
    #[clap(long)]
    module: Option<String>,
}

impl ListCommand {
    pub fn execute(self, config: &ToolConfig) -> anyhow::Result<Vec<AbiSummary>> {
        let registry = config.build_registry()?;
        let module = match &self.module {
            // Reuse the function id grammar by appending a placeholder function name.
            Some(module) => Some(
                parse_function_id(&format!("{}::placeholder", module))
                    .with_context(|| format!("Invalid module id {:?}", module))?
                    .0,
            ),
            None => None,
        };
        Ok(registry
            .iter()
            .filter(|abi| module.as_ref().is_none_or(|module| abi.module_id() == module))
            .map(AbiSummary::from)
            .collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterSummary {
    pub name: String,
    pub type_tag: String,
}

/// A readable rendering of an ABI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AbiSummary {
    pub kind: &'static str,
    pub function: String,
    pub signature: String,
    pub doc: String,
    pub type_params: Vec<String>,
    pub params: Vec<ParameterSummary>,
}

impl AbiSummary {
    fn new(
        kind: &'static str,
        function: String,
        signature: String,
        doc: &str,
        ty_args: &[TypeArgumentABI],
        args: &[ArgumentABI],
    ) -> Self {
        Self {
            kind,
            function,
            signature,
            doc: doc.trim().to_string(),
            type_params: ty_args.iter().map(|ty_arg| ty_arg.name().to_string()).collect(),
            params: args
                .iter()
                .map(|arg| ParameterSummary {
                    name: arg.name().to_string(),
                    type_tag: arg.type_tag().to_string(),
                })
                .collect(),
        }
    }
}

impl From<&EntryFunctionABI> for AbiSummary {
    fn from(abi: &EntryFunctionABI) -> Self {
        Self::new(
            "entry_function",
            abi.function_id(),
            abi.to_string(),
            abi.doc(),
            abi.ty_args(),
            abi.args(),
        )
    }
}

impl From<&ScriptABI> for AbiSummary {
    fn from(abi: &ScriptABI) -> Self {
        match abi {
            ScriptABI::EntryFunction(abi) => abi.into(),
            ScriptABI::TransactionScript(script) => Self::new(
                "transaction_script",
                script.name().to_string(),
                script.name().to_string(),
                script.doc(),
                script.ty_args(),
                script.args(),
            ),
        }
    }
}
