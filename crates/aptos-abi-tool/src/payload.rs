// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::config::ToolConfig;
use anyhow::Context;
use aptos_abi::{TransactionBuilderABI, codec};
use serde::Serialize;
use serde_json::Value;

/// Build a BCS encoded entry function payload
///
/// Arguments are given as JSON and checked against the ABI of the function. Bare words that
/// are not valid JSON, such as addresses, are taken as JSON strings.
#[derive(Debug, clap::Parser)]
pub struct BuildPayloadCommand {
    /// Function id, e.g. `0x1::coin::transfer`
    #[clap(long)]
    function: String,

    /// Type arguments, e.g. `0x1::aptos_coin::AptosCoin`
    #[clap(long = "type-arg")]
    type_args: Vec<String>,

    /// Arguments in declaration order
    #[clap(long = "arg")]
    args: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PayloadSummary {
    pub function: String,
    pub args: Vec<String>,
    pub payload: String,
}

fn parse_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

fn to_hex_literal(bytes: &[u8]) -> String {
    format!("0x{}", codec::to_hex(bytes))
}

impl BuildPayloadCommand {
    pub fn execute(self, config: &ToolConfig) -> anyhow::Result<PayloadSummary> {
        let registry = config.build_registry()?;
        let type_args: Vec<&str> = self.type_args.iter().map(String::as_str).collect();
        let args: Vec<Value> = self.args.iter().map(|arg| parse_arg(arg)).collect();

        let payload = TransactionBuilderABI::new(&registry)
            .build_entry_function_from_json(&self.function, &type_args, &args)
            .with_context(|| format!("Failed to build a payload for {}", self.function))?;
        let bytes = payload.to_bytes()?;
        let entry_function = payload.into_entry_function();
        Ok(PayloadSummary {
            function: entry_function.to_string(),
            args: entry_function
                .args()
                .iter()
                .map(|arg| to_hex_literal(arg))
                .collect(),
            payload: to_hex_literal(&bytes),
        })
    }
}
