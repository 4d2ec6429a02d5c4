// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use crate::{
    config::ToolConfig,
    inspect::{DecodeCommand, HexdumpCommand, ListCommand},
    payload::BuildPayloadCommand,
};
use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[clap(name = "aptos-abi", author, version)]
pub struct AbiToolArgs {
    /// Path to a YAML config file
    #[clap(long, global = true, env = "APTOS_ABI_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: AbiToolCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum AbiToolCommand {
    Hexdump(HexdumpCommand),
    Decode(DecodeCommand),
    List(ListCommand),
    BuildPayload(BuildPayloadCommand),
}

impl AbiToolArgs {
    pub fn execute(self) -> anyhow::Result<String> {
        let config = match &self.config {
            Some(path) => ToolConfig::load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ToolConfig::default(),
        };
        init_logger(&config.log_level);

        match self.command {
            AbiToolCommand::Hexdump(inner) => inner.execute(),
            AbiToolCommand::Decode(inner) => format_output(inner.execute(&config)),
            AbiToolCommand::List(inner) => format_output(inner.execute(&config)),
            AbiToolCommand::BuildPayload(inner) => format_output(inner.execute(&config)),
        }
    }
}

/// Logs go to stderr so that command output stays machine readable. `RUST_LOG` takes
/// precedence over the configured level.
fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Serialize)]
pub struct ErrorWrapper {
    pub error: String,
}

pub fn format_output<T: Serialize>(input: anyhow::Result<T>) -> anyhow::Result<String> {
    let value = input?;
    Ok(serde_json::to_string_pretty(&value)?)
}
