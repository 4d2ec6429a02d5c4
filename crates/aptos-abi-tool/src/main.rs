// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Aptos ABI tool
//!
//! Reads the `.abi` artifacts produced by `aptos move compile`, prints them in a readable form
//! and builds BCS encoded entry function payloads against them, all without a node.

#![forbid(unsafe_code)]

mod common;
mod config;
mod inspect;
mod payload;

use crate::common::{AbiToolArgs, ErrorWrapper};
use clap::Parser;
use std::process::exit;

fn main() {
    let args: AbiToolArgs = AbiToolArgs::parse();

    match args.execute() {
        Ok(value) => println!("{}", value),
        Err(error) => {
            let error = ErrorWrapper {
                error: format!("{:#}", error),
            };
            match serde_json::to_string_pretty(&error) {
                Ok(error) => eprintln!("{}", error),
                Err(_) => eprintln!("{}", error.error),
            }
            exit(-1)
        },
    }
}

#[test]
fn verify_tool() {
    use clap::CommandFactory;
    AbiToolArgs::command().debug_assert()
}
