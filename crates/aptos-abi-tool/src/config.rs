// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use aptos_abi::{
    AbiRegistry, abi::ScriptABI, builtin_registry, errors::AbiError,
    language_storage::MAX_TYPE_TAG_DEPTH,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};

const ABI_FILE_EXTENSION: &str = "abi";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error accessing {0}: {1}")]
    IO(String, #[source] std::io::Error),
    #[error("Error (de)serializing {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),
    #[error("Failed to decode ABI {0}: {1}")]
    Abi(String, #[source] AbiError),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for the tool, loaded from an optional YAML file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Maximum type tag nesting accepted when decoding ABI files.
    pub max_type_depth: usize,
    /// `.abi` files, or directories holding them, registered next to the built-in ABIs.
    pub abi_paths: Vec<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            max_type_depth: MAX_TYPE_TAG_DEPTH,
            abi_paths: vec![],
        }
    }
}

impl ToolConfig {
    /// Load the config from disk at the given path
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path_string = path.as_ref().display().to_string();
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|error| Error::IO(path_string, error))?;
        Self::parse_serialized_config(&contents)
    }

    /// Parse the config from the serialized string
    pub fn parse_serialized_config(serialized_config: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(serialized_config)
            .map_err(|error| Error::Yaml("config".to_string(), error))?;
        config.sanitize()?;
        Ok(config)
    }

    fn sanitize(&self) -> Result<(), Error> {
        if self.max_type_depth == 0 || self.max_type_depth > MAX_TYPE_TAG_DEPTH {
            return Err(Error::Invalid(format!(
                "max_type_depth must be between 1 and {}, found {}",
                MAX_TYPE_TAG_DEPTH, self.max_type_depth
            )));
        }
        Ok(())
    }

    /// Decodes a single ABI artifact, honoring the configured depth limit.
    pub fn read_abi_file(&self, path: &Path) -> Result<ScriptABI, Error> {
        let path_string = path.display().to_string();
        let bytes = fs::read(path).map_err(|error| Error::IO(path_string.clone(), error))?;
        ScriptABI::from_bytes_with_max_depth(&bytes, self.max_type_depth)
            .map_err(|error| Error::Abi(path_string, error))
    }

    /// The built-in ABIs plus every entry function found under `abi_paths`.
    pub fn build_registry(&self) -> Result<AbiRegistry, Error> {
        let mut registry = builtin_registry().clone();
        for path in self.abi_files()? {
            let abi = self.read_abi_file(&path)?;
            if !abi.is_entry_function() {
                info!(path = %path.display(), "Skipping transaction script ABI");
                continue;
            }
            registry
                .insert_script_abi(abi)
                .map_err(|error| Error::Abi(path.display().to_string(), error))?;
        }
        debug!(count = registry.len(), "Loaded ABIs");
        Ok(registry)
    }

    fn abi_files(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = vec![];
        for path in &self.abi_paths {
            if !path.is_dir() {
                files.push(path.clone());
                continue;
            }
            let to_error = |error| Error::IO(path.display().to_string(), error);
            let mut entries = vec![];
            for entry in fs::read_dir(path).map_err(to_error)? {
                let entry_path = entry.map_err(to_error)?.path();
                if entry_path.extension().is_some_and(|ext| ext == ABI_FILE_EXTENSION) {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            files.extend(entries);
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ToolConfig};
    use aptos_abi::{
        AccountAddress,
        abi::{ArgumentABI, EntryFunctionABI, ScriptABI, TransactionScriptABI},
        errors::AbiError,
        ident_str,
        language_storage::{ModuleId, TypeTag},
    };
    use claims::{assert_matches, assert_ok, assert_some};
    use std::{fs, path::Path};

    fn write_abi(path: &Path, module: &str, arg_type: TypeTag) {
        let abi = EntryFunctionABI::new(
            ident_str!("run"),
            ModuleId::new(AccountAddress::from_hex_literal("0xcafe").unwrap(), ident_str!(module)),
            String::new(),
            vec![],
            vec![ArgumentABI::new("value".to_string(), arg_type)],
        );
        fs::write(path, abi.to_bytes()).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = assert_ok!(ToolConfig::parse_serialized_config("{}"));
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_config() {
        let config = assert_ok!(ToolConfig::parse_serialized_config(
            r#"
            log_level: debug
            max_type_depth: 8
            abi_paths:
              - build/abis
            "#
        ));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_type_depth, 8);
        assert_eq!(config.abi_paths, vec![Path::new("build/abis").to_path_buf()]);
    }

    #[test]
    fn test_invalid_configs() {
        assert_matches!(
            ToolConfig::parse_serialized_config("log_levle: debug"),
            Err(Error::Yaml(..))
        );
        assert_matches!(
            ToolConfig::parse_serialized_config("max_type_depth: 0"),
            Err(Error::Invalid(_))
        );
        assert_matches!(
            ToolConfig::parse_serialized_config("max_type_depth: 65"),
            Err(Error::Invalid(_))
        );
        assert_matches!(
            ToolConfig::load_config("/does/not/exist.yaml"),
            Err(Error::IO(..))
        );
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: trace\n").unwrap();
        let config = assert_ok!(ToolConfig::load_config(&path));
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.abi_paths, Vec::<std::path::PathBuf>::new());
    }

    #[test]
    fn test_registry_with_extra_abis() {
        let dir = tempfile::tempdir().unwrap();
        write_abi(&dir.path().join("a.abi"), "game", TypeTag::U64);
        write_abi(&dir.path().join("b.abi"), "shop", TypeTag::Bool);
        fs::write(dir.path().join("notes.txt"), "not an abi").unwrap();
        let script = ScriptABI::TransactionScript(TransactionScriptABI::new(
            "main".to_string(),
            vec![],
            String::new(),
            vec![],
            vec![],
        ));
        let script_path = dir.path().join("script.abi");
        fs::write(&script_path, script.to_bytes()).unwrap();

        let config = ToolConfig {
            abi_paths: vec![dir.path().to_path_buf()],
            ..ToolConfig::default()
        };
        let registry = assert_ok!(config.build_registry());
        assert_eq!(registry.len(), aptos_abi::builtin_registry().len() + 2);
        let game = assert_some!(assert_ok!(registry.get_by_id("0xcafe::game::run")));
        assert_eq!(game.args()[0].type_tag(), &TypeTag::U64);
        assert_some!(assert_ok!(registry.get_by_id("0x1::coin::transfer")));
    }

    #[test]
    fn test_depth_limit_applies_to_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.abi");
        write_abi(&path, "deep", TypeTag::vector(TypeTag::vector(TypeTag::U8)));

        let config = ToolConfig {
            max_type_depth: 2,
            abi_paths: vec![path.clone()],
            ..ToolConfig::default()
        };
        assert_matches!(
            config.build_registry(),
            Err(Error::Abi(_, AbiError::MaxDepthExceeded(2)))
        );
        assert_ok!(ToolConfig::default().read_abi_file(&path));
    }
}
