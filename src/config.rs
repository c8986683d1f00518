//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use ini::Ini;
use std::env;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ia_err, ModelError};
use crate::file_utils::expand_user_home;

/// Default location of the model configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "~/.ddb/model_config";
/// Default profile (ini section) read from a configuration file.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

const UNKNOWN_FIELDS: &str = "unknown_fields";
const STRICT_SYMBOLS: &str = "strict_symbols";

/// What to do when a decoded map carries a field a value object does not define.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnknownFieldPolicy {
    /// Skip the field. This is the default: servers add response fields over time.
    #[default]
    Ignore,
    /// Fail decoding with [`UnknownField`](crate::ModelErrorCode::UnknownField).
    Reject,
}

impl FromStr for UnknownFieldPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(UnknownFieldPolicy::Ignore),
            "reject" => Ok(UnknownFieldPolicy::Reject),
            _ => ia_err!(
                "invalid unknown field policy '{}': expected 'ignore' or 'reject'",
                s
            ),
        }
    }
}

/// Decode policy applied when value objects are built from decoded maps.
///
/// The default is lenient: unknown fields are skipped and symbolic fields
/// keep whatever string the server sent. Use [`ModelConfig::builder()`] to
/// change either behavior.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModelConfig {
    unknown_fields: UnknownFieldPolicy,
    strict_symbols: bool,
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }

    pub fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    /// Returns `true` if every symbolic field must hold a known vocabulary
    /// value when it is decoded.
    pub fn strict_symbols(&self) -> bool {
        self.strict_symbols
    }
}

/// Builder used to set all the parameters of a [`ModelConfig`].
///
/// Values can be given in code, read from the environment, or read from an
/// ini-style configuration file. Later calls override earlier ones:
///
/// ```no_run
/// # use ddb_model_rust_sdk::ModelConfig;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ModelConfig::builder()
///     .from_file("~/.ddb/model_config", "DEFAULT")?
///     .from_environment()?
///     .build();
/// # Ok(())
/// # }
/// ```
///
/// A configuration file looks like:
///
/// ```text
/// [DEFAULT]
/// unknown_fields = ignore
/// strict_symbols = false
///
/// [testing]
/// unknown_fields = reject
/// strict_symbols = true
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    pub fn new() -> Self {
        ModelConfigBuilder::default()
    }

    /// Set the policy for fields a value object does not define.
    pub fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.config.unknown_fields = policy;
        self
    }

    /// Require every decoded symbolic field to hold a known vocabulary value.
    pub fn strict_symbols(mut self, strict: bool) -> Self {
        self.config.strict_symbols = strict;
        self
    }

    /// Read configuration from environment variables.
    ///
    /// | Variable | Values |
    /// |---|---|
    /// | `DDB_MODEL_UNKNOWN_FIELDS` | `ignore`, `reject` |
    /// | `DDB_MODEL_STRICT_SYMBOLS` | `1`, `true`, `0`, `false` |
    ///
    /// Variables that are not set leave the current values unchanged.
    pub fn from_environment(mut self) -> Result<Self, ModelError> {
        if let Ok(val) = env::var("DDB_MODEL_UNKNOWN_FIELDS") {
            debug!("Using DDB_MODEL_UNKNOWN_FIELDS={}", val);
            self = self.unknown_fields(val.parse()?);
        }
        if let Ok(val) = env::var("DDB_MODEL_STRICT_SYMBOLS") {
            debug!("Using DDB_MODEL_STRICT_SYMBOLS={}", val);
            self = self.strict_symbols(parse_bool("DDB_MODEL_STRICT_SYMBOLS", &val)?);
        }
        Ok(self)
    }

    /// Read configuration from a profile of an ini-style file.
    ///
    /// A leading `~/` in `config_file_path` is expanded to the user's home
    /// directory. The profile section must exist; keys missing from it leave
    /// the current values unchanged.
    pub fn from_file(mut self, config_file_path: &str, profile: &str) -> Result<Self, ModelError> {
        debug!(
            "Reading model configuration from file {} and profile {}",
            config_file_path, profile
        );
        let file_path = expand_user_home(config_file_path)?;
        let config = Ini::load_from_file(&file_path)?;
        let props = match config.section(Some(profile)) {
            Some(p) => p,
            None => {
                return ia_err!(
                    "error reading model config file '{}': missing profile '{}'",
                    file_path,
                    profile
                );
            }
        };
        if let Some(val) = props.get(UNKNOWN_FIELDS) {
            self = self.unknown_fields(val.parse()?);
        }
        if let Some(val) = props.get(STRICT_SYMBOLS) {
            self = self.strict_symbols(parse_bool(STRICT_SYMBOLS, val)?);
        }
        Ok(self)
    }

    /// Read the default profile of the default configuration file.
    pub fn from_default_file(self) -> Result<Self, ModelError> {
        self.from_file(DEFAULT_CONFIG_FILE, DEFAULT_PROFILE)
    }

    pub fn build(self) -> ModelConfig {
        self.config
    }
}

fn parse_bool(name: &str, val: &str) -> Result<bool, ModelError> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => ia_err!("invalid value '{}' for {}: expected true or false", val, name),
    }
}
