//! Assertion configuration.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming a TOML file to load the root configuration from.
pub const CONFIG_ENV: &str = "ASSERT_KIT_CONFIG";

/// Configuration shared by a test unit and its sub-tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of default failure messages.
    pub prefix: String,
    /// Stop the unit on the first failure, even for non-stop assertions.
    pub fail_fast: bool,
}

impl Config {
    /// Standard configuration.
    pub fn standard() -> Self {
        Self {
            prefix: "assert error: ".into(),
            fail_fast: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Load from a TOML file. A missing file yields the standard
    /// configuration; missing keys keep their standard values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::standard());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the file named by [`CONFIG_ENV`], if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::standard()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
