//! Lexer configuration.
//!
//! [`LexerConfig`] holds the switches that change how source text is
//! tokenized. It can be built in code or loaded from a TOML file; keys that
//! are missing take their defaults.
//!
//! ```toml
//! assert_keyword_enabled = true
//! enum_keyword_enabled = false
//! include_whitespace_tokens = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "gsc-lex.toml";

/// Lexer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Treat `assert` as a keyword. When false it scans as an identifier.
    #[serde(default = "default_true")]
    pub assert_keyword_enabled: bool,

    /// Treat `enum` as a keyword. When false it scans as an identifier.
    #[serde(default = "default_true")]
    pub enum_keyword_enabled: bool,

    /// Return whitespace, raw newline and comment tokens instead of
    /// skipping them. For tooling only; a grammar parser does not expect
    /// these tokens.
    #[serde(default)]
    pub include_whitespace_tokens: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            assert_keyword_enabled: true,
            enum_keyword_enabled: true,
            include_whitespace_tokens: false,
        }
    }
}

impl LexerConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> String {
        // Three plain booleans always serialize.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Configuration for tooling that wants every character accounted for.
    pub fn with_whitespace_tokens(mut self) -> Self {
        self.include_whitespace_tokens = true;
        self
    }
}
