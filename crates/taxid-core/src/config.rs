//! # Formatting Policy
//!
//! Configuration for [`Formatter`](crate::format::Formatter). A policy is an
//! explicit value, typically loaded once at startup from the host
//! application's YAML or JSON configuration and passed to the formatter.
//! Nothing in this crate reads configuration from globals or the environment.
//!
//! ```yaml
//! pad_short_input: true
//! require_valid: false
//! ```
//!
//! Missing keys take their defaults, so an empty document is the default
//! policy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the formatter treats input that is not already a well-formed,
/// valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatPolicy {
    /// Left-pad inputs shorter than the target width with zeros.
    /// When `false`, short input is a [`FormatError::TooShort`](crate::error::FormatError::TooShort).
    pub pad_short_input: bool,
    /// Reject input whose check digits do not match.
    pub require_valid: bool,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            pad_short_input: true,
            require_valid: false,
        }
    }
}

impl FormatPolicy {
    /// Only accept exact-width, checksum-valid input.
    pub fn strict() -> Self {
        Self {
            pad_short_input: false,
            require_valid: true,
        }
    }

    /// Load a policy from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML or unknown keys.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        // An empty YAML document parses as null, not as an empty mapping.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let policy: Self = serde_yaml::from_str(s)?;
        tracing::debug!(?policy, "loaded format policy from YAML");
        Ok(policy)
    }

    /// Load a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown keys.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(s)?;
        tracing::debug!(?policy, "loaded format policy from JSON");
        Ok(policy)
    }
}
