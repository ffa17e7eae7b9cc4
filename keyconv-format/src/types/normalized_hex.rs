use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the "0x" marker is removed from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefixPolicy {
    /// Remove every "0x" in the lowercased input, wherever it appears.
    #[serde(rename = "all")]
    StripAll,
    /// Remove a single "0x" at the start of the lowercased input.
    #[serde(rename = "leading")]
    Leading,
}

impl Default for PrefixPolicy {
    fn default() -> Self {
        Self::StripAll
    }
}

impl FromStr for PrefixPolicy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(Self::StripAll),
            "leading" => Ok(Self::Leading),
            _ => Err(Error::UnknownPrefixPolicy(value.to_owned())),
        }
    }
}

impl fmt::Display for PrefixPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StripAll => f.write_str("all"),
            Self::Leading => f.write_str("leading"),
        }
    }
}

/// Lowercased key input with the "0x" marker removed.
///
/// No validation happens here; a `NormalizedHex` may have any length and
/// contain any characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Deref)]
pub struct NormalizedHex(String);

impl NormalizedHex {
    pub fn new(input: &str, policy: PrefixPolicy) -> Self {
        let mut value = input.to_lowercase();

        match policy {
            // Removing "0x" can join a new "0x" (e.g. "00xx"), so repeat until none is left.
            PrefixPolicy::StripAll => {
                while value.contains("0x") {
                    value = value.replace("0x", "");
                }
            }
            PrefixPolicy::Leading => {
                if value.starts_with("0x") {
                    value.replace_range(..2, "");
                }
            }
        }

        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
