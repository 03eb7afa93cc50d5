use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of a set token.
///
/// Parses from hex with or without the `0x` prefix, in any letter case, and
/// displays in EIP-55 checksummed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetIdentifier(Address);

impl SetIdentifier {
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for SetIdentifier {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for SetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid set address '{input}': {message}")]
pub struct ParseSetIdentifierError {
    pub input: String,
    pub message: String,
}

impl FromStr for SetIdentifier {
    type Err = ParseSetIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_str(s.trim())
            .map(Self)
            .map_err(|e| ParseSetIdentifierError {
                input: s.to_string(),
                message: e.to_string(),
            })
    }
}
