use serde::{Deserialize, Serialize};

/// Display metadata of a fungible token, read from its `symbol()` and
/// `decimals()` functions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub symbol: String,
    pub decimals: u8,
}

impl AssetMetadata {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}
