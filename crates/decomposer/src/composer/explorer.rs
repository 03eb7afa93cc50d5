use alloy_primitives::Address;

/// Builds block explorer links for token addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerLinks {
    base_url: String,
}

impl ExplorerLinks {
    pub const DEFAULT_BASE_URL: &'static str = "https://etherscan.io";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/token/{checksummed address}`
    pub fn token_url(&self, address: &Address) -> String {
        format!("{}/token/{}", self.base_url, address)
    }
}

impl Default for ExplorerLinks {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
