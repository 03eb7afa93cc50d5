use std::time::Duration;

use anyhow::Context;
use tokenset_decomposer::{Address, ExplorerLinks, DEFAULT_PRICE_DECIMALS};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
const DEFAULT_PRICE_DENOMINATION: &str = "ETH";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub rpc_url: String,
    pub decomposer_address: Address,
    pub explorer_url: String,
    pub price_decimals: u32,
    pub price_denomination: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `TS_*` variables; load any `.env` file before calling.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rpc_url = lookup("TS_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.into());
        let decomposer_address = lookup("TS_DECOMPOSER_ADDRESS")
            .context("TS_DECOMPOSER_ADDRESS is not set")?
            .trim()
            .parse::<Address>()
            .context("Invalid TS_DECOMPOSER_ADDRESS")?;
        let explorer_url =
            lookup("TS_EXPLORER_URL").unwrap_or_else(|| ExplorerLinks::DEFAULT_BASE_URL.into());
        let price_decimals = match lookup("TS_PRICE_DECIMALS") {
            Some(value) => value
                .trim()
                .parse()
                .context("Invalid TS_PRICE_DECIMALS")?,
            None => DEFAULT_PRICE_DECIMALS,
        };
        let price_denomination = lookup("TS_PRICE_DENOMINATION")
            .unwrap_or_else(|| DEFAULT_PRICE_DENOMINATION.into());
        let timeout_ms: u64 = match lookup("TS_REQUEST_TIMEOUT_MS") {
            Some(value) => value
                .trim()
                .parse()
                .context("Invalid TS_REQUEST_TIMEOUT_MS")?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            rpc_url,
            decomposer_address,
            explorer_url,
            price_decimals,
            price_denomination,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
