//! Token metadata resolution through the fungible token read interface.

use std::sync::Arc;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use tracing::debug;

use super::abi::IERC20Metadata::{decimalsCall, symbolCall};
use super::rpc::JsonRpcClient;
use super::traits::AssetMetadataResolver;
use crate::errors::ChainError;
use crate::models::AssetMetadata;

const SYMBOL: &str = "symbol()";
const DECIMALS: &str = "decimals()";

/// Reads `symbol()` and `decimals()` from a token contract.
///
/// Holds no per-call state, so one instance serves any number of concurrent
/// lookups.
pub struct Erc20MetadataResolver {
    rpc: Arc<JsonRpcClient>,
}

impl Erc20MetadataResolver {
    pub fn new(rpc: Arc<JsonRpcClient>) -> Self {
        Self { rpc }
    }

    async fn symbol(&self, address: Address) -> Result<String, ChainError> {
        let data = self.rpc.call(address, symbolCall {}.abi_encode()).await?;
        let data = non_empty(address, SYMBOL, data)?;
        symbolCall::abi_decode_returns(&data, true)
            .map(|ret| ret._0)
            .map_err(|e| ChainError::Decode {
                address,
                call: SYMBOL,
                message: e.to_string(),
            })
    }

    async fn decimals(&self, address: Address) -> Result<u8, ChainError> {
        let data = self.rpc.call(address, decimalsCall {}.abi_encode()).await?;
        let data = non_empty(address, DECIMALS, data)?;
        let value = decimalsCall::abi_decode_returns(&data, true)
            .map(|ret| ret._0)
            .map_err(|e| ChainError::Decode {
                address,
                call: DECIMALS,
                message: e.to_string(),
            })?;

        u8::try_from(value).map_err(|_| ChainError::Decode {
            address,
            call: DECIMALS,
            message: format!("{} is out of range for token decimals", value),
        })
    }
}

#[async_trait]
impl AssetMetadataResolver for Erc20MetadataResolver {
    async fn resolve(&self, address: Address) -> Result<AssetMetadata, ChainError> {
        let (symbol, decimals) =
            futures::try_join!(self.symbol(address), self.decimals(address))?;
        debug!("Resolved {} as {} ({} decimals)", address, symbol, decimals);
        Ok(AssetMetadata { symbol, decimals })
    }
}

/// Accounts and contracts without the function answer a call with no data.
fn non_empty(address: Address, call: &'static str, data: Bytes) -> Result<Bytes, ChainError> {
    if data.is_empty() {
        return Err(ChainError::MissingInterface { address, call });
    }
    Ok(data)
}
