//! Raw composition reads from the decomposer contract.

use std::sync::Arc;

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use tracing::debug;

use super::abi::ITokenSetsDecomposer::decomposeAndPriceSetCall;
use super::rpc::JsonRpcClient;
use super::traits::CompositionSource;
use crate::errors::ChainError;
use crate::models::{RawComposition, SetIdentifier};

const DECOMPOSE_AND_PRICE_SET: &str = "decomposeAndPriceSet(address)";

/// [`CompositionSource`] backed by a deployed decomposer contract.
pub struct DecomposerContract {
    rpc: Arc<JsonRpcClient>,
    address: Address,
}

impl DecomposerContract {
    pub fn new(rpc: Arc<JsonRpcClient>, address: Address) -> Self {
        Self { rpc, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl CompositionSource for DecomposerContract {
    async fn fetch_composition(&self, set: &SetIdentifier) -> Result<RawComposition, ChainError> {
        let call = decomposeAndPriceSetCall {
            tokenSet: set.address(),
        };
        let data = self.rpc.call(self.address, call.abi_encode()).await?;
        if data.is_empty() {
            return Err(ChainError::MissingInterface {
                address: self.address,
                call: DECOMPOSE_AND_PRICE_SET,
            });
        }

        let ret = decomposeAndPriceSetCall::abi_decode_returns(&data, true).map_err(|e| {
            ChainError::Decode {
                address: self.address,
                call: DECOMPOSE_AND_PRICE_SET,
                message: e.to_string(),
            }
        })?;

        debug!(
            "Decomposer returned {} components for {}",
            ret.components.len(),
            set
        );

        Ok(RawComposition {
            components: ret.components,
            units: ret.units,
            prices: ret.prices,
            set_price: ret.setPrice,
        })
    }
}
