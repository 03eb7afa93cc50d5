//! Blockchain read collaborators.
//!
//! This module contains:
//! - The [`CompositionSource`] and [`AssetMetadataResolver`] traits the composer depends on
//! - [`JsonRpcClient`], the shared `eth_call` transport
//! - [`DecomposerContract`] and [`Erc20MetadataResolver`], the on-chain implementations

mod abi;
mod decomposer;
mod erc20;
mod rpc;
mod traits;

pub use decomposer::DecomposerContract;
pub use erc20::Erc20MetadataResolver;
pub use rpc::JsonRpcClient;
pub use traits::{AssetMetadataResolver, CompositionSource};
