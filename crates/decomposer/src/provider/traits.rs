//! Collaborator traits for the blockchain read endpoint.
//!
//! [`SetComposer`](crate::SetComposer) only talks to the chain through these
//! two traits, so tests and alternative transports can plug in their own
//! implementations.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::errors::ChainError;
use crate::models::{AssetMetadata, RawComposition, SetIdentifier};

/// Source of raw set compositions.
#[async_trait]
pub trait CompositionSource: Send + Sync {
    /// Fetch the components, units, prices and set price of `set`.
    ///
    /// Implementations return what the chain returned; length consistency is
    /// checked by the caller.
    async fn fetch_composition(&self, set: &SetIdentifier) -> Result<RawComposition, ChainError>;
}

/// Resolves the display symbol and decimal precision of a token.
///
/// Must be safe to call concurrently for distinct addresses.
#[async_trait]
pub trait AssetMetadataResolver: Send + Sync {
    async fn resolve(&self, address: Address) -> Result<AssetMetadata, ChainError>;
}
