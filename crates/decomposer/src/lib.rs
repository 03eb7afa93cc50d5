//! TokenSet Decomposer Crate
//!
//! Queries a decomposer contract for the composition of a basket-style token
//! ("set"), resolves display metadata for every component and for the set
//! itself, and turns all raw on-chain integers into exact decimal strings.
//!
//! # Architecture
//!
//! ```text
//!                      +------------------+
//!   SetIdentifier ---> |   SetComposer    |
//!                      +------------------+
//!                        |              |
//!                        v              v
//!          +-------------------+  +-----------------------+
//!          | CompositionSource |  | AssetMetadataResolver |   (one call + fan-out)
//!          +-------------------+  +-----------------------+
//!                        |              |
//!                        v              v
//!                      +------------------+
//!                      |  JsonRpcClient   |  (eth_call against "latest")
//!                      +------------------+
//!
//!   RawComposition + AssetMetadata --to_decimal--> CompositionReport
//! ```
//!
//! # Core Types
//!
//! - [`SetIdentifier`] - Address of the set being decomposed
//! - [`RawComposition`] - Parallel component/unit/price sequences as returned on-chain
//! - [`AssetMetadata`] - Symbol and decimal precision of a token
//! - [`CompositionReport`] - Display-ready, fully normalized composition
//! - [`DecomposeError`] - The three failure kinds a decomposition can end in

pub mod composer;
pub mod decimal;
pub mod errors;
pub mod models;
pub mod provider;

pub use composer::{ExplorerLinks, SetComposer, DEFAULT_PRICE_DECIMALS};
pub use decimal::{to_decimal, InvalidDecimals, MAX_DECIMALS};
pub use errors::{ChainError, CompositionFetchReason, DecomposeError, ErrorKind};
pub use models::{
    AssetMetadata, ComponentEntry, CompositionReport, ParseSetIdentifierError, RawComposition,
    SetIdentifier,
};
pub use provider::{
    AssetMetadataResolver, CompositionSource, DecomposerContract, Erc20MetadataResolver,
    JsonRpcClient,
};

// Chain primitives used throughout the public API.
pub use alloy_primitives::{Address, U256};
