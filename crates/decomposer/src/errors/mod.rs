//! Error types for the decomposer crate.
//!
//! This module provides:
//! - [`DecomposeError`]: The error returned by a decomposition, one of three kinds
//! - [`ChainError`]: Failures of the underlying contract reads

mod chain;

pub use chain::ChainError;

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::decimal::InvalidDecimals;
use crate::models::SetIdentifier;

/// The three ways a decomposition can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CompositionFetch,
    MetadataFetch,
    InvalidDecimals,
}

/// Why the raw composition of a set could not be obtained.
#[derive(Error, Debug)]
pub enum CompositionFetchReason {
    /// The contract read itself failed.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The parallel sequences returned by the contract disagree in length.
    #[error(
        "length mismatch: {components} components, {units} units, {prices} prices"
    )]
    LengthMismatch {
        components: usize,
        units: usize,
        prices: usize,
    },
}

/// Errors surfaced by [`SetComposer::decompose`](crate::SetComposer::decompose).
///
/// A decomposition either returns a fully populated report or one of these;
/// there is no partial result.
#[derive(Error, Debug)]
pub enum DecomposeError {
    /// The raw composition could not be fetched or was structurally invalid.
    #[error("Failed to fetch composition of {set}: {reason}")]
    CompositionFetch {
        /// The set being decomposed
        set: SetIdentifier,
        #[source]
        reason: CompositionFetchReason,
    },

    /// Symbol or decimals lookup failed for a component or for the set itself.
    #[error("Failed to fetch metadata for {address}: {source}")]
    MetadataFetch {
        /// The asset whose metadata could not be read
        address: Address,
        source: ChainError,
    },

    /// A raw amount could not be scaled by the reported decimals.
    #[error("Cannot normalize {raw}: {source}")]
    InvalidDecimals {
        /// The raw amount being converted
        raw: U256,
        source: InvalidDecimals,
    },
}

impl DecomposeError {
    /// Returns the failure kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CompositionFetch { .. } => ErrorKind::CompositionFetch,
            Self::MetadataFetch { .. } => ErrorKind::MetadataFetch,
            Self::InvalidDecimals { .. } => ErrorKind::InvalidDecimals,
        }
    }
}
