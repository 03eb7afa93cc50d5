//! Errors raised by the blockchain read collaborators.

use alloy_primitives::Address;
use thiserror::Error;

/// Errors that can occur while reading contract state over JSON-RPC.
///
/// These never reach the caller of a decomposition directly; the composer
/// wraps them into [`DecomposeError`](super::DecomposeError).
#[derive(Error, Debug)]
pub enum ChainError {
    /// The request to the RPC endpoint timed out.
    #[error("Timeout: {method}")]
    Timeout {
        /// The JSON-RPC method that timed out
        method: String,
    },

    /// The HTTP request could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("RPC endpoint returned HTTP {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// The node answered with a JSON-RPC error object (reverts included).
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// The response envelope was not valid JSON-RPC.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// The call returned no data: the address has no code or does not
    /// implement the requested read interface.
    #[error("{address} does not implement {call}")]
    MissingInterface {
        /// The contract that was called
        address: Address,
        /// The contract function that was called
        call: &'static str,
    },

    /// The call returned data that does not match the expected ABI.
    #[error("Failed to decode {call} from {address}: {message}")]
    Decode {
        /// The contract that was called
        address: Address,
        /// The contract function that was called
        call: &'static str,
        /// Decoder error message
        message: String,
    },
}

impl ChainError {
    /// Whether repeating the same read could succeed.
    ///
    /// The decomposer never retries; this is a hint for callers that wrap it
    /// in their own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport(_) => true,
            Self::Http { status } => *status == 429 || *status >= 500,
            Self::Rpc { .. }
            | Self::InvalidResponse(_)
            | Self::MissingInterface { .. }
            | Self::Decode { .. } => false,
        }
    }
}
