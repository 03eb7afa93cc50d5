//! Decomposer models
//!
//! - `types` - Set identity (SetIdentifier)
//! - `composition` - Raw on-chain composition (RawComposition)
//! - `metadata` - Token display metadata (AssetMetadata)
//! - `report` - Normalized output (ComponentEntry, CompositionReport)

mod composition;
mod metadata;
mod report;
mod types;

pub use composition::RawComposition;
pub use metadata::AssetMetadata;
pub use report::{ComponentEntry, CompositionReport};
pub use types::{ParseSetIdentifierError, SetIdentifier};
