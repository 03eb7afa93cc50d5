use std::sync::Arc;

use alloy_primitives::{Address, U256};
use futures::future::try_join_all;
use tracing::{debug, warn};

use super::explorer::ExplorerLinks;
use crate::decimal::to_decimal;
use crate::errors::{CompositionFetchReason, DecomposeError};
use crate::models::{
    AssetMetadata, ComponentEntry, CompositionReport, RawComposition, SetIdentifier,
};
use crate::provider::{AssetMetadataResolver, CompositionSource};

/// Fixed-point precision of the prices returned by the decomposer contract,
/// independent of each component's own decimals.
pub const DEFAULT_PRICE_DECIMALS: u32 = 18;

const DEFAULT_PRICE_DENOMINATION: &str = "ETH";

/// Orchestrates one decomposition per [`decompose`](Self::decompose) call.
///
/// Collaborators are injected once and shared across calls; the composer
/// itself holds no mutable state, so concurrent decompositions are
/// independent of each other.
pub struct SetComposer {
    source: Arc<dyn CompositionSource>,
    resolver: Arc<dyn AssetMetadataResolver>,
    explorer: ExplorerLinks,
    price_decimals: u32,
    price_denomination: String,
}

impl SetComposer {
    pub fn new(
        source: Arc<dyn CompositionSource>,
        resolver: Arc<dyn AssetMetadataResolver>,
    ) -> Self {
        Self {
            source,
            resolver,
            explorer: ExplorerLinks::default(),
            price_decimals: DEFAULT_PRICE_DECIMALS,
            price_denomination: DEFAULT_PRICE_DENOMINATION.to_string(),
        }
    }

    pub fn with_explorer(mut self, explorer: ExplorerLinks) -> Self {
        self.explorer = explorer;
        self
    }

    /// Override the fixed-point precision used for component and set prices.
    pub fn with_price_decimals(mut self, price_decimals: u32) -> Self {
        self.price_decimals = price_decimals;
        self
    }

    pub fn with_price_denomination(mut self, denomination: impl Into<String>) -> Self {
        self.price_denomination = denomination.into();
        self
    }

    /// Fetch, resolve and normalize the composition of `set`.
    ///
    /// 1. One raw composition read; parallel sequence lengths must agree.
    /// 2. Metadata for every component and for the set, all concurrently.
    /// 3. Units scaled by each component's decimals, prices and the set
    ///    price by the fixed price precision.
    ///
    /// Any failure aborts the whole call. Dropping the returned future drops
    /// every outstanding lookup with it.
    pub async fn decompose(&self, set: &SetIdentifier) -> Result<CompositionReport, DecomposeError> {
        let raw = self.fetch_composition(set).await?;
        debug!("Decomposing {} into {} components", set, raw.len());

        let component_lookups = raw
            .components
            .iter()
            .map(|address| self.resolve_metadata(*address));
        let (set_metadata, component_metadata) = futures::try_join!(
            self.resolve_metadata(set.address()),
            try_join_all(component_lookups)
        )?;

        let components = raw
            .components
            .iter()
            .zip(&raw.units)
            .zip(&raw.prices)
            .zip(component_metadata)
            .map(|(((address, units), price), metadata)| {
                self.component_entry(*address, *units, *price, metadata)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let set_address = set.address();
        Ok(CompositionReport {
            set_address,
            set_symbol: set_metadata.symbol,
            set_price: normalize(raw.set_price, self.price_decimals)?,
            set_reference_url: self.explorer.token_url(&set_address),
            price_denomination: self.price_denomination.clone(),
            components,
        })
    }

    async fn fetch_composition(&self, set: &SetIdentifier) -> Result<RawComposition, DecomposeError> {
        let raw = self
            .source
            .fetch_composition(set)
            .await
            .map_err(|e| composition_error(set, e.into()))?;
        raw.check_lengths()
            .map_err(|reason| composition_error(set, reason))?;
        Ok(raw)
    }

    async fn resolve_metadata(&self, address: Address) -> Result<AssetMetadata, DecomposeError> {
        self.resolver.resolve(address).await.map_err(|source| {
            warn!("Metadata lookup failed for {}: {}", address, source);
            DecomposeError::MetadataFetch { address, source }
        })
    }

    fn component_entry(
        &self,
        address: Address,
        units: U256,
        price: U256,
        metadata: AssetMetadata,
    ) -> Result<ComponentEntry, DecomposeError> {
        Ok(ComponentEntry {
            address,
            normalized_units: normalize(units, u32::from(metadata.decimals))?,
            normalized_price: normalize(price, self.price_decimals)?,
            reference_url: self.explorer.token_url(&address),
            symbol: metadata.symbol,
        })
    }
}

fn normalize(raw: U256, decimals: u32) -> Result<String, DecomposeError> {
    to_decimal(raw, decimals).map_err(|source| DecomposeError::InvalidDecimals { raw, source })
}

fn composition_error(set: &SetIdentifier, reason: CompositionFetchReason) -> DecomposeError {
    warn!("Composition fetch failed for {}: {}", set, reason);
    DecomposeError::CompositionFetch { set: *set, reason }
}
