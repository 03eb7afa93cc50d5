use alloy_primitives::{Address, U256};

use crate::errors::CompositionFetchReason;

/// Composition of a set exactly as returned by the decomposer contract.
///
/// `components`, `units` and `prices` are parallel: index *i* of each refers
/// to the same underlying asset. Nothing enforces that at construction; call
/// [`check_lengths`](Self::check_lengths) before indexing across them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawComposition {
    /// Component token addresses, in contract order
    pub components: Vec<Address>,
    /// Units of each component per set, in the component's smallest unit
    pub units: Vec<U256>,
    /// Price of each component, fixed-point
    pub prices: Vec<U256>,
    /// Price of one whole set, fixed-point
    pub set_price: U256,
}

impl RawComposition {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Fails if the parallel sequences disagree in length.
    pub fn check_lengths(&self) -> Result<(), CompositionFetchReason> {
        let components = self.components.len();
        if self.units.len() != components || self.prices.len() != components {
            return Err(CompositionFetchReason::LengthMismatch {
                components,
                units: self.units.len(),
                prices: self.prices.len(),
            });
        }
        Ok(())
    }
}
