use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized line of a set composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub address: Address,
    pub symbol: String,
    /// Units of this component held per set, scaled by the token's decimals
    pub normalized_units: String,
    /// Price of one whole component token in the price denomination
    pub normalized_price: String,
    /// Block explorer page of the component token
    pub reference_url: String,
}

impl ComponentEntry {
    /// Value contributed to one set (`units * price`).
    ///
    /// Returns `None` when either side has more significant digits than
    /// [`Decimal`] can hold or the product overflows; the string fields stay
    /// authoritative in that case.
    pub fn value(&self) -> Option<Decimal> {
        let units = Decimal::from_str_exact(&self.normalized_units).ok()?;
        let price = Decimal::from_str_exact(&self.normalized_price).ok()?;
        units.checked_mul(price).map(|v| v.normalize())
    }
}

/// Display-ready composition of a set.
///
/// Components keep the order the decomposer contract returned them in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionReport {
    pub set_address: Address,
    pub set_symbol: String,
    /// Price of one whole set in the price denomination
    pub set_price: String,
    pub set_reference_url: String,
    /// Unit the prices are quoted in (e.g. "ETH")
    pub price_denomination: String,
    pub components: Vec<ComponentEntry>,
}

impl CompositionReport {
    /// Sum of [`ComponentEntry::value`] over all components, or `None` if any
    /// component value is not representable.
    pub fn components_value(&self) -> Option<Decimal> {
        self.components
            .iter()
            .try_fold(Decimal::ZERO, |total, entry| {
                entry.value().and_then(|v| total.checked_add(v))
            })
            .map(|v| v.normalize())
    }
}
