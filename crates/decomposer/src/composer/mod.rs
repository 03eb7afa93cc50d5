//! Set decomposition: raw composition in, priced report out.

mod explorer;
mod set_composer;


pub use explorer::ExplorerLinks;
pub use set_composer::{SetComposer, DEFAULT_PRICE_DECIMALS};
