use eyre::Result;

use crate::price::Price;

pub mod stock_user;

/// Anything that wants to hear about a new price.
/// An error returned from `update` is the listener's own failure; the ticker decides whether
/// the rest of the pass continues.
pub trait PriceObserver: Send + Sync {
    fn update(&self, price: Price) -> Result<()>;
}
