//! Lock-guarded handle to a [`StockTicker`] for callers that share one ticker across threads.
use std::sync::{Arc, Mutex, MutexGuard};

use eyre::{Result, WrapErr};

use crate::{
    observer::PriceObserver,
    price::Price,
    subject::{DispatchPolicy, StockTicker},
};

/// Every operation holds the same lock for its whole duration, including the full
/// notification pass of `set_price`. Observers must not call back into the handle that is
/// notifying them, the lock is not re-entrant.
#[derive(Clone, Default)]
pub struct SharedStockTicker {
    ticker: Arc<Mutex<StockTicker>>,
}

impl SharedStockTicker {
    pub fn new(ticker: StockTicker) -> Self {
        Self {
            ticker: Arc::new(Mutex::new(ticker)),
        }
    }

    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self::new(StockTicker::with_policy(policy))
    }

    fn lock(&self) -> Result<MutexGuard<'_, StockTicker>> {
        self.ticker
            .lock()
            .map_err(|_| eyre::eyre!("Stock ticker lock poisoned"))
    }

    pub fn attach(&self, observer: Arc<dyn PriceObserver>) -> Result<()> {
        self.lock()?.attach(observer);
        Ok(())
    }

    pub fn detach(&self, observer: &Arc<dyn PriceObserver>) -> Result<bool> {
        Ok(self.lock()?.detach(observer))
    }

    pub fn set_price(&self, price: Price) -> Result<()> {
        self.lock()?
            .set_price(price)
            .wrap_err_with(|| format!("Failed to notify observers of price {}", price))
    }

    pub fn price(&self) -> Result<Price> {
        Ok(self.lock()?.price())
    }

    pub fn observer_count(&self) -> Result<usize> {
        Ok(self.lock()?.observer_count())
    }
}
