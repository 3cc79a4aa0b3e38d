//! # Stock Ticker
//! Holds the current price and pushes every new price to the attached observers, in the order
//! they were attached, on the caller's thread.

use std::sync::Arc;

use thiserror::Error;

use crate::{observer::PriceObserver, price::Price};

pub mod shared;

/// What to do with the rest of a notification pass once an observer fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Notify everyone, then report all failures together.
    #[default]
    ContinueOnFailure,
    /// Stop at the first failure. Observers after it miss this price.
    AbortOnFailure,
}

#[derive(Debug, Error)]
#[error("observer at position {position} failed: {error:#}")]
pub struct ListenerFailure {
    /// Index of the observer in the attach order at the time of the pass.
    pub position: usize,
    pub error: eyre::Report,
}

#[derive(Debug, Error)]
#[error("{} observer(s) failed to receive the new price", .failures.len())]
pub struct NotificationError {
    pub failures: Vec<ListenerFailure>,
}

#[derive(Default)]
pub struct StockTicker {
    observers: Vec<Arc<dyn PriceObserver>>,
    price: Price,
    policy: DispatchPolicy,
}

// Compares the data pointers only. Vtable pointers for the same type may differ between
// codegen units.
fn is_same_observer(a: &Arc<dyn PriceObserver>, b: &Arc<dyn PriceObserver>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

impl StockTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Appends the observer. Attaching the same observer twice makes it hear every price twice.
    pub fn attach(&mut self, observer: Arc<dyn PriceObserver>) {
        self.observers.push(observer);
        log::debug!("Attached observer, {} now attached", self.observers.len());
    }

    /// Removes the first attached occurrence of `observer`.
    /// Returns false, and leaves the list untouched, when it was not attached.
    pub fn detach(&mut self, observer: &Arc<dyn PriceObserver>) -> bool {
        match self
            .observers
            .iter()
            .position(|attached| is_same_observer(attached, observer))
        {
            Some(position) => {
                self.observers.remove(position);
                log::debug!(
                    "Detached observer at position {}, {} still attached",
                    position,
                    self.observers.len()
                );
                true
            }
            None => {
                log::debug!("Detach requested for an observer that is not attached");
                false
            }
        }
    }

    /// Stores the new price, then runs one notification pass over every attached observer.
    /// The price stays in effect even when the pass reports failures.
    pub fn set_price(&mut self, price: Price) -> Result<(), NotificationError> {
        self.price = price;
        log::debug!(
            "Notifying {} observers of new price {}",
            self.observers.len(),
            price
        );

        let mut failures = Vec::new();
        for (position, observer) in self.observers.iter().enumerate() {
            if let Err(error) = observer.update(price) {
                log::warn!(
                    "Observer at position {} failed for price {}: {:?}",
                    position,
                    price,
                    error
                );
                failures.push(ListenerFailure { position, error });
                if self.policy == DispatchPolicy::AbortOnFailure {
                    log::warn!(
                        "Aborting notification pass, {} observer(s) skipped",
                        self.observers.len() - position - 1
                    );
                    break;
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotificationError { failures })
        }
    }
}
