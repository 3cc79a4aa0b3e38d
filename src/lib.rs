//! A small subject/observer primitive for pushing stock prices to listeners.
//!
//! [`subject::StockTicker`] keeps the current price and an ordered list of
//! [`observer::PriceObserver`]s. Every [`subject::StockTicker::set_price`] call notifies each
//! observer once, in attach order, on the caller's thread. [`observer::stock_user::StockUser`]
//! is the stock listener: it writes one message per update to an injected
//! [`notification_sink::NotificationSink`].
pub mod notification_sink;
pub mod observer;
pub mod price;
pub mod subject;
