use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A stock price as pushed to observers.
/// No validation happens at this layer, NaN and negative values are passed through as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub value: f64,
}

impl Price {
    pub fn new(value: f64) -> Self {
        Price { value }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price { value }
    }
}

// Debug formatting of f64 keeps a trailing ".0" on integral values, so 100 renders as "100.0"
// and 101.5 as "101.5".
impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)
    }
}
