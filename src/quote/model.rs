use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized snapshot of a single symbol's market state.
///
/// Constructed once per successful fetch and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The ticker symbol the snapshot belongs to.
    pub symbol: String,
    /// Last trade price.
    pub price: f64,
    /// Signed price delta since the previous close.
    pub change: f64,
    /// Percentage delta since the previous close, without the `%` suffix.
    ///
    /// Kept as a string: the provider's precision is carried through losslessly
    /// and the value is only ever re-rendered, never computed with.
    pub change_percent: String,
    /// When this snapshot was captured. Set locally at fetch completion, not
    /// taken from the API.
    pub timestamp: DateTime<Utc>,
}
