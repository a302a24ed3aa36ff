mod api;
mod model;
mod wire;

pub use model::Quote;

use crate::core::{AvClient, TrackerError};

/* ---------------- Public API ---------------- */

/// Fetch a single `GLOBAL_QUOTE` snapshot for `symbol` with default settings.
pub async fn quote(client: &AvClient, symbol: impl Into<String>) -> Result<Quote, TrackerError> {
    QuoteBuilder::new(client, symbol).fetch().await
}

/// Builder for a single global-quote snapshot.
pub struct QuoteBuilder<'a> {
    client: &'a AvClient,
    symbol: String,
}

impl<'a> QuoteBuilder<'a> {
    /// Creates a new `QuoteBuilder` for a given symbol.
    pub fn new(client: &'a AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
        }
    }

    /// Perform the request and normalize the response.
    ///
    /// Returns a fully populated [`Quote`] or a typed error; a partially
    /// populated snapshot is never produced.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Quote, TrackerError> {
        api::fetch_global_quote(self.client, &self.symbol).await
    }
}
