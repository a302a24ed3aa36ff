use chrono::Utc;

use crate::{
    core::{AvClient, TrackerError},
    quote::{
        model::Quote,
        wire::{GlobalQuoteEnvelope, GlobalQuoteNode},
    },
};

pub(super) async fn fetch_global_quote(
    client: &AvClient,
    symbol: &str,
) -> Result<Quote, TrackerError> {
    let mut url = client.base_url().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("function", "GLOBAL_QUOTE");
        qp.append_pair("symbol", symbol);
        qp.append_pair("apikey", client.api_key());
    }

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(TrackerError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let envelope: GlobalQuoteEnvelope = serde_json::from_str(&body)?;

    // A rejected or placeholder API key answers 200 with a body that lacks
    // this object, so it surfaces the same way a malformed response does.
    let node = envelope.global_quote.ok_or_else(|| {
        TrackerError::MissingData(format!("no Global Quote object for symbol {symbol}"))
    })?;

    node_to_quote(node, symbol)
}

fn node_to_quote(node: GlobalQuoteNode, fallback_symbol: &str) -> Result<Quote, TrackerError> {
    let price = parse_numeric(node.price, "05. price")?;
    let change = parse_numeric(node.change, "09. change")?;
    let change_percent = node
        .change_percent
        .ok_or_else(|| TrackerError::Data("missing field `10. change percent`".into()))?
        .trim_end_matches('%')
        .to_string();

    Ok(Quote {
        symbol: node
            .symbol
            .unwrap_or_else(|| fallback_symbol.to_string()),
        price,
        change,
        change_percent,
        timestamp: Utc::now(),
    })
}

fn parse_numeric(value: Option<String>, key: &str) -> Result<f64, TrackerError> {
    let raw = value.ok_or_else(|| TrackerError::Data(format!("missing field `{key}`")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TrackerError::Data(format!("non-numeric content in `{key}`: {raw:?}")))
}
