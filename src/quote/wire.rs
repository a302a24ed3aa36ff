use serde::Deserialize;

// Alpha Vantage wraps the snapshot in a "Global Quote" object whose keys
// carry ordinal prefixes. All values arrive as strings.
#[derive(Deserialize)]
pub(crate) struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    pub(crate) global_quote: Option<GlobalQuoteNode>,
}

#[derive(Deserialize, Clone)]
pub(crate) struct GlobalQuoteNode {
    #[serde(rename = "01. symbol")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "05. price")]
    pub(crate) price: Option<String>,
    #[serde(rename = "09. change")]
    pub(crate) change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub(crate) change_percent: Option<String>,
}
