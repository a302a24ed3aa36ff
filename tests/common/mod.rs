#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

use stock_tracker::AvClient;

pub const TEST_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client wired to the mock server's `/query` endpoint.
pub fn client_for(server: &MockServer) -> AvClient {
    AvClient::builder()
        .api_key(TEST_KEY)
        .base_url(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// A canned `GLOBAL_QUOTE` body in Alpha Vantage's wire shape.
pub fn global_quote_body(symbol: &str, price: &str, change: &str, change_percent: &str) -> String {
    format!(
        r#"{{
  "Global Quote": {{
    "01. symbol": "{symbol}",
    "02. open": "151.0000",
    "03. high": "152.0000",
    "04. low": "149.5000",
    "05. price": "{price}",
    "06. volume": "51234567",
    "07. latest trading day": "2024-05-17",
    "08. previous close": "151.3500",
    "09. change": "{change}",
    "10. change percent": "{change_percent}"
  }}
}}"#
    )
}

/// Mock the query endpoint for `symbol` with an arbitrary status and body.
pub fn mock_global_quote<'a>(
    server: &'a MockServer,
    symbol: &str,
    status: u16,
    body: String,
) -> Mock<'a> {
    let symbol = symbol.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "GLOBAL_QUOTE")
            .query_param("symbol", symbol)
            .query_param("apikey", TEST_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
