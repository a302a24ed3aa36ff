use std::path::Path;
use std::process::ExitCode;

use stock_tracker::{AvClient, Quote, QuoteBuilder, TrackerError, report, store};

const SYMBOL: &str = "AAPL";

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt::init();

    println!("{SYMBOL} Stock Tracker");
    println!("{}", "-".repeat(20));

    let quote = match fetch(SYMBOL).await {
        Ok(q) => Some(q),
        Err(e) => {
            eprintln!("Error fetching {SYMBOL} price: {e}");
            None
        }
    };

    println!("{}", report::render(quote.as_ref()));

    if let Some(q) = &quote {
        let path = Path::new(store::DEFAULT_PATH);
        match store::save_quote(q, path) {
            Ok(()) => println!("Data saved to {}", path.display()),
            Err(e) => eprintln!("Error saving data: {e}"),
        }
    }

    // Every failure is reported above; the process always exits cleanly.
    ExitCode::SUCCESS
}

async fn fetch(symbol: &str) -> Result<Quote, TrackerError> {
    let client = AvClient::from_env()?;
    QuoteBuilder::new(&client, symbol).fetch().await
}
