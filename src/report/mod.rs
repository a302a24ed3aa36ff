//! Text rendering of a snapshot (or its absence) for the operator.

use crate::quote::Quote;

const SEPARATOR_WIDTH: usize = 40;

/// Render a quote as a multi-line block, or the fixed no-data line when none
/// was obtained.
///
/// Deterministic for a given input; the only varying part is the capture
/// timestamp already embedded in the quote. Price and change are always
/// rendered with exactly two decimal places.
pub fn render(quote: Option<&Quote>) -> String {
    match quote {
        Some(q) => render_quote(q),
        None => "No stock data available".to_string(),
    }
}

fn render_quote(q: &Quote) -> String {
    format!(
        "\n=== {} Stock Information ===\n\
         Current Price: ${:.2}\n\
         Change: ${:.2} ({}%)\n\
         Last Updated: {}\n\
         {}",
        q.symbol,
        q.price,
        q.change,
        q.change_percent,
        q.timestamp.to_rfc3339(),
        "=".repeat(SEPARATOR_WIDTH),
    )
}
