//! Durable storage for the latest snapshot: one JSON file, fully replaced on
//! every write. No append, no rotation, no schema versioning.

use std::fs;
use std::path::Path;

use crate::{core::TrackerError, quote::Quote};

/// Default output filename used by the binary.
pub const DEFAULT_PATH: &str = "aapl_data.json";

/// Serialize `quote` as indented JSON and write it to `path`, replacing any
/// existing content.
pub fn save_quote(quote: &Quote, path: &Path) -> Result<(), TrackerError> {
    let json = serde_json::to_string_pretty(quote)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read back a snapshot previously written by [`save_quote`].
///
/// Lossless for every scalar field of [`Quote`].
pub fn load_quote(path: &Path) -> Result<Quote, TrackerError> {
    let body = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}
