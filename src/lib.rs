//! stock-tracker: one-shot Alpha Vantage quote snapshot for a single symbol.
//!
//! The pipeline is linear: fetch a `GLOBAL_QUOTE` snapshot, render it for the
//! operator, and persist it as an indented JSON file that is fully replaced
//! on every run.

pub mod core;
pub mod quote;
pub mod report;
pub mod store;

pub use crate::core::{AvClient, AvClientBuilder, TrackerError};
pub use crate::quote::{Quote, QuoteBuilder};
