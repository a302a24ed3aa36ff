//! Core components of the `stock-tracker` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`TrackerError`] type.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`TrackerError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{API_KEY_ENV, AvClient, AvClientBuilder};
pub use error::TrackerError;
