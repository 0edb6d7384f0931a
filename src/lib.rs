//! # Homework Status Bot
//!
//! A Telegram bot that polls the Practicum homework review API on a fixed
//! interval and reports review status changes to a single chat.
//!
//! ## Pipeline
//! - Incremental fetch keyed by a UNIX timestamp cursor
//! - Shape validation of the API payload
//! - Status-to-verdict translation into a Russian notification text
//! - Per-homework and per-error deduplication so repeated polls stay quiet

/// HTTP client for the homework status endpoint
pub mod api;
/// Environment-based configuration
pub mod config;
/// Typed error taxonomy and crate `Result`
pub mod error;
/// Response validation and status parsing
pub mod homework;
/// Telegram delivery behind a mockable trait
pub mod notifier;
/// The polling loop and its dedup cache
pub mod watcher;
